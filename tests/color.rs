mod tests {
    use serpentine_show::color::{
        BLACK, RAINBOW_COLORS, Rgb, blend_colors, color_from_palette, hsv, sample_gradient,
    };
    use serpentine_show::filter::BrightnessFilter;

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    #[test]
    fn test_blend_colors() {
        assert_eq!(blend_colors(RED, BLUE, 0), RED);
        assert_eq!(blend_colors(RED, BLUE, 255), BLUE);
        assert_eq!(
            blend_colors(RED, BLUE, 128),
            Rgb {
                r: 127,
                g: 0,
                b: 128
            }
        );
        assert_eq!(blend_colors(WHITE, BLACK, 255), BLACK);
    }

    #[test]
    fn test_rainbow_palette_entries() {
        assert_eq!(color_from_palette(&RAINBOW_COLORS, 0), RED);
        assert_eq!(
            color_from_palette(&RAINBOW_COLORS, 16),
            Rgb {
                r: 0xD5,
                g: 0x2A,
                b: 0
            }
        );
        assert_eq!(color_from_palette(&RAINBOW_COLORS, 160), BLUE);
    }

    #[test]
    fn test_rainbow_palette_blends_between_entries() {
        assert_eq!(
            color_from_palette(&RAINBOW_COLORS, 8),
            Rgb {
                r: 234,
                g: 21,
                b: 0
            }
        );
    }

    #[test]
    fn test_rainbow_palette_wraps_to_first_entry() {
        assert_eq!(
            color_from_palette(&RAINBOW_COLORS, 255),
            Rgb {
                r: 253,
                g: 0,
                b: 3
            }
        );
    }

    #[test]
    fn test_sample_gradient() {
        let stops = [BLACK, WHITE];
        assert_eq!(sample_gradient(&stops, 0), BLACK);
        assert_eq!(sample_gradient(&stops, 255), WHITE);
        assert_eq!(sample_gradient(&[RED], 77), RED);
        assert_eq!(sample_gradient(&[], 77), BLACK);
    }

    #[test]
    fn test_hsv_zero_value_is_black() {
        for hue in [0, 64, 128, 200] {
            assert_eq!(hsv(hue, 255, 0), BLACK);
        }
    }

    #[test]
    fn test_brightness_filter_scales_copy() {
        let frame = [WHITE, Rgb::new(200, 100, 0)];
        let mut output = [BLACK; 2];

        BrightnessFilter::new(255).apply(&frame, &mut output);
        assert_eq!(output, frame);

        BrightnessFilter::new(128).apply(&frame, &mut output);
        assert_eq!(output[0], Rgb::new(128, 128, 128));
        assert_eq!(output[1], Rgb::new(100, 50, 0));
        assert_eq!(frame[0], WHITE);
    }
}
