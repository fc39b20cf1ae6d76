mod tests {
    use embassy_time::{Duration, Instant};
    use serpentine_show::color::Rgb;
    use serpentine_show::config::FadeConfig;
    use serpentine_show::grid::PixelGrid;
    use serpentine_show::transition::{FadeProgress, FadeTransition};

    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    fn config(steps: u16) -> FadeConfig {
        FadeConfig {
            duration: Duration::from_millis(3000),
            steps,
        }
    }

    fn white_grid() -> PixelGrid<12, 3, 4> {
        let mut grid = PixelGrid::new();
        grid.fill(WHITE);
        grid
    }

    #[test]
    fn test_interval_splits_window() {
        assert_eq!(
            FadeTransition::new(&config(250)).interval(),
            Duration::from_millis(12)
        );
        assert_eq!(
            FadeTransition::new(&config(1)).interval(),
            Duration::from_millis(3000)
        );
    }

    #[test]
    fn test_fade_is_gradual() {
        let mut grid = white_grid();
        let mut fade = FadeTransition::new(&config(250));
        fade.start(Instant::from_millis(0));

        assert_eq!(fade.advance(Instant::from_millis(0), &mut grid), FadeProgress::Fading);
        assert_eq!(grid.get(0, 0), WHITE);
        assert_eq!(fade.faded(), 0);

        assert_eq!(
            fade.advance(Instant::from_millis(1500), &mut grid),
            FadeProgress::Fading
        );
        assert_eq!(fade.faded(), 127);
        assert_eq!(grid.get(0, 0).r, 128);
    }

    #[test]
    fn test_default_fade_spans_whole_window() {
        let mut grid = white_grid();
        let mut fade = FadeTransition::new(&FadeConfig::default());
        fade.start(Instant::from_millis(0));

        let mut previous = 255;
        for t in 0..3000 {
            assert_eq!(fade.advance(Instant::from_millis(t), &mut grid), FadeProgress::Fading);
            let level = grid.get(0, 0).r;
            assert!(level <= previous);
            assert!(level > 0, "dark at {t}ms");
            previous = level;
        }
        assert_eq!(
            fade.advance(Instant::from_millis(3000), &mut grid),
            FadeProgress::Complete
        );
        assert!(grid.is_dark());
        assert_eq!(fade.faded(), 255);
    }

    #[test]
    fn test_fade_completes_exactly_at_boundary() {
        let mut grid = white_grid();
        let mut fade = FadeTransition::new(&config(255));
        fade.start(Instant::from_millis(1000));

        let mut t = 1000;
        while t < 4000 {
            assert_eq!(
                fade.advance(Instant::from_millis(t), &mut grid),
                FadeProgress::Fading
            );
            t += 8;
        }
        assert_eq!(
            fade.advance(Instant::from_millis(3999), &mut grid),
            FadeProgress::Fading
        );
        assert_eq!(
            fade.advance(Instant::from_millis(4000), &mut grid),
            FadeProgress::Complete
        );
        assert!(grid.is_dark());
    }

    #[test]
    fn test_slow_frames_leave_no_glow() {
        let mut grid = white_grid();
        let mut fade = FadeTransition::new(&config(250));
        fade.start(Instant::from_millis(0));

        for t in [0, 1000, 2000] {
            assert_eq!(fade.advance(Instant::from_millis(t), &mut grid), FadeProgress::Fading);
        }
        assert!(!grid.is_dark());
        assert_eq!(
            fade.advance(Instant::from_millis(3000), &mut grid),
            FadeProgress::Complete
        );
        assert!(grid.is_dark());
    }

    #[test]
    fn test_brightness_never_increases() {
        let mut grid = white_grid();
        grid.set(1, 1, Rgb::new(3, 0, 90));
        let mut fade = FadeTransition::new(&config(100));
        fade.start(Instant::from_millis(0));

        let mut previous = *grid.leds();
        for t in (0..=3000).step_by(7) {
            fade.advance(Instant::from_millis(t), &mut grid);
            for (now, before) in grid.leds().iter().zip(previous.iter()) {
                assert!(now.r <= before.r && now.g <= before.g && now.b <= before.b);
            }
            previous = *grid.leds();
        }
        assert!(grid.is_dark());
    }

    #[test]
    fn test_restart_resets_progress() {
        let mut grid = white_grid();
        let mut fade = FadeTransition::new(&config(250));
        fade.start(Instant::from_millis(0));
        fade.advance(Instant::from_millis(3000), &mut grid);

        grid.fill(WHITE);
        fade.start(Instant::from_millis(5000));
        assert_eq!(fade.started_at(), Instant::from_millis(5000));
        assert_eq!(fade.advance(Instant::from_millis(5000), &mut grid), FadeProgress::Fading);
        assert_eq!(grid.get(0, 0), WHITE);
    }
}
