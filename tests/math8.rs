mod tests {
    use serpentine_show::math8::{blend8, dim8, scale8};

    #[test]
    fn test_scale8() {
        assert_eq!(scale8(255, 128), 128);
        assert_eq!(scale8(0, 128), 0);
        assert_eq!(scale8(128, 128), 64);
        assert_eq!(scale8(128, 255), 128);
        assert_eq!(scale8(128, 0), 0);
    }

    #[test]
    fn test_scale8_full_is_identity() {
        for value in 0..=255u8 {
            assert_eq!(scale8(value, 255), value);
        }
    }

    #[test]
    fn test_blend8() {
        assert_eq!(blend8(255, 128, 128), 191);
        assert_eq!(blend8(0, 128, 255), 128);
        assert_eq!(blend8(255, 0, 128), 127);
        assert_eq!(blend8(255, 128, 0), 255);
    }

    #[test]
    fn test_dim8() {
        assert_eq!(dim8(100, 0), 100);
        assert_eq!(dim8(255, 1), 254);
        assert_eq!(dim8(1, 1), 0);
        assert_eq!(dim8(200, 255), 0);
    }
}
