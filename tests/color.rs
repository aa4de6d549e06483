mod tests {
    use neopixel_strip::{Color, Rgb, color_hsv, lerp8, lerp_color, scale8};

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };

    #[test]
    fn test_scale8() {
        assert_eq!(scale8(255, 128), 128);
        assert_eq!(scale8(0, 128), 0);
        assert_eq!(scale8(128, 128), 64);
        assert_eq!(scale8(128, 255), 128);
        assert_eq!(scale8(128, 0), 0);
    }

    #[test]
    fn test_lerp8_endpoints_exact() {
        for (a, b) in [(0u8, 255u8), (255, 0), (17, 230), (200, 200)] {
            assert_eq!(lerp8(a, b, 0, 9), a);
            assert_eq!(lerp8(a, b, 9, 9), b);
        }
    }

    #[test]
    fn test_lerp8_rounds_half_away_from_zero() {
        assert_eq!(lerp8(10, 20, 1, 2), 15);
        assert_eq!(lerp8(0, 255, 1, 2), 128);
        assert_eq!(lerp8(255, 0, 1, 2), 127);
    }

    #[test]
    fn test_lerp8_zero_denominator_is_start() {
        assert_eq!(lerp8(42, 99, 0, 0), 42);
        assert_eq!(lerp8(42, 99, 3, 0), 42);
    }

    #[test]
    fn test_lerp_color_preserves_white_only_when_both_carry_it() {
        let a = Color::Rgbw(RED, 0);
        let b = Color::Rgbw(BLUE, 100);
        assert_eq!(lerp_color(a, b, 1, 2), Color::Rgbw(Rgb { r: 128, g: 0, b: 127 }, 50));

        let mixed = lerp_color(Color::Rgb(RED), b, 1, 2);
        assert_eq!(mixed.white(), None);
    }

    #[test]
    fn test_hsv_thirds_are_pure_primaries() {
        assert_eq!(color_hsv(0, 255, 255), RED);
        assert_eq!(color_hsv(21845, 255, 255), GREEN);
        assert_eq!(color_hsv(43690, 255, 255), BLUE);
    }

    #[test]
    fn test_hsv_wheel_wraps_back_to_red() {
        assert_eq!(color_hsv(65535, 255, 255), RED);
    }

    #[test]
    fn test_hsv_zero_saturation_is_grayscale() {
        for hue in [0u16, 12345, 33333, 65535] {
            assert_eq!(color_hsv(hue, 0, 255), Rgb { r: 255, g: 255, b: 255 });
            assert_eq!(color_hsv(hue, 0, 128), Rgb { r: 128, g: 128, b: 128 });
            assert_eq!(color_hsv(hue, 0, 0), Rgb { r: 0, g: 0, b: 0 });
        }
    }

    #[test]
    fn test_hsv_zero_value_is_black() {
        for hue in [0u16, 21845, 43690] {
            assert_eq!(color_hsv(hue, 255, 0), Rgb { r: 0, g: 0, b: 0 });
        }
    }

    #[test]
    fn test_color_conversions() {
        assert_eq!(Color::from((1, 2, 3)), Color::Rgb(Rgb { r: 1, g: 2, b: 3 }));
        assert_eq!(
            Color::from((1, 2, 3, 4)),
            Color::Rgbw(Rgb { r: 1, g: 2, b: 3 }, 4)
        );
        assert_eq!(Color::from(RED).channels(), 3);
        assert_eq!(Color::from((1, 2, 3, 4)).channels(), 4);
        assert_eq!(Color::from((1, 2, 3, 4)).rgb(), Rgb { r: 1, g: 2, b: 3 });
    }
}
