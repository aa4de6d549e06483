mod tests {
    use neopixel_strip::{
        ChannelOrder, Color, Duration, PixelBuffer, Protocol, Pulse, SK6812_TIMING,
        StripEncoder, WS2812_TIMING,
    };

    const CAP: usize = 16;

    /// Test-only inverse of the wire encoding: reconstruct logical colors
    /// from the byte stream given the order string used to build it.
    fn decode(bytes: &[u8], order: &str) -> Vec<Color> {
        let channels = order.len();
        assert_eq!(bytes.len() % channels, 0);
        bytes
            .chunks(channels)
            .map(|chunk| {
                let channel = |letter: char| {
                    chunk[order.chars().position(|c| c == letter).unwrap()]
                };
                let (r, g, b) = (channel('R'), channel('G'), channel('B'));
                if channels == 4 {
                    Color::from((r, g, b, channel('W')))
                } else {
                    Color::from((r, g, b))
                }
            })
            .collect()
    }

    #[test]
    fn test_bytes_follow_wire_order() {
        let mut buffer =
            PixelBuffer::<CAP>::new(2, ChannelOrder::parse("GRB").unwrap()).unwrap();
        buffer.set_pixel(0, Color::from((1, 2, 3))).unwrap();
        buffer.set_pixel(1, Color::from((4, 5, 6))).unwrap();

        let encoder = StripEncoder::new(Protocol::Ws2812);
        let frame: Vec<u8> = encoder.bytes(&buffer, 255).collect();
        assert_eq!(frame, [2, 1, 3, 5, 4, 6]);
    }

    #[test]
    fn test_bytes_round_trip_all_orders() {
        let rgb_colors = [
            Color::from((0, 0, 0)),
            Color::from((255, 128, 1)),
            Color::from((17, 34, 51)),
        ];
        for order in ["RGB", "GRB", "BRG"] {
            let mut buffer =
                PixelBuffer::<CAP>::new(3, ChannelOrder::parse(order).unwrap()).unwrap();
            for (i, &color) in rgb_colors.iter().enumerate() {
                buffer.set_pixel(i, color).unwrap();
            }
            let frame: Vec<u8> =
                StripEncoder::new(Protocol::Ws2812).bytes(&buffer, 255).collect();
            assert_eq!(decode(&frame, order), rgb_colors, "order {order}");
        }

        let rgbw_colors = [Color::from((255, 0, 7, 200)), Color::from((9, 8, 7, 6))];
        for order in ["RGBW", "GRBW", "WRGB"] {
            let mut buffer =
                PixelBuffer::<CAP>::new(2, ChannelOrder::parse(order).unwrap()).unwrap();
            for (i, &color) in rgbw_colors.iter().enumerate() {
                buffer.set_pixel(i, color).unwrap();
            }
            let frame: Vec<u8> =
                StripEncoder::new(Protocol::Sk6812).bytes(&buffer, 255).collect();
            assert_eq!(decode(&frame, order), rgbw_colors, "order {order}");
        }
    }

    #[test]
    fn test_bytes_apply_brightness_without_mutating_buffer() {
        let color = Color::from((200, 0, 255));
        let mut buffer = PixelBuffer::<CAP>::new(1, ChannelOrder::RGB).unwrap();
        buffer.set_pixel(0, color).unwrap();

        let encoder = StripEncoder::new(Protocol::Ws2812);
        let frame: Vec<u8> = encoder.bytes(&buffer, 128).collect();
        assert_eq!(frame, [100, 0, 128]);
        // Stored values stay exact.
        assert_eq!(buffer.get_pixel(0).unwrap(), color);

        let dark: Vec<u8> = encoder.bytes(&buffer, 0).collect();
        assert_eq!(dark, [0, 0, 0]);
    }

    #[test]
    fn test_frame_length() {
        let rgb = PixelBuffer::<CAP>::new(5, ChannelOrder::GRB).unwrap();
        let rgbw = PixelBuffer::<CAP>::new(5, ChannelOrder::GRBW).unwrap();
        let encoder = StripEncoder::new(Protocol::Ws2812);
        assert_eq!(encoder.bytes(&rgb, 255).count(), 15);
        assert_eq!(encoder.bytes(&rgbw, 255).count(), 20);
        assert_eq!(encoder.pulses(&rgb, 255).count(), 120);
    }

    #[test]
    fn test_pulses_msb_first() {
        let mut buffer = PixelBuffer::<CAP>::new(1, ChannelOrder::RGB).unwrap();
        buffer.set_pixel(0, Color::from((0b1000_0001, 0, 0))).unwrap();

        let encoder = StripEncoder::new(Protocol::Ws2812);
        let one = Pulse {
            high_ns: WS2812_TIMING.t1h,
            low_ns: WS2812_TIMING.t1l,
        };
        let zero = Pulse {
            high_ns: WS2812_TIMING.t0h,
            low_ns: WS2812_TIMING.t0l,
        };

        let pulses: Vec<Pulse> = encoder.pulses(&buffer, 255).collect();
        assert_eq!(pulses.len(), 24);
        assert_eq!(pulses[0], one, "MSB of the red byte comes first");
        assert_eq!(&pulses[1..7], &[zero; 6]);
        assert_eq!(pulses[7], one);
        assert_eq!(&pulses[8..24], &[zero; 16]);
    }

    #[test]
    fn test_protocol_selection_and_timing() {
        use neopixel_strip::ColorMode;
        assert_eq!(Protocol::for_mode(ColorMode::Rgb), Protocol::Ws2812);
        assert_eq!(Protocol::for_mode(ColorMode::Rgbw), Protocol::Sk6812);

        assert_eq!(
            StripEncoder::new(Protocol::Ws2812).timing().latch,
            Duration::from_micros(300)
        );
        assert_eq!(SK6812_TIMING.latch, Duration::from_micros(80));
        // Every bit occupies the same slot time regardless of its value.
        assert_eq!(
            WS2812_TIMING.t1h + WS2812_TIMING.t1l,
            WS2812_TIMING.t0h + WS2812_TIMING.t0l
        );
        assert_eq!(
            SK6812_TIMING.t1h + SK6812_TIMING.t1l,
            SK6812_TIMING.t0h + SK6812_TIMING.t0l
        );
    }
}
