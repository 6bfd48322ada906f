mod tests {
    use neopixel_dma::transform::{rotate_left, rotate_right, shift_left, shift_right};
    use neopixel_dma::{PixelBuffer, Rgb};

    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    /// Five distinct, non-black colors
    fn strip() -> [Rgb; 5] {
        [
            Rgb::new(1, 0, 0),
            Rgb::new(2, 0, 0),
            Rgb::new(3, 0, 0),
            Rgb::new(4, 0, 0),
            Rgb::new(5, 0, 0),
        ]
    }

    #[test]
    fn test_shift_left() {
        let [a, b, c, d, e] = strip();
        let mut leds = strip();
        shift_left(&mut leds, 2);
        assert_eq!(leds, [c, d, e, BLACK, BLACK]);

        let mut leds = strip();
        shift_left(&mut leds, 0);
        assert_eq!(leds, [a, b, c, d, e]);
    }

    #[test]
    fn test_shift_right() {
        let [a, b, c, d, e] = strip();
        let mut leds = strip();
        shift_right(&mut leds, 2);
        assert_eq!(leds, [BLACK, BLACK, a, b, c]);

        let mut leds = strip();
        shift_right(&mut leds, 0);
        assert_eq!(leds, [a, b, c, d, e]);

        // Last index only; the countdown must stop at zero
        let mut leds = strip();
        shift_right(&mut leds, 4);
        assert_eq!(leds, [BLACK, BLACK, BLACK, BLACK, a]);
    }

    #[test]
    fn test_shift_past_end_blackens_all() {
        for amount in [5, 6, 100, usize::MAX] {
            let mut leds = strip();
            shift_left(&mut leds, amount);
            assert_eq!(leds, [BLACK; 5]);

            let mut leds = strip();
            shift_right(&mut leds, amount);
            assert_eq!(leds, [BLACK; 5]);
        }
    }

    #[test]
    fn test_shift_round_trip_loses_colors() {
        for amount in 0..8 {
            let mut leds = strip();
            shift_left(&mut leds, amount);
            shift_right(&mut leds, amount);

            let black = leds.iter().filter(|led| **led == BLACK).count();
            assert_eq!(black, amount.min(leds.len()));
            // Survivors sit where they started
            for (i, led) in leds.iter().enumerate().skip(amount) {
                assert_eq!(*led, strip()[i]);
            }
        }
    }

    #[test]
    fn test_rotate() {
        let [a, b, c, d, e] = strip();
        let mut leds = strip();
        rotate_left(&mut leds, 2);
        assert_eq!(leds, [c, d, e, a, b]);

        let mut leds = strip();
        rotate_right(&mut leds, 2);
        assert_eq!(leds, [d, e, a, b, c]);
    }

    #[test]
    fn test_rotate_left_maps_indices() {
        let original = strip();
        for amount in 0..original.len() {
            let mut leds = original;
            rotate_left(&mut leds, amount);
            for (i, led) in leds.iter().enumerate() {
                assert_eq!(*led, original[(i + amount) % original.len()]);
            }
        }
    }

    #[test]
    fn test_rotate_round_trip() {
        for amount in 0..5 {
            let mut leds = strip();
            rotate_left(&mut leds, amount);
            rotate_right(&mut leds, amount);
            assert_eq!(leds, strip());
        }
    }

    #[test]
    fn test_rotate_zero_is_identity() {
        let mut leds = strip();
        rotate_left(&mut leds, 0);
        assert_eq!(leds, strip());
        rotate_right(&mut leds, 0);
        assert_eq!(leds, strip());
    }

    #[test]
    fn test_rotate_reduces_modulo_len() {
        let mut wrapped = strip();
        let mut reduced = strip();
        rotate_left(&mut wrapped, 12);
        rotate_left(&mut reduced, 2);
        assert_eq!(wrapped, reduced);

        let mut leds = strip();
        rotate_right(&mut leds, 5);
        assert_eq!(leds, strip());
    }

    #[test]
    fn test_empty_slice() {
        let mut leds: [Rgb; 0] = [];
        shift_left(&mut leds, 3);
        shift_right(&mut leds, 3);
        rotate_left(&mut leds, 3);
        rotate_right(&mut leds, 3);
    }

    #[test]
    fn test_pixel_buffer_transforms() {
        let [a, b, c, d, e] = strip();
        let mut leds = PixelBuffer::<8>::new(5).unwrap();
        leds.fill_from(strip());

        leds.rotate_right(1);
        assert_eq!(leds.as_slice(), &[e, a, b, c, d]);
        leds.rotate_left(1);
        assert_eq!(leds.as_slice(), &strip());
        leds.shift_left(1);
        assert_eq!(leds.as_slice(), &[b, c, d, e, BLACK]);
        leds.shift_right(3);
        assert_eq!(leds.as_slice(), &[BLACK, BLACK, BLACK, b, c]);
    }
}
