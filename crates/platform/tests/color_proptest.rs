//! Property-based tests for colour application on segment bytes.
//! Every colour must leave bits outside the written pattern alone.

use platform::Color;
use proptest::prelude::*;

fn any_color() -> impl Strategy<Value = Color> {
    prop_oneof![
        Just(Color::Transparent),
        Just(Color::Black),
        Just(Color::White),
        Just(Color::Invert),
    ]
}

proptest! {
    /// Bits clear in the pattern keep their frame buffer value.
    #[test]
    fn bits_outside_pattern_unchanged(color in any_color(), current: u8, bits: u8) {
        let out = color.apply(current, bits);
        prop_assert_eq!((out ^ current) & !bits, 0);
    }

    /// Toggling the same pattern twice restores the byte.
    #[test]
    fn invert_twice_is_identity(current: u8, bits: u8) {
        let once = Color::Invert.apply(current, bits);
        prop_assert_eq!(Color::Invert.apply(once, bits), current);
    }

    /// White lights every pattern bit, Black turns every pattern bit off.
    #[test]
    fn white_and_black_force_pattern_bits(current: u8, bits: u8) {
        prop_assert_eq!(Color::White.apply(current, bits) & bits, bits);
        prop_assert_eq!(Color::Black.apply(current, bits) & bits, 0);
    }

    /// Transparent draws nothing.
    #[test]
    fn transparent_is_noop(current: u8, bits: u8) {
        prop_assert_eq!(Color::Transparent.apply(current, bits), current);
    }

    /// An empty pattern is a no-op for every colour.
    #[test]
    fn empty_pattern_is_noop(color in any_color(), current: u8) {
        prop_assert_eq!(color.apply(current, 0), current);
    }
}
