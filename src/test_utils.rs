use crate::Natural;
use proptest::prelude::*;

pub fn any_natural(range: std::ops::Range<usize>) -> impl Strategy<Value = Natural> {
    proptest::collection::vec(0u8..10, range).prop_map(|digits| Natural { digits }.normalize())
}

pub fn digit_string(width: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(0u8..10, width)
        .prop_map(|digits| digits.into_iter().map(|d| char::from(b'0' + d)).collect())
}

pub fn digit_strings(widths: std::ops::Range<usize>) -> impl Strategy<Value = String> {
    widths.prop_flat_map(digit_string)
}

pub fn fragment_quad(
    widths: std::ops::Range<usize>,
) -> impl Strategy<Value = (String, String, String, String)> {
    widths.prop_flat_map(|w| {
        (
            digit_string(w),
            digit_string(w),
            digit_string(w),
            digit_string(w),
        )
    })
}
