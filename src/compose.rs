use crate::low_level::{add_assign_digits_slice, split_digits_2};
use crate::{Fragment, Natural};
use std::fmt;

// high * 10^scale + low, placed into one digit buffer.
pub fn compose_operand(high: &Natural, low: &Natural, scale: usize) -> Natural {
    let len = std::cmp::max(high.digits.len() + scale, low.digits.len()) + 1;
    let mut digits = vec![0; len];
    add_assign_digits_slice(&mut digits, &low.digits);
    add_assign_digits_slice(&mut digits[scale..], &high.digits);
    Natural { digits }.normalize()
}

pub fn split_operand(x: &Natural, scale: usize) -> [Natural; 2] {
    split_digits_2(&x.digits, scale)
}

#[derive(Debug)]
pub struct DirectProduct {
    pub first: Natural,
    pub second: Natural,
    pub product: Natural,
}

// The scale for both operands comes from the written width of fragment
// `a` alone; fragment widths are not cross-checked.
pub fn direct_product(a: &Fragment, b: &Fragment, c: &Fragment, d: &Fragment) -> DirectProduct {
    let scale = a.width();
    let first = compose_operand(a.value(), b.value(), scale);
    let second = compose_operand(c.value(), d.value(), scale);
    let product = &first * &second;
    DirectProduct {
        first,
        second,
        product,
    }
}

impl fmt::Display for DirectProduct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {} = {}", self.first, self.second, self.product)
    }
}
