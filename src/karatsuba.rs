use crate::low_level::add_assign_digits_slice;
use crate::{Fragment, Natural};

// One level of the Karatsuba expansion, evaluated directly:
//   (a*10^n + b)(c*10^n + d) = ac*10^2n + (ad + bc)*10^n + bd
// with n the written width of fragment `a`. Four multiplications; the
// three-multiplication recombination is deliberately not used.
pub fn karatsuba_step(a: &Fragment, b: &Fragment, c: &Fragment, d: &Fragment) -> Natural {
    let scale = a.width();
    let prod0 = b.value() * d.value();
    let prod1 = &(a.value() * d.value()) + &(b.value() * c.value());
    let prod2 = a.value() * c.value();
    let len = std::cmp::max(
        std::cmp::max(prod0.digits.len(), prod1.digits.len() + scale),
        prod2.digits.len() + 2 * scale,
    ) + 1;
    let mut digits = vec![0; len];
    add_assign_digits_slice(&mut digits, &prod0.digits);
    add_assign_digits_slice(&mut digits[scale..], &prod1.digits);
    add_assign_digits_slice(&mut digits[2 * scale..], &prod2.digits);
    Natural { digits }.normalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::direct_product;
    use crate::test_utils::*;
    use proptest::prelude::*;

    fn quad(a: &str, b: &str, c: &str, d: &str) -> (Fragment, Fragment, Fragment, Fragment) {
        (
            a.parse().unwrap(),
            b.parse().unwrap(),
            c.parse().unwrap(),
            d.parse().unwrap(),
        )
    }

    proptest! {
        #[test]
        fn matches_direct_product((a, b, c, d) in fragment_quad(1..40)) {
            let (a, b, c, d) = quad(&a, &b, &c, &d);
            let direct = direct_product(&a, &b, &c, &d);
            assert_eq!(karatsuba_step(&a, &b, &c, &d), direct.product);
        }
    }
    // Both paths take the scale from fragment `a`, so the identity holds
    // even when the fragments have unequal written widths.
    proptest! {
        #[test]
        fn matches_direct_product_mismatched_widths(
            a in digit_strings(1..12),
            b in digit_strings(1..12),
            c in digit_strings(1..12),
            d in digit_strings(1..12),
        ) {
            let (a, b, c, d) = quad(&a, &b, &c, &d);
            let direct = direct_product(&a, &b, &c, &d);
            assert_eq!(karatsuba_step(&a, &b, &c, &d), direct.product);
        }
    }

    #[test]
    fn single_digit_fragments() {
        let (a, b, c, d) = quad("1", "2", "3", "4");
        assert_eq!(karatsuba_step(&a, &b, &c, &d), Natural::from_u64(408));
    }

    #[test]
    fn two_digit_fragments() {
        let (a, b, c, d) = quad("12", "34", "56", "78");
        assert_eq!(karatsuba_step(&a, &b, &c, &d), Natural::from_u64(7006652));
    }

    #[test]
    fn leading_zero_fragments() {
        let (a, b, c, d) = quad("01", "02", "03", "04");
        assert_eq!(karatsuba_step(&a, &b, &c, &d), Natural::from_u64(31008));
    }

    #[test]
    fn all_zero_fragments() {
        let (a, b, c, d) = quad("0", "0", "0", "0");
        assert_eq!(karatsuba_step(&a, &b, &c, &d), Natural::ZERO);
    }

    #[test]
    fn twenty_digit_fragments() {
        // (10^40 - 1)^2 = 10^80 - 2*10^40 + 1
        let nines = "9".repeat(20);
        let (a, b, c, d) = quad(&nines, &nines, &nines, &nines);
        let expected: Natural = format!("{}8{}1", "9".repeat(39), "0".repeat(39))
            .parse()
            .unwrap();
        assert_eq!(karatsuba_step(&a, &b, &c, &d), expected);
        assert_eq!(direct_product(&a, &b, &c, &d).product, expected);
    }
}
