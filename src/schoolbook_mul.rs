use crate::low_level::add_to_digits;
use crate::Natural;

pub fn schoolbook_mul(l: &Natural, r: &Natural) -> Natural {
    let mut digits = vec![0; l.digits.len() + r.digits.len() + 1];
    for (i, &l_digit) in l.digits.iter().enumerate() {
        let mut carry = 0;
        for (j, &r_digit) in r.digits.iter().enumerate() {
            let sum = digits[i + j] + l_digit * r_digit + carry;
            digits[i + j] = sum % 10;
            carry = sum / 10;
        }
        if carry > 0 {
            add_to_digits(carry, &mut digits[i + r.digits.len()..]);
        }
    }
    Natural { digits }.normalize()
}
