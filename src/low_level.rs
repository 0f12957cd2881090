use crate::Natural;

pub fn add_to_digits(x: u8, digits: &mut [u8]) {
    let sum = digits[0] + x;
    digits[0] = sum % 10;
    if sum >= 10 {
        add_to_digits(sum / 10, &mut digits[1..]);
    }
}

pub fn add_assign_digits(target: &mut Vec<u8>, other: &[u8]) {
    let target_len = std::cmp::max(target.len(), other.len()) + 1;
    target.resize(target_len, 0);
    add_assign_digits_slice(&mut *target, other);
}

pub fn add_assign_digits_slice(target: &mut [u8], other: &[u8]) {
    let mut carry = 0;
    for (target_digit, &other_digit) in target.iter_mut().zip(other.iter()) {
        let sum = *target_digit + other_digit + carry;
        *target_digit = sum % 10;
        carry = sum / 10;
    }
    if carry > 0 {
        add_to_digits(carry, &mut target[other.len()..]);
    }
}

pub fn split_digits_iter<'a>(
    digits: &'a [u8],
    chunk_size: usize,
) -> impl Iterator<Item = Natural> + 'a {
    digits
        .chunks(chunk_size)
        .map(|digits| {
            Natural {
                digits: digits.to_vec(),
            }
            .normalize()
        })
        .chain(std::iter::repeat(Natural::ZERO))
}

pub fn split_digits_2(digits: &[u8], chunk_size: usize) -> [Natural; 2] {
    let mut iter = split_digits_iter(digits, chunk_size);
    [iter.next().unwrap(), iter.next().unwrap()]
}
