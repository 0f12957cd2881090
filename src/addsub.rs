use crate::low_level::add_assign_digits;
use crate::Natural;
use std::ops::{Add, AddAssign};

impl Add for Natural {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

impl<'a> Add<&'a Natural> for Natural {
    type Output = Self;

    fn add(mut self, other: &'a Self) -> Self {
        self += other;
        self
    }
}

impl<'a> Add<Natural> for &'a Natural {
    type Output = Natural;

    fn add(self, mut other: Natural) -> Natural {
        other += self;
        other
    }
}

impl<'a, 'b> Add<&'b Natural> for &'a Natural {
    type Output = Natural;

    fn add(self, other: &'b Natural) -> Natural {
        let (big, small) = if self.digits.len() > other.digits.len() {
            (self, other)
        } else {
            (other, self)
        };
        big.clone() + small
    }
}

impl AddAssign for Natural {
    fn add_assign(&mut self, mut other: Self) {
        if self.digits.len() < other.digits.len() {
            std::mem::swap(self, &mut other);
        }
        add_assign_digits(&mut self.digits, &other.digits);
        self.normalize_in_place();
    }
}

impl<'a> AddAssign<&'a Natural> for Natural {
    fn add_assign(&mut self, other: &'a Self) {
        add_assign_digits(&mut self.digits, &other.digits);
        self.normalize_in_place();
    }
}
