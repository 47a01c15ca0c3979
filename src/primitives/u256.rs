//! 256-bit unsigned integer primitive
//!
//! Stored as four little-endian 64-bit limbs. Only the operations decimal
//! arithmetic needs are provided: widening multiplication of two `u128`
//! values, checked addition and subtraction, multiplication and division
//! by small factors, and ordering.

use std::cmp::Ordering;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct U256([u64; 4]);

impl U256 {
    pub(crate) const ZERO: Self = Self([0; 4]);

    pub(crate) const fn from_u128(value: u128) -> Self {
        Self([value as u64, (value >> 64) as u64, 0, 0])
    }

    /// Exact product of two `u128` values.
    pub(crate) fn widening_mul(a: u128, b: u128) -> Self {
        const LO: u128 = u64::MAX as u128;

        let (a0, a1) = (a & LO, a >> 64);
        let (b0, b1) = (b & LO, b >> 64);

        let p00 = a0 * b0;
        let p01 = a0 * b1;
        let p10 = a1 * b0;
        let p11 = a1 * b1;

        let mid = (p00 >> 64) + (p01 & LO) + (p10 & LO);
        let high = (mid >> 64) + (p01 >> 64) + (p10 >> 64) + (p11 & LO);
        let top = (high >> 64) + (p11 >> 64);

        Self([p00 as u64, mid as u64, high as u64, top as u64])
    }

    pub(crate) fn checked_add(self, rhs: Self) -> Option<Self> {
        let mut out = [0u64; 4];
        let mut carry = false;

        for (i, limb) in out.iter_mut().enumerate() {
            let (sum, c1) = self.0[i].overflowing_add(rhs.0[i]);
            let (sum, c2) = sum.overflowing_add(carry as u64);
            *limb = sum;
            carry = c1 || c2;
        }

        (!carry).then_some(Self(out))
    }

    pub(crate) fn checked_sub(self, rhs: Self) -> Option<Self> {
        let mut out = [0u64; 4];
        let mut borrow = false;

        for (i, limb) in out.iter_mut().enumerate() {
            let (diff, b1) = self.0[i].overflowing_sub(rhs.0[i]);
            let (diff, b2) = diff.overflowing_sub(borrow as u64);
            *limb = diff;
            borrow = b1 || b2;
        }

        (!borrow).then_some(Self(out))
    }

    pub(crate) fn checked_mul_small(self, factor: u64) -> Option<Self> {
        let mut out = [0u64; 4];
        let mut carry = 0u128;

        for (limb, &value) in out.iter_mut().zip(&self.0) {
            let product = value as u128 * factor as u128 + carry;
            *limb = product as u64;
            carry = product >> 64;
        }

        (carry == 0).then_some(Self(out))
    }

    /// Quotient and remainder of division by a non-zero `divisor`.
    pub(crate) fn div_rem_small(self, divisor: u64) -> (Self, u64) {
        let mut out = [0u64; 4];
        let mut rem = 0u128;

        for i in (0..4).rev() {
            let current = (rem << 64) | self.0[i] as u128;
            out[i] = (current / divisor as u128) as u64;
            rem = current % divisor as u128;
        }

        (Self(out), rem as u64)
    }

    pub(crate) fn to_u128(self) -> Option<u128> {
        (self.0[2] == 0 && self.0[3] == 0).then(|| self.0[0] as u128 | (self.0[1] as u128) << 64)
    }
}

impl Ord for U256 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.iter().rev().cmp(other.0.iter().rev())
    }
}

impl PartialOrd for U256 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widening_mul_of_maxima() {
        // (2^128 - 1)^2 = 2^256 - 2^129 + 1
        let product = U256::widening_mul(u128::MAX, u128::MAX);

        assert_eq!(product.0, [1, 0, u64::MAX - 1, u64::MAX]);
    }

    #[test]
    fn widening_mul_matches_native_when_small() {
        let product = U256::widening_mul(0xDEAD_BEEF_u128 << 40, 0x1234_5678);

        assert_eq!(product.to_u128(), Some((0xDEAD_BEEF_u128 << 40) * 0x1234_5678));
    }

    #[test]
    fn division_by_ten_carries_across_limbs() {
        let value = U256::widening_mul(10u128.pow(30), 10u128.pow(10)).checked_add(U256::from_u128(7)).unwrap();
        let (quotient, rem) = value.div_rem_small(10);

        assert_eq!(rem, 7);
        assert_eq!(quotient, U256::widening_mul(10u128.pow(30), 10u128.pow(9)));
    }

    #[test]
    fn ordering_uses_high_limbs_first() {
        let big = U256::widening_mul(u128::MAX, 2);
        let small = U256::from_u128(u128::MAX);

        assert!(big > small);
        assert_eq!(big.checked_sub(small), Some(small));
        assert_eq!(small.checked_sub(big), None);
    }

    #[test]
    fn add_overflow_is_detected() {
        let max = U256([u64::MAX; 4]);

        assert_eq!(max.checked_add(U256::from_u128(1)), None);
        assert_eq!(max.checked_mul_small(2), None);
    }
}
