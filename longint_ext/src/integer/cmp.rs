use core::cmp::Ordering;

use crate::Integer;

impl PartialOrd for Integer {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

/// Compares the limbs directly. This is the same ordering as the sign of
/// `self.sub(rhs)`.
impl Ord for Integer {
    fn cmp(&self, rhs: &Self) -> Ordering {
        match (self.is_negative(), rhs.is_negative()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => (),
        }
        // In canonical form the top stored limb differs from the sign word, so
        // for nonnegative values more limbs means a larger magnitude and for
        // negative values more limbs means further away from -1
        let len_order = self.limbs.len().cmp(&rhs.limbs.len());
        if len_order != Ordering::Equal {
            return if self.is_negative() {
                len_order.reverse()
            } else {
                len_order
            }
        }
        // the same sign and length, so the limbs compare as unsigned
        for i in (0..self.limbs.len()).rev() {
            let o = self.limbs[i].cmp(&rhs.limbs[i]);
            if o != Ordering::Equal {
                return o
            }
        }
        Ordering::Equal
    }
}

/// # Comparison
impl Integer {
    /// Compares `self` to a small integer, borrowing from the shared table when
    /// `rhs` is in it
    #[must_use]
    pub fn cmp_i32(&self, rhs: i32) -> Ordering {
        match Integer::cached(rhs) {
            Some(cached) => self.cmp(cached),
            None => self.cmp(&Integer::from_i32(rhs)),
        }
    }
}
