//! Machine order over an instance's job slots.

use super::instance::Instance;
use super::job::Job;

/// An ordering of job slots, position 0 runs first.
///
/// Always a permutation of `0..n` for the instance it was built for: the
/// only mutation is [`swap_adjacent`](Schedule::swap_adjacent).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schedule {
    slots: Vec<usize>,
}

impl Schedule {
    /// The table order `0, 1, ..., n-1`.
    pub fn identity(n: usize) -> Self {
        Self {
            slots: (0..n).collect(),
        }
    }

    /// Number of positions.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slot at position `pos`.
    #[inline]
    pub fn slot(&self, pos: usize) -> usize {
        self.slots[pos]
    }

    /// Slots in machine order.
    #[inline]
    pub fn slots(&self) -> &[usize] {
        &self.slots
    }

    /// Exchanges the jobs at `pos` and `pos + 1`.
    ///
    /// # Panics
    /// Panics if `pos + 1 >= self.len()`.
    #[inline]
    pub fn swap_adjacent(&mut self, pos: usize) {
        self.slots.swap(pos, pos + 1);
    }

    /// Jobs in machine order.
    pub fn jobs<'a>(&'a self, instance: &'a Instance) -> impl Iterator<Item = &'a Job> + 'a {
        self.slots.iter().map(move |&slot| instance.job(slot))
    }

    /// Domain ids in machine order.
    pub fn ids(&self, instance: &Instance) -> Vec<u32> {
        self.jobs(instance).map(Job::id).collect()
    }

    /// True if the slots are exactly a permutation of `0..n`.
    pub fn is_permutation_of(&self, n: usize) -> bool {
        if self.slots.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for &slot in &self.slots {
            if slot >= n || seen[slot] {
                return false;
            }
            seen[slot] = true;
        }
        true
    }
}
