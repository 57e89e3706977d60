//! Validated job table.

use rand::Rng;

use super::job::Job;
use crate::error::TardinessError;

/// Benchmark table `(pj, dj, wj, id)` in its initial machine order.
const REFERENCE_JOBS: [(i64, i64, i64, u32); 15] = [
    (16, 67, 45, 2),
    (6, 105, 35, 3),
    (12, 8, 80, 15),
    (19, 124, 28, 6),
    (9, 77, 1, 5),
    (20, 202, 70, 10),
    (13, 157, 14, 8),
    (1, 194, 21, 7),
    (5, 5, 69, 13),
    (18, 7, 62, 14),
    (4, 36, 21, 1),
    (5, 53, 73, 4),
    (19, 61, 23, 12),
    (12, 25, 76, 9),
    (20, 43, 51, 11),
];

/// A fixed set of jobs for one search run.
///
/// The position of a job in the table (its *slot*) is the job's identity
/// for tabu bookkeeping. The table order is also the initial schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instance {
    jobs: Vec<Job>,
}

impl Instance {
    /// Builds an instance, rejecting empty tables, non-positive
    /// processing times or weights, and tables whose total processing
    /// time or worst-case cost `Σ wj·max(0, Σpj - dj)` overflows `i64`.
    ///
    /// Every completion time and every cost the search can reach is
    /// bounded by those two totals.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tardiness::model::{Instance, Job};
    ///
    /// let instance = Instance::new(vec![Job::new(1, 3, 2, 1), Job::new(2, 1, 1, 5)]).unwrap();
    /// assert_eq!(instance.len(), 2);
    /// assert!(Instance::new(vec![]).is_err());
    /// ```
    pub fn new(jobs: Vec<Job>) -> Result<Self, TardinessError> {
        if jobs.is_empty() {
            return Err(TardinessError::EmptyInstance);
        }
        for job in &jobs {
            if job.processing_time() <= 0 {
                return Err(TardinessError::NonPositiveProcessingTime {
                    id: job.id(),
                    processing_time: job.processing_time(),
                });
            }
            if job.weight() <= 0 {
                return Err(TardinessError::NonPositiveWeight {
                    id: job.id(),
                    weight: job.weight(),
                });
            }
        }

        let horizon = jobs
            .iter()
            .try_fold(0i64, |acc, job| acc.checked_add(job.processing_time()))
            .ok_or(TardinessError::CostOverflow {
                quantity: "total processing time",
            })?;
        jobs.iter()
            .try_fold(0i64, |acc, job| {
                let late = horizon.checked_sub(job.due_date())?.max(0);
                acc.checked_add(late.checked_mul(job.weight())?)
            })
            .ok_or(TardinessError::CostOverflow {
                quantity: "worst-case weighted tardiness",
            })?;

        Ok(Self { jobs })
    }

    /// The 15-job benchmark instance.
    pub fn reference() -> Self {
        let jobs = REFERENCE_JOBS
            .iter()
            .map(|&(pj, dj, wj, id)| Job::new(id, pj, dj, wj))
            .collect();
        Self { jobs }
    }

    /// Generates a random instance with ids `1..=n`.
    ///
    /// Processing times are drawn from `1..=20`, weights from `1..=80`
    /// and due dates from `1..=Σpj`, so roughly half of the jobs end up
    /// late under a random order.
    ///
    /// Returns [`TardinessError::EmptyInstance`] for `n == 0`.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Result<Self, TardinessError> {
        if n == 0 {
            return Err(TardinessError::EmptyInstance);
        }
        let processing: Vec<i64> = (0..n).map(|_| rng.random_range(1..=20)).collect();
        let horizon: i64 = processing.iter().sum();
        let jobs = processing
            .into_iter()
            .enumerate()
            .map(|(i, pj)| {
                let dj = rng.random_range(1..=horizon);
                let wj = rng.random_range(1..=80);
                Job::new(i as u32 + 1, pj, dj, wj)
            })
            .collect();
        Ok(Self { jobs })
    }

    /// All jobs in slot order.
    #[inline]
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// The job stored at `slot`.
    ///
    /// # Panics
    /// Panics if `slot >= self.len()`.
    #[inline]
    pub fn job(&self, slot: usize) -> &Job {
        &self.jobs[slot]
    }

    /// Number of jobs.
    #[inline]
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Always false for a constructed instance.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Number of unordered job pairs, `n(n-1)/2`.
    ///
    /// A tabu list must be strictly shorter than this.
    #[inline]
    pub fn pair_count(&self) -> usize {
        let n = self.jobs.len();
        n * n.saturating_sub(1) / 2
    }
}
