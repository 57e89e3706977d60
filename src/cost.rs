//! Total weighted tardiness, from scratch and incrementally.
//!
//! # Incremental update
//!
//! Swapping the adjacent jobs `a, b` at positions `(i, i+1)` changes only
//! their own completion times: every earlier job is untouched, and every
//! later job still starts at `t + pa + pb`. The cost of the swapped
//! schedule therefore follows from the current cost by removing the two
//! old contributions and adding the two new ones, in O(1).
//!
//! # Reference
//! Lawler (1977), "A pseudopolynomial algorithm for sequencing jobs to
//! minimize total tardiness", *Annals of Discrete Mathematics* 1, 331-342.

use crate::model::{Instance, Job, Schedule};

/// Weighted tardiness `wj * max(0, completion - dj)` of one job.
#[inline]
pub fn contribution(job: &Job, completion: i64) -> i64 {
    job.weight() * job.tardiness(completion)
}

/// Total weighted tardiness of `schedule`, by a single pass.
///
/// # Examples
///
/// ```
/// use u_tardiness::cost::total_cost;
/// use u_tardiness::model::{Instance, Schedule};
///
/// let instance = Instance::reference();
/// let schedule = Schedule::identity(instance.len());
/// assert_eq!(total_cost(&instance, &schedule), 42048);
/// ```
pub fn total_cost(instance: &Instance, schedule: &Schedule) -> i64 {
    let mut elapsed = 0;
    let mut cost = 0;
    for job in schedule.jobs(instance) {
        elapsed += job.processing_time();
        cost += contribution(job, elapsed);
    }
    cost
}

/// Completion time of each position in `schedule`.
pub fn completion_times(instance: &Instance, schedule: &Schedule) -> Vec<i64> {
    schedule
        .jobs(instance)
        .scan(0, |elapsed, job| {
            *elapsed += job.processing_time();
            Some(*elapsed)
        })
        .collect()
}

/// Total cost after swapping adjacent jobs `a` (first) and `b` (second).
///
/// `elapsed_before` is the completion time of the job preceding `a`
/// (0 when `a` runs first) and `current_cost` the total cost of the
/// unswapped schedule.
#[inline]
pub fn swap_cost(a: &Job, b: &Job, current_cost: i64, elapsed_before: i64) -> i64 {
    let a_then_b = elapsed_before + a.processing_time() + b.processing_time();
    let removed = contribution(a, elapsed_before + a.processing_time()) + contribution(b, a_then_b);
    let added = contribution(b, elapsed_before + b.processing_time()) + contribution(a, a_then_b);
    current_cost - removed + added
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn brute_force(instance: &Instance, schedule: &Schedule) -> i64 {
        completion_times(instance, schedule)
            .iter()
            .zip(schedule.jobs(instance))
            .map(|(&c, job)| job.weight() * (c - job.due_date()).max(0))
            .sum()
    }

    fn elapsed_before(instance: &Instance, schedule: &Schedule, pos: usize) -> i64 {
        schedule
            .jobs(instance)
            .take(pos)
            .map(Job::processing_time)
            .sum()
    }

    #[test]
    fn test_reference_initial_cost() {
        let instance = Instance::reference();
        let schedule = Schedule::identity(instance.len());
        assert_eq!(total_cost(&instance, &schedule), 42048);
        assert_eq!(brute_force(&instance, &schedule), 42048);
    }

    #[test]
    fn test_completion_times_prefix_sums() {
        let instance = Instance::reference();
        let schedule = Schedule::identity(instance.len());
        let times = completion_times(&instance, &schedule);
        assert_eq!(&times[..3], &[16, 22, 34]);
        assert_eq!(*times.last().unwrap(), 179);
    }

    #[test]
    fn test_swap_cost_matches_rescan() {
        let instance = Instance::reference();
        let mut schedule = Schedule::identity(instance.len());
        let cost = total_cost(&instance, &schedule);

        let t = elapsed_before(&instance, &schedule, 12);
        let a = instance.job(schedule.slot(12));
        let b = instance.job(schedule.slot(13));
        let predicted = swap_cost(a, b, cost, t);

        schedule.swap_adjacent(12);
        assert_eq!(predicted, 40880);
        assert_eq!(total_cost(&instance, &schedule), predicted);
    }

    #[test]
    fn test_swap_twice_restores_cost() {
        let instance = Instance::reference();
        let schedule = Schedule::identity(instance.len());
        let cost = total_cost(&instance, &schedule);
        let t = elapsed_before(&instance, &schedule, 4);
        let a = instance.job(schedule.slot(4));
        let b = instance.job(schedule.slot(5));

        let swapped = swap_cost(a, b, cost, t);
        assert_eq!(swap_cost(b, a, swapped, t), cost);
    }

    #[test]
    fn test_swap_of_early_jobs_is_free() {
        let a = Job::new(1, 2, 100, 5);
        let b = Job::new(2, 3, 100, 7);
        assert_eq!(swap_cost(&a, &b, 17, 10), 17);
    }

    proptest! {
        #[test]
        fn prop_incremental_agrees_with_full_scan(
            seed in any::<u64>(),
            n in 2usize..25,
            moves in proptest::collection::vec(any::<prop::sample::Index>(), 0..60),
        ) {
            let instance = Instance::random(n, &mut StdRng::seed_from_u64(seed)).unwrap();
            let mut schedule = Schedule::identity(n);
            let mut cost = total_cost(&instance, &schedule);

            for idx in moves {
                let pos = idx.index(n - 1);
                let t = elapsed_before(&instance, &schedule, pos);
                let a = instance.job(schedule.slot(pos));
                let b = instance.job(schedule.slot(pos + 1));
                cost = swap_cost(a, b, cost, t);
                schedule.swap_adjacent(pos);
                prop_assert_eq!(cost, brute_force(&instance, &schedule));
            }

            prop_assert!(schedule.is_permutation_of(n));
            prop_assert_eq!(cost, total_cost(&instance, &schedule));
        }
    }
}
