//! Job record.

/// A job processed on the single machine.
///
/// Immutable after construction. Times are integral time units starting
/// at 0 when the machine begins the sequence.
///
/// # Examples
///
/// ```
/// use u_tardiness::model::Job;
///
/// let job = Job::new(3, 6, 105, 35);
/// assert_eq!(job.id(), 3);
/// assert_eq!(job.tardiness(120), 15);
/// assert_eq!(job.tardiness(90), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Job {
    id: u32,
    processing_time: i64,
    due_date: i64,
    weight: i64,
}

impl Job {
    /// Creates a job. Positivity is checked when the job enters an
    /// [`Instance`](super::Instance).
    pub fn new(id: u32, processing_time: i64, due_date: i64, weight: i64) -> Self {
        Self {
            id,
            processing_time,
            due_date,
            weight,
        }
    }

    /// Domain identifier (display only).
    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Processing time `pj`.
    #[inline]
    pub fn processing_time(&self) -> i64 {
        self.processing_time
    }

    /// Due date `dj`. May be zero or negative.
    #[inline]
    pub fn due_date(&self) -> i64 {
        self.due_date
    }

    /// Tardiness weight `wj`.
    #[inline]
    pub fn weight(&self) -> i64 {
        self.weight
    }

    /// Tardiness `max(0, completion - dj)` for the given completion time.
    #[inline]
    pub fn tardiness(&self, completion: i64) -> i64 {
        (completion - self.due_date).max(0)
    }
}
