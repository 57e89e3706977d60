//! Fixed-capacity FIFO tabu list.

/// Ring buffer of recently created ordered slot pairs.
///
/// Pairs are job *slots* (indices into the instance), so jobs with equal
/// field values never alias. Once full, each [`record`](TabuMemory::record)
/// overwrites the oldest entry.
///
/// # Examples
///
/// ```
/// use u_tardiness::tabu::TabuMemory;
///
/// let mut memory = TabuMemory::new(2);
/// memory.record(0, 1);
/// memory.record(3, 2);
/// assert!(memory.contains(0, 1));
/// assert!(!memory.contains(1, 0));
///
/// memory.record(4, 5); // evicts (0, 1)
/// assert!(!memory.contains(0, 1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabuMemory {
    entries: Vec<Option<(usize, usize)>>,
    cursor: usize,
}

impl TabuMemory {
    /// Creates an empty list holding at most `capacity` pairs.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: vec![None; capacity],
            cursor: 0,
        }
    }

    /// Maximum number of pairs held.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    /// Number of occupied entries.
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(Option::is_none)
    }

    /// True if the ordered pair `(first, second)` is tabu.
    pub fn contains(&self, first: usize, second: usize) -> bool {
        self.entries
            .iter()
            .any(|&entry| entry == Some((first, second)))
    }

    /// Records `(first, second)`, evicting the oldest entry when full.
    /// No-op at capacity 0.
    pub fn record(&mut self, first: usize, second: usize) {
        if self.entries.is_empty() {
            return;
        }
        self.entries[self.cursor] = Some((first, second));
        self.cursor = (self.cursor + 1) % self.entries.len();
    }

    /// Forgets every entry and rewinds the cursor.
    pub fn clear(&mut self) {
        self.entries.fill(None);
        self.cursor = 0;
    }
}
