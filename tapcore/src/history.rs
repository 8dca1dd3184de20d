//! Calculation history.
//!
//! Each successful evaluation is archived as an (equation, result) pair.
//! The list is bounded; once full, the oldest calculations fall off.
//! History lives only for the session — it is never written to disk.

/// Number of calculations kept by default.
pub const DEFAULT_LIMIT: usize = 100;

/// One completed calculation, exactly as it was displayed.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub equation: String,
    pub result: String,
}

/// Bounded list of past calculations, oldest first in storage.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<HistoryEntry>,
    limit: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT)
    }
}

impl History {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            limit: limit.max(1),
        }
    }

    /// Archive a calculation, dropping the oldest entries once over the limit.
    pub fn push(&mut self, equation: impl Into<String>, result: impl Into<String>) {
        self.entries.push(HistoryEntry {
            equation: equation.into(),
            result: result.into(),
        });
        self.trim();
    }

    /// Most recent calculation first — the order the pane renders.
    pub fn newest_first(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }

    /// Change the limit, dropping the oldest entries if now over it.
    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit.max(1);
        self.trim();
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn trim(&mut self) {
        if self.entries.len() > self.limit {
            let excess = self.entries.len() - self.limit;
            self.entries.drain(0..excess);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_order() {
        let mut history = History::default();
        history.push("2+3", "5");
        history.push("sin90", "1");

        let newest: Vec<_> = history.newest_first().collect();
        assert_eq!(newest.len(), 2);
        assert_eq!(newest[0].equation, "sin90");
        assert_eq!(newest[1].equation, "2+3");
    }

    #[test]
    fn test_oldest_dropped_at_limit() {
        let mut history = History::new(3);
        for i in 0..5 {
            history.push(format!("{i}+0"), format!("{i}"));
        }

        assert_eq!(history.len(), 3);
        // 0 and 1 fell off; 4 is newest
        let newest: Vec<_> = history.newest_first().collect();
        assert_eq!(newest[0].result, "4");
        assert_eq!(newest[2].result, "2");
    }

    #[test]
    fn test_set_limit_trims() {
        let mut history = History::new(10);
        for i in 0..10 {
            history.push(format!("{i}"), format!("{i}"));
        }
        history.set_limit(4);

        assert_eq!(history.len(), 4);
        assert_eq!(history.newest_first().next().unwrap().result, "9");
    }

    #[test]
    fn test_clear() {
        let mut history = History::default();
        history.push("1+1", "2");
        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn test_zero_limit_clamped() {
        let mut history = History::new(0);
        history.push("1+1", "2");
        assert_eq!(history.len(), 1);
    }
}
