//! Submitted command history with up/down recall.
//!
//! Every submission is kept in order, duplicates included, because the
//! completion engine searches the full log. Recall is where adjacent
//! duplicates collapse: stepping never shows the same text twice in a row
//! while a distinct entry exists in that direction.

/// Ordered log of submitted lines plus a transient recall cursor.
#[derive(Clone, Debug, Default)]
pub struct HistoryStore {
    entries: Vec<String>,
    /// Index of the entry currently shown, only during an up/down session.
    recall: Option<usize>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a submitted line and ends any recall session.
    pub fn append(&mut self, line: impl Into<String>) {
        self.entries.push(line.into());
        self.recall = None;
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current recall position, `None` outside a recall session.
    pub fn recall_index(&self) -> Option<usize> {
        self.recall
    }

    /// Ends the recall session (any edit not caused by recall).
    pub fn reset_recall(&mut self) {
        self.recall = None;
    }

    /// Steps toward older entries (ArrowUp).
    ///
    /// Starts at the newest entry, then skips entries identical to the one
    /// being shown. Stops at the oldest entry: repeated calls keep returning
    /// it. Returns `None` only when the history is empty.
    pub fn recall_previous(&mut self) -> Option<String> {
        let last = self.entries.len().checked_sub(1)?;

        let index = match self.recall {
            None => last,
            Some(current) => {
                let shown = &self.entries[current];
                let mut i = current;
                while i > 0 {
                    i -= 1;
                    if self.entries[i] != *shown {
                        break;
                    }
                }
                if self.entries[i] == *shown { current } else { i }
            }
        };

        self.recall = Some(index);
        Some(self.entries[index].clone())
    }

    /// Steps toward newer entries (ArrowDown).
    ///
    /// Stepping past the newest entry ends the session and yields an empty
    /// line. Outside a session there is nothing to step to: `None`.
    pub fn recall_next(&mut self) -> Option<String> {
        let current = self.recall?;
        let shown = &self.entries[current];

        let next = self.entries[current + 1..]
            .iter()
            .position(|entry| entry != shown)
            .map(|offset| current + 1 + offset);

        match next {
            Some(index) => {
                self.recall = Some(index);
                Some(self.entries[index].clone())
            }
            None => {
                self.recall = None;
                Some(String::new())
            }
        }
    }
}
