use parley_types::{HistoryEntry, Turn};

/// Append-only record of successful exchanges, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    turns: Vec<Turn>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one human turn and its assistant reply, in that order
    pub fn record(&mut self, human: impl Into<String>, assistant: impl Into<String>) {
        let human = Turn::human(human);
        let assistant = Turn::assistant(assistant);
        self.turns.reserve(2);
        self.turns.push(human);
        self.turns.push(assistant);
    }

    /// Wire entries for `chat_history`, one per turn, in order
    pub fn serialize(&self) -> impl Iterator<Item = HistoryEntry> + '_ {
        self.turns.iter().map(HistoryEntry::from)
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
