//! Ordered Entry List Reconciler.
//!
//! Keeps the resume's ordered entry sequence consistent under edits, deletes,
//! appends and drag reordering. Every operation consumes the sequence and
//! returns the next one, so the caller stays the single owner of the state.
//!
//! Invariants:
//! - reordering never changes the multiset of entries
//! - the length only changes through `add` and `remove`
//! - out-of-bounds indices leave the sequence untouched

pub mod drag;

use serde::{Deserialize, Serialize};

use crate::models::entry::Entry;

/// Direction of an arrow-button reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftDirection {
    Up,
    Down,
}

/// A single mutation of the sequence, as sent by the UI layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditCommand {
    Update { index: usize, entry: Entry },
    Remove { index: usize },
    Add { entry: Entry },
    Move { source: usize, target: usize },
    Shift { index: usize, direction: ShiftDirection },
}

/// What applying an `EditCommand` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Applied,
    /// Valid request that leaves the order as it was (identity move, edge shift).
    Unchanged,
    OutOfBounds,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntrySequence(Vec<Entry>);

impl EntrySequence {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self(entries)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Entry] {
        &self.0
    }

    /// Replaces the entry at `index`. No-op when `index` is out of bounds.
    pub fn update(mut self, index: usize, entry: Entry) -> Self {
        if let Some(slot) = self.0.get_mut(index) {
            *slot = entry;
        }
        self
    }

    /// Deletes the entry at `index`, shifting later entries left.
    pub fn remove(mut self, index: usize) -> Self {
        if index < self.0.len() {
            self.0.remove(index);
        }
        self
    }

    pub fn add(mut self, entry: Entry) -> Self {
        self.0.push(entry);
        self
    }

    /// Moves the entry at `source` so it lands before the entry currently at
    /// `target`. `target == len()` means the end of the list.
    ///
    /// Dropping onto the source itself or right after it is a no-op.
    pub fn move_entry(mut self, source: usize, target: usize) -> Self {
        if source >= self.0.len() || target == source || target == source + 1 {
            return self;
        }

        let moved = self.0.remove(source);
        if target > self.0.len() {
            self.0.push(moved);
        } else {
            // Removing `source` shifted everything after it one slot left.
            let at = if target > source { target - 1 } else { target };
            self.0.insert(at, moved);
        }
        self
    }

    /// Swaps the entry with its neighbour. The first entry cannot go up and
    /// the last cannot go down.
    pub fn shift(mut self, index: usize, direction: ShiftDirection) -> Self {
        if let Some(neighbour) = shift_target(index, direction, self.0.len()) {
            self.0.swap(index, neighbour);
        }
        self
    }

    /// Applies one command and reports whether anything happened.
    pub fn apply(self, command: EditCommand) -> (Self, Outcome) {
        let len = self.len();
        match command {
            EditCommand::Update { index, entry } => {
                if index >= len {
                    return (self, Outcome::OutOfBounds);
                }
                (self.update(index, entry), Outcome::Applied)
            }
            EditCommand::Remove { index } => {
                if index >= len {
                    return (self, Outcome::OutOfBounds);
                }
                (self.remove(index), Outcome::Applied)
            }
            EditCommand::Add { entry } => (self.add(entry), Outcome::Applied),
            EditCommand::Move { source, target } => {
                if source >= len {
                    return (self, Outcome::OutOfBounds);
                }
                if target == source || target == source + 1 {
                    return (self, Outcome::Unchanged);
                }
                (self.move_entry(source, target), Outcome::Applied)
            }
            EditCommand::Shift { index, direction } => {
                if index >= len {
                    return (self, Outcome::OutOfBounds);
                }
                match shift_target(index, direction, len) {
                    Some(_) => (self.shift(index, direction), Outcome::Applied),
                    None => (self, Outcome::Unchanged),
                }
            }
        }
    }
}

fn shift_target(index: usize, direction: ShiftDirection, len: usize) -> Option<usize> {
    if index >= len {
        return None;
    }
    match direction {
        ShiftDirection::Up => index.checked_sub(1),
        ShiftDirection::Down => Some(index + 1).filter(|&next| next < len),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str) -> Entry {
        Entry::new("experience").with_title(title)
    }

    fn seq(titles: &[&str]) -> EntrySequence {
        EntrySequence::new(titles.iter().map(|t| entry(t)).collect())
    }

    fn titles(sequence: &EntrySequence) -> Vec<&str> {
        sequence
            .as_slice()
            .iter()
            .map(|e| e.title.as_deref().unwrap_or_default())
            .collect()
    }

    fn sorted(sequence: &EntrySequence) -> Vec<Entry> {
        let mut entries = sequence.as_slice().to_vec();
        entries.sort();
        entries
    }

    #[test]
    fn test_move_forward_lands_before_target() {
        let moved = seq(&["A", "B", "C", "D"]).move_entry(0, 3);
        assert_eq!(titles(&moved), vec!["B", "C", "A", "D"]);
    }

    #[test]
    fn test_move_backward_to_front() {
        let moved = seq(&["A", "B", "C", "D"]).move_entry(3, 0);
        assert_eq!(titles(&moved), vec!["D", "A", "B", "C"]);
    }

    #[test]
    fn test_move_past_end_appends() {
        let moved = seq(&["A", "B", "C"]).move_entry(0, 4);
        assert_eq!(titles(&moved), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_move_to_len_appends() {
        let moved = seq(&["A", "B", "C", "D"]).move_entry(1, 4);
        assert_eq!(titles(&moved), vec!["A", "C", "D", "B"]);
    }

    #[test]
    fn test_identity_moves_are_noops() {
        let original = seq(&["A", "B", "C", "D"]);
        for s in 0..original.len() {
            assert_eq!(original.clone().move_entry(s, s), original, "move({s}, {s})");
            assert_eq!(original.clone().move_entry(s, s + 1), original, "move({s}, {})", s + 1);
        }
    }

    #[test]
    fn test_move_preserves_multiset_for_every_target() {
        let original = seq(&["A", "B", "C", "D", "E"]);
        for s in 0..original.len() {
            for t in 0..=original.len() + 2 {
                let moved = original.clone().move_entry(s, t);
                assert_eq!(moved.len(), original.len(), "move({s}, {t}) changed length");
                assert_eq!(sorted(&moved), sorted(&original), "move({s}, {t}) lost entries");
            }
        }
    }

    #[test]
    fn test_move_with_out_of_bounds_source_is_noop() {
        let original = seq(&["A", "B"]);
        assert_eq!(original.clone().move_entry(5, 0), original);
    }

    #[test]
    fn test_add_then_remove_tail_is_identity() {
        let original = seq(&["A", "B", "C"]);
        let tail = original.len();
        let round_trip = original.clone().add(entry("Z")).remove(tail);
        assert_eq!(round_trip, original);
    }

    #[test]
    fn test_add_on_empty_sequence() {
        let sequence = EntrySequence::default().add(entry("A"));
        assert_eq!(titles(&sequence), vec!["A"]);
    }

    #[test]
    fn test_remove_shifts_left() {
        let removed = seq(&["A", "B", "C"]).remove(1);
        assert_eq!(titles(&removed), vec!["A", "C"]);
    }

    #[test]
    fn test_update_and_remove_out_of_bounds_are_noops() {
        let original = seq(&["A", "B"]);
        assert_eq!(original.clone().update(2, entry("X")), original);
        assert_eq!(original.clone().remove(2), original);
    }

    #[test]
    fn test_update_replaces_in_place() {
        let updated = seq(&["A", "B", "C"]).update(1, entry("X"));
        assert_eq!(titles(&updated), vec!["A", "X", "C"]);
    }

    #[test]
    fn test_shift_swaps_with_neighbour() {
        let up = seq(&["A", "B", "C"]).shift(2, ShiftDirection::Up);
        assert_eq!(titles(&up), vec!["A", "C", "B"]);
        let down = seq(&["A", "B", "C"]).shift(0, ShiftDirection::Down);
        assert_eq!(titles(&down), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_shift_at_edges_is_noop() {
        let original = seq(&["A", "B", "C"]);
        assert_eq!(original.clone().shift(0, ShiftDirection::Up), original);
        assert_eq!(original.clone().shift(2, ShiftDirection::Down), original);
    }

    #[test]
    fn test_apply_reports_outcomes() {
        let original = seq(&["A", "B", "C"]);

        let (_, outcome) = original.clone().apply(EditCommand::Remove { index: 3 });
        assert_eq!(outcome, Outcome::OutOfBounds);

        let (_, outcome) = original.clone().apply(EditCommand::Move { source: 1, target: 2 });
        assert_eq!(outcome, Outcome::Unchanged);

        let (_, outcome) = original.clone().apply(EditCommand::Shift {
            index: 0,
            direction: ShiftDirection::Up,
        });
        assert_eq!(outcome, Outcome::Unchanged);

        let (moved, outcome) = original.apply(EditCommand::Move { source: 2, target: 0 });
        assert_eq!(outcome, Outcome::Applied);
        assert_eq!(titles(&moved), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_edit_command_wire_format() {
        let command: EditCommand =
            serde_json::from_str(r#"{"op":"shift","index":1,"direction":"down"}"#).unwrap();
        assert_eq!(
            command,
            EditCommand::Shift {
                index: 1,
                direction: ShiftDirection::Down
            }
        );
    }
}
