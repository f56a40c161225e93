//! Drop-indicator state for an in-progress drag gesture.
//!
//! The UI layer resolves pointer geometry itself and only reports which entry
//! is hovered. Indicator positions use the same "insert before index" scale
//! as `EntrySequence::move_entry`, so a drop feeds straight into it.

use serde::{Deserialize, Serialize};

/// A resolved drag event from the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DragEvent {
    Start { index: usize },
    Hover { index: usize },
    /// Pointer is past the last entry or over the trailing drop zone.
    HoverEnd,
    Leave,
    Drop,
    Cancel,
}

/// A completed gesture: move `source` to land before `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DropMove {
    pub source: usize,
    pub target: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DragState {
    source: Option<usize>,
    indicator: Option<usize>,
}

impl DragState {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn start(index: usize) -> Self {
        Self {
            source: Some(index),
            indicator: None,
        }
    }

    pub fn source(&self) -> Option<usize> {
        self.source
    }

    pub fn indicator(&self) -> Option<usize> {
        self.indicator
    }

    pub fn is_dragging(&self) -> bool {
        self.source.is_some()
    }

    pub fn hover(self, index: usize) -> Self {
        match self.source {
            Some(source) => Self {
                source: Some(source),
                indicator: indicator_for(source, index),
            },
            None => self,
        }
    }

    pub fn hover_end(self, len: usize) -> Self {
        match self.source {
            Some(source) => Self {
                source: Some(source),
                indicator: end_indicator(source, len),
            },
            None => self,
        }
    }

    pub fn leave(self) -> Self {
        Self {
            source: self.source,
            indicator: None,
        }
    }

    /// Ends the gesture. Yields the move to perform when both a source and an
    /// indicator were present.
    pub fn finish(self) -> (Self, Option<DropMove>) {
        let pending = match (self.source, self.indicator) {
            (Some(source), Some(target)) => Some(DropMove { source, target }),
            _ => None,
        };
        (Self::idle(), pending)
    }

    /// Feeds one event through the state machine. `len` is the current
    /// sequence length.
    pub fn handle(self, event: DragEvent, len: usize) -> (Self, Option<DropMove>) {
        match event {
            DragEvent::Start { index } if index < len => (Self::start(index), None),
            DragEvent::Start { .. } => (Self::idle(), None),
            DragEvent::Hover { index } if index < len => (self.hover(index), None),
            // Past the last entry reads as the trailing drop zone.
            DragEvent::Hover { .. } | DragEvent::HoverEnd => (self.hover_end(len), None),
            DragEvent::Leave => (self.leave(), None),
            DragEvent::Drop => self.finish(),
            DragEvent::Cancel => (Self::idle(), None),
        }
    }
}

/// Indicator shown while dragging `source` over the entry at `hovered`.
/// Dragging downward marks the slot after the hovered entry, upward the slot
/// before it; hovering the dragged entry itself shows nothing.
pub fn indicator_for(source: usize, hovered: usize) -> Option<usize> {
    if hovered == source {
        None
    } else if source < hovered {
        Some(hovered + 1)
    } else {
        Some(hovered)
    }
}

/// Indicator for the trailing drop zone.
pub fn end_indicator(source: usize, len: usize) -> Option<usize> {
    if len == 0 || source + 1 == len {
        None
    } else {
        Some(len)
    }
}
