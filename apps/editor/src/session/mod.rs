//! The editing session — single owner of the entry sequence and drag state.
//!
//! Every edit goes through `apply` or `drag`, which hand the sequence to
//! the reconciler by value and store what comes back. The service keeps one
//! session behind a mutex, so operations never interleave.

pub mod handlers;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::models::entry::Entry;
use crate::models::tailored::TailoredEntry;
use crate::reconciler::drag::{DragEvent, DragState};
use crate::reconciler::{EditCommand, EntrySequence, Outcome};
use crate::tailoring::TailoredResult;

/// Where the current sequence came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionSource {
    #[default]
    Empty,
    Master,
    Tailored,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub revision: u64,
    pub source: SessionSource,
    pub entries: Vec<Entry>,
    pub dragging: Option<usize>,
    pub indicator: Option<usize>,
    pub master_url: Option<String>,
    pub loaded_at: Option<DateTime<Utc>>,
}

/// Result of feeding one drag event to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DragOutcome {
    pub dragging: Option<usize>,
    pub indicator: Option<usize>,
    /// Set when the event was a drop that reached the reconciler.
    pub moved: Option<Outcome>,
}

#[derive(Debug, Default)]
pub struct EditorSession {
    entries: EntrySequence,
    drag: DragState,
    tailored: Option<TailoredResult>,
    master_url: Option<String>,
    source: SessionSource,
    revision: u64,
    loaded_at: Option<DateTime<Utc>>,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &EntrySequence {
        &self.entries
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn tailored(&self) -> Option<&TailoredResult> {
        self.tailored.as_ref()
    }

    /// Replaces the sequence with a freshly fetched master resume.
    pub fn load_master(&mut self, url: Option<String>, entries: Vec<Entry>) {
        self.master_url = url;
        self.tailored = None;
        self.replace(SessionSource::Master, entries);
    }

    /// Replaces the sequence with the tailored side of a tailoring result.
    pub fn load_tailored(&mut self, job_description: &str, items: Vec<TailoredEntry>) {
        let result = TailoredResult::new(job_description, items);
        let entries = result.tailored_entries();
        self.tailored = Some(result);
        self.replace(SessionSource::Tailored, entries);
    }

    fn replace(&mut self, source: SessionSource, entries: Vec<Entry>) {
        debug!(count = entries.len(), ?source, "Replacing session entries");
        self.entries = EntrySequence::new(entries);
        self.drag = DragState::idle();
        self.source = source;
        self.loaded_at = Some(Utc::now());
        self.revision += 1;
    }

    pub fn apply(&mut self, command: EditCommand) -> Outcome {
        let (entries, outcome) = std::mem::take(&mut self.entries).apply(command);
        self.entries = entries;
        if outcome == Outcome::Applied {
            self.revision += 1;
            // Indices held by an in-flight drag no longer point at the same entries.
            self.drag = DragState::idle();
        }
        outcome
    }

    pub fn drag(&mut self, event: DragEvent) -> DragOutcome {
        let (drag, pending) = self.drag.handle(event, self.entries.len());
        self.drag = drag;
        let moved = pending.map(|m| {
            self.apply(EditCommand::Move {
                source: m.source,
                target: m.target,
            })
        });
        DragOutcome {
            dragging: self.drag.source(),
            indicator: self.drag.indicator(),
            moved,
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            revision: self.revision,
            source: self.source,
            entries: self.entries.as_slice().to_vec(),
            dragging: self.drag.source(),
            indicator: self.drag.indicator(),
            master_url: self.master_url.clone(),
            loaded_at: self.loaded_at,
        }
    }
}
