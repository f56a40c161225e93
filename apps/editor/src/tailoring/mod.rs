//! Tailoring review — summarizes what the backend changed for a job
//! description and renders the tailored entries as plain text.

pub mod handlers;

use serde::Serialize;

use crate::models::entry::Entry;
use crate::models::tailored::TailoredEntry;

const ENTRY_SEPARATOR: &str = "\n---\n\n";

/// The last tailoring response together with the job description it was made for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TailoredResult {
    pub job_description: String,
    pub items: Vec<TailoredEntry>,
}

impl TailoredResult {
    pub fn new(job_description: impl Into<String>, items: Vec<TailoredEntry>) -> Self {
        Self {
            job_description: job_description.into(),
            items,
        }
    }

    /// The tailored side of every item, in order.
    pub fn tailored_entries(&self) -> Vec<Entry> {
        self.items.iter().map(|item| item.tailored.clone()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewSummary {
    pub total: usize,
    pub changed: usize,
    pub message: String,
}

pub fn changes_count(items: &[TailoredEntry]) -> usize {
    items.iter().filter(|item| item.has_changes).count()
}

pub fn filter(items: &[TailoredEntry], changes_only: bool) -> Vec<&TailoredEntry> {
    items
        .iter()
        .filter(|item| !changes_only || item.has_changes)
        .collect()
}

pub fn summary(items: &[TailoredEntry]) -> ReviewSummary {
    let changed = changes_count(items);
    let message = match changed {
        0 => "No modifications made".to_string(),
        1 => "1 item enhanced for this job".to_string(),
        n => format!("{n} items enhanced for this job"),
    };
    ReviewSummary {
        total: items.len(),
        changed,
        message,
    }
}

/// Plain-text rendering of every tailored entry, for pasting elsewhere.
pub fn copy_all_text(items: &[TailoredEntry]) -> String {
    items
        .iter()
        .map(|item| entry_text(&item.tailored))
        .collect::<Vec<_>>()
        .join(ENTRY_SEPARATOR)
}

fn entry_text(entry: &Entry) -> String {
    let mut text = String::new();
    let fields = [entry.title.as_deref(), entry.organization.as_deref()];
    for field in fields.into_iter().flatten().filter(|f| !f.is_empty()) {
        text.push_str(field);
        text.push('\n');
    }
    if let Some(range) = entry.date_range() {
        text.push_str(&range);
        text.push('\n');
    }
    if let Some(description) = entry.description.as_deref().filter(|d| !d.is_empty()) {
        text.push_str(description);
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, has_changes: bool) -> TailoredEntry {
        let original = Entry::new("experience").with_title(title);
        let tailored = if has_changes {
            original.clone().with_description("Rewritten for the role")
        } else {
            original.clone()
        };
        TailoredEntry {
            original,
            tailored,
            has_changes,
        }
    }

    #[test]
    fn test_summary_without_changes() {
        let items = vec![item("A", false), item("B", false)];
        let summary = summary(&items);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.changed, 0);
        assert_eq!(summary.message, "No modifications made");
    }

    #[test]
    fn test_summary_pluralizes() {
        assert_eq!(
            summary(&[item("A", true)]).message,
            "1 item enhanced for this job"
        );
        assert_eq!(
            summary(&[item("A", true), item("B", true), item("C", false)]).message,
            "2 items enhanced for this job"
        );
    }

    #[test]
    fn test_filter_changes_only() {
        let items = vec![item("A", true), item("B", false), item("C", true)];
        assert_eq!(filter(&items, false).len(), 3);
        let changed: Vec<_> = filter(&items, true)
            .into_iter()
            .filter_map(|i| i.tailored.title.as_deref())
            .collect();
        assert_eq!(changed, vec!["A", "C"]);
    }

    #[test]
    fn test_copy_all_text_layout() {
        let first = TailoredEntry {
            original: Entry::new("experience"),
            tailored: Entry::new("experience")
                .with_title("Backend Engineer")
                .with_organization("Acme")
                .with_dates("2021", None)
                .with_description("Cut p99 latency by 40%"),
            has_changes: true,
        };
        let second = TailoredEntry {
            original: Entry::new("education"),
            tailored: Entry::new("education").with_title("BSc Computer Science"),
            has_changes: false,
        };

        let text = copy_all_text(&[first, second]);
        assert_eq!(
            text,
            "Backend Engineer\nAcme\n2021 - Present\nCut p99 latency by 40%\n\n---\n\nBSc Computer Science\n"
        );
    }

    #[test]
    fn test_copy_all_text_empty() {
        assert_eq!(copy_all_text(&[]), "");
    }

    #[test]
    fn test_tailored_entries_keep_order() {
        let result = TailoredResult::new("Rust engineer", vec![item("A", true), item("B", false)]);
        let titles: Vec<_> = result
            .tailored_entries()
            .into_iter()
            .filter_map(|e| e.title)
            .collect();
        assert_eq!(titles, vec!["A", "B"]);
    }
}
