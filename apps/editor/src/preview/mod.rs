//! Print layout of the current entries.
//!
//! Entries are grouped by kind and the groups follow the resume's fixed
//! section order. Within a group, entries keep their sequence order. Kinds
//! outside the known sections come last, in order of first appearance.

pub mod handlers;

use serde::Serialize;

use crate::models::entry::Entry;

const SECTION_ORDER: [&str; 10] = [
    "userInfo",
    "education",
    "skills",
    "experience",
    "project",
    "certifications",
    "publications",
    "awards",
    "volunteer",
    "references",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewSection {
    pub kind: String,
    pub entries: Vec<PreviewEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewEntry {
    /// Position in the session's sequence, for editing from the preview.
    pub index: usize,
    pub title: Option<String>,
    pub organization: Option<String>,
    pub dates: Option<String>,
    pub bullets: Vec<String>,
}

impl PreviewEntry {
    fn new(index: usize, entry: &Entry) -> Self {
        Self {
            index,
            title: present(entry.title.as_deref()),
            organization: present(entry.organization.as_deref()),
            dates: entry.date_range(),
            bullets: entry.bullets().into_iter().map(str::to_string).collect(),
        }
    }
}

fn present(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty()).map(str::to_string)
}

fn section_rank(kind: &str) -> usize {
    SECTION_ORDER
        .iter()
        .position(|known| *known == kind)
        .unwrap_or(SECTION_ORDER.len())
}

pub fn layout(entries: &[Entry]) -> Vec<PreviewSection> {
    let mut sections: Vec<PreviewSection> = Vec::new();
    for (index, entry) in entries.iter().enumerate() {
        let kind = entry.kind.to_string();
        let item = PreviewEntry::new(index, entry);
        match sections.iter_mut().find(|s| s.kind == kind) {
            Some(section) => section.entries.push(item),
            None => sections.push(PreviewSection {
                kind,
                entries: vec![item],
            }),
        }
    }
    // Stable, so unknown kinds keep first-appearance order.
    sections.sort_by_key(|s| section_rank(&s.kind));
    sections
}
