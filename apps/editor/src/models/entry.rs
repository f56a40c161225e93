//! Resume entry — one line item of a resume (a job, a degree, a project, ...).
//!
//! Entries carry no identity. Their position in the owning sequence is the
//! only address, see `crate::reconciler`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Category of an entry. Only presentation branches on it.
///
/// Parsing is case-insensitive; unrecognized strings are kept verbatim so they
/// round-trip back to the backend unchanged.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntryKind {
    Experience,
    Education,
    Project,
    Other(String),
}

impl EntryKind {
    pub fn as_str(&self) -> &str {
        match self {
            EntryKind::Experience => "experience",
            EntryKind::Education => "education",
            EntryKind::Project => "project",
            EntryKind::Other(raw) => raw,
        }
    }
}

impl From<String> for EntryKind {
    fn from(raw: String) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "experience" => EntryKind::Experience,
            "education" => EntryKind::Education,
            "project" => EntryKind::Project,
            _ => EntryKind::Other(raw),
        }
    }
}

impl From<EntryKind> for String {
    fn from(kind: EntryKind) -> Self {
        match kind {
            EntryKind::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// Newline-delimited; every non-blank line is one bullet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Entry {
    /// The entry appended by the editor's "Add Entry" action.
    pub fn placeholder() -> Self {
        Self {
            kind: EntryKind::Experience,
            title: Some("New Entry".to_string()),
            organization: Some(String::new()),
            start_date: Some(String::new()),
            end_date: Some(String::new()),
            description: Some(String::new()),
        }
    }

    /// Description split into display bullets.
    pub fn bullets(&self) -> Vec<&str> {
        self.description
            .as_deref()
            .unwrap_or_default()
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    }

    /// `"{start} - {end}"`, or `None` when neither date is set.
    /// A missing end date reads as "Present".
    pub fn date_range(&self) -> Option<String> {
        let start = non_empty(self.start_date.as_deref());
        let end = non_empty(self.end_date.as_deref());
        if start.is_none() && end.is_none() {
            return None;
        }
        Some(format!(
            "{} - {}",
            start.unwrap_or_default(),
            end.unwrap_or("Present")
        ))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
impl From<&str> for EntryKind {
    fn from(raw: &str) -> Self {
        EntryKind::from(raw.to_string())
    }
}

/// Builders for test fixtures.
#[cfg(test)]
impl Entry {
    pub fn new(kind: impl Into<EntryKind>) -> Self {
        Self {
            kind: kind.into(),
            title: None,
            organization: None,
            start_date: None,
            end_date: None,
            description: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }

    pub fn with_dates(mut self, start: impl Into<String>, end: Option<String>) -> Self {
        self.start_date = Some(start.into());
        self.end_date = end;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
