use serde::{Deserialize, Serialize};

use crate::models::entry::Entry;

/// One item of a tailoring result: the master entry next to its rewrite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TailoredEntry {
    pub original: Entry,
    pub tailored: Entry,
    #[serde(default)]
    pub has_changes: bool,
}
