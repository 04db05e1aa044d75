//! Resume data model
//!
//! The resume shape is defined by the remote generator. Decoding happens
//! once at the trust boundary; every field the layout reads must be present
//! and correctly typed or the whole payload is rejected as malformed.
//! Unknown extra fields are ignored.

use serde::{Deserialize, Serialize};

/// A complete resume as returned by the generator endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resume {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub twitter: String,
    pub summary: String,
    /// Skill lines, rendered one bullet each in input order
    pub skills: Vec<String>,
    /// Project entries, rendered one block each in input order
    pub projects: Vec<Project>,
}

/// A single project entry on a resume
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub description: String,
    /// Free-text date label, never parsed
    pub start_date: String,
    pub end_date: String,
}

impl Project {
    /// The date range label shown under a project entry
    pub fn date_range(&self) -> String {
        format!("{} - {}", self.start_date, self.end_date)
    }
}
