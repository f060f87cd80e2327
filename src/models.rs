//! Data models for the publication site.
//!
//! `Publication` mirrors one entry of `data/publications.json`. The page
//! model types (`Section`, `NavLink`) describe the parts of a page the
//! navigation highlighter reads and writes.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Publication Data
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Publication {
    pub id: String,
    pub title: String,
    pub authors: Vec<String>,
    pub venue: String,
    pub year: Year,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_link: Option<String>,
    #[serde(default)]
    pub create_page: bool,
    #[serde(default)]
    pub bibtex: String,
    #[serde(default)]
    pub hide_from_list: bool,
    #[serde(default, rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,
}

/// Publication year as written in the data file: `2020` or `"2020"` (or
/// `"to appear"`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Year {
    Number(i64),
    Text(String),
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Year::Number(n) => write!(f, "{}", n),
            Year::Text(s) => write!(f, "{}", s),
        }
    }
}

impl Publication {
    /// The PDF link, treating an empty string as absent.
    pub fn pdf_link(&self) -> Option<&str> {
        self.pdf_link.as_deref().filter(|link| !link.is_empty())
    }

    /// Site-relative URL of the generated details page.
    pub fn page_url(&self) -> String {
        format!("{}/{}", crate::PUBLICATIONS_DIR, self.page_filename())
    }

    pub fn page_filename(&self) -> String {
        format!("{}.html", self.id)
    }

    pub fn authors_display(&self) -> String {
        self.authors.join(", ")
    }
}

// ============================================================================
// Page Model
// ============================================================================

/// A `<section>` of the page and its vertical offset from the document top.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f64,
}

impl Section {
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self { id: id.into(), top }
    }
}

/// A `.nav-item` link pointing at a section fragment.
#[derive(Debug, Clone, PartialEq)]
pub struct NavLink {
    pub href: String,
    pub label: String,
    pub active: bool,
}

impl NavLink {
    pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
            active: false,
        }
    }

    /// The fragment identifier of the href, without the `#`.
    pub fn fragment(&self) -> Option<&str> {
        self.href.split_once('#').map(|(_, fragment)| fragment)
    }
}
