//! Static article content for the FinGuide site.
//!
//! The site ships a fixed set of financial-literacy articles. This crate owns
//! the article records, the read-only [`Registry`] they live in, and the
//! [`markup`] document model used to render the trusted article bodies.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub mod markup;
pub mod registry;

// Re-export for convenience
pub use markup::{Block, CalloutKind, Document, Inline, ListItem, StatEntry};
pub use registry::{Registry, registry};

/// A single article: stable id, display title, and the trusted markup body.
///
/// The descriptive fields (`category`, `author`, `date`, `read_time`) are
/// present on the long-form guides and absent on the short money-saving tips.
/// Nothing enforces uniformity; absence is a fact of the data, not an error.
#[derive(Debug, Clone, Copy)]
pub struct Article {
    pub id: &'static str,
    pub title: &'static str,
    /// Author-provided markup, inserted as rendered rich text (never escaped).
    pub body: &'static str,
    pub category: Option<Category>,
    pub author: Option<&'static str>,
    pub date: Option<&'static str>,
    pub read_time: Option<&'static str>,
}

impl Article {
    /// Parse the body into its block document. Parsing is lenient and cheap;
    /// callers that render repeatedly should hold on to the result.
    pub fn document(&self) -> Document {
        markup::parse(self.body)
    }

    /// Plain-text lead paragraph, used for card blurbs on the front page.
    pub fn excerpt(&self) -> Option<String> {
        self.document().first_paragraph_text()
    }
}

/// Topic category carried by the long-form guides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Stocks,
    Investing,
    Crypto,
    MakingMoney,
    PassiveIncome,
}

impl Category {
    pub fn all() -> [Category; 5] {
        [
            Self::Stocks,
            Self::Investing,
            Self::Crypto,
            Self::MakingMoney,
            Self::PassiveIncome,
        ]
    }

    /// Stable slug, matching the ids used in the article data.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Stocks => "stocks",
            Self::Investing => "investing",
            Self::Crypto => "crypto",
            Self::MakingMoney => "making-money",
            Self::PassiveIncome => "passive-income",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Stocks => "Stocks",
            Self::Investing => "Investing",
            Self::Crypto => "Crypto",
            Self::MakingMoney => "Making Money",
            Self::PassiveIncome => "Passive Income",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::all()
            .into_iter()
            .find(|c| c.slug().eq_ignore_ascii_case(s))
            .ok_or_else(|| ContentError::UnknownCategory(s.to_string()))
    }
}

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("unknown category: {0}")]
    UnknownCategory(String),
}
