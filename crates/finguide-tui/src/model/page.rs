use std::ops::Range;

use finguide_content::{Article, Category};

/// The fixed top-to-bottom sections of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Hero,
    Tips,
    Stats,
    Guides,
    About,
}

impl SectionId {
    pub fn all() -> [SectionId; 5] {
        [
            Self::Hero,
            Self::Tips,
            Self::Stats,
            Self::Guides,
            Self::About,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::Tips => "Tips",
            Self::Stats => "Stats",
            Self::Guides => "Guides",
            Self::About => "About",
        }
    }
}

/// Reveal animation state of a card. Cards start hidden and settle once the
/// first time they scroll into view; the animation never repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    Hidden,
    Revealing(u8),
    Shown,
}

/// Reveal animation length in ticks (~600 ms at the 16 ms tick).
pub const REVEAL_TICKS: u8 = 36;

impl Reveal {
    /// Start the animation. Only effective from `Hidden`.
    pub fn trigger(&mut self) {
        if *self == Reveal::Hidden {
            *self = Reveal::Revealing(0);
        }
    }

    pub fn step(&mut self) {
        if let Reveal::Revealing(n) = *self {
            if n + 1 >= REVEAL_TICKS {
                *self = Reveal::Shown;
            } else {
                *self = Reveal::Revealing(n + 1);
            }
        }
    }

    pub fn is_hidden(self) -> bool {
        self == Reveal::Hidden
    }
}

/// What kind of card this is, mirroring the two card styles on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    /// Money-saving tip: title + blurb only.
    Feature,
    /// Long-form guide with its descriptive metadata.
    Post {
        category: Category,
        date: &'static str,
        read_time: &'static str,
    },
}

/// One card on the page, pointing at a registry article.
#[derive(Debug, Clone)]
pub struct Card {
    pub article_id: &'static str,
    pub title: &'static str,
    pub blurb: String,
    pub kind: CardKind,
    pub reveal: Reveal,
}

impl Card {
    pub fn from_article(article: &Article) -> Self {
        let kind = match article.category {
            Some(category) => CardKind::Post {
                category,
                date: article.date.unwrap_or(""),
                read_time: article.read_time.unwrap_or(""),
            },
            None => CardKind::Feature,
        };
        Self {
            article_id: article.id,
            title: article.title,
            blurb: article.excerpt().unwrap_or_default(),
            kind,
            reveal: Reveal::Hidden,
        }
    }
}

/// Row geometry of the last rendered frame. Visibility triggers and mouse
/// hit-testing read this instead of re-deriving layout; before the first
/// frame it is empty and consumers skip their effect.
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    /// Page row range of each section, in page coordinates (row 0 = top of
    /// the page, independent of scroll).
    pub sections: Vec<(SectionId, Range<u16>)>,
    /// Page row range of each card, keyed by index into `App::cards`.
    pub cards: Vec<(usize, Range<u16>)>,
    /// Total page height in rows.
    pub height: u16,
    /// Height of the viewport the page was last rendered into.
    pub viewport: u16,
}

impl PageLayout {
    pub fn section_range(&self, id: SectionId) -> Option<Range<u16>> {
        self.sections
            .iter()
            .find(|(s, _)| *s == id)
            .map(|(_, r)| r.clone())
    }

    /// Card under the given page row, if any.
    pub fn card_at(&self, row: u16) -> Option<usize> {
        self.cards
            .iter()
            .find(|(_, r)| r.contains(&row))
            .map(|(idx, _)| *idx)
    }
}

/// Rows shared between two ranges.
pub fn overlap(a: &Range<u16>, b: &Range<u16>) -> u16 {
    let start = a.start.max(b.start);
    let end = a.end.min(b.end);
    end.saturating_sub(start)
}
