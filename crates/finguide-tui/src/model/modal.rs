//! The article modal: lookup, render state, and open/closed lifecycle.

use finguide_content::{Article, Document, Registry};

/// Article currently projected into the modal.
#[derive(Debug)]
pub struct OpenArticle {
    pub article: &'static Article,
    pub doc: Document,
    pub scroll: u16,
}

#[derive(Debug, Default)]
enum ModalState {
    #[default]
    Closed,
    Open(OpenArticle),
}

/// Owns the modal's visible/hidden state transitions. The page never touches
/// this beyond calling `open`/`close`; while open, scroll input is routed
/// here so the page underneath stays put.
#[derive(Debug, Default)]
pub struct ArticleModal {
    state: ModalState,
}

impl ArticleModal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open an article by id. A miss is a silent no-op (stale links degrade
    /// to "nothing happens"); an open on top of an open modal replaces the
    /// content wholesale. Returns whether the modal is now showing `id`.
    pub fn open(&mut self, registry: &'static Registry, id: &str) -> bool {
        let Some(article) = registry.lookup(id) else {
            tracing::debug!(id, "article not in registry, ignoring open");
            return false;
        };
        tracing::debug!(id, "opening article");
        self.state = ModalState::Open(OpenArticle {
            article,
            doc: article.document(),
            scroll: 0,
        });
        true
    }

    /// Close the modal. Idempotent.
    pub fn close(&mut self) {
        if self.is_open() {
            tracing::debug!("closing article modal");
        }
        self.state = ModalState::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open(_))
    }

    pub fn article(&self) -> Option<&OpenArticle> {
        match &self.state {
            ModalState::Open(open) => Some(open),
            ModalState::Closed => None,
        }
    }

    pub fn scroll_down(&mut self, rows: u16) {
        if let ModalState::Open(open) = &mut self.state {
            open.scroll = open.scroll.saturating_add(rows);
        }
    }

    pub fn scroll_up(&mut self, rows: u16) {
        if let ModalState::Open(open) = &mut self.state {
            open.scroll = open.scroll.saturating_sub(rows);
        }
    }

    pub fn scroll_top(&mut self) {
        if let ModalState::Open(open) = &mut self.state {
            open.scroll = 0;
        }
    }
}
