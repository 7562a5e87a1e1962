//! Block document model for the trusted article markup.
//!
//! Article bodies are author-provided HTML fragments using a small, closed
//! vocabulary: `h3`/`h4`/`h5` headings, paragraphs, (nested) lists,
//! `strong`/`em` emphasis, and the site's three callout classes
//! (`article-intro`, `article-highlight`, `article-stats` with its
//! `stats-grid` of `stat-item` entries). Parsing is fail-soft: the content is
//! trusted, so anything unrecognized contributes its text or is skipped, and
//! `parse` never errors.

use scraper::{ElementRef, Html};

/// A parsed article body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Plain text of the first paragraph, descending into callouts.
    pub fn first_paragraph_text(&self) -> Option<String> {
        fn find(blocks: &[Block]) -> Option<String> {
            for block in blocks {
                match block {
                    Block::Paragraph(inlines) => return Some(plain_text(inlines)),
                    Block::Callout { blocks, .. } => {
                        if let Some(text) = find(blocks) {
                            return Some(text);
                        }
                    }
                    _ => {}
                }
            }
            None
        }
        find(&self.blocks)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// `level` is the heading rank as authored (3, 4, or 5).
    Heading { level: u8, text: String },
    Paragraph(Vec<Inline>),
    List { ordered: bool, items: Vec<ListItem> },
    Callout { kind: CalloutKind, blocks: Vec<Block> },
    StatGrid(Vec<StatEntry>),
}

/// One `li`: inline content plus any nested sub-lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub content: Vec<Inline>,
    pub nested: Vec<Block>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalloutKind {
    Intro,
    Highlight,
    Stats,
}

/// A number/label pair from a `stats-grid`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatEntry {
    pub number: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Strong(String),
    Em(String),
}

impl Inline {
    pub fn as_str(&self) -> &str {
        match self {
            Inline::Text(s) | Inline::Strong(s) | Inline::Em(s) => s,
        }
    }
}

/// Concatenate inline runs into plain text.
pub fn plain_text(inlines: &[Inline]) -> String {
    inlines.iter().map(Inline::as_str).collect()
}

/// Parse an article body into its block document. Never fails; unknown
/// markup degrades to text.
pub fn parse(markup: &str) -> Document {
    let fragment = Html::parse_fragment(markup);
    let mut blocks = Vec::new();
    collect_blocks(fragment.root_element(), &mut blocks);
    Document { blocks }
}

fn collect_blocks(parent: ElementRef<'_>, out: &mut Vec<Block>) {
    for child in parent.children() {
        if let Some(el) = ElementRef::wrap(child) {
            parse_element(el, out);
        } else if let Some(text) = child.value().as_text() {
            // Stray text between block elements; the corpus has none, but a
            // bare fragment like "hello" should still render.
            let squashed = squash_ws(text);
            let trimmed = squashed.trim();
            if !trimmed.is_empty() {
                out.push(Block::Paragraph(vec![Inline::Text(trimmed.to_string())]));
            }
        }
    }
}

fn parse_element(el: ElementRef<'_>, out: &mut Vec<Block>) {
    match el.value().name() {
        "h1" | "h2" | "h3" => out.push(heading(3, el)),
        "h4" => out.push(heading(4, el)),
        "h5" | "h6" => out.push(heading(5, el)),
        "p" => {
            let inlines = parse_inlines(el);
            if !inlines.is_empty() {
                out.push(Block::Paragraph(inlines));
            }
        }
        "ul" => out.push(parse_list(el, false)),
        "ol" => out.push(parse_list(el, true)),
        "div" => parse_div(el, out),
        other => {
            tracing::trace!(element = other, "unrecognized element, flattening to text");
            let inlines = parse_inlines(el);
            if !inlines.is_empty() {
                out.push(Block::Paragraph(inlines));
            }
        }
    }
}

fn parse_div(el: ElementRef<'_>, out: &mut Vec<Block>) {
    let kind = if has_class(el, "article-intro") {
        Some(CalloutKind::Intro)
    } else if has_class(el, "article-highlight") {
        Some(CalloutKind::Highlight)
    } else if has_class(el, "article-stats") {
        Some(CalloutKind::Stats)
    } else {
        None
    };

    if let Some(kind) = kind {
        let mut blocks = Vec::new();
        collect_blocks(el, &mut blocks);
        out.push(Block::Callout { kind, blocks });
    } else if has_class(el, "stats-grid") {
        out.push(Block::StatGrid(parse_stat_grid(el)));
    } else {
        // Unclassed wrapper: transparent.
        collect_blocks(el, out);
    }
}

fn parse_stat_grid(grid: ElementRef<'_>) -> Vec<StatEntry> {
    let mut entries = Vec::new();
    for child in grid.children() {
        let Some(item) = ElementRef::wrap(child) else {
            continue;
        };
        if !has_class(item, "stat-item") {
            continue;
        }
        let mut number = String::new();
        let mut label = String::new();
        for span in item.children() {
            let Some(span) = ElementRef::wrap(span) else {
                continue;
            };
            let text = element_text(span);
            if has_class(span, "stat-number") {
                number = text;
            } else if has_class(span, "stat-label") {
                label = text;
            }
        }
        if !number.is_empty() || !label.is_empty() {
            entries.push(StatEntry { number, label });
        }
    }
    entries
}

fn parse_list(list: ElementRef<'_>, ordered: bool) -> Block {
    let mut items = Vec::new();
    for child in list.children() {
        let Some(li) = ElementRef::wrap(child) else {
            continue;
        };
        if li.value().name() != "li" {
            continue;
        }

        // Split the li into inline content and nested sub-lists.
        let mut content = Vec::new();
        let mut nested = Vec::new();
        for node in li.children() {
            if let Some(el) = ElementRef::wrap(node) {
                match el.value().name() {
                    "ul" => nested.push(parse_list(el, false)),
                    "ol" => nested.push(parse_list(el, true)),
                    _ => push_inline_element(el, &mut content),
                }
            } else if let Some(text) = node.value().as_text() {
                push_text(text, &mut content);
            }
        }
        trim_edges(&mut content);
        if !content.is_empty() || !nested.is_empty() {
            items.push(ListItem { content, nested });
        }
    }
    Block::List { ordered, items }
}

fn parse_inlines(el: ElementRef<'_>) -> Vec<Inline> {
    let mut inlines = Vec::new();
    for node in el.children() {
        if let Some(child) = ElementRef::wrap(node) {
            push_inline_element(child, &mut inlines);
        } else if let Some(text) = node.value().as_text() {
            push_text(text, &mut inlines);
        }
    }
    trim_edges(&mut inlines);
    inlines
}

fn push_inline_element(el: ElementRef<'_>, out: &mut Vec<Inline>) {
    let text = element_text(el);
    if text.is_empty() {
        return;
    }
    match el.value().name() {
        "strong" | "b" => out.push(Inline::Strong(text)),
        "em" | "i" => out.push(Inline::Em(text)),
        _ => out.push(Inline::Text(text)),
    }
}

fn push_text(raw: &str, out: &mut Vec<Inline>) {
    let squashed = squash_ws(raw);
    if squashed.is_empty() {
        return;
    }
    // Merge with a preceding text run so spacing survives node boundaries.
    if let Some(Inline::Text(prev)) = out.last_mut() {
        prev.push_str(&squashed);
    } else {
        out.push(Inline::Text(squashed));
    }
}

fn heading(level: u8, el: ElementRef<'_>) -> Block {
    Block::Heading {
        level,
        text: element_text(el),
    }
}

/// All descendant text of an element, whitespace-squashed and trimmed.
fn element_text(el: ElementRef<'_>) -> String {
    let raw: String = el.text().collect();
    squash_ws(&raw).trim().to_string()
}

/// Collapse whitespace runs to single spaces, keeping edge spaces so that
/// adjacent inline runs ("<strong>Monday:</strong> roast chicken") stay
/// separated.
fn squash_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_ws = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_ws {
                out.push(' ');
            }
            prev_ws = true;
        } else {
            out.push(ch);
            prev_ws = false;
        }
    }
    out
}

/// Strip the leading space of the first run and the trailing space of the
/// last, dropping runs that were pure whitespace.
fn trim_edges(inlines: &mut Vec<Inline>) {
    if let Some(Inline::Text(first)) = inlines.first_mut()
        && first.starts_with(' ')
    {
        first.remove(0);
    }
    if let Some(Inline::Text(last)) = inlines.last_mut() {
        while last.ends_with(' ') {
            last.pop();
        }
    }
    inlines.retain(|i| !i.as_str().is_empty());
}

fn has_class(el: ElementRef<'_>, class: &str) -> bool {
    el.value()
        .attr("class")
        .is_some_and(|attr| attr.split_whitespace().any(|c| c == class))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_headings_and_paragraphs() {
        let doc = parse("<h3>Title</h3>\n<p>Body text.</p>");
        assert_eq!(
            doc.blocks,
            vec![
                Block::Heading {
                    level: 3,
                    text: "Title".to_string()
                },
                Block::Paragraph(vec![Inline::Text("Body text.".to_string())]),
            ]
        );
    }

    #[test]
    fn strong_run_keeps_surrounding_spaces() {
        let doc = parse("<p><strong>Monday:</strong> roast chicken</p>");
        let Block::Paragraph(inlines) = &doc.blocks[0] else {
            panic!("expected paragraph");
        };
        assert_eq!(
            inlines,
            &vec![
                Inline::Strong("Monday:".to_string()),
                Inline::Text(" roast chicken".to_string()),
            ]
        );
    }

    #[test]
    fn unescaped_ampersand_survives() {
        // The corpus contains raw "&" (e.g. "S&P 500"); html5ever is lenient.
        let doc = parse("<p>S&P 500 Index</p>");
        let Block::Paragraph(inlines) = &doc.blocks[0] else {
            panic!("expected paragraph");
        };
        assert_eq!(plain_text(inlines), "S&P 500 Index");
    }

    #[test]
    fn nested_list_items() {
        let doc = parse(
            "<ul><li><strong>Speed:</strong>\n  <ul><li>fast</li><li>slow</li></ul></li></ul>",
        );
        let Block::List { ordered, items } = &doc.blocks[0] else {
            panic!("expected list");
        };
        assert!(!ordered);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].content, vec![Inline::Strong("Speed:".to_string())]);
        let Block::List { items: inner, .. } = &items[0].nested[0] else {
            panic!("expected nested list");
        };
        assert_eq!(inner.len(), 2);
        assert_eq!(plain_text(&inner[0].content), "fast");
    }

    #[test]
    fn ordered_list_is_flagged() {
        let doc = parse("<ol><li>one</li><li>two</li></ol>");
        let Block::List { ordered, items } = &doc.blocks[0] else {
            panic!("expected list");
        };
        assert!(ordered);
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn highlight_callout_wraps_children() {
        let doc = parse(
            r#"<div class="article-highlight"><h4>Tip</h4><p>Save early.</p></div>"#,
        );
        let Block::Callout { kind, blocks } = &doc.blocks[0] else {
            panic!("expected callout");
        };
        assert_eq!(*kind, CalloutKind::Highlight);
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn stats_grid_yields_entries() {
        let doc = parse(concat!(
            r#"<div class="article-stats"><h4>Allocations</h4><div class="stats-grid">"#,
            r#"<div class="stat-item"><span class="stat-number">20s</span>"#,
            r#"<span class="stat-label">90% Stocks</span></div>"#,
            r#"</div></div>"#,
        ));
        let Block::Callout { kind, blocks } = &doc.blocks[0] else {
            panic!("expected callout");
        };
        assert_eq!(*kind, CalloutKind::Stats);
        let Some(Block::StatGrid(entries)) = blocks.get(1) else {
            panic!("expected stat grid after heading");
        };
        assert_eq!(entries[0].number, "20s");
        assert_eq!(entries[0].label, "90% Stocks");
    }

    #[test]
    fn blank_input_yields_empty_document() {
        assert!(parse("").is_empty());
        assert!(parse("   \n  ").is_empty());
    }

    #[test]
    fn first_paragraph_descends_into_intro_callout() {
        let doc = parse(
            r#"<div class="article-intro"><p>Lead text.</p></div><h3>Later</h3>"#,
        );
        assert_eq!(doc.first_paragraph_text().as_deref(), Some("Lead text."));
    }
}
