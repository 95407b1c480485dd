//! Book prose, parsed from the embedded HTML asset.
//!
//! The markup is a small, fixed vocabulary:
//!
//! - `header.cover`: kicker, `h1` title, tagline
//! - `article`: a flat run of blocks; every `h2[id]` opens a new section
//! - `footer`: closing lines and the copyright notice
//!
//! Inside `article`, `h3` is a subtitle, `p` a paragraph (with `strong`
//! runs), `blockquote` a highlight box, `aside[title]` a tip box,
//! `dl.cards` / `dl.steps` card grids, and `ul.chips` / `ul` term lists.

use scraper::{ElementRef, Html, Node, Selector};

use super::ChapterRegistry;
use crate::error::BookError;

const BOOK_HTML: &str = include_str!("../../assets/book.html");

/// Whole-book content in document order.
#[derive(Debug, Clone)]
pub struct BookContent {
    /// Document `<title>`.
    pub title: String,
    pub cover: Cover,
    pub sections: Vec<Section>,
    pub epilogue: Epilogue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cover {
    pub kicker: String,
    pub title: String,
    pub tagline: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Epilogue {
    pub lines: Vec<String>,
    pub copyright: String,
}

/// One chapter's worth of blocks, anchored by `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    SubTitle(String),
    Paragraph(Vec<Inline>),
    Highlight(String),
    Tip { title: String, body: String },
    Cards(Vec<Card>),
    Steps { title: String, items: Vec<Card> },
    Chips(Vec<String>),
    Bullets(Vec<String>),
}

/// A run of paragraph text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inline {
    pub text: String,
    pub strong: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub lines: Vec<String>,
    pub tone: Option<Tone>,
}

/// Accent colour family of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
    Calm,
    Clash,
}

impl Tone {
    pub fn from_attr(value: &str) -> Option<Self> {
        match value {
            "wood" => Some(Tone::Wood),
            "fire" => Some(Tone::Fire),
            "earth" => Some(Tone::Earth),
            "metal" => Some(Tone::Metal),
            "water" => Some(Tone::Water),
            "calm" => Some(Tone::Calm),
            "clash" => Some(Tone::Clash),
            _ => None,
        }
    }
}

impl Section {
    /// All text of the section, blocks separated by newlines.
    pub fn plain_text(&self) -> String {
        let mut buf = String::new();
        for block in &self.blocks {
            if !buf.is_empty() {
                buf.push('\n');
            }
            match block {
                Block::SubTitle(t) | Block::Highlight(t) => buf.push_str(t),
                Block::Paragraph(runs) => {
                    for run in runs {
                        buf.push_str(&run.text);
                    }
                }
                Block::Tip { title, body } => {
                    buf.push_str(title);
                    buf.push('\n');
                    buf.push_str(body);
                }
                Block::Cards(cards) | Block::Steps { items: cards, .. } => {
                    let lines: Vec<String> = cards
                        .iter()
                        .map(|c| format!("{} {}", c.title, c.lines.join(" ")))
                        .collect();
                    buf.push_str(&lines.join("\n"));
                }
                Block::Chips(items) | Block::Bullets(items) => buf.push_str(&items.join(" ")),
            }
        }
        buf
    }
}

impl BookContent {
    /// Parse the book shipped with the binary.
    pub fn builtin() -> Result<Self, BookError> {
        parse_book(BOOK_HTML)
    }

    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Verify that sections appear exactly in registry order.
    pub fn check_against(&self, registry: &ChapterRegistry) -> Result<(), BookError> {
        let found: Vec<&str> = self.sections.iter().map(|s| s.id.as_str()).collect();
        let expected: Vec<&str> = registry.ids().collect();
        if found == expected {
            Ok(())
        } else {
            Err(BookError::ContentMismatch {
                expected: expected.into_iter().map(String::from).collect(),
                found: found.into_iter().map(String::from).collect(),
            })
        }
    }
}

/// Parse book markup into [`BookContent`].
pub fn parse_book(html: &str) -> Result<BookContent, BookError> {
    let document = Html::parse_document(html);

    let title = select_first(&document, "title")
        .map(|el| squash(&el.text().collect::<String>()))
        .unwrap_or_default();

    let cover_el =
        select_first(&document, "header.cover").ok_or(BookError::MissingElement {
            selector: "header.cover",
        })?;
    let cover = parse_cover(cover_el)?;

    let article = select_first(&document, "article").ok_or(BookError::MissingElement {
        selector: "article",
    })?;
    let sections = parse_sections(article)?;

    let epilogue = select_first(&document, "footer")
        .map(parse_epilogue)
        .unwrap_or_default();

    Ok(BookContent {
        title,
        cover,
        sections,
        epilogue,
    })
}

fn select_first<'a>(document: &'a Html, selector: &str) -> Option<ElementRef<'a>> {
    let sel = Selector::parse(selector).ok()?;
    document.select(&sel).next()
}

fn child_elements<'a>(el: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    el.children().filter_map(ElementRef::wrap)
}

fn has_class(el: ElementRef<'_>, class: &str) -> bool {
    el.value().classes().any(|c| c == class)
}

fn text_of(el: ElementRef<'_>) -> String {
    squash(&el.text().collect::<String>())
}

fn parse_cover(el: ElementRef<'_>) -> Result<Cover, BookError> {
    let mut kicker = String::new();
    let mut title = None;
    let mut tagline = String::new();

    for child in child_elements(el) {
        match child.value().name() {
            "h1" => title = Some(text_of(child)),
            "p" if has_class(child, "kicker") => kicker = text_of(child),
            "p" if has_class(child, "tagline") => tagline = text_of(child),
            _ => {}
        }
    }

    let title = title.ok_or(BookError::MissingElement {
        selector: "header.cover h1",
    })?;
    Ok(Cover {
        kicker,
        title,
        tagline,
    })
}

fn parse_sections(article: ElementRef<'_>) -> Result<Vec<Section>, BookError> {
    let mut sections: Vec<Section> = Vec::new();

    for el in child_elements(article) {
        let tag = el.value().name();
        if tag == "h2" {
            let id = el
                .value()
                .attr("id")
                .filter(|id| !id.is_empty())
                .ok_or(BookError::MissingElement { selector: "h2[id]" })?;
            sections.push(Section {
                id: id.to_string(),
                title: text_of(el),
                blocks: Vec::new(),
            });
            continue;
        }

        // Blocks before the first heading have nowhere to go.
        let Some(section) = sections.last_mut() else {
            continue;
        };
        if let Some(block) = parse_block(el) {
            section.blocks.push(block);
        }
    }

    Ok(sections)
}

fn parse_block(el: ElementRef<'_>) -> Option<Block> {
    match el.value().name() {
        "h3" => Some(Block::SubTitle(text_of(el))),
        "p" => {
            let runs = parse_inlines(el);
            (!runs.is_empty()).then_some(Block::Paragraph(runs))
        }
        "blockquote" => Some(Block::Highlight(text_of(el))),
        "aside" => Some(Block::Tip {
            title: el.value().attr("title").map(squash).unwrap_or_default(),
            body: text_of(el),
        }),
        "dl" if has_class(el, "steps") => Some(Block::Steps {
            title: el.value().attr("title").map(squash).unwrap_or_default(),
            items: parse_cards(el),
        }),
        "dl" => Some(Block::Cards(parse_cards(el))),
        "ul" | "ol" => {
            let items: Vec<String> = child_elements(el)
                .filter(|li| li.value().name() == "li")
                .map(text_of)
                .filter(|t| !t.is_empty())
                .collect();
            if has_class(el, "chips") {
                Some(Block::Chips(items))
            } else {
                Some(Block::Bullets(items))
            }
        }
        other => {
            log::debug!("skipping unsupported <{}> block", other);
            None
        }
    }
}

fn parse_cards(dl: ElementRef<'_>) -> Vec<Card> {
    let mut cards: Vec<Card> = Vec::new();
    for el in child_elements(dl) {
        match el.value().name() {
            "dt" => cards.push(Card {
                title: text_of(el),
                lines: Vec::new(),
                tone: el.value().attr("data-tone").and_then(Tone::from_attr),
            }),
            "dd" => {
                if let Some(card) = cards.last_mut() {
                    card.lines.push(text_of(el));
                }
            }
            _ => {}
        }
    }
    cards
}

fn parse_inlines(el: ElementRef<'_>) -> Vec<Inline> {
    let mut runs: Vec<Inline> = Vec::new();

    for child in el.children() {
        match child.value() {
            Node::Text(t) => push_run(&mut runs, collapse(&t.text), false),
            Node::Element(e) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    let strong = matches!(e.name(), "strong" | "b");
                    let text = collapse(&child_el.text().collect::<String>());
                    push_run(&mut runs, text, strong);
                }
            }
            _ => {}
        }
    }

    if let Some(first) = runs.first_mut() {
        first.text = first.text.trim_start().to_string();
    }
    if let Some(last) = runs.last_mut() {
        last.text = last.text.trim_end().to_string();
    }
    runs.retain(|r| !r.text.is_empty());
    runs
}

fn push_run(runs: &mut Vec<Inline>, text: String, strong: bool) {
    if text.is_empty() {
        return;
    }
    match runs.last_mut() {
        Some(last) if last.strong == strong => last.text.push_str(&text),
        _ => runs.push(Inline { text, strong }),
    }
}

fn parse_epilogue(footer: ElementRef<'_>) -> Epilogue {
    let mut epilogue = Epilogue::default();
    for el in child_elements(footer) {
        match el.value().name() {
            "p" => epilogue.lines.push(text_of(el)),
            "small" => epilogue.copyright = text_of(el),
            _ => {}
        }
    }
    epilogue
}

/// Collapse whitespace runs and trim both ends.
fn squash(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Collapse whitespace runs to a single space, keeping edge spaces.
fn collapse(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(ch);
            in_space = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::Chapter;

    const SAMPLE: &str = r#"
    <html><head><title> Sample Book </title></head><body>
      <header class="cover">
        <p class="kicker">Kicker</p>
        <h1>Main   Title</h1>
        <p class="tagline">Tag</p>
      </header>
      <article>
        <p>orphan paragraph</p>
        <h2 id="a">Chapter A</h2>
        <p>Plain <strong>bold part</strong> tail.</p>
        <h3>Sub</h3>
        <aside title="Tip title">tip body</aside>
        <dl class="cards">
          <dt data-tone="fire">Fire</dt><dd>one</dd><dd>two</dd>
          <dt>Plain</dt><dd>three</dd>
        </dl>
        <h2 id="b">Chapter B</h2>
        <blockquote> quoted
           text </blockquote>
        <ul class="chips"><li>x</li><li>y</li></ul>
        <dl class="steps" title="Road"><dt>Go</dt><dd>now</dd></dl>
      </article>
      <footer><p>bye</p><small>&copy; me</small></footer>
    </body></html>
    "#;

    #[test]
    fn parses_cover_and_title() {
        let book = parse_book(SAMPLE).unwrap();
        assert_eq!(book.title, "Sample Book");
        assert_eq!(book.cover.title, "Main Title");
        assert_eq!(book.cover.kicker, "Kicker");
        assert_eq!(book.cover.tagline, "Tag");
    }

    #[test]
    fn splits_sections_at_h2() {
        let book = parse_book(SAMPLE).unwrap();
        let ids: Vec<&str> = book.sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
        assert_eq!(book.sections[0].title, "Chapter A");
        // orphan paragraph before the first heading is dropped
        assert_eq!(book.sections[0].blocks.len(), 4);
    }

    #[test]
    fn paragraph_keeps_strong_runs() {
        let book = parse_book(SAMPLE).unwrap();
        let Block::Paragraph(runs) = &book.sections[0].blocks[0] else {
            panic!("expected paragraph");
        };
        assert_eq!(
            runs,
            &vec![
                Inline { text: "Plain ".into(), strong: false },
                Inline { text: "bold part".into(), strong: true },
                Inline { text: " tail.".into(), strong: false },
            ]
        );
    }

    #[test]
    fn cards_collect_dd_lines_and_tone() {
        let book = parse_book(SAMPLE).unwrap();
        let Block::Cards(cards) = &book.sections[0].blocks[3] else {
            panic!("expected cards");
        };
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].tone, Some(Tone::Fire));
        assert_eq!(cards[0].lines, vec!["one", "two"]);
        assert_eq!(cards[1].tone, None);
    }

    #[test]
    fn second_section_blocks() {
        let book = parse_book(SAMPLE).unwrap();
        let blocks = &book.sections[1].blocks;
        assert_eq!(blocks[0], Block::Highlight("quoted text".into()));
        assert_eq!(blocks[1], Block::Chips(vec!["x".into(), "y".into()]));
        let Block::Steps { title, items } = &blocks[2] else {
            panic!("expected steps");
        };
        assert_eq!(title, "Road");
        assert_eq!(items[0].title, "Go");
    }

    #[test]
    fn epilogue_decodes_entities() {
        let book = parse_book(SAMPLE).unwrap();
        assert_eq!(book.epilogue.lines, vec!["bye"]);
        assert_eq!(book.epilogue.copyright, "© me");
    }

    #[test]
    fn missing_cover_is_an_error() {
        let err = parse_book("<html><body><article></article></body></html>").unwrap_err();
        assert_eq!(err, BookError::MissingElement { selector: "header.cover" });
    }

    #[test]
    fn heading_without_id_is_an_error() {
        let html = r#"<header class="cover"><h1>T</h1></header><article><h2>x</h2></article>"#;
        let err = parse_book(html).unwrap_err();
        assert_eq!(err, BookError::MissingElement { selector: "h2[id]" });
    }

    #[test]
    fn builtin_book_matches_registry() {
        let book = BookContent::builtin().unwrap();
        let registry = ChapterRegistry::builtin().unwrap();
        book.check_against(&registry).unwrap();
        for (section, chapter) in book.sections.iter().zip(registry.iter()) {
            assert_eq!(section.title, chapter.title);
        }
        assert!(book.section("ch4").unwrap().plain_text().contains("지장간"));
    }

    #[test]
    fn reordered_registry_is_a_mismatch() {
        let book = parse_book(SAMPLE).unwrap();
        let registry = ChapterRegistry::new(vec![
            Chapter::new("b", "B"),
            Chapter::new("a", "A"),
        ])
        .unwrap();
        assert!(matches!(
            book.check_against(&registry),
            Err(BookError::ContentMismatch { .. })
        ));
    }
}
