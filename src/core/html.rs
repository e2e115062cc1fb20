// src/core/html.rs
//
// Table rows out of an HTML document. Two interchangeable backends:
// a tag-block scanner (no DOM, tolerant of broken markup) and a real
// HTML5 parse via `scraper`. Both hand every cell through `sanitize`.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use scraper::{Html, Selector};

use super::sanitize::sanitize;

/// One table row: sanitized cell texts in document order.
pub type RawRow = Vec<String>;

/// "Given a document, produce rows of sanitized cells."
pub trait TableExtractor {
    fn extract_rows(&self, html: &str) -> Vec<RawRow>;
}

/// Backend selector, used by options and the CLI.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ExtractorKind {
    /// Case-insensitive tag-block scan
    #[default]
    Scan,
    /// HTML5 parser (scraper)
    Dom,
}

impl ExtractorKind {
    pub fn extractor(self) -> Box<dyn TableExtractor> {
        match self {
            ExtractorKind::Scan => Box::new(TagScanExtractor),
            ExtractorKind::Dom => Box::new(DomExtractor),
        }
    }
}

/* ---------------- tag-block scan ---------------- */

const ROW_OPEN: &[&str] = &["tr"];
const ROW_CLOSE: &[&str] = &["</tr>"];
const CELL_OPEN: &[&str] = &["td", "th"];
const CELL_CLOSE: &[&str] = &["</td>", "</th>"];

#[derive(Clone, Copy, Debug, Default)]
pub struct TagScanExtractor;

impl TableExtractor for TagScanExtractor {
    fn extract_rows(&self, html: &str) -> Vec<RawRow> {
        // ASCII lowering keeps byte offsets identical to `html`.
        let lc = html.to_ascii_lowercase();
        let mut rows = Vec::new();

        let mut pos = 0usize;
        while let Some(tr) = next_tag_block_ci(&lc, ROW_OPEN, ROW_CLOSE, pos) {
            pos = tr.end;
            let (row_html, row_lc) = (&html[tr.inner.clone()], &lc[tr.inner.clone()]);

            let mut cells = Vec::new();
            let mut td_pos = 0usize;
            while let Some(td) = next_tag_block_ci(row_lc, CELL_OPEN, CELL_CLOSE, td_pos) {
                td_pos = td.end;
                cells.push(sanitize(&row_html[td.inner]));
            }
            rows.push(cells);
        }
        rows
    }
}

/// Byte ranges of one `<tag …>inner</tag>` block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagBlock {
    pub start: usize,
    pub inner: std::ops::Range<usize>,
    pub end: usize,
}

/// Find the next block opened by any of `names` at or after `from`, closed by
/// the earliest of `closers`. `lc` must already be lowercase.
/// A block with no closer ends the scan.
pub fn next_tag_block_ci(
    lc: &str,
    names: &[&str],
    closers: &[&str],
    from: usize,
) -> Option<TagBlock> {
    let start = find_open_tag(lc, names, from)?;
    let open_end = lc[start..].find('>')? + start + 1;
    let (close_at, close_len) = closers
        .iter()
        .filter_map(|c| lc[open_end..].find(c).map(|i| (open_end + i, c.len())))
        .min_by_key(|&(at, _)| at)?;
    Some(TagBlock { start, inner: open_end..close_at, end: close_at + close_len })
}

// `<tr` only counts when followed by `>`, `/` or whitespace; `<track>` does not.
fn find_open_tag(lc: &str, names: &[&str], from: usize) -> Option<usize> {
    let mut pos = from;
    while let Some(rel) = lc.get(pos..)?.find('<') {
        let at = pos + rel;
        let rest = &lc.as_bytes()[at + 1..];
        let hit = names.iter().any(|n| {
            rest.starts_with(n.as_bytes())
                && matches!(
                    rest.get(n.len()),
                    Some(&c) if c == b'>' || c == b'/' || c.is_ascii_whitespace()
                )
        });
        if hit {
            return Some(at);
        }
        pos = at + 1;
    }
    None
}

/* ---------------- DOM ---------------- */

static ROW: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").expect("row selector"));
static CELL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td, th").expect("cell selector"));
static SERIALIZED_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&(amp|lt|gt|nbsp);").expect("escape pattern"));

/// The parser would decode character references itself (`&ndash;` to `–`,
/// `&#0;` to U+FFFD). Every `&` is escaped before the parse so references
/// survive as text, and the serializer's own escapes are undone afterwards,
/// leaving `sanitize` the cell markup as written.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomExtractor;

impl TableExtractor for DomExtractor {
    fn extract_rows(&self, html: &str) -> Vec<RawRow> {
        let doc = Html::parse_document(&html.replace('&', "&amp;"));
        doc.select(&ROW)
            .map(|tr| {
                tr.select(&CELL)
                    .map(|td| sanitize(&unescape_serialized(&td.inner_html())))
                    .collect()
            })
            .collect()
    }
}

// Single pass, so `&amp;lt;` comes back as the `&lt;` that was in the source.
fn unescape_serialized(s: &str) -> String {
    SERIALIZED_ESCAPE
        .replace_all(s, |c: &Captures| match &c[1] {
            "amp" => "&",
            "lt" => "<",
            "gt" => ">",
            _ => "\u{a0}",
        })
        .into_owned()
}
