// src/core/sanitize.rs

use std::sync::LazyLock;

use regex::{Captures, Regex};

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern"));
static DEC_ENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&#(\d+);").expect("decimal entity pattern"));
static HEX_ENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&#x([0-9a-fA-F]+);").expect("hex entity pattern"));

/// Named entities we understand, applied in this order.
/// `&amp;` goes before `&lt;`/`&gt;`, so `&amp;lt;` ends up as `<`.
const NAMED_ENTITIES: [(&str, &str); 8] = [
    ("&nbsp;", " "),
    ("&ndash;", "-"),
    ("&mdash;", "-"),
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&apos;", "'"),
];

/// Full cell clean-up: strip tags, decode entities, drop control chars, trim.
/// Control chars go last since numeric entities can decode into them.
pub fn sanitize(raw: &str) -> String {
    if raw.is_empty() {
        return s!();
    }
    let text = strip_tags(raw);
    let text = decode_entities(&text);
    strip_control_chars(&text).trim().to_string()
}

/// Remove anything shaped like `<...>`. Not a parser; a `>` inside a quoted
/// attribute ends the tag early.
pub fn strip_tags(s: &str) -> String {
    TAG.replace_all(s, "").into_owned()
}

pub fn decode_entities(s: &str) -> String {
    let mut out = s.to_string();
    for (entity, text) in NAMED_ENTITIES {
        if out.contains(entity) {
            out = out.replace(entity, text);
        }
    }
    let out = DEC_ENTITY.replace_all(&out, |c: &Captures| code_point(&c[1], 10));
    HEX_ENTITY.replace_all(&out, |c: &Captures| code_point(&c[1], 16)).into_owned()
}

// Surrogates and out-of-range values have no `char`; they decode to nothing.
fn code_point(digits: &str, radix: u32) -> String {
    u32::from_str_radix(digits, radix)
        .ok()
        .and_then(char::from_u32)
        .map(String::from)
        .unwrap_or_default()
}

/// U+0000–U+0008, U+000B, U+000C, U+000E–U+001F. Tab, LF and CR stay.
pub fn is_disallowed_control(ch: char) -> bool {
    matches!(ch, '\u{0}'..='\u{8}' | '\u{B}' | '\u{C}' | '\u{E}'..='\u{1F}')
}

pub fn strip_control_chars(s: &str) -> String {
    s.chars().filter(|&c| !is_disallowed_control(c)).collect()
}
