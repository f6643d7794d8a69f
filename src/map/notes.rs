//! Note tag metadata
//!
//! Object notes carry free text plus `<name:value>` or `<name>` tags. This
//! extracts them the way the host engine builds an object's `meta` table.

use std::collections::HashMap;

/// Value of one note tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaValue {
    /// `<name>` with no colon
    Flag,

    /// `<name:value>`, value kept verbatim (leading spaces included)
    Text(String),
}

/// Collect every tag in a note. Later tags with the same name win.
///
/// A tag name is one or more characters other than `<`, `>` and `:`. With a
/// colon after the name the rest up to `>` is the value; without one the tag
/// is a flag and anything up to `>` is discarded.
pub fn extract_metadata(note: &str) -> HashMap<String, MetaValue> {
    let mut meta = HashMap::new();
    let mut pos = 0;

    while let Some(offset) = note[pos..].find('<') {
        let open = pos + offset;
        match read_tag(&note[open + 1..]) {
            Some((name, value, consumed)) => {
                meta.insert(name.to_string(), value);
                pos = open + 1 + consumed;
            }
            None => pos = open + 1,
        }
    }

    meta
}

/// Read one tag body following a `<`. Returns the name, value and bytes consumed
/// including the closing `>`.
fn read_tag(s: &str) -> Option<(&str, MetaValue, usize)> {
    let name_len = s.find(['<', '>', ':'])?;
    if name_len == 0 {
        return None;
    }
    let name = &s[..name_len];
    let rest = &s[name_len..];

    let close = rest.find('>')?;
    let value = match rest.strip_prefix(':') {
        Some(text) => MetaValue::Text(text[..close - 1].to_string()),
        None => MetaValue::Flag,
    };

    Some((name, value, name_len + close + 1))
}
