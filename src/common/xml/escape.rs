use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;
use std::borrow::Cow;

const SPECIAL: [&str; 5] = ["&", "<", ">", "\"", "'"];
const ENTITIES: [&str; 5] = ["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"];

// Built once; shared by every writer
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(SPECIAL)
        .expect("Failed to build XML escaper")
});

/// Escape XML special characters in cell text and attribute values.
///
/// Returns the input unchanged (borrowed) when nothing needs escaping.
///
/// # Examples
///
/// ```
/// use tabula::common::xml::escape_xml;
/// assert_eq!(escape_xml("a & b"), "a &amp; b");
/// assert_eq!(escape_xml("plain"), "plain");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> Cow<'_, str> {
    if XML_ESCAPER.is_match(s) {
        Cow::Owned(XML_ESCAPER.replace_all(s, &ENTITIES))
    } else {
        Cow::Borrowed(s)
    }
}

/// Resolve the predefined XML entities and numeric character references.
///
/// Unknown or malformed references are kept verbatim.
///
/// # Examples
///
/// ```
/// use tabula::common::xml::unescape_xml;
/// assert_eq!(unescape_xml("&lt;a &amp; b&gt;"), "<a & b>");
/// assert_eq!(unescape_xml("line&#10;break"), "line\nbreak");
/// assert_eq!(unescape_xml("&#x41;&unknown;"), "A&unknown;");
/// ```
pub fn unescape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains('&') {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        match tail.find(';').and_then(|end| resolve_reference(&tail[1..end]).map(|c| (c, end))) {
            Some((resolved, end)) => {
                out.push(resolved);
                rest = &tail[end + 1..];
            },
            None => {
                out.push('&');
                rest = &tail[1..];
            },
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// Resolve the body of a reference (the text between `&` and `;`).
pub(crate) fn resolve_reference(name: &str) -> Option<char> {
    if let Some(code) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
        return u32::from_str_radix(code, 16).ok().and_then(char::from_u32);
    }
    if let Some(code) = name.strip_prefix('#') {
        return code.parse::<u32>().ok().and_then(char::from_u32);
    }
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_round_trips_through_unescape() {
        let raw = "<a href=\"x\">Tom & 'Jerry'</a>";
        assert_eq!(unescape_xml(&escape_xml(raw)), raw);
    }

    #[test]
    fn test_unescape_keeps_bare_ampersand() {
        assert_eq!(unescape_xml("R&D; done"), "R&D; done");
        assert_eq!(unescape_xml("trailing &"), "trailing &");
    }
}
