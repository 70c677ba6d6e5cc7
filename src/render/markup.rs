//! The boundary between untrusted entity fields and markup.
//!
//! Nothing coming from the data endpoint reaches the results surface without
//! going through [`escape`]; URLs additionally go through [`is_safe_url`].

use std::borrow::Cow;
use url::Url;

/// Escapes text for use in element content or a double-quoted attribute.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Whether `url` may be used as a link target or image source.
///
/// Relative references are allowed; absolute ones only with `http` or
/// `https`. Surrounding whitespace and embedded tabs or newlines are ignored
/// while parsing, the way browsers do.
pub fn is_safe_url(url: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => is_web_url(&parsed),
        Err(url::ParseError::RelativeUrlWithoutBase) => true,
        Err(_) => false,
    }
}

/// Whether `url` is absolute and carries a web scheme.
pub(crate) fn is_web_url(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https")
}
