//! Classification of the raw text found between `<` and `>`.
//!
//! Attributes are never parsed: everything after the first whitespace of a tag
//! is dropped. Self-closing detection looks at the trimmed tag before that
//! truncation, so `<c />` and `<a id="1"/>` are both self-closing. Whitespace
//! is Unicode whitespace, so a no-break space separates attributes too.

use crate::element::is_valid_tag_name;
use crate::error::{Result, XmlError};

/// A tag as seen by the parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag<'a> {
    /// `<?...?>`, skipped entirely
    ProcessingInstruction,
    /// `<name ...>`
    Open(&'a str),
    /// `</name ...>`
    Close(&'a str),
    /// `<name .../>`
    SelfClosing(&'a str),
}

impl<'a> Tag<'a> {
    /// Classifies `raw`, the text between `<` and `>` with no delimiters.
    pub fn classify(raw: &'a str) -> Result<Self> {
        if raw.starts_with('?') {
            return Ok(Self::ProcessingInstruction);
        }

        let trimmed = raw.trim();
        if let Some(body) = trimmed.strip_suffix('/') {
            let name = strip_attributes(body);
            return validated(name, raw).map(Self::SelfClosing);
        }

        let name = strip_attributes(trimmed);
        match name.strip_prefix('/') {
            Some(closing) => validated(closing, raw).map(Self::Close),
            None => validated(name, raw).map(Self::Open),
        }
    }
}

fn strip_attributes(tag: &str) -> &str {
    tag.split(char::is_whitespace).next().unwrap_or_default()
}

fn validated<'a>(name: &'a str, raw: &str) -> Result<&'a str> {
    if is_valid_tag_name(name) {
        Ok(name)
    } else if name.is_empty() {
        Err(XmlError::parse_failure(format!("empty tag name in <{}>", raw)))
    } else {
        Err(XmlError::parse_failure(format!(
            "invalid tag name {:?} in <{}>",
            name, raw
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_and_close() {
        assert_eq!(Tag::classify("a").unwrap(), Tag::Open("a"));
        assert_eq!(Tag::classify("a  ").unwrap(), Tag::Open("a"));
        assert_eq!(Tag::classify("/a        ").unwrap(), Tag::Close("a"));
        assert_eq!(Tag::classify("/a x=\"1\"").unwrap(), Tag::Close("a"));
    }

    #[test]
    fn test_attributes_are_dropped() {
        assert_eq!(Tag::classify("a id=\"1\" ref=\"2\"").unwrap(), Tag::Open("a"));
        assert_eq!(Tag::classify("a\tid=\"1\"").unwrap(), Tag::Open("a"));
    }

    #[test]
    fn test_unicode_whitespace_separates_attributes() {
        assert_eq!(Tag::classify("a\u{a0}id=\"1\"").unwrap(), Tag::Open("a"));
        assert_eq!(Tag::classify("/a\u{2003}").unwrap(), Tag::Close("a"));
        assert_eq!(Tag::classify("c\u{a0}/").unwrap(), Tag::SelfClosing("c"));
        // control characters are part of the name
        assert_eq!(Tag::classify("a\u{1}b").unwrap(), Tag::Open("a\u{1}b"));
    }

    #[test]
    fn test_self_closing_forms() {
        assert_eq!(Tag::classify("c/").unwrap(), Tag::SelfClosing("c"));
        assert_eq!(Tag::classify("c /").unwrap(), Tag::SelfClosing("c"));
        assert_eq!(Tag::classify("a id=\"1\"/").unwrap(), Tag::SelfClosing("a"));
        assert_eq!(Tag::classify(" c / ").unwrap(), Tag::SelfClosing("c"));
    }

    #[test]
    fn test_processing_instruction() {
        assert_eq!(
            Tag::classify("?xml version=\"1.0\"?").unwrap(),
            Tag::ProcessingInstruction
        );
    }

    #[test]
    fn test_malformed_names() {
        for raw in ["", "  ", "/", "/ a", "/a/", "a<b", " ?x"] {
            let err = Tag::classify(raw).unwrap_err();
            assert!(err.is_parse_failure(), "{:?} should fail", raw);
        }
    }
}
