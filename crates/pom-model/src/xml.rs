//! Generic XML element tree built from quick-xml events.
//!
//! The tree only keeps what decoding needs: local names, attributes, text and
//! ordered children. Comments, processing instructions and the doctype are
//! dropped.
//!
//! Whitespace-only character data is treated as empty, unless some of it came
//! from a CDATA section.

use crate::error::{PomError, Result};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Deepest element nesting accepted before a document is rejected.
pub const MAX_DEPTH: usize = 10_000;

/// Element in the parsed document tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Local name, without any namespace prefix.
    pub name: String,
    /// Attributes in document order, keyed by their qualified name.
    pub attributes: Vec<(String, String)>,
    /// Concatenated character data directly inside this element.
    ///
    /// Empty when the element only holds whitespace outside CDATA.
    pub text: String,
    pub children: Vec<Element>,
}

impl Element {
    fn new(name: String) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Child elements with the given local name, in document order.
    pub fn children_named<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |child| child.name == name)
    }

    fn finish(&mut self, has_cdata: bool) {
        if !has_cdata && self.text.trim().is_empty() {
            self.text.clear();
        }
    }
}

/// Parses a complete XML document and returns its root element.
///
/// # Errors
///
/// Returns [`PomError::ParseError`] if the content is not UTF-8 or not
/// well-formed XML (mismatched or unclosed tags, bad attributes, unknown
/// entities, missing or duplicate root).
pub fn parse_document(content: &[u8]) -> Result<Element> {
    let content = std::str::from_utf8(content)
        .map_err(|e| PomError::parse(format!("document is not valid UTF-8: {e}")))?;

    let mut reader = Reader::from_str(content);
    reader.config_mut().check_end_names = true;

    let mut stack: Vec<Element> = Vec::new();
    // Parallel to `stack`: whether the open element received CDATA.
    let mut cdata: Vec<bool> = Vec::new();
    let mut root: Option<Element> = None;
    let mut element_count = 0usize;

    loop {
        let position = reader.buffer_position();
        let event = reader
            .read_event()
            .map_err(|e| PomError::parse(format!("at byte {position}: {e}")))?;

        match event {
            Event::Start(ref e) => {
                if root.is_some() {
                    return Err(PomError::parse("document has more than one root element"));
                }
                check_depth(stack.len() + 1)?;
                stack.push(start_element(e)?);
                cdata.push(false);
                element_count += 1;
            }
            Event::Empty(ref e) => {
                if root.is_some() {
                    return Err(PomError::parse("document has more than one root element"));
                }
                check_depth(stack.len() + 1)?;
                let element = start_element(e)?;
                element_count += 1;
                match stack.last_mut() {
                    Some(parent) => parent.children.push(element),
                    None => root = Some(element),
                }
            }
            Event::End(_) => {
                let Some(mut current) = stack.pop() else {
                    return Err(PomError::parse(format!(
                        "at byte {position}: unexpected closing tag"
                    )));
                };
                current.finish(cdata.pop().unwrap_or_default());
                match stack.last_mut() {
                    Some(parent) => parent.children.push(current),
                    None => root = Some(current),
                }
            }
            Event::Text(ref e) => {
                let raw = utf8(e)?;
                let text = quick_xml::escape::unescape(raw)
                    .map_err(|e| PomError::parse(format!("at byte {position}: {e}")))?;
                append_text(&mut stack, &text)?;
            }
            Event::GeneralRef(ref e) => {
                let name = utf8(e)?;
                let reference = format!("&{name};");
                let text = quick_xml::escape::unescape(&reference)
                    .map_err(|e| PomError::parse(format!("at byte {position}: {e}")))?;
                append_text(&mut stack, &text)?;
            }
            Event::CData(ref e) => {
                let text = utf8(e)?;
                append_text(&mut stack, text)?;
                if let Some(flag) = cdata.last_mut() {
                    *flag = true;
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(PomError::parse(format!(
            "unexpected end of document: element <{}> is not closed",
            open.name
        )));
    }

    let root = root.ok_or_else(|| PomError::parse("document has no root element"))?;
    tracing::trace!(root = %root.name, elements = element_count, "built XML element tree");
    Ok(root)
}

fn check_depth(depth: usize) -> Result<()> {
    if depth > MAX_DEPTH {
        return Err(PomError::parse(format!(
            "document nesting exceeds {MAX_DEPTH} levels"
        )));
    }
    Ok(())
}

fn start_element(start: &BytesStart<'_>) -> Result<Element> {
    let name = std::str::from_utf8(start.local_name().as_ref())
        .map_err(|e| PomError::parse(format!("invalid element name: {e}")))?
        .to_string();

    let mut element = Element::new(name);
    for attr in start.attributes() {
        let attr = attr
            .map_err(|e| PomError::parse(format!("invalid attribute in <{}>: {e}", element.name)))?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|e| PomError::parse(format!("invalid attribute name: {e}")))?
            .to_string();
        let raw = std::str::from_utf8(&attr.value)
            .map_err(|e| PomError::parse(format!("invalid attribute value: {e}")))?;
        let value = quick_xml::escape::unescape(raw)
            .map_err(|e| PomError::parse(format!("invalid attribute value for '{key}': {e}")))?
            .into_owned();
        element.attributes.push((key, value));
    }
    Ok(element)
}

fn append_text(stack: &mut [Element], text: &str) -> Result<()> {
    match stack.last_mut() {
        Some(current) => current.text.push_str(text),
        None if text.trim().is_empty() => {}
        None => return Err(PomError::parse("text content outside of the root element")),
    }
    Ok(())
}

fn utf8(bytes: &[u8]) -> Result<&str> {
    std::str::from_utf8(bytes).map_err(|e| PomError::parse(format!("invalid UTF-8: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested_elements() {
        let root = parse_document(b"<project><a><b>1</b><b>2</b></a></project>").unwrap();
        assert_eq!(root.name, "project");
        assert_eq!(root.children.len(), 1);
        let texts: Vec<_> = root.children[0]
            .children_named("b")
            .map(|b| b.text.as_str())
            .collect();
        assert_eq!(texts, ["1", "2"]);
    }

    #[test]
    fn test_whitespace_only_text_is_empty() {
        let root = parse_document(b"<project>\n  <name>   </name>\n</project>").unwrap();
        assert_eq!(root.text, "");
        assert_eq!(root.children[0].text, "");
    }

    #[test]
    fn test_text_is_not_trimmed() {
        let root = parse_document(b"<project><name> spaced </name></project>").unwrap();
        assert_eq!(root.children[0].text, " spaced ");
    }

    #[test]
    fn test_entities_and_cdata() {
        let root = parse_document(
            b"<project><name>A &amp; B &lt;C&gt; &#65;</name><description><![CDATA[<raw> & text]]></description></project>",
        )
        .unwrap();
        assert_eq!(root.children[0].text, "A & B <C> A");
        assert_eq!(root.children[1].text, "<raw> & text");
    }

    #[test]
    fn test_unknown_entity_is_error() {
        let result = parse_document(b"<project><name>&bogus;</name></project>");
        assert!(result.unwrap_err().is_malformed());
    }

    #[test]
    fn test_namespace_prefix_is_stripped() {
        let root = parse_document(
            br#"<pom:project xmlns:pom="http://maven.apache.org/POM/4.0.0"><pom:groupId>g</pom:groupId></pom:project>"#,
        )
        .unwrap();
        assert_eq!(root.name, "project");
        assert_eq!(root.children[0].name, "groupId");
        assert_eq!(
            root.attribute("xmlns:pom"),
            Some("http://maven.apache.org/POM/4.0.0")
        );
    }

    #[test]
    fn test_attributes_are_unescaped() {
        let root = parse_document(br#"<project a="x &amp; y"/>"#).unwrap();
        assert_eq!(root.attribute("a"), Some("x & y"));
        assert_eq!(root.attribute("missing"), None);
    }

    #[test]
    fn test_comments_and_declarations_skipped() {
        let root = parse_document(
            b"<?xml version=\"1.0\"?>\n<!-- header -->\n<project><!-- c --><name>n</name></project>\n",
        )
        .unwrap();
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].text, "n");
    }

    #[test]
    fn test_cdata_whitespace_is_kept() {
        let root = parse_document(
            b"<project><name><![CDATA[   ]]></name><url> <![CDATA[x]]> </url></project>",
        )
        .unwrap();
        assert_eq!(root.children[0].text, "   ");
        assert_eq!(root.children[1].text, " x ");
    }

    fn nested(depth: usize) -> String {
        let mut xml = String::with_capacity(depth * 8);
        xml.push_str("<project>");
        for _ in 1..depth {
            xml.push_str("<x>");
        }
        for _ in 1..depth {
            xml.push_str("</x>");
        }
        xml.push_str("</project>");
        xml
    }

    #[test]
    fn test_nesting_within_limit() {
        let root = parse_document(nested(64).as_bytes()).unwrap();
        assert_eq!(root.children.len(), 1);
    }

    #[test]
    fn test_nesting_beyond_limit_is_error() {
        let err = parse_document(nested(MAX_DEPTH + 1).as_bytes()).unwrap_err();
        assert!(err.is_malformed());
        assert!(err.to_string().contains("nesting"));

        let err = parse_document(nested(MAX_DEPTH * 3).as_bytes()).unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_self_closing_element_beyond_limit() {
        let mut xml = String::from("<project>");
        xml.push_str(&"<x>".repeat(MAX_DEPTH - 1));
        xml.push_str("<y/>");
        xml.push_str(&"</x>".repeat(MAX_DEPTH - 1));
        xml.push_str("</project>");
        let err = parse_document(xml.as_bytes()).unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_mismatched_tags() {
        let result = parse_document(b"<project><groupId>g</project>");
        assert!(result.unwrap_err().is_malformed());
    }

    #[test]
    fn test_unclosed_root() {
        let result = parse_document(b"<project><groupId>g</groupId>");
        assert!(result.unwrap_err().is_malformed());
    }

    #[test]
    fn test_empty_document() {
        assert!(parse_document(b"").unwrap_err().is_malformed());
        assert!(parse_document(b"<!-- only a comment -->").unwrap_err().is_malformed());
    }

    #[test]
    fn test_multiple_roots() {
        let result = parse_document(b"<project></project><project></project>");
        assert!(result.unwrap_err().is_malformed());
    }

    #[test]
    fn test_text_outside_root() {
        let result = parse_document(b"<project></project>trailing");
        assert!(result.unwrap_err().is_malformed());
    }

    #[test]
    fn test_invalid_utf8() {
        let result = parse_document(b"<project><name>\xff\xfe</name></project>");
        assert!(result.unwrap_err().is_malformed());
    }

    #[test]
    fn test_malformed_attribute() {
        let result = parse_document(br#"<project attr="unclosed></project>"#);
        assert!(result.is_err());
    }
}
