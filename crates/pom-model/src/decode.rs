//! Path resolution and field decoders driven by the mapping table.
//!
//! A path is a `>`-separated list of element names. `dependencies>dependency`
//! descends into every `<dependencies>` child and collects every
//! `<dependency>` inside it, so the wrapper never shows up in the model.
//!
//! Absent elements and empty elements decode to the same zero value. Callers
//! cannot tell `<version/>` from a missing `<version>`.

use crate::xml::Element;
use std::collections::HashMap;

/// Separator between the segments of a compound path.
pub const PATH_SEPARATOR: char = '>';

/// One row of an entity's mapping table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath {
    /// Rust field name on the entity.
    pub field: &'static str,
    /// XML path relative to the entity's element.
    pub path: &'static str,
}

/// Entity that can be built from an element using its mapping table.
///
/// Implementations are generated by the table in [`crate::schema`].
pub trait FromElement: Sized {
    /// Mapping table rows, in field declaration order.
    const FIELDS: &'static [FieldPath];

    fn from_element(element: &Element) -> Self;
}

/// Resolves `path` below `element`, returning every match in document order.
pub fn resolve<'a>(element: &'a Element, path: &str) -> Vec<&'a Element> {
    let mut matches = vec![element];
    for segment in path.split(PATH_SEPARATOR) {
        matches = matches
            .into_iter()
            .flat_map(|parent| parent.children_named(segment))
            .collect();
    }
    matches
}

fn last<'a>(element: &'a Element, path: &str) -> Option<&'a Element> {
    resolve(element, path).pop()
}

pub(crate) fn text(element: &Element, path: &str) -> String {
    last(element, path)
        .map(|found| found.text.clone())
        .unwrap_or_default()
}

/// Only the literal `true` (surrounding whitespace ignored) is true.
pub(crate) fn flag(element: &Element, path: &str) -> bool {
    last(element, path).is_some_and(|found| parse_flag(&found.text))
}

pub fn parse_flag(text: &str) -> bool {
    text.trim() == "true"
}

pub(crate) fn texts(element: &Element, path: &str) -> Vec<String> {
    resolve(element, path)
        .into_iter()
        .map(|found| found.text.clone())
        .collect()
}

pub(crate) fn one<T: FromElement + Default>(element: &Element, path: &str) -> T {
    last(element, path)
        .map(T::from_element)
        .unwrap_or_default()
}

pub(crate) fn many<T: FromElement>(element: &Element, path: &str) -> Vec<T> {
    resolve(element, path)
        .into_iter()
        .map(T::from_element)
        .collect()
}

/// Child element name to text, e.g. `<properties><java.version>17</java.version></properties>`.
pub(crate) fn map(element: &Element, path: &str) -> HashMap<String, String> {
    last(element, path)
        .map(|found| {
            found
                .children
                .iter()
                .map(|child| (child.name.clone(), child.text.clone()))
                .collect()
        })
        .unwrap_or_default()
}
