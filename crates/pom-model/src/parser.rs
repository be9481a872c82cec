//! pom.xml entry points.
//!
//! Builds an element tree with quick-xml, checks the root element, then
//! decodes the [`Project`] through the mapping table. Decoding is
//! all-or-nothing: either the whole tree is produced or an error is returned.

use crate::decode::FromElement;
use crate::error::{PomError, Result};
use crate::types::Project;
use crate::xml;
use std::path::Path;
use std::str::FromStr;

/// Name of the root element every POM must have.
pub const ROOT_ELEMENT: &str = "project";

/// Reads and decodes the pom.xml at `path`.
///
/// The whole file is read into memory before decoding; POMs are small.
///
/// # Errors
///
/// - [`PomError::Io`] if the file cannot be opened or read
/// - [`PomError::ParseError`] if the content is not a well-formed POM
pub fn parse(path: impl AsRef<Path>) -> Result<Project> {
    let path = path.as_ref();
    let content = std::fs::read(path)?;
    tracing::debug!("Parsing pom.xml: {} ({} bytes)", path.display(), content.len());
    parse_bytes(&content)
}

/// Decodes a pom.xml document held in memory.
///
/// # Errors
///
/// Returns [`PomError::ParseError`] if the content is not well-formed XML or
/// its root element is not `<project>`.
pub fn parse_bytes(content: &[u8]) -> Result<Project> {
    let root = xml::parse_document(content)?;
    if root.name != ROOT_ELEMENT {
        return Err(PomError::parse(format!(
            "expected root element <{ROOT_ELEMENT}>, found <{}>",
            root.name
        )));
    }

    let project = Project::from_element(&root);
    tracing::debug!(
        namespace = root.attribute("xmlns").unwrap_or_default(),
        coordinates = %project.coordinates(),
        dependencies = project.dependencies.len(),
        "decoded pom.xml"
    );
    Ok(project)
}

/// Decodes pom.xml text.
///
/// # Errors
///
/// Same as [`parse_bytes`].
pub fn parse_pom_xml(content: &str) -> Result<Project> {
    parse_bytes(content.as_bytes())
}

impl FromStr for Project {
    type Err = PomError;

    fn from_str(s: &str) -> Result<Self> {
        parse_pom_xml(s)
    }
}
