//! Typed decoding of Maven pom.xml documents.
//!
//! This crate turns a pom.xml into a [`Project`] tree mirroring the Maven
//! 4.0.0 model: coordinates, parent, dependencies, build, plugins, reporting,
//! profiles and the rest. It decodes structure only. Parent POMs, property
//! references and profiles are never resolved, and nothing is validated
//! against the Maven schema.
//!
//! ```no_run
//! let project = pom_model::parse("pom.xml")?;
//! for dep in &project.dependencies {
//!     println!("{} {}", dep.name(), dep.version);
//! }
//! # Ok::<(), pom_model::PomError>(())
//! ```

pub mod decode;
pub mod error;
pub mod parser;
mod schema;
pub mod types;
pub mod xml;

pub use decode::{FieldPath, FromElement};
pub use error::{PomError, Result};
pub use parser::{parse, parse_bytes, parse_pom_xml};
pub use types::{
    Activation, ActivationFile, ActivationOs, ActivationProperty, Build, CiManagement,
    Contributor, Dependency, DependencyManagement, DeploymentRepository, Developer,
    DistributionManagement, Exclusion, Extension, IssueManagement, License, MailingList,
    Notifier, Organization, Parent, Plugin, PluginExecution, PluginManagement, PluginRepository,
    Prerequisites, Profile, Project, Reporting, Repository, RepositoryPolicy, Resource, Scm,
    Site,
};
pub use xml::Element;
