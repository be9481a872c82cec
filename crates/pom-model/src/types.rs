//! Domain types for the Maven project object model.
//!
//! Types mirror the elements of the Maven 4.0.0 POM. They carry no XML
//! knowledge; the element paths live in [`crate::schema`].
//!
//! Scalar fields default to `""` (or `false`), sequences to empty vectors.
//! A missing element and an empty one decode to the same value.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub model_version: String,
    pub parent: Parent,
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub packaging: String,
    pub name: String,
    pub description: String,
    pub url: String,
    pub inception_year: String,
    pub organization: Organization,
    pub licenses: Vec<License>,
    pub developers: Vec<Developer>,
    pub contributors: Vec<Contributor>,
    pub mailing_lists: Vec<MailingList>,
    pub prerequisites: Prerequisites,
    pub modules: Vec<String>,
    pub scm: Scm,
    pub issue_management: IssueManagement,
    pub ci_management: CiManagement,
    pub distribution_management: DistributionManagement,
    /// Raw `<properties>` entries. `${...}` references are not interpolated.
    pub properties: HashMap<String, String>,
    pub dependency_management: DependencyManagement,
    pub dependencies: Vec<Dependency>,
    pub repositories: Vec<Repository>,
    pub plugin_repositories: Vec<PluginRepository>,
    pub build: Build,
    pub reporting: Reporting,
    pub profiles: Vec<Profile>,
}

impl Project {
    /// Canonical identifier: "{groupId}:{artifactId}:{version}".
    ///
    /// Uses the values as written; inherited coordinates are not filled in
    /// from the parent.
    pub fn coordinates(&self) -> String {
        format!("{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

/// Reference to the parent POM. Never resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parent {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub relative_path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    pub name: String,
    pub url: String,
    pub distribution: String,
    pub comments: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Developer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub url: String,
    pub organization: String,
    pub organization_url: String,
    pub roles: Vec<String>,
    pub timezone: String,
    pub properties: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    pub name: String,
    pub email: String,
    pub url: String,
    pub organization: String,
    pub organization_url: String,
    pub roles: Vec<String>,
    pub timezone: String,
    pub properties: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailingList {
    pub name: String,
    pub subscribe: String,
    pub unsubscribe: String,
    pub post: String,
    pub archive: String,
    pub other_archives: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prerequisites {
    /// Minimum Maven version.
    pub maven: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scm {
    pub connection: String,
    pub developer_connection: String,
    pub tag: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueManagement {
    pub system: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CiManagement {
    pub system: String,
    pub url: String,
    pub notifiers: Vec<Notifier>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notifier {
    /// Notification mechanism, e.g. "mail".
    pub r#type: String,
    pub send_on_error: bool,
    pub send_on_failure: bool,
    pub send_on_success: bool,
    pub send_on_warning: bool,
    pub address: String,
    pub configuration: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionManagement {
    pub repository: DeploymentRepository,
    pub snapshot_repository: DeploymentRepository,
    pub site: Site,
    pub download_url: String,
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentRepository {
    pub unique_version: bool,
    pub id: String,
    pub name: String,
    pub url: String,
    pub layout: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub id: String,
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyManagement {
    pub dependencies: Vec<Dependency>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    pub group_id: String,
    pub artifact_id: String,
    /// Version requirement as written, including unresolved `${...}` references.
    pub version: String,
    pub r#type: String,
    pub classifier: String,
    pub scope: String,
    pub system_path: String,
    pub exclusions: Vec<Exclusion>,
    pub optional: String,
}

impl Dependency {
    /// Canonical identifier: "{groupId}:{artifactId}"
    pub fn name(&self) -> String {
        format!("{}:{}", self.group_id, self.artifact_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exclusion {
    pub group_id: String,
    pub artifact_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub unique_version: bool,
    pub releases: RepositoryPolicy,
    pub snapshots: RepositoryPolicy,
    pub id: String,
    pub name: String,
    pub url: String,
    pub layout: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginRepository {
    pub releases: RepositoryPolicy,
    pub snapshots: RepositoryPolicy,
    pub id: String,
    pub name: String,
    pub url: String,
    pub layout: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryPolicy {
    pub enabled: String,
    pub update_policy: String,
    pub checksum_policy: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Build {
    pub source_directory: String,
    pub script_source_directory: String,
    pub test_source_directory: String,
    pub output_directory: String,
    pub test_output_directory: String,
    pub extensions: Vec<Extension>,
    pub default_goal: String,
    pub resources: Vec<Resource>,
    pub test_resources: Vec<Resource>,
    pub directory: String,
    pub final_name: String,
    pub filters: Vec<String>,
    pub plugin_management: PluginManagement,
    pub plugins: Vec<Plugin>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extension {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub target_path: String,
    pub filtering: String,
    pub directory: String,
    /// Glob patterns, e.g. `**/*.properties`.
    pub includes: Vec<String>,
    pub excludes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginManagement {
    pub plugins: Vec<Plugin>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plugin {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub extensions: String,
    pub executions: Vec<PluginExecution>,
    pub dependencies: Vec<Dependency>,
    pub inherited: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginExecution {
    pub id: String,
    pub phase: String,
    pub goals: Vec<String>,
    pub inherited: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reporting {
    pub exclude_defaults: String,
    pub output_directory: String,
    pub plugins: Vec<Plugin>,
}

/// Build profile as declared. Activation conditions are decoded, never evaluated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub activation: Activation,
    pub build: Build,
    pub modules: Vec<String>,
    pub distribution_management: DistributionManagement,
    pub properties: HashMap<String, String>,
    pub dependency_management: DependencyManagement,
    pub dependencies: Vec<Dependency>,
    pub repositories: Vec<Repository>,
    pub plugin_repositories: Vec<PluginRepository>,
    pub reporting: Reporting,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activation {
    pub active_by_default: bool,
    pub jdk: String,
    pub os: ActivationOs,
    pub property: ActivationProperty,
    pub file: ActivationFile,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivationOs {
    pub name: String,
    pub family: String,
    pub arch: String,
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivationProperty {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivationFile {
    pub missing: String,
    pub exists: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_default_is_zero_valued() {
        let project = Project::default();
        assert_eq!(project.model_version, "");
        assert_eq!(project.parent, Parent::default());
        assert!(project.dependencies.is_empty());
        assert!(project.properties.is_empty());
        assert!(project.build.plugins.is_empty());
        assert!(project.profiles.is_empty());
        assert!(!project.distribution_management.repository.unique_version);
    }

    #[test]
    fn test_coordinates() {
        let project = Project {
            group_id: "org.example".into(),
            artifact_id: "demo".into(),
            version: "1.0.0".into(),
            ..Project::default()
        };
        assert_eq!(project.coordinates(), "org.example:demo:1.0.0");
    }

    #[test]
    fn test_dependency_name() {
        let dep = Dependency {
            group_id: "org.apache.commons".into(),
            artifact_id: "commons-lang3".into(),
            ..Dependency::default()
        };
        assert_eq!(dep.name(), "org.apache.commons:commons-lang3");
    }

    #[test]
    fn test_types_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Project>();
    }
}
