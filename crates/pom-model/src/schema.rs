//! Field-to-path mapping table for every model entity.
//!
//! Each row reads `field: kind("path")`. The kind picks the decoder in
//! [`crate::decode`]:
//!
//! - `text` / `flag`: scalar from the last matching element
//! - `one`: nested entity from the last matching element
//! - `many` / `texts`: every match, in document order
//! - `map`: child name to text of the last matching element
//!
//! The generated constructor names every field, so a row missing from a table
//! is a compile error. Elements without a row are ignored.

use crate::decode::{self, FieldPath, FromElement};
use crate::types::*;
use crate::xml::Element;

macro_rules! mapping_table {
    ($($entity:ident { $($field:ident: $kind:ident($path:literal)),* $(,)? })*) => {
        $(
            impl FromElement for $entity {
                const FIELDS: &'static [FieldPath] = &[
                    $(FieldPath { field: field_name(stringify!($field)), path: $path }),*
                ];

                fn from_element(element: &Element) -> Self {
                    Self {
                        $($field: decode::$kind(element, $path)),*
                    }
                }
            }
        )*
    };
}

/// Strips the raw identifier prefix, so `r#type` is reported as `type`.
const fn field_name(ident: &'static str) -> &'static str {
    match ident.as_bytes() {
        [b'r', b'#', rest @ ..] => match std::str::from_utf8(rest) {
            Ok(name) => name,
            Err(_) => ident,
        },
        _ => ident,
    }
}

mapping_table! {
    Project {
        model_version: text("modelVersion"),
        parent: one("parent"),
        group_id: text("groupId"),
        artifact_id: text("artifactId"),
        version: text("version"),
        packaging: text("packaging"),
        name: text("name"),
        description: text("description"),
        url: text("url"),
        inception_year: text("inceptionYear"),
        organization: one("organization"),
        licenses: many("licenses>license"),
        developers: many("developers>developer"),
        contributors: many("contributors>contributor"),
        mailing_lists: many("mailingLists>mailingList"),
        prerequisites: one("prerequisites"),
        modules: texts("modules>module"),
        scm: one("scm"),
        issue_management: one("issueManagement"),
        ci_management: one("ciManagement"),
        distribution_management: one("distributionManagement"),
        properties: map("properties"),
        dependency_management: one("dependencyManagement"),
        dependencies: many("dependencies>dependency"),
        repositories: many("repositories>repository"),
        plugin_repositories: many("pluginRepositories>pluginRepository"),
        build: one("build"),
        reporting: one("reporting"),
        profiles: many("profiles>profile"),
    }

    Parent {
        group_id: text("groupId"),
        artifact_id: text("artifactId"),
        version: text("version"),
        relative_path: text("relativePath"),
    }

    Organization {
        name: text("name"),
        url: text("url"),
    }

    License {
        name: text("name"),
        url: text("url"),
        distribution: text("distribution"),
        comments: text("comments"),
    }

    Developer {
        id: text("id"),
        name: text("name"),
        email: text("email"),
        url: text("url"),
        organization: text("organization"),
        organization_url: text("organizationUrl"),
        roles: texts("roles>role"),
        timezone: text("timezone"),
        properties: map("properties"),
    }

    Contributor {
        name: text("name"),
        email: text("email"),
        url: text("url"),
        organization: text("organization"),
        organization_url: text("organizationUrl"),
        roles: texts("roles>role"),
        timezone: text("timezone"),
        properties: map("properties"),
    }

    MailingList {
        name: text("name"),
        subscribe: text("subscribe"),
        unsubscribe: text("unsubscribe"),
        post: text("post"),
        archive: text("archive"),
        other_archives: texts("otherArchives>otherArchive"),
    }

    Prerequisites {
        maven: text("maven"),
    }

    Scm {
        connection: text("connection"),
        developer_connection: text("developerConnection"),
        tag: text("tag"),
        url: text("url"),
    }

    IssueManagement {
        system: text("system"),
        url: text("url"),
    }

    CiManagement {
        system: text("system"),
        url: text("url"),
        notifiers: many("notifiers>notifier"),
    }

    Notifier {
        r#type: text("type"),
        send_on_error: flag("sendOnError"),
        send_on_failure: flag("sendOnFailure"),
        send_on_success: flag("sendOnSuccess"),
        send_on_warning: flag("sendOnWarning"),
        address: text("address"),
        configuration: map("configuration"),
    }

    DistributionManagement {
        repository: one("repository"),
        snapshot_repository: one("snapshotRepository"),
        site: one("site"),
        download_url: text("downloadUrl"),
        status: text("status"),
    }

    DeploymentRepository {
        unique_version: flag("uniqueVersion"),
        id: text("id"),
        name: text("name"),
        url: text("url"),
        layout: text("layout"),
    }

    Site {
        id: text("id"),
        name: text("name"),
        url: text("url"),
    }

    DependencyManagement {
        dependencies: many("dependencies>dependency"),
    }

    Dependency {
        group_id: text("groupId"),
        artifact_id: text("artifactId"),
        version: text("version"),
        r#type: text("type"),
        classifier: text("classifier"),
        scope: text("scope"),
        system_path: text("systemPath"),
        exclusions: many("exclusions>exclusion"),
        optional: text("optional"),
    }

    Exclusion {
        group_id: text("groupId"),
        artifact_id: text("artifactId"),
    }

    Repository {
        unique_version: flag("uniqueVersion"),
        releases: one("releases"),
        snapshots: one("snapshots"),
        id: text("id"),
        name: text("name"),
        url: text("url"),
        layout: text("layout"),
    }

    PluginRepository {
        releases: one("releases"),
        snapshots: one("snapshots"),
        id: text("id"),
        name: text("name"),
        url: text("url"),
        layout: text("layout"),
    }

    RepositoryPolicy {
        enabled: text("enabled"),
        update_policy: text("updatePolicy"),
        checksum_policy: text("checksumPolicy"),
    }

    Build {
        source_directory: text("sourceDirectory"),
        script_source_directory: text("scriptSourceDirectory"),
        test_source_directory: text("testSourceDirectory"),
        output_directory: text("outputDirectory"),
        test_output_directory: text("testOutputDirectory"),
        extensions: many("extensions>extension"),
        default_goal: text("defaultGoal"),
        resources: many("resources>resource"),
        test_resources: many("testResources>testResource"),
        directory: text("directory"),
        final_name: text("finalName"),
        filters: texts("filters>filter"),
        plugin_management: one("pluginManagement"),
        plugins: many("plugins>plugin"),
    }

    Extension {
        group_id: text("groupId"),
        artifact_id: text("artifactId"),
        version: text("version"),
    }

    Resource {
        target_path: text("targetPath"),
        filtering: text("filtering"),
        directory: text("directory"),
        includes: texts("includes>include"),
        excludes: texts("excludes>exclude"),
    }

    PluginManagement {
        plugins: many("plugins>plugin"),
    }

    Plugin {
        group_id: text("groupId"),
        artifact_id: text("artifactId"),
        version: text("version"),
        extensions: text("extensions"),
        executions: many("executions>execution"),
        dependencies: many("dependencies>dependency"),
        inherited: text("inherited"),
    }

    PluginExecution {
        id: text("id"),
        phase: text("phase"),
        goals: texts("goals>goal"),
        inherited: text("inherited"),
    }

    Reporting {
        exclude_defaults: text("excludeDefaults"),
        output_directory: text("outputDirectory"),
        plugins: many("plugins>plugin"),
    }

    Profile {
        id: text("id"),
        activation: one("activation"),
        build: one("build"),
        modules: texts("modules>module"),
        distribution_management: one("distributionManagement"),
        properties: map("properties"),
        dependency_management: one("dependencyManagement"),
        dependencies: many("dependencies>dependency"),
        repositories: many("repositories>repository"),
        plugin_repositories: many("pluginRepositories>pluginRepository"),
        reporting: one("reporting"),
    }

    Activation {
        active_by_default: flag("activeByDefault"),
        jdk: text("jdk"),
        os: one("os"),
        property: one("property"),
        file: one("file"),
    }

    ActivationOs {
        name: text("name"),
        family: text("family"),
        arch: text("arch"),
        version: text("version"),
    }

    ActivationProperty {
        name: text("name"),
        value: text("value"),
    }

    ActivationFile {
        missing: text("missing"),
        exists: text("exists"),
    }
}
