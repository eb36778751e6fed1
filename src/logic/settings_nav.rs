use serde::Serialize;

use crate::model::{encode_component, Extension};

const SECURITY_URLS: [&str; 4] = [
    "/admin/users",
    "/admin/groups",
    "/admin/permissions",
    "/admin/permission_templates",
];
const PROJECTS_URLS: [&str; 2] = ["/admin/projects_management", "/admin/background_tasks"];
const SYSTEM_URLS: [&str; 2] = ["/admin/update_center", "/admin/system"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettingsLink {
    /// Message key, or the literal name for extension pages.
    pub label: String,
    pub pathname: String,
}

impl SettingsLink {
    fn new(label: &str, pathname: &str) -> Self {
        Self {
            label: label.to_string(),
            pathname: pathname.to_string(),
        }
    }
}

/// One drop-down of the global settings navigation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettingsSection {
    pub key: String,
    pub label: String,
    pub active: bool,
    pub links: Vec<SettingsLink>,
}

fn is_section_active(urls: &[&str], current_path: &str, base_url: &str) -> bool {
    urls.iter()
        .any(|url| current_path.starts_with(&format!("{}{}", base_url, url)))
}

/// Assemble the global settings navigation: configuration, security, projects
/// and system sections. Sections are active by prefix match of the current
/// pathname; configuration is active exactly when no sibling section is.
pub fn settings_nav(
    extensions: &[Extension],
    custom_organizations: bool,
    current_path: &str,
    base_url: &str,
) -> Vec<SettingsSection> {
    let security_active = is_section_active(&SECURITY_URLS, current_path, base_url);
    let projects_active = is_section_active(&PROJECTS_URLS, current_path, base_url);
    let system_active = is_section_active(&SYSTEM_URLS, current_path, base_url);

    let mut configuration_links = vec![
        SettingsLink::new("settings.page", "/admin/settings"),
        SettingsLink::new("property.category.licenses", "/admin/settings/licenses"),
        SettingsLink::new(
            "property.category.security.encryption",
            "/admin/settings/encryption",
        ),
        SettingsLink::new("property.category.server_id", "/admin/settings/server_id"),
        SettingsLink::new("Custom Metrics", "/admin/custom_metrics"),
    ];
    configuration_links.extend(extensions.iter().map(|extension| SettingsLink {
        label: extension.name.clone(),
        pathname: format!("/admin/extension/{}", encode_component(&extension.key)),
    }));

    let mut security_links = vec![SettingsLink::new("users.page", "/admin/users")];
    if !custom_organizations {
        security_links.push(SettingsLink::new("user_groups.page", "/admin/groups"));
        security_links.push(SettingsLink::new(
            "global_permissions.page",
            "/admin/permissions",
        ));
        security_links.push(SettingsLink::new(
            "permission_templates",
            "/admin/permission_templates",
        ));
    }

    let mut projects_links = Vec::new();
    if !custom_organizations {
        projects_links.push(SettingsLink::new("Management", "/admin/projects_management"));
    }
    projects_links.push(SettingsLink::new(
        "background_tasks.page",
        "/admin/background_tasks",
    ));

    let system_links = vec![
        SettingsLink::new("update_center.page", "/admin/update_center"),
        SettingsLink::new("system_info.page", "/admin/system"),
    ];

    vec![
        SettingsSection {
            key: "configuration".to_string(),
            label: "sidebar.project_settings".to_string(),
            active: !security_active && !projects_active && !system_active,
            links: configuration_links,
        },
        SettingsSection {
            key: "security".to_string(),
            label: "sidebar.security".to_string(),
            active: security_active,
            links: security_links,
        },
        SettingsSection {
            key: "projects".to_string(),
            label: "sidebar.projects".to_string(),
            active: projects_active,
            links: projects_links,
        },
        SettingsSection {
            key: "system".to_string(),
            label: "sidebar.system".to_string(),
            active: system_active,
            links: system_links,
        },
    ]
}
