use serde::Serialize;

use crate::model::{
    encode_component, Branch, Component, ComponentConfiguration, Extension, Location, Qualifier,
};

/// URL fragments that mark the administration drop-down as active when they
/// appear anywhere in the current browser location.
const SETTINGS_URLS: [&str; 12] = [
    "/project/admin",
    "/project/branches",
    "/project/settings",
    "/project/quality_profiles",
    "/project/quality_gate",
    "/custom_measures",
    "/project/links",
    "/project_roles",
    "/project/history",
    "background_tasks",
    "/project/key",
    "/project/deletion",
];

/// Extension pages excluded from the "more" menu, matched by exact name.
/// A constant carve-out, not derived from any component attribute; the admin
/// extension listing is not affected by it.
const MORE_MENU_EXCLUDED_NAMES: [&str; 1] = ["Governance"];

/// One assembled navigation entry. Entries with children and no target render
/// as drop-downs. The label is a message key, except for extension pages
/// which carry their display name directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavEntry {
    pub key: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<Location>,
    /// URL fragments whose presence in the current location marks this entry
    /// active. Display parity only.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub active_urls: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavEntry>,
}

impl NavEntry {
    fn link(key: &str, label: &str, target: Location) -> Self {
        let active_urls = vec![target.pathname.clone()];
        Self {
            key: key.to_string(),
            label: label.to_string(),
            target: Some(target),
            active_urls,
            children: Vec::new(),
        }
    }

    fn dropdown(key: &str, label: &str, active_urls: Vec<String>, children: Vec<NavEntry>) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            target: None,
            active_urls,
            children,
        }
    }

    pub fn is_active(&self, current_href: &str) -> bool {
        self.active_urls
            .iter()
            .any(|url| current_href.contains(url.as_str()))
    }
}

/// Assembles the navigation menu of a component page. Pure: the full entry
/// list is recomputed on every call from the component, the browsed branch
/// and the viewer's configuration flags.
pub struct ComponentNav<'a> {
    component: &'a Component,
    branch: Option<&'a Branch>,
    conf: &'a ComponentConfiguration,
    branches_enabled: bool,
}

impl<'a> ComponentNav<'a> {
    pub fn new(
        component: &'a Component,
        branch: Option<&'a Branch>,
        conf: &'a ComponentConfiguration,
        branches_enabled: bool,
    ) -> Self {
        Self {
            component,
            branch,
            conf,
            branches_enabled,
        }
    }

    /// Ordered entry list: overview, issues, measures, code, activity,
    /// administration, more-extensions. The order is fixed; rendering relies
    /// on it for tab grouping.
    pub fn entries(&self) -> Vec<NavEntry> {
        [
            self.overview_entry(),
            self.issues_entry(),
            self.measures_entry(),
            self.code_entry(),
            self.activity_entry(),
            self.administration_entry(),
            self.extensions_entry(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn on_short_living_branch(&self) -> bool {
        self.branch.map_or(false, |branch| branch.is_short_living())
    }

    fn branch_query_name(&self) -> Option<&str> {
        self.branch.and_then(|branch| branch.name_for_query())
    }

    fn key(&self) -> &str {
        &self.component.key
    }

    fn overview_entry(&self) -> Option<NavEntry> {
        if self.on_short_living_branch() {
            return None;
        }

        let pathname = if self.component.qualifier.is_view() {
            "/portfolio"
        } else {
            "/dashboard"
        };
        let target = Location::new(pathname)
            .with_opt_param("branch", self.branch_query_name())
            .with_param("id", self.key());
        Some(NavEntry::link("overview", "overview.page", target))
    }

    fn issues_entry(&self) -> Option<NavEntry> {
        let target = Location::new("/project/issues")
            .with_opt_param("branch", self.branch_query_name())
            .with_param("id", self.key())
            .with_param("resolved", "false");
        Some(NavEntry::link("issues", "issues.page", target))
    }

    fn measures_entry(&self) -> Option<NavEntry> {
        if self.on_short_living_branch() {
            return None;
        }

        let target = Location::new("/component_measures")
            .with_opt_param("branch", self.branch_query_name())
            .with_param("id", self.key());
        Some(NavEntry::link("measures", "layout.measures", target))
    }

    fn code_entry(&self) -> Option<NavEntry> {
        if self.component.qualifier.is_developer() {
            return None;
        }

        let label = if self.component.qualifier.is_view() || self.component.qualifier.is_application()
        {
            "view_projects.page"
        } else {
            "code.page"
        };
        let target = Location::new("/code")
            .with_opt_param("branch", self.branch_query_name())
            .with_param("id", self.key());
        Some(NavEntry::link("code", label, target))
    }

    fn activity_entry(&self) -> Option<NavEntry> {
        if !self.component.qualifier.is_project() && !self.component.qualifier.is_application() {
            return None;
        }
        if self.on_short_living_branch() {
            return None;
        }

        let target = Location::new("/project/activity")
            .with_opt_param("branch", self.branch_query_name())
            .with_param("id", self.key());
        Some(NavEntry::link("activity", "project_activity.page", target))
    }

    fn administration_entry(&self) -> Option<NavEntry> {
        if !self.conf.show_settings || self.on_short_living_branch() {
            return None;
        }

        let settings_urls = SETTINGS_URLS.iter().map(|url| url.to_string()).collect();

        // A long-lived branch gets branch-scoped settings only, not the full
        // per-capability menu.
        if let Some(branch) = self.branch.filter(|branch| branch.is_long_living()) {
            let target = Location::new("/project/settings")
                .with_param("branch", branch.name.as_str())
                .with_param("id", self.key());
            let mut entry = NavEntry::link("administration", "layout.settings", target);
            entry.active_urls = settings_urls;
            return Some(entry);
        }

        let children = self.administration_children();
        if children.is_empty() {
            return None;
        }
        Some(NavEntry::dropdown(
            "administration",
            "layout.settings",
            settings_urls,
            children,
        ))
    }

    fn administration_children(&self) -> Vec<NavEntry> {
        let mut children: Vec<NavEntry> = [
            self.settings_child(),
            self.branches_child(),
            self.profiles_child(),
            self.quality_gate_child(),
            self.custom_measures_child(),
            self.links_child(),
            self.permissions_child(),
            self.background_tasks_child(),
            self.update_key_child(),
        ]
        .into_iter()
        .flatten()
        .collect();

        children.extend(
            self.conf
                .extensions
                .iter()
                .map(|extension| self.extension_entry(extension, true)),
        );
        children.extend(self.deletion_child());
        children
    }

    fn settings_child(&self) -> Option<NavEntry> {
        if !self.conf.show_settings
            || self.component.qualifier.is_application()
            || self.component.qualifier.is_view()
        {
            return None;
        }
        let target = Location::new("/project/settings")
            .with_opt_param("branch", self.branch_query_name())
            .with_param("id", self.key());
        Some(NavEntry::link("settings", "project_settings.page", target))
    }

    fn branches_child(&self) -> Option<NavEntry> {
        if !self.branches_enabled
            || !self.component.qualifier.is_project()
            || !self.conf.show_settings
        {
            return None;
        }
        let target = Location::new("/project/branches").with_param("id", self.key());
        Some(NavEntry::link("branches", "project_branches.page", target))
    }

    fn profiles_child(&self) -> Option<NavEntry> {
        if !self.conf.show_quality_profiles {
            return None;
        }
        let target = Location::new("/project/quality_profiles").with_param("id", self.key());
        Some(NavEntry::link(
            "profiles",
            "project_quality_profiles.page",
            target,
        ))
    }

    fn quality_gate_child(&self) -> Option<NavEntry> {
        if !self.conf.show_quality_gates {
            return None;
        }
        let target = Location::new("/project/quality_gate").with_param("id", self.key());
        Some(NavEntry::link(
            "quality_gate",
            "project_quality_gate.page",
            target,
        ))
    }

    fn custom_measures_child(&self) -> Option<NavEntry> {
        if !self.conf.show_manual_measures {
            return None;
        }
        let target = Location::new("/custom_measures").with_param("id", self.key());
        Some(NavEntry::link(
            "custom_measures",
            "custom_measures.page",
            target,
        ))
    }

    fn links_child(&self) -> Option<NavEntry> {
        if !self.conf.show_links {
            return None;
        }
        let target = Location::new("/project/links").with_param("id", self.key());
        Some(NavEntry::link("links", "project_links.page", target))
    }

    fn permissions_child(&self) -> Option<NavEntry> {
        if !self.conf.show_permissions {
            return None;
        }
        let target = super::urls::component_permissions_url(self.key());
        Some(NavEntry::link("permissions", "permissions.page", target))
    }

    fn background_tasks_child(&self) -> Option<NavEntry> {
        if !self.conf.show_background_tasks {
            return None;
        }
        let target = Location::new("/project/background_tasks").with_param("id", self.key());
        Some(NavEntry::link(
            "background_tasks",
            "background_tasks.page",
            target,
        ))
    }

    fn update_key_child(&self) -> Option<NavEntry> {
        if !self.conf.show_update_key {
            return None;
        }
        let target = Location::new("/project/key").with_param("id", self.key());
        Some(NavEntry::link("update_key", "update_key.page", target))
    }

    fn deletion_child(&self) -> Option<NavEntry> {
        if !self.conf.show_settings {
            return None;
        }
        // Sub-portfolios and developers are deleted through their parent
        let deletable = matches!(
            self.component.qualifier,
            Qualifier::Project | Qualifier::Portfolio | Qualifier::Application
        );
        if !deletable {
            return None;
        }
        let target = Location::new("/project/deletion").with_param("id", self.key());
        Some(NavEntry::link("project_delete", "deletion.page", target))
    }

    fn extension_entry(&self, extension: &Extension, admin: bool) -> NavEntry {
        let pathname = if admin {
            format!("/project/admin/extension/{}", encode_component(&extension.key))
        } else {
            format!("/project/extension/{}", encode_component(&extension.key))
        };
        let target = Location::new(pathname).with_param("id", self.key());
        NavEntry::link(&extension.key, &extension.name, target)
    }

    fn extensions_entry(&self) -> Option<NavEntry> {
        let visible: Vec<NavEntry> = self
            .component
            .extensions
            .iter()
            .filter(|extension| !MORE_MENU_EXCLUDED_NAMES.contains(&extension.name.as_str()))
            .map(|extension| self.extension_entry(extension, false))
            .collect();
        if visible.is_empty() {
            return None;
        }
        Some(NavEntry::dropdown("more", "more", Vec::new(), visible))
    }
}
