use itertools::Itertools;
use std::collections::BTreeMap;

use crate::model::{encode_component, Branch, Location};

/// Generate the absolute URL for a component's home page.
pub fn component_url(base_url: &str, component_key: &str, branch: Option<&str>) -> String {
    let branch_query = match branch {
        Some(branch) => format!("&branch={}", encode_component(branch)),
        None => String::new(),
    };
    format!(
        "{}/dashboard?id={}{}",
        base_url,
        encode_component(component_key),
        branch_query
    )
}

/// Generate the location of a project's dashboard.
pub fn project_url(key: &str, branch: Option<&str>) -> Location {
    Location::new("/dashboard")
        .with_param("id", key)
        .with_opt_param("branch", branch)
}

/// Branch-aware dashboard location. Short-lived branches have no dashboard of
/// their own, so they land on the unresolved-issues view instead; the main
/// branch contributes no `branch` query key.
pub fn project_branch_url(key: &str, branch: &Branch) -> Location {
    if branch.is_short_living() {
        Location::new("/project/issues")
            .with_param("branch", branch.name.as_str())
            .with_param("id", key)
            .with_param("resolved", "false")
    } else {
        Location::new("/dashboard")
            .with_opt_param("branch", branch.name_for_query())
            .with_param("id", key)
    }
}

/// Generate the location of the global issues page.
pub fn issues_url(query: BTreeMap<String, String>) -> Location {
    Location {
        pathname: "/issues".to_string(),
        query,
    }
}

/// Generate the location of a component's issues page. The component key wins
/// over any `id` the caller put in the query.
pub fn component_issues_url(
    component_key: &str,
    query: Option<BTreeMap<String, String>>,
) -> Location {
    let mut query = query.unwrap_or_default();
    query.insert("id".to_string(), component_key.to_string());
    Location {
        pathname: "/project/issues".to_string(),
        query,
    }
}

pub fn component_issues_url_as_string(
    base_url: &str,
    component_key: &str,
    query: Option<BTreeMap<String, String>>,
) -> String {
    component_issues_url(component_key, query).as_string_with_base(base_url)
}

/// Generate the location of a component's measure drilldown page.
pub fn component_drilldown_url(component_key: &str, metric: &str, branch: Option<&str>) -> Location {
    Location::new("/component_measures")
        .with_param("id", component_key)
        .with_param("metric", metric)
        .with_opt_param("branch", branch)
}

/// Generate the location of a component's measure history graph.
pub fn component_measure_history_url(
    component_key: &str,
    metric: &str,
    branch: Option<&str>,
) -> Location {
    Location::new("/project/activity")
        .with_param("id", component_key)
        .with_param("graph", "custom")
        .with_param("custom_metrics", metric)
        .with_opt_param("branch", branch)
}

/// Generate the location of a component's permissions page.
pub fn component_permissions_url(component_key: &str) -> Location {
    Location::new("/project_roles").with_param("id", component_key)
}

fn quality_profiles_path(organization: Option<&str>) -> String {
    match organization {
        Some(org) => format!("/organizations/{}/profiles", encode_component(org)),
        None => "/profiles".to_string(),
    }
}

/// Generate the location of a quality profile page.
pub fn quality_profile_url(name: &str, language: &str, organization: Option<&str>) -> Location {
    Location::new(format!("{}/show", quality_profiles_path(organization)))
        .with_param("language", language)
        .with_param("name", name)
}

pub fn quality_gates_url(organization: Option<&str>) -> Location {
    let prefix = match organization {
        Some(org) => format!("/organizations/{}", encode_component(org)),
        None => String::new(),
    };
    Location::new(format!("{}/quality_gates", prefix))
}

pub fn quality_gate_url(key: &str, organization: Option<&str>) -> Location {
    Location::new(format!(
        "{}/show/{}",
        quality_gates_url(organization).pathname,
        encode_component(key)
    ))
}

/// Generate the URL of the rules page. The filter mapping is carried in the
/// fragment as pipe-delimited `key=value` pairs because the consuming router
/// keeps this view's filter state out of the regular query string.
pub fn rules_url(query: &BTreeMap<String, String>, organization: Option<&str>) -> String {
    let path = match organization {
        Some(org) => format!("/organizations/{}/rules", encode_component(org)),
        None => "/coding_rules".to_string(),
    };

    if query.is_empty() {
        return path;
    }

    let serialized = query
        .iter()
        .map(|(criterion, value)| {
            format!("{}={}", encode_component(criterion), encode_component(value))
        })
        .join("|");
    format!("{}#{}", path, serialized)
}

/// Rules page filtered down to active deprecated rules.
pub fn deprecated_active_rules_url(
    query: &BTreeMap<String, String>,
    organization: Option<&str>,
) -> String {
    let mut merged = query.clone();
    merged.insert("activation".to_string(), "true".to_string());
    merged.insert("statuses".to_string(), "DEPRECATED".to_string());
    rules_url(&merged, organization)
}

pub fn projects_url(base_url: &str) -> String {
    format!("{}/projects", base_url)
}

pub fn markdown_help_url(base_url: &str) -> String {
    format!("{}/markdown/help", base_url)
}
