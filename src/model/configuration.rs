use crate::model::Extension;
use serde::{Deserialize, Serialize};

/// What the current viewer is authorized to see for a component. Supplied by
/// the caller along with the component; every flag defaults to false when the
/// payload omits it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentConfiguration {
    pub show_settings: bool,
    pub show_quality_profiles: bool,
    pub show_quality_gates: bool,
    pub show_manual_measures: bool,
    pub show_links: bool,
    pub show_permissions: bool,
    pub show_background_tasks: bool,
    pub show_update_key: bool,
    /// Admin extension pages, listed inside the administration drop-down.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extensions: Vec<Extension>,
}

impl ComponentConfiguration {
    /// Configuration granting every capability, handy for admin flows.
    pub fn all() -> Self {
        Self {
            show_settings: true,
            show_quality_profiles: true,
            show_quality_gates: true,
            show_manual_measures: true,
            show_links: true,
            show_permissions: true,
            show_background_tasks: true,
            show_update_key: true,
            extensions: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_flags_default_to_false() {
        let conf: ComponentConfiguration =
            serde_json::from_str(r#"{"show_settings": true}"#).unwrap();
        assert!(conf.show_settings);
        assert!(!conf.show_permissions);
        assert!(conf.extensions.is_empty());
    }
}
