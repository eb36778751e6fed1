pub mod api;
pub mod config;
pub mod logic;
pub mod model;

// Export API types
pub use api::handlers;
pub use api::routes;

// Export logic types
pub use logic::{
    settings_nav, system_links, ComponentNav, DebouncedSearch, NavEntry, SearchBackend,
    SearchOption, SearchOutcome, SettingsLink, SettingsSection, SystemLinks, SystemProcess,
};

// Export all model types
pub use model::*;

// Function for integration testing
pub async fn run_server() -> anyhow::Result<()> {
    use axum::serve;
    use std::sync::Arc;
    use tokio::net::TcpListener;

    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    // Initialize logging with INFO level only (suppress DEBUG logs)
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    // Load configuration
    let config = crate::config::AppConfig::load()?;

    let state = Arc::new(api::handlers::AppState {
        base_url: config.base_url()?,
    });

    // Create router with state
    let app = crate::api::routes::create_router().with_state(state);

    let bind_address = config.server_address();
    let listener = TcpListener::bind(&bind_address).await?;

    serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {

    #[test]
    fn qualifier_wire_codes_are_stable() {
        use crate::model::Qualifier;

        let codes = [
            (Qualifier::Project, "\"TRK\""),
            (Qualifier::Portfolio, "\"VW\""),
            (Qualifier::SubPortfolio, "\"SVW\""),
            (Qualifier::Application, "\"APP\""),
            (Qualifier::Developer, "\"DEV\""),
        ];
        for (qualifier, expected) in codes {
            assert_eq!(serde_json::to_string(&qualifier).unwrap(), expected);
            let parsed: Qualifier = serde_json::from_str(expected).unwrap();
            assert_eq!(parsed, qualifier);
        }
    }

    #[test]
    fn component_nav_request_deserializes_with_defaults() {
        use crate::api::handlers::ComponentNavRequest;

        // A minimal payload: no branch, no flags, no extensions
        let json = r#"{"component": {"key": "my-project", "qualifier": "TRK"}}"#;
        let request: ComponentNavRequest = serde_json::from_str(json).unwrap();
        assert!(request.branch.is_none());
        assert!(!request.branches_enabled);
        assert!(!request.configuration.show_settings);

        // A full payload as the browser shell sends it
        let json = r#"{
            "component": {
                "key": "my-project",
                "qualifier": "TRK",
                "extensions": [{"key": "a", "name": "Foo"}]
            },
            "branch": {"name": "feature/x", "kind": "shortlived", "merge_branch": "master"},
            "configuration": {"show_settings": true},
            "branches_enabled": true
        }"#;
        let request: ComponentNavRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.component.extensions.len(), 1);
        assert!(request.branch.unwrap().is_short_living());
        assert!(request.configuration.show_settings);
    }

    #[test]
    fn nav_entry_serialization_omits_empty_fields() {
        use crate::logic::ComponentNav;
        use crate::model::{Component, ComponentConfiguration, Qualifier};

        let component = Component::new("key", Qualifier::Project);
        let conf = ComponentConfiguration::default();
        let entries = ComponentNav::new(&component, None, &conf, false).entries();
        let json = serde_json::to_value(&entries).unwrap();

        let overview = &json[0];
        assert_eq!(overview["key"], "overview");
        assert_eq!(overview["target"]["pathname"], "/dashboard");
        assert_eq!(overview["target"]["query"]["id"], "key");
        assert!(overview.get("children").is_none());
    }
}
