use serde::{Deserialize, Serialize};

/// Classifies what kind of entity a component key points at.
/// Wire codes are the legacy single-word tags and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Qualifier {
    #[serde(rename = "TRK")]
    Project,
    #[serde(rename = "VW")]
    Portfolio,
    #[serde(rename = "SVW")]
    SubPortfolio,
    #[serde(rename = "APP")]
    Application,
    #[serde(rename = "DEV")]
    Developer,
}

impl Qualifier {
    pub fn is_project(&self) -> bool {
        matches!(self, Qualifier::Project)
    }

    /// Portfolios and sub-portfolios share the portfolio-style pages.
    pub fn is_view(&self) -> bool {
        matches!(self, Qualifier::Portfolio | Qualifier::SubPortfolio)
    }

    pub fn is_application(&self) -> bool {
        matches!(self, Qualifier::Application)
    }

    pub fn is_developer(&self) -> bool {
        matches!(self, Qualifier::Developer)
    }
}

/// A pluggable page contributed by an extension: `key` routes, `name` displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extension {
    pub key: String,
    pub name: String,
}

impl Extension {
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
        }
    }
}

/// Reference to the entity currently being browsed. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub key: String,
    pub qualifier: Qualifier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Extension pages shown in the trailing "more" menu.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extensions: Vec<Extension>,
}

impl Component {
    pub fn new(key: impl Into<String>, qualifier: Qualifier) -> Self {
        Self {
            key: key.into(),
            qualifier,
            name: None,
            extensions: Vec::new(),
        }
    }

    pub fn with_extensions(mut self, extensions: Vec<Extension>) -> Self {
        self.extensions = extensions;
        self
    }
}
