use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Characters escaped the way `encodeURIComponent` does it: everything but
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )`. The front-end router decodes with the
/// matching function, so the set must not drift.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a single path segment or query component.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// An internal navigation target: a router pathname plus its query mapping.
/// Query values are stored raw; encoding happens at serialization. Absent
/// optional values are omitted entirely, never kept as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub pathname: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub query: BTreeMap<String, String>,
}

impl Location {
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            query: BTreeMap::new(),
        }
    }

    pub fn with_param(mut self, key: &str, value: impl Into<String>) -> Self {
        self.query.insert(key.to_string(), value.into());
        self
    }

    /// Add a query parameter only when the value is present.
    pub fn with_opt_param(mut self, key: &str, value: Option<&str>) -> Self {
        if let Some(value) = value {
            self.query.insert(key.to_string(), value.to_string());
        }
        self
    }

    /// Serialize the query mapping as `k=v&k=v`, percent-encoding keys and
    /// values. Empty mapping yields an empty string.
    pub fn query_string(&self) -> String {
        self.query
            .iter()
            .map(|(key, value)| format!("{}={}", encode_component(key), encode_component(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Serialize as a full URL under the given base.
    pub fn as_string_with_base(&self, base_url: &str) -> String {
        if self.query.is_empty() {
            format!("{}{}", base_url, self.pathname)
        } else {
            format!("{}{}?{}", base_url, self.pathname, self.query_string())
        }
    }
}
