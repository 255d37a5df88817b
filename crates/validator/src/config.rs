//! Per-call validation options

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::messages::{CatalogError, CatalogOverrides, MessageCatalog};

/// Options for a validation call.
///
/// Deserializes from a JSON object; every field is optional.
///
/// ```rust,ignore
/// let config = Configuration::from_json_str(r#"{ "catalog": { "invalidURL": "Bad URL" } }"#)?;
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Message templates replacing the default ones for this call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<CatalogOverrides>,
}

impl Configuration {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the catalog overrides.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_catalog(mut self, overrides: CatalogOverrides) -> Self {
        self.catalog = Some(overrides);
        self
    }

    /// Parses a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] on malformed JSON or unknown message
    /// keys.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The catalog rules should render from: the default catalog, or the
    /// configured overrides merged over it.
    #[must_use]
    pub fn effective_catalog(&self) -> Cow<'_, MessageCatalog> {
        match &self.catalog {
            Some(overrides) if !overrides.is_empty() => {
                Cow::Owned(MessageCatalog::from_overrides(overrides))
            }
            _ => Cow::Borrowed(MessageCatalog::default_catalog()),
        }
    }
}
