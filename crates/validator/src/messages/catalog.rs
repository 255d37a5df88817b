use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt::Display;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use super::{CatalogError, MessageKey, render_message};
use crate::foundation::FieldError;

static DEFAULT_CATALOG: LazyLock<MessageCatalog> = LazyLock::new(|| MessageCatalog {
    templates: MessageKey::ALL.map(|key| Cow::Borrowed(default_template(key))),
});

const fn default_template(key: MessageKey) -> &'static str {
    match key {
        MessageKey::FieldIsRequired => "Ce champ est obligatoire",
        MessageKey::InvalidFormat => "Format invalide",

        MessageKey::NumberTooSmall => "Le nombre est trop petit, minimum: {0}",
        MessageKey::NumberTooBig => "Le nombre est trop grand, maximum: {0}",
        MessageKey::InvalidNumber => "Nombre invalide",
        MessageKey::InvalidInteger => "La valeur attendue est un nombre",

        MessageKey::TextTooSmall => "Le texte est trop court. Actuel: {0}, Minimum: {1}",
        MessageKey::TextTooBig => "Le texte est trop long. Actuel: {0}, Maximum: {1}",
        MessageKey::ThisNotText => "Texte attendu",

        MessageKey::ThisNotArray => "Tableau attendu",

        MessageKey::SelectMinItems => "Sélectionnez au moins {0} éléments",
        MessageKey::SelectMaxItems => "Sélectionnez au maximum {0} éléments",

        MessageKey::InvalidDate => "Date invalide",
        MessageKey::DateIsEarly => "La date est trop proche. Actuelle: {0}, Minimum: {1}",
        MessageKey::DateIsLate => "La date est trop éloignée. Actuelle: {0}, Maximum: {1}",

        MessageKey::InvalidEmail => "Format d'email invalide",
        MessageKey::InvalidUrl => "URL invalide",

        MessageKey::InvalidCard => "Format de carte invalide",
        MessageKey::InvalidCardNumber => "Numéro de carte invalide",

        MessageKey::InvalidTextContainNumber => {
            "Texte invalide, ne peut contenir de chiffre ou de caractères spéciaux"
        }
        MessageKey::InvalidTextContainSpec => {
            "Texte invalide, ne peut contenir de caractères spéciaux"
        }
    }
}

// ============================================================================
// MESSAGE CATALOG
// ============================================================================

/// A complete set of message templates, one per [`MessageKey`].
///
/// A catalog is total: every key has a template. Custom catalogs are derived
/// from a base with [`MessageCatalog::merged`], which returns a new catalog
/// and leaves the base untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageCatalog {
    templates: [Cow<'static, str>; MessageKey::COUNT],
}

impl MessageCatalog {
    /// The shipped French catalog, shared by the whole process.
    #[must_use]
    pub fn default_catalog() -> &'static MessageCatalog {
        &DEFAULT_CATALOG
    }

    /// Builds a catalog from `overrides` merged over the default catalog.
    #[must_use]
    pub fn from_overrides(overrides: &CatalogOverrides) -> Self {
        Self::default_catalog().merged(overrides)
    }

    /// Returns a new catalog where entries from `overrides` replace this
    /// catalog's templates. Keys not present in `overrides` keep their
    /// current template.
    #[must_use]
    pub fn merged(&self, overrides: &CatalogOverrides) -> Self {
        let mut catalog = self.clone();
        for (key, template) in &overrides.entries {
            catalog.templates[key.index()] = Cow::Owned(template.clone());
        }
        catalog
    }

    /// Returns the template registered for `key`.
    #[must_use]
    pub fn template(&self, key: MessageKey) -> &str {
        &self.templates[key.index()]
    }

    /// Renders the template for `key` with positional arguments.
    #[must_use]
    pub fn render(&self, key: MessageKey, args: &[&dyn Display]) -> String {
        let template = self.template(key);
        render_message(Some(template), args).unwrap_or_else(|| template.to_owned())
    }

    /// Renders the template for `key` into a [`FieldError`].
    #[must_use]
    pub fn error(&self, key: MessageKey, args: &[&dyn Display]) -> FieldError {
        FieldError::new(key, self.render(key, args))
    }

    /// Iterates over `(key, template)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (MessageKey, &str)> {
        MessageKey::ALL
            .into_iter()
            .map(|key| (key, self.template(key)))
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::default_catalog().clone()
    }
}

// ============================================================================
// CATALOG OVERRIDES
// ============================================================================

/// A partial catalog: templates for some keys, to be merged over a base.
///
/// # Examples
///
/// ```rust,ignore
/// use formcheck::messages::{CatalogOverrides, MessageKey};
///
/// let english = CatalogOverrides::new()
///     .with(MessageKey::FieldIsRequired, "This field is required")
///     .with(MessageKey::NumberTooSmall, "Number is too small, minimum: {0}");
///
/// let same = CatalogOverrides::from_json_str(r#"{
///     "fieldIsRequired": "This field is required",
///     "numberTooSmall": "Number is too small, minimum: {0}"
/// }"#)?;
/// assert_eq!(english, same);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogOverrides {
    entries: BTreeMap<MessageKey, String>,
}

impl CatalogOverrides {
    /// Creates an empty override set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses overrides from a JSON object of key → template.
    ///
    /// Unknown keys are rejected.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Adds or replaces the template for `key`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, key: MessageKey, template: impl Into<String>) -> Self {
        self.insert(key, template);
        self
    }

    /// Adds or replaces the template for `key`, returning the previous one.
    pub fn insert(&mut self, key: MessageKey, template: impl Into<String>) -> Option<String> {
        self.entries.insert(key, template.into())
    }

    /// Returns the override for `key`, if any.
    #[must_use]
    pub fn get(&self, key: MessageKey) -> Option<&str> {
        self.entries.get(&key).map(String::as_str)
    }

    /// Number of overridden keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is overridden.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Combines two override sets; entries in `self` win over `lower`.
    #[must_use]
    pub fn layer(&self, lower: &CatalogOverrides) -> Self {
        let mut entries = lower.entries.clone();
        entries.extend(self.entries.iter().map(|(k, v)| (*k, v.clone())));
        Self { entries }
    }

    /// Iterates over overridden `(key, template)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (MessageKey, &str)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl<S: Into<String>> FromIterator<(MessageKey, S)> for CatalogOverrides {
    fn from_iter<I: IntoIterator<Item = (MessageKey, S)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k, v.into())).collect(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
