//! Message catalogs and templating
//!
//! Every error a rule reports is rendered from a [`MessageCatalog`] entry.
//! The default catalog ships French templates and is built once on first use.
//! Callers localize by supplying [`CatalogOverrides`]: a partial mapping that
//! is merged over the default into a new catalog, never into the shared one.
//!
//! Templates use positional placeholders `{0}`, `{1}`, … filled by
//! [`render_message`].

mod catalog;
mod key;
mod template;

pub use catalog::{CatalogOverrides, MessageCatalog};
pub use key::MessageKey;
pub use template::render_message;

/// Errors raised while building a catalog from external input.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The override document is not a JSON object of known keys to strings.
    #[error("invalid message catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// A key does not name a known message.
    #[error("unknown message key '{0}'")]
    UnknownKey(String),
}
