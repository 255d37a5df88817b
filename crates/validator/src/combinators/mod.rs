//! Rule adapters
//!
//! - [`Localized`]: binds a rule to custom message templates

pub mod locale;

pub use locale::Localized;
