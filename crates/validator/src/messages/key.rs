use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::CatalogError;

/// Identifies one kind of validation message.
///
/// Serialized with the camelCase names form schemas use (`fieldIsRequired`,
/// `invalidURL`, …).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MessageKey {
    FieldIsRequired,
    InvalidFormat,

    NumberTooSmall,
    NumberTooBig,
    InvalidNumber,
    InvalidInteger,

    TextTooSmall,
    TextTooBig,
    ThisNotText,

    ThisNotArray,

    SelectMinItems,
    SelectMaxItems,

    InvalidDate,
    DateIsEarly,
    DateIsLate,

    InvalidEmail,
    #[serde(rename = "invalidURL")]
    InvalidUrl,

    InvalidCard,
    InvalidCardNumber,

    InvalidTextContainNumber,
    InvalidTextContainSpec,
}

impl MessageKey {
    /// Number of message kinds.
    pub const COUNT: usize = 21;

    /// Every key, in catalog order.
    pub const ALL: [MessageKey; Self::COUNT] = [
        MessageKey::FieldIsRequired,
        MessageKey::InvalidFormat,
        MessageKey::NumberTooSmall,
        MessageKey::NumberTooBig,
        MessageKey::InvalidNumber,
        MessageKey::InvalidInteger,
        MessageKey::TextTooSmall,
        MessageKey::TextTooBig,
        MessageKey::ThisNotText,
        MessageKey::ThisNotArray,
        MessageKey::SelectMinItems,
        MessageKey::SelectMaxItems,
        MessageKey::InvalidDate,
        MessageKey::DateIsEarly,
        MessageKey::DateIsLate,
        MessageKey::InvalidEmail,
        MessageKey::InvalidUrl,
        MessageKey::InvalidCard,
        MessageKey::InvalidCardNumber,
        MessageKey::InvalidTextContainNumber,
        MessageKey::InvalidTextContainSpec,
    ];

    /// The key's name as used in catalogs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            MessageKey::FieldIsRequired => "fieldIsRequired",
            MessageKey::InvalidFormat => "invalidFormat",
            MessageKey::NumberTooSmall => "numberTooSmall",
            MessageKey::NumberTooBig => "numberTooBig",
            MessageKey::InvalidNumber => "invalidNumber",
            MessageKey::InvalidInteger => "invalidInteger",
            MessageKey::TextTooSmall => "textTooSmall",
            MessageKey::TextTooBig => "textTooBig",
            MessageKey::ThisNotText => "thisNotText",
            MessageKey::ThisNotArray => "thisNotArray",
            MessageKey::SelectMinItems => "selectMinItems",
            MessageKey::SelectMaxItems => "selectMaxItems",
            MessageKey::InvalidDate => "invalidDate",
            MessageKey::DateIsEarly => "dateIsEarly",
            MessageKey::DateIsLate => "dateIsLate",
            MessageKey::InvalidEmail => "invalidEmail",
            MessageKey::InvalidUrl => "invalidURL",
            MessageKey::InvalidCard => "invalidCard",
            MessageKey::InvalidCardNumber => "invalidCardNumber",
            MessageKey::InvalidTextContainNumber => "invalidTextContainNumber",
            MessageKey::InvalidTextContainSpec => "invalidTextContainSpec",
        }
    }

    /// Position of the key inside a catalog.
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MessageKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownKey(s.to_owned()))
    }
}
