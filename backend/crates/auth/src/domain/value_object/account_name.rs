//! Account Name Value Object
//!
//! The login identifier. Globally unique, compared exactly as stored.

use derive_more::Display;

use super::name::{NameError, normalize_name};

/// Validated account name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub struct AccountName(String);

impl AccountName {
    pub fn new(input: impl AsRef<str>) -> Result<Self, NameError> {
        normalize_name("Account name", input.as_ref()).map(Self)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}
