//! Display Name Value Object

use derive_more::Display;

use super::name::{NameError, normalize_name};

/// Name shown in the UI; not unique
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub struct DisplayName(String);

impl DisplayName {
    pub fn new(input: impl AsRef<str>) -> Result<Self, NameError> {
        normalize_name("Name", input.as_ref()).map(Self)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
