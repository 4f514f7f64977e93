use error::MapError;
use serde::{Deserialize, Serialize};

/// What happens to a field whose kinds differ and for which no conversion is registered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
    /// The field keeps its previous value.
    #[default]
    Lenient,
    /// The mapping fails with `MapError::MissingConversion`.
    Strict,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MapperConfig {
    pub strictness: Strictness,
}

impl MapperConfig {
    pub fn strict() -> Self {
        MapperConfig {
            strictness: Strictness::Strict,
        }
    }

    pub fn from_toml(text: &str) -> Result<Self, MapError> {
        Ok(toml::from_str(text).map_err(|err| err.to_string())?)
    }

    pub fn is_strict(&self) -> bool {
        self.strictness == Strictness::Strict
    }
}
