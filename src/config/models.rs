use serde::{Deserialize, Serialize};

/// Everything DuckDNS needs to update a set of records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Update {
    #[serde(default)]
    pub token: String,

    #[serde(default, rename = "domains")]
    pub names: Vec<String>,
}

impl Update {
    pub fn new(token: impl Into<String>, names: Vec<String>) -> Self {
        Self {
            token: token.into(),
            names,
        }
    }

    /// An update can be sent once it has a token and at least one name.
    pub fn is_valid(&self) -> bool {
        !self.names.is_empty() && !self.token.is_empty()
    }
}
