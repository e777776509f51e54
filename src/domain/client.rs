use serde::{Deserialize, Serialize};

/// The person holding an account.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Client {
    pub name: String,
    /// Tax identification document.
    pub document: String,
    pub profession: String,
}

impl Client {
    pub fn new(
        name: impl Into<String>,
        document: impl Into<String>,
        profession: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            document: document.into(),
            profession: profession.into(),
        }
    }
}
