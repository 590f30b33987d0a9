use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Keyed;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Participant {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

impl Participant {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl Keyed for Participant {
    fn set_key(&mut self, key: String) {
        self.id = key;
    }
}
