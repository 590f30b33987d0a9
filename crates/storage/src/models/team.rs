use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Keyed;

/// A team groups participants by id. The ids are not checked against the
/// tournament's participant list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Team {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    #[schema(value_type = Vec<String>)]
    pub participants: BTreeSet<String>,
}

impl Team {
    pub fn new<I, P>(id: impl Into<String>, name: impl Into<String>, participants: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        Self {
            id: id.into(),
            name: name.into(),
            participants: participants.into_iter().map(Into::into).collect(),
        }
    }
}

impl Keyed for Team {
    fn set_key(&mut self, key: String) {
        self.id = key;
    }
}
