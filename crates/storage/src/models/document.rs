use thiserror::Error;

/// Errors raised while turning a JSON document into an entity or back.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("malformed document: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("document must be a JSON object")]
    NotAnObject,
}

/// An entity stored inside a parent document under its own id.
pub trait Keyed {
    fn set_key(&mut self, key: String);
}

/// Serde adapter reading `{ id: { ...entity } }` into a map of entities.
///
/// The map key wins over any `id` stored inside the nested document.
pub mod keyed {
    use std::collections::BTreeMap;

    use serde::{Deserialize, Deserializer};

    use super::Keyed;

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<BTreeMap<String, T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Keyed + Deserialize<'de>,
    {
        let mut entries = BTreeMap::<String, T>::deserialize(deserializer)?;
        for (key, entry) in entries.iter_mut() {
            entry.set_key(key.clone());
        }

        Ok(entries)
    }
}
