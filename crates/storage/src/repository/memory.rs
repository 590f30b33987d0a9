use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use super::tournament::TournamentStore;
use crate::error::Result;

/// Keeps tournament documents in process memory. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryTournamentStore {
    documents: RwLock<Vec<Value>>,
}

impl MemoryTournamentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

fn has_id(document: &Value, id: &str) -> bool {
    document.get("id").and_then(Value::as_str) == Some(id)
}

#[async_trait]
impl TournamentStore for MemoryTournamentStore {
    async fn find_by_id(&self, id: &str) -> Result<Option<Value>> {
        let documents = self.documents.read().await;
        Ok(documents.iter().find(|document| has_id(document, id)).cloned())
    }

    async fn insert(&self, document: &Value) -> Result<()> {
        self.documents.write().await.push(document.clone());
        Ok(())
    }

    async fn delete_by_id(&self, id: &str) -> Result<u64> {
        let mut documents = self.documents.write().await;
        let before = documents.len();
        documents.retain(|document| !has_id(document, id));

        Ok((before - documents.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::dto::tournament::TournamentSettings;

    #[tokio::test]
    async fn test_find_by_id_uses_document_field() {
        let store = MemoryTournamentStore::new();
        store.insert(&json!({ "id": "abc123", "name": "Cup" })).await.unwrap();

        let found = store.find_by_id("abc123").await.unwrap().unwrap();
        assert_eq!(found["name"], "Cup");
        assert!(store.find_by_id("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_by_id_reports_removed_count() {
        let store = MemoryTournamentStore::new();
        store.insert(&json!({ "id": "a" })).await.unwrap();
        store.insert(&json!({ "id": "b" })).await.unwrap();

        assert_eq!(store.delete_by_id("a").await.unwrap(), 1);
        assert_eq!(store.delete_by_id("a").await.unwrap(), 0);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_upsert_replaces_previous_record() {
        let store = MemoryTournamentStore::new();

        let first = TournamentSettings::default()
            .with_id("abc123")
            .with_name("First")
            .into_tournament();
        let second = TournamentSettings::default()
            .with_id("abc123")
            .with_name("Second")
            .into_tournament();

        store.upsert(&first).await.unwrap();
        let stored = store.upsert(&second).await.unwrap();

        assert_eq!(stored["name"], "Second");
        assert_eq!(store.len().await, 1);

        let found = store.find_by_id("abc123").await.unwrap().unwrap();
        assert_eq!(found["name"], "Second");
    }

    #[tokio::test]
    async fn test_upsert_returns_stored_document() {
        let store = MemoryTournamentStore::new();
        let tournament = TournamentSettings::default()
            .with_id("t")
            .add_participant("p1", "Alice")
            .into_tournament();

        let stored = store.upsert(&tournament).await.unwrap();

        assert_eq!(stored, tournament.to_document().unwrap());
        assert!(!store.is_empty().await);
    }
}
