use serde_json::Value;
use storage::{
    TournamentStore,
    error::{Result, StorageError},
    models::Tournament,
};

/// Store the tournament, replacing any record with the same id
pub async fn create_tournament(store: &dyn TournamentStore, tournament: &Tournament) -> Result<Value> {
    let document = store.upsert(tournament).await?;

    tracing::info!(
        tournament_id = %tournament.id(),
        participants = tournament.participants().len(),
        teams = tournament.teams().len(),
        "Tournament stored"
    );

    Ok(document)
}

/// Get the stored document for a tournament id
pub async fn get_tournament(store: &dyn TournamentStore, id: &str) -> Result<Value> {
    store.find_by_id(id).await?.ok_or(StorageError::NotFound)
}
