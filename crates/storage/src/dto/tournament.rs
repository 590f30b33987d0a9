use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{DocumentError, Participant, Team, Tournament, keyed};

pub const DEFAULT_TOURNAMENT_NAME: &str = "Tournament";
pub const DEFAULT_TEAM_SIZE: i32 = 1;

/// Settings for a new tournament, as sent to the create endpoint.
///
/// Every field is optional. Missing values are filled in by
/// [`TournamentSettings::into_tournament`]:
///
/// | field         | default                              |
/// |---------------|--------------------------------------|
/// | `id`          | freshly generated unique id          |
/// | `name`        | `"Tournament"`                       |
/// | `description` | `""`                                 |
/// | `game`        | `""`                                 |
/// | `createdAt`   | current time, epoch milliseconds     |
/// | `teamSize`    | `1`                                  |
///
/// Field types are checked while parsing; values are taken as given. The one
/// rule is that a supplied `id` must not be empty, since a record stored
/// under an empty id could never be fetched back.
///
/// Participants and teams are keyed by id, so adding a second member with an
/// id already present replaces the first.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TournamentSettings {
    #[validate(length(min = 1, message = "Tournament id must not be empty"))]
    pub id: Option<String>,

    pub name: Option<String>,

    pub description: Option<String>,

    pub game: Option<String>,

    pub created_at: Option<i64>,

    pub team_size: Option<i32>,

    #[serde(default, deserialize_with = "keyed::deserialize")]
    pub participants: BTreeMap<String, Participant>,

    #[serde(default, deserialize_with = "keyed::deserialize")]
    pub teams: BTreeMap<String, Team>,
}

impl TournamentSettings {
    pub fn from_document(document: Value) -> Result<Self, DocumentError> {
        if !document.is_object() {
            return Err(DocumentError::NotAnObject);
        }

        Ok(serde_json::from_value(document)?)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, DocumentError> {
        let document: Value = serde_json::from_slice(bytes)?;
        Self::from_document(document)
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_game(mut self, game: impl Into<String>) -> Self {
        self.game = Some(game.into());
        self
    }

    pub fn with_team_size(mut self, team_size: i32) -> Self {
        self.team_size = Some(team_size);
        self
    }

    pub fn add_participant(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        let participant = Participant::new(id, name);
        self.participants.insert(participant.id.clone(), participant);
        self
    }

    pub fn add_team(mut self, team: Team) -> Self {
        self.teams.insert(team.id.clone(), team);
        self
    }

    /// Fill in defaults. Call `validate()` first when the settings come from a client.
    pub fn into_tournament(self) -> Tournament {
        Tournament::from(self)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_builder_overrides_defaults() {
        let tournament = TournamentSettings::default()
            .with_id("cup-2025")
            .with_name("Summer Cup")
            .with_description("Open bracket")
            .with_game("chess")
            .with_team_size(3)
            .add_participant("p1", "Alice")
            .add_team(Team::new("t1", "Knights", ["p1"]))
            .into_tournament();

        assert_eq!(tournament.id(), "cup-2025");
        assert_eq!(tournament.name(), "Summer Cup");
        assert_eq!(tournament.description(), "Open bracket");
        assert_eq!(tournament.game(), "chess");
        assert_eq!(tournament.team_size(), 3);
        assert_eq!(tournament.participant("p1").unwrap().name, "Alice");
        assert!(tournament.team("t1").unwrap().participants.contains("p1"));
    }

    #[test]
    fn test_default_settings_are_valid() {
        assert!(TournamentSettings::default().validate().is_ok());
    }

    #[test]
    fn test_empty_id_fails_validation() {
        let settings = TournamentSettings::default().with_id("");
        let errors = settings.validate().unwrap_err();

        assert!(errors.field_errors().contains_key("id"));
    }

    #[test]
    fn test_any_team_size_passes_validation() {
        for team_size in [0, -3, 64] {
            let settings =
                TournamentSettings::from_document(json!({ "teamSize": team_size })).unwrap();

            assert!(settings.validate().is_ok());
            assert_eq!(settings.into_tournament().team_size(), team_size);
        }
    }

    #[test]
    fn test_duplicate_participant_id_keeps_last() {
        let tournament = TournamentSettings::default()
            .with_id("t")
            .add_participant("p1", "Alice")
            .add_participant("p1", "Bob")
            .into_tournament();

        assert_eq!(tournament.participants().len(), 1);
        assert_eq!(tournament.participant("p1").unwrap().name, "Bob");

        let document = tournament.to_document().unwrap();
        assert_eq!(Tournament::from_document(document).unwrap(), tournament);
    }

    #[test]
    fn test_duplicate_team_id_keeps_last() {
        let tournament = TournamentSettings::default()
            .with_id("t")
            .add_team(Team::new("t1", "Knights", ["p1"]))
            .add_team(Team::new("t1", "Rooks", ["p2", "p3"]))
            .into_tournament();

        assert_eq!(tournament.teams().len(), 1);
        let team = tournament.team("t1").unwrap();
        assert_eq!(team.name, "Rooks");
        assert_eq!(team.participants.len(), 2);

        let document = tournament.to_document().unwrap();
        assert_eq!(Tournament::from_document(document).unwrap(), tournament);
    }

    #[test]
    fn test_from_slice_rejects_invalid_json() {
        let result = TournamentSettings::from_slice(b"{not json");
        assert!(matches!(result, Err(DocumentError::Malformed(_))));
    }

    #[test]
    fn test_from_slice_rejects_non_object() {
        let result = TournamentSettings::from_slice(b"\"abc123\"");
        assert!(matches!(result, Err(DocumentError::NotAnObject)));
    }
}
