use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

use super::{DocumentError, Participant, Team};
use crate::dto::tournament::{DEFAULT_TEAM_SIZE, DEFAULT_TOURNAMENT_NAME, TournamentSettings};

/// A tournament as it is stored and returned by the API.
///
/// Participants and teams are keyed by their id, so a member id appears at
/// most once and insertion order does not affect equality. The id is fixed
/// once the tournament is built; there is no setter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    id: String,
    name: String,
    description: String,
    game: String,
    /// Creation time in milliseconds since the Unix epoch.
    created_at: i64,
    team_size: i32,
    participants: BTreeMap<String, Participant>,
    teams: BTreeMap<String, Team>,
}

impl Tournament {
    /// Parse a tournament document, filling in defaults for missing fields.
    pub fn from_document(document: Value) -> Result<Self, DocumentError> {
        Ok(TournamentSettings::from_document(document)?.into_tournament())
    }

    pub fn to_document(&self) -> Result<Value, DocumentError> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn game(&self) -> &str {
        &self.game
    }

    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    pub fn team_size(&self) -> i32 {
        self.team_size
    }

    pub fn participants(&self) -> &BTreeMap<String, Participant> {
        &self.participants
    }

    pub fn teams(&self) -> &BTreeMap<String, Team> {
        &self.teams
    }

    pub fn participant(&self, id: &str) -> Option<&Participant> {
        self.participants.get(id)
    }

    pub fn team(&self, id: &str) -> Option<&Team> {
        self.teams.get(id)
    }
}

impl From<TournamentSettings> for Tournament {
    fn from(settings: TournamentSettings) -> Self {
        Self {
            id: settings.id.unwrap_or_else(generate_id),
            name: settings
                .name
                .unwrap_or_else(|| DEFAULT_TOURNAMENT_NAME.to_string()),
            description: settings.description.unwrap_or_default(),
            game: settings.game.unwrap_or_default(),
            created_at: settings.created_at.unwrap_or_else(now_millis),
            team_size: settings.team_size.unwrap_or(DEFAULT_TEAM_SIZE),
            participants: settings.participants,
            teams: settings.teams,
        }
    }
}

/// Fresh tournament id: a v4 UUID in its 32 character hex form.
pub fn generate_id() -> String {
    Uuid::new_v4().simple().to_string()
}

pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
