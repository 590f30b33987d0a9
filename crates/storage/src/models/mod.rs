mod document;
mod participant;
mod team;
mod tournament;

pub use document::{DocumentError, Keyed, keyed};
pub use participant::Participant;
pub use team::Team;
pub use tournament::{Tournament, generate_id, now_millis};
