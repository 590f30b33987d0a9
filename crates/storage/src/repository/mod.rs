pub mod memory;
pub mod tournament;
