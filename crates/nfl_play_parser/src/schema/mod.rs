pub mod game_clock;
pub mod outcome;
pub mod parsed_play;
pub mod participant;
pub mod penalty;
pub mod play_type;
pub mod scoring_events;
pub mod segment;
pub mod teams;
pub mod yards;

pub use game_clock::*;
pub use outcome::*;
pub use parsed_play::*;
pub use participant::*;
pub use penalty::*;
pub use play_type::*;
pub use scoring_events::*;
pub use segment::*;
pub use teams::*;
pub use yards::*;
