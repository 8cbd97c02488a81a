//! Parser for NFL play-by-play descriptions.
//!
//! A description such as `J.Smith pass short right to T.Jones for 12 yards`
//! goes through four stages: it is split into clause fragments, each fragment
//! is classified and its participants and yardage are extracted, and the
//! resulting segments are folded into one outcome for the play.

pub mod config;
pub mod error;
pub mod parsers;
pub mod schema;

pub use config::{LoneOffsetting, ResolverPolicy};
pub use error::ParseError;
pub use parsers::{parse, parse_plays, parse_plays_with_policy, parse_with_policy, BatchReport};
pub use schema::{OutcomeKind, ParsedPlay, ResolvedOutcome, Segment, SegmentKind, CSV_ATTRIBUTES};
