use crate::schema::{GameClock, ResolvedOutcome, Segment};
use serde::Serialize;

/// Everything the parser learned from one description. Owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedPlay {
	pub description: String,
	pub clock: Option<GameClock>,
	/// Leading annotations other than the clock, e.g. `Shotgun`, `No Huddle`.
	pub formation: Vec<String>,
	pub segments: Vec<Segment>,
	pub outcome: ResolvedOutcome,
	/// The feed carried a stand-in such as `*** play under review ***`
	/// instead of a play. No segments, outcome `NoPlay`.
	pub placeholder: bool,
}

impl ParsedPlay {
	pub fn unclassified(&self) -> impl Iterator<Item = &Segment> {
		self.segments.iter().filter(|segment| segment.is_unclassified())
	}

	/// True when part of the text was not recognized.
	pub fn is_low_confidence(&self) -> bool {
		self.unclassified().next().is_some()
	}

	pub fn contributing_segments(&self) -> impl Iterator<Item = &Segment> {
		self.outcome.contributing.iter().filter_map(|&index| self.segments.get(index))
	}
}
