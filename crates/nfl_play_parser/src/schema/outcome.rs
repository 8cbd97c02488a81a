use crate::schema::ScoringEvent;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OutcomeKind {
	Completion,
	Incomplete,
	Run,
	Sack,
	Kneel,
	Spike,
	Kick,
	FieldGoalAttempt,
	ExtraPointAttempt,
	TwoPointAttempt,
	Turnover,
	PenaltyAdjusted,
	PenaltyOnly,
	NoPlay,
}

/// The single effective result of a play after every segment was applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedOutcome {
	pub kind: OutcomeKind,
	/// Kind set by the primary action before penalties or turnovers changed it.
	pub base_kind: Option<OutcomeKind>,
	pub net_yards: i32,
	pub base_yards: i32,
	pub lateral_yards: i32,
	pub return_yards: Option<i32>,
	pub penalty_yards: i32,
	/// A pair of offsetting penalties cancelled each other.
	pub offsetting: bool,
	/// The down is replayed (offsetting pair or an enforced "No Play").
	pub replay_down: bool,
	pub reversed: bool,
	pub score: Option<ScoringEvent>,
	/// Indexes of segments that produced this outcome, in text order.
	pub contributing: Vec<usize>,
	/// Indexes of segments whose effect was cancelled.
	pub superseded: Vec<usize>,
}
