use crate::schema::{EndZoneResult, ParticipantReference, Penalty, PenaltyStatus, PlayAction, Role, Roles, YardLine};
use serde::Serialize;
use std::ops::Range;

/// A parenthetical attached to the clause it follows. Nested parentheses
/// stay in the text of the outermost aside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Aside {
	pub text: String,
	pub span: Range<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PassResult {
	Complete,
	Incomplete,
	Intercepted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum KickResult {
	Good,
	NoGood,
	Blocked,
	Aborted,
	FairCatch,
	Downed,
	OutOfBounds,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Action {
	pub action: PlayAction,
	pub pass_result: Option<PassResult>,
	pub kick_result: Option<KickResult>,
	/// Only set on two-point attempts.
	pub conversion_succeeded: Option<bool>,
}

impl Action {
	pub const fn new(action: PlayAction) -> Self {
		Self {
			action,
			pass_result: None,
			kick_result: None,
			conversion_succeeded: None,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChallengeRuling {
	Reversed,
	Upheld,
	Stands,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Challenge {
	pub ruling: Option<ChallengeRuling>,
}

impl Challenge {
	pub const fn is_reversed(&self) -> bool {
		matches!(self.ruling, Some(ChallengeRuling::Reversed))
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TurnoverType {
	Interception,
	Fumble,
	Muff,
	Recovery,
}

/// A fumble nobody forced: a botched snap exchange or a team fumble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FumbleCause {
	AbortedSnap,
	Team,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Turnover {
	pub turnover_type: TurnoverType,
	/// Set instead of a `forced_by` player for `(Aborted)` and `(team)`.
	pub fumble_cause: Option<FumbleCause>,
	pub return_yards: Option<i32>,
	/// `None` when the text does not say who ended up with the ball.
	pub possession_changed: Option<bool>,
	pub recovered_at: Option<YardLine>,
}

impl Turnover {
	pub const fn new(turnover_type: TurnoverType) -> Self {
		Self {
			turnover_type,
			fumble_cause: None,
			return_yards: None,
			possession_changed: None,
			recovered_at: None,
		}
	}
}

/// Semantic kind of a segment together with its kind-specific payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SegmentKind {
	PrimaryAction(Action),
	Penalty(Penalty),
	Challenge(Challenge),
	TurnoverReturn(Turnover),
	Lateral,
	/// A player reporting in as an eligible receiver. Not part of the play.
	ReportIn,
	Unclassified,
}

impl SegmentKind {
	pub const fn name(&self) -> &'static str {
		match self {
			Self::PrimaryAction(_) => "PRIMARY_ACTION",
			Self::Penalty(_) => "PENALTY",
			Self::Challenge(_) => "CHALLENGE",
			Self::TurnoverReturn(_) => "TURNOVER_RETURN",
			Self::Lateral => "LATERAL",
			Self::ReportIn => "REPORT_IN",
			Self::Unclassified => "UNCLASSIFIED",
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
	pub index: usize,
	pub text: String,
	/// `text` without its asides.
	pub body: String,
	pub span: Range<usize>,
	pub asides: Vec<Aside>,
	/// Split off a sentence by a keyword rather than by punctuation.
	pub continues_sentence: bool,
	pub kind: SegmentKind,
	pub roles: Roles,
	pub yards: Option<i32>,
	/// `a total of N yards` when the text restates the whole gain.
	pub total_yards: Option<i32>,
	pub end_yard_line: Option<YardLine>,
	pub end_zone: Option<EndZoneResult>,
}

/// Column order of `Segment::csv_record`.
pub const CSV_ATTRIBUTES: [&str; 22] = [
	"type",
	"action",
	"primary_name",
	"yardage",
	"end_yardline",
	"pass_target",
	"pass_result",
	"tacklers",
	"penalty_team",
	"penalty_player",
	"penalty_description",
	"penalty_status",
	"penalty_yards",
	"penalty_yardline",
	"turnover_type",
	"pass_interceptor",
	"fumble_forced_by",
	"recover_team",
	"recover_player",
	"kick_result",
	"end_zone_result",
	"reversed",
];

const NA: &str = "NA";

impl Segment {
	pub const fn is_unclassified(&self) -> bool {
		matches!(self.kind, SegmentKind::Unclassified)
	}

	pub const fn action(&self) -> Option<&Action> {
		match &self.kind {
			SegmentKind::PrimaryAction(action) => Some(action),
			_ => None,
		}
	}

	pub const fn penalty(&self) -> Option<&Penalty> {
		match &self.kind {
			SegmentKind::Penalty(penalty) => Some(penalty),
			_ => None,
		}
	}

	pub const fn turnover(&self) -> Option<&Turnover> {
		match &self.kind {
			SegmentKind::TurnoverReturn(turnover) => Some(turnover),
			_ => None,
		}
	}

	/// The player the segment is about: the ball carrier, passer, kicker,
	/// or the player who lost or gained the ball.
	pub fn primary_name(&self) -> Option<&str> {
		const TURNOVER_ORDER: [Role; 4] = [Role::Interceptor, Role::Fumbler, Role::Recoverer, Role::Passer];
		const ORDER: [Role; 7] = [
			Role::Passer,
			Role::Rusher,
			Role::Kicker,
			Role::LateralReceiver,
			Role::PenalizedPlayer,
			Role::Returner,
			Role::Eligible,
		];
		let order: &[Role] = if self.turnover().is_some() { &TURNOVER_ORDER } else { &ORDER };
		order.iter().find_map(|&role| self.roles.get(role)).map(ParticipantReference::as_str)
	}

	/// Flattens the segment into `CSV_ATTRIBUTES` order with `NA` for
	/// anything not stated.
	pub fn csv_record(&self) -> Vec<String> {
		let role = |role: Role| self.roles.get(role).map_or_else(|| NA.to_string(), ToString::to_string);
		let joined = |role: Role| {
			let names: Vec<&str> = self.roles.all(role).map(|p| p.as_str()).collect();
			if names.is_empty() {
				NA.to_string()
			} else {
				names.join(";")
			}
		};
		let opt = |value: Option<String>| value.unwrap_or_else(|| NA.to_string());
		let action = self.action();
		let penalty = self.penalty();
		let forced_by = match self.turnover().and_then(|t| t.fumble_cause) {
			Some(cause) if !self.roles.contains(Role::ForcedBy) => format!("{cause:?}"),
			_ => joined(Role::ForcedBy),
		};

		vec![
			self.kind.name().to_string(),
			opt(action.map(|a| format!("{:?}", a.action))),
			opt(self.primary_name().map(str::to_string)),
			opt(self.yards.map(|y| y.to_string())),
			opt(self.end_yard_line.as_ref().map(ToString::to_string)),
			role(Role::Receiver),
			opt(action.and_then(|a| a.pass_result).map(|r| format!("{r:?}"))),
			joined(Role::Tackler),
			role(Role::PenalizedTeam),
			role(Role::PenalizedPlayer),
			opt(penalty.map(|p| p.description.clone())),
			opt(penalty.map(|p| format!("{:?}", p.status))),
			opt(penalty.and_then(|p| p.yards).map(|y| y.to_string())),
			opt(penalty.and_then(|p| p.enforced_at.as_ref()).map(ToString::to_string)),
			opt(self.turnover().map(|t| format!("{:?}", t.turnover_type))),
			role(Role::Interceptor),
			forced_by,
			role(Role::RecoveringTeam),
			role(Role::Recoverer),
			opt(action.and_then(|a| a.kick_result).map(|r| format!("{r:?}"))),
			opt(self.end_zone.map(|r| format!("{r:?}"))),
			opt(match &self.kind {
				SegmentKind::Challenge(challenge) => Some(challenge.is_reversed().to_string()),
				_ => None,
			}),
		]
	}

	pub fn penalty_status(&self) -> Option<PenaltyStatus> {
		self.penalty().map(|p| p.status)
	}
}
