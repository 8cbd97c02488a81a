//! Folds the segments of one play into a single [`ResolvedOutcome`].

use crate::config::{LoneOffsetting, ResolverPolicy};
use crate::schema::{
	Action, ChallengeRuling, EndZoneResult, KickResult, OutcomeKind, ParticipantReference, PassResult, Penalty, PenaltySide, PlayAction,
	ResolvedOutcome, Role, ScoringEvent, ScoringEventType, Segment, SegmentKind, Turnover,
};
use tracing::debug;

#[derive(Debug, Clone)]
struct Base {
	index: usize,
	kind: OutcomeKind,
	action: PlayAction,
	yards: i32,
}

/// Running state while the segments of a play are applied in order.
#[derive(Debug)]
struct ResolverState<'a> {
	policy: &'a ResolverPolicy,
	base: Option<Base>,
	lateral_yards: i32,
	laterals: Vec<usize>,
	turnover: Option<usize>,
	/// Segments that moved the ball after the turnover.
	turnover_returns: Vec<usize>,
	returner: Option<ParticipantReference>,
	return_yards: Option<i32>,
	penalties: Vec<(usize, i32)>,
	pending_offsetting: Option<(usize, i32)>,
	offsetting: bool,
	replay_down: bool,
	no_play: bool,
	reversed: bool,
	reversal_pending: bool,
	stated_total: Option<i32>,
	score: Option<ScoringEvent>,
	contributing: Vec<usize>,
	superseded: Vec<usize>,
}

pub fn resolve(segments: &[Segment]) -> ResolvedOutcome {
	resolve_with_policy(segments, &ResolverPolicy::default())
}

pub fn resolve_with_policy(segments: &[Segment], policy: &ResolverPolicy) -> ResolvedOutcome {
	segments.iter().fold(ResolverState::new(policy), ResolverState::apply).finish()
}

const fn base_kind(action: &Action) -> OutcomeKind {
	match action.action {
		PlayAction::Pass => match action.pass_result {
			Some(PassResult::Complete) => OutcomeKind::Completion,
			_ => OutcomeKind::Incomplete,
		},
		PlayAction::Run => OutcomeKind::Run,
		PlayAction::Sack => OutcomeKind::Sack,
		PlayAction::Kneel => OutcomeKind::Kneel,
		PlayAction::Spike => OutcomeKind::Spike,
		PlayAction::Kickoff | PlayAction::Punt => OutcomeKind::Kick,
		PlayAction::FieldGoal => OutcomeKind::FieldGoalAttempt,
		PlayAction::ExtraPoint => OutcomeKind::ExtraPointAttempt,
		PlayAction::TwoPointConversion => OutcomeKind::TwoPointAttempt,
	}
}

fn action_score(segment: &Segment, action: &Action) -> Option<ScoringEvent> {
	let event = match (action.action, action.kick_result, action.conversion_succeeded) {
		(PlayAction::FieldGoal, Some(KickResult::Good), _) => Some(ScoringEventType::FieldGoal),
		(PlayAction::ExtraPoint, Some(KickResult::Good), _) => Some(ScoringEventType::ExtraPoint),
		(PlayAction::TwoPointConversion, _, Some(true)) => Some(ScoringEventType::TwoPointConversion),
		(PlayAction::FieldGoal | PlayAction::ExtraPoint | PlayAction::TwoPointConversion, _, _) => None,
		_ => end_zone_score(segment.end_zone, false),
	};
	event.map(ScoringEvent::from)
}

fn end_zone_score(end_zone: Option<EndZoneResult>, defense: bool) -> Option<ScoringEventType> {
	match end_zone? {
		EndZoneResult::Touchdown if defense => Some(ScoringEventType::DefensiveTouchdown),
		EndZoneResult::Touchdown => Some(ScoringEventType::Touchdown),
		EndZoneResult::Safety => Some(ScoringEventType::Safety),
		EndZoneResult::Touchback => None,
	}
}

/// Offense fouls cost yards, defense fouls give them. A foul that either
/// side can commit is signed by the configured offense, and charged to the
/// offense when that is unknown.
fn penalty_yards(penalty: &Penalty, policy: &ResolverPolicy) -> i32 {
	let yards = penalty.yards.unwrap_or(0);
	let side = penalty.penalty_type.as_ref().map_or(PenaltySide::Either, |penalty_type| penalty_type.side());
	let against_offense = match side {
		PenaltySide::Offense => true,
		PenaltySide::Defense => false,
		PenaltySide::Either => penalty
			.team
			.as_ref()
			.and_then(|team| policy.is_offense(team.as_str()))
			.unwrap_or(true),
	};
	if against_offense {
		-yards
	} else {
		yards
	}
}

fn carrier(segment: &Segment) -> Option<&ParticipantReference> {
	[Role::Rusher, Role::LateralReceiver, Role::Returner].into_iter().find_map(|role| segment.roles.get(role))
}

impl<'a> ResolverState<'a> {
	const fn new(policy: &'a ResolverPolicy) -> Self {
		Self {
			policy,
			base: None,
			lateral_yards: 0,
			laterals: Vec::new(),
			turnover: None,
			turnover_returns: Vec::new(),
			returner: None,
			return_yards: None,
			penalties: Vec::new(),
			pending_offsetting: None,
			offsetting: false,
			replay_down: false,
			no_play: false,
			reversed: false,
			reversal_pending: false,
			stated_total: None,
			score: None,
			contributing: Vec::new(),
			superseded: Vec::new(),
		}
	}

	fn apply(mut self, segment: &Segment) -> Self {
		if segment.total_yards.is_some() {
			self.stated_total = segment.total_yards;
		}
		match &segment.kind {
			SegmentKind::PrimaryAction(action) => self.primary_action(segment, action),
			SegmentKind::Challenge(challenge) => {
				self.contributing.push(segment.index);
				if challenge.ruling == Some(ChallengeRuling::Reversed) {
					self.reverse(segment.index);
				}
			}
			SegmentKind::Penalty(penalty) => self.penalty(segment.index, penalty),
			SegmentKind::TurnoverReturn(turnover) => self.turnover(segment, turnover),
			SegmentKind::Lateral => self.lateral(segment),
			SegmentKind::ReportIn | SegmentKind::Unclassified => {}
		}
		self
	}

	fn set_base(&mut self, segment: &Segment, action: &Action) {
		let kind = base_kind(action);
		let yards = match kind {
			OutcomeKind::FieldGoalAttempt | OutcomeKind::ExtraPointAttempt | OutcomeKind::TwoPointAttempt => 0,
			_ => segment.yards.unwrap_or(0),
		};
		self.base = Some(Base {
			index: segment.index,
			kind,
			action: action.action,
			yards,
		});
		self.score = action_score(segment, action);
		self.returner = segment.roles.get(Role::Returner).cloned();
		self.reversal_pending = false;
		self.contributing.push(segment.index);
	}

	fn primary_action(&mut self, segment: &Segment, action: &Action) {
		let Some(base) = &self.base else {
			self.set_base(segment, action);
			return;
		};

		if self.reversal_pending {
			debug!(replaced = base.index, by = segment.index, "restated play replaces reversed ruling");
			let replaced = base.index;
			self.superseded.push(replaced);
			self.contributing.retain(|&index| index != replaced);
			self.set_base(segment, action);
			return;
		}

		let yards = segment.yards.unwrap_or(0);
		let by_returner = match (carrier(segment), &self.returner) {
			(Some(runner), Some(returner)) => runner == returner,
			_ => false,
		};
		if by_returner {
			self.return_yards = Some(self.return_yards.unwrap_or(0) + yards);
			if self.turnover.is_some() {
				self.turnover_returns.push(segment.index);
			}
			self.score_from(segment);
		} else if base.action.is_kick() && action.action == PlayAction::Run && self.turnover.is_none() && self.return_yards.is_none() {
			self.returner = carrier(segment).cloned();
			self.return_yards = Some(yards);
			self.score_from(segment);
		} else {
			debug!(index = segment.index, "primary action after the base is a qualifier");
		}
		self.contributing.push(segment.index);
	}

	fn score_from(&mut self, segment: &Segment) {
		if let Some(event) = end_zone_score(segment.end_zone, self.turnover.is_some()) {
			self.score = Some(ScoringEvent::from(event));
		}
	}

	fn reverse(&mut self, index: usize) {
		debug!(index, "ruling reversed");
		self.reversed = true;
		self.reversal_pending = true;
		self.score = None;
		if let Some(turnover) = self.turnover.take() {
			let voided: Vec<usize> = std::iter::once(turnover).chain(self.turnover_returns.drain(..)).collect();
			self.contributing.retain(|i| !voided.contains(i));
			self.superseded.extend(voided);
			self.returner = None;
			self.return_yards = None;
			return;
		}
		if let Some(base) = &mut self.base {
			base.kind = match base.kind {
				OutcomeKind::Completion => {
					base.yards = 0;
					OutcomeKind::Incomplete
				}
				OutcomeKind::Incomplete => OutcomeKind::Completion,
				kind => kind,
			};
		}
	}

	fn penalty(&mut self, index: usize, penalty: &Penalty) {
		let yards = penalty_yards(penalty, self.policy);
		if !penalty.is_effective() {
			self.superseded.push(index);
			return;
		}
		if penalty.is_offsetting() {
			if self.offsetting {
				debug!(index, "offsetting penalty joins a matched pair");
				self.superseded.push(index);
				return;
			}
			match self.pending_offsetting.take() {
				Some((other, _)) => {
					debug!(first = other, second = index, "offsetting penalties cancel");
					self.superseded.extend([other, index]);
					self.offsetting = true;
					self.replay_down = true;
				}
				None => self.pending_offsetting = Some((index, yards)),
			}
			return;
		}
		if penalty.no_play {
			self.no_play = true;
			self.replay_down = true;
		}
		self.penalties.push((index, yards));
		self.contributing.push(index);
	}

	fn turnover(&mut self, segment: &Segment, turnover: &Turnover) {
		self.contributing.push(segment.index);
		let changed = turnover.possession_changed.or_else(|| {
			segment
				.roles
				.get(Role::RecoveringTeam)
				.and_then(|team| self.policy.is_offense(team.as_str()))
				.map(|offense| !offense)
		});
		if changed == Some(false) {
			debug!(index = segment.index, "ball stayed with the offense");
			return;
		}

		self.turnover = Some(segment.index);
		self.returner = [Role::Interceptor, Role::Recoverer].into_iter().find_map(|role| segment.roles.get(role)).cloned();
		self.return_yards = Some(turnover.return_yards.unwrap_or(0));
		self.score = end_zone_score(segment.end_zone, true).map(ScoringEvent::from);
	}

	fn lateral(&mut self, segment: &Segment) {
		let yards = segment.yards.unwrap_or(0);
		if self.turnover.is_some() || self.return_yards.is_some() {
			self.return_yards = Some(self.return_yards.unwrap_or(0) + yards);
			if self.turnover.is_some() {
				self.turnover_returns.push(segment.index);
			}
			self.returner = segment.roles.get(Role::LateralReceiver).cloned().or_else(|| self.returner.take());
		} else {
			self.lateral_yards += yards;
			self.laterals.push(segment.index);
		}
		self.score_from(segment);
		self.contributing.push(segment.index);
	}

	fn finish(mut self) -> ResolvedOutcome {
		if let Some((index, yards)) = self.pending_offsetting.take() {
			match self.policy.lone_offsetting {
				LoneOffsetting::ApplyAsStandard => {
					debug!(index, "lone offsetting penalty applied as a standard penalty");
					self.penalties.push((index, yards));
					self.contributing.push(index);
				}
				LoneOffsetting::TreatAsOffsetting => {
					self.superseded.push(index);
					self.offsetting = true;
					self.replay_down = true;
				}
			}
		}

		let penalty_yards: i32 = self.penalties.iter().map(|(_, yards)| yards).sum();
		let base_kind = self.base.as_ref().map(|base| base.kind);
		let base_yards = self.base.as_ref().map_or(0, |base| base.yards);

		if self.no_play {
			let cancelled: Vec<usize> = self.base.iter().map(|base| base.index).chain(self.laterals.iter().copied()).chain(self.turnover).collect();
			self.contributing.retain(|index| !cancelled.contains(index));
			self.superseded.extend(cancelled);
			return self.into_outcome(OutcomeKind::NoPlay, base_kind, penalty_yards, base_yards, penalty_yards, None);
		}

		let return_yards = self.return_yards.unwrap_or(0);
		let is_kick = self.base.as_ref().is_some_and(|base| base.action.is_kick());
		let mut play_yards = base_yards + self.lateral_yards + if is_kick && self.turnover.is_none() { -return_yards } else { return_yards };
		if self.policy.prefer_stated_total {
			if let Some(total) = self.stated_total {
				play_yards = total;
			}
		}

		let kind = match (base_kind, self.turnover) {
			(_, Some(_)) => OutcomeKind::Turnover,
			(None, None) if self.penalties.is_empty() => OutcomeKind::NoPlay,
			(None, None) => OutcomeKind::PenaltyOnly,
			(Some(_), None) if !self.penalties.is_empty() => OutcomeKind::PenaltyAdjusted,
			(Some(kind), None) => kind,
		};
		let score = self.score;
		self.into_outcome(kind, base_kind, play_yards + penalty_yards, base_yards, penalty_yards, score)
	}

	fn into_outcome(
		mut self,
		kind: OutcomeKind,
		base_kind: Option<OutcomeKind>,
		net_yards: i32,
		base_yards: i32,
		penalty_yards: i32,
		score: Option<ScoringEvent>,
	) -> ResolvedOutcome {
		self.contributing.sort_unstable();
		self.contributing.dedup();
		self.superseded.sort_unstable();
		self.superseded.dedup();
		let superseded = self.superseded;
		self.contributing.retain(|index| !superseded.contains(index));

		ResolvedOutcome {
			kind,
			base_kind,
			net_yards,
			base_yards,
			lateral_yards: self.lateral_yards,
			return_yards: self.return_yards,
			penalty_yards,
			offsetting: self.offsetting,
			replay_down: self.replay_down,
			reversed: self.reversed,
			score,
			contributing: self.contributing,
			superseded,
		}
	}
}
