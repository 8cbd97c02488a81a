//! Fills roles, yardage and kind-specific payload into classified segments.
//!
//! Nothing is guessed: a role or figure the text does not state stays
//! absent.

use crate::parsers::patterns::{
	BARE_NAME, END_SPOT, LEADING_NAME, NAME, NAME_REGEX, NULLIFIED, REPORTED_ELIGIBLE, SPOT, TEAM, TOTAL_YARDS, YARDS_MARKER,
};
use crate::schema::{
	Action, Challenge, ChallengeRuling, EndZoneResult, FumbleCause, GameClock, KickResult, ParticipantReference, PassResult, Penalty, PenaltyStatus,
	PenaltyType, PlayAction, Role, Segment, SegmentKind, Turnover, TurnoverType, YardLine, Yards,
};
use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;

fn compile(pattern: &str) -> Regex {
	Regex::new(pattern).unwrap()
}

static PASSER: Lazy<Regex> = Lazy::new(|| compile(&format!(r"({NAME}) pass\b")));
static TARGET: Lazy<Regex> = Lazy::new(|| compile(&format!(r"\b(?:to|intended for) ({NAME})")));
static INTENDED_FOR: Lazy<Regex> = Lazy::new(|| compile(&format!(r"\bintended for ({NAME})")));
static SACKED: Lazy<Regex> = Lazy::new(|| compile(&format!(r"({NAME}) sacked\b")));
static FAIR_CATCH: Lazy<Regex> = Lazy::new(|| compile(&format!(r"(?i:fair catch by) ({NAME})")));
static DOWNED: Lazy<Regex> = Lazy::new(|| compile(r"(?i)\bdowned\b"));
static OUT_OF_BOUNDS: Lazy<Regex> = Lazy::new(|| compile(r"(?i)\bout of bounds\b"));
static PUNT_BLOCKED: Lazy<Regex> = Lazy::new(|| compile(r"(?i)\bpunt is blocked\b"));
static FIELD_GOAL_DISTANCE: Lazy<Regex> = Lazy::new(|| compile(r"(\d+) yard field goal\b"));
static KICK_RESULT: Lazy<Regex> = Lazy::new(|| compile(r"(?i)\b(?:(no good)|(good)|(blocked)|(aborted))\b"));
static CONVERSION_RESULT: Lazy<Regex> = Lazy::new(|| compile(r"(?i)\bATTEMPT (SUCCEEDS|FAILS)\b"));
static CONVERSION_HEADER: Lazy<Regex> = Lazy::new(|| compile(r"(?i)^TWO[- ]POINT CONVERSION ATTEMPT\.?\s*"));

static PENALTY_ON: Lazy<Regex> = Lazy::new(|| compile(&format!(r"\b(?:PENALTY|Penalty) on (?:({TEAM})-({NAME})|({TEAM})\b)")));
static PENALTY_STOP: Lazy<Regex> =
	Lazy::new(|| compile(r"(?i)-?\d+ yards?\b|\bdeclined\b|\boffsetting\b|\bsuperseded\b|\benforced\b|\bno play\b"));
static PENALTY_YARDS: Lazy<Regex> = Lazy::new(|| compile(r"\b(\d+) yards?\b"));
static ENFORCED_AT: Lazy<Regex> = Lazy::new(|| compile(&format!(r"(?i:enforced at) ({SPOT})")));
static BETWEEN_DOWNS: Lazy<Regex> = Lazy::new(|| compile(r"(?i)\benforced between downs\b"));
static NO_PLAY: Lazy<Regex> = Lazy::new(|| compile(r"(?i)\bno play\b"));

static INTERCEPTED_BY: Lazy<Regex> = Lazy::new(|| compile(&format!(r"(?i:intercepted by) ({NAME})")));
static FUMBLER: Lazy<Regex> = Lazy::new(|| compile(&format!(r"({NAME}),? (?i:fumbles|fumbled|muffs|muffed)\b")));
static FUMBLE_KEYWORD: Lazy<Regex> = Lazy::new(|| compile(r"(?i)\b(?:fumbles|fumbled|muffs|muffed)\b"));
static RECOVERED_BY: Lazy<Regex> =
	Lazy::new(|| compile(&format!(r"(?i:recovered by) ({TEAM})(?:-({NAME}))?(?: at ({SPOT}))?")));
static RECOVERS_OWN: Lazy<Regex> = Lazy::new(|| compile(r"(?i)\band recovers\b|\bdeclared dead\b"));
static RETURNED: Lazy<Regex> = Lazy::new(|| compile(r"(?i)\breturned (?:for )?(-?\d+) yards?\b"));

static LATERAL_TO: Lazy<Regex> = Lazy::new(|| compile(&format!(r"(?i:laterals? to) ({NAME})")));

static CHALLENGED_BY: Lazy<Regex> = Lazy::new(|| compile(&format!(r"(?i:challenged by) ({TEAM})\b|^({TEAM}) (?i:challenged)\b")));

/// Fills one segment in place of the classifier's empty payload.
pub fn extract(mut segment: Segment) -> Segment {
	let body = segment.body.clone();
	segment.kind = match std::mem::replace(&mut segment.kind, SegmentKind::Unclassified) {
		SegmentKind::PrimaryAction(action) => SegmentKind::PrimaryAction(extract_action(&mut segment, &body, action)),
		SegmentKind::Penalty(_) => SegmentKind::Penalty(extract_penalty(&mut segment, &body)),
		SegmentKind::TurnoverReturn(turnover) => SegmentKind::TurnoverReturn(extract_turnover(&mut segment, &body, turnover)),
		SegmentKind::Lateral => {
			extract_lateral(&mut segment, &body);
			SegmentKind::Lateral
		}
		SegmentKind::Challenge(_) => SegmentKind::Challenge(extract_challenge(&mut segment, &body)),
		SegmentKind::ReportIn => {
			extract_report_in(&mut segment, &body);
			SegmentKind::ReportIn
		}
		SegmentKind::Unclassified => SegmentKind::Unclassified,
	};
	segment
}

/// Extracts every segment, then lets a turnover clause that was split off
/// mid-sentence (`... pass intercepted by`, `... for 5 yards, FUMBLES`)
/// credit the player who had the ball in the clause before it.
pub fn extract_all(segments: impl IntoIterator<Item = Segment>) -> Vec<Segment> {
	let mut extracted: Vec<Segment> = segments.into_iter().map(extract).collect();
	for i in 1..extracted.len() {
		let (before, after) = extracted.split_at_mut(i);
		let (previous, current) = (&mut before[i - 1], &mut after[0]);
		if !current.continues_sentence {
			continue;
		}
		let Some(turnover) = current.turnover() else {
			continue;
		};
		let (role, carrier) = match turnover.turnover_type {
			TurnoverType::Interception => (Role::Passer, previous.roles.get(Role::Passer).cloned()),
			TurnoverType::Fumble | TurnoverType::Muff => (Role::Fumbler, ball_carrier(previous).cloned()),
			TurnoverType::Recovery => continue,
		};
		if role == Role::Passer {
			if let SegmentKind::PrimaryAction(action) = &mut previous.kind {
				if action.action == PlayAction::Pass {
					action.pass_result = Some(PassResult::Intercepted);
				}
			}
		}
		if let Some(carrier) = carrier {
			if !current.roles.contains(role) {
				current.roles.insert(role, carrier);
			}
		}
	}
	extracted
}

fn ball_carrier(segment: &Segment) -> Option<&ParticipantReference> {
	let completed = segment.action().and_then(|a| a.pass_result) == Some(PassResult::Complete);
	if completed {
		return segment.roles.get(Role::Receiver);
	}
	[Role::LateralReceiver, Role::Rusher, Role::Returner, Role::Passer]
		.into_iter()
		.find_map(|role| segment.roles.get(role))
}

/// Clock and formation annotations in front of the first segment.
pub fn leading_annotations(segments: &[Segment]) -> (Option<GameClock>, Vec<String>) {
	let mut clock = None;
	let mut formation = Vec::new();
	let Some(first) = segments.first() else {
		return (clock, formation);
	};

	let mut cursor = first.span.start;
	for aside in &first.asides {
		let gap = first.text.get(cursor - first.span.start..aside.span.start - first.span.start).unwrap_or("");
		if !gap.trim().is_empty() {
			break;
		}
		cursor = aside.span.end;
		match GameClock::from_str(&aside.text) {
			Ok(parsed) if clock.is_none() => clock = Some(parsed),
			_ => formation.extend(aside.text.split(',').map(str::trim).filter(|s| !s.is_empty()).map(str::to_string)),
		}
	}
	(clock, formation)
}

fn leading_name(body: &str) -> Option<&str> {
	LEADING_NAME.captures(body).and_then(|caps| caps.get(1)).map(|m| m.as_str())
}

fn capture<'a>(regex: &Regex, text: &'a str) -> Option<&'a str> {
	regex.captures(text).and_then(|caps| caps.get(1)).map(|m| m.as_str())
}

fn stated_yards(body: &str) -> Option<i32> {
	Yards::from_str(body).ok().map(|yards| yards.signed())
}

fn marker_yards(body: &str) -> Option<i32> {
	capture(&YARDS_MARKER, body).and_then(|value| value.parse().ok())
}

fn end_spot(body: &str) -> Option<YardLine> {
	END_SPOT.captures_iter(body).last().and_then(|caps| caps[1].parse().ok())
}

/// Asides made of nothing but player names, e.g. `(T.Smith, L.David)`.
fn name_list(text: &str) -> Option<Vec<&str>> {
	let names: Vec<&str> = text.split([',', ';']).map(str::trim).collect();
	names.iter().all(|name| BARE_NAME.is_match(name)).then_some(names)
}

fn add_tacklers(segment: &mut Segment) {
	let names: Vec<String> = segment
		.asides
		.iter()
		.filter_map(|aside| name_list(&aside.text))
		.flatten()
		.map(str::to_string)
		.collect();
	for name in names {
		segment.roles.insert_token(Role::Tackler, &name);
	}
}

fn add_common(segment: &mut Segment, body: &str) {
	segment.end_yard_line = end_spot(body);
	segment.total_yards = capture(&TOTAL_YARDS, body).and_then(|value| value.parse().ok());
	if !NULLIFIED.is_match(body) {
		segment.end_zone = EndZoneResult::from_str(body).ok();
	}
}

fn extract_action(segment: &mut Segment, body: &str, mut action: Action) -> Action {
	add_common(segment, body);
	match action.action {
		PlayAction::Pass => {
			if let Some(passer) = capture(&PASSER, body).or_else(|| leading_name(body)) {
				segment.roles.insert_token(Role::Passer, passer);
			}
			if body.to_lowercase().contains("incomplete") {
				action.pass_result = Some(PassResult::Incomplete);
				segment.yards = Some(0);
				if let Some(target) = capture(&INTENDED_FOR, body).or_else(|| capture(&TARGET, body)) {
					segment.roles.insert_token(Role::Receiver, target);
				}
			} else if let Some(target) = capture(&INTENDED_FOR, body) {
				segment.roles.insert_token(Role::Receiver, target);
			} else {
				if let Some(receiver) = capture(&TARGET, body) {
					segment.roles.insert_token(Role::Receiver, receiver);
					action.pass_result = Some(PassResult::Complete);
				}
				segment.yards = stated_yards(body);
			}
			add_tacklers(segment);
		}
		PlayAction::Run | PlayAction::Kneel => {
			if let Some(rusher) = leading_name(body) {
				segment.roles.insert_token(Role::Rusher, rusher);
			}
			segment.yards = stated_yards(body);
			add_tacklers(segment);
		}
		PlayAction::Sack => {
			if let Some(passer) = capture(&SACKED, body).or_else(|| leading_name(body)) {
				segment.roles.insert_token(Role::Passer, passer);
			}
			segment.yards = stated_yards(body);
			add_tacklers(segment);
		}
		PlayAction::Spike => {
			if let Some(passer) = leading_name(body) {
				segment.roles.insert_token(Role::Passer, passer);
			}
			action.pass_result = Some(PassResult::Incomplete);
			segment.yards = Some(0);
		}
		PlayAction::Kickoff | PlayAction::Punt => {
			if let Some(kicker) = leading_name(body) {
				segment.roles.insert_token(Role::Kicker, kicker);
			}
			segment.yards = marker_yards(body);
			action.kick_result = kick_outcome(segment, body);
		}
		PlayAction::FieldGoal | PlayAction::ExtraPoint => {
			if let Some(kicker) = leading_name(body) {
				segment.roles.insert_token(Role::Kicker, kicker);
			}
			segment.yards = capture(&FIELD_GOAL_DISTANCE, body).and_then(|value| value.parse().ok());
			action.kick_result = KICK_RESULT.captures(body).and_then(|caps| {
				[KickResult::NoGood, KickResult::Good, KickResult::Blocked, KickResult::Aborted]
					.into_iter()
					.enumerate()
					.find_map(|(group, result)| caps.get(group + 1).map(|_| result))
			});
		}
		PlayAction::TwoPointConversion => {
			let attempt = CONVERSION_HEADER.replace(body, "");
			if let Some(passer) = capture(&PASSER, &attempt) {
				segment.roles.insert_token(Role::Passer, passer);
				if let Some(receiver) = capture(&TARGET, &attempt) {
					segment.roles.insert_token(Role::Receiver, receiver);
				}
			} else if let Some(rusher) = NAME_REGEX.find(&attempt) {
				segment.roles.insert_token(Role::Rusher, rusher.as_str());
			}
			action.conversion_succeeded = capture(&CONVERSION_RESULT, body).map(|result| result.eq_ignore_ascii_case("succeeds"));
		}
	}
	action
}

fn kick_outcome(segment: &mut Segment, body: &str) -> Option<KickResult> {
	if let Some(returner) = capture(&FAIR_CATCH, body) {
		segment.roles.insert_token(Role::Returner, returner);
		return Some(KickResult::FairCatch);
	}
	if PUNT_BLOCKED.is_match(body) {
		return Some(KickResult::Blocked);
	}
	if DOWNED.is_match(body) {
		return Some(KickResult::Downed);
	}
	OUT_OF_BOUNDS.is_match(body).then_some(KickResult::OutOfBounds)
}

fn extract_penalty(segment: &mut Segment, body: &str) -> Penalty {
	let mut penalty = Penalty::default();
	let Some(caps) = PENALTY_ON.captures(body) else {
		return penalty;
	};

	if let Some(team) = caps.get(1).or_else(|| caps.get(3)) {
		segment.roles.insert_token(Role::PenalizedTeam, team.as_str());
		penalty.team = segment.roles.get(Role::PenalizedTeam).cloned();
	}
	if let Some(player) = caps.get(2) {
		segment.roles.insert_token(Role::PenalizedPlayer, player.as_str());
		penalty.player = segment.roles.get(Role::PenalizedPlayer).cloned();
	}

	let rest = &body[caps.get(0).map_or(0, |m| m.end())..];
	let stop = PENALTY_STOP.find(rest).map_or(rest.len(), |m| m.start());
	penalty.description = rest[..stop].trim().trim_matches(',').trim().to_string();
	penalty.penalty_type = PenaltyType::from_str(&penalty.description).ok();
	penalty.yards = capture(&PENALTY_YARDS, rest).and_then(|value| value.parse().ok());

	let lowercase = rest.to_lowercase();
	penalty.status = match lowercase {
		s if s.contains("declined") => PenaltyStatus::Declined,
		s if s.contains("offsetting") => PenaltyStatus::Offsetting,
		s if s.contains("superseded") => PenaltyStatus::Superseded,
		_ => PenaltyStatus::Accepted,
	};
	penalty.enforced_at = capture(&ENFORCED_AT, rest).and_then(|spot| spot.parse().ok());
	penalty.between_downs = BETWEEN_DOWNS.is_match(rest);
	penalty.no_play = NO_PLAY.is_match(rest);

	segment.yards = penalty.yards;
	penalty
}

fn extract_turnover(segment: &mut Segment, body: &str, mut turnover: Turnover) -> Turnover {
	add_common(segment, body);

	if let Some(interceptor) = capture(&INTERCEPTED_BY, body) {
		segment.roles.insert_token(Role::Interceptor, interceptor);
		turnover.possession_changed = Some(true);
	}

	if let Some(fumbler) = capture(&FUMBLER, body) {
		segment.roles.insert_token(Role::Fumbler, fumbler);
	}

	let forced_by = FUMBLE_KEYWORD.find(&segment.text).map(|keyword| keyword.end());
	let mut forcers = Vec::new();
	let mut tacklers = Vec::new();
	for aside in &segment.asides {
		let offset = aside.span.start - segment.span.start;
		let right_after_fumble = forced_by.is_some_and(|end| segment.text.get(end..offset).is_some_and(|gap| gap.trim().is_empty()));
		if right_after_fumble {
			if let Some(cause) = fumble_cause(&aside.text) {
				turnover.fumble_cause = Some(cause);
				continue;
			}
		}
		let Some(names) = name_list(&aside.text) else {
			continue;
		};
		if right_after_fumble {
			forcers.extend(names.into_iter().map(str::to_string));
		} else {
			tacklers.extend(names.into_iter().map(str::to_string));
		}
	}
	for name in forcers {
		segment.roles.insert_token(Role::ForcedBy, &name);
	}
	for name in tacklers {
		segment.roles.insert_token(Role::Tackler, &name);
	}

	if let Some(caps) = RECOVERED_BY.captures(body) {
		if let Some(team) = caps.get(1) {
			segment.roles.insert_token(Role::RecoveringTeam, team.as_str());
		}
		if let Some(player) = caps.get(2) {
			segment.roles.insert_token(Role::Recoverer, player.as_str());
		}
		turnover.recovered_at = caps.get(3).and_then(|spot| spot.as_str().parse().ok());
	}

	let recovered_own = match (segment.roles.get(Role::Fumbler), segment.roles.get(Role::Recoverer)) {
		(Some(fumbler), Some(recoverer)) => fumbler == recoverer,
		_ => false,
	};
	if recovered_own || RECOVERS_OWN.is_match(body) || (turnover.recovered_at.is_none() && OUT_OF_BOUNDS.is_match(body)) {
		turnover.possession_changed = Some(false);
	}

	turnover.return_yards = capture(&RETURNED, body).and_then(|value| value.parse().ok()).or_else(|| stated_yards(body));
	segment.yards = turnover.return_yards;
	turnover
}

fn extract_lateral(segment: &mut Segment, body: &str) {
	add_common(segment, body);
	if let Some(receiver) = capture(&LATERAL_TO, body) {
		segment.roles.insert_token(Role::LateralReceiver, receiver);
	}
	segment.yards = stated_yards(body);
	add_tacklers(segment);
}

fn fumble_cause(aside: &str) -> Option<FumbleCause> {
	match aside.trim().to_lowercase().as_str() {
		"aborted" => Some(FumbleCause::AbortedSnap),
		"team" => Some(FumbleCause::Team),
		_ => None,
	}
}

/// `J.Doe reported in as eligible`, `J.Doe and K.Roe reported in as eligible`.
fn extract_report_in(segment: &mut Segment, body: &str) {
	let end = REPORTED_ELIGIBLE.find(body).map_or(body.len(), |m| m.start());
	let names: Vec<String> = NAME_REGEX.find_iter(&body[..end]).map(|m| m.as_str().to_string()).collect();
	for name in names {
		segment.roles.insert_token(Role::Eligible, &name);
	}
}

fn extract_challenge(segment: &mut Segment, body: &str) -> Challenge {
	if let Some(caps) = CHALLENGED_BY.captures(body) {
		if let Some(team) = caps.get(1).or_else(|| caps.get(2)) {
			segment.roles.insert_token(Role::Challenger, team.as_str());
		}
	}
	let lowercase = body.to_lowercase();
	let ruling = match lowercase {
		s if s.contains("reversed") => Some(ChallengeRuling::Reversed),
		s if s.contains("upheld") => Some(ChallengeRuling::Upheld),
		s if s.contains("stands") || s.contains("confirmed") => Some(ChallengeRuling::Stands),
		_ => None,
	};
	Challenge { ruling }
}
