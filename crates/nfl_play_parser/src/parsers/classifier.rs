use crate::parsers::patterns::{END_SPOT, LEADING_NAME, REPORTED_ELIGIBLE};
use crate::parsers::segmenter::RawFragment;
use crate::schema::{Action, Challenge, Penalty, PlayAction, Roles, Segment, SegmentKind, Turnover, TurnoverType, Yards};
use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;
use tracing::debug;

static CHALLENGE_REGEX: Lazy<Regex> = Lazy::new(|| {
	Regex::new(
		r"(?i)\bchalleng(?:e|ed|es)\b|\breplay (?:official|assistant)\b|\breview(?:ed)?\b|\bplay was (?:reversed|upheld)\b|\bruling\b.*\b(?:stands|confirmed)\b|(?-i:\bREVERSED\b)",
	)
	.unwrap()
});

static PENALTY_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(?:PENALTY|Penalty) on\b").unwrap());

static TURNOVER_REGEX: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"(?i)\b(?:intercepted|fumbles|fumbled|muffs|muffed|recovered by|and recovers)\b").unwrap());

static LATERAL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\blaterals?\b").unwrap());

struct Rule {
	name: &'static str,
	matches: fn(&str) -> bool,
	build: fn(&str) -> SegmentKind,
}

/// Highest precedence first; the first rule whose predicate holds wins.
static RULES: [Rule; 6] = [
	Rule {
		name: "challenge",
		matches: |body| CHALLENGE_REGEX.is_match(body),
		build: |_| SegmentKind::Challenge(Challenge::default()),
	},
	Rule {
		name: "penalty",
		matches: |body| PENALTY_REGEX.is_match(body),
		build: |_| SegmentKind::Penalty(Penalty::default()),
	},
	Rule {
		name: "turnover",
		matches: |body| TURNOVER_REGEX.is_match(body),
		build: |body| SegmentKind::TurnoverReturn(Turnover::new(turnover_type(body))),
	},
	Rule {
		name: "lateral",
		matches: |body| LATERAL_REGEX.is_match(body),
		build: |_| SegmentKind::Lateral,
	},
	Rule {
		name: "report_in",
		matches: |body| REPORTED_ELIGIBLE.is_match(body),
		build: |_| SegmentKind::ReportIn,
	},
	Rule {
		name: "primary_action",
		matches: |body| primary_action(body).is_some(),
		build: |body| primary_action(body).map_or(SegmentKind::Unclassified, |action| SegmentKind::PrimaryAction(Action::new(action))),
	},
];

fn turnover_type(body: &str) -> TurnoverType {
	let lowercase = body.to_lowercase();
	match lowercase {
		s if s.contains("intercepted") => TurnoverType::Interception,
		s if s.contains("muff") => TurnoverType::Muff,
		s if s.contains("fumble") => TurnoverType::Fumble,
		_ => TurnoverType::Recovery,
	}
}

/// A verb-less clause such as `D.Lee to DEN 40 for no gain` is a run by the
/// named player.
fn primary_action(body: &str) -> Option<PlayAction> {
	PlayAction::from_str(body).ok().or_else(|| {
		let carried = LEADING_NAME.is_match(body) && (Yards::from_str(body).is_ok() || END_SPOT.is_match(body));
		carried.then_some(PlayAction::Run)
	})
}

/// Tags a fragment with its semantic kind. Roles and yardage are filled in
/// by the extractor.
pub fn classify(fragment: RawFragment<'_>) -> Segment {
	let kind = RULES.iter().find(|rule| (rule.matches)(&fragment.body)).map_or_else(
		|| {
			debug!(index = fragment.index, text = fragment.text, "unclassified fragment");
			SegmentKind::Unclassified
		},
		|rule| {
			debug!(index = fragment.index, rule = rule.name, "classified fragment");
			(rule.build)(&fragment.body)
		},
	);

	Segment {
		index: fragment.index,
		text: fragment.text.to_string(),
		body: fragment.body,
		span: fragment.span,
		asides: fragment.asides,
		continues_sentence: fragment.continues_sentence,
		kind,
		roles: Roles::default(),
		yards: None,
		total_yards: None,
		end_yard_line: None,
		end_zone: None,
	}
}
