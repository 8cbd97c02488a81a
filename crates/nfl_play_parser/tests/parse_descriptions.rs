use nfl_play_parser::schema::{PenaltyStatus, Role, ScoringEventType};
use nfl_play_parser::{parse, parse_with_policy, LoneOffsetting, OutcomeKind, ParseError, ResolverPolicy, SegmentKind};
use pretty_assertions::assert_eq;

const PLAYS: [&str; 10] = [
	"J.Smith pass complete to T.Jones for 12 yards",
	"J.Smith rushed for 5 yards. PENALTY on DEN-T.Brown, Holding, 10 yards, offsetting.",
	"J.Smith pass intercepted by D.Lee, returned 20 yards",
	"(14:32 - 1st) (Shotgun) K.Cousins pass deep right to K.Pitts to TB 36 for 32 yards (Z.McCollum).",
	"(2:00 - 4th) J.Tucker kicks 65 yards from BAL 35 to end zone, Touchback.",
	"J.Smith up the middle to NYG 40 for 5 yards, FUMBLES (D.Lee), RECOVERED by DEN-K.Hill at NYG 41. K.Hill to NYG 30 for 11 yards (J.Doe).",
	"DEN challenged the pass completion ruling, and the play was REVERSED. J.Smith pass incomplete short left to T.Jones.",
	"TWO-POINT CONVERSION ATTEMPT. D.Henry rushes up the middle. ATTEMPT SUCCEEDS.",
	"Timeout #1 by DEN at 02:00.",
	"(:35) J.Tucker extra point is GOOD, Center-N.Moore, Holder-S.Koch.",
];

#[test]
fn test_completed_pass() {
	let play = parse("J.Smith pass complete to T.Jones for 12 yards").unwrap();
	assert_eq!(play.segments.len(), 1);
	let pass = &play.segments[0];
	assert_eq!(pass.kind.name(), "PRIMARY_ACTION");
	assert_eq!(pass.roles.get(Role::Passer).map(|p| p.as_str()), Some("J.Smith"));
	assert_eq!(pass.roles.get(Role::Receiver).map(|p| p.as_str()), Some("T.Jones"));
	assert_eq!(pass.yards, Some(12));
	assert_eq!(play.outcome.kind, OutcomeKind::Completion);
	assert_eq!(play.outcome.net_yards, 12);
}

#[test]
fn test_lone_offsetting_penalty_applies_as_standard() {
	let play = parse("J.Smith rushed for 5 yards. PENALTY on DEN-T.Brown, Holding, 10 yards, offsetting.").unwrap();
	assert_eq!(play.segments[0].yards, Some(5));
	assert_eq!(play.segments[1].penalty_status(), Some(PenaltyStatus::Offsetting));
	assert_eq!(play.outcome.kind, OutcomeKind::PenaltyAdjusted);
	assert_eq!(play.outcome.net_yards, -5);
	assert!(!play.outcome.offsetting);
}

#[test]
fn test_lone_offsetting_penalty_with_override() {
	let policy = ResolverPolicy {
		lone_offsetting: LoneOffsetting::TreatAsOffsetting,
		..ResolverPolicy::default()
	};
	let play = parse_with_policy("J.Smith rushed for 5 yards. PENALTY on DEN-T.Brown, Holding, 10 yards, offsetting.", &policy).unwrap();
	assert_eq!(play.outcome.net_yards, 5);
	assert!(play.outcome.offsetting);
	assert!(play.outcome.replay_down);
}

#[test]
fn test_empty_description() {
	assert_eq!(parse(""), Err(ParseError::EmptyInput));
}

#[test]
fn test_unbalanced_parentheses() {
	assert!(matches!(parse("J.Smith to DEN 30 (T.Brown"), Err(ParseError::MalformedInput { offset: 18, .. })));
}

#[test]
fn test_interception_return() {
	let play = parse("J.Smith pass intercepted by D.Lee, returned 20 yards").unwrap();
	let kinds: Vec<&str> = play.segments.iter().map(|s| s.kind.name()).collect();
	assert_eq!(kinds, vec!["PRIMARY_ACTION", "TURNOVER_RETURN"]);
	assert_eq!(play.outcome.kind, OutcomeKind::Turnover);
	assert_eq!(play.outcome.net_yards, 20);
	assert_eq!(play.outcome.contributing, vec![0, 1]);
}

#[test]
fn test_offsetting_pair_reverts_to_base() {
	let play = parse(
		"(8:12 - 2nd) B.Robinson right end to ATL 40 for 7 yards (T.Smith). PENALTY on ATL-D.Mooney, Offensive Holding, 10 yards, offsetting. \
		 PENALTY on TB-J.Dean, Defensive Holding, 5 yards, offsetting.",
	)
	.unwrap();
	assert_eq!(play.outcome.kind, OutcomeKind::Run);
	assert_eq!(play.outcome.net_yards, play.outcome.base_yards);
	assert_eq!(play.outcome.net_yards, 7);
	assert!(play.outcome.offsetting);
	assert!(play.outcome.replay_down);
}

#[test]
fn test_nothing_recognized() {
	let play = parse("Two-Minute Warning. End of the first quarter.").unwrap();
	assert!(!play.segments.is_empty());
	assert!(play.segments.iter().all(|s| s.kind == SegmentKind::Unclassified));
	assert_eq!(play.outcome.kind, OutcomeKind::NoPlay);
	assert!(play.is_low_confidence());
}

#[test]
fn test_parse_is_idempotent() {
	for description in PLAYS {
		assert_eq!(parse(description), parse(description), "Failed for input: {}", description);
	}
}

#[test]
fn test_segments_follow_text_order() {
	for description in PLAYS {
		let play = parse(description).unwrap();
		for (position, segment) in play.segments.iter().enumerate() {
			assert_eq!(segment.index, position, "Failed for input: {}", description);
			assert_eq!(&description[segment.span.clone()], segment.text, "Failed for input: {}", description);
		}
		assert!(
			play.segments.windows(2).all(|pair| pair[0].span.end <= pair[1].span.start),
			"Failed for input: {}",
			description
		);
	}
}

#[test]
fn test_contributing_segments_exist() {
	for description in PLAYS {
		let play = parse(description).unwrap();
		assert_eq!(play.contributing_segments().count(), play.outcome.contributing.len(), "Failed for input: {}", description);
	}
}

#[test]
fn test_leading_annotations() {
	let play = parse(PLAYS[3]).unwrap();
	assert_eq!(play.clock.map(|c| c.seconds_left()), Some(872));
	assert_eq!(play.formation, vec!["Shotgun"]);

	let play = parse(PLAYS[9]).unwrap();
	assert_eq!(play.clock.map(|c| c.seconds_left()), Some(35));
	assert_eq!(play.outcome.score.map(|s| s.event_type), Some(ScoringEventType::ExtraPoint));
}

#[test]
fn test_fumble_return() {
	let play = parse(PLAYS[5]).unwrap();
	assert_eq!(play.outcome.kind, OutcomeKind::Turnover);
	assert_eq!(play.outcome.base_yards, 5);
	assert_eq!(play.outcome.return_yards, Some(11));
	assert_eq!(play.outcome.net_yards, 16);
	let fumble = &play.segments[1];
	assert_eq!(fumble.roles.get(Role::Fumbler).map(|p| p.as_str()), Some("J.Smith"));
	assert_eq!(fumble.roles.get(Role::Recoverer).map(|p| p.as_str()), Some("K.Hill"));
}

#[test]
fn test_csv_record_width() {
	let play = parse(PLAYS[3]).unwrap();
	let record = play.segments[0].csv_record();
	assert_eq!(record.len(), nfl_play_parser::CSV_ATTRIBUTES.len());
	assert_eq!(record[0], "PRIMARY_ACTION");
	assert_eq!(record[2], "K.Cousins");
	assert_eq!(record[3], "32");
	assert_eq!(record[5], "K.Pitts");
	assert_eq!(record[7], "Z.McCollum");
	assert_eq!(record[8], "NA");
}

#[test]
fn test_serializes_to_json() {
	let play = parse(PLAYS[0]).unwrap();
	let json = serde_json::to_value(&play).unwrap();
	assert_eq!(json["outcome"]["net_yards"], 12);
	assert_eq!(json["segments"][0]["roles"][0][0], "passer");
}

#[test]
fn test_three_offsetting_penalties_cancel() {
	let play = parse(
		"B.Robinson right end to ATL 40 for 7 yards (T.Smith). PENALTY on ATL-D.Mooney, Offensive Holding, 10 yards, offsetting. \
		 PENALTY on TB-J.Dean, Defensive Holding, 5 yards, offsetting. PENALTY on TB-V.Vea, Unnecessary Roughness, 15 yards, offsetting.",
	)
	.unwrap();
	assert_eq!(play.outcome.kind, OutcomeKind::Run);
	assert_eq!(play.outcome.net_yards, 7);
	assert_eq!(play.outcome.penalty_yards, 0);
	assert!(play.outcome.offsetting);
	assert_eq!(play.outcome.superseded, vec![1, 2, 3]);
	assert!(play.segments[1..].iter().all(|s| s.penalty_status() == Some(PenaltyStatus::Offsetting)));
}

#[test]
fn test_reversed_interception_return_is_void() {
	let play = parse(
		"J.Smith pass intended for T.Jones INTERCEPTED by D.Lee at DEN 40. D.Lee to NYG 30 for 30 yards (J.Smith). \
		 Play Challenged by NYG and REVERSED.",
	)
	.unwrap();
	assert_eq!(play.outcome.kind, OutcomeKind::Incomplete);
	assert_eq!(play.outcome.net_yards, 0);
	assert_eq!(play.outcome.contributing, vec![0, 3]);
	assert_eq!(play.outcome.superseded, vec![1, 2]);
}

#[test]
fn test_derived_total_policy() {
	let description = "J.Smith pass short right to T.Jones to DEN 40 for 10 yards. T.Jones lateral to R.Brown to DEN 45 for 5 yards, a total of 16 yards.";
	let policy = ResolverPolicy {
		prefer_stated_total: false,
		..ResolverPolicy::default()
	};
	assert_eq!(parse(description).unwrap().outcome.net_yards, 16);
	assert_eq!(parse_with_policy(description, &policy).unwrap().outcome.net_yards, 15);
}

#[test]
fn test_placeholder_rows() {
	for description in ["*** play under review ***", "<td align=center>"] {
		let play = parse(description).unwrap();
		assert!(play.placeholder, "Failed for input: {}", description);
		assert_eq!(play.outcome.kind, OutcomeKind::NoPlay, "Failed for input: {}", description);
		assert!(play.segments.is_empty(), "Failed for input: {}", description);
	}
}

#[test]
fn test_report_in_is_recognized() {
	let play = parse("J.Doe reported in as eligible. J.Smith pass short right to J.Doe to DEN 40 for 10 yards.").unwrap();
	assert_eq!(play.segments[0].kind, SegmentKind::ReportIn);
	assert_eq!(play.segments[0].roles.get(Role::Eligible).map(|p| p.as_str()), Some("J.Doe"));
	assert!(!play.is_low_confidence());
	assert_eq!(play.outcome.kind, OutcomeKind::Completion);
	assert_eq!(play.outcome.contributing, vec![1]);
}
