use crate::error::PlayTypeError;
use serde::Serialize;
use std::str::FromStr;

/// What the primary action of a play was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlayAction {
	Kickoff,
	Run,
	Pass,
	Sack,
	Kneel,
	Spike,
	Punt,
	FieldGoal,
	ExtraPoint,
	TwoPointConversion,
}

const RUN_MARKERS: [&str; 12] = [
	"rushed",
	"rushes",
	"scrambles",
	"up the middle",
	"left end",
	"right end",
	"left tackle",
	"right tackle",
	"left guard",
	"right guard",
	"middle for",
	"runs",
];

impl PlayAction {
	pub const fn is_kick(self) -> bool {
		matches!(self, Self::Kickoff | Self::Punt)
	}
}

impl FromStr for PlayAction {
	type Err = PlayTypeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let lowercase = s.to_lowercase();

		match lowercase {
			s if s.contains("two-point conversion") || s.contains("two point conversion") => Ok(Self::TwoPointConversion),
			s if s.contains("spiked") || s.contains("spikes the ball") => Ok(Self::Spike),
			s if s.contains("kneels") || s.contains("kneel down") => Ok(Self::Kneel),
			s if s.contains("sacked") => Ok(Self::Sack),
			s if s.contains("field goal") => Ok(Self::FieldGoal),
			s if s.contains("extra point") || s.contains("pat attempt") => Ok(Self::ExtraPoint),
			s if s.contains("punts") || s.contains("punt is") => Ok(Self::Punt),
			s if s.contains("kicks") || s.contains("onside") => Ok(Self::Kickoff),
			s if s.contains(" pass") => Ok(Self::Pass),
			s if RUN_MARKERS.iter().any(|marker| s.contains(marker)) => Ok(Self::Run),
			_ => Err(PlayTypeError::unknown_play_type(s)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_play_action_from_str() {
		let test_cases = vec![
			("J.Tucker kicks 65 yards from BAL 35 to end zone, Touchback.", PlayAction::Kickoff),
			("L.Jackson pass short middle to M.Andrews to BAL 45 for 10 yards", PlayAction::Pass),
			("J.Dobbins right end to BAL 40 for 5 yards", PlayAction::Run),
			("S.Koch punts 45 yards to PIT 15, Center-N.Moore", PlayAction::Punt),
			("J.Tucker extra point is GOOD, Center-N.Moore, Holder-S.Koch", PlayAction::ExtraPoint),
			("J.Tucker 47 yard field goal is No Good, Wide Right", PlayAction::FieldGoal),
			("L.Jackson scrambles left end to BAL 48 for 3 yards", PlayAction::Run),
			("L.Jackson sacked at BAL 18 for -7 yards (T.Watt)", PlayAction::Sack),
			("T.Brady spiked the ball to stop the clock", PlayAction::Spike),
			("P.Mahomes kneels to KC 34 for -1 yards", PlayAction::Kneel),
			("TWO-POINT CONVERSION ATTEMPT. D.Henry rushes up the middle. ATTEMPT SUCCEEDS.", PlayAction::TwoPointConversion),
			("J.Smith rushed for 5 yards", PlayAction::Run),
		];

		for (input, expected) in test_cases {
			assert_eq!(PlayAction::from_str(input), Ok(expected), "Failed for input: {}", input);
		}
	}

	#[test]
	fn test_play_action_errors() {
		let error_cases = vec!["Coin toss won by BAL", "End of the first quarter", "Two-Minute Warning"];

		for input in error_cases {
			assert!(PlayAction::from_str(input).is_err(), "Expected error for input: {}", input);
		}
	}

	#[test]
	fn test_kick_kinds() {
		assert!(PlayAction::Punt.is_kick());
		assert!(!PlayAction::ExtraPoint.is_kick());
		assert!(!PlayAction::Run.is_kick());
	}
}
