use crate::error::PenaltyTypeError;
use crate::schema::{ParticipantReference, YardLine};
use serde::Serialize;
use std::str::FromStr;

/// Controlled penalty vocabulary. Anything not in the list keeps its text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PenaltyType {
	OffensiveHolding,
	DefensiveHolding,
	Holding,
	FalseStart,
	DefensiveOffside,
	Offside,
	Encroachment,
	NeutralZoneInfraction,
	DelayOfGame,
	DefensivePassInterference,
	OffensivePassInterference,
	IllegalFormation,
	IllegalShift,
	IllegalMotion,
	IllegalBlockAboveWaist,
	IllegalUseOfHands,
	IllegalContact,
	IllegalForwardPass,
	IneligibleDownfieldPass,
	IntentionalGrounding,
	FaceMask,
	HorseCollarTackle,
	RoughingThePasser,
	RoughingTheKicker,
	RunningIntoTheKicker,
	UnnecessaryRoughness,
	UnsportsmanlikeConduct,
	Taunting,
	Tripping,
	Clipping,
	ChopBlock,
	PersonalFoul,
	TooManyMen,
	Other(String),
}

/// Which side of the ball a penalty type can only be called on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PenaltySide {
	Offense,
	Defense,
	Either,
}

const VOCABULARY: [(&str, PenaltyType); 33] = [
	("offensive holding", PenaltyType::OffensiveHolding),
	("defensive holding", PenaltyType::DefensiveHolding),
	("defensive pass interference", PenaltyType::DefensivePassInterference),
	("offensive pass interference", PenaltyType::OffensivePassInterference),
	("defensive offside", PenaltyType::DefensiveOffside),
	("neutral zone infraction", PenaltyType::NeutralZoneInfraction),
	("false start", PenaltyType::FalseStart),
	("encroachment", PenaltyType::Encroachment),
	("delay of game", PenaltyType::DelayOfGame),
	("illegal formation", PenaltyType::IllegalFormation),
	("illegal shift", PenaltyType::IllegalShift),
	("illegal motion", PenaltyType::IllegalMotion),
	("illegal block above the waist", PenaltyType::IllegalBlockAboveWaist),
	("illegal use of hands", PenaltyType::IllegalUseOfHands),
	("illegal contact", PenaltyType::IllegalContact),
	("illegal forward pass", PenaltyType::IllegalForwardPass),
	("ineligible downfield pass", PenaltyType::IneligibleDownfieldPass),
	("intentional grounding", PenaltyType::IntentionalGrounding),
	("face mask", PenaltyType::FaceMask),
	("horse collar", PenaltyType::HorseCollarTackle),
	("roughing the passer", PenaltyType::RoughingThePasser),
	("roughing the kicker", PenaltyType::RoughingTheKicker),
	("running into the kicker", PenaltyType::RunningIntoTheKicker),
	("unnecessary roughness", PenaltyType::UnnecessaryRoughness),
	("unsportsmanlike conduct", PenaltyType::UnsportsmanlikeConduct),
	("taunting", PenaltyType::Taunting),
	("tripping", PenaltyType::Tripping),
	("clipping", PenaltyType::Clipping),
	("chop block", PenaltyType::ChopBlock),
	("personal foul", PenaltyType::PersonalFoul),
	("too many men", PenaltyType::TooManyMen),
	("offside", PenaltyType::Offside),
	("holding", PenaltyType::Holding),
];

impl PenaltyType {
	pub const fn side(&self) -> PenaltySide {
		match self {
			Self::OffensiveHolding
			| Self::FalseStart
			| Self::OffensivePassInterference
			| Self::IllegalFormation
			| Self::IllegalShift
			| Self::IllegalMotion
			| Self::IllegalForwardPass
			| Self::IneligibleDownfieldPass
			| Self::IntentionalGrounding
			| Self::ChopBlock => PenaltySide::Offense,
			Self::DefensiveHolding
			| Self::DefensiveOffside
			| Self::Encroachment
			| Self::NeutralZoneInfraction
			| Self::DefensivePassInterference
			| Self::IllegalContact
			| Self::RoughingThePasser
			| Self::RoughingTheKicker
			| Self::RunningIntoTheKicker => PenaltySide::Defense,
			_ => PenaltySide::Either,
		}
	}
}

impl FromStr for PenaltyType {
	type Err = PenaltyTypeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let trimmed = s.trim().trim_matches(',').trim();
		if trimmed.is_empty() {
			return Err(PenaltyTypeError::EmptyDescription);
		}
		let lowercase = trimmed.to_lowercase().replace('-', " ");
		Ok(VOCABULARY
			.iter()
			.find(|(phrase, _)| lowercase.contains(phrase))
			.map_or_else(|| Self::Other(trimmed.to_string()), |(_, penalty_type)| penalty_type.clone()))
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PenaltyStatus {
	Accepted,
	Declined,
	Offsetting,
	Superseded,
}

/// Payload of a penalty segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Penalty {
	pub team: Option<ParticipantReference>,
	pub player: Option<ParticipantReference>,
	pub penalty_type: Option<PenaltyType>,
	pub description: String,
	pub yards: Option<i32>,
	pub status: PenaltyStatus,
	pub enforced_at: Option<YardLine>,
	pub between_downs: bool,
	pub no_play: bool,
}

impl Penalty {
	pub const fn is_offsetting(&self) -> bool {
		matches!(self.status, PenaltyStatus::Offsetting)
	}

	pub const fn is_effective(&self) -> bool {
		matches!(self.status, PenaltyStatus::Accepted | PenaltyStatus::Offsetting)
	}
}

impl Default for Penalty {
	fn default() -> Self {
		Self {
			team: None,
			player: None,
			penalty_type: None,
			description: String::new(),
			yards: None,
			status: PenaltyStatus::Accepted,
			enforced_at: None,
			between_downs: false,
			no_play: false,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_penalty_type_from_str() {
		let test_cases = vec![
			("Offensive Holding", PenaltyType::OffensiveHolding),
			("Holding", PenaltyType::Holding),
			("Defensive Pass Interference", PenaltyType::DefensivePassInterference),
			("Defensive Offside", PenaltyType::DefensiveOffside),
			("Offside on Free Kick", PenaltyType::Offside),
			("False Start", PenaltyType::FalseStart),
			("Unnecessary Roughness", PenaltyType::UnnecessaryRoughness),
			("Face Mask (15 Yards)", PenaltyType::FaceMask),
			("Illegal Block Above the Waist", PenaltyType::IllegalBlockAboveWaist),
			("Player Out of Bounds on Punt", PenaltyType::Other("Player Out of Bounds on Punt".to_string())),
		];

		for (input, expected) in test_cases {
			assert_eq!(PenaltyType::from_str(input), Ok(expected), "Failed for input: {}", input);
		}
	}

	#[test]
	fn test_empty_penalty_description() {
		assert_eq!(PenaltyType::from_str(" , "), Err(PenaltyTypeError::EmptyDescription));
	}

	#[test]
	fn test_penalty_sides() {
		assert_eq!(PenaltyType::FalseStart.side(), PenaltySide::Offense);
		assert_eq!(PenaltyType::RoughingThePasser.side(), PenaltySide::Defense);
		assert_eq!(PenaltyType::Holding.side(), PenaltySide::Either);
	}
}
