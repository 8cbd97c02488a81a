use crate::error::ScoringEventError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::str::FromStr;

static END_ZONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(touchdown|safety|touchback)\b").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Points {
	One,
	Two,
	Three,
	Six,
}

impl Points {
	pub const fn value(self) -> u8 {
		match self {
			Self::One => 1,
			Self::Two => 2,
			Self::Three => 3,
			Self::Six => 6,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoringEventType {
	Touchdown,
	FieldGoal,
	ExtraPoint,
	TwoPointConversion,
	Safety,
	DefensiveTouchdown,
}

impl ScoringEventType {
	pub const fn points(self) -> Points {
		match self {
			Self::Touchdown | Self::DefensiveTouchdown => Points::Six,
			Self::FieldGoal => Points::Three,
			Self::ExtraPoint => Points::One,
			Self::TwoPointConversion | Self::Safety => Points::Two,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoringEvent {
	pub event_type: ScoringEventType,
	pub points: Points,
}

impl From<ScoringEventType> for ScoringEvent {
	fn from(event_type: ScoringEventType) -> Self {
		Self {
			event_type,
			points: event_type.points(),
		}
	}
}

/// How a segment ended when the ball finished in or behind an end zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EndZoneResult {
	Touchdown,
	Safety,
	Touchback,
}

impl FromStr for EndZoneResult {
	type Err = ScoringEventError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let caps = END_ZONE_REGEX
			.captures(s)
			.ok_or_else(|| ScoringEventError::UnknownScoringEventType { input: s.to_string() })?;
		match caps[1].to_lowercase().as_str() {
			"touchdown" => Ok(Self::Touchdown),
			"safety" => Ok(Self::Safety),
			_ => Ok(Self::Touchback),
		}
	}
}
