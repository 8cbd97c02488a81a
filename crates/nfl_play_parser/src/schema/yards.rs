use crate::error::YardsError;
use crate::schema::TeamAbbreviation;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

static GAIN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bfor (-?\d+) yards?\b|\bfor no gain\b").unwrap());

static YARD_LINE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:([A-Z]{2,3}) (-?\d{1,2})|(50))$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum YardType {
	Gain,
	Loss,
	NoGain,
}

/// Yards gained or lost by a ball carrier, as stated by `for N yards` or
/// `for no gain`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Yards {
	pub value: u8,
	pub yard_type: YardType,
}

impl Yards {
	pub fn new(value: u8, yard_type: YardType) -> Result<Self, YardsError> {
		if value <= 110 {
			Ok(Self { value, yard_type })
		} else {
			Err(YardsError::InvalidYards { value: i32::from(value) })
		}
	}

	pub fn from_signed(value: i32) -> Result<Self, YardsError> {
		let magnitude = u8::try_from(value.unsigned_abs()).map_err(|_| YardsError::InvalidYards { value })?;
		let yard_type = match value.signum() {
			1 => YardType::Gain,
			-1 => YardType::Loss,
			_ => YardType::NoGain,
		};
		Self::new(magnitude, yard_type).map_err(|_| YardsError::InvalidYards { value })
	}

	pub fn signed(&self) -> i32 {
		match self.yard_type {
			YardType::Gain => i32::from(self.value),
			YardType::Loss => -i32::from(self.value),
			YardType::NoGain => 0,
		}
	}
}

impl FromStr for Yards {
	type Err = YardsError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let caps = GAIN_REGEX.captures(s).ok_or(YardsError::NoYardsInfo)?;
		match caps.get(1) {
			Some(yards_match) => {
				let value: i32 = yards_match.as_str().parse().map_err(|_| YardsError::invalid_yards_format(s))?;
				Self::from_signed(value)
			}
			None => Self::new(0, YardType::NoGain),
		}
	}
}

/// A spot on the field the way descriptions write it: `DEN 35`, `50`, or
/// `DEN -2` for a spot behind the goal line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum YardLine {
	Midfield,
	Side { team: String, yard: i8 },
}

impl YardLine {
	/// Normalized owner of the half the spot is in, when the code is known.
	pub fn team(&self) -> Option<TeamAbbreviation> {
		match self {
			Self::Midfield => None,
			Self::Side { team, .. } => team.parse().ok(),
		}
	}
}

impl FromStr for YardLine {
	type Err = YardsError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let caps = YARD_LINE_REGEX.captures(s.trim()).ok_or_else(|| YardsError::invalid_yard_line(s))?;
		if caps.get(3).is_some() {
			return Ok(Self::Midfield);
		}
		match (caps.get(1), caps.get(2)) {
			(Some(team), Some(yard)) => {
				let yard = yard.as_str().parse::<i8>().map_err(|_| YardsError::invalid_yard_line(s))?;
				Ok(Self::Side {
					team: team.as_str().to_string(),
					yard,
				})
			}
			_ => Err(YardsError::invalid_yard_line(s)),
		}
	}
}

impl fmt::Display for YardLine {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Midfield => write!(f, "50"),
			Self::Side { team, yard } => write!(f, "{team} {yard}"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_yards_parsing() {
		assert_eq!(
			"(15:00 - 1st) (Shotgun) B.Robinson right tackle to ATL 32 for 2 yards (T.Smith, L.David)."
				.parse::<Yards>()
				.unwrap(),
			Yards {
				value: 2,
				yard_type: YardType::Gain
			}
		);
		assert_eq!(
			"(12:39 - 1st) (Shotgun) B.Robinson right end to TB 18 for no gain (T.Smith).".parse::<Yards>().unwrap(),
			Yards {
				value: 0,
				yard_type: YardType::NoGain
			}
		);
		assert_eq!(
			"(11:05 - 2nd) R.White right end to ATL 23 for -1 yards (K.Elliss, Z.Harrison).".parse::<Yards>().unwrap(),
			Yards {
				value: 1,
				yard_type: YardType::Loss
			}
		);
		assert_eq!("D.Lee for 1 yard".parse::<Yards>().unwrap().signed(), 1);
	}

	#[test]
	fn test_no_yards_info() {
		assert_eq!("B.Mayfield pass incomplete short left to C.Godwin.".parse::<Yards>().unwrap_err(), YardsError::NoYardsInfo);
	}

	#[test]
	fn test_yards_range() {
		let test_cases = vec![
			(110, Ok(110)),
			(-110, Ok(-110)),
			(0, Ok(0)),
			(111, Err(YardsError::InvalidYards { value: 111 })),
			(-111, Err(YardsError::InvalidYards { value: -111 })),
			(300, Err(YardsError::InvalidYards { value: 300 })),
		];

		for (input, expected) in test_cases {
			assert_eq!(Yards::from_signed(input).map(|yards| yards.signed()), expected, "Failed for input: {}", input);
		}
		assert_eq!(
			YardsError::InvalidYards { value: 111 }.to_string(),
			"Invalid yards value: 111, must be between -110 and 110"
		);
	}

	#[test]
	fn test_yard_line_parsing() {
		let test_cases = vec![
			(
				"DEN 35",
				Ok(YardLine::Side {
					team: "DEN".to_string(),
					yard: 35,
				}),
			),
			(
				"NE -2",
				Ok(YardLine::Side {
					team: "NE".to_string(),
					yard: -2,
				}),
			),
			("50", Ok(YardLine::Midfield)),
			("end zone", Err(YardsError::invalid_yard_line("end zone"))),
		];

		for (input, expected) in test_cases {
			assert_eq!(input.parse::<YardLine>(), expected, "Failed for input: {}", input);
		}
	}

	#[test]
	fn test_yard_line_team_alias() {
		let spot: YardLine = "BLT 20".parse().unwrap();
		assert_eq!(spot.team(), Some(TeamAbbreviation::BAL));
		assert_eq!(spot.to_string(), "BLT 20");
	}
}
