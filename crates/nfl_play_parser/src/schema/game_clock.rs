use crate::error::GameClockError;
use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Quarter {
	First,
	Second,
	Third,
	Fourth,
	OT,
}

/// Struct to represent minutes (valid range: 0-15)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Minutes(u8);

impl Minutes {
	pub const fn new(value: u8) -> Result<Self, GameClockError> {
		if value > 15 {
			Err(GameClockError::invalid_minutes_error(value))
		} else {
			Ok(Self(value))
		}
	}

	pub const fn value(self) -> u8 {
		self.0
	}
}

impl FromStr for Minutes {
	type Err = GameClockError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		// `(:35)` leaves the minutes empty
		if s.is_empty() {
			return Self::new(0);
		}
		let value = s.parse::<u8>()?;
		Self::new(value)
	}
}

/// Struct to represent seconds (valid range: 0-59)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Seconds(u8);

impl Seconds {
	pub const fn new(value: u8) -> Result<Self, GameClockError> {
		if value >= 60 {
			Err(GameClockError::invalid_seconds_error(value))
		} else {
			Ok(Self(value))
		}
	}

	pub const fn value(self) -> u8 {
		self.0
	}
}

impl FromStr for Seconds {
	type Err = GameClockError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if s.len() != 2 {
			return Err(GameClockError::invalid_format_error(s));
		}
		let value = s.parse::<u8>()?;
		Self::new(value)
	}
}

/// Time left in the quarter as printed in the leading annotation of a
/// description. Older descriptions omit the quarter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameClock {
	pub minutes: Minutes,
	pub seconds: Seconds,
	pub quarter: Option<Quarter>,
}

impl GameClock {
	pub const fn new(minutes: Minutes, seconds: Seconds, quarter: Option<Quarter>) -> Self {
		Self { minutes, seconds, quarter }
	}

	pub fn seconds_left(&self) -> u32 {
		u32::from(self.minutes.value()) * 60 + u32::from(self.seconds.value())
	}
}

impl FromStr for GameClock {
	type Err = GameClockError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let inner = s.trim().trim_start_matches('(').trim_end_matches(')').trim();

		let (time_str, quarter) = match inner.split_once(" - ") {
			Some((time_str, quarter_str)) => (time_str.trim(), Some(quarter_str.trim().parse::<Quarter>()?)),
			None => (inner, None),
		};

		let (minutes_str, seconds_str) = time_str.split_once(':').ok_or_else(|| GameClockError::invalid_format_error(s))?;

		let minutes = minutes_str.parse::<Minutes>()?;
		let seconds = seconds_str.parse::<Seconds>()?;

		Ok(Self::new(minutes, seconds, quarter))
	}
}

impl FromStr for Quarter {
	type Err = GameClockError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"1st" => Ok(Self::First),
			"2nd" => Ok(Self::Second),
			"3rd" => Ok(Self::Third),
			"4th" => Ok(Self::Fourth),
			"OT" => Ok(Self::OT),
			_ => Err(GameClockError::invalid_quarter_error(s)),
		}
	}
}
