use std::num::ParseIntError;
use thiserror::Error;

/// Structural failures of a description. Everything else the parser is unsure
/// about lives in the returned data (unclassified segments, absent fields).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
	#[error("Malformed description at byte {offset}: {reason}")]
	MalformedInput { offset: usize, reason: String },

	#[error("Empty play description")]
	EmptyInput,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameClockError {
	#[error("Invalid quarter: {quarter}")]
	InvalidQuarter { quarter: String },

	#[error("Invalid minutes: {minutes}, must be between 0 and 15")]
	InvalidMinutes { minutes: u8 },

	#[error("Invalid seconds: {seconds}, must be between 0 and 59")]
	InvalidSeconds { seconds: u8 },

	#[error("Failed to parse game clock format: {0}")]
	InvalidFormat(String),

	#[error("Parse error occurred for number: {source}")]
	ParseError {
		#[from]
		source: ParseIntError,
	},
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlayTypeError {
	#[error("Unable to determine play type from: {input}")]
	UnknownPlayType { input: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PenaltyTypeError {
	#[error("Empty penalty description")]
	EmptyDescription,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TeamAbbreviationError {
	#[error("Invalid team abbreviation: {0}")]
	InvalidTeamAbbreviation(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoringEventError {
	#[error("Unable to determine scoring event type from: {input}")]
	UnknownScoringEventType { input: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum YardsError {
	#[error("Invalid yards value: {value}, must be between -110 and 110")]
	InvalidYards { value: i32 },

	#[error("Invalid yards description: {0}")]
	InvalidYardsFormat(String),

	#[error("No yards information found in the play description")]
	NoYardsInfo,

	#[error("Invalid yard line: {0}")]
	InvalidYardLine(String),
}

impl ParseError {
	pub fn unbalanced_open(offset: usize) -> Self {
		ParseError::MalformedInput {
			offset,
			reason: "unclosed parenthesis".to_string(),
		}
	}

	pub fn unbalanced_close(offset: usize) -> Self {
		ParseError::MalformedInput {
			offset,
			reason: "closing parenthesis without a matching opening one".to_string(),
		}
	}
}

impl GameClockError {
	pub fn invalid_quarter_error(quarter: &str) -> Self {
		GameClockError::InvalidQuarter { quarter: quarter.to_string() }
	}

	pub const fn invalid_minutes_error(minutes: u8) -> Self {
		GameClockError::InvalidMinutes { minutes }
	}

	pub const fn invalid_seconds_error(seconds: u8) -> Self {
		GameClockError::InvalidSeconds { seconds }
	}

	pub fn invalid_format_error(input: &str) -> Self {
		GameClockError::InvalidFormat(input.to_string())
	}
}

impl PlayTypeError {
	pub fn unknown_play_type(input: &str) -> Self {
		PlayTypeError::UnknownPlayType { input: input.to_string() }
	}
}

impl YardsError {
	pub fn invalid_yards_format(input: &str) -> Self {
		YardsError::InvalidYardsFormat(input.to_string())
	}

	pub fn invalid_yard_line(input: &str) -> Self {
		YardsError::InvalidYardLine(input.to_string())
	}
}
