use crate::config::ResolverPolicy;
use crate::error::ParseError;
use crate::parsers::{classify, extract_all, leading_annotations, resolve, resolve_with_policy, segment};
use crate::schema::{ParsedPlay, ResolvedOutcome, Segment};
use std::fmt;
use tracing::{debug, warn};

/// Stand-ins some feeds use where the description is missing.
const PLACEHOLDERS: [&str; 2] = ["*** play under review ***", "align=center"];

pub fn is_placeholder(description: &str) -> bool {
	let lowercase = description.to_lowercase();
	PLACEHOLDERS.iter().any(|marker| lowercase.contains(marker))
}

/// Packages the stage outputs. Fails only for a blank description.
pub fn assemble(description: &str, segments: Vec<Segment>, outcome: ResolvedOutcome) -> Result<ParsedPlay, ParseError> {
	if segments.is_empty() && description.trim().is_empty() {
		return Err(ParseError::EmptyInput);
	}
	let (clock, formation) = leading_annotations(&segments);
	Ok(ParsedPlay {
		description: description.to_string(),
		clock,
		formation,
		segments,
		outcome,
		placeholder: false,
	})
}

pub fn parse(description: &str) -> Result<ParsedPlay, ParseError> {
	parse_with_policy(description, &ResolverPolicy::default())
}

pub fn parse_with_policy(description: &str, policy: &ResolverPolicy) -> Result<ParsedPlay, ParseError> {
	if is_placeholder(description) {
		debug!(description, "placeholder instead of a play");
		let mut play = assemble(description, Vec::new(), resolve(&[]))?;
		play.placeholder = true;
		return Ok(play);
	}
	let segments = extract_all(segment(description)?.map(classify));
	let outcome = resolve_with_policy(&segments, policy);
	let play = assemble(description, segments, outcome)?;
	if play.is_low_confidence() {
		debug!(unclassified = play.unclassified().count(), description, "partially recognized play");
	}
	Ok(play)
}

/// Results of a run over many descriptions, in input order.
#[derive(Debug, Default)]
pub struct BatchReport {
	pub results: Vec<Result<ParsedPlay, ParseError>>,
	pub total: usize,
	pub ok: usize,
	pub empty: usize,
	pub malformed: usize,
	pub low_confidence: usize,
	pub placeholders: usize,
}

impl BatchReport {
	pub fn push(&mut self, result: Result<ParsedPlay, ParseError>) {
		self.total += 1;
		match &result {
			Ok(play) => {
				self.ok += 1;
				if play.placeholder {
					self.placeholders += 1;
				}
				if play.is_low_confidence() {
					self.low_confidence += 1;
				}
			}
			Err(ParseError::EmptyInput) => self.empty += 1,
			Err(ParseError::MalformedInput { .. }) => self.malformed += 1,
		}
		self.results.push(result);
	}

	/// Appends another report, keeping its results after ours.
	pub fn merge(&mut self, other: Self) {
		self.total += other.total;
		self.ok += other.ok;
		self.empty += other.empty;
		self.malformed += other.malformed;
		self.low_confidence += other.low_confidence;
		self.placeholders += other.placeholders;
		self.results.extend(other.results);
	}

	pub const fn errors(&self) -> usize {
		self.empty + self.malformed
	}
}

impl fmt::Display for BatchReport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"parsed {} descriptions: {} ok ({} low confidence, {} placeholders), {} empty, {} malformed",
			self.total, self.ok, self.low_confidence, self.placeholders, self.empty, self.malformed
		)
	}
}

pub fn parse_plays<I, S>(descriptions: I) -> BatchReport
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	parse_plays_with_policy(descriptions, &ResolverPolicy::default())
}

pub fn parse_plays_with_policy<I, S>(descriptions: I, policy: &ResolverPolicy) -> BatchReport
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	let mut report = BatchReport::default();
	for description in descriptions {
		let result = parse_with_policy(description.as_ref(), policy);
		if let Err(ParseError::MalformedInput { offset, reason }) = &result {
			warn!(offset, reason = reason.as_str(), "malformed description");
		}
		report.push(result);
	}
	report
}
