//! Splits a description into clause-like fragments.
//!
//! Sentences end at a period followed by whitespace (or the end of the text)
//! outside of parentheses, unless the period closes a name initial such as
//! `J.` or `St.`. A handful of keywords start a new fragment even in the
//! middle of a sentence. Parentheticals stay attached to the fragment they
//! appear in as [`Aside`]s.

use crate::error::ParseError;
use crate::parsers::patterns::BARE_NAME;
use crate::schema::Aside;
use once_cell::sync::Lazy;
use regex::Regex;
use std::iter::FusedIterator;
use std::ops::Range;
use tracing::trace;

/// Always start a fragment, whatever precedes them.
const PENALTY_MARKERS: [&str; 2] = ["PENALTY on", "Penalty on"];

/// Start a fragment when the clause before them says more than a name.
const CLAUSE_MARKERS: [&str; 11] = [
	"INTERCEPTED",
	"intercepted",
	"FUMBLES",
	"fumbles",
	"MUFFS",
	"muffs",
	"Lateral",
	"lateral",
	"laterals",
	"RECOVERED by",
	"recovered by",
];

/// End a review clause; whatever follows restates the play.
const RULINGS: [&str; 8] = [
	"REVERSED", "Reversed", "reversed", "UPHELD", "Upheld", "upheld", "stands", "confirmed",
];

const TURNOVER_WORDS: [&str; 4] = ["intercepted", "fumbles", "muffs", "fumbled"];

static CONVERSION_START: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^TWO[- ]POINT CONVERSION ATTEMPT").unwrap());

static CONVERSION_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bATTEMPT (?:SUCCEEDS|FAILS)\b").unwrap());

static REVIEW_CONTEXT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)challeng|review|replay").unwrap());

/// One clause of a description, borrowed from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFragment<'a> {
	pub index: usize,
	pub text: &'a str,
	pub span: Range<usize>,
	pub asides: Vec<Aside>,
	/// Text with the asides removed and whitespace collapsed.
	pub body: String,
	pub continues_sentence: bool,
}

impl<'a> RawFragment<'a> {
	fn new(description: &'a str, index: usize, span: Range<usize>, continues_sentence: bool) -> Self {
		let text = &description[span.clone()];
		let asides = collect_asides(text, span.start);
		let body = strip_asides(text);
		Self {
			index,
			text,
			span,
			asides,
			body,
			continues_sentence,
		}
	}
}

/// Lazy fragment sequence over one description.
#[derive(Debug, Clone)]
pub struct Fragments<'a> {
	text: &'a str,
	pos: usize,
	index: usize,
	continues: bool,
}

struct Boundary {
	end: usize,
	resume: usize,
	split_by_keyword: bool,
}

impl Boundary {
	const fn sentence(end: usize, resume: usize) -> Self {
		Self {
			end,
			resume,
			split_by_keyword: false,
		}
	}

	const fn keyword(at: usize) -> Self {
		Self {
			end: at,
			resume: at,
			split_by_keyword: true,
		}
	}
}

/// Checks parenthesis balance and returns the fragment sequence.
pub fn segment(description: &str) -> Result<Fragments<'_>, ParseError> {
	check_balance(description)?;
	Ok(Fragments {
		text: description,
		pos: 0,
		index: 0,
		continues: false,
	})
}

fn check_balance(text: &str) -> Result<(), ParseError> {
	let mut open = Vec::new();
	for (i, c) in text.char_indices() {
		match c {
			'(' => open.push(i),
			')' => {
				if open.pop().is_none() {
					return Err(ParseError::unbalanced_close(i));
				}
			}
			_ => {}
		}
	}
	open.last().map_or(Ok(()), |&i| Err(ParseError::unbalanced_open(i)))
}

impl<'a> Iterator for Fragments<'a> {
	type Item = RawFragment<'a>;

	fn next(&mut self) -> Option<Self::Item> {
		loop {
			let start = skip_separators(self.text, self.pos);
			if start >= self.text.len() {
				self.pos = self.text.len();
				return None;
			}

			let boundary = find_boundary(self.text, start);
			let continues = self.continues;
			self.pos = boundary.resume.max(start + 1).min(self.text.len());
			self.continues = boundary.split_by_keyword;

			let end = trim_end(self.text, start, boundary.end);
			if end <= start {
				continue;
			}

			trace!(start, end, continues, "fragment");
			let fragment = RawFragment::new(self.text, self.index, start..end, continues);
			self.index += 1;
			return Some(fragment);
		}
	}
}

impl FusedIterator for Fragments<'_> {}

fn skip_separators(text: &str, from: usize) -> usize {
	text[from..]
		.char_indices()
		.find(|&(_, c)| !(c.is_whitespace() || matches!(c, ',' | ';' | '.')))
		.map_or(text.len(), |(i, _)| from + i)
}

fn trim_end(text: &str, start: usize, end: usize) -> usize {
	let trimmed = text[start..end].trim_end_matches(|c: char| c.is_whitespace() || matches!(c, ',' | ';'));
	start + trimmed.len()
}

fn find_boundary(text: &str, start: usize) -> Boundary {
	if let Some(boundary) = conversion_block(text, start) {
		return boundary;
	}

	let mut depth = 0usize;
	for (offset, c) in text[start..].char_indices() {
		let i = start + offset;
		match c {
			'(' => depth += 1,
			')' => depth = depth.saturating_sub(1),
			'.' if depth == 0 && is_sentence_end(text, i) => return Boundary::sentence(i, i + 1),
			_ if depth == 0 && i > start && at_word_start(text, i) => {
				if let Some(boundary) = keyword_boundary(text, start, i) {
					return boundary;
				}
			}
			_ => {}
		}
	}
	Boundary::sentence(text.len(), text.len())
}

/// A two-point try runs through its `ATTEMPT SUCCEEDS/FAILS` sentence.
fn conversion_block(text: &str, start: usize) -> Option<Boundary> {
	let rest = &text[start..];
	if !CONVERSION_START.is_match(rest) {
		return None;
	}
	let after = start + CONVERSION_END.find(rest)?.end();
	let end = text[after..].find('.').map_or(text.len(), |p| after + p);
	Some(Boundary::sentence(end, end + 1))
}

fn is_sentence_end(text: &str, i: usize) -> bool {
	let followed_by_space = text[i + 1..].chars().next().map_or(true, char::is_whitespace);
	if !followed_by_space {
		return false;
	}
	let word = text[..i].rsplit(|c: char| c.is_whitespace() || c == '.' || c == '(').next().unwrap_or("");
	!is_initial(word)
}

/// `J`, `St`, `Jr`: a period after these belongs to a name.
fn is_initial(word: &str) -> bool {
	let mut chars = word.chars();
	match (chars.next(), chars.next(), chars.next()) {
		(Some(first), None, None) => first.is_ascii_uppercase(),
		(Some(first), Some(second), None) => first.is_ascii_uppercase() && second.is_ascii_lowercase(),
		_ => false,
	}
}

fn at_word_start(text: &str, i: usize) -> bool {
	text[..i].chars().next_back().map_or(true, |c| c.is_whitespace() || matches!(c, ',' | ';'))
}

fn starts_with_word(rest: &str, keyword: &str) -> bool {
	rest.starts_with(keyword) && rest[keyword.len()..].chars().next().map_or(true, |c| !c.is_alphanumeric())
}

fn keyword_boundary(text: &str, start: usize, i: usize) -> Option<Boundary> {
	let rest = &text[i..];
	let prior = strip_asides(&text[start..i]);
	let prior = prior.trim_end_matches([',', ';', ' ']);

	if PENALTY_MARKERS.iter().any(|kw| starts_with_word(rest, kw)) && !prior.is_empty() {
		return Some(Boundary::keyword(i));
	}

	if let Some(keyword) = CLAUSE_MARKERS.iter().find(|kw| starts_with_word(rest, kw)) {
		let recovery_after_turnover = keyword.eq_ignore_ascii_case("recovered by") && mentions_turnover(prior);
		if is_clause(prior) && !recovery_after_turnover {
			return Some(Boundary::keyword(i));
		}
		return None;
	}

	if let Some(keyword) = RULINGS.iter().find(|kw| starts_with_word(rest, kw)) {
		if !REVIEW_CONTEXT.is_match(prior) {
			return None;
		}
		let after = i + keyword.len();
		let follow = text[after..].trim_start_matches(|c: char| c.is_whitespace() || c == ',');
		if follow.is_empty() || follow.starts_with('.') {
			return None;
		}
		return Some(Boundary::keyword(after));
	}

	None
}

fn is_clause(prior: &str) -> bool {
	!prior.is_empty() && !BARE_NAME.is_match(prior)
}

fn mentions_turnover(prior: &str) -> bool {
	let lowercase = prior.to_lowercase();
	TURNOVER_WORDS.iter().any(|word| lowercase.contains(word))
}

fn collect_asides(text: &str, base: usize) -> Vec<Aside> {
	let mut asides = Vec::new();
	let mut depth = 0usize;
	let mut open_at = 0usize;
	for (i, c) in text.char_indices() {
		match c {
			'(' => {
				if depth == 0 {
					open_at = i;
				}
				depth += 1;
			}
			')' if depth > 0 => {
				depth -= 1;
				if depth == 0 {
					asides.push(Aside {
						text: text[open_at + 1..i].trim().to_string(),
						span: base + open_at..base + i + 1,
					});
				}
			}
			_ => {}
		}
	}
	asides
}

/// Removes parenthesized text and collapses whitespace.
pub fn strip_asides(text: &str) -> String {
	let mut kept = String::with_capacity(text.len());
	let mut depth = 0usize;
	for c in text.chars() {
		match c {
			'(' => depth += 1,
			')' => depth = depth.saturating_sub(1),
			_ if depth == 0 => kept.push(c),
			_ => {}
		}
	}
	kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
	use super::*;

	fn texts(description: &str) -> Vec<&str> {
		segment(description).unwrap().map(|f| f.text).collect()
	}

	#[test]
	fn test_empty_description_yields_nothing() {
		assert!(texts("").is_empty());
		assert!(texts("   ").is_empty());
	}

	#[test]
	fn test_sentences_split_on_periods_not_initials() {
		assert_eq!(
			texts("J.Smith rushed for 5 yards. PENALTY on DEN-T.Brown, Holding, 10 yards, offsetting."),
			vec!["J.Smith rushed for 5 yards", "PENALTY on DEN-T.Brown, Holding, 10 yards, offsetting"]
		);
		assert_eq!(
			texts("A.St. Brown to DET 22 for 7 yards (O.Beckham Jr.). Timeout #1 by DET."),
			vec!["A.St. Brown to DET 22 for 7 yards (O.Beckham Jr.)", "Timeout #1 by DET"]
		);
	}

	#[test]
	fn test_keyword_splits_mid_sentence() {
		assert_eq!(
			texts("J.Smith pass intercepted by D.Lee, returned 20 yards"),
			vec!["J.Smith pass", "intercepted by D.Lee, returned 20 yards"]
		);
		assert_eq!(
			texts("J.Smith up the middle to NYG 40 for 5 yards, FUMBLES (D.Lee), RECOVERED by DEN-K.Hill at NYG 41."),
			vec!["J.Smith up the middle to NYG 40 for 5 yards", "FUMBLES (D.Lee), RECOVERED by DEN-K.Hill at NYG 41"]
		);
	}

	#[test]
	fn test_bare_name_keeps_turnover_clause_together() {
		assert_eq!(
			texts("J.Smith FUMBLES, RECOVERED by DEN-K.Hill at NYG 41."),
			vec!["J.Smith FUMBLES, RECOVERED by DEN-K.Hill at NYG 41"]
		);
		assert_eq!(texts("T.Jones lateral to R.Brown to DEN 30 for 8 yards."), vec!["T.Jones lateral to R.Brown to DEN 30 for 8 yards"]);
	}

	#[test]
	fn test_continues_sentence_flag() {
		let flags: Vec<bool> = segment("J.Smith pass intercepted by D.Lee. D.Lee to DEN 40 for no gain.")
			.unwrap()
			.map(|f| f.continues_sentence)
			.collect();
		assert_eq!(flags, vec![false, true, false]);
	}

	#[test]
	fn test_ruling_closes_review_fragment() {
		assert_eq!(
			texts("DEN challenged the pass completion ruling, and the play was REVERSED, J.Smith pass incomplete short left to T.Jones."),
			vec![
				"DEN challenged the pass completion ruling, and the play was REVERSED",
				"J.Smith pass incomplete short left to T.Jones"
			]
		);
		assert_eq!(texts("Play Challenged by DEN and REVERSED."), vec!["Play Challenged by DEN and REVERSED"]);
	}

	#[test]
	fn test_conversion_block_is_one_fragment() {
		assert_eq!(
			texts("TWO-POINT CONVERSION ATTEMPT. D.Henry rushes up the middle. ATTEMPT SUCCEEDS. Timeout #2 by TEN."),
			vec!["TWO-POINT CONVERSION ATTEMPT. D.Henry rushes up the middle. ATTEMPT SUCCEEDS", "Timeout #2 by TEN"]
		);
	}

	#[test]
	fn test_asides_attach_to_their_fragment() {
		let fragments: Vec<RawFragment<'_>> = segment("(14:32 - 1st) (Shotgun) K.Cousins pass deep right to K.Pitts to TB 36 for 32 yards (Z.McCollum).")
			.unwrap()
			.collect();
		assert_eq!(fragments.len(), 1);
		let asides: Vec<&str> = fragments[0].asides.iter().map(|a| a.text.as_str()).collect();
		assert_eq!(asides, vec!["14:32 - 1st", "Shotgun", "Z.McCollum"]);
		assert_eq!(fragments[0].body, "K.Cousins pass deep right to K.Pitts to TB 36 for 32 yards");
	}

	#[test]
	fn test_nested_asides_stay_in_outer_text() {
		let fragments: Vec<RawFragment<'_>> = segment("J.Smith to DEN 30 for 4 yards (T.Brown (injured)).").unwrap().collect();
		assert_eq!(fragments[0].asides.len(), 1);
		assert_eq!(fragments[0].asides[0].text, "T.Brown (injured)");
	}

	#[test]
	fn test_spans_follow_text_order() {
		let description = "J.Smith rushed for 5 yards. Timeout #1 by DEN. End of quarter.";
		let spans: Vec<Range<usize>> = segment(description).unwrap().map(|f| f.span).collect();
		assert!(spans.windows(2).all(|pair| pair[0].end <= pair[1].start));
		for span in spans {
			assert!(!description[span].is_empty());
		}
	}

	#[test]
	fn test_unbalanced_parentheses() {
		assert_eq!(segment("J.Smith to DEN 30 (T.Brown").unwrap_err(), ParseError::unbalanced_open(18));
		assert_eq!(segment("J.Smith to DEN 30 T.Brown)").unwrap_err(), ParseError::unbalanced_close(25));
	}

	#[test]
	fn test_fragments_are_restartable() {
		let fragments = segment("J.Smith rushed for 5 yards. Timeout #1 by DEN.").unwrap();
		let first: Vec<&str> = fragments.clone().map(|f| f.text).collect();
		let second: Vec<&str> = fragments.map(|f| f.text).collect();
		assert_eq!(first, second);
	}
}
