//! Regex building blocks shared by the parser stages.

use once_cell::sync::Lazy;
use regex::Regex;

/// Player token: `J.Smith`, `D.J.Moore`, `A.St. Brown`, `J.Smith-Njigba`,
/// `O.Beckham Jr.`, `A.Randle El`.
pub const NAME: &str = r"(?:[A-Z][a-z]{0,2}|[A-Z]{2})\.\s?(?:[A-Z][a-z]?\.\s?)?[A-Z][A-Za-z'\-]*(?:\s(?:Jr\.|Sr\.|Jr\b|Sr\b|III\b|II\b|IV\b|El\b))?";

pub const TEAM: &str = r"[A-Z]{2,3}";

pub const SPOT: &str = r"(?:[A-Z]{2,3} -?\d{1,2}|50)\b";

fn compile(pattern: &str) -> Regex {
	Regex::new(pattern).unwrap()
}

pub static NAME_REGEX: Lazy<Regex> = Lazy::new(|| compile(&format!(r"\b{NAME}")));

/// A clause that is nothing but a (team-prefixed) player.
pub static BARE_NAME: Lazy<Regex> = Lazy::new(|| compile(&format!(r"^(?:{TEAM}-)?{NAME}$")));

pub static LEADING_NAME: Lazy<Regex> = Lazy::new(|| compile(&format!(r"^(?:{TEAM}-)?({NAME})")));

/// The closest number carrying a yard unit: `65 yards`, `47 yard`, `-3 yards`.
pub static YARDS_MARKER: Lazy<Regex> = Lazy::new(|| compile(r"(-?\d+) yards?\b"));

pub static TOTAL_YARDS: Lazy<Regex> = Lazy::new(|| compile(r"(?i)\ba total of (-?\d+) yards?\b"));

pub static END_SPOT: Lazy<Regex> = Lazy::new(|| compile(&format!(r"\b(?:to|at) ({SPOT})")));

/// `reported in as eligible`, `reports as eligible`.
pub static REPORTED_ELIGIBLE: Lazy<Regex> = Lazy::new(|| compile(r"(?i)\breport(?:s|ed)?(?: in)? as eligible\b"));

pub static NULLIFIED: Lazy<Regex> = Lazy::new(|| compile(r"(?i)\bnullified\b"));
