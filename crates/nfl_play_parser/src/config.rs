use crate::schema::TeamAbbreviation;
use serde::{Deserialize, Serialize};

/// What to do with a penalty marked offsetting when no second offsetting
/// penalty appears in the same description.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoneOffsetting {
	/// Enforce it like any accepted penalty.
	#[default]
	ApplyAsStandard,
	/// Treat it as cancelled and replay the down.
	TreatAsOffsetting,
}

/// Tie-breaks of the outcome resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverPolicy {
	pub lone_offsetting: LoneOffsetting,
	/// Team in possession at the snap, when the caller knows it. Used to sign
	/// penalties that can be called on either side and to tell a fumble
	/// recovered by the offense from a turnover.
	pub offense: Option<String>,
	/// `a total of N yards` overrides the yardage summed from the segments.
	pub prefer_stated_total: bool,
}

impl Default for ResolverPolicy {
	fn default() -> Self {
		Self {
			lone_offsetting: LoneOffsetting::default(),
			offense: None,
			prefer_stated_total: true,
		}
	}
}

impl ResolverPolicy {
	pub fn with_offense(mut self, team: &str) -> Self {
		self.offense = Some(team.to_string());
		self
	}

	/// Whether `team` is the offense. `None` when either side is unknown.
	pub fn is_offense(&self, team: &str) -> Option<bool> {
		let offense = self.offense.as_deref()?;
		match (offense.parse::<TeamAbbreviation>(), team.parse::<TeamAbbreviation>()) {
			(Ok(offense), Ok(team)) => Some(offense == team),
			_ => Some(offense == team),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_policy() {
		let policy = ResolverPolicy::default();
		assert_eq!(policy.lone_offsetting, LoneOffsetting::ApplyAsStandard);
		assert!(policy.prefer_stated_total);
		assert_eq!(policy.is_offense("DEN"), None);
	}

	#[test]
	fn test_offense_matches_aliases() {
		let policy = ResolverPolicy::default().with_offense("BAL");
		assert_eq!(policy.is_offense("BLT"), Some(true));
		assert_eq!(policy.is_offense("PIT"), Some(false));
	}
}
