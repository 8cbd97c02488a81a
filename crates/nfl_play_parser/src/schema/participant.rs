use crate::schema::TeamAbbreviation;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
	Rusher,
	Passer,
	Receiver,
	Tackler,
	Kicker,
	Returner,
	Interceptor,
	Fumbler,
	ForcedBy,
	Recoverer,
	RecoveringTeam,
	LateralReceiver,
	PenalizedPlayer,
	PenalizedTeam,
	Challenger,
	Eligible,
}

impl Role {
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Rusher => "rusher",
			Self::Passer => "passer",
			Self::Receiver => "receiver",
			Self::Tackler => "tackler",
			Self::Kicker => "kicker",
			Self::Returner => "returner",
			Self::Interceptor => "interceptor",
			Self::Fumbler => "fumbler",
			Self::ForcedBy => "forced_by",
			Self::Recoverer => "recoverer",
			Self::RecoveringTeam => "recovering_team",
			Self::LateralReceiver => "lateral_receiver",
			Self::PenalizedPlayer => "penalized_player",
			Self::PenalizedTeam => "penalized_team",
			Self::Challenger => "challenger",
			Self::Eligible => "eligible",
		}
	}
}

/// A player or team token exactly as it appears in the description.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ParticipantReference(String);

impl ParticipantReference {
	/// Returns `None` for tokens that are empty after trimming.
	pub fn new(token: &str) -> Option<Self> {
		let token = token.trim().trim_end_matches(',');
		if token.is_empty() {
			None
		} else {
			Some(Self(token.to_string()))
		}
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Normalized team for references that are bare team codes.
	pub fn team(&self) -> Option<TeamAbbreviation> {
		self.0.parse().ok()
	}
}

impl fmt::Display for ParticipantReference {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl PartialEq<&str> for ParticipantReference {
	fn eq(&self, other: &&str) -> bool {
		self.0 == *other
	}
}

/// Role assignments of one segment in the order they were found.
/// A role may repeat (two tacklers).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Roles(Vec<(Role, ParticipantReference)>);

impl Roles {
	pub fn insert(&mut self, role: Role, participant: ParticipantReference) {
		if !self.0.iter().any(|(r, p)| *r == role && *p == participant) {
			self.0.push((role, participant));
		}
	}

	/// Inserts only when the token is a non-empty reference.
	pub fn insert_token(&mut self, role: Role, token: &str) {
		if let Some(participant) = ParticipantReference::new(token) {
			self.insert(role, participant);
		}
	}

	pub fn get(&self, role: Role) -> Option<&ParticipantReference> {
		self.0.iter().find(|(r, _)| *r == role).map(|(_, p)| p)
	}

	pub fn all(&self, role: Role) -> impl Iterator<Item = &ParticipantReference> {
		self.0.iter().filter(move |(r, _)| *r == role).map(|(_, p)| p)
	}

	pub fn contains(&self, role: Role) -> bool {
		self.get(role).is_some()
	}

	pub fn iter(&self) -> impl Iterator<Item = &(Role, ParticipantReference)> {
		self.0.iter()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_empty_reference_is_rejected() {
		assert_eq!(ParticipantReference::new("   "), None);
		assert_eq!(ParticipantReference::new(""), None);
		assert_eq!(ParticipantReference::new(" J.Smith,").unwrap().as_str(), "J.Smith");
	}

	#[test]
	fn test_team_reference_is_not_rewritten() {
		let team = ParticipantReference::new("HST").unwrap();
		assert_eq!(team.as_str(), "HST");
		assert_eq!(team.team(), Some(TeamAbbreviation::HOU));
	}

	#[test]
	fn test_roles_keep_order_and_repeats() {
		let mut roles = Roles::default();
		roles.insert_token(Role::Rusher, "B.Robinson");
		roles.insert_token(Role::Tackler, "T.Smith");
		roles.insert_token(Role::Tackler, "L.David");
		roles.insert_token(Role::Tackler, "L.David");
		roles.insert_token(Role::Receiver, "");

		assert_eq!(roles.len(), 3);
		assert_eq!(roles.get(Role::Tackler).unwrap(), &"T.Smith");
		assert_eq!(roles.all(Role::Tackler).count(), 2);
		assert!(!roles.contains(Role::Receiver));
	}
}
