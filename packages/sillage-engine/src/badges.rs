use std::{collections::HashSet, fmt};

use serde::{Deserialize, Serialize};

use sillage_config::Consolidation;

use crate::variant::{CandidateVariant, MemberVariant};

/// Fixed badge vocabulary. Serialized as the display labels the catalog UI
/// renders verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Badge {
	#[serde(rename = "Multiple Concentrations")]
	MultipleConcentrations,
	#[serde(rename = "Sample Available")]
	SampleAvailable,
	#[serde(rename = "Hidden Gem")]
	HiddenGem,
	#[serde(rename = "Rare / Limited")]
	RareLimited,
}
impl Badge {
	pub fn label(self) -> &'static str {
		match self {
			Self::MultipleConcentrations => "Multiple Concentrations",
			Self::SampleAvailable => "Sample Available",
			Self::HiddenGem => "Hidden Gem",
			Self::RareLimited => "Rare / Limited",
		}
	}
}
impl fmt::Display for Badge {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

/// Derives the badge set from group contents alone. Emitted in vocabulary
/// order so equal groups always carry identically ordered badges.
pub fn assign_badges(
	members: &[MemberVariant],
	primary: &CandidateVariant,
	cfg: &Consolidation,
) -> Vec<Badge> {
	let mut badges = Vec::new();
	let distinct_modifiers: HashSet<&str> =
		members.iter().map(|member| member.name.modifier.as_str()).collect();

	if members.len() >= 2 && distinct_modifiers.len() >= 2 {
		badges.push(Badge::MultipleConcentrations);
	}
	if members.iter().any(|member| member.candidate.sample_available) {
		badges.push(Badge::SampleAvailable);
	}
	if members.len() >= 2 && primary.popularity_score < cfg.hidden_gem_threshold {
		badges.push(Badge::HiddenGem);
	}
	if members.iter().any(|member| {
		!member.candidate.sample_available
			&& member.candidate.popularity_score < cfg.rarity_threshold
	}) {
		badges.push(Badge::RareLimited);
	}

	badges
}
