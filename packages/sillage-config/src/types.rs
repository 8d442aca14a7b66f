use serde::{Deserialize, Serialize};

/// Noise phrases stripped from display names before lineage comparison.
///
/// Concentration strengths, edition words, and gender suffixes vary within one
/// product line; anything else in a name distinguishes lines and is kept.
pub const DEFAULT_NOISE_PHRASES: &[&str] = &[
	"eau de parfum",
	"edp",
	"eau de toilette",
	"edt",
	"eau de cologne",
	"edc",
	"extrait de parfum",
	"extrait",
	"parfum",
	"cologne",
	"elixir",
	"eau fraiche",
	"intense",
	"extreme",
	"absolu",
	"concentree",
	"for men",
	"for women",
	"pour homme",
	"pour femme",
	"limited edition",
	"collector edition",
	"tester",
	"refill",
	"recharge",
];

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	#[serde(default)]
	pub consolidation: Consolidation,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub log_level: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Consolidation {
	/// Phrases removed from candidate names during normalization. Matched as
	/// whole token sequences, longest phrase first.
	#[serde(default = "default_noise_phrases")]
	pub noise_phrases: Vec<String>,
	/// A group whose primary scores below this is badged "Hidden Gem".
	#[serde(default = "default_hidden_gem_threshold")]
	pub hidden_gem_threshold: f32,
	/// A non-samplable member scoring below this marks the group "Rare / Limited".
	#[serde(default = "default_rarity_threshold")]
	pub rarity_threshold: f32,
}
impl Default for Consolidation {
	fn default() -> Self {
		Self {
			noise_phrases: default_noise_phrases(),
			hidden_gem_threshold: default_hidden_gem_threshold(),
			rarity_threshold: default_rarity_threshold(),
		}
	}
}

fn default_noise_phrases() -> Vec<String> {
	DEFAULT_NOISE_PHRASES.iter().map(|phrase| phrase.to_string()).collect()
}

fn default_hidden_gem_threshold() -> f32 {
	30.0
}

fn default_rarity_threshold() -> f32 {
	20.0
}
