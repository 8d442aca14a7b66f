use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::{Error, Result};

static DECIMAL_SEPARATOR: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"(\d)[.,](\d)").expect("Decimal separator regex must compile."));
static VOLUME_TOKEN: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^\d+(ml|cl|oz|floz)$").expect("Volume regex must compile."));

/// A display name reduced to its lineage-bearing parts.
///
/// `core_tokens` identify the product line; `modifier` records the stripped
/// concentration/edition phrases in removal order; `display_core` keeps the
/// original casing of the surviving tokens for presentation.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NormalizedName {
	pub core_tokens: Vec<String>,
	pub modifier: String,
	pub display_core: String,
}

/// Compiled noise-phrase dictionary. Phrases are matched as whole token
/// sequences, longest phrase first, so "eau de parfum" wins over "parfum" and
/// a bare leading "Eau" is never treated as noise.
#[derive(Clone, Debug)]
pub struct NoiseDictionary {
	phrases: Vec<Vec<String>>,
}
impl NoiseDictionary {
	pub fn compile(phrases: &[String]) -> Result<Self> {
		if phrases.is_empty() {
			return Err(Error::EmptyNoiseDictionary);
		}

		let mut compiled: Vec<Vec<String>> = Vec::with_capacity(phrases.len());

		for phrase in phrases {
			let tokens: Vec<String> =
				tokenize(phrase).into_iter().map(|token| token.lower).collect();

			if tokens.is_empty() {
				return Err(Error::BlankNoisePhrase { phrase: phrase.clone() });
			}
			if compiled.contains(&tokens) {
				continue;
			}

			compiled.push(tokens);
		}

		compiled.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

		Ok(Self { phrases: compiled })
	}

	pub fn normalize(&self, name: &str) -> NormalizedName {
		let tokens = tokenize(name);
		let mut kept: Vec<usize> = Vec::with_capacity(tokens.len());
		let mut removed: Vec<String> = Vec::new();
		let mut idx = 0;

		'scan: while idx < tokens.len() {
			for phrase in &self.phrases {
				if matches_at(&tokens, idx, phrase) {
					removed.push(phrase.join(" "));

					idx += phrase.len();

					continue 'scan;
				}
			}

			let token = &tokens[idx];

			// "100 ml" split across two tokens.
			if idx + 1 < tokens.len()
				&& is_bare_number(&token.lower)
				&& is_volume_unit(&tokens[idx + 1].lower)
			{
				removed.push(format!("{} {}", token.lower, tokens[idx + 1].lower));

				idx += 2;

				continue;
			}
			if is_year(&token.lower) || VOLUME_TOKEN.is_match(&token.lower) {
				removed.push(token.lower.clone());

				idx += 1;

				continue;
			}

			kept.push(idx);

			idx += 1;
		}

		// A name made entirely of noise phrases keeps its full token sequence;
		// otherwise same-brand records named after bare concentrations would
		// all collapse into one empty-core lineage.
		if kept.is_empty() {
			return NormalizedName {
				core_tokens: tokens.iter().map(|token| token.lower.clone()).collect(),
				modifier: String::new(),
				display_core: join_display(&tokens, (0..tokens.len()).collect::<Vec<_>>().as_slice()),
			};
		}

		NormalizedName {
			core_tokens: kept.iter().map(|&i| tokens[i].lower.clone()).collect(),
			modifier: removed.join(" "),
			display_core: join_display(&tokens, &kept),
		}
	}
}

#[derive(Clone, Debug)]
struct Token {
	lower: String,
	display: String,
}

fn tokenize(name: &str) -> Vec<Token> {
	let normalized: String = name.nfkc().collect();
	let normalized = DECIMAL_SEPARATOR.replace_all(&normalized, "${1}${2}");
	let mut tokens = Vec::new();
	let mut lower = String::new();
	let mut display = String::new();

	for ch in normalized.chars() {
		if ch.is_alphanumeric() {
			display.push(ch);
			lower.extend(ch.to_lowercase());

			continue;
		}
		if !lower.is_empty() {
			tokens.push(Token { lower: std::mem::take(&mut lower), display: std::mem::take(&mut display) });
		}
	}

	if !lower.is_empty() {
		tokens.push(Token { lower, display });
	}

	tokens
}

fn matches_at(tokens: &[Token], start: usize, phrase: &[String]) -> bool {
	if start + phrase.len() > tokens.len() {
		return false;
	}

	phrase.iter().zip(&tokens[start..]).all(|(expected, token)| token.lower == *expected)
}

fn join_display(tokens: &[Token], kept: &[usize]) -> String {
	kept.iter().map(|&i| tokens[i].display.as_str()).collect::<Vec<_>>().join(" ")
}

fn is_bare_number(token: &str) -> bool {
	!token.is_empty() && token.bytes().all(|byte| byte.is_ascii_digit())
}

fn is_volume_unit(token: &str) -> bool {
	matches!(token, "ml" | "cl" | "oz" | "floz")
}

fn is_year(token: &str) -> bool {
	if token.len() != 4 || !is_bare_number(token) {
		return false;
	}

	token.parse::<u32>().map(|year| (1900..=2099).contains(&year)).unwrap_or(false)
}

#[cfg(test)]
mod tests {
	use super::{NoiseDictionary, is_year};

	fn dictionary() -> NoiseDictionary {
		let phrases: Vec<String> = sillage_config::DEFAULT_NOISE_PHRASES
			.iter()
			.map(|phrase| phrase.to_string())
			.collect();

		NoiseDictionary::compile(&phrases).expect("Default dictionary must compile.")
	}

	#[test]
	fn strips_concentration_phrase() {
		let name = dictionary().normalize("Sauvage Eau de Parfum");

		assert_eq!(name.core_tokens, vec!["sauvage"]);
		assert_eq!(name.modifier, "eau de parfum");
		assert_eq!(name.display_core, "Sauvage");
	}

	#[test]
	fn keeps_leading_qualifier_not_in_dictionary() {
		let name = dictionary().normalize("Eau Sauvage");

		assert_eq!(name.core_tokens, vec!["eau", "sauvage"]);
		assert_eq!(name.modifier, "");
	}

	#[test]
	fn longest_phrase_wins_over_substring_phrase() {
		let name = dictionary().normalize("Eau Sauvage Parfum");

		// "parfum" is stripped alone; "eau" stays because only the full
		// phrase "eau de parfum" is noise.
		assert_eq!(name.core_tokens, vec!["eau", "sauvage"]);
		assert_eq!(name.modifier, "parfum");
	}

	#[test]
	fn strips_volume_year_and_gender_markers() {
		let name = dictionary().normalize("Terre d'Hermes Pour Homme 100ml 2018");

		assert_eq!(name.core_tokens, vec!["terre", "d", "hermes"]);
		assert_eq!(name.modifier, "pour homme 100ml 2018");
	}

	#[test]
	fn strips_split_volume_marker() {
		let name = dictionary().normalize("Bleu de Chanel EDP 100 ml");

		assert_eq!(name.core_tokens, vec!["bleu", "de", "chanel"]);
		assert_eq!(name.modifier, "edp 100 ml");
	}

	#[test]
	fn strips_decimal_ounce_volume() {
		let name = dictionary().normalize("Aventus 1.7oz");

		assert_eq!(name.core_tokens, vec!["aventus"]);
		assert_eq!(name.modifier, "17oz");
	}

	#[test]
	fn all_noise_name_falls_back_to_full_token_sequence() {
		let name = dictionary().normalize("Eau de Parfum");

		assert_eq!(name.core_tokens, vec!["eau", "de", "parfum"]);
		assert_eq!(name.modifier, "");
		assert_eq!(name.display_core, "Eau de Parfum");
	}

	#[test]
	fn display_core_preserves_original_casing() {
		let name = dictionary().normalize("La Nuit de L'Homme EDT");

		assert_eq!(name.display_core, "La Nuit de L Homme");
		assert_eq!(name.core_tokens, vec!["la", "nuit", "de", "l", "homme"]);
		assert_eq!(name.modifier, "edt");
	}

	#[test]
	fn nfkc_normalizes_fullwidth_input() {
		let name = dictionary().normalize("Ｓａｕｖａｇｅ ＥＤＰ");

		assert_eq!(name.core_tokens, vec!["sauvage"]);
		assert_eq!(name.modifier, "edp");
	}

	#[test]
	fn year_detection_is_bounded() {
		assert!(is_year("1999"));
		assert!(is_year("2025"));
		assert!(!is_year("1776"));
		assert!(!is_year("212"));
		assert!(!is_year("no5"));
	}

	#[test]
	fn compile_rejects_empty_dictionary() {
		assert!(NoiseDictionary::compile(&[]).is_err());
	}

	#[test]
	fn compile_rejects_blank_phrase() {
		let phrases = vec!["edp".to_string(), "  - ".to_string()];

		assert!(NoiseDictionary::compile(&phrases).is_err());
	}
}
