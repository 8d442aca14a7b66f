mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Consolidation, DEFAULT_NOISE_PHRASES, Service};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}

	validate_consolidation(&cfg.consolidation)
}

/// Checked again by the engine at invocation time, since callers may build a
/// [`Consolidation`] directly instead of going through [`load`].
pub fn validate_consolidation(cfg: &Consolidation) -> Result<()> {
	if cfg.noise_phrases.is_empty() {
		return Err(Error::Validation {
			message: "consolidation.noise_phrases must be non-empty.".to_string(),
		});
	}
	if cfg.noise_phrases.iter().any(|phrase| phrase.trim().is_empty()) {
		return Err(Error::Validation {
			message: "consolidation.noise_phrases must not contain blank phrases.".to_string(),
		});
	}
	if !cfg.hidden_gem_threshold.is_finite() {
		return Err(Error::Validation {
			message: "consolidation.hidden_gem_threshold must be a finite number.".to_string(),
		});
	}
	if cfg.hidden_gem_threshold < 0.0 {
		return Err(Error::Validation {
			message: "consolidation.hidden_gem_threshold must be zero or greater.".to_string(),
		});
	}
	if !cfg.rarity_threshold.is_finite() {
		return Err(Error::Validation {
			message: "consolidation.rarity_threshold must be a finite number.".to_string(),
		});
	}
	if cfg.rarity_threshold < 0.0 {
		return Err(Error::Validation {
			message: "consolidation.rarity_threshold must be zero or greater.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	let mut seen = Vec::new();

	for phrase in cfg.consolidation.noise_phrases.drain(..) {
		let trimmed = phrase.trim().to_lowercase();

		if trimmed.is_empty() {
			continue;
		}
		if seen.contains(&trimmed) {
			continue;
		}

		seen.push(trimmed);
	}

	cfg.consolidation.noise_phrases = seen;
}
