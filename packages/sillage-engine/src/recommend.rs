use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::{
	primary::{cmp_f32_asc, cmp_f32_desc, cmp_sample_price},
	variant::{CandidateVariant, MemberVariant},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
	Beginner,
	Intermediate,
	Expert,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExperienceRecommendation {
	pub level: ExperienceLevel,
	pub variant_id: String,
	pub reasoning: String,
}

/// Picks one variant per experience tier. Always returns exactly three
/// entries referencing members of the given group; a single-member group gets
/// all three tiers pointed at that member.
pub fn recommend_tiers(
	members: &[MemberVariant],
	primary: &CandidateVariant,
) -> Vec<ExperienceRecommendation> {
	let beginner = members
		.iter()
		.min_by(|a, b| cmp_beginner(&a.candidate, &b.candidate, primary))
		.map(|member| &member.candidate)
		.unwrap_or(primary);
	let expert = members
		.iter()
		.min_by(|a, b| cmp_expert(&a.candidate, &b.candidate, primary))
		.map(|member| &member.candidate)
		.unwrap_or(primary);

	vec![
		ExperienceRecommendation {
			level: ExperienceLevel::Beginner,
			variant_id: beginner.id.clone(),
			reasoning: beginner_reasoning(beginner),
		},
		ExperienceRecommendation {
			level: ExperienceLevel::Intermediate,
			variant_id: primary.id.clone(),
			reasoning: intermediate_reasoning(primary),
		},
		ExperienceRecommendation {
			level: ExperienceLevel::Expert,
			variant_id: expert.id.clone(),
			reasoning: expert_reasoning(expert),
		},
	]
}

fn cmp_beginner(a: &CandidateVariant, b: &CandidateVariant, primary: &CandidateVariant) -> Ordering {
	cmp_f32_asc(a.intensity_score, b.intensity_score)
		.then_with(|| cmp_sample_price(a.sample_price, b.sample_price))
		.then_with(|| cmp_prefer_primary(a, b, primary))
		.then_with(|| a.id.cmp(&b.id))
}

fn cmp_expert(a: &CandidateVariant, b: &CandidateVariant, primary: &CandidateVariant) -> Ordering {
	cmp_f32_desc(a.intensity_score, b.intensity_score)
		.then_with(|| cmp_f32_desc(a.longevity_hours, b.longevity_hours))
		.then_with(|| cmp_prefer_primary(a, b, primary))
		.then_with(|| a.id.cmp(&b.id))
}

fn cmp_prefer_primary(
	a: &CandidateVariant,
	b: &CandidateVariant,
	primary: &CandidateVariant,
) -> Ordering {
	(b.id == primary.id).cmp(&(a.id == primary.id))
}

// Reasoning strings are template-built from variant attributes only, so the
// whole response stays deterministic.

fn beginner_reasoning(variant: &CandidateVariant) -> String {
	let mut reasoning = format!(
		"Easiest way into this line: the softest variant at intensity {:.1}/10",
		variant.intensity_score,
	);

	match variant.sample_price {
		Some(price) if variant.sample_available => {
			reasoning.push_str(&format!(", with a ${price:.2} sample to try first."));
		},
		_ if variant.sample_available => reasoning.push_str(", with samples available."),
		_ => reasoning.push('.'),
	}

	reasoning
}

fn intermediate_reasoning(primary: &CandidateVariant) -> String {
	format!(
		"The flagship pick: the best-known take on this line (popularity {:.0}).",
		primary.popularity_score,
	)
}

fn expert_reasoning(variant: &CandidateVariant) -> String {
	format!(
		"The fullest expression: intensity {:.1}/10 with around {:.0}h of longevity.",
		variant.intensity_score, variant.longevity_hours,
	)
}
