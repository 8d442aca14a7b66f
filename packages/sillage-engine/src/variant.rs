use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use sillage_domain::normalize::NormalizedName;

use crate::{
	badges::Badge, metrics::ConsolidationMetrics, recommend::ExperienceRecommendation,
};

/// One upstream search hit. Identity fields (`id`, `name`, `brand_id`) default
/// to empty strings on deserialization so a malformed record is skipped at
/// ingestion instead of failing the whole batch.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateVariant {
	#[serde(default)]
	pub id: String,
	#[serde(default)]
	pub name: String,
	#[serde(default)]
	pub brand: String,
	#[serde(default)]
	pub brand_id: String,
	#[serde(default)]
	pub notes: Vec<String>,
	#[serde(default)]
	pub intensity_score: f32,
	#[serde(default)]
	pub longevity_hours: f32,
	#[serde(default)]
	pub sample_available: bool,
	#[serde(default)]
	pub sample_price: Option<f32>,
	#[serde(default)]
	pub popularity_score: f32,
	#[serde(default)]
	pub family: String,
	#[serde(default)]
	pub recommended_occasions: BTreeSet<String>,
	#[serde(default)]
	pub recommended_seasons: BTreeSet<String>,
	#[serde(default)]
	pub image_url: Option<String>,
	#[serde(default)]
	pub description: Option<String>,
}
impl CandidateVariant {
	pub fn is_well_formed(&self) -> bool {
		!self.id.trim().is_empty()
			&& !self.name.trim().is_empty()
			&& !self.brand_id.trim().is_empty()
	}
}

/// A candidate plus its normalized name, carried through clustering so the
/// modifier and display core are computed exactly once per candidate.
#[derive(Clone, Debug)]
pub struct MemberVariant {
	pub candidate: CandidateVariant,
	pub name: NormalizedName,
}

/// Trimmed projection of a non-primary group member.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RelatedVariant {
	pub id: String,
	pub name: String,
	/// The stripped concentration/edition phrase, e.g. "eau de toilette".
	pub modifier: String,
	pub intensity_score: f32,
	pub longevity_hours: f32,
	pub sample_available: bool,
	pub sample_price: Option<f32>,
	pub popularity_score: f32,
	pub image_url: Option<String>,
}
impl RelatedVariant {
	pub fn from_member(member: &MemberVariant) -> Self {
		Self {
			id: member.candidate.id.clone(),
			name: member.candidate.name.clone(),
			modifier: member.name.modifier.clone(),
			intensity_score: member.candidate.intensity_score,
			longevity_hours: member.candidate.longevity_hours,
			sample_available: member.candidate.sample_available,
			sample_price: member.candidate.sample_price,
			popularity_score: member.candidate.popularity_score,
			image_url: member.candidate.image_url.clone(),
		}
	}
}

/// One consolidated lineage, headed by its primary variant.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VariantGroup {
	pub group_id: String,
	pub group_name: String,
	pub total_variants: usize,
	pub primary_variant: CandidateVariant,
	pub related_variants: Vec<RelatedVariant>,
	pub badges: Vec<Badge>,
	pub experience_recommendations: Vec<ExperienceRecommendation>,
	/// The primary's own popularity, not a sum over members; group ordering
	/// reflects the strength of the flagship, not the member count.
	pub popularity_score: f32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConsolidationOutcome {
	pub groups: Vec<VariantGroup>,
	pub metrics: ConsolidationMetrics,
}
