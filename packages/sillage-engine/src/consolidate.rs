use std::time::Instant;

use sillage_config::Consolidation;
use sillage_domain::normalize::NoiseDictionary;

use crate::{
	Result, badges, cluster,
	cluster::LineageCluster,
	ingest,
	metrics::ConsolidationMetrics,
	primary, recommend,
	variant::{CandidateVariant, ConsolidationOutcome, RelatedVariant, VariantGroup},
};

/// Runs one full consolidation pass: validate configuration, skip malformed
/// candidates, cluster by lineage, then assemble ordered groups plus metrics.
///
/// Pure and stateless; concurrent calls share nothing.
pub fn consolidate(
	candidates: Vec<CandidateVariant>,
	cfg: &Consolidation,
) -> Result<ConsolidationOutcome> {
	let started = Instant::now();

	sillage_config::validate_consolidation(cfg)?;

	let dictionary = NoiseDictionary::compile(&cfg.noise_phrases)?;
	let input_count = candidates.len();
	let (valid, skipped_count) = ingest::partition_valid(candidates);
	let clusters = cluster::cluster_by_lineage(valid, &dictionary);
	let mut groups: Vec<VariantGroup> =
		clusters.into_iter().map(|cluster| build_group(cluster, cfg)).collect();

	groups.sort_by(|a, b| {
		primary::cmp_f32_desc(a.popularity_score, b.popularity_score)
			.then_with(|| a.group_name.cmp(&b.group_name))
			.then_with(|| a.group_id.cmp(&b.group_id))
	});

	let metrics =
		ConsolidationMetrics::report(input_count, skipped_count, groups.len(), started.elapsed());

	tracing::info!(
		input_count = metrics.input_count,
		skipped_count = metrics.skipped_count,
		group_count = metrics.group_count,
		reduction_percentage = f64::from(metrics.reduction_percentage),
		duration_ms = metrics.duration_ms,
		"Consolidated candidate variants.",
	);

	Ok(ConsolidationOutcome { groups, metrics })
}

fn build_group(mut cluster: LineageCluster, cfg: &Consolidation) -> VariantGroup {
	primary::rank_members(&mut cluster.members);

	let primary_candidate = cluster.members[0].candidate.clone();
	let badges = badges::assign_badges(&cluster.members, &primary_candidate, cfg);
	let experience_recommendations =
		recommend::recommend_tiers(&cluster.members, &primary_candidate);
	let group_name = cluster.members[0].name.display_core.clone();
	let related_variants: Vec<RelatedVariant> =
		cluster.members[1..].iter().map(RelatedVariant::from_member).collect();

	tracing::debug!(
		group_name = %group_name,
		primary_id = %primary_candidate.id,
		member_count = cluster.members.len(),
		"Assembled variant group.",
	);

	VariantGroup {
		group_id: format!("lineage-{}", primary_candidate.id),
		group_name,
		total_variants: cluster.members.len(),
		popularity_score: primary_candidate.popularity_score,
		primary_variant: primary_candidate,
		related_variants,
		badges,
		experience_recommendations,
	}
}
