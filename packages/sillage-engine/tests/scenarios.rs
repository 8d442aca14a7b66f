use sillage_config::Consolidation;
use sillage_engine::{Badge, CandidateVariant, VariantGroup, consolidate};
use sillage_testkit::{CandidateBuilder, sauvage_catalog};

fn run(candidates: Vec<CandidateVariant>) -> sillage_engine::ConsolidationOutcome {
	consolidate(candidates, &Consolidation::default()).expect("Consolidation must succeed.")
}

fn group_by_name<'a>(groups: &'a [VariantGroup], name: &str) -> &'a VariantGroup {
	groups
		.iter()
		.find(|group| group.group_name == name)
		.unwrap_or_else(|| panic!("Expected a group named {name:?}."))
}

#[test]
fn sauvage_lineages_do_not_merge() {
	let outcome = run(sauvage_catalog());

	assert_eq!(outcome.groups.len(), 3);

	let sauvage = group_by_name(&outcome.groups, "Sauvage");
	let eau_sauvage = group_by_name(&outcome.groups, "Eau Sauvage");
	let bleu = group_by_name(&outcome.groups, "Bleu de Chanel");

	assert_eq!(sauvage.total_variants, 4);
	assert_eq!(eau_sauvage.total_variants, 2);
	assert_eq!(bleu.total_variants, 1);

	// Shared word, different lineage: no Sauvage concentration may leak into
	// the Eau Sauvage group.
	let eau_ids: Vec<_> = std::iter::once(eau_sauvage.primary_variant.id.as_str())
		.chain(eau_sauvage.related_variants.iter().map(|related| related.id.as_str()))
		.collect();

	assert!(eau_ids.contains(&"eau-sauvage"));
	assert!(eau_ids.contains(&"eau-sauvage-parfum"));
	assert!(!eau_ids.iter().any(|id| id.starts_with("sauvage-")));
}

#[test]
fn most_popular_concentration_heads_the_group() {
	let outcome = run(sauvage_catalog());
	let sauvage = group_by_name(&outcome.groups, "Sauvage");

	assert_eq!(sauvage.primary_variant.id, "sauvage-edp");
	assert_eq!(sauvage.primary_variant.name, "Sauvage Eau de Parfum");
	assert_eq!(sauvage.group_id, "lineage-sauvage-edp");
	assert_eq!(sauvage.popularity_score, 95.0);
}

#[test]
fn groups_are_ordered_by_primary_popularity() {
	let outcome = run(sauvage_catalog());
	let names: Vec<_> = outcome.groups.iter().map(|group| group.group_name.as_str()).collect();

	// Primaries score 95 (Sauvage), 92 (Bleu de Chanel), 60 (Eau Sauvage).
	assert_eq!(names, vec!["Sauvage", "Bleu de Chanel", "Eau Sauvage"]);
}

#[test]
fn mixed_sample_availability_yields_only_the_sample_badge() {
	let outcome = run(sauvage_catalog());
	let sauvage = group_by_name(&outcome.groups, "Sauvage");

	// One member (Sauvage Parfum) has no sample; the badge claims presence,
	// not universal availability, and no stronger badge exists.
	assert!(sauvage.badges.contains(&Badge::SampleAvailable));
	assert_eq!(sauvage.badges, vec![Badge::MultipleConcentrations, Badge::SampleAvailable]);
}

#[test]
fn related_variants_carry_their_modifiers() {
	let outcome = run(sauvage_catalog());
	let sauvage = group_by_name(&outcome.groups, "Sauvage");
	let mut modifiers: Vec<_> =
		sauvage.related_variants.iter().map(|related| related.modifier.as_str()).collect();

	modifiers.sort_unstable();

	assert_eq!(modifiers, vec!["eau de toilette", "elixir", "parfum"]);
}

#[test]
fn candidate_missing_id_is_skipped_not_fatal() {
	let mut with_malformed = sauvage_catalog();

	with_malformed.push(
		CandidateBuilder::new("", "Phantom Eau de Parfum").brand("dior", "Dior").build(),
	);

	let reference = run(sauvage_catalog());
	let outcome = run(with_malformed);

	assert_eq!(outcome.metrics.skipped_count, 1);
	assert_eq!(outcome.metrics.input_count, 8);
	assert_eq!(outcome.groups.len(), reference.groups.len());

	let reference_json =
		serde_json::to_string(&reference.groups).expect("Groups must serialize.");
	let outcome_json = serde_json::to_string(&outcome.groups).expect("Groups must serialize.");

	assert_eq!(outcome_json, reference_json);
}

#[test]
fn hidden_gem_and_rare_badges_fire_on_obscure_lineages() {
	let candidates = vec![
		CandidateBuilder::new("obscure-edp", "Fougere Royale Eau de Parfum")
			.brand("houbigant", "Houbigant")
			.popularity(25.0)
			.intensity(6.0)
			.sample(8.0)
			.build(),
		CandidateBuilder::new("obscure-extrait", "Fougere Royale Extrait")
			.brand("houbigant", "Houbigant")
			.popularity(12.0)
			.intensity(8.0)
			.no_sample()
			.build(),
	];
	let outcome = run(candidates);

	assert_eq!(outcome.groups.len(), 1);

	let group = &outcome.groups[0];

	assert_eq!(group.badges, vec![
		Badge::MultipleConcentrations,
		Badge::SampleAvailable,
		Badge::HiddenGem,
		Badge::RareLimited,
	]);
}

#[test]
fn experience_tiers_span_the_sauvage_group() {
	let outcome = run(sauvage_catalog());
	let sauvage = group_by_name(&outcome.groups, "Sauvage");
	let tiers = &sauvage.experience_recommendations;

	assert_eq!(tiers.len(), 3);
	// Lowest intensity in the group.
	assert_eq!(tiers[0].variant_id, "sauvage-edt");
	// The primary.
	assert_eq!(tiers[1].variant_id, "sauvage-edp");
	// Highest intensity in the group.
	assert_eq!(tiers[2].variant_id, "sauvage-elixir");
	assert!(tiers.iter().all(|tier| !tier.reasoning.is_empty()));
}
