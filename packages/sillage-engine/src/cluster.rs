use std::collections::HashMap;

use sillage_domain::{lineage::LineageKey, normalize::NoiseDictionary};

use crate::variant::{CandidateVariant, MemberVariant};

/// One connected component of the lineage graph, in input order.
#[derive(Debug)]
pub struct LineageCluster {
	pub members: Vec<MemberVariant>,
}

/// Partitions candidates into lineage clusters.
///
/// Candidates are bucketed by `brand_id` first, then grouped within a bucket
/// by core-token key. Because the pairwise lineage rule is an equivalence
/// relation (same brand, exactly equal core tokens), hash-grouping by key
/// yields the same partition as the transitive closure of pairwise edges while
/// keeping total work near O(n).
pub fn cluster_by_lineage(
	candidates: Vec<CandidateVariant>,
	dictionary: &NoiseDictionary,
) -> Vec<LineageCluster> {
	let mut brand_buckets: HashMap<String, Vec<MemberVariant>> = HashMap::new();

	for candidate in candidates {
		let name = dictionary.normalize(&candidate.name);

		brand_buckets
			.entry(candidate.brand_id.clone())
			.or_default()
			.push(MemberVariant { candidate, name });
	}

	let mut clusters = Vec::new();

	for (_, bucket) in brand_buckets {
		let mut by_key: HashMap<LineageKey, Vec<MemberVariant>> = HashMap::new();
		let mut key_order: Vec<LineageKey> = Vec::new();

		for member in bucket {
			let key = LineageKey::new(&member.candidate.brand_id, &member.name);

			if !by_key.contains_key(&key) {
				key_order.push(key.clone());
			}

			by_key.entry(key).or_default().push(member);
		}

		// Drain in first-seen order so cluster construction stays independent
		// of hash iteration order.
		for key in key_order {
			if let Some(members) = by_key.remove(&key) {
				clusters.push(LineageCluster { members });
			}
		}
	}

	clusters
}
