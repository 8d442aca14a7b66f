use crate::variant::CandidateVariant;

/// Splits the input into grouping-eligible candidates and a skipped count.
/// Malformed records never abort the pipeline; they are excluded and surfaced
/// through the metrics report.
pub fn partition_valid(candidates: Vec<CandidateVariant>) -> (Vec<CandidateVariant>, usize) {
	let mut valid = Vec::with_capacity(candidates.len());
	let mut skipped = 0_usize;

	for candidate in candidates {
		if candidate.is_well_formed() {
			valid.push(candidate);

			continue;
		}

		skipped += 1;

		tracing::debug!(
			id = %candidate.id,
			name = %candidate.name,
			brand_id = %candidate.brand_id,
			"Skipping candidate with missing identity fields.",
		);
	}

	(valid, skipped)
}
