use std::cmp::Ordering;

use crate::variant::{CandidateVariant, MemberVariant};

/// Descending float order with NaN pushed last, so a poisoned score can never
/// reorder an otherwise deterministic result.
pub fn cmp_f32_desc(a: f32, b: f32) -> Ordering {
	match (a.is_nan(), b.is_nan()) {
		(true, true) => Ordering::Equal,
		(true, false) => Ordering::Greater,
		(false, true) => Ordering::Less,
		(false, false) => b.total_cmp(&a),
	}
}

/// Ascending float order, NaN last.
pub fn cmp_f32_asc(a: f32, b: f32) -> Ordering {
	match (a.is_nan(), b.is_nan()) {
		(true, true) => Ordering::Equal,
		(true, false) => Ordering::Greater,
		(false, true) => Ordering::Less,
		(false, false) => a.total_cmp(&b),
	}
}

/// Ascending price order; a variant with no sample price sorts last.
pub fn cmp_sample_price(a: Option<f32>, b: Option<f32>) -> Ordering {
	match (a, b) {
		(Some(price_a), Some(price_b)) => cmp_f32_asc(price_a, price_b),
		(Some(_), None) => Ordering::Less,
		(None, Some(_)) => Ordering::Greater,
		(None, None) => Ordering::Equal,
	}
}

/// Primary ranking: popularity desc, samplable first, cheaper sample first,
/// id asc. The id tie-break makes the winner fully deterministic.
pub fn cmp_primary(a: &CandidateVariant, b: &CandidateVariant) -> Ordering {
	cmp_f32_desc(a.popularity_score, b.popularity_score)
		.then_with(|| b.sample_available.cmp(&a.sample_available))
		.then_with(|| cmp_sample_price(a.sample_price, b.sample_price))
		.then_with(|| a.id.cmp(&b.id))
}

/// Orders cluster members by primary rank in place; the first member is the
/// group's representative.
pub fn rank_members(members: &mut [MemberVariant]) {
	members.sort_by(|a, b| cmp_primary(&a.candidate, &b.candidate));
}
