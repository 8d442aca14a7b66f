use crate::normalize::NormalizedName;

/// Identity of a product line: the brand plus the core token sequence left
/// after noise removal. The stripped modifier is deliberately not part of the
/// key; it is what varies between concentrations of one line.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct LineageKey {
	pub brand_id: String,
	pub core_tokens: Vec<String>,
}
impl LineageKey {
	pub fn new(brand_id: &str, name: &NormalizedName) -> Self {
		Self { brand_id: brand_id.to_string(), core_tokens: name.core_tokens.clone() }
	}
}

/// Pairwise lineage decision: same brand and exactly equal core token
/// sequences. Token overlap is not enough; "sauvage" and "eau sauvage" share a
/// token yet denote different lines.
pub fn same_lineage(
	brand_a: &str,
	name_a: &NormalizedName,
	brand_b: &str,
	name_b: &NormalizedName,
) -> bool {
	brand_a == brand_b && name_a.core_tokens == name_b.core_tokens
}
