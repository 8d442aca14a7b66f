use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Diagnostics for one consolidation pass. Side-channel only; nothing here
/// feeds back into grouping decisions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConsolidationMetrics {
	pub input_count: usize,
	pub skipped_count: usize,
	pub group_count: usize,
	/// Share of the input list eliminated by grouping, in percent. Zero for an
	/// empty input.
	pub reduction_percentage: f32,
	pub duration_ms: u64,
}
impl ConsolidationMetrics {
	pub fn report(
		input_count: usize,
		skipped_count: usize,
		group_count: usize,
		elapsed: Duration,
	) -> Self {
		let reduction_percentage = if input_count == 0 {
			0.0
		} else {
			(input_count.saturating_sub(group_count)) as f32 / input_count as f32 * 100.0
		};

		Self {
			input_count,
			skipped_count,
			group_count,
			reduction_percentage,
			duration_ms: elapsed.as_millis() as u64,
		}
	}
}
