//! Candidate fixtures for engine and scenario tests.

use sillage_engine::CandidateVariant;

pub struct CandidateBuilder {
	inner: CandidateVariant,
}
impl CandidateBuilder {
	pub fn new(id: &str, name: &str) -> Self {
		Self {
			inner: CandidateVariant {
				id: id.to_string(),
				name: name.to_string(),
				..CandidateVariant::default()
			},
		}
	}

	pub fn brand(mut self, brand_id: &str, brand: &str) -> Self {
		self.inner.brand_id = brand_id.to_string();
		self.inner.brand = brand.to_string();

		self
	}

	pub fn popularity(mut self, score: f32) -> Self {
		self.inner.popularity_score = score;

		self
	}

	pub fn intensity(mut self, score: f32) -> Self {
		self.inner.intensity_score = score;

		self
	}

	pub fn longevity(mut self, hours: f32) -> Self {
		self.inner.longevity_hours = hours;

		self
	}

	pub fn sample(mut self, price: f32) -> Self {
		self.inner.sample_available = true;
		self.inner.sample_price = Some(price);

		self
	}

	pub fn no_sample(mut self) -> Self {
		self.inner.sample_available = false;
		self.inner.sample_price = None;

		self
	}

	pub fn family(mut self, family: &str) -> Self {
		self.inner.family = family.to_string();

		self
	}

	pub fn note(mut self, note: &str) -> Self {
		self.inner.notes.push(note.to_string());

		self
	}

	pub fn build(self) -> CandidateVariant {
		self.inner
	}
}

/// The lineage-disambiguation catalog: four Sauvage concentrations, two Eau
/// Sauvage variants, and one Bleu de Chanel singleton.
pub fn sauvage_catalog() -> Vec<CandidateVariant> {
	vec![
		CandidateBuilder::new("sauvage-edp", "Sauvage Eau de Parfum")
			.brand("dior", "Dior")
			.popularity(95.0)
			.intensity(7.0)
			.longevity(9.0)
			.sample(14.0)
			.family("aromatic fougere")
			.build(),
		CandidateBuilder::new("sauvage-edt", "Sauvage Eau de Toilette")
			.brand("dior", "Dior")
			.popularity(90.0)
			.intensity(5.5)
			.longevity(7.0)
			.sample(11.0)
			.family("aromatic fougere")
			.build(),
		CandidateBuilder::new("sauvage-parfum", "Sauvage Parfum")
			.brand("dior", "Dior")
			.popularity(70.0)
			.intensity(8.5)
			.longevity(11.0)
			.no_sample()
			.family("aromatic fougere")
			.build(),
		CandidateBuilder::new("sauvage-elixir", "Sauvage Elixir")
			.brand("dior", "Dior")
			.popularity(65.0)
			.intensity(9.5)
			.longevity(14.0)
			.sample(24.0)
			.family("aromatic fougere")
			.build(),
		CandidateBuilder::new("eau-sauvage", "Eau Sauvage")
			.brand("dior", "Dior")
			.popularity(60.0)
			.intensity(3.5)
			.longevity(5.0)
			.sample(9.0)
			.family("citrus chypre")
			.build(),
		CandidateBuilder::new("eau-sauvage-parfum", "Eau Sauvage Parfum")
			.brand("dior", "Dior")
			.popularity(40.0)
			.intensity(6.0)
			.longevity(8.0)
			.no_sample()
			.family("citrus chypre")
			.build(),
		CandidateBuilder::new("bleu-edp", "Bleu de Chanel EDP")
			.brand("chanel", "Chanel")
			.popularity(92.0)
			.intensity(6.5)
			.longevity(9.0)
			.sample(13.0)
			.family("woody aromatic")
			.build(),
	]
}
