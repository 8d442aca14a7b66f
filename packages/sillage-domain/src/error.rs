pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Noise dictionary must contain at least one phrase.")]
	EmptyNoiseDictionary,
	#[error("Noise phrase {phrase:?} normalizes to nothing.")]
	BlankNoisePhrase { phrase: String },
}
