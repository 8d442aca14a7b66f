pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// Caller setup mistake, distinct from per-candidate data issues which are
	/// skipped and counted instead.
	#[error("Invalid consolidation configuration: {message}")]
	Config { message: String },
	#[error(transparent)]
	Domain(#[from] sillage_domain::Error),
}
impl From<sillage_config::Error> for Error {
	fn from(err: sillage_config::Error) -> Self {
		Self::Config { message: err.to_string() }
	}
}
