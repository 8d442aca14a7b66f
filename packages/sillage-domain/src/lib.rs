pub mod lineage;
pub mod normalize;

mod error;

pub use error::{Error, Result};
