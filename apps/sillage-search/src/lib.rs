//! Demonstration harness for the variant consolidation engine: feed it a JSON
//! candidate list, get consolidated groups plus metrics on stdout. The real
//! search/API boundary lives elsewhere; this binary exists to exercise the
//! engine against catalog extracts.

use std::{fs, path::PathBuf};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use sillage_engine::CandidateVariant;

#[derive(Debug, Parser)]
#[command(
	version = sillage_cli::VERSION,
	rename_all = "kebab",
	styles = sillage_cli::styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: PathBuf,
	/// JSON array of candidate variants, as produced by the upstream search.
	#[arg(long, short = 'i', value_name = "FILE")]
	pub input: PathBuf,
	/// Pretty-print the output JSON.
	#[arg(long)]
	pub pretty: bool,
}

pub fn run(args: Args) -> color_eyre::Result<()> {
	let config = sillage_config::load(&args.config)?;

	init_tracing(&config)?;

	let raw = fs::read_to_string(&args.input)?;
	let candidates: Vec<CandidateVariant> = serde_json::from_str(&raw)?;

	tracing::info!(candidate_count = candidates.len(), "Loaded candidate variants.");

	let outcome = sillage_engine::consolidate(candidates, &config.consolidation)?;
	let rendered = if args.pretty {
		serde_json::to_string_pretty(&outcome)?
	} else {
		serde_json::to_string(&outcome)?
	};

	println!("{rendered}");

	Ok(())
}

fn init_tracing(config: &sillage_config::Config) -> color_eyre::Result<()> {
	let filter =
		EnvFilter::try_new(&config.service.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

	Ok(())
}
