use clap::Parser;

fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = sillage_search::Args::parse();

	sillage_search::run(args)
}
