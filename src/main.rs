mod cli;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use tracing::info;
use wiki_settings::{environment, logging, settings};

fn main() -> Result<()> {
	let cli = parse_cli();
	logging::initialize(cli.verbose);

	let settings = settings::load(&cli.load_options())?;

	if cli.apply_timezone {
		// SAFETY: still single-threaded; nothing has been spawned yet.
		if unsafe { environment::apply_timezone(&settings) }.is_none() {
			info!("no timezone configured, TZ left unchanged");
		}
	}

	if cli.print_config {
		settings.print_summary();
	}

	if cli.check {
		info!("settings are valid");
		return Ok(());
	}

	let table = settings.table();
	match cli.output {
		OutputFormat::Plain => print_plain(&table),
		OutputFormat::Json => print_json(&table)?,
	}

	Ok(())
}
