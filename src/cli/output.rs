use std::fmt::Write;

use anyhow::Result;
use wiki_settings::SettingsTable;

/// Render the table as `name = value` lines, credentials masked.
pub(crate) fn format_plain(table: &SettingsTable) -> String {
	let redacted = table.redacted();
	let width = redacted.iter().map(|entry| entry.name.len()).max().unwrap_or(0);
	let mut out = String::new();
	for entry in redacted.iter() {
		let _ = writeln!(out, "{:width$} = {}", entry.name, entry.value);
	}
	out
}

/// Print a plain-text representation of the settings table.
pub(crate) fn print_plain(table: &SettingsTable) {
	print!("{}", format_plain(table));
}

/// Format the settings table as a JSON object, credentials masked.
pub(crate) fn format_json(table: &SettingsTable) -> Result<String> {
	Ok(serde_json::to_string_pretty(&table.redacted())?)
}

/// Print the JSON representation of the settings table.
pub(crate) fn print_json(table: &SettingsTable) -> Result<()> {
	println!("{}", format_json(table)?);
	Ok(())
}
