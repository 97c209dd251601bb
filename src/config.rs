use std::{fs::File, error::Error, io::ErrorKind};
use serde::Deserialize;

#[derive(Deserialize, Default)]
pub struct Config {
	// Format specification used when none is given on the command line
	#[serde(default)]
	pub format: Option<String>,
	// Render in UTC regardless of the format's prefix
	#[serde(default)]
	pub utc: bool,
	#[serde(default)]
	pub log: crate::logging::Config
}

/// Parse a JSON config file.
/// A missing file is only an error when the path was asked for explicitly.
pub fn parse(path: &str, required: bool) -> Result<Config, Box<dyn Error>> {
	let config_file = match File::open(path) {
		Ok(f) => f,
		Err(e) if !required && e.kind() == ErrorKind::NotFound => return Ok(Config::default()),
		Err(e) => return Err(e.into())
	};
	let config: Config = serde_json::from_reader(config_file)?;
	Ok(config)
}
