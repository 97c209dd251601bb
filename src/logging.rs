use std::io;
use std::path::Path;

use serde::Deserialize;
use tracing_appender::{non_blocking, non_blocking::{NonBlocking, WorkerGuard}, rolling};
use tracing_subscriber::{registry, Layer, Registry};
use tracing_subscriber::prelude::*;

mod filter;
mod format;
mod time_format;

pub type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync + 'static>;

#[derive(Deserialize)]
pub struct Config {
	// One of full (default), pretty, compact, json
	pub format: Option<String>,
	#[serde(default = "default_enabled")]
	pub color: bool,
	pub file: Option<FileConfig>
}

impl Default for Config {
	fn default() -> Self {
		Config {
			format: None,
			color: default_enabled(),
			file: None
		}
	}
}

// Config for file logging (with optional rotation)
#[derive(Deserialize)]
pub struct FileConfig {
	#[serde(default = "default_enabled")]
	enabled: bool,
	path: String,
	#[serde(default = "FileConfig::default_rotation")]
	rotation: String,
	format: Option<String>
}

impl FileConfig {
	fn default_rotation() -> String {
		"daily".into()
	}

	fn writer(&self) -> Option<(NonBlocking, WorkerGuard)> {
		if !self.enabled {
			return None;
		}
		let path = Path::new(&self.path);
		let dir = match path.parent() {
			Some(d) => d,
			None => return None
		};
		let file = match path.file_name() {
			Some(d) => d,
			None => return None
		};

		let file_appender = match self.rotation.as_str() {
			"daily" => rolling::daily(dir, file),
			"hourly" => rolling::hourly(dir, file),
			"minutely" => rolling::minutely(dir, file),
			_ => rolling::never(dir, file)
		};
		Some(non_blocking(file_appender))
	}
}

impl Config {
	/// Install the global subscriber: stderr plus the optional log file.
	/// The returned guards must be held until logging is finished.
	pub fn init(&self, verbose: bool) -> Vec<WorkerGuard> {
		let (layers, guards) = self.layers::<Registry>();
		// Fails only if a subscriber is already installed
		let _ = registry()
			.with(layers)
			.with(filter::filter(verbose))
			.try_init();
		guards
	}

	fn layers<S>(&self) -> (Vec<BoxedLayer<S>>, Vec<WorkerGuard>)
	where S: tracing::Subscriber + for<'a> registry::LookupSpan<'a>
	{
		let mut layers = Vec::new();
		let mut guards = Vec::new();

		let (stderr, _guard) = non_blocking(io::stderr());
		let (layer, guard) = format::guarded_fmt_layer(stderr, _guard, self.format.as_deref(), self.color);
		layers.extend(layer);
		guards.extend(guard);

		if let Some(file) = &self.file {
			if let Some((writer, _guard)) = file.writer() {
				let (layer, guard) = format::guarded_fmt_layer(writer, _guard, file.format.as_deref(), false);
				layers.extend(layer);
				guards.extend(guard);
			}
		}
		(layers, guards)
	}
}

fn default_enabled() -> bool {
	true
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn disabled_file_has_no_writer() {
		let file: FileConfig = serde_json::from_str(r#"{ "enabled": false, "path": "/tmp/tmstr-test.log" }"#).unwrap();
		assert!(file.writer().is_none());
	}

	#[test]
	fn file_defaults_to_daily_rotation() {
		let file: FileConfig = serde_json::from_str(r#"{ "path": "/tmp/tmstr-test.log" }"#).unwrap();
		assert!(file.enabled);
		assert_eq!(file.rotation, "daily");
	}

	#[test]
	fn one_layer_per_destination() {
		let dir = std::env::temp_dir().join("tmstr-logging-test.log");
		let config: Config = serde_json::from_value(serde_json::json!({
			"format": "json",
			"file": { "path": dir, "rotation": "never" }
		})).unwrap();
		let (layers, guards) = config.layers::<Registry>();
		assert_eq!(layers.len(), 2);
		assert_eq!(guards.len(), 2);
	}
}
