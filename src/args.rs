use std::process::exit;
use std::time::Duration;
use std::env;

/// Program arguments gathered from CLI args and/or env variables
pub struct Args {
	pub verbose: bool,
	pub config_path: String,
	// Whether the config path was given explicitly (a missing file is then an error)
	pub config_explicit: bool,
	pub format: Option<String>,
	pub utc: bool,
	pub probe: bool,
	pub count: usize,
	pub watch: Option<Duration>
}

const CONFIG_PATH_ENV: &str = "TMSTR_CONFIG";
const CONFIG_PATH_DEFAULT: &str = "tmstr.json";
const FORMAT_ENV: &str = "TMSTR_FORMAT";

const USAGE: &str = "tmstr [-f/--format SPEC] [-s/--sortable] [-u/--utc] [-n/--count N] [-w/--watch MS] [-p/--probe] [-c/--config /path/to/tmstr.json] [-v/--verbose] [-V/--version] [-h/--help]";

/// Parse program arguments
pub fn args() -> Args {
	parse(env::args().collect())
}

fn parse(args: Vec<String>) -> Args {
	// Argument values to be set
	let mut verbose = false;
	let mut config_path: Option<String> = None;
	let mut format: Option<String> = None;
	let mut sortable = false;
	let mut utc = false;
	let mut probe = false;
	let mut count = 1;
	let mut watch: Option<Duration> = None;

	for (i, arg) in args.iter().enumerate() {
		match arg.as_str() {
			"-h" | "--help" => {
				println!("{}", "Usage:".to_owned() + "\n\t" + USAGE);
				exit(0);
			},
			"-V" | "--version" => {
				println!("tmstr {} (built {})", env!("CARGO_PKG_VERSION"), env!("BUILD_DATE"));
				exit(0);
			},
			"-v" | "--verbose" => {
				verbose = true;
			},
			"-s" | "--sortable" => {
				sortable = true;
			},
			"-u" | "--utc" => {
				utc = true;
			},
			"-p" | "--probe" => {
				probe = true;
			},
			"-c" | "--config" if i < args.len() - 1 => {
				config_path = Some(args[i+1].to_string());
			},
			"-f" | "--format" if i < args.len() - 1 => {
				format = Some(args[i+1].to_string());
			},
			"-n" | "--count" if i < args.len() - 1 => {
				count = number(arg, &args[i+1]) as usize;
			},
			"-w" | "--watch" if i < args.len() - 1 => {
				watch = Some(Duration::from_millis(number(arg, &args[i+1]).max(1)));
			},
			_ => {}
		}
	}
	// -f wins over -s, both win over the environment
	if format == None && sortable {
		format = Some(tmstr::SORTABLE_FORMAT.to_owned());
	}
	if format == None {
		if let Ok(spec) = env::var(FORMAT_ENV) {
			format = Some(spec);
		}
	}
	let config_explicit = config_path.is_some();
	if config_path == None {
		if let Ok(path) = env::var(CONFIG_PATH_ENV) {
			config_path = Some(path);
		} else if verbose {
			eprintln!("{} is not set, defaulting to {}", CONFIG_PATH_ENV, CONFIG_PATH_DEFAULT);
		}
	}

	Args {
		verbose,
		config_explicit: config_explicit || env::var(CONFIG_PATH_ENV).is_ok(),
		config_path: if let Some(path) = config_path { path } else { CONFIG_PATH_DEFAULT.to_owned() },
		format,
		utc,
		probe,
		count,
		watch
	}
}

fn number(flag: &str, value: &str) -> u64 {
	match value.parse() {
		Ok(n) => n,
		Err(e) => {
			eprintln!("Invalid value for {}: {} ({})", flag, value, e);
			exit(2);
		}
	}
}
