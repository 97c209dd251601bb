use std::{error::Error, process::exit, time::Duration};
use tokio::{time, signal as tokio_signal};
use tracing::{event, Level};

use tmstr::{Formatter, Zone};

mod args;
mod config;
mod logging;
mod signal;


#[tokio::main]
async fn main() {
	// Parse CLI args
	let args = args::args();

	// Parse config
	let config = match config::parse(&args.config_path, args.config_explicit) {
		Ok(config) => config,
		Err(err) => {
			eprintln!("Failed to parse {}: {}", &args.config_path, err);
			exit(1);
		}
	};

	// Initialize logging destinations
	let guards = config.log.init(args.verbose);
	event!(Level::DEBUG, "tmstr started");

	let result = run(&args, &config).await;
	if let Err(err) = &result {
		event!(Level::ERROR, "{}", err);
		eprintln!("{}", err);
	}
	drop(guards); // Flush logs before exiting
	if result.is_err() {
		exit(1);
	}
}

async fn run(args: &args::Args, config: &config::Config) -> Result<(), Box<dyn Error>> {
	// Flag/env format, then config, then the default
	let mut spec = args.format.clone()
		.or_else(|| config.format.clone())
		.unwrap_or_else(|| tmstr::DEFAULT_FORMAT.to_owned());
	if args.utc || config.utc {
		spec = to_utc(&spec);
	}
	let mut formatter = Formatter::with_format(&spec)?;

	if args.probe {
		println!("{}", formatter.recommended_len());
		return Ok(());
	}
	match args.watch {
		Some(period) => watch(&mut formatter, period).await,
		None => {
			for _ in 0..args.count {
				println!("{}", formatter.now()?);
			}
			Ok(())
		}
	}
}

/// Print a timestamp every `period` until SIGINT/SIGTERM
async fn watch(formatter: &mut Formatter, period: Duration) -> Result<(), Box<dyn Error>> {
	// tokio::select! must be used to catch signals for all future awaits
	let ctrl_c = tokio_signal::ctrl_c();
	let mut sigterm_channel = signal::terminate().or_else(|err| {
		eprintln!("Failed to create SIGTERM channel");
		Err(err)
	})?;
	let sigterm = sigterm_channel.recv();
	tokio::pin!(ctrl_c);
	tokio::pin!(sigterm);

	let mut interval = time::interval(period);
	event!(Level::INFO, "Printing a timestamp every {:?}", period);
	loop {
		tokio::select! {
			_ = interval.tick() => println!("{}", formatter.now()?),
			Ok(_) = &mut ctrl_c => break,
			Some(_) = &mut sigterm => break
		}
	}
	event!(Level::INFO, "Stopped watching");
	Ok(())
}

/// Switch a local-time format to UTC, leaving other prefixes alone
fn to_utc(spec: &str) -> String {
	match spec.strip_prefix(Zone::Local.prefix()) {
		Some(pattern) => format!("{}{}", Zone::Utc.prefix(), pattern),
		None => spec.to_owned()
	}
}
