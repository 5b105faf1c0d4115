//! Main entry point for the keyed service demo.
//!
//! This binary wires a container with one default and several keyed
//! holidays providers, resolves each of them and prints the result, then
//! resolves the `HolidayService` consumer and lets it announce its holiday.

use clap::Parser;
use keyed_holidays::{HolidayService, HolidaysProvider};
use keyed_service::{build_service_provider, ServiceProvider};
use std::io::Write;

/// Command-line arguments for the demo.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// Log level (trace, debug, info, warn, error)
	#[arg(short, long, default_value = "warn")]
	log_level: String,
}

/// Main entry point for the demo.
///
/// This function:
/// 1. Parses command-line arguments
/// 2. Initializes logging on stderr
/// 3. Registers every service
/// 4. Resolves and prints the providers and the holiday announcement
fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Args::parse();

	use tracing_subscriber::{fmt, EnvFilter};

	let env_filter = EnvFilter::try_new(&args.log_level)?;

	fmt()
		.with_env_filter(env_filter)
		.with_writer(std::io::stderr)
		.with_target(true)
		.init();

	tracing::info!("Started");

	let services = build_service_provider()?;
	run(&services, &mut std::io::stdout().lock())?;

	tracing::info!("Stopped");
	Ok(())
}

/// Resolves the registered services and writes one line per step to `out`.
fn run<W: Write>(services: &ServiceProvider, out: &mut W) -> Result<(), Box<dyn std::error::Error>> {
	let default_provider = services.resolve::<dyn HolidaysProvider>()?;
	writeln!(out, "Default Provider: {}", default_provider.holiday_name())?;

	let japan_provider = services.resolve_keyed::<dyn HolidaysProvider>("JP")?;
	let us_provider = services.resolve_keyed::<dyn HolidaysProvider>("US")?;

	writeln!(out, "Japan Provider: {}", japan_provider.holiday_name())?;
	writeln!(out, "US Provider: {}", us_provider.holiday_name())?;

	let holiday_service = services.resolve::<HolidayService>()?;
	holiday_service.announce(out)?;

	Ok(())
}
