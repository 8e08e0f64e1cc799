#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod cmd;

#[derive(Parser)]
#[command(name = "xmlavro", about = "Convert XML documents into Avro generic values")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	Convert(cmd::convert::Args),
	Schema(cmd::schema::Args),
}

fn main() {
	init_tracing();
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> xmlavro::convert::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Convert(args) => cmd::convert::run(args),
		Commands::Schema(args) => cmd::schema::run(args),
	}
}

// Diagnostics go to stderr; stdout carries converted values.
fn init_tracing() {
	tracing_subscriber::registry()
		.with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "xmlavro=warn".into()))
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
		.init();
}
