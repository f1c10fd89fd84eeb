use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use tracing::{debug, warn};

use optres_core::app::env;
use optres_core::app::tracing::TracingBuilder;

use crate::eval::{Evaluation, Output, parse_input};

mod eval;

/// Evaluates a possibly-absent JSON value: `null` or an omitted value is `None`, anything else is `Some`.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
  /// JSON input value. Absent when omitted.
  input: Option<String>,
  /// JSON pointer to map the value to, e.g. `/crate/name`. Can be repeated; applied in order.
  #[arg(short, long = "pointer")]
  pointers: Vec<String>,
  /// JSON value to print instead when there is no value.
  #[arg(short, long, conflicts_with = "strict")]
  default: Option<String>,
  /// Fail when there is no value.
  #[arg(short, long)]
  strict: bool,
  /// Log debug output to the console, overriding `CONSOLE_LOG`.
  #[arg(short, long)]
  verbose: bool,
  /// File to write logs to.
  #[arg(long, env = "OPTRES_LOG_FILE")]
  log_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
  let dotenv = env::load_dotenv_into_env();
  let args = Args::parse();

  let mut tracing = TracingBuilder::default()
    .with_log_file_path_opt(args.log_file.clone());
  if args.verbose {
    tracing = tracing.with_console_filter("debug");
  }
  let _tracing = tracing.build();
  match dotenv {
    Ok(dotenv_path) => debug!(?dotenv_path, "loaded environment"),
    Err(cause) => warn!(%cause, "ignoring .env file; could not load it"),
  }
  debug!(?args, "starting");

  let output = match (&args.default, args.strict) {
    (Some(default), _) => Output::Default(serde_json::from_str(default)?),
    (None, true) => Output::Strict,
    (None, false) => Output::Matched,
  };
  let evaluation = Evaluation::new(args.pointers, output);
  let input = parse_input(args.input.as_deref())?;
  println!("{}", evaluation.render(input)?);

  Ok(())
}
