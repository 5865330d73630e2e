
use yard::command::{format_value, CommandParser, DEFAULT_PREFIX};
use yard::config::EngineConfig;
use yard::error::ExpressionError;
use yard::parsing::token::serialize_spaced;
use yard::{compile, evaluator};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Evaluates infix arithmetic expressions such as `2 + 3 * (4 - 1)`.
///
/// With no expressions on the command line, reads chat messages from
/// standard input and answers each calculator command on its own line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
  /// Reject duplicate decimal points, unbalanced parentheses, and
  /// misplaced operators instead of repairing them.
  #[arg(short, long)]
  strict: bool,

  /// Longest accepted expression, in characters.
  #[arg(long, value_name = "N")]
  max_len: Option<usize>,

  /// Also print the postfix form of each expression.
  #[arg(short, long)]
  postfix: bool,

  /// Load engine settings from a JSON file instead of the environment.
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Command prefix recognized when reading messages from stdin.
  #[arg(long, default_value = DEFAULT_PREFIX)]
  prefix: String,

  /// Expressions to evaluate. Leading minus signs are accepted, so
  /// `yard -5+3` works.
  #[arg(allow_hyphen_values = true)]
  expressions: Vec<String>,
}

fn main() -> ExitCode {
  init_logging();
  let args = Args::parse();
  match run(args) {
    Ok(true) => ExitCode::SUCCESS,
    Ok(false) => ExitCode::FAILURE,
    Err(err) => {
      eprintln!("{err:#}");
      ExitCode::FAILURE
    }
  }
}

fn init_logging() {
  // Default: warnings only. Can be overridden with `RUST_LOG`.
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_target(false)
    .with_writer(io::stderr)
    .init();
}

fn load_config(args: &Args) -> anyhow::Result<EngineConfig> {
  let mut config = match &args.config {
    Some(path) => {
      let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
      EngineConfig::from_json(&json)
        .with_context(|| format!("Failed to parse config file '{}'", path.display()))?
    }
    None => EngineConfig::from_env()?,
  };
  if args.strict {
    config = config.with_strict(true);
  }
  if let Some(max_len) = args.max_len {
    config = config.with_max_input_len(max_len);
  }
  Ok(config)
}

fn run(args: Args) -> anyhow::Result<bool> {
  let config = load_config(&args)?;
  if args.expressions.is_empty() {
    let parser = CommandParser::new(args.prefix);
    answer_messages(&parser, &config, io::stdin().lock(), &mut io::stdout().lock())?;
    return Ok(true);
  }
  let all_ok = evaluate_arguments(
    &args.expressions,
    &config,
    args.postfix,
    &mut io::stdout().lock(),
    &mut io::stderr().lock(),
  )?;
  Ok(all_ok)
}

/// Evaluates each expression, writing one result per line to `out`
/// and failures to `err`. Returns `Ok(false)` if any expression
/// failed to evaluate.
fn evaluate_arguments<O, E>(
  expressions: &[String],
  config: &EngineConfig,
  show_postfix: bool,
  out: &mut O,
  err: &mut E,
) -> io::Result<bool>
where O: Write,
      E: Write {
  let mut all_ok = true;
  for expression in expressions {
    let expression: String = expression.chars().filter(|c| !c.is_whitespace()).collect();
    let postfix = match compile(&expression, config) {
      Ok(postfix) => postfix,
      Err(e) => {
        writeln!(err, "{expression}: {e}")?;
        all_ok = false;
        continue;
      }
    };
    if show_postfix {
      writeln!(out, "{}", serialize_spaced(&postfix))?;
    }
    match evaluator::evaluate(postfix) {
      Ok(value) => writeln!(out, "{}", format_value(value))?,
      Err(e) => {
        writeln!(err, "{expression}: {}", ExpressionError::from(e))?;
        all_ok = false;
      }
    }
  }
  Ok(all_ok)
}

/// Answers every calculator command read from `input`, one reply per
/// line. Lines that are not commands get no reply.
fn answer_messages<R, W>(
  parser: &CommandParser,
  config: &EngineConfig,
  input: R,
  out: &mut W,
) -> anyhow::Result<()>
where R: BufRead,
      W: Write {
  for line in input.lines() {
    let line = line.context("Failed to read from standard input")?;
    if let Some(reply) = parser.respond(&line, config) {
      writeln!(out, "{reply}")?;
    }
  }
  Ok(())
}
