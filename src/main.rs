mod diagnostics;
mod env;
mod error;
mod exec;
mod output;
mod utils;

use anyhow::Result;
use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};
use env::Environment;
use log::{debug, error};
use std::path::PathBuf;
use std::process;

const LOG_LEVEL_VAR: &str = "PLUGIN_LOG_LEVEL";
const ENV_NAME_VAR: &str = "PLUGIN_ENV_NAME";
const SECRET_VAR: &str = "PLUGIN_SECRET";
const OUTPUT_FILE_VAR: &str = "DRONE_OUTPUT";
const SECRET_OUTPUT_FILE_VAR: &str = "HARNESS_OUTPUT_SECRET_FILE";

/// Promote environment variables of the current pipeline step into the
/// pipeline output file, or the secret output file, for later steps to consume
///
/// Every option falls back to its pipeline variable when not given on the
/// command line. Empty or unrecognised values never abort the step.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Set logging level [env: PLUGIN_LOG_LEVEL] [default: info]
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Comma-separated names of the environment variables to export [env: PLUGIN_ENV_NAME]
    #[arg(long, value_name = "NAMES")]
    env_name: Option<String>,

    /// Write to the secret output file instead of the output file [env: PLUGIN_SECRET]
    #[arg(
        long,
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new(),
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    secret: Option<bool>,

    /// File receiving exported values [env: DRONE_OUTPUT]
    #[arg(long, value_name = "PATH")]
    output_file: Option<String>,

    /// File receiving exported values the pipeline masks as secrets [env: HARNESS_OUTPUT_SECRET_FILE]
    #[arg(long, value_name = "PATH")]
    secret_output_file: Option<String>,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Debug)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Unknown and empty names fall back to `Info`.
    fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "panic" | "fatal" | "error" => LogLevel::Error,
            "warn" | "warning" => LogLevel::Warn,
            "debug" => LogLevel::Debug,
            "trace" => LogLevel::Trace,
            _ => LogLevel::Info,
        }
    }

    fn to_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "t" | "true" | "y" | "yes" | "on"
    )
}

// The command line wins; otherwise the pipeline variable, even when empty.
fn flag_or_env<E: Environment>(flag: &Option<String>, env: &E, var: &str) -> Option<String> {
    flag.clone().or_else(|| env.lookup(var))
}

impl Cli {
    fn log_level<E: Environment>(&self, env: &E) -> LogLevel {
        flag_or_env(&self.log_level, env, LOG_LEVEL_VAR)
            .map(|name| LogLevel::from_name(&name))
            .unwrap_or(LogLevel::Info)
    }

    fn output_config<E: Environment>(&self, env: &E) -> output::Config {
        let mut config = output::Config::new();
        config.output_file =
            flag_or_env(&self.output_file, env, OUTPUT_FILE_VAR).map(PathBuf::from);
        config.secret_output_file =
            flag_or_env(&self.secret_output_file, env, SECRET_OUTPUT_FILE_VAR).map(PathBuf::from);
        config
    }

    fn request<E: Environment>(&self, env: &E) -> exec::Request {
        let secret = match self.secret {
            Some(secret) => secret,
            None => env.lookup(SECRET_VAR).is_some_and(|v| is_truthy(&v)),
        };
        exec::Request {
            env_names: flag_or_env(&self.env_name, env, ENV_NAME_VAR).unwrap_or_default(),
            secret,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let process_env = env::ProcessEnv;

    // Initialize logger
    env_logger::Builder::new()
        .filter_level(cli.log_level(&process_env).to_filter())
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    debug!("CLI arguments: {:#?}", cli);

    let output_config = cli.output_config(&process_env);
    let request = cli.request(&process_env);
    let exporter = exec::Exporter::new(
        &process_env,
        &diagnostics::LogDiagnostics,
        &output_config,
    );

    if let Err(err) = exporter.run(&request) {
        error!("{}", err);
        process::exit(1);
    }

    Ok(())
}
