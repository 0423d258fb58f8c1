// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use neco::{
  constants::{DEFAULT_LOG_TEXT, DEFAULT_SUFFIX},
  NecoConfig, Notifier, Outcome,
};
use std::{
  path::{Path, PathBuf},
  time::Duration,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "neco", version, about = "Send a Telegram ping when a job is done")]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
  /// Save credentials to the config file
  Configure {
    #[arg(long)]
    token: String,
    #[arg(long, allow_hyphen_values = true)]
    chat_id: String,
    #[arg(long, default_value_t = 5.0)]
    timeout: f64,
    #[arg(long)]
    config: Option<PathBuf>,
  },
  /// Send a message
  Send {
    text: String,
    #[arg(long)]
    token: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    chat_id: Option<String>,
    #[arg(long)]
    timeout: Option<f64>,
    #[arg(long)]
    config: Option<PathBuf>,
    /// Persist explicitly given credentials
    #[arg(long)]
    save: bool,
    #[arg(long, default_value = DEFAULT_SUFFIX, hide_default_value = true)]
    suffix: String,
    /// Fail on delivery errors instead of ignoring them
    #[arg(long)]
    strict: bool,
  },
  /// Print a timestamped line
  Log {
    #[arg(default_value = DEFAULT_LOG_TEXT)]
    text: String,
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    tz: i32,
  },
  /// Print a timestamped line and send it
  LogTg {
    #[arg(default_value = DEFAULT_LOG_TEXT)]
    text: String,
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    tz: i32,
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    strict: bool,
  },
}

#[cfg(debug_assertions)]
fn setup_logging() {
  tracing_subscriber::fmt()
    .with_env_filter(env_filter())
    .with_writer(std::io::stderr)
    .with_file(true)
    .with_line_number(true)
    .with_thread_ids(true)
    .init();
}

#[cfg(not(debug_assertions))]
fn setup_logging() {
  tracing_subscriber::fmt()
    .with_env_filter(env_filter())
    .with_writer(std::io::stderr)
    .init();
}

fn env_filter() -> EnvFilter {
  EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

fn seconds(secs: f64) -> Result<Duration> {
  Duration::try_from_secs_f64(secs).with_context(|| format!("Invalid timeout: {}", secs))
}

fn save_credentials(
  token: String,
  chat_id: String,
  timeout: f64,
  path: Option<&Path>,
) -> Result<PathBuf> {
  let config = NecoConfig::new(token, chat_id).with_timeout(seconds(timeout)?);
  Ok(config.save(path)?)
}

#[tokio::main]
async fn main() -> Result<()> {
  setup_logging();
  let cli = Cli::parse();

  match cli.command {
    Command::Configure {
      token,
      chat_id,
      timeout,
      config: config_path,
    } => {
      let path = save_credentials(token, chat_id, timeout, config_path.as_deref())?;
      info!("Credentials saved to {}", path.display());
    }
    Command::Send {
      text,
      token,
      chat_id,
      timeout,
      config,
      save,
      suffix,
      strict,
    } => {
      let mut neco = Notifier::new()?;
      let mut request = neco.message(&text).suffix(&suffix).silent(!strict);
      if let Some(token) = token.as_deref() {
        request = request.token(token);
      }
      if let Some(chat_id) = chat_id.as_deref() {
        request = request.chat_id(chat_id);
      }
      if let Some(timeout) = timeout {
        request = request.timeout(seconds(timeout)?);
      }
      if let Some(config) = config.as_deref() {
        request = request.config_path(config);
      }
      if save {
        request = request.save_credentials();
      }
      report(request.send(&mut neco).await?);
    }
    Command::Log { text, tz } => {
      neco::log(&text, tz);
    }
    Command::LogTg {
      text,
      tz,
      config,
      strict,
    } => {
      let mut neco = Notifier::new()?;
      report(
        neco
          .log_tg(&text, tz, config.as_deref(), !strict)
          .await
          .context("Failed to send notification")?,
      );
    }
  }

  Ok(())
}

fn report(outcome: Outcome) {
  match outcome {
    Outcome::Sent => info!("Notification sent"),
    Outcome::Dropped => info!("Notification dropped"),
  }
}
