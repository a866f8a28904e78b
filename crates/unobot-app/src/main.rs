mod cli;
mod repl;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};
use unobot_ai::{OpenAiClient, OpenAiConfig, Session};
use unobot_common::defaults::API_KEY_VAR;
use unobot_common::UnobotError;
use unobot_config::{LogLevel, UnobotConfig};
use unobot_manual::ManualContext;

use crate::repl::Mode;

type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// Which setting chose the active log directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogSource {
    Flag,
    Env,
    Config,
}

/// Pick the log directive: `--log-level`, then `RUST_LOG`, then the config.
///
/// Blank values and values that do not parse as a filter are skipped.
fn log_directive(
    flag: Option<&str>,
    rust_log: Option<&str>,
    config_level: LogLevel,
) -> (String, LogSource) {
    [(flag, LogSource::Flag), (rust_log, LogSource::Env)]
        .into_iter()
        .find_map(|(directive, source)| {
            let directive = directive.filter(|d| !d.trim().is_empty())?;
            EnvFilter::try_new(directive)
                .ok()
                .map(|_| (directive.to_string(), source))
        })
        .unwrap_or_else(|| (config_level.as_directive().to_string(), LogSource::Config))
}

/// Install the stderr subscriber. Logs go to stderr so they never
/// interleave with answers on stdout.
fn init_logging(directive: &str) -> FilterHandle {
    let (filter, handle) = reload::Layer::new(EnvFilter::new(directive));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
    handle
}

/// Re-pick the log directive once `.env` and the config are loaded.
fn apply_log_directive(
    handle: &FilterHandle,
    flag: Option<&str>,
    rust_log: Option<&str>,
    config_level: LogLevel,
) {
    let (directive, source) = log_directive(flag, rust_log, config_level);
    match handle.reload(EnvFilter::new(&directive)) {
        Ok(()) => tracing::debug!(%directive, ?source, "log filter applied"),
        Err(e) => tracing::warn!("failed to apply log filter '{directive}': {e}"),
    }
}

/// Load `.env` and the config file, falling back to defaults on error.
fn load_settings(args: &cli::Args, cwd: &Path) -> UnobotConfig {
    // Pick up OPENAI_API_KEY from a nearby .env before anything reads it.
    unobot_config::load_env_file(&unobot_config::default_env_candidates(cwd));

    unobot_config::load_config(args.config.as_deref()).unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        UnobotConfig::default()
    })
}

async fn run(args: cli::Args, config: UnobotConfig) -> Result<(), UnobotError> {
    // The manual is required: no interaction without it.
    let manual_path = args.manual.clone().unwrap_or(config.manual.path);
    let manual = ManualContext::load(&manual_path)?;
    tracing::info!(
        context_model = %config.openai.context_model,
        pages = manual.page_count(),
        "manual context prepared"
    );

    let openai = OpenAiConfig::new(unobot_config::api_key_from_env())
        .with_model(args.model.unwrap_or(config.openai.model))
        .with_temperature(config.openai.temperature)
        .with_base_url(config.openai.base_url);
    if !openai.has_credential() {
        tracing::warn!("{API_KEY_VAR} is not set; questions will fail until it is");
    }
    tracing::info!(model = %openai.model, "completion client ready");

    let client = OpenAiClient::new(openai);
    let mut session = Session::new(manual.text());
    let mode = if args.no_stream {
        Mode::Blocking
    } else {
        Mode::Stream
    };

    match args.ask {
        Some(question) => {
            let mut stdout = std::io::stdout();
            let answered = repl::answer(&mut session, &client, mode, &question, &mut stdout).await?;
            if !answered {
                return Err(UnobotError::Ai("question could not be answered".into()));
            }
        }
        None => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            repl::run(&mut session, &client, mode, stdin, std::io::stdout()).await?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::parse();
    let flag = args.log_level.as_deref();

    // Logging comes first so .env and config loading are visible.
    let rust_log = std::env::var("RUST_LOG").ok();
    let (directive, source) = log_directive(flag, rust_log.as_deref(), LogLevel::default());
    let filter = init_logging(&directive);
    tracing::info!("unobot v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(flag) = flag.filter(|_| source != LogSource::Flag) {
        tracing::warn!("invalid --log-level '{flag}', ignoring it");
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = load_settings(&args, &cwd);

    // RUST_LOG may have come from .env.
    let rust_log = std::env::var("RUST_LOG").ok();
    apply_log_directive(&filter, flag, rust_log.as_deref(), config.logging.level);

    match run(args, config).await {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    use clap::Parser;

    use super::*;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    /// A scoped subscriber shaped like `init_logging`, writing into memory.
    fn capture(
        directive: &str,
    ) -> (impl tracing::Subscriber + Send + Sync, FilterHandle, Captured) {
        let captured = Captured::default();
        let writer = captured.clone();
        let (filter, handle) = reload::Layer::new(EnvFilter::new(directive));
        let subscriber = tracing_subscriber::registry().with(filter).with(
            fmt::layer()
                .with_ansi(false)
                .with_writer(move || writer.clone()),
        );
        (subscriber, handle, captured)
    }

    #[test]
    fn flag_wins_over_env_and_config() {
        let picked = log_directive(Some("unobot=debug"), Some("unobot=error"), LogLevel::Warning);
        assert_eq!(picked, ("unobot=debug".to_string(), LogSource::Flag));
    }

    #[test]
    fn env_wins_over_config() {
        let picked = log_directive(None, Some("unobot_ai=trace"), LogLevel::Warning);
        assert_eq!(picked, ("unobot_ai=trace".to_string(), LogSource::Env));
    }

    #[test]
    fn config_is_the_fallback() {
        let picked = log_directive(None, None, LogLevel::Error);
        assert_eq!(picked, ("unobot=error".to_string(), LogSource::Config));
    }

    #[test]
    fn invalid_flag_falls_through() {
        let picked = log_directive(Some("unobot=loud"), Some("warn"), LogLevel::Info);
        assert_eq!(picked, ("warn".to_string(), LogSource::Env));

        let picked = log_directive(Some("unobot=loud"), None, LogLevel::Info);
        assert_eq!(picked, ("unobot=info".to_string(), LogSource::Config));
    }

    #[test]
    fn blank_values_are_skipped() {
        let picked = log_directive(Some("  "), Some(""), LogLevel::Debug);
        assert_eq!(picked, ("unobot=debug".to_string(), LogSource::Config));
    }

    #[test]
    fn settings_load_under_the_installed_subscriber() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        std::fs::write(&config_path, "[logging]\nlevel = \"DEBUG\"\n").unwrap();
        let args =
            cli::Args::try_parse_from(["unobot", "--config", config_path.to_str().unwrap()])
                .unwrap();

        let (subscriber, handle, captured) = capture(LogLevel::default().as_directive());
        tracing::subscriber::with_default(subscriber, || {
            let config = load_settings(&args, dir.path());
            assert_eq!(config.logging.level, LogLevel::Debug);

            tracing::debug!("before reload");
            apply_log_directive(&handle, None, None, config.logging.level);
            tracing::debug!("after reload");
        });

        let logs = captured.text();
        assert!(logs.contains("loaded config from"), "{logs}");
        assert!(!logs.contains("before reload"), "{logs}");
        assert!(logs.contains("after reload"), "{logs}");
    }
}
