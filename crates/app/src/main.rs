use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use primer_core::ContentRegistry;
use services::{AppConfig, AppServices, CodeRunner, DEFAULT_DATABASE_URL, ProgressService};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
    InvalidRunDelay { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidRunDelay { raw } => {
                write!(f, "invalid --run-delay-ms value: {raw}")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn content(&self) -> &'static ContentRegistry {
        self.services.content()
    }

    fn progress(&self) -> Arc<ProgressService> {
        self.services.progress()
    }

    fn code_runner(&self) -> Arc<CodeRunner> {
        self.services.code_runner()
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [ui] [--db <sqlite_url>] [--run-delay-ms <ms>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db {DEFAULT_DATABASE_URL}");
    eprintln!("  --run-delay-ms 1000");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  PRIMER_DB_URL, PRIMER_RUN_DELAY_MS, RUST_LOG");
}

fn parse_run_delay(raw: &str) -> Result<Duration, ArgsError> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ArgsError::InvalidRunDelay {
            raw: raw.to_string(),
        })
}

fn parse_args(args: &mut impl Iterator<Item = String>) -> Result<AppConfig, ArgsError> {
    let mut config = AppConfig::default();
    if let Ok(url) = std::env::var("PRIMER_DB_URL") {
        config = config.with_database_url(normalize_sqlite_url(url));
    }
    if let Some(delay) = std::env::var("PRIMER_RUN_DELAY_MS")
        .ok()
        .and_then(|value| parse_run_delay(&value).ok())
    {
        config = config.with_run_delay(delay);
    }

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--db" => {
                let value = require_value(args, "--db")?;
                if value.trim().is_empty() {
                    return Err(ArgsError::InvalidDbUrl { raw: value });
                }
                config = config.with_database_url(normalize_sqlite_url(value));
            }
            "--run-delay-ms" => {
                let value = require_value(args, "--run-delay-ms")?;
                config = config.with_run_delay(parse_run_delay(&value)?);
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            _ => return Err(ArgsError::UnknownArg(arg)),
        }
    }

    Ok(config)
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim();
    let path_str = trimmed.strip_prefix("sqlite:").unwrap_or(trimmed);
    let path = std::path::Path::new(path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" || db_url.contains("mode=memory") {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    match argv.first().map(String::as_str) {
        None => {}
        Some("ui") => {
            argv.remove(0);
        }
        Some(first) if first.starts_with('-') => {}
        Some(first) => {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            return Err(ArgsError::UnknownArg(first.to_string()).into());
        }
    }

    let mut iter = argv.into_iter();
    let config = parse_args(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_tracing();
    tracing::info!(
        db = %config.database_url,
        run_delay_ms = config.run_delay.as_millis(),
        "starting rust primer"
    );

    // Open + migrate SQLite before the window exists so the first render sees saved progress.
    prepare_sqlite_file(&config.database_url)?;
    let services = AppServices::new_sqlite(&config).await?;

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Rust Primer")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<AppConfig, ArgsError> {
        let mut iter = args.iter().map(|s| (*s).to_string());
        parse_args(&mut iter)
    }

    #[test]
    fn run_delay_flag_is_milliseconds() {
        let config = parse(&["--run-delay-ms", "250"]).unwrap();
        assert_eq!(config.run_delay, Duration::from_millis(250));
    }

    #[test]
    fn bad_flags_are_reported() {
        assert!(matches!(
            parse(&["--run-delay-ms", "soon"]),
            Err(ArgsError::InvalidRunDelay { .. })
        ));
        assert!(matches!(
            parse(&["--db"]),
            Err(ArgsError::MissingValue { flag: "--db" })
        ));
        assert!(matches!(parse(&["--nope"]), Err(ArgsError::UnknownArg(_))));
    }

    #[test]
    fn relative_sqlite_paths_become_absolute_urls() {
        let url = normalize_sqlite_url("sqlite:data/primer.db".to_string());
        assert!(url.starts_with("sqlite:///"), "{url}");
        assert!(url.ends_with("data/primer.db"), "{url}");
        assert_eq!(
            normalize_sqlite_url("sqlite::memory:".to_string()),
            "sqlite::memory:"
        );
    }
}
