use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use nura_core::model::{DashboardData, DashboardRole, QuizConfig, QuizDefinition, UnknownRole};
use serde::de::DeserializeOwned;
use services::{AppServices, ClientConfig, Clock, Dashboard, QuizRunner};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, StartPage, UiApp, build_app_context};
use url::Url;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    MissingInput { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
    InvalidBaseUrl { raw: String },
    InvalidRole(UnknownRole),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::MissingInput { flag } => write!(f, "this command requires {flag}"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidBaseUrl { raw } => write!(f, "invalid --base-url value: {raw}"),
            ArgsError::InvalidRole(err) => write!(f, "invalid NURA_ROLE: {err}"),
        }
    }
}

impl std::error::Error for ArgsError {}

#[derive(Debug)]
struct LoadError {
    path: PathBuf,
    reason: String,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not load {}: {}", self.path.display(), self.reason)
    }
}

impl std::error::Error for LoadError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    start_page: StartPage,
    services: AppServices,
    quiz: Option<QuizConfig>,
    dashboard: Option<(DashboardData, DashboardRole)>,
}

impl UiApp for DesktopApp {
    fn start_page(&self) -> StartPage {
        self.start_page
    }

    fn quiz_runner(&self) -> Option<QuizRunner> {
        self.quiz
            .clone()
            .map(|quiz| self.services.quiz_runner(quiz))
    }

    fn dashboard(&self) -> Option<Dashboard> {
        self.dashboard
            .clone()
            .map(|(data, role)| self.services.dashboard(data, role))
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app --                [--quiz <file>] [--data <file>] [options]");
    eprintln!("  cargo run -p app -- quiz      --quiz <file> [options]");
    eprintln!("  cargo run -p app -- dashboard --data <file> [--teacher] [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --db <sqlite_url>   local answer store (default sqlite:nura.sqlite3)");
    eprintln!("  --base-url <url>    server origin for submissions and student detail");
    eprintln!("  --teacher           open the dashboard with teacher features");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  NURA_DB_URL, NURA_BASE_URL, NURA_HTTP_TIMEOUT_SECS, NURA_ROLE, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Home,
    Quiz,
    Dashboard,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "quiz" => Some(Self::Quiz),
            "dashboard" => Some(Self::Dashboard),
            _ => None,
        }
    }

    fn start_page(self) -> StartPage {
        match self {
            Command::Home => StartPage::Home,
            Command::Quiz => StartPage::Quiz,
            Command::Dashboard => StartPage::Dashboard,
        }
    }
}

#[derive(Debug)]
struct Args {
    db_url: String,
    base_url: Option<Url>,
    quiz: Option<PathBuf>,
    data: Option<PathBuf>,
    role: DashboardRole,
}

impl Args {
    fn parse(command: Command, args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut db_url = std::env::var("NURA_DB_URL")
            .ok()
            .map_or_else(|| "sqlite://nura.sqlite3".into(), normalize_sqlite_url);
        let mut role = match std::env::var("NURA_ROLE") {
            Ok(raw) => raw.parse().map_err(ArgsError::InvalidRole)?,
            Err(_) => DashboardRole::Student,
        };
        let mut base_url = None;
        let mut quiz = None;
        let mut data = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--base-url" => {
                    let value = require_value(args, "--base-url")?;
                    let parsed = services::config::parse_base_url(&value)
                        .ok_or(ArgsError::InvalidBaseUrl { raw: value })?;
                    base_url = Some(parsed);
                }
                "--quiz" => quiz = Some(PathBuf::from(require_value(args, "--quiz")?)),
                "--data" => data = Some(PathBuf::from(require_value(args, "--data")?)),
                "--teacher" => role = DashboardRole::Teacher,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        match command {
            Command::Quiz if quiz.is_none() => return Err(ArgsError::MissingInput { flag: "--quiz" }),
            Command::Dashboard if data.is_none() => {
                return Err(ArgsError::MissingInput { flag: "--data" });
            }
            _ => {}
        }

        Ok(Self {
            db_url,
            base_url,
            quiz,
            data,
            role,
        })
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let raw = std::fs::read_to_string(path).map_err(|err| LoadError {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;
    serde_json::from_str(&raw).map_err(|err| LoadError {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })
}

fn load_quiz(path: &Path, base: &Url) -> Result<QuizConfig, Box<dyn std::error::Error>> {
    let definition: QuizDefinition = read_json(path)?;
    let quiz = QuizConfig::with_base(definition, base)?;
    info!(
        title = quiz.title(),
        questions = quiz.total(),
        minutes = quiz.time_limit_minutes(),
        "quiz loaded"
    );
    Ok(quiz)
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    let command = match argv.first().map(String::as_str) {
        None => Command::Home,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Home,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };
    if command != Command::Home {
        argv.remove(0);
    }

    let parsed = Args::parse(command, &mut argv.into_iter()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let mut config = ClientConfig::from_env()?;
    if let Some(base_url) = parsed.base_url.clone() {
        config = config.with_base_url(base_url);
    }

    let quiz = parsed
        .quiz
        .as_deref()
        .map(|path| load_quiz(path, &config.base_url))
        .transpose()?;
    let dashboard = parsed
        .data
        .as_deref()
        .map(read_json::<DashboardData>)
        .transpose()?
        .map(|data| (data, parsed.role));

    // Open + migrate SQLite at startup. Keep this in the binary glue so core/services stay pure.
    prepare_sqlite_file(&parsed.db_url)?;
    let services = AppServices::new_sqlite(&parsed.db_url, Clock::system(), config).await?;
    info!(db = %parsed.db_url, ?command, "starting nura");

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        start_page: command.start_page(),
        services,
        quiz,
        dashboard,
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Nura")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
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

    let path = Path::new(path);
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

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
