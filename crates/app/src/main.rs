use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use ethics_core::catalog::BuiltinTrackStrings;
use ethics_core::model::{Section, Track, VariantKind};
use services::{LessonConfig, LessonService};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidVariant { raw: String },
    InvalidTrack { raw: String },
    InvalidSection { raw: String },
    SectionNotInVariant { section: Section, variant: VariantKind },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidVariant { raw } => write!(f, "invalid --variant value: {raw}"),
            ArgsError::InvalidTrack { raw } => write!(f, "invalid --track value: {raw}"),
            ArgsError::InvalidSection { raw } => write!(f, "invalid --section value: {raw}"),
            ArgsError::SectionNotInVariant { section, variant } => {
                write!(f, "section `{section}` is not part of the {variant} variant")
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
    lesson_service: Arc<LessonService>,
    track: Track,
    section: Section,
}

impl UiApp for DesktopApp {
    fn lesson_service(&self) -> Arc<LessonService> {
        Arc::clone(&self.lesson_service)
    }

    fn initial_track(&self) -> Track {
        self.track
    }

    fn initial_section(&self) -> Section {
        self.section
    }
}

struct Args {
    variant: Option<VariantKind>,
    track: Track,
    section: Section,
    config: Option<PathBuf>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui    [--variant <name>] [--track <name>] [--section <name>] [--config <path>]");
    eprintln!("  cargo run -p app -- check [--variant <name>] [--config <path>]");
    eprintln!();
    eprintln!("Defaults for ui:");
    eprintln!("  --variant guided");
    eprintln!("  --track clinical");
    eprintln!("  --section intro");
    eprintln!();
    eprintln!("Variants: guided, workshop, briefing");
    eprintln!("Tracks:   clinical, basic-science");
    eprintln!("Sections: intro, autonomy, justice, privacy, beneficence, summary");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  ETHICS_VARIANT, ETHICS_CONFIG, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Check,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "check" => Some(Self::Check),
            _ => None,
        }
    }
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut variant = match std::env::var("ETHICS_VARIANT") {
            Ok(raw) => Some(parse_variant(raw)?),
            Err(_) => None,
        };
        let mut config = std::env::var_os("ETHICS_CONFIG").map(PathBuf::from);
        let mut track = Track::default();
        let mut section = Section::Intro;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--variant" => {
                    variant = Some(parse_variant(require_value(args, "--variant")?)?);
                }
                "--track" => {
                    let value = require_value(args, "--track")?;
                    track = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidTrack { raw: value.clone() })?;
                }
                "--section" => {
                    let value = require_value(args, "--section")?;
                    section = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidSection { raw: value.clone() })?;
                }
                "--config" => {
                    config = Some(PathBuf::from(require_value(args, "--config")?));
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            variant,
            track,
            section,
            config,
        })
    }

    /// Config file if given, otherwise the preset; `--variant` wins over the file.
    fn lesson_config(&self) -> Result<LessonConfig, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => LessonConfig::from_path(path)?,
            None => LessonConfig::default(),
        };
        if let Some(variant) = self.variant {
            config.variant = variant;
        }
        Ok(config)
    }
}

fn parse_variant(raw: String) -> Result<VariantKind, ArgsError> {
    raw.parse().map_err(|_| ArgsError::InvalidVariant { raw })
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launching UI when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_tracing();

    // Validate config and catalog up front so a gap fails the launch, not a page.
    let service = LessonService::from_config(parsed.lesson_config()?, &BuiltinTrackStrings)?;
    let variant = service.variant();
    if !variant.has_section(parsed.section) {
        return Err(ArgsError::SectionNotInVariant {
            section: parsed.section,
            variant: variant.kind(),
        }
        .into());
    }

    match cmd {
        Command::Ui => {
            info!(
                variant = %variant.kind(),
                track = %parsed.track,
                section = %parsed.section,
                "launching lesson window"
            );
            let title = variant.title().to_string();
            let app = DesktopApp {
                lesson_service: Arc::new(service),
                track: parsed.track,
                section: parsed.section,
            };
            let app: Arc<dyn UiApp> = Arc::new(app);
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(title)
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Check => {
            println!("{}", serde_json::to_string_pretty(variant)?);
            Ok(())
        }
    }
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
