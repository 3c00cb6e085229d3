use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use bst::config::Settings;
use bst::element::{ElementKind, Real};
use bst::session::{repl, Session};
use bst::Result;
use clap::{ArgAction, Parser};
use colored::Colorize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Interactive playground for unbalanced binary search trees
#[derive(Parser, Debug)]
#[command(name = "bst-playground")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Element type held by every tree in the session (asked interactively if not set)
    #[arg(short = 't', long = "type", value_enum)]
    element: Option<ElementKind>,

    /// Settings file (TOML)
    #[arg(short, long, env = "BST_PLAYGROUND_CONFIG")]
    config: Option<PathBuf>,

    /// Entries kept in each history
    #[arg(long)]
    history: Option<usize>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count)]
    debug: u8,
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    if let Err(e) = run(cli) {
        eprintln!("{}", format!("Error: {}", e).red());
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    apply_cli(&mut settings, &cli)?;

    let element = match settings.element {
        Some(element) => element,
        None => choose_element()?,
    };
    tracing::info!(%element, "starting session");

    let stdin = io::stdin();
    let stdout = io::stdout();
    match element {
        ElementKind::Int => repl::run(
            &mut Session::<i64>::new(&settings),
            stdin.lock(),
            stdout.lock(),
        ),
        ElementKind::Double => repl::run(
            &mut Session::<Real>::new(&settings),
            stdin.lock(),
            stdout.lock(),
        ),
        ElementKind::String => repl::run(
            &mut Session::<String>::new(&settings),
            stdin.lock(),
            stdout.lock(),
        ),
        ElementKind::Char => repl::run(
            &mut Session::<char>::new(&settings),
            stdin.lock(),
            stdout.lock(),
        ),
    }
}

/// Lays the command line flags over the loaded settings and checks the result again.
fn apply_cli(settings: &mut Settings, cli: &Cli) -> Result<()> {
    if let Some(element) = cli.element {
        settings.element = Some(element);
    }
    if let Some(capacity) = cli.history {
        settings.history_capacity = capacity;
    }
    if cli.no_color {
        settings.colors = false;
    }
    settings.validate()
}

/// Asks for the element type on stdin, falling back to `int` on an unrecognised answer.
fn choose_element() -> Result<ElementKind> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "Binary Tree Playground")?;
    writeln!(stdout, "============================")?;
    writeln!(stdout, "Choose data type:")?;
    for (i, kind) in ElementKind::ALL.iter().enumerate() {
        writeln!(stdout, "{} - {}", i + 1, kind)?;
    }
    write!(stdout, "Enter choice (1-4): ")?;
    stdout.flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;

    match ElementKind::from_menu_choice(&answer) {
        Some(kind) => Ok(kind),
        None => {
            writeln!(stdout, "{}", "Invalid choice! Using int by default.".yellow())?;
            Ok(ElementKind::Int)
        }
    }
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    // RUST_LOG still wins when set.
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();

    tracing::debug!(?level, "logging initialised");
}
