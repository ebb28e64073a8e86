// fixture_tree.rs: build or tear down a fake git project tree for hook runner tests.
// Usage: cargo run --bin fixture-tree -- --root <dir> <command>

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use lefthook_fixture::{FileStructure, FixtureSettings, Removed};

#[derive(Parser, Debug)]
#[command(name = "fixture-tree", about = "Create a fake git project tree for hook runner tests")]
struct Cli {
    /// Root containing `fixtures/`; the tree is built under `<root>/tmp`.
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// TOML settings file.
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Log debug events to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create the `.git` marker tree.
    Git,
    /// Install the hook scripts preset.
    Scripts,
    /// Install a fixture config document.
    Config {
        #[arg(long)]
        ext: Option<String>,
    },
    /// Marker, scripts and config in order.
    Setup {
        #[arg(long)]
        ext: Option<String>,
    },
    /// Remove the working directory.
    Clean,
    /// Print the setup stage.
    Status,
    /// List the working directory.
    Tree,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn build_structure(cli: &Cli) -> Result<FileStructure> {
    let settings = match &cli.settings {
        Some(p) => FixtureSettings::load(p)
            .with_context(|| format!("loading settings from {}", p.display()))?,
        None => FixtureSettings::default(),
    };
    let mut structure = FileStructure::with_settings(settings)?;
    if let Some(root) = &cli.root {
        structure.configure(root.clone())?;
    }
    Ok(structure)
}

fn run(cli: &Cli) -> Result<()> {
    let structure = build_structure(cli)?;
    match &cli.command {
        Command::Git => structure.have_git()?,
        Command::Scripts => structure.make_scripts_preset()?,
        Command::Config { ext } => {
            let installed = structure.make_config(ext.as_deref())?;
            println!("{}", installed.display());
        }
        Command::Setup { ext } => {
            structure.setup(ext.as_deref())?;
            println!("{}", structure.tmp()?.display());
        }
        Command::Clean => match structure.clean()? {
            Removed::Yes => println!("removed {}", structure.tmp()?.display()),
            Removed::Absent => println!("nothing to remove at {}", structure.tmp()?.display()),
        },
        Command::Status => println!("{}", structure.stage()?),
        Command::Tree => {
            for line in structure.manifest()? {
                println!("{}", line);
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("fixture-tree: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
