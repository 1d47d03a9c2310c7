//! opmanual - Operational manual for the DRM Technic Pet Crem Data Logger
//!
//! Binary entry point: parses arguments, loads settings and starts either
//! the interactive viewer or print mode.

mod print;

use std::path::PathBuf;

use clap::Parser;
use opmanual_app::config::{self, IconMode, Settings};
use opmanual_core::logging;
use opmanual_core::prelude::*;

use print::PrintFormat;

/// Terminal viewer for the Pet Crem data logger operational manual
#[derive(Parser, Debug)]
#[command(name = "opmanual", version)]
#[command(about = "Operational manual for the DRM Technic Pet Crem Data Logger", long_about = None)]
struct Args {
    /// Settings file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Use ASCII indicators instead of Unicode glyphs
    #[arg(long)]
    ascii: bool,

    /// Print the manual to stdout instead of opening the viewer
    #[arg(long)]
    print: bool,

    /// Output format for --print
    #[arg(long, value_enum, default_value_t = PrintFormat::Text, requires = "print")]
    format: PrintFormat,

    /// Write a default settings file and exit
    #[arg(long)]
    init_config: bool,
}

/// Exit status for invocation errors (bad settings file, no terminal)
const EXIT_USAGE: i32 = 2;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;
    logging::init()?;

    match run(args).await {
        Err(e) if e.is_fatal() => {
            error!("Fatal: {}", e);
            eprintln!("opmanual: {}", e);
            std::process::exit(EXIT_USAGE);
        }
        result => result,
    }
}

async fn run(args: Args) -> Result<()> {
    if args.init_config {
        return init_config(args.config);
    }

    let settings = load_settings(&args)?;

    if args.print {
        return print::print_manual(args.format);
    }

    opmanual_tui::run(settings).await
}

fn load_settings(args: &Args) -> Result<Settings> {
    let mut settings = match &args.config {
        Some(path) => config::load_settings_from(path)?,
        None => config::load_default_settings(),
    };

    if args.ascii {
        settings.ui.icons = IconMode::Ascii;
    }

    debug!(
        "Settings: icons={:?} show_key_hints={}",
        settings.ui.icons, settings.ui.show_key_hints
    );
    Ok(settings)
}

fn init_config(path: Option<PathBuf>) -> Result<()> {
    let path = path
        .or_else(config::default_config_path)
        .ok_or_else(|| Error::config("No config directory on this platform; pass --config"))?;

    if config::init_config_file(&path)? {
        println!("Created {}", path.display());
    } else {
        println!("{} already exists", path.display());
    }
    Ok(())
}
