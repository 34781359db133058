//! Render the textbook figures
//!
//! With no arguments every figure is written as PDF under the current
//! directory (`chap02/`, `chap03/`, `chap05/`).

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use textbook_figures::{generate_all, ExportConfig, ExportFormat, FigureId};

#[derive(Parser, Debug)]
#[command(name = "textbook-figures", version, about = "Render the signal-processing textbook figures")]
struct Cli {
    /// Figures to render (default: all)
    #[arg(value_enum)]
    figures: Vec<FigureId>,

    /// Root directory for the chapter folders
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Pdf)]
    format: ExportFormat,

    /// List figure ids and output paths, then exit
    #[arg(long)]
    list: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = ExportConfig {
        out_dir: cli.out_dir,
        format: cli.format,
    };

    if cli.list {
        for id in FigureId::ALL {
            let name = id
                .to_possible_value()
                .map(|v| v.get_name().to_string())
                .unwrap_or_else(|| format!("{id:?}"));
            println!("{name:<14} {}", config.resolve(&id.figure().output_path()).display());
        }
        return ExitCode::SUCCESS;
    }

    let ids = if cli.figures.is_empty() {
        FigureId::ALL.to_vec()
    } else {
        cli.figures
    };

    match generate_all(&ids, &config) {
        Ok(paths) => {
            log::info!("{} figure(s) written", paths.len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
