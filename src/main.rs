use clap::Parser;
use std::path::PathBuf;
use trellis::shell::app_shell;
use trellis::{LayoutReport, Rect, ReportError};

/// Lays out the sample application shell and prints every rectangle as JSON.
#[derive(Parser, Debug)]
#[command(name = "trellis", version, about)]
struct Args {
    /// Width of the available region.
    #[arg(long, default_value_t = 1280.0)]
    width: f32,

    /// Height of the available region.
    #[arg(long, default_value_t = 800.0)]
    height: f32,

    /// Fixed width of the sidebar column.
    #[arg(long, default_value_t = 240.0)]
    sidebar: f32,

    /// Number of cards in the content area.
    #[arg(long, default_value_t = 3)]
    cards: usize,

    /// Write the report to this file instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), ReportError> {
    env_logger::init();
    let args = Args::parse();

    let mut engine = app_shell(args.sidebar, args.cards)?;
    engine.solve(Rect::new(0.0, 0.0, args.width, args.height))?;
    engine.profiler().log_summary();

    let json = LayoutReport::capture(&engine).to_json()?;
    match args.output {
        Some(path) => {
            std::fs::write(&path, json)?;
            log::info!("Layout report written to {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}
