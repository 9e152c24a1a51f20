use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};
use unblur::{dpi_awareness, AwarenessOutcome, Hwnd, WindowScaling};

use crate::{config::Config, logger::Logger};

mod config;
mod logger;

#[derive(Parser, Debug)]
#[command(author, version, about = "Show the DPI scaling unblur detects for a window", long_about = None)]
struct CliArgs {
  /// YAML config file (defaults to the built-in config)
  #[arg(short = 'c', long = "config")]
  config: Option<PathBuf>,

  /// Native window handle to query (defaults to this console's window)
  #[arg(long = "handle")]
  handle: Option<usize>,

  /// Print the detected DPI as YAML instead of the summary
  #[arg(long = "yaml")]
  yaml: bool,

  /// Geometry strings to scale, e.g. 800x600+100+50
  geometries: Vec<String>,
}

#[cfg(windows)]
fn default_handle() -> Hwnd {
  let console = unsafe { winapi::um::wincon::GetConsoleWindow() };
  Hwnd(console as usize)
}

#[cfg(not(windows))]
fn default_handle() -> Hwnd {
  Hwnd(0)
}

fn status_line(scaling: &WindowScaling) -> &'static str {
  if scaling.dpi_scaling() > 1.0 {
    "DPI awareness is active"
  } else {
    "No scaling detected (100%)"
  }
}

fn format_dpi(value: Option<u32>) -> String {
  value.map_or_else(|| "n/a".to_string(), |dpi| dpi.to_string())
}

fn main() -> anyhow::Result<()> {
  let args = CliArgs::parse();
  let config = Config::load(args.config.as_deref())?;
  Logger::init(&config)?;

  let window = args.handle.map(Hwnd).unwrap_or_else(default_handle);
  let scaling = WindowScaling::new(window);
  info!("Queried {:?}: {:?}", window, scaling.dpi());

  if args.yaml {
    print!("{}", serde_yaml::to_string(&scaling.dpi())?);
    return Ok(());
  }

  println!("unblur v{}", env!("CARGO_PKG_VERSION"));
  println!(
    "DPI: {} x {}",
    format_dpi(scaling.dpi_x()),
    format_dpi(scaling.dpi_y())
  );
  println!("Scaling: {}", scaling.dpi().scaling_percent());
  println!("{}", status_line(&scaling));
  if let Some(outcome) = dpi_awareness() {
    if outcome != AwarenessOutcome::Unsupported {
      println!("Process DPI awareness: {:?}", outcome);
    }
  }

  let geometries = if args.geometries.is_empty() {
    config.geometries
  } else {
    args.geometries
  };

  let mut failures = 0;
  for geometry in &geometries {
    match scaling.scale_geometry(geometry) {
      Ok(scaled) => println!("{} -> {}", geometry, scaled),
      Err(err) => {
        error!("{}", err);
        println!("{} -> {}", geometry, err);
        failures += 1;
      }
    }
  }

  if failures > 0 {
    anyhow::bail!("{} of {} geometries could not be scaled", failures, geometries.len());
  }

  Ok(())
}
