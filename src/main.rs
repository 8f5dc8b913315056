use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{debug, error, info};

use geofuzz::transform::{process_file, RunConfig};

/// Fuzzes latitude and longitude coordinates by adding random noise.
#[derive(Parser)]
#[command(name = "geofuzz")]
#[command(
    about = "Fuzzes latitude and longitude coordinates by adding random noise",
    long_about = None
)]
struct Cli {
    /// Path to the input file containing coordinates
    input_file: PathBuf,

    /// Path to the output file to write the fuzzed coordinates
    output_file: PathBuf,

    /// Radius of the uncertainty circle in degrees
    #[arg(long, default_value_t = 0.01)]
    radius: f64,

    /// Column index for latitude (0-based)
    #[arg(long = "lat_col", default_value_t = 0, value_name = "INDEX")]
    lat_col: usize,

    /// Column index for longitude (0-based)
    #[arg(long = "lon_col", default_value_t = 1, value_name = "INDEX")]
    lon_col: usize,

    /// Delimiter used in the input file
    #[arg(long, default_value = ",")]
    delimiter: String,

    /// Skip the first line of the input file as a header row
    #[arg(long)]
    header: bool,

    /// Encoding of the input file; detected automatically when omitted
    #[arg(long, value_name = "LABEL")]
    encoding: Option<String>,

    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2)
        .init();

    debug!("geofuzz started with verbosity level: {}", cli.verbose);

    let config = RunConfig {
        radius: cli.radius,
        lat_col: cli.lat_col,
        lon_col: cli.lon_col,
        delimiter: cli.delimiter,
        header: cli.header,
        encoding: cli.encoding,
    };

    match process_file(&cli.input_file, &cli.output_file, &config) {
        Ok(_) => info!("file processed successfully"),
        Err(e) => {
            error!("fatal error: {e:#}");
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}
