use clap::Parser;
use std::path::PathBuf;

use crate::writers::OutputFormat;

#[derive(Parser)]
#[command(name = "brc-processor")]
#[command(about = "Parallel min/mean/max aggregation of station temperature readings")]
#[command(version)]
pub struct Cli {
    #[arg(help = "Measurements file with one '<station>;<temperature>' record per line")]
    pub input: PathBuf,

    #[arg(short, long, help = "Worker threads [default: number of CPUs]")]
    pub workers: Option<usize>,

    #[arg(
        long,
        help = "Leading bytes scanned to discover station names [default: 1000000]"
    )]
    pub discovery_bytes: Option<usize>,

    #[arg(
        long,
        help = "Skip records for stations not seen during discovery instead of failing"
    )]
    pub skip_unknown: bool,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(short, long, help = "Configuration file (TOML, JSON, YAML, ...)")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Print elapsed milliseconds to stderr")]
    pub timing: bool,

    #[arg(long, help = "Show a progress bar on stderr")]
    pub progress: bool,

    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, help = "Log file path")]
    pub log_file: Option<PathBuf>,
}
