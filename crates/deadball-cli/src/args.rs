use std::path::PathBuf;

use clap::Parser;

use crate::config::OutputFormat;

/// Convert boxscore or stats data into Deadball scorecards.
#[derive(Parser, Debug, Clone)]
#[command(name = "deadball")]
#[command(about = "Convert boxscore or stats data into Deadball scorecards", long_about = None)]
pub struct Args {
    /// Stats JSON, MLB boxscore JSON, or stats CSV
    pub input: PathBuf,

    /// Away team label (matched loosely against the teams in the input)
    #[arg(long)]
    pub away: Option<String>,

    /// Home team label
    #[arg(long)]
    pub home: Option<String>,

    /// Game identifier shown in the scorebox
    #[arg(long)]
    pub game_id: Option<String>,

    /// Game date, YYYY-MM-DD
    #[arg(long)]
    pub date: Option<String>,

    /// Output directory (overrides DEADBALL_OUT_DIR)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Output format, repeatable (overrides DEADBALL_FORMATS)
    #[arg(long = "format", value_enum)]
    pub formats: Vec<OutputFormat>,

    /// Print the normalized stats JSON instead of writing files
    #[arg(long)]
    pub stdout: bool,
}
