//! read -> convert -> render -> write

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use deadball_core::{convert, Conversion, GameInfo, RawPayload, TeamHints};
use deadball_render::{form_fields, game_csv, render_html, slug, stats_json};
use tracing::info;

use crate::args::Args;
use crate::config::{Config, OutputFormat};
use crate::error::CliError;

/// Run one conversion. Returns the files written, empty with `--stdout`.
pub fn run(args: &Args, config: &Config, stdout: &mut dyn Write) -> Result<Vec<PathBuf>, CliError> {
    let input_name = args.input.display().to_string();
    let text = fs::read_to_string(&args.input).map_err(|source| CliError::Read {
        path: args.input.clone(),
        source,
    })?;
    info!("Read {} bytes from {}", text.len(), input_name);

    let info = GameInfo {
        game_id: args.game_id.clone(),
        date: args.date.as_deref().map(parse_date).transpose()?,
    };
    let hints = TeamHints::new(args.away.clone(), args.home.clone());

    let payload = RawPayload::detect(&text).map_err(|e| CliError::from_convert(e, &input_name))?;
    let conversion =
        convert(&payload, &hints, &info).map_err(|e| CliError::from_convert(e, &input_name))?;

    if args.stdout {
        let json = stats_json(&conversion)?;
        writeln!(stdout, "{json}").map_err(|source| CliError::Write {
            path: PathBuf::from("<stdout>"),
            source,
        })?;
        return Ok(Vec::new());
    }

    let out_dir = args.out_dir.clone().unwrap_or_else(|| config.out_dir.clone());
    let formats = if args.formats.is_empty() {
        config.formats.clone()
    } else {
        args.formats.clone()
    };

    fs::create_dir_all(&out_dir).map_err(|source| CliError::Write {
        path: out_dir.clone(),
        source,
    })?;

    let stem = input_stem(&args.input);
    let mut written = Vec::new();
    for format in formats {
        let path = out_dir.join(output_name(&stem, format, &conversion));
        let contents = render(format, &conversion)?;
        fs::write(&path, contents).map_err(|source| CliError::Write {
            path: path.clone(),
            source,
        })?;
        info!("Wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}

fn render(format: OutputFormat, conversion: &Conversion) -> Result<String, CliError> {
    Ok(match format {
        OutputFormat::Json => stats_json(conversion)?,
        OutputFormat::Csv => game_csv(&conversion.players)?,
        OutputFormat::Html => render_html(&conversion.scorecard),
        OutputFormat::Fields => serde_json::to_string_pretty(&form_fields(&conversion.scorecard))?,
    })
}

pub fn parse_date(text: &str) -> Result<NaiveDate, CliError> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .map_err(|_| CliError::InvalidDate(text.to_string()))
}

fn input_stem(input: &Path) -> String {
    input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "game".to_string())
}

/// File name for one rendering, e.g. `g1_owls_at_hawks_scorecard.html`.
pub fn output_name(stem: &str, format: OutputFormat, conversion: &Conversion) -> String {
    match format {
        OutputFormat::Json => format!("{stem}_stats.json"),
        OutputFormat::Csv => format!("{stem}_game.csv"),
        OutputFormat::Html => format!(
            "{stem}_{}_at_{}_scorecard.html",
            slug(&conversion.scorecard.away.team),
            slug(&conversion.scorecard.home.team)
        ),
        OutputFormat::Fields => format!("{stem}_fields.json"),
    }
}
