use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use subbench_lib::subtitle::{parse_srt, to_srt, to_srt_with_speakers};
use subbench_lib::{
    run_comparison, score, BenchSettings, Candidate, CandidateInput, ComparisonSummary,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "subbench", about = "Pack recognized words into subtitles and rank providers")]
struct Cli {
    /// JSON settings file (segmentation and scoring); defaults apply when absent.
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "text", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Build, score and rank a JSON array of candidate inputs.
    Compare {
        input: PathBuf,
        /// `provider/config` label of the candidate to beat.
        #[arg(long)]
        baseline: Option<String>,
        /// Write one `.srt` file per candidate into this directory.
        #[arg(long)]
        srt_dir: Option<PathBuf>,
        /// Prefix cues in written `.srt` files with `[speaker] `.
        #[arg(long)]
        speakers: bool,
    },
    /// Score an existing SRT file.
    ScoreSrt {
        input: PathBuf,
        /// Transcript text to check; defaults to the cue text.
        #[arg(long)]
        transcript: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let settings = match &cli.settings {
        Some(path) => BenchSettings::load(path)?,
        None => BenchSettings::default(),
    };

    match cli.command {
        Command::Compare {
            input,
            baseline,
            srt_dir,
            speakers,
        } => compare(
            &input,
            &settings,
            baseline.as_deref(),
            srt_dir.as_deref(),
            speakers,
            cli.format,
        ),
        Command::ScoreSrt { input, transcript } => {
            score_srt(&input, transcript.as_deref(), &settings, cli.format)
        }
    }
}

fn compare(
    input: &Path,
    settings: &BenchSettings,
    baseline: Option<&str>,
    srt_dir: Option<&Path>,
    speakers: bool,
    format: OutputFormat,
) -> Result<()> {
    let contents = fs::read_to_string(input)
        .with_context(|| format!("Failed to read candidates from {}", input.display()))?;
    let inputs: Vec<CandidateInput> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse candidates in {}", input.display()))?;

    let summary = run_comparison(&inputs, settings, baseline)?;

    if let Some(dir) = srt_dir {
        write_srt_files(dir, &summary, speakers)?;
    }

    match format {
        OutputFormat::Text => print!("{}", summary.render_text()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }
    Ok(())
}

fn write_srt_files(dir: &Path, summary: &ComparisonSummary, speakers: bool) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    for (i, candidate) in summary.ranked.iter().enumerate() {
        let path = dir.join(srt_file_name(i + 1, candidate));
        let contents = if speakers {
            to_srt_with_speakers(&candidate.segmentation)
        } else {
            to_srt(&candidate.segmentation)
        };
        fs::write(&path, contents)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Wrote {}", path.display());
    }
    Ok(())
}

fn score_srt(
    input: &Path,
    transcript: Option<&Path>,
    settings: &BenchSettings,
    format: OutputFormat,
) -> Result<()> {
    let contents = fs::read_to_string(input)
        .with_context(|| format!("Failed to read subtitles from {}", input.display()))?;
    let segmentation = parse_srt(&contents)?;

    let full_text = match transcript {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read transcript from {}", path.display()))?,
        None => segmentation.joined_text(),
    };

    let report = score(&segmentation, &full_text, &settings.scoring);
    match format {
        OutputFormat::Text => println!(
            "{}: {:.1}/100 ({}) segments {} avg {:.1} max {} min {} long+ {}",
            input.display(),
            report.score,
            report.rating,
            report.total_segments,
            report.avg_length,
            report.max_length,
            report.min_length,
            report.over_ideal_count()
        ),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

/// `{rank}_{provider}_{config}.srt`; the rank keeps names unique after
/// sanitizing.
fn srt_file_name(rank: usize, candidate: &Candidate) -> String {
    format!(
        "{:02}_{}_{}.srt",
        rank,
        sanitize(&candidate.provider_id),
        sanitize(&candidate.config_id)
    )
}

fn sanitize(value: &str) -> String {
    value
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' { c } else { '_' })
        .collect()
}
