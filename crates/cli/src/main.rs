use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use grammar_score_core::pipeline::score_sample_use_case::ScoreSampleUseCase;
use grammar_score_core::pipeline::scoring_logger::LogScoringLogger;
use grammar_score_core::pipeline::speech_sample::SpeechSample;
use grammar_score_core::scoring::grammar_scorer::GrammarScorer;
use grammar_score_core::scoring::infrastructure::threaded_executor::ThreadedExecutor;
use grammar_score_core::shared::config::ScoringConfig;
use grammar_score_core::text::domain::text_processor::TextProcessor;
use grammar_score_core::text::infrastructure::lexicon_pos_tagger::LexiconPosTagger;
use grammar_score_core::text::infrastructure::punctuation_sentence_splitter::PunctuationSentenceSplitter;
use grammar_score_core::text::infrastructure::regex_word_tokenizer::RegexWordTokenizer;

/// Grammar quality score for a spoken-English sample.
#[derive(Parser)]
#[command(name = "grammar-score")]
struct Cli {
    /// Sample JSON (transcript plus measurements) or a plain-text transcript.
    input: PathBuf,

    /// Scoring config JSON (defaults to the per-user config file if present).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Audio duration in seconds (required for plain-text input).
    #[arg(long)]
    duration: Option<f64>,

    /// Number of pauses detected in the audio (plain-text input only).
    #[arg(long, default_value = "0")]
    pauses: u32,

    /// Print the full report as JSON instead of the summary.
    #[arg(long)]
    json: bool,

    /// Also write the JSON report to this file.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Reject configs whose weights are negative or do not sum to 1.0.
    #[arg(long)]
    strict: bool,

    /// Evaluate score components on parallel threads.
    #[arg(long)]
    threaded: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let config = load_config(cli.config.as_deref())?;
    if cli.strict {
        config.validate()?;
    }

    let sample = read_sample(&cli)?;
    log::info!("Processing: {}", cli.input.display());

    let mut use_case = build_use_case(config, cli.threaded);
    let report = use_case.score_sample(sample);
    use_case.finish();

    let json = report.to_json()?;
    if cli.json {
        println!("{json}");
    } else {
        let max_score = use_case.scorer().config().max_score;
        println!("{}", report.summary_string(max_score));
    }

    if let Some(output) = &cli.output {
        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(output, json)?;
        log::info!("Results saved to {}", output.display());
    }

    Ok(())
}

fn build_use_case(config: ScoringConfig, threaded: bool) -> ScoreSampleUseCase {
    let processor = TextProcessor::new(
        Box::new(PunctuationSentenceSplitter),
        Box::new(RegexWordTokenizer),
        Box::new(LexiconPosTagger),
        config.text.clone(),
    );
    let mut scorer = GrammarScorer::new(
        config,
        Box::new(PunctuationSentenceSplitter),
        Box::new(RegexWordTokenizer),
    );
    if threaded {
        scorer = scorer.with_executor(Box::new(ThreadedExecutor));
    }
    ScoreSampleUseCase::new(scorer, processor, Box::new(LogScoringLogger::new()))
}

fn load_config(path: Option<&Path>) -> Result<ScoringConfig, Box<dyn std::error::Error>> {
    if let Some(path) = path {
        log::info!("Loading config: {}", path.display());
        return Ok(ScoringConfig::load(path)?);
    }
    match ScoringConfig::default_path().filter(|p| p.exists()) {
        Some(path) => {
            log::info!("Loading config: {}", path.display());
            Ok(ScoringConfig::load(&path)?)
        }
        None => Ok(ScoringConfig::default()),
    }
}

fn read_sample(cli: &Cli) -> Result<SpeechSample, Box<dyn std::error::Error>> {
    if is_json(&cli.input) {
        if cli.duration.is_some() {
            log::warn!("--duration is ignored for JSON samples");
        }
        return Ok(SpeechSample::load(&cli.input)?);
    }

    let transcript = fs::read_to_string(&cli.input)?;
    let sample = SpeechSample {
        audio_file: None,
        transcript: transcript.trim().to_string(),
        duration_seconds: cli
            .duration
            .ok_or("--duration is required for plain-text transcripts")?,
        pause_count: cli.pauses,
        pos_tags: None,
    };
    sample.validate()?;
    Ok(sample)
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input.exists() {
        return Err(format!("Input file not found: {}", cli.input.display()).into());
    }
    if let Some(d) = cli.duration {
        if !d.is_finite() || d < 0.0 {
            return Err(format!("Duration must be a non-negative number of seconds, got {d}").into());
        }
    }
    if let Some(path) = &cli.config {
        if !path.exists() {
            return Err(format!("Config file not found: {}", path.display()).into());
        }
    }
    Ok(())
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}
