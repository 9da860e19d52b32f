mod bell;
mod terminal;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use quiz_core::model::QuizMode;
use services::config::parse_positive;
use services::{
    ChatQuestionSource, Clock, QuestionBank, QuestionSource, QuizConfig, QuizController,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::bell::BellFeedback;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidMode { raw: String },
    InvalidCount { raw: String },
    InvalidDelay { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidMode { raw } => write!(f, "invalid --mode value: {raw}"),
            ArgsError::InvalidCount { raw } => write!(f, "invalid --count value: {raw}"),
            ArgsError::InvalidDelay { raw } => write!(f, "invalid --delay-ms value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!(
        "  cargo run -p app -- [--mode <synonyms|antonyms|mixed>] [--count <n>] [--delay-ms <ms>] [--offline] [--mute]"
    );
    eprintln!();
    eprintln!("Without --mode the start screen asks for one.");
    eprintln!("Without an API key the built-in offline question bank is used.");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_AI_API_KEY, QUIZ_AI_BASE_URL, QUIZ_AI_MODEL, QUIZ_AI_LANGUAGE,");
    eprintln!("  QUIZ_AI_TIMEOUT_SECS, QUIZ_QUESTION_COUNT, QUIZ_REVEAL_DELAY_MS, QUIZ_MUTED,");
    eprintln!("  RUST_LOG (default: warn)");
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    mode: Option<QuizMode>,
    count: Option<usize>,
    delay: Option<Duration>,
    offline: bool,
    mute: bool,
    help: bool,
}

fn env_flag(raw: Option<String>) -> bool {
    raw.is_some_and(|value| matches!(value.trim(), "1" | "true" | "yes"))
}

impl Args {
    /// Parse flags; `QUIZ_MUTED` from `lookup` seeds `--mute`.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut parsed = Self {
            mute: env_flag(lookup("QUIZ_MUTED")),
            ..Self::default()
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--mode" => {
                    let value = require_value(args, "--mode")?;
                    let mode = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidMode { raw: value.clone() })?;
                    parsed.mode = Some(mode);
                }
                "--count" => {
                    let value = require_value(args, "--count")?;
                    let count = parse_positive("--count", &value)
                        .map_err(|_| ArgsError::InvalidCount { raw: value.clone() })?;
                    parsed.count = Some(count);
                }
                "--delay-ms" => {
                    let value = require_value(args, "--delay-ms")?;
                    let ms: u64 = value
                        .trim()
                        .parse()
                        .map_err(|_| ArgsError::InvalidDelay { raw: value.clone() })?;
                    parsed.delay = Some(Duration::from_millis(ms));
                }
                "--offline" => parsed.offline = true,
                "--mute" => parsed.mute = true,
                "--help" | "-h" => parsed.help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }

    fn quiz_config(&self, base: QuizConfig) -> QuizConfig {
        QuizConfig {
            question_count: self.count.unwrap_or(base.question_count),
            reveal_delay: self.delay.unwrap_or(base.reveal_delay),
        }
    }
}

fn init_tracing() {
    // stdout belongs to the quiz screen.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn question_source(offline: bool) -> Result<Arc<dyn QuestionSource>, Box<dyn std::error::Error>> {
    if offline {
        return Ok(Arc::new(QuestionBank::sample()));
    }
    let generator = ChatQuestionSource::from_env()?;
    if generator.enabled() {
        tracing::info!("using chat generator");
        return Ok(Arc::new(generator));
    }
    tracing::warn!("QUIZ_AI_API_KEY is not set; falling back to the offline question bank");
    eprintln!("No API key configured, playing with the offline question bank.");
    Ok(Arc::new(QuestionBank::sample()))
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv, |name| std::env::var(name).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    if args.help {
        print_usage();
        return Ok(());
    }

    let config = args.quiz_config(QuizConfig::from_env()?);
    let source = question_source(args.offline)?;
    let bell = Arc::new(BellFeedback::new(args.mute));
    let controller = QuizController::builder(source)
        .config(config)
        .feedback(bell.clone())
        .clock(Clock::default())
        .build();
    tracing::debug!(config = ?controller.config(), "controller ready");

    terminal::run(controller, bell, args.mode).await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    let code = match run().await {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{err}");
            2
        }
    };
    // The blocking stdin reader keeps the runtime alive until the process exits.
    std::process::exit(code);
}
