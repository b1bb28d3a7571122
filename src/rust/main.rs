use std::time::Duration;

use bullyguard::ui::{self, AppOptions, FormState, SubmitOutcome, Theme};
use bullyguard::{Detector, DetectorConfig};
use clap::Parser;
use env_logger::{Builder, Env};
use log::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Text to analyze. Starts the interactive form when omitted
    text: Option<String>,

    /// Gemini model to ask
    #[arg(short, long, default_value = bullyguard::config::DEFAULT_MODEL)]
    model: String,

    /// Base URL of the Generative Language API
    #[arg(long, default_value = bullyguard::config::DEFAULT_API_BASE_URL)]
    api_base_url: String,

    /// Give up on the request after this many seconds (no limit by default)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Color theme
    #[arg(long, value_enum, default_value_t = Theme::Dark)]
    theme: Theme,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Draw the confidence bar without animating it
    #[arg(long)]
    no_animation: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let mut config = DetectorConfig::from_env()
        .with_model(&args.model)
        .with_api_base_url(&args.api_base_url);
    if let Some(secs) = args.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    info!("Configuration: {:?}", config);

    let detector = Detector::builder().with_config(config)?.build()?;
    let options = AppOptions {
        json: args.json,
        animate: !args.no_animation,
    };
    let mut state = FormState::new(args.theme);

    match args.text {
        Some(text) => match ui::run_once(&detector, &mut state, &text, options).await? {
            SubmitOutcome::Completed => Ok(()),
            SubmitOutcome::Skipped => {
                eprintln!("Nothing to analyze: the text is empty");
                std::process::exit(2);
            }
            // Already logged by the form.
            SubmitOutcome::Failed => std::process::exit(1),
        },
        None => ui::run_interactive(&detector, &mut state, options).await,
    }
}
