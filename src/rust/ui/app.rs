use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};

use super::animation::{bar_frames, frame_delay, BAR_ANIMATION, BAR_FRAMES};
use super::render::{render_bar, render_footer, render_header, render_panel};
use super::state::{FormState, SubmitOutcome};
use super::theme::Theme;
use crate::{AnalysisResult, Detector};

/// Presentation switches taken from the command line.
#[derive(Debug, Clone, Copy)]
pub struct AppOptions {
    /// Print the result as JSON instead of the panel.
    pub json: bool,
    /// Grow the confidence bar instead of drawing it in one go.
    pub animate: bool,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            json: false,
            animate: true,
        }
    }
}

/// One unit of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Text terminated by an empty line.
    Submit(String),
    ToggleTheme,
    Quit,
    /// End of input, with whatever text was pending.
    End(String),
}

/// Reads lines until an empty line, a command, or end of input.
///
/// `:theme` and `:quit` are only treated as commands on the first line.
pub async fn read_input<R>(lines: &mut Lines<R>) -> std::io::Result<Input>
where
    R: AsyncBufRead + Unpin,
{
    let mut buffer: Vec<String> = Vec::new();
    while let Some(line) = lines.next_line().await? {
        let trimmed = line.trim();
        if buffer.is_empty() {
            match trimmed {
                ":quit" | ":q" => return Ok(Input::Quit),
                ":theme" => return Ok(Input::ToggleTheme),
                _ => {}
            }
        }
        if trimmed.is_empty() {
            return Ok(Input::Submit(buffer.join("\n")));
        }
        buffer.push(line);
    }
    Ok(Input::End(buffer.join("\n")))
}

/// Analyzes a single text and prints the outcome.
pub async fn run_once(
    detector: &Detector,
    state: &mut FormState,
    text: &str,
    mut options: AppOptions,
) -> Result<SubmitOutcome> {
    let mut term = Term::stdout();
    options.animate &= term.is_term();
    run_once_with(detector, state, text, options, &mut term).await
}

/// Like [`run_once`], writing the result to `out`.
///
/// Nothing is written unless a result is available.
pub async fn run_once_with<W: Write>(
    detector: &Detector,
    state: &mut FormState,
    text: &str,
    options: AppOptions,
    out: &mut W,
) -> Result<SubmitOutcome> {
    state.set_text(text);
    submit_and_show(detector, state, options, out).await
}

/// Runs the form until `:quit` or end of input.
pub async fn run_interactive(
    detector: &Detector,
    state: &mut FormState,
    mut options: AppOptions,
) -> Result<()> {
    let mut term = Term::stdout();
    options.animate &= term.is_term();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    if !options.json {
        term.write_line(&render_header(&detector.info().model, state.theme))?;
        term.write_line("")?;
    }

    loop {
        if !options.json {
            term.write_line(
                &state
                    .theme
                    .muted()
                    .apply_to("Enter text to analyze, then an empty line (:theme, :quit)")
                    .to_string(),
            )?;
        }

        match read_input(&mut lines).await? {
            Input::Quit => break,
            Input::ToggleTheme => {
                state.toggle_theme();
                term.write_line(&format!("Theme: {}", state.theme.name()))?;
            }
            Input::Submit(text) => {
                state.set_text(text);
                submit_and_show(detector, state, options, &mut term).await?;
                term.write_line("")?;
            }
            Input::End(text) => {
                state.set_text(text);
                submit_and_show(detector, state, options, &mut term).await?;
                break;
            }
        }
    }

    if !options.json {
        term.write_line("")?;
        term.write_line(&render_footer(state.theme))?;
    }
    Ok(())
}

async fn submit_and_show<W: Write>(
    detector: &Detector,
    state: &mut FormState,
    options: AppOptions,
    out: &mut W,
) -> Result<SubmitOutcome> {
    if !state.can_submit() {
        return Ok(SubmitOutcome::Skipped);
    }

    let spinner = if options.json {
        None
    } else {
        Some(analyzing_spinner()?)
    };
    let outcome = state.submit(detector).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    if let Some(result) = state.result() {
        show_result(result, state.theme, options, out).await?;
    }
    Ok(outcome)
}

fn analyzing_spinner() -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message("Analyzing...");
    pb.enable_steady_tick(Duration::from_millis(100));
    Ok(pb)
}

async fn show_result<W: Write>(
    result: &AnalysisResult,
    theme: Theme,
    options: AppOptions,
    out: &mut W,
) -> Result<()> {
    if options.json {
        writeln!(out, "{}", serde_json::to_string_pretty(result)?)?;
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "{}", render_panel(result, theme))?;

    if options.animate {
        let delay = frame_delay(BAR_ANIMATION, BAR_FRAMES);
        // Every frame has the same width, so a carriage return redraws in place.
        for fill in bar_frames(result.confidence, BAR_FRAMES) {
            write!(out, "\r{}", render_bar(result, theme, fill))?;
            out.flush()?;
            tokio::time::sleep(delay).await;
        }
        writeln!(out)?;
    } else {
        writeln!(out, "{}", render_bar(result, theme, result.confidence))?;
    }
    Ok(())
}
