use super::animation::clamp_fraction;
use super::theme::Theme;
use crate::AnalysisResult;

/// Width of the confidence bar in cells.
pub const BAR_WIDTH: usize = 40;

const FILLED: char = '█';
const EMPTY: char = '░';

pub fn render_header(model: &str, theme: Theme) -> String {
    format!(
        "{} {}\n{}",
        theme.text().bold().apply_to("Cyberbullying"),
        theme.accent().bold().apply_to("Detector"),
        theme.muted().apply_to(format!("Powered by {}", model))
    )
}

pub fn render_footer(theme: Theme) -> String {
    theme
        .muted()
        .apply_to(
            "This tool helps identify potentially harmful content.\n\
             Results are AI-generated and may not be 100% accurate.",
        )
        .to_string()
}

/// Verdict banner, explanation and the confidence label.
///
/// The bar itself is drawn separately by [`render_bar`] so it can be animated.
pub fn render_panel(result: &AnalysisResult, theme: Theme) -> String {
    let (icon, style) = if result.is_cyberbullying {
        ("⚠", theme.alert())
    } else {
        ("✔", theme.accent())
    };
    let percent = format!("{}%", result.confidence_percent());
    let label_gap = BAR_WIDTH.saturating_sub("Confidence".len() + percent.len());

    format!(
        "{} {}\n\n{}\n\n{}{}{}",
        style.apply_to(icon),
        style.bold().apply_to(result.verdict_label()),
        theme.text().apply_to(&result.explanation),
        theme.muted().apply_to("Confidence"),
        " ".repeat(label_gap),
        theme.muted().apply_to(percent),
    )
}

/// The confidence bar filled to `fill` (clamped to `[0, 1]`).
pub fn render_bar(result: &AnalysisResult, theme: Theme, fill: f64) -> String {
    let style = if result.is_cyberbullying {
        theme.alert()
    } else {
        theme.accent()
    };
    let bar = confidence_bar(fill, BAR_WIDTH);
    let filled: String = bar.chars().filter(|&c| c == FILLED).collect();
    let empty: String = bar.chars().filter(|&c| c == EMPTY).collect();
    format!("{}{}", style.apply_to(filled), theme.muted().apply_to(empty))
}

/// Unstyled bar of `width` cells.
pub fn confidence_bar(fill: f64, width: usize) -> String {
    let filled = (clamp_fraction(fill) * width as f64).round() as usize;
    let filled = filled.min(width);
    let mut bar = String::with_capacity(width * FILLED.len_utf8());
    bar.extend(std::iter::repeat(FILLED).take(filled));
    bar.extend(std::iter::repeat(EMPTY).take(width - filled));
    bar
}
