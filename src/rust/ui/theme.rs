use clap::ValueEnum;
use console::Style;

/// Light/dark palette for the terminal form. Purely cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Accent used for the header and safe verdicts.
    pub fn accent(self) -> Style {
        match self {
            Theme::Dark => Style::new().green().bright(),
            Theme::Light => Style::new().green(),
        }
    }

    /// Used for cyberbullying verdicts.
    pub fn alert(self) -> Style {
        match self {
            Theme::Dark => Style::new().red().bright(),
            Theme::Light => Style::new().red(),
        }
    }

    pub fn muted(self) -> Style {
        match self {
            Theme::Dark => Style::new().white().dim(),
            Theme::Light => Style::new().black().dim(),
        }
    }

    pub fn text(self) -> Style {
        match self {
            Theme::Dark => Style::new().white(),
            Theme::Light => Style::new().black(),
        }
    }
}
