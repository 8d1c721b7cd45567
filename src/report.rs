//! Color-annotated console status lines.
//!
//! Status output is what the user reads while a project is scaffolded and is
//! kept apart from the `log` records enabled with `-v`.

use colored::{Color, ColoredString, Colorize};

/// Fixed set of annotations a status line can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// No color.
    Plain,
    /// A stage finished.
    Info,
    /// The whole run finished.
    Success,
    Highlight,
    /// Secondary details such as usage examples and the closing banner.
    Muted,
    /// Inline project name.
    Accent,
    /// Recoverable problem the user should act on.
    Warning,
    Error,
    /// The run is aborted.
    Fatal,
}

impl Tone {
    /// Terminal color for this tone, `None` for plain text.
    pub fn color(self) -> Option<Color> {
        match self {
            Tone::Plain => None,
            Tone::Info => Some(Color::Cyan),
            Tone::Success => Some(Color::Green),
            Tone::Highlight => Some(Color::BrightGreen),
            Tone::Muted => Some(Color::BrightBlack),
            Tone::Accent => Some(Color::Blue),
            Tone::Warning => Some(Color::Magenta),
            Tone::Error => Some(Color::Red),
            Tone::Fatal => Some(Color::BrightRed),
        }
    }
}

/// Applies the tone to `text`.
pub fn paint<S: AsRef<str>>(text: S, tone: Tone) -> ColoredString {
    match tone.color() {
        Some(color) => text.as_ref().color(color),
        None => text.as_ref().normal(),
    }
}

/// Renders the project name the way every status line refers to it.
pub fn project_label(name: &str) -> String {
    paint(format!("<{name}>"), Tone::Accent).to_string()
}

/// Writes a status line to stdout.
pub fn message<S: AsRef<str>>(text: S, tone: Tone) {
    println!("{}", paint(text, tone));
}

/// Writes a status line to stderr.
pub fn error<S: AsRef<str>>(text: S, tone: Tone) {
    eprintln!("{}", paint(text, tone));
}

/// Globally disables ANSI colors for the rest of the process.
pub fn disable_colors() {
    colored::control::set_override(false);
}
