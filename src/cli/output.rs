use colored::{Color, ColoredString, Colorize};
use std::fmt;
use std::io::IsTerminal;
use std::sync::{OnceLock, RwLock};

use tally_config::{Config, Theme};

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Hint,
    Section,
}

#[derive(Clone, Copy, Debug)]
pub struct OutputPreferences {
    pub color_enabled: bool,
    pub theme: Theme,
}

impl Default for OutputPreferences {
    fn default() -> Self {
        Self {
            color_enabled: false,
            theme: Theme::Light,
        }
    }
}

static PREFERENCES: OnceLock<RwLock<OutputPreferences>> = OnceLock::new();

pub fn set_preferences(prefs: OutputPreferences) {
    let lock = PREFERENCES.get_or_init(|| RwLock::new(OutputPreferences::default()));
    if let Ok(mut guard) = lock.write() {
        *guard = prefs;
    }
    colored::control::set_override(prefs.color_enabled);
}

/// Derives output preferences from the config, the terminal, and `NO_COLOR`.
pub fn apply_config(config: &Config) {
    let stdout_tty = std::io::stdout().is_terminal();
    let no_color = std::env::var_os("NO_COLOR").is_some();
    set_preferences(OutputPreferences {
        color_enabled: config.ui_color_enabled && stdout_tty && !no_color,
        theme: config.theme,
    });
}

pub fn preferences() -> OutputPreferences {
    PREFERENCES
        .get_or_init(|| RwLock::new(OutputPreferences::default()))
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

/// Picks the light or dark variant of a palette colour for the active theme.
pub fn palette(color: Color) -> Color {
    match (preferences().theme, color) {
        (Theme::Light, color) => color,
        (Theme::Dark, Color::Red) => Color::BrightRed,
        (Theme::Dark, Color::Green) => Color::BrightGreen,
        (Theme::Dark, Color::Yellow) => Color::BrightYellow,
        (Theme::Dark, Color::Blue) => Color::BrightBlue,
        (Theme::Dark, Color::Cyan) => Color::BrightCyan,
        (Theme::Dark, other) => other,
    }
}

pub fn paint(text: impl fmt::Display, color: Color) -> ColoredString {
    text.to_string().color(palette(color))
}

fn build_label(kind: MessageKind) -> (&'static str, &'static str) {
    match kind {
        MessageKind::Info => ("INFO", "[i]"),
        MessageKind::Success => ("SUCCESS", "[✓]"),
        MessageKind::Warning => ("WARNING", "[!]"),
        MessageKind::Error => ("ERROR", "[x]"),
        MessageKind::Hint => ("HINT", "[?]"),
        MessageKind::Section => ("", ""),
    }
}

pub(crate) fn format_message(kind: MessageKind, message: impl fmt::Display) -> String {
    let text = message.to_string();
    let formatted = match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()),
        _ => {
            let (label, icon) = build_label(kind);
            format!("{label}: {icon} {text}")
        }
    };

    match kind {
        MessageKind::Success => paint(formatted, Color::Green).to_string(),
        MessageKind::Warning => paint(formatted, Color::Yellow).to_string(),
        MessageKind::Error => paint(formatted, Color::Red).bold().to_string(),
        MessageKind::Hint => paint(formatted, Color::Cyan).to_string(),
        MessageKind::Section => paint(formatted, Color::Blue).bold().to_string(),
        MessageKind::Info => formatted,
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let formatted = format_message(kind, message);
    match kind {
        MessageKind::Section => println!("\n{}", formatted),
        _ => println!("{}", formatted),
    }
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

pub fn hint(message: impl fmt::Display) {
    print(MessageKind::Hint, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}

pub fn line(text: impl fmt::Display) {
    println!("{}", text);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_messages_carry_labels() {
        set_preferences(OutputPreferences::default());
        assert_eq!(
            format_message(MessageKind::Warning, "careful"),
            "WARNING: [!] careful"
        );
        assert_eq!(format_message(MessageKind::Section, " Dashboard "), "=== Dashboard ===");
    }
}
