use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::constants::ORANGE;

/// Display width of `s` in terminal cells
pub fn terminal_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Pad `s` with spaces to `width` terminal cells
pub fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(terminal_width(s));
    format!("{s}{}", " ".repeat(fill))
}

/// Print a styled title bar with orange separator matching the title width
pub fn print_title_bar(title: &str) {
    println!("{}", title.bold().bright_white());
    let separator: String = "─".repeat(terminal_width(title));
    println!("{}", separator.truecolor(ORANGE.0, ORANGE.1, ORANGE.2));
}

/// Print a subdued subtitle bar with gray separator matching the title width
pub fn print_subtitle_bar(title: &str) {
    println!("{}", title.white());
    let separator: String = "─".repeat(terminal_width(title));
    println!("{}", separator.dimmed());
}

/// Display a success message
pub fn success(message: &str) {
    println!("  {} {}", "✓".green(), message);
}

/// Display a failure message
pub fn failure(message: &str) {
    println!("  {} {}", "✗".red().bold(), message);
}

/// Display an info message
pub fn info(message: &str) {
    println!("  • {message}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_counts_umlauts_as_one_cell() {
        assert_eq!(pad("Zurück", 8), "Zurück  ");
        assert_eq!(pad("toolong", 3), "toolong");
    }
}
