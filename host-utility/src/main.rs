use anyhow::Result;
use charlcd_sim::Geometry;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use solarlog_glyphs::GlyphName;
use solarlog_locale::{ACTIVE_LANGUAGE, Language, MessageKey};
use std::path::PathBuf;

mod check;
mod config;
mod constants;
mod export;
mod glyphs;
mod render;
mod strings;
mod utils;

/// Inspect and preview the solar logger's display glyphs and strings
#[derive(Parser, Debug)]
#[command(name = "solarlog")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Display detailed diagnostic information
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the custom characters as pixel art
    Glyphs {
        /// Glyph to show (e.g. degree-celsius); all when omitted
        name: Option<GlyphName>,
    },
    /// List the display strings
    Strings {
        /// Language to list (de, en); all when omitted
        #[arg(long)]
        lang: Option<Language>,

        /// Also show the character ROM codes of every string
        #[arg(long)]
        encoded: bool,
    },
    /// Verify glyph rows, string tables and the CGRAM round trip
    Check {
        /// Check label widths against a 20x4 display
        #[arg(long)]
        large: bool,
    },
    /// Render a simulated screen as text
    Render {
        /// Display language (defaults to the build language)
        #[arg(long)]
        lang: Option<Language>,

        /// Slot map JSON file
        #[arg(long)]
        slots: Option<PathBuf>,

        /// Simulate a 20x4 display instead of 16x2
        #[arg(long)]
        large: bool,

        /// Show a single message (e.g. SAVED) instead of the status overview
        #[arg(long)]
        message: Option<MessageKey>,

        /// Maximum temperature shown on the overview
        #[arg(long, default_value = "23.5", allow_hyphen_values = true)]
        max: String,

        /// Minimum temperature shown on the overview
        #[arg(long, default_value = "-4.0", allow_hyphen_values = true)]
        min: String,
    },
    /// Print glyphs and strings of one language as JSON
    Export {
        /// Language to export (defaults to the build language)
        #[arg(long)]
        lang: Option<Language>,
    },
    /// Print a shell completion script
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn geometry(large: bool) -> Geometry {
    if large {
        Geometry::Lcd20x4
    } else {
        Geometry::Lcd16x2
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    match cli.command {
        None => {
            // No subcommand provided, print help
            Cli::command().print_help()?;
        }
        Some(Commands::Glyphs { name }) => glyphs::run_glyphs(name),
        Some(Commands::Strings { lang, encoded }) => strings::run_strings(lang, encoded)?,
        Some(Commands::Check { large }) => check::run_check(geometry(large))?,
        Some(Commands::Render {
            lang,
            slots,
            large,
            message,
            max,
            min,
        }) => {
            render::run_render(&render::RenderOptions {
                language: lang.unwrap_or(ACTIVE_LANGUAGE),
                slots: slots.as_deref(),
                geometry: geometry(large),
                message,
                max: &max,
                min: &min,
            })?;
        }
        Some(Commands::Export { lang }) => export::run_export(lang.unwrap_or(ACTIVE_LANGUAGE))?,
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "solarlog",
                &mut std::io::stdout(),
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_render_arguments() {
        let cli = Cli::try_parse_from([
            "solarlog", "render", "--lang", "DE", "--large", "--message", "STR_SAVED", "--min",
            "-12.5",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Render {
                lang,
                large,
                message,
                min,
                ..
            }) => {
                assert_eq!(lang, Some(Language::De));
                assert!(large);
                assert_eq!(message, Some(MessageKey::Saved));
                assert_eq!(min, "-12.5");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_unsupported_language_is_rejected() {
        assert!(Cli::try_parse_from(["solarlog", "strings", "--lang", "fr"]).is_err());
    }
}
