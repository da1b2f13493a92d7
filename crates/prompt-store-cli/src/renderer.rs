//! Terminal rendering module for rich markdown output
//!
//! This module provides terminal rendering capabilities using termimad
//! for rich markdown display with optional fallback to plain text.

use std::io::{self, Write};

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

const HEADER_STYLE: &str = "\x1b[34m";
const ERROR_STYLE: &str = "\x1b[31m";
const RESET_STYLE: &str = "\x1b[0m";

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.code_block.set_bg(Color::AnsiValue(238));
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to stdout
    pub fn render(&self, markdown: &str) -> Result<()> {
        self.render_to(&mut io::stdout().lock(), markdown)
    }

    /// Render an error message to stderr
    pub fn render_error(&self, message: &str) -> Result<()> {
        let mut out = io::stderr().lock();
        if self.rich_enabled {
            for line in message.lines() {
                writeln!(out, "{ERROR_STYLE}{line}{RESET_STYLE}")?;
            }
        } else {
            write!(out, "{message}")?;
        }
        Ok(())
    }

    /// Print text to stdout as-is, for machine-readable output
    pub fn render_raw(&self, text: &str) -> Result<()> {
        writeln!(io::stdout().lock(), "{text}")?;
        Ok(())
    }

    fn render_to<W: Write>(&self, out: &mut W, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            // Headers keep their hash symbols
            for line in markdown.lines() {
                if line.starts_with('#') {
                    writeln!(out, "{HEADER_STYLE}{line}{RESET_STYLE}")?;
                } else {
                    writeln!(out, "{}", self.skin.inline(line))?;
                }
            }
        } else {
            write!(out, "{markdown}")?;
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
