//! Argument parsing and table rendering for the `jot` binary. Not part of
//! the library API proper; nothing here is reachable from the stores.

use crate::model::Note;
use crate::schema;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cell values wider than this are cut for display.
const MAX_CELL_WIDTH: usize = 60;

#[derive(Parser, Debug)]
#[command(name = "jot")]
#[command(version, about = "Crash-safe plain-file notes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding the notes
    #[arg(short, long, global = true, default_value = ".")]
    pub dir: PathBuf,

    /// Override the configured storage strategy
    /// (memory|text-dir|json-dir|json-file|pairs-file)
    #[arg(short, long, global = true)]
    pub storage: Option<String>,

    /// Hold an advisory lock on the directory for the duration of the
    /// command
    #[arg(long, global = true)]
    pub lock: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new note
    #[command(alias = "add")]
    New {
        /// Content of the note
        content: Option<String>,
    },

    /// List all notes
    #[command(alias = "ls")]
    List,

    /// Print one note's content
    Show { id: String },

    /// Replace a note's content
    Edit { id: String, content: String },

    /// Delete a note
    #[command(alias = "delete")]
    Rm { id: String },

    /// Delete all notes
    Clear,

    /// Print the number of notes
    Count,
}

/// Render notes as a table with one column per schema field.
pub fn render_table(notes: &[Note]) -> String {
    let labels: Vec<String> = schema::FIELDS.iter().map(|field| field.label()).collect();
    let mut widths: Vec<usize> = labels.iter().map(|label| label.width()).collect();

    let rows: Vec<Vec<String>> = notes
        .iter()
        .map(|note| {
            schema::FIELDS
                .iter()
                .enumerate()
                .map(|(col, field)| {
                    let cell = clip((field.get)(note));
                    widths[col] = widths[col].max(cell.width());
                    cell
                })
                .collect()
        })
        .collect();

    let mut out = String::new();
    for (col, label) in labels.iter().enumerate() {
        // Pad before styling; ANSI escapes would throw the width off.
        let padded = pad_to(label, widths[col]);
        out.push_str(&format!("{}  ", padded.bold()));
    }
    out.push('\n');
    for row in rows {
        for (col, cell) in row.iter().enumerate() {
            out.push_str(&pad_to(cell, widths[col]));
            out.push_str("  ");
        }
        out.push('\n');
    }
    out
}

/// Pad `text` with spaces to `width` terminal columns.
fn pad_to(text: &str, width: usize) -> String {
    let mut out = text.to_string();
    for _ in text.width()..width {
        out.push(' ');
    }
    out
}

/// First line only, truncated with an ellipsis when too wide. Widths are
/// display columns, so double-width glyphs count twice.
fn clip(value: &str) -> String {
    let line = value.lines().next().unwrap_or("");
    if line.width() <= MAX_CELL_WIDTH {
        return line.to_string();
    }
    let mut cut = String::new();
    let mut used = 0;
    for c in line.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > MAX_CELL_WIDTH - 1 {
            break;
        }
        cut.push(c);
        used += w;
    }
    cut.push('…');
    cut
}
