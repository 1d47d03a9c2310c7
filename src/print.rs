//! Print mode - the manual on stdout, no terminal UI
//!
//! `text` is meant for reading or piping into a pager. `json` is NDJSON,
//! one section object per line:
//!
//! ```json
//! {"id":"overview","title":"Overview","content":"The DRM Technic ..."}
//! {"id":"installation","title":"Installation","content":[{"kind":"step","step":1,"text":"..."}]}
//! ```

use std::io::{self, Write};

use clap::ValueEnum;
use opmanual_core::prelude::*;
use opmanual_core::{
    sections, Section, SectionContent, DEVICE_TITLE, MANUAL_SUBTITLE, NOTE_TEXT, NOTE_TITLE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PrintFormat {
    Text,
    Json,
}

/// Write the whole manual to stdout
pub fn print_manual(format: PrintFormat) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_manual(&mut out, format).context("Failed to print manual")?;
    out.flush().context("Failed to flush stdout")?;
    info!("Printed manual as {:?}", format);
    Ok(())
}

pub fn write_manual<W: Write>(out: &mut W, format: PrintFormat) -> Result<()> {
    match format {
        PrintFormat::Text => write_text(out),
        PrintFormat::Json => write_json(out),
    }
}

fn write_text<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", DEVICE_TITLE)?;
    writeln!(out, "{}", MANUAL_SUBTITLE)?;

    for (index, section) in sections().iter().enumerate() {
        writeln!(out)?;
        write_section_text(out, index + 1, section)?;
    }

    writeln!(out)?;
    writeln!(out, "{}: {}", NOTE_TITLE, NOTE_TEXT)?;
    Ok(())
}

fn write_section_text<W: Write>(out: &mut W, number: usize, section: &Section) -> Result<()> {
    let heading = format!("{}. {}", number, section.title);
    writeln!(out, "{}", heading)?;
    writeln!(out, "{}", "-".repeat(heading.chars().count()))?;

    match section.content {
        SectionContent::Text(text) => {
            for line in text.lines() {
                writeln!(out, "{}", line)?;
            }
        }
        SectionContent::Items(items) => {
            for item in items {
                writeln!(out, "{}", item.display_title())?;
                for line in item.display_body().lines() {
                    writeln!(out, "    {}", line)?;
                }
            }
        }
    }
    Ok(())
}

fn write_json<W: Write>(out: &mut W) -> Result<()> {
    for section in sections() {
        serde_json::to_writer(&mut *out, section)?;
        writeln!(out)?;
    }
    Ok(())
}
