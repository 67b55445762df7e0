//! Output formatting for token lookup results

use crate::index::engine::IndexEngine;
use crate::index::types::{DocId, Occurrence};
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Print occurrence records in `path:page:position` form, grouped by
/// document when `heading` is set.
pub fn print_occurrences(
    engine: &IndexEngine,
    occurrences: &[Occurrence],
    color: bool,
    heading: bool,
) -> io::Result<()> {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    if occurrences.is_empty() {
        return Ok(());
    }

    let mut current_doc: Option<DocId> = None;

    for occurrence in occurrences {
        let is_new_doc = current_doc != Some(occurrence.doc_id);

        if is_new_doc && heading {
            if current_doc.is_some() {
                writeln!(stdout)?;
            }
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
            writeln!(stdout, "{}", doc_label(engine, occurrence.doc_id))?;
            stdout.reset()?;
        }
        current_doc = Some(occurrence.doc_id);

        if !heading {
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)))?;
            write!(stdout, "{}", doc_label(engine, occurrence.doc_id))?;
            stdout.reset()?;
            write!(stdout, ":")?;
        }

        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(stdout, "page {}", occurrence.page_number)?;
        stdout.reset()?;
        writeln!(stdout, ":{}", occurrence.position)?;
    }

    Ok(())
}

/// Print one line per distinct document containing the token.
pub fn print_documents_only(engine: &IndexEngine, occurrences: &[Occurrence]) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let mut seen = std::collections::HashSet::new();

    for occurrence in occurrences {
        if seen.insert(occurrence.doc_id) {
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)))?;
            writeln!(stdout, "{}", doc_label(engine, occurrence.doc_id))?;
            stdout.reset()?;
        }
    }

    Ok(())
}

fn doc_label(engine: &IndexEngine, doc_id: DocId) -> String {
    match engine.get_path(doc_id) {
        Ok(path) => path.display().to_string(),
        Err(_) => format!("<document {doc_id}>"),
    }
}
