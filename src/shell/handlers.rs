//! Command handlers
//!
//! One handler per command. Every failure is funneled through the umbrella
//! `FmError` into a single "[error] ..." line; nothing propagates past this
//! layer except I/O errors on the output stream itself.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::error::FmError;
use crate::session::{Session, relative_display};
use crate::shell::parser::Command;
use crate::{archive, navigate, resolve, storage};

/// Outcome of a handled command
#[derive(Debug, PartialEq)]
pub enum CommandResult {
    Continue,
    Exit,
}

const COMMANDS: &[(&str, &str)] = &[
    ("mkdir <folder>", "Create a folder"),
    ("rmdir <folder>", "Delete a folder"),
    ("nav in <folder>", "Enter a folder"),
    ("nav up", "Go up one level"),
    ("touch <file>", "Create an empty file"),
    ("write <file> <text>", "Append a line to a file"),
    ("cat <file>", "Show file contents"),
    ("rm <file>", "Delete a file"),
    ("cp <file> <folder>", "Copy a file into a folder by name"),
    ("mv <file> <folder>", "Move a file into a folder by name"),
    ("rename <old> <new>", "Rename a file"),
    ("zip <file/folder> <archive>", "Create a ZIP archive"),
    ("unzip <archive> <folder>", "Extract a ZIP archive"),
    ("list", "List the current folder"),
    ("help", "Show this help"),
    ("exit", "Leave the file manager"),
];

/// Print the command reference
pub fn print_help<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output, "\nAvailable commands:")?;
    for (cmd, desc) in COMMANDS {
        writeln!(output, "  {:<28} {}", cmd, desc)?;
    }
    Ok(())
}

/// Write one status line for a failed operation
fn report<W: Write>(output: &mut W, error: FmError) -> io::Result<()> {
    writeln!(output, "[error] {}", error)
}

/// Handle a single command against the session.
///
/// `input` is the same stream the command line came from; the ambiguous
/// copy/move destination prompt reads its selection from it.
pub fn handle_command<R: BufRead, W: Write>(
    session: &mut Session,
    command: Command,
    input: &mut R,
    output: &mut W,
) -> io::Result<CommandResult> {
    match command {
        Command::Exit => return Ok(CommandResult::Exit),
        Command::Help => print_help(output)?,
        Command::Empty => {}
        Command::Invalid(_) => {
            writeln!(output, "Invalid command. Type 'help' for the command list")?;
        }
        Command::Mkdir(name) => match storage::create_folder(session, &name) {
            Ok(_) => writeln!(output, "[ok] Created folder: {}", name)?,
            Err(e) => report(output, e.into())?,
        },
        Command::Rmdir(name) => match storage::delete_folder(session, &name) {
            Ok(_) => writeln!(output, "[ok] Deleted folder: {}", name)?,
            Err(e) => report(output, e.into())?,
        },
        Command::NavIn(name) => match navigate::enter(session, &name) {
            Ok(result) => writeln!(output, "[ok] Entered: {}", result.display)?,
            Err(e) => report(output, e.into())?,
        },
        Command::NavUp => match navigate::leave(session) {
            Ok(result) => writeln!(output, "[ok] Went up to: {}", result.display)?,
            Err(e) => report(output, e.into())?,
        },
        Command::Touch(name) => match storage::create_file(session, &name) {
            Ok(_) => writeln!(output, "[ok] Created file: {}", name)?,
            Err(e) => report(output, e.into())?,
        },
        Command::Write { name, text } => match storage::write_file(session, &name, &text) {
            Ok(_) => writeln!(output, "[ok] Wrote to file: {}", name)?,
            Err(e) => report(output, e.into())?,
        },
        Command::Cat(name) => match storage::read_file(session, &name) {
            Ok(result) => {
                writeln!(output, "Contents of {}:", name)?;
                write!(output, "{}", result.content)?;
                if !result.content.ends_with('\n') && !result.content.is_empty() {
                    writeln!(output)?;
                }
            }
            Err(e) => report(output, e.into())?,
        },
        Command::Rm(name) => match storage::delete_file(session, &name) {
            Ok(_) => writeln!(output, "[ok] Deleted file: {}", name)?,
            Err(e) => report(output, e.into())?,
        },
        Command::Rename { old, new } => match storage::rename_file(session, &old, &new) {
            Ok(_) => writeln!(output, "[ok] Renamed: {} -> {}", old, new)?,
            Err(e) => report(output, e.into())?,
        },
        Command::Cp { source, dest } => {
            if let Some(dest_dir) = resolve_destination(session, &dest, input, output)? {
                match storage::copy_file(session, &source, &dest_dir) {
                    Ok(result) => writeln!(
                        output,
                        "[ok] Copied {} -> {}",
                        source,
                        relative_display(session.root(), &result.destination)
                    )?,
                    Err(e) => report(output, e.into())?,
                }
            }
        }
        Command::Mv { source, dest } => {
            if let Some(dest_dir) = resolve_destination(session, &dest, input, output)? {
                match storage::move_file(session, &source, &dest_dir) {
                    Ok(result) => writeln!(
                        output,
                        "[ok] Moved {} -> {}",
                        source,
                        relative_display(session.root(), &result.destination)
                    )?,
                    Err(e) => report(output, e.into())?,
                }
            }
        }
        Command::Zip { source, archive } => {
            match archive::create_archive(session, &source, &archive) {
                Ok(result) => writeln!(
                    output,
                    "[ok] Created archive {} ({} file(s))",
                    archive, result.entries
                )?,
                Err(e) => report(output, e.into())?,
            }
        }
        Command::Unzip { archive, target } => {
            match archive::extract_archive(session, &archive, &target) {
                Ok(result) => writeln!(
                    output,
                    "[ok] Extracted {} file(s) into {}",
                    result.entries, target
                )?,
                Err(e) => report(output, e.into())?,
            }
        }
        Command::List => match storage::list_directory(session) {
            Ok(result) => {
                writeln!(output, "Contents of {}:", result.path)?;
                if result.entries.is_empty() {
                    writeln!(output, "  (empty)")?;
                }
                for entry in result.entries {
                    writeln!(output, "  {}", entry)?;
                }
            }
            Err(e) => report(output, e.into())?,
        },
    }

    Ok(CommandResult::Continue)
}

/// Resolve a destination folder name to an absolute directory.
///
/// The search covers the whole working root, not just the cursor. A single
/// match is taken as-is; multiple matches are enumerated and a 1-based
/// choice is read from the input stream. Returns None after printing an
/// error when resolution fails, so the caller aborts without side effects.
fn resolve_destination<R: BufRead, W: Write>(
    session: &Session,
    name: &str,
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<PathBuf>> {
    let matches = match resolve::find_folders(session.root(), name) {
        Ok(matches) => matches,
        Err(e) => {
            report(output, e.into())?;
            return Ok(None);
        }
    };

    if matches.len() == 1 {
        return Ok(Some(matches[0].clone()));
    }

    writeln!(output, "Multiple folders named '{}':", name)?;
    for (i, path) in matches.iter().enumerate() {
        writeln!(
            output,
            "  {}. {}",
            i + 1,
            relative_display(session.root(), path)
        )?;
    }
    write!(output, "Select destination [1-{}]: ", matches.len())?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    match resolve::choose(&matches, &line) {
        Ok(path) => Ok(Some(path.clone())),
        Err(e) => {
            report(output, e.into())?;
            Ok(None)
        }
    }
}
