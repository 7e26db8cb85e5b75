//! Interactive shell
//!
//! The boundary layer: reads lines, parses them into commands, dispatches
//! to the core operations, and prints one status line per command. All
//! errors stop at this layer; a bad command never ends the session.

pub mod handlers;
pub mod parser;

pub use handlers::{CommandResult, handle_command};
pub use parser::{Command, parse_command};

use log::info;
use std::io::{BufRead, Write};

use crate::session::Session;

/// Run the command loop until `exit` or end of input.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    prompt: &str,
    input: &mut R,
    output: &mut W,
) -> std::io::Result<()> {
    writeln!(
        output,
        "Sandbox file manager - working root: {}",
        session.root().display()
    )?;
    handlers::print_help(output)?;

    let mut line = String::new();
    loop {
        write!(output, "\n[{}] {}", session.relative_cursor(), prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let command = parse_command(&line);
        if command == Command::Empty {
            continue;
        }
        info!("Command: {}", line.trim());

        match handle_command(session, command, input, output)? {
            CommandResult::Exit => break,
            CommandResult::Continue => {}
        }
    }

    Ok(())
}
