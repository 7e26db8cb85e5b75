//! Command parsing
//!
//! Turns a raw input line into a `Command`. Arity mismatches and unknown
//! verbs collapse into `Invalid`; a blank line is `Empty`.

/// A parsed shell command
#[derive(Debug, PartialEq)]
pub enum Command {
    Mkdir(String),
    Rmdir(String),
    NavIn(String),
    NavUp,
    Touch(String),
    Write { name: String, text: String },
    Cat(String),
    Rm(String),
    Cp { source: String, dest: String },
    Mv { source: String, dest: String },
    Rename { old: String, new: String },
    Zip { source: String, archive: String },
    Unzip { archive: String, target: String },
    List,
    Help,
    Exit,
    Empty,
    Invalid(String),
}

/// Parse a raw command line into a Command
pub fn parse_command(raw: &str) -> Command {
    let trimmed = raw.trim();
    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    let Some((first, args)) = tokens.split_first() else {
        return Command::Empty;
    };
    let action = first.to_ascii_lowercase();

    match (action.as_str(), args) {
        ("exit", []) => Command::Exit,
        ("help", []) => Command::Help,
        ("list", []) => Command::List,
        ("mkdir", [name]) => Command::Mkdir(name.to_string()),
        ("rmdir", [name]) => Command::Rmdir(name.to_string()),
        ("nav", ["in", name]) => Command::NavIn(name.to_string()),
        ("nav", ["up"]) => Command::NavUp,
        ("touch", [name]) => Command::Touch(name.to_string()),
        ("write", [name, text @ ..]) if !text.is_empty() => Command::Write {
            name: name.to_string(),
            text: text.join(" "),
        },
        ("cat", [name]) => Command::Cat(name.to_string()),
        ("rm", [name]) => Command::Rm(name.to_string()),
        ("cp", [source, dest]) => Command::Cp {
            source: source.to_string(),
            dest: dest.to_string(),
        },
        ("mv", [source, dest]) => Command::Mv {
            source: source.to_string(),
            dest: dest.to_string(),
        },
        ("rename", [old, new]) => Command::Rename {
            old: old.to_string(),
            new: new.to_string(),
        },
        ("zip", [source, archive]) => Command::Zip {
            source: source.to_string(),
            archive: archive.to_string(),
        },
        ("unzip", [archive, target]) => Command::Unzip {
            archive: archive.to_string(),
            target: target.to_string(),
        },
        _ => Command::Invalid(trimmed.to_string()),
    }
}
