//! Interactive text interface: prompts, input parsing, and the play loop.
//!
//! The traversal engine knows nothing about typed input. This module owns the
//! exit words, the default player name, and one-based menu numbering, and turns
//! lines of text into zero-based selections for the engine.

use std::io::{BufRead, Write};
use tracing::debug;

use crate::error::InterfaceError;
use crate::session::TraversalSession;

/// Words that end a session at any prompt, matched case-insensitively.
pub const EXIT_WORDS: [&str; 3] = ["quit", "exit", "done"];

/// Name used when the player leaves the name prompt blank.
pub const DEFAULT_PLAYER_NAME: &str = "Spartan";

pub const NAME_PROMPT: &str = "What's your name? ";

pub const CHOICE_PROMPT: &str = "Your choice: ";

/// Printed after any input that is neither an exit word nor a menu number.
pub const INVALID_CHOICE_MESSAGE: &str =
    "Please enter a valid option number or type 'quit' to finish.";

const MENU_FOOTER: &str =
    "Type the number of your choice, or type 'quit' to finish and view your travel map.";

const STORY_END_MESSAGE: &str = "There are no more choices here. Your journey is complete.";

/// One line of player input, interpreted against the current menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// An exit word was entered.
    Quit,
    /// A menu entry was chosen; holds the zero-based index.
    Choose(usize),
    /// Anything else; the player should be asked again.
    Invalid,
}

/// Why the play loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The player typed an exit word.
    Quit,
    /// The story reached a node without choices.
    StoryEnded,
    /// Input ran out; treated like quitting.
    EndOfInput,
}

impl PlayOutcome {
    pub fn finished_story(&self) -> bool {
        matches!(self, PlayOutcome::StoryEnded)
    }
}

/// Interpret a raw input line against a menu of `option_count` entries.
///
/// Menu numbers are one-based on screen; the returned index is zero-based.
pub fn parse_command(raw: &str, option_count: usize) -> Command {
    let input = raw.trim().to_lowercase();

    if EXIT_WORDS.contains(&input.as_str()) {
        return Command::Quit;
    }

    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Command::Invalid;
    }

    match input.parse::<usize>() {
        Ok(number) if (1..=option_count).contains(&number) => Command::Choose(number - 1),
        _ => Command::Invalid,
    }
}

/// Trim a typed name, falling back to the default when blank.
pub fn normalize_player_name(raw: &str) -> String {
    let name = raw.trim();
    if name.is_empty() {
        DEFAULT_PLAYER_NAME.to_string()
    } else {
        name.to_string()
    }
}

/// Ask for the player's name.
pub fn read_player_name<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<String, InterfaceError> {
    write!(output, "{NAME_PROMPT}")?;
    output.flush()?;

    let line = read_line_lossy(input)?.unwrap_or_default();
    Ok(normalize_player_name(&line))
}

/// Read one line, replacing bytes that are not UTF-8. `None` at end of input.
fn read_line_lossy<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

/// Run the session interactively until the player quits, input ends, or the
/// story runs out of choices.
pub fn play<R: BufRead, W: Write>(
    session: &mut TraversalSession<'_>,
    player: &str,
    input: &mut R,
    output: &mut W,
) -> Result<PlayOutcome, InterfaceError> {
    writeln!(
        output,
        "\nWelcome, {player}! Each choice takes you somewhere new. \
         Type 'quit' anytime to end and draw your map.\n"
    )?;

    loop {
        let node = session.current_node()?;
        writeln!(output, "\n{}", node.describe())?;

        if node.is_terminal() {
            writeln!(output, "\n{STORY_END_MESSAGE}")?;
            return Ok(PlayOutcome::StoryEnded);
        }

        writeln!(output, "\n{MENU_FOOTER}")?;

        match read_selection(input, output, node.choices.len())? {
            Selection::Choice(index) => {
                session.select(index)?;
            }
            Selection::Stop(outcome) => return Ok(outcome),
        }
    }
}

enum Selection {
    Choice(usize),
    Stop(PlayOutcome),
}

/// Prompt until the player picks a menu entry or asks to stop.
fn read_selection<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    option_count: usize,
) -> Result<Selection, InterfaceError> {
    loop {
        write!(output, "{CHOICE_PROMPT}")?;
        output.flush()?;

        let Some(line) = read_line_lossy(input)? else {
            debug!("input closed; ending session");
            return Ok(Selection::Stop(PlayOutcome::EndOfInput));
        };

        match parse_command(&line, option_count) {
            Command::Quit => return Ok(Selection::Stop(PlayOutcome::Quit)),
            Command::Choose(index) => return Ok(Selection::Choice(index)),
            Command::Invalid => {
                debug!(input = line.trim(), "rejected menu input");
                writeln!(output, "{INVALID_CHOICE_MESSAGE}")?;
            }
        }
    }
}
