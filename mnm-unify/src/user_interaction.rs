use crate::types::{Command, IoResult};
use colored::Colorize;
use common::console::Console;
use common::selection::SelectionState;
use common::types::{CharacterEntry, ConfigFiles};
use regex::Regex;
use std::io::{BufRead, Write};

pub fn print_characters<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    characters: &[CharacterEntry],
    selection: &SelectionState,
) -> IoResult<()> {
    console.say(&format!("{:>3} {:<4} {:<20} {}", "", "", "Server", "Character"))?;

    for (index, entry) in characters.iter().enumerate() {
        let line = decorated_line(selection, entry, basic_line(index, entry, selection));
        console.say(&line)?;
    }

    Ok(())
}

fn basic_line(index: usize, entry: &CharacterEntry, selection: &SelectionState) -> String {
    let role = if selection.is_source(entry) {
        "src"
    } else if selection.is_destination(entry) {
        "dst"
    } else {
        ""
    };

    format!(
        "{:>3} {:<4} {:<20} {}",
        index + 1,
        role,
        entry.server,
        entry.character
    )
}

fn decorated_line(selection: &SelectionState, entry: &CharacterEntry, basic_line: String) -> String {
    if selection.is_source(entry) {
        basic_line.green().bold().to_string()
    } else if selection.is_destination(entry) {
        basic_line.blue().to_string()
    } else {
        basic_line
    }
}

pub fn command_prompt(files: &ConfigFiles, backup_age: &str) -> String {
    let check = |on: bool| if on { "x" } else { " " };

    format!(
        "[{}] (w)indows.json  [{}] c(h)ats.json\n\
         number(s) to select, (c)opy, clear (x), (r)efresh, (b)ackup now{}, (q)uit",
        check(files.windows),
        check(files.chats),
        backup_age
    )
}

pub fn help_text() -> &'static str {
    "Select a source (green), then destinations (blue), then copy. Type one or more list \
     numbers, or one of c, x, r, b, w, h, q."
}

pub fn parse_command(input: &str) -> Option<Command> {
    let numbers = Regex::new(r"^\d+(?:[\s,]+\d+)*$").expect("invalid command regex");

    if numbers.is_match(input) {
        let list = input
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<usize>().ok())
            .collect::<Option<Vec<usize>>>()?;

        return Some(Command::Toggle(list));
    }

    match input.to_lowercase().as_str() {
        "c" | "copy" => Some(Command::Copy),
        "x" | "clear" => Some(Command::Clear),
        "r" | "refresh" => Some(Command::Refresh),
        "b" | "backup" => Some(Command::Backup),
        "w" => Some(Command::ToggleWindows),
        "h" => Some(Command::ToggleChats),
        "q" | "quit" => Some(Command::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_command() {
        assert_eq!(Some(Command::Toggle(vec![3])), parse_command("3"));
        assert_eq!(Some(Command::Toggle(vec![1, 2, 4])), parse_command("1 2,4"));
        assert_eq!(Some(Command::Toggle(vec![1, 2])), parse_command("1, 2"));
        assert_eq!(Some(Command::Copy), parse_command("c"));
        assert_eq!(Some(Command::Clear), parse_command("X"));
        assert_eq!(Some(Command::Refresh), parse_command("refresh"));
        assert_eq!(Some(Command::Backup), parse_command("b"));
        assert_eq!(Some(Command::ToggleWindows), parse_command("w"));
        assert_eq!(Some(Command::ToggleChats), parse_command("h"));
        assert_eq!(Some(Command::Quit), parse_command("q"));
        assert_eq!(None, parse_command(""));
        assert_eq!(None, parse_command("3x"));
        assert_eq!(None, parse_command("-1"));
        assert_eq!(None, parse_command("99999999999999999999999"));
    }

    #[test]
    fn test_basic_line() {
        let alice = CharacterEntry::new("Faydark", "Alice");
        let bob = CharacterEntry::new("Faydark", "Bob");
        let mut selection = SelectionState::new();
        selection.toggle(&alice);
        selection.toggle(&bob);

        assert_eq!(
            "  1 src  Faydark              Alice",
            basic_line(0, &alice, &selection)
        );
        assert_eq!(
            " 12 dst  Faydark              Bob",
            basic_line(11, &bob, &selection)
        );
        assert_eq!(
            "  3      Cragmire             Carol",
            basic_line(2, &CharacterEntry::new("Cragmire", "Carol"), &selection)
        );
    }

    #[test]
    fn test_command_prompt() {
        let files = ConfigFiles {
            windows: true,
            chats: false,
        };

        assert!(command_prompt(&files, " (no backup)").starts_with("[x] (w)indows.json  [ ] c(h)ats.json\n"));
        assert!(command_prompt(&files, " (2 days old)").contains("(b)ackup now (2 days old)"));
    }
}
