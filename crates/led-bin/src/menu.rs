//! Numbered menu loop over stdin.
//!
//! Maps the numbered commands onto core actions and the state's external
//! interface. Core errors are displayed and never drive control flow; all
//! retry policy is "show the prompt again on the next turn".

use anyhow::Result;
use core_actions::{Action, dispatch, io_ops, search};
use core_config::Config;
use core_state::EditorState;
use core_text::EditError;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::info;

use crate::cipher;

const HELP: &str = "Commands:
 1: Append text symbols to the end
 2: Start the new line
 3: Save text into file
 4: Load text from file
 5: Print the current text
 6: Insert text at the cursor
 7: Search text placement
 8: Delete text
 9: Undo command
10: Redo command
11: Cut text
12: Copy text
13: Paste text
14: Insert text with replacement
15: Move cursor
16: Clear console
17: Command list
18: Encrypt text (Caesar)
19: Decrypt text (Caesar)
 0: Exit program";

type InputLines = io::Lines<io::StdinLock<'static>>;

pub fn run_loop(state: &mut EditorState, config: &Config) -> Result<()> {
    let mut lines = io::stdin().lock().lines();
    loop {
        println!("Choose the command or enter 17 for the command list:");
        let Some(line) = read_line(&mut lines)? else {
            break;
        };
        match line.trim().parse::<u32>() {
            Ok(choice) => {
                if !handle_choice(choice, state, config, &mut lines)? {
                    break;
                }
            }
            Err(_) => println!("Enter a command number"),
        }
    }
    Ok(())
}

fn handle_choice(
    choice: u32,
    state: &mut EditorState,
    config: &Config,
    lines: &mut InputLines,
) -> Result<bool> {
    match choice {
        1 => {
            if let Some(text) = prompt(lines, "Enter text to append: ")? {
                report(dispatch(Action::Append(text), state));
            }
        }
        2 => report(dispatch(Action::StartNewline, state)),
        3 => {
            if let Some(name) = prompt(lines, "Enter the file name for saving: ")? {
                match io_ops::save_file(state, Path::new(name.trim())) {
                    io_ops::SaveFileResult::Success => println!("Text saved successfully"),
                    io_ops::SaveFileResult::Error => println!("Error saving file"),
                }
            }
        }
        4 => {
            if let Some(name) = prompt(lines, "Enter the file name for loading: ")? {
                match io_ops::load_file(state, Path::new(name.trim())) {
                    io_ops::LoadFileResult::Success { .. } => println!("Text loaded successfully"),
                    io_ops::LoadFileResult::Error => println!("Error opening file"),
                }
            }
        }
        5 => {
            for row in state.snapshot_for_output() {
                print!("{row}");
            }
            println!();
        }
        6 => {
            if let Some(text) = prompt(lines, "Enter text to insert: ")? {
                report(dispatch(Action::Insert(text), state));
            }
        }
        7 => {
            if let Some(pattern) = prompt(lines, "Enter text you want to find: ")? {
                let hits = search(state, pattern.trim_end());
                if hits.is_empty() {
                    println!("Text not found");
                } else {
                    let spots: Vec<String> = hits
                        .iter()
                        .map(|m| format!("{} {}", m.row, m.col))
                        .collect();
                    println!("Text found in: {}", spots.join("; "));
                }
            }
        }
        8 => {
            if let Some(length) = prompt_length(lines, "delete")? {
                report_with(dispatch(Action::Delete(length), state), "Text deleted successfully");
            }
        }
        9 => report(dispatch(Action::Undo, state)),
        10 => report(dispatch(Action::Redo, state)),
        11 => {
            if let Some(length) = prompt_length(lines, "cut")? {
                report_with(dispatch(Action::Cut(length), state), "Text cut successfully");
            }
        }
        12 => {
            if let Some(length) = prompt_length(lines, "copy")? {
                report_with(dispatch(Action::Copy(length), state), "Text copied successfully");
            }
        }
        13 => report_with(dispatch(Action::Paste, state), "Text pasted successfully"),
        14 => {
            if let Some(text) = prompt(lines, "Enter text to insert: ")? {
                report(dispatch(Action::InsertReplace(text), state));
            }
        }
        15 => {
            if let Some(line) = prompt(lines, "Enter the row and column to move cursor: ")? {
                let mut parts = line.split_whitespace();
                let row = parts.next().and_then(|s| s.parse::<usize>().ok());
                let col = parts.next().and_then(|s| s.parse::<usize>().ok());
                match (row, col) {
                    (Some(row), Some(col)) => {
                        report(dispatch(Action::MoveCursor { row, col }, state));
                    }
                    _ => println!("Enter two numbers: row and column"),
                }
            }
        }
        16 => {
            print!("\x1b[2J\x1b[1;1H");
            io::stdout().flush()?;
        }
        17 => println!("{HELP}"),
        18 => cipher_apply(state, config, lines, false)?,
        19 => cipher_apply(state, config, lines, true)?,
        0 => return Ok(false),
        _ => println!("The command is not implemented"),
    }
    Ok(true)
}

/// Transform the whole buffer through the bulk interface. Replacing the
/// contents resets history, so a cipher pass is not undoable.
fn cipher_apply(
    state: &mut EditorState,
    config: &Config,
    lines: &mut InputLines,
    decrypt: bool,
) -> Result<()> {
    let Some(raw) = prompt(lines, "Enter the key (empty for the configured default): ")? else {
        return Ok(());
    };
    let key = if raw.trim().is_empty() {
        config.file.cipher.shift
    } else {
        match raw.trim().parse::<u8>() {
            Ok(k) => k,
            Err(_) => {
                println!("Enter a key between 0 and 255");
                return Ok(());
            }
        }
    };
    let transformed: Vec<String> = (0..=state.line_count())
        .filter_map(|row| state.line_text(row))
        .map(|line| {
            if decrypt {
                cipher::decrypt(line, key)
            } else {
                cipher::encrypt(line, key)
            }
        })
        .collect();
    match state.replace_all_lines(&transformed) {
        Ok(()) => {
            info!(target: "cipher", key, decrypt, rows = state.line_count(), "cipher_applied");
            println!("Text transformed");
        }
        Err(e) => println!("{e}"),
    }
    Ok(())
}

fn report(result: Result<(), EditError>) {
    if let Err(e) = result {
        println!("{e}");
    }
}

fn report_with(result: Result<(), EditError>, success: &str) {
    match result {
        Ok(()) => println!("{success}"),
        Err(e) => println!("{e}"),
    }
}

fn prompt(lines: &mut InputLines, label: &str) -> Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;
    read_line(lines)
}

fn prompt_length(lines: &mut InputLines, action: &str) -> Result<Option<usize>> {
    let label = format!("Enter the length of text to {action}: ");
    let Some(raw) = prompt(lines, &label)? else {
        return Ok(None);
    };
    match raw.trim().parse::<usize>() {
        Ok(n) => Ok(Some(n)),
        Err(_) => {
            println!("Enter a number");
            Ok(None)
        }
    }
}

fn read_line(lines: &mut InputLines) -> Result<Option<String>> {
    match lines.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}
