use crossterm::cursor::MoveTo;
use crossterm::terminal::{Clear, ClearType};
use crossterm::Command;

/// Escape sequence that clears the terminal and homes the cursor
pub fn clear_sequence() -> String {
    let mut ansi = String::new();
    // writing into a String cannot fail
    let _ = Clear(ClearType::All).write_ansi(&mut ansi);
    let _ = MoveTo(0, 0).write_ansi(&mut ansi);
    ansi
}
