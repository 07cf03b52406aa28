use crate::utils::error::Result;
use std::io::BufRead;

pub const PROMPT: &str = "Your Name: ";

/// Reads one line and strips its terminator. End of input is not an error,
/// it just yields an empty name.
pub fn read_name<R: BufRead>(mut input: R) -> Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }

    Ok(line)
}
