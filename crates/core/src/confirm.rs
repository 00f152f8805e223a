use std::io::{self, BufRead};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Proceed,
    Cancelled,
}

pub const CONFIRM_PROMPT: &str = "\nLooks good? ENTER to confirm or CTRL-C to cancel";

/// Any entered line proceeds. End of input counts as a cancellation.
pub fn read_confirmation<R: BufRead>(reader: &mut R) -> io::Result<Confirmation> {
    let mut line = String::new();
    let read = reader.read_line(&mut line)?;
    if read == 0 {
        return Ok(Confirmation::Cancelled);
    }
    Ok(Confirmation::Proceed)
}
