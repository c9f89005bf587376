use anyhow::Result;
use std::io::{self, IsTerminal, Write};

/// Both ends of the conversation are a terminal.
pub fn is_interactive() -> bool {
  io::stdin().is_terminal() && io::stderr().is_terminal()
}

/// Ask a yes/no question on stderr. Anything but `y`/`yes` is a no.
pub fn confirm(message: &str) -> Result<bool> {
  write!(io::stderr(), "{} [y/N] ", message)?;
  io::stderr().flush()?;

  let mut input = String::new();
  io::stdin().read_line(&mut input)?;

  Ok(is_yes(&input))
}

fn is_yes(input: &str) -> bool {
  matches!(input.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
