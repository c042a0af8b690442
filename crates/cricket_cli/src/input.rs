//! Line-oriented console input helpers.
//!
//! Every helper returns `Ok(None)` when the input stream ends (Ctrl-D),
//! which callers treat as "cancel".

use std::io::{self, Write};

/// Print a prompt and read one trimmed line.
pub fn prompt(label: &str) -> io::Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut line = String::new();
    let bytes_read = io::stdin().read_line(&mut line)?;
    if bytes_read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Keep asking until the user enters a whole number.
pub fn prompt_u32(label: &str) -> io::Result<Option<u32>> {
    loop {
        let line = match prompt(label)? {
            Some(line) => line,
            None => return Ok(None),
        };
        match line.parse::<u32>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => println!("Please enter a whole number."),
        }
    }
}

/// Numeric prompt that treats a blank line as zero. Negative values are
/// accepted so mistakes can be backed out.
pub fn prompt_i32_or_zero(label: &str) -> io::Result<Option<i32>> {
    loop {
        let line = match prompt(label)? {
            Some(line) => line,
            None => return Ok(None),
        };
        if line.is_empty() {
            return Ok(Some(0));
        }
        match line.parse::<i32>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => println!("Please enter a whole number."),
        }
    }
}

/// Yes/no prompt. A blank line counts as "no".
pub fn prompt_yes_no(label: &str) -> io::Result<Option<bool>> {
    loop {
        let line = match prompt(label)? {
            Some(line) => line.to_ascii_lowercase(),
            None => return Ok(None),
        };
        match line.as_str() {
            "y" | "yes" => return Ok(Some(true)),
            "n" | "no" | "" => return Ok(Some(false)),
            _ => println!("Please answer y or n."),
        }
    }
}
