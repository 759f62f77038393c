use std::io::{self, Write};

use anyhow::{bail, Result};

pub fn text(msg: &str) -> Result<String> {
    print!("{}: ", msg);
    io::stdout().flush()?;
    read_line()
}

/// Reads a small number, re-prompting on invalid input. Returns `None` if
/// the user cancels with 'q'.
pub fn number(msg: &str) -> Result<Option<u8>> {
    loop {
        print!("{} (q to cancel): ", msg);
        io::stdout().flush()?;
        let input = read_line()?;
        if input.eq_ignore_ascii_case("q") {
            return Ok(None);
        }
        match input.parse::<u8>() {
            Ok(number) => return Ok(Some(number)),
            Err(_) => println!("Invalid number, please try again"),
        }
    }
}

/// Asks a yes/no question. Returns `None` if the user cancels with 'q'.
pub fn yes_no(msg: &str) -> Result<Option<bool>> {
    loop {
        print!("{} [y/n] (q to cancel): ", msg);
        io::stdout().flush()?;
        let input = read_line()?.to_lowercase();
        match input.as_str() {
            "y" | "yes" => return Ok(Some(true)),
            "n" | "no" => return Ok(Some(false)),
            "q" => return Ok(None),
            _ => println!("Invalid input, please enter 'y' or 'n'"),
        }
    }
}

fn read_line() -> Result<String> {
    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        bail!("Input stream closed");
    }
    Ok(input.trim().to_owned())
}
