//! Console menu for picking one of the preset terminals.
//!
//! Input is read a line at a time. `0` or end of input ends the loop, `1` to
//! `3` hand a preset `ActivationRequest` to the caller, and anything else is
//! answered with a re-prompt and nothing else.

use std::io::{self, BufRead, Write};

use activation_core::ActivationRequest;

pub const PROMPT: &str =
    "Enter a number (1, 2, or 3) to activate the PinTerminalActivator, or enter 0 to exit:";
pub const INVALID_INPUT: &str = "Invalid input. Please enter 1, 2, 3, or 0 to exit.";
pub const GOODBYE: &str = "Exiting the application. Goodbye!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    Activate(ActivationRequest),
    Invalid,
}

/// The hardcoded (customer id, MAC address) pair behind each menu number.
pub fn preset(number: u8) -> Option<ActivationRequest> {
    let (customer_id, mac_address) = match number {
        1 => ("12345", "AA:BB:CC:DD:EE:FF"),
        2 => ("12345", "AA:BB:CC:DD:EE:AA"),
        3 => ("11111", "AA:BB:CC:DD:EE:FF"),
        _ => return None,
    };
    Some(ActivationRequest::new(customer_id, mac_address))
}

pub fn parse_choice(line: &str) -> MenuChoice {
    match line.trim().parse::<i64>() {
        Ok(0) => MenuChoice::Exit,
        Ok(n) => u8::try_from(n)
            .ok()
            .and_then(preset)
            .map_or(MenuChoice::Invalid, MenuChoice::Activate),
        Err(_) => MenuChoice::Invalid,
    }
}

/// Drive the menu until the user exits or input runs out.
pub fn run<R, W, F>(input: R, output: &mut W, mut on_activate: F) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    F: FnMut(&ActivationRequest),
{
    let mut lines = input.lines();
    loop {
        writeln!(output, "{PROMPT}")?;
        output.flush()?;

        let Some(line) = lines.next().transpose()? else {
            writeln!(output, "{GOODBYE}")?;
            return Ok(());
        };

        match parse_choice(&line) {
            MenuChoice::Exit => {
                writeln!(output, "{GOODBYE}")?;
                return Ok(());
            }
            MenuChoice::Activate(request) => on_activate(&request),
            MenuChoice::Invalid => writeln!(output, "{INVALID_INPUT}")?,
        }
    }
}
