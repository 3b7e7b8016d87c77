//! The `-j`/`--debug` tracer: one colored line per instruction, printed
//! before it executes.

use ansi_term::Colour;

use crate::address::Address;

pub fn print_step(pc: Address, text: &str) {
    let label = Colour::Yellow.paint("[DEBUG]");
    let body = Colour::Cyan.paint(text);
    println!("{label} Command {pc}: {body}");
}
