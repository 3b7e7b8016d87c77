//! Reads a program file into the resolved instruction text the emulator
//! will place in RAM starting at address 1.
//!
//! Two passes: first strip `label NAME` directives, recording the address
//! of the instruction that follows each one; then rewrite every remaining
//! `label:NAME` and `var:NAME` token into a decimal address, assigning each
//! distinct variable name the next free cell in first-seen order. Grammar
//! is validated in the same pass so line numbers still mean something.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::address::Address;
use crate::error::EmulatorError;
use crate::registers::Registers;

pub fn load(path: &Path, registers: &Registers) -> Result<Vec<String>, EmulatorError> {
    let raw = fs::read_to_string(path).map_err(|source| EmulatorError::ProgramIo {
        path: path.to_path_buf(),
        source,
    })?;

    let mut labels: HashMap<String, Address> = HashMap::new();
    let mut lines: Vec<&str> = Vec::new();
    for raw_line in raw.lines() {
        let trimmed = raw_line.trim();
        if let Some(name) = trimmed.strip_prefix("label ") {
            let address = Address::new(lines.len() as u32 + 1);
            labels.insert(name.trim().to_string(), address);
        } else {
            lines.push(raw_line);
        }
    }

    let program_len = lines.len() as u32;
    let region_end = registers.program_region_end().get();
    if program_len >= region_end {
        return Err(EmulatorError::MalformedInstruction {
            line: 0,
            text: format!(
                "program occupies {program_len} cells, leaving no room for variables before the register block at {}",
                registers.op
            ),
        });
    }

    let mut vars: HashMap<String, Address> = HashMap::new();
    let mut next_var = program_len + 1;
    let mut resolved = Vec::with_capacity(lines.len());

    for (idx, line) in lines.iter().enumerate() {
        let line_no = idx as u32 + 1;
        let substituted = substitute(line, &labels, &mut vars, &mut next_var, line_no)?;
        crate::instruction::parse(line_no, &substituted)?;
        resolved.push(substituted);
    }

    if next_var > region_end + 1 {
        return Err(EmulatorError::MalformedInstruction {
            line: 0,
            text: "program variables overran the space before the register block".to_string(),
        });
    }

    Ok(resolved)
}

fn substitute(
    line: &str,
    labels: &HashMap<String, Address>,
    vars: &mut HashMap<String, Address>,
    next_var: &mut u32,
    line_no: u32,
) -> Result<String, EmulatorError> {
    let mut out = String::new();
    for (i, token) in line.split_whitespace().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        if let Some(name) = token.strip_prefix("label:") {
            let addr = labels.get(name).ok_or_else(|| EmulatorError::MalformedInstruction {
                line: line_no,
                text: format!("undefined label {name:?}"),
            })?;
            out.push_str(&addr.to_string());
        } else if let Some(name) = token.strip_prefix("var:") {
            let addr = *vars.entry(name.to_string()).or_insert_with(|| {
                let addr = Address::new(*next_var);
                *next_var += 1;
                addr
            });
            out.push_str(&addr.to_string());
        } else {
            out.push_str(token);
        }
    }
    Ok(out)
}
