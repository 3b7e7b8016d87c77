//! `OP_GET_LENGTH`, `OP_GET_COLUMN`, `OP_REPLACE_COLUMN`, `OP_CONCAT_WITH`.
//!
//! Column indices are 1-based. An index past the end of the string (or
//! past the field count, when a separator is given) is guest-visible, not
//! fatal: field-splitting is exactly the kind of thing a guest program
//! probes experimentally.

use crate::emulator::Emulator;
use crate::opcode::{ControlSignal, OpcodeResult};

pub fn op_get_length(emu: &mut Emulator) -> OpcodeResult {
    let length = emu.operand_a()?.chars().count();
    emu.set_result(length.to_string());
    Ok(ControlSignal::Continue)
}

pub fn op_get_column(emu: &mut Emulator) -> OpcodeResult {
    let a = emu.operand_a()?;
    let index = emu.operand_b()?;
    let separator = emu.operand_c()?;

    let Some(index) = parse_index(&index) else {
        emu.set_error("column index must be a positive integer");
        return Ok(ControlSignal::Continue);
    };

    if separator.is_empty() {
        match a.chars().nth(index - 1) {
            Some(ch) => emu.set_result(ch.to_string()),
            None => emu.set_error("column index out of range"),
        }
    } else {
        match a.split(&separator as &str).nth(index - 1) {
            Some(field) => emu.set_result(field.to_string()),
            None => emu.set_error("column index out of range"),
        }
    }
    Ok(ControlSignal::Continue)
}

pub fn op_replace_column(emu: &mut Emulator) -> OpcodeResult {
    let a = emu.operand_a()?;
    let index = emu.operand_b()?;
    let separator = emu.operand_c()?;
    let replacement = emu.operand_d()?;

    let Some(index) = parse_index(&index) else {
        emu.set_error("column index must be a positive integer");
        return Ok(ControlSignal::Continue);
    };

    if separator.is_empty() {
        let mut chars: Vec<char> = a.chars().collect();
        if index - 1 >= chars.len() {
            emu.set_error("column index out of range");
            return Ok(ControlSignal::Continue);
        }
        let mut result: String = chars.drain(..index - 1).collect();
        result.push_str(&replacement);
        result.extend(chars.into_iter().skip(1));
        emu.set_result(result);
    } else {
        let mut fields: Vec<&str> = a.split(&separator as &str).collect();
        if index - 1 >= fields.len() {
            emu.set_error("column index out of range");
            return Ok(ControlSignal::Continue);
        }
        fields[index - 1] = &replacement;
        emu.set_result(fields.join(&separator));
    }
    Ok(ControlSignal::Continue)
}

pub fn op_concat_with(emu: &mut Emulator) -> OpcodeResult {
    let a = emu.operand_a()?;
    let b = emu.operand_b()?;
    let separator = emu.operand_c()?;
    emu.set_result(format!("{a}{separator}{b}"));
    Ok(ControlSignal::Continue)
}

fn parse_index(value: &str) -> Option<usize> {
    let index: usize = value.trim().parse().ok()?;
    if index == 0 {
        None
    } else {
        Some(index)
    }
}
