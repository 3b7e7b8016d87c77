//! `OP_ADD`, `OP_SUB`, `OP_INCR`, `OP_DECR`, `OP_MUL`, `OP_DIV`, `OP_MOD`.
//!
//! Non-numeric operands are emulator-fatal: a guest program that feeds
//! garbage into an ALU opcode has a bug, not a recoverable condition.
//! Division and modulus by zero are the one guest-visible failure in this
//! family.

use crate::decimal;
use crate::emulator::Emulator;
use crate::error::EmulatorError;
use crate::opcode::{ControlSignal, OpcodeResult};

fn fatal(opcode: &'static str, reason: String) -> EmulatorError {
    EmulatorError::InvalidOperand { opcode, reason }
}

pub fn op_add(emu: &mut Emulator) -> OpcodeResult {
    let result = decimal::add(&emu.operand_a()?, &emu.operand_b()?).map_err(|e| fatal("OP_ADD", e))?;
    emu.set_result(result);
    Ok(ControlSignal::Continue)
}

pub fn op_sub(emu: &mut Emulator) -> OpcodeResult {
    let result = decimal::sub(&emu.operand_a()?, &emu.operand_b()?).map_err(|e| fatal("OP_SUB", e))?;
    emu.set_result(result);
    Ok(ControlSignal::Continue)
}

pub fn op_incr(emu: &mut Emulator) -> OpcodeResult {
    let result = decimal::incr(&emu.operand_a()?).map_err(|e| fatal("OP_INCR", e))?;
    emu.set_result(result);
    Ok(ControlSignal::Continue)
}

pub fn op_decr(emu: &mut Emulator) -> OpcodeResult {
    let result = decimal::decr(&emu.operand_a()?).map_err(|e| fatal("OP_DECR", e))?;
    emu.set_result(result);
    Ok(ControlSignal::Continue)
}

pub fn op_mul(emu: &mut Emulator) -> OpcodeResult {
    let result = decimal::mul(&emu.operand_a()?, &emu.operand_b()?).map_err(|e| fatal("OP_MUL", e))?;
    emu.set_result(result);
    Ok(ControlSignal::Continue)
}

pub fn op_div(emu: &mut Emulator) -> OpcodeResult {
    match decimal::div(&emu.operand_a()?, &emu.operand_b()?).map_err(|e| fatal("OP_DIV", e))? {
        Some(result) => emu.set_result(result),
        None => emu.set_error("division by zero"),
    }
    Ok(ControlSignal::Continue)
}

pub fn op_mod(emu: &mut Emulator) -> OpcodeResult {
    match decimal::modulo(&emu.operand_a()?, &emu.operand_b()?).map_err(|e| fatal("OP_MOD", e))? {
        Some(result) => emu.set_result(result),
        None => emu.set_error("modulus by zero"),
    }
    Ok(ControlSignal::Continue)
}
