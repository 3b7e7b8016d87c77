//! `OP_NOP`, `OP_HALT`.

use std::thread::sleep;
use std::time::Duration;

use crate::emulator::Emulator;
use crate::error::EmulatorError;
use crate::opcode::{ControlSignal, OpcodeResult};

pub fn op_nop(emu: &mut Emulator) -> OpcodeResult {
    let seconds: f64 = emu.operand_a()?.trim().parse().map_err(|_| EmulatorError::InvalidOperand {
        opcode: "OP_NOP",
        reason: "A must be a number of seconds".to_string(),
    })?;
    if seconds > 0.0 {
        sleep(Duration::from_secs_f64(seconds));
    }
    Ok(ControlSignal::Continue)
}

pub fn op_halt(_emu: &mut Emulator) -> OpcodeResult {
    Ok(ControlSignal::Halt)
}

/// Identity placeholder: not a cryptographic contract.
pub fn op_encrypt_data(emu: &mut Emulator) -> OpcodeResult {
    let value = emu.operand_a()?;
    emu.set_result(value);
    Ok(ControlSignal::Continue)
}

/// Identity placeholder: not a cryptographic contract.
pub fn op_decrypt_data(emu: &mut Emulator) -> OpcodeResult {
    let value = emu.operand_a()?;
    emu.set_result(value);
    Ok(ControlSignal::Continue)
}
