//! `OP_READ_BLOCK`, `OP_WRITE_BLOCK`. Every failure here — missing disk,
//! corrupt header, out-of-range block, a write to block 1 — is
//! guest-visible, not fatal: disks are external state a guest program is
//! expected to probe and recover from.

use crate::disk::Disk;
use crate::emulator::Emulator;
use crate::opcode::{ControlSignal, OpcodeResult};

pub fn op_read_block(emu: &mut Emulator) -> OpcodeResult {
    let disk_name = emu.operand_a()?;
    let block = emu.operand_b()?;

    let Ok(block) = block.trim().parse::<u32>() else {
        emu.set_error("block number must be a non-negative integer");
        return Ok(ControlSignal::Continue);
    };

    match Disk::open(&emu.config.hw_dir, &disk_name).and_then(|disk| disk.read_block(block)) {
        Ok(value) => emu.set_result(value),
        Err(reason) => emu.set_error(reason),
    }
    Ok(ControlSignal::Continue)
}

pub fn op_write_block(emu: &mut Emulator) -> OpcodeResult {
    let disk_name = emu.operand_a()?;
    let block = emu.operand_b()?;
    let value = emu.operand_c()?;

    let Ok(block) = block.trim().parse::<u32>() else {
        emu.set_error("block number must be a non-negative integer");
        return Ok(ControlSignal::Continue);
    };

    if let Err(reason) = Disk::open(&emu.config.hw_dir, &disk_name).and_then(|disk| disk.write_block(block, &value)) {
        emu.set_error(reason);
    }
    Ok(ControlSignal::Continue)
}
