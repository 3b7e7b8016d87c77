//! The control-flow instruction grammar: one instruction per RAM cell,
//! re-parsed from its textual form every time the driver visits it.

use crate::addressing::Operand;
use crate::error::EmulatorError;

#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    Copy { src: Operand, dst: Operand },
    Write { value: String, dst: Operand },
    Read { addr: Operand },
    Jump(Operand),
    JumpIf(Operand),
    JumpIfNot(Operand),
    JumpErr(Operand),
    CpuExec,
}

fn malformed(line: u32, text: &str) -> EmulatorError {
    EmulatorError::MalformedInstruction {
        line,
        text: text.to_string(),
    }
}

fn operand(line: u32, text: &str, token: &str) -> Result<Operand, EmulatorError> {
    Operand::parse(token).map_err(|_| malformed(line, text))
}

fn destination(line: u32, text: &str, token: &str) -> Result<Operand, EmulatorError> {
    let op = operand(line, text, token)?;
    if op.is_immediate() {
        return Err(malformed(line, text));
    }
    Ok(op)
}

/// Parses one RAM cell's text. `line` is the cell's address, used only to
/// label errors.
pub fn parse(line: u32, text: &str) -> Result<Instruction, EmulatorError> {
    let trimmed = text.trim();
    let tokens: Vec<&str> = trimmed.split_whitespace().collect();

    match tokens.as_slice() {
        ["copy", src, "to", dst] => Ok(Instruction::Copy {
            src: operand(line, trimmed, src)?,
            dst: destination(line, trimmed, dst)?,
        }),
        ["write", value, "to", dst] => Ok(Instruction::Write {
            value: value.strip_prefix('@').unwrap_or(value).to_string(),
            dst: destination(line, trimmed, dst)?,
        }),
        ["read", addr] => Ok(Instruction::Read {
            addr: operand(line, trimmed, addr)?,
        }),
        ["jump", addr] => Ok(Instruction::Jump(destination(line, trimmed, addr)?)),
        ["jump_if", addr] => Ok(Instruction::JumpIf(destination(line, trimmed, addr)?)),
        ["jump_if_not", addr] => Ok(Instruction::JumpIfNot(destination(line, trimmed, addr)?)),
        ["jump_err", addr] => Ok(Instruction::JumpErr(destination(line, trimmed, addr)?)),
        ["cpu_exec"] => Ok(Instruction::CpuExec),
        _ => Err(malformed(line, trimmed)),
    }
}
