//! Emulator-fatal error conditions.
//!
//! These terminate the run with a non-zero exit code. Guest-visible
//! failures (bad disk block, division by zero, ...) never appear here —
//! those are communicated through `REG_ERROR` and handled entirely inside
//! `emulator::Emulator`.

use std::fmt;
use std::path::PathBuf;

use crate::address::Address;

#[derive(Debug)]
pub enum EmulatorError {
    InvalidAddress {
        addr: Address,
        size: u32,
    },
    MalformedInstruction {
        line: u32,
        text: String,
    },
    InvalidIndirection {
        pointer: Address,
        value: String,
    },
    InvalidOperand {
        opcode: &'static str,
        reason: String,
    },
    UnknownOpcode(String),
    ProgramIo {
        path: PathBuf,
        source: std::io::Error,
    },
    RamDumpIo {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl fmt::Display for EmulatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmulatorError::InvalidAddress { addr, size } => {
                write!(f, "address {addr} is out of bounds (RAM holds {size} cells)")
            }
            EmulatorError::MalformedInstruction { line, text } => {
                write!(f, "malformed instruction at line {line}: {text:?}")
            }
            EmulatorError::InvalidIndirection { pointer, value } => {
                write!(f, "RAM[{pointer}] = {value:?} is not a valid address")
            }
            EmulatorError::InvalidOperand { opcode, reason } => {
                write!(f, "{opcode}: {reason}")
            }
            EmulatorError::UnknownOpcode(name) => write!(f, "unknown opcode: {name}"),
            EmulatorError::ProgramIo { path, source } => {
                write!(f, "failed to read program {}: {source}", path.display())
            }
            EmulatorError::RamDumpIo { path, source } => {
                write!(f, "failed to write RAM dump {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for EmulatorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EmulatorError::ProgramIo { source, .. } | EmulatorError::RamDumpIo { source, .. } => {
                Some(source)
            }
            _ => None,
        }
    }
}
