//! Operand forms and their resolution against `Ram`.
//!
//! Three forms: `@v` (immediate), `N` (direct), `*N` (indirect — use
//! `RAM[N]` as the effective address). Immediates are values, not places;
//! they are only ever valid as a source.

use crate::address::Address;
use crate::error::EmulatorError;
use crate::ram::Ram;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Immediate(String),
    Direct(Address),
    Indirect(Address),
}

impl Operand {
    pub fn parse(token: &str) -> Result<Operand, String> {
        if let Some(rest) = token.strip_prefix('@') {
            Ok(Operand::Immediate(rest.to_string()))
        } else if let Some(rest) = token.strip_prefix('*') {
            let addr: Address = rest
                .parse()
                .map_err(|_| format!("{token:?} is not a valid indirect address"))?;
            Ok(Operand::Indirect(addr))
        } else {
            let addr: Address = token
                .parse()
                .map_err(|_| format!("{token:?} is not a valid address"))?;
            Ok(Operand::Direct(addr))
        }
    }

    pub fn is_immediate(&self) -> bool {
        matches!(self, Operand::Immediate(_))
    }

    /// Resolves this operand as a source, producing its effective value.
    pub fn read(&self, ram: &Ram) -> Result<String, EmulatorError> {
        match self {
            Operand::Immediate(value) => Ok(value.clone()),
            Operand::Direct(addr) => Ok(ram.read(*addr)?.to_string()),
            Operand::Indirect(addr) => {
                let effective = Self::deref(ram, *addr)?;
                Ok(ram.read(effective)?.to_string())
            }
        }
    }

    /// Resolves this operand as a destination or jump target. Immediates
    /// have no address and are rejected.
    pub fn effective_address(&self, ram: &Ram) -> Result<Address, EmulatorError> {
        match self {
            Operand::Immediate(_) => unreachable!("immediate destinations are rejected at load time"),
            Operand::Direct(addr) => Ok(*addr),
            Operand::Indirect(addr) => Self::deref(ram, *addr),
        }
    }

    fn deref(ram: &Ram, pointer: Address) -> Result<Address, EmulatorError> {
        let raw = ram.read(pointer)?;
        raw.parse().map_err(|_| EmulatorError::InvalidIndirection {
            pointer,
            value: raw.to_string(),
        })
    }
}
