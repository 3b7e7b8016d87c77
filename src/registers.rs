//! The register file: a closed set of well-known RAM addresses.
//!
//! Registers live at the top of the address space rather than at fixed low
//! addresses, mirroring the memory-mapped-IO convention of reserving a
//! region at one edge of the map and letting ordinary storage grow from the
//! other (compare the NES's PPU register window sitting above general RAM).
//! The assembled program occupies addresses starting at 1 and grows upward;
//! `Registers::for_ram_size` fixes the other end.

use crate::address::Address;
use crate::error::EmulatorError;

pub const REGISTER_COUNT: u32 = 15;

#[derive(Debug, Clone, Copy)]
pub struct Registers {
    pub op: Address,
    pub a: Address,
    pub b: Address,
    pub c: Address,
    pub d: Address,
    pub res: Address,
    pub bool_res: Address,
    pub error: Address,
    pub pc: Address,
    pub display_buffer: Address,
    pub display_color: Address,
    pub display_background: Address,
    pub keyboard_buffer: Address,
    pub free_memory_start: Address,
    pub free_memory_end: Address,
}

impl Registers {
    pub fn for_ram_size(size: u32) -> Result<Registers, EmulatorError> {
        if size <= REGISTER_COUNT {
            return Err(EmulatorError::InvalidAddress {
                addr: Address::new(size),
                size,
            });
        }
        let top = size;
        Ok(Registers {
            op: Address::new(top - 14),
            a: Address::new(top - 13),
            b: Address::new(top - 12),
            c: Address::new(top - 11),
            d: Address::new(top - 10),
            res: Address::new(top - 9),
            bool_res: Address::new(top - 8),
            error: Address::new(top - 7),
            pc: Address::new(top - 6),
            display_buffer: Address::new(top - 5),
            display_color: Address::new(top - 4),
            display_background: Address::new(top - 3),
            keyboard_buffer: Address::new(top - 2),
            free_memory_start: Address::new(top - 1),
            free_memory_end: Address::new(top),
        })
    }

    /// The lowest address not claimed by the register block; program text
    /// and guest variables live below this.
    pub fn program_region_end(&self) -> Address {
        Address::new(self.op.get() - 1)
    }
}
