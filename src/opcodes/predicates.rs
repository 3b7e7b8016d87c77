//! `OP_IS_NUM`, `OP_CMP_EQ`, `OP_CMP_NEQ`, `OP_CMP_LT`, `OP_CMP_LE`,
//! `OP_CONTAINS`, `OP_STARTS_WITH`. Every predicate here writes only
//! `REG_BOOL_RES` (plus `REG_RES` for `OP_STARTS_WITH`); falsity is a
//! normal result, never an error.

use crate::decimal;
use crate::emulator::Emulator;
use crate::error::EmulatorError;
use crate::opcode::{ControlSignal, OpcodeResult};

pub fn op_is_num(emu: &mut Emulator) -> OpcodeResult {
    let is_num = decimal::is_number(&emu.operand_a()?);
    emu.set_bool(is_num);
    Ok(ControlSignal::Continue)
}

pub fn op_cmp_eq(emu: &mut Emulator) -> OpcodeResult {
    let equal = emu.operand_a()? == emu.operand_b()?;
    emu.set_bool(equal);
    Ok(ControlSignal::Continue)
}

pub fn op_cmp_neq(emu: &mut Emulator) -> OpcodeResult {
    let different = emu.operand_a()? != emu.operand_b()?;
    emu.set_bool(different);
    Ok(ControlSignal::Continue)
}

pub fn op_cmp_lt(emu: &mut Emulator) -> OpcodeResult {
    let (a, b) = integer_pair(emu, "OP_CMP_LT")?;
    emu.set_bool(a < b);
    Ok(ControlSignal::Continue)
}

pub fn op_cmp_le(emu: &mut Emulator) -> OpcodeResult {
    let (a, b) = integer_pair(emu, "OP_CMP_LE")?;
    emu.set_bool(a <= b);
    Ok(ControlSignal::Continue)
}

pub fn op_contains(emu: &mut Emulator) -> OpcodeResult {
    let contains = emu.operand_a()?.contains(&emu.operand_b()?);
    emu.set_bool(contains);
    Ok(ControlSignal::Continue)
}

pub fn op_starts_with(emu: &mut Emulator) -> OpcodeResult {
    let a = emu.operand_a()?;
    let b = emu.operand_b()?;
    emu.set_bool(a.starts_with(&b));
    let stripped = a.strip_prefix(&b).unwrap_or(&a).to_string();
    emu.set_result(stripped);
    Ok(ControlSignal::Continue)
}

fn integer_pair(emu: &Emulator, opcode: &'static str) -> Result<(i128, i128), EmulatorError> {
    let a = decimal::parse_integer(&emu.operand_a()?).map_err(|reason| EmulatorError::InvalidOperand { opcode, reason })?;
    let b = decimal::parse_integer(&emu.operand_b()?).map_err(|reason| EmulatorError::InvalidOperand { opcode, reason })?;
    Ok((a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::Address;
    use crate::config::Config;
    use crate::ram::Ram;
    use crate::registers::Registers;

    fn emulator_with(a: &str, b: &str) -> Emulator<'static> {
        let registers = Registers::for_ram_size(64).unwrap();
        let config: &'static Config = Box::leak(Box::new(Config {
            ram_size: 64,
            hw_dir: std::env::temp_dir(),
            ram_dump_path: std::env::temp_dir().join("unused.dump"),
        }));
        let mut emu = Emulator::new(Ram::new(64), registers, config);
        emu.ram.write(Address::new(20), a).unwrap();
        emu.ram.write(Address::new(21), b).unwrap();
        emu.ram.write(registers.a, "20").unwrap();
        emu.ram.write(registers.b, "21").unwrap();
        emu
    }

    #[test]
    fn cmp_lt_sets_bool_res() {
        let mut emu = emulator_with("2", "3");
        op_cmp_lt(&mut emu).unwrap();
        assert_eq!(emu.ram.read(emu.registers.bool_res).unwrap(), "1");
    }

    #[test]
    fn starts_with_strips_the_prefix() {
        let mut emu = emulator_with("hello-world", "hello-");
        op_starts_with(&mut emu).unwrap();
        assert_eq!(emu.ram.read(emu.registers.bool_res).unwrap(), "1");
        assert_eq!(emu.ram.read(emu.registers.res).unwrap(), "world");
    }

    #[test]
    fn starts_with_leaves_value_unchanged_when_not_a_prefix() {
        let mut emu = emulator_with("hello-world", "nope");
        op_starts_with(&mut emu).unwrap();
        assert_eq!(emu.ram.read(emu.registers.bool_res).unwrap(), "0");
        assert_eq!(emu.ram.read(emu.registers.res).unwrap(), "hello-world");
    }

    #[test]
    fn cmp_lt_on_non_integers_is_fatal() {
        let mut emu = emulator_with("abc", "1");
        assert!(op_cmp_lt(&mut emu).is_err());
    }
}
