//! The fetch-execute driver loop and the register-level helpers the opcode
//! handlers are built on.

use crate::address::Address;
use crate::addressing::Operand;
use crate::config::Config;
use crate::error::EmulatorError;
use crate::instruction::{self, Instruction};
use crate::opcode::{ControlSignal, Opcode};
use crate::ram::Ram;
use crate::registers::Registers;

pub enum ExitReason {
    Halted,
}

pub struct Emulator<'a> {
    pub ram: Ram,
    pub registers: Registers,
    pub config: &'a Config,
}

impl<'a> Emulator<'a> {
    pub fn new(ram: Ram, registers: Registers, config: &'a Config) -> Emulator<'a> {
        Emulator { ram, registers, config }
    }

    /// Loads resolved instruction text into RAM starting at address 1.
    pub fn load_program(&mut self, instructions: &[String]) -> Result<(), EmulatorError> {
        for (idx, text) in instructions.iter().enumerate() {
            self.ram.write(Address::new(idx as u32 + 1), text.clone())?;
        }
        self.ram.write(self.registers.pc, "1")
    }

    pub fn pc(&self) -> Result<Address, EmulatorError> {
        let text = self.ram.read(self.registers.pc)?;
        text.parse().map_err(|_| EmulatorError::MalformedInstruction {
            line: 0,
            text: format!("PROGRAM_COUNTER holds {text:?}, not an address"),
        })
    }

    fn set_pc(&mut self, addr: Address) -> Result<(), EmulatorError> {
        self.ram.write(self.registers.pc, addr.to_string())
    }

    /// Runs until `OP_HALT`, optionally tracing each instruction first.
    pub fn run(&mut self, trace: bool) -> Result<ExitReason, EmulatorError> {
        loop {
            let pc = self.pc()?;
            let text = self.ram.read(pc)?.to_string();
            if trace {
                crate::trace::print_step(pc, &text);
            }
            let instruction = instruction::parse(pc.get(), &text)?;
            if self.execute(&instruction)? == ControlSignal::Halt {
                return Ok(ExitReason::Halted);
            }
            let pc = self.pc()?;
            let next = pc
                .checked_add_signed(1)
                .ok_or(EmulatorError::InvalidAddress { addr: pc, size: self.ram.size() })?;
            self.set_pc(next)?;
        }
    }

    fn execute(&mut self, instruction: &Instruction) -> Result<ControlSignal, EmulatorError> {
        match instruction {
            Instruction::Copy { src, dst } => {
                let value = src.read(&self.ram)?;
                let addr = dst.effective_address(&self.ram)?;
                self.ram.write(addr, value)?;
                Ok(ControlSignal::Continue)
            }
            Instruction::Write { value, dst } => {
                let addr = dst.effective_address(&self.ram)?;
                self.ram.write(addr, value.clone())?;
                Ok(ControlSignal::Continue)
            }
            Instruction::Read { addr } => {
                let value = addr.read(&self.ram)?;
                self.set_result(value);
                Ok(ControlSignal::Continue)
            }
            Instruction::Jump(target) => {
                self.jump_to(target)?;
                Ok(ControlSignal::Continue)
            }
            Instruction::JumpIf(target) => {
                if self.ram.read(self.registers.bool_res)? == "1" {
                    self.jump_to(target)?;
                }
                Ok(ControlSignal::Continue)
            }
            Instruction::JumpIfNot(target) => {
                if self.ram.read(self.registers.bool_res)? == "0" {
                    self.jump_to(target)?;
                }
                Ok(ControlSignal::Continue)
            }
            Instruction::JumpErr(target) => {
                if !self.ram.read(self.registers.error)?.is_empty() {
                    self.jump_to(target)?;
                }
                Ok(ControlSignal::Continue)
            }
            Instruction::CpuExec => self.cpu_exec(),
        }
    }

    fn jump_to(&mut self, target: &Operand) -> Result<(), EmulatorError> {
        let addr = target.effective_address(&self.ram)?;
        let stored = addr
            .checked_add_signed(-1)
            .ok_or(EmulatorError::InvalidAddress { addr, size: self.ram.size() })?;
        self.set_pc(stored)
    }

    fn cpu_exec(&mut self) -> Result<ControlSignal, EmulatorError> {
        self.ram.write(self.registers.error, "")?;
        let name = self.ram.read(self.registers.op)?.to_string();
        let opcode = Opcode::from_name(&name).ok_or_else(|| EmulatorError::UnknownOpcode(name.clone()))?;
        (opcode.handler())(self)
    }

    fn operand_value(&self, register: Address) -> Result<String, EmulatorError> {
        let pointer_text = self.ram.read(register)?;
        let pointer: Address = pointer_text.parse().map_err(|_| EmulatorError::InvalidIndirection {
            pointer: register,
            value: pointer_text.to_string(),
        })?;
        Ok(self.ram.read(pointer)?.to_string())
    }

    pub fn operand_a(&self) -> Result<String, EmulatorError> {
        self.operand_value(self.registers.a)
    }

    pub fn operand_b(&self) -> Result<String, EmulatorError> {
        self.operand_value(self.registers.b)
    }

    pub fn operand_c(&self) -> Result<String, EmulatorError> {
        self.operand_value(self.registers.c)
    }

    pub fn operand_d(&self) -> Result<String, EmulatorError> {
        self.operand_value(self.registers.d)
    }

    pub fn set_result(&mut self, value: impl Into<String>) {
        self.ram
            .write(self.registers.res, value)
            .expect("REG_RES is always a valid address");
    }

    pub fn set_bool(&mut self, value: bool) {
        self.ram
            .write(self.registers.bool_res, if value { "1" } else { "0" })
            .expect("REG_BOOL_RES is always a valid address");
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.ram
            .write(self.registers.error, message)
            .expect("REG_ERROR is always a valid address");
    }
}
