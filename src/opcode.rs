//! The opcode dispatch table: `cpu_exec` decodes `REG_OP`'s text into a
//! closed `Opcode` value once, then dispatches to that opcode's handler.
//! Decoding through a `phf::Map` keeps the name lookup a perfect hash
//! rather than a string comparison chain.

use phf::phf_map;

use crate::constants::*;
use crate::emulator::Emulator;
use crate::error::EmulatorError;
use crate::opcodes::{arithmetic, control, disk_io, predicates, strings, terminal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlSignal {
    Continue,
    Halt,
}

pub type OpcodeResult = Result<ControlSignal, EmulatorError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    Add,
    Sub,
    Incr,
    Decr,
    Mul,
    Div,
    Mod,
    IsNum,
    CmpEq,
    CmpNeq,
    CmpLt,
    CmpLe,
    Contains,
    StartsWith,
    GetLength,
    GetColumn,
    ReplaceColumn,
    ConcatWith,
    ReadInput,
    Display,
    DisplayLn,
    SetBackgroundColor,
    RenderBitmap,
    ReadBlock,
    WriteBlock,
    Nop,
    Halt,
    EncryptData,
    DecryptData,
}

impl Opcode {
    pub fn from_name(name: &str) -> Option<Opcode> {
        OPCODE_TABLE.get(name).copied()
    }

    pub fn handler(self) -> fn(&mut Emulator) -> OpcodeResult {
        match self {
            Opcode::Add => arithmetic::op_add,
            Opcode::Sub => arithmetic::op_sub,
            Opcode::Incr => arithmetic::op_incr,
            Opcode::Decr => arithmetic::op_decr,
            Opcode::Mul => arithmetic::op_mul,
            Opcode::Div => arithmetic::op_div,
            Opcode::Mod => arithmetic::op_mod,
            Opcode::IsNum => predicates::op_is_num,
            Opcode::CmpEq => predicates::op_cmp_eq,
            Opcode::CmpNeq => predicates::op_cmp_neq,
            Opcode::CmpLt => predicates::op_cmp_lt,
            Opcode::CmpLe => predicates::op_cmp_le,
            Opcode::Contains => predicates::op_contains,
            Opcode::StartsWith => predicates::op_starts_with,
            Opcode::GetLength => strings::op_get_length,
            Opcode::GetColumn => strings::op_get_column,
            Opcode::ReplaceColumn => strings::op_replace_column,
            Opcode::ConcatWith => strings::op_concat_with,
            Opcode::ReadInput => terminal::op_read_input,
            Opcode::Display => terminal::op_display,
            Opcode::DisplayLn => terminal::op_display_ln,
            Opcode::SetBackgroundColor => terminal::op_set_background_color,
            Opcode::RenderBitmap => terminal::op_render_bitmap,
            Opcode::ReadBlock => disk_io::op_read_block,
            Opcode::WriteBlock => disk_io::op_write_block,
            Opcode::Nop => control::op_nop,
            Opcode::Halt => control::op_halt,
            Opcode::EncryptData => control::op_encrypt_data,
            Opcode::DecryptData => control::op_decrypt_data,
        }
    }
}

pub static OPCODE_TABLE: phf::Map<&'static str, Opcode> = phf_map! {
    "OP_ADD" => Opcode::Add,
    "OP_SUB" => Opcode::Sub,
    "OP_INCR" => Opcode::Incr,
    "OP_DECR" => Opcode::Decr,
    "OP_MUL" => Opcode::Mul,
    "OP_DIV" => Opcode::Div,
    "OP_MOD" => Opcode::Mod,
    "OP_IS_NUM" => Opcode::IsNum,
    "OP_CMP_EQ" => Opcode::CmpEq,
    "OP_CMP_NEQ" => Opcode::CmpNeq,
    "OP_CMP_LT" => Opcode::CmpLt,
    "OP_CMP_LE" => Opcode::CmpLe,
    "OP_CONTAINS" => Opcode::Contains,
    "OP_STARTS_WITH" => Opcode::StartsWith,
    "OP_GET_LENGTH" => Opcode::GetLength,
    "OP_GET_COLUMN" => Opcode::GetColumn,
    "OP_REPLACE_COLUMN" => Opcode::ReplaceColumn,
    "OP_CONCAT_WITH" => Opcode::ConcatWith,
    "OP_READ_INPUT" => Opcode::ReadInput,
    "OP_DISPLAY" => Opcode::Display,
    "OP_DISPLAY_LN" => Opcode::DisplayLn,
    "OP_SET_BACKGROUND_COLOR" => Opcode::SetBackgroundColor,
    "OP_RENDER_BITMAP" => Opcode::RenderBitmap,
    "OP_READ_BLOCK" => Opcode::ReadBlock,
    "OP_WRITE_BLOCK" => Opcode::WriteBlock,
    "OP_NOP" => Opcode::Nop,
    "OP_HALT" => Opcode::Halt,
    "OP_ENCRYPT_DATA" => Opcode::EncryptData,
    "OP_DECRYPT_DATA" => Opcode::DecryptData,
};
