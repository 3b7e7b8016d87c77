//! Symbolic names referenced by guest programs: opcode names written into
//! `REG_OP` and the keyboard mode values written into `REG_A` before
//! `OP_READ_INPUT`. Color constants live in `color.rs`.

pub const OP_ADD: &str = "OP_ADD";
pub const OP_SUB: &str = "OP_SUB";
pub const OP_INCR: &str = "OP_INCR";
pub const OP_DECR: &str = "OP_DECR";
pub const OP_MUL: &str = "OP_MUL";
pub const OP_DIV: &str = "OP_DIV";
pub const OP_MOD: &str = "OP_MOD";

pub const OP_IS_NUM: &str = "OP_IS_NUM";
pub const OP_CMP_EQ: &str = "OP_CMP_EQ";
pub const OP_CMP_NEQ: &str = "OP_CMP_NEQ";
pub const OP_CMP_LT: &str = "OP_CMP_LT";
pub const OP_CMP_LE: &str = "OP_CMP_LE";
pub const OP_CONTAINS: &str = "OP_CONTAINS";
pub const OP_STARTS_WITH: &str = "OP_STARTS_WITH";

pub const OP_GET_LENGTH: &str = "OP_GET_LENGTH";
pub const OP_GET_COLUMN: &str = "OP_GET_COLUMN";
pub const OP_REPLACE_COLUMN: &str = "OP_REPLACE_COLUMN";
pub const OP_CONCAT_WITH: &str = "OP_CONCAT_WITH";

pub const OP_READ_INPUT: &str = "OP_READ_INPUT";
pub const OP_DISPLAY: &str = "OP_DISPLAY";
pub const OP_DISPLAY_LN: &str = "OP_DISPLAY_LN";
pub const OP_SET_BACKGROUND_COLOR: &str = "OP_SET_BACKGROUND_COLOR";
pub const OP_RENDER_BITMAP: &str = "OP_RENDER_BITMAP";

pub const OP_READ_BLOCK: &str = "OP_READ_BLOCK";
pub const OP_WRITE_BLOCK: &str = "OP_WRITE_BLOCK";

pub const OP_NOP: &str = "OP_NOP";
pub const OP_HALT: &str = "OP_HALT";

/// Identity placeholders, not a cryptographic contract.
pub const OP_ENCRYPT_DATA: &str = "OP_ENCRYPT_DATA";
pub const OP_DECRYPT_DATA: &str = "OP_DECRYPT_DATA";

pub const KEYBOARD_READ_CHAR: &str = "char";
pub const KEYBOARD_READ_CHAR_SILENT: &str = "char_silent";
pub const KEYBOARD_READ_LINE: &str = "line";
pub const KEYBOARD_READ_LINE_SILENT: &str = "line_silent";
