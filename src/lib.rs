pub mod address;
pub mod addressing;
pub mod color;
pub mod config;
pub mod constants;
pub mod decimal;
pub mod disk;
pub mod emulator;
pub mod error;
pub mod instruction;
pub mod loader;
pub mod opcode;
pub mod opcodes;
pub mod ram;
pub mod registers;
pub mod trace;
