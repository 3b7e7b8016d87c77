//! `OP_READ_INPUT`, `OP_DISPLAY`, `OP_DISPLAY_LN`, `OP_SET_BACKGROUND_COLOR`,
//! `OP_RENDER_BITMAP`.
//!
//! True terminal-echo suppression needs raw mode, which this crate doesn't
//! pull in; "silent" reads simply skip echoing the captured value back,
//! rather than suppressing what the terminal driver itself echoes.

use std::io::{self, BufRead, Write};

use ansi_term::Style;

use crate::address::Address;
use crate::color::Color;
use crate::constants::{KEYBOARD_READ_CHAR, KEYBOARD_READ_CHAR_SILENT, KEYBOARD_READ_LINE, KEYBOARD_READ_LINE_SILENT};
use crate::emulator::Emulator;
use crate::error::EmulatorError;
use crate::opcode::{ControlSignal, OpcodeResult};

pub fn op_read_input(emu: &mut Emulator) -> OpcodeResult {
    let mode = emu.operand_a()?;
    let stdin = io::stdin();
    let mut line = String::new();

    let captured = match mode.as_str() {
        KEYBOARD_READ_CHAR | KEYBOARD_READ_CHAR_SILENT => {
            stdin.lock().read_line(&mut line).ok();
            line.chars().next().map(|c| c.to_string()).unwrap_or_default()
        }
        KEYBOARD_READ_LINE | KEYBOARD_READ_LINE_SILENT => {
            stdin.lock().read_line(&mut line).ok();
            line.trim_end_matches(['\n', '\r']).to_string()
        }
        _ => {
            emu.set_error(format!("unknown keyboard mode {mode:?}"));
            return Ok(ControlSignal::Continue);
        }
    };

    if matches!(mode.as_str(), KEYBOARD_READ_CHAR | KEYBOARD_READ_LINE) {
        println!("{captured}");
    }

    emu.ram.write(emu.registers.keyboard_buffer, captured)?;
    Ok(ControlSignal::Continue)
}

fn display_color(emu: &Emulator) -> Result<Color, EmulatorError> {
    let name = emu.ram.read(emu.registers.display_color)?.to_string();
    Color::from_name(&name).ok_or_else(|| EmulatorError::InvalidOperand {
        opcode: "OP_DISPLAY",
        reason: format!("{name:?} is not a recognized color"),
    })
}

fn write_display(emu: &mut Emulator, newline: bool) -> OpcodeResult {
    let text = emu.ram.read(emu.registers.display_buffer)?.to_string();
    let color = display_color(emu)?;
    let styled = color.ansi().paint(text);
    if newline {
        println!("{styled}");
    } else {
        print!("{styled}");
        io::stdout().flush().ok();
    }
    Ok(ControlSignal::Continue)
}

pub fn op_display(emu: &mut Emulator) -> OpcodeResult {
    write_display(emu, false)
}

pub fn op_display_ln(emu: &mut Emulator) -> OpcodeResult {
    write_display(emu, true)
}

pub fn op_set_background_color(emu: &mut Emulator) -> OpcodeResult {
    let name = emu.ram.read(emu.registers.display_background)?.to_string();
    let color = Color::from_name(&name).ok_or_else(|| EmulatorError::InvalidOperand {
        opcode: "OP_SET_BACKGROUND_COLOR",
        reason: format!("{name:?} is not a recognized color"),
    })?;
    let style = Style::new().on(color.ansi());
    print!("{}\x1B[2J\x1B[H", style.prefix());
    io::stdout().flush().ok();
    Ok(ControlSignal::Continue)
}

pub fn op_render_bitmap(emu: &mut Emulator) -> OpcodeResult {
    let start: Address = emu.operand_a()?.parse().map_err(|_| EmulatorError::InvalidOperand {
        opcode: "OP_RENDER_BITMAP",
        reason: "A must be a RAM address".to_string(),
    })?;
    let end: Address = emu.operand_b()?.parse().map_err(|_| EmulatorError::InvalidOperand {
        opcode: "OP_RENDER_BITMAP",
        reason: "B must be a RAM address".to_string(),
    })?;

    let mut out = String::new();
    let mut addr = start.get();
    while addr < end.get() {
        let row = emu.ram.read(Address::new(addr))?.to_string();
        for ch in row.chars() {
            match Color::from_palette_char(ch) {
                Some(color) => out.push_str(&Style::new().on(color.ansi()).paint(" ").to_string()),
                None => out.push(' '),
            }
        }
        out.push('\n');
        addr += 1;
    }
    print!("{out}");
    io::stdout().flush().ok();
    Ok(ControlSignal::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::ram::Ram;
    use crate::registers::Registers;

    fn emulator() -> Emulator<'static> {
        let registers = Registers::for_ram_size(64).unwrap();
        let config: &'static Config = Box::leak(Box::new(Config {
            ram_size: 64,
            hw_dir: std::env::temp_dir(),
            ram_dump_path: std::env::temp_dir().join("unused.dump"),
        }));
        Emulator::new(Ram::new(64), registers, config)
    }

    #[test]
    fn display_rejects_unknown_color_name() {
        let mut emu = emulator();
        emu.ram.write(emu.registers.display_buffer, "hi").unwrap();
        emu.ram.write(emu.registers.display_color, "COLOR_PLAID").unwrap();
        assert!(op_display(&mut emu).is_err());
    }

    #[test]
    fn render_bitmap_walks_the_address_range() {
        let mut emu = emulator();
        emu.ram.write(Address::new(10), "rgb").unwrap();
        emu.ram.write(Address::new(11), "www").unwrap();
        emu.ram.write(Address::new(30), "10").unwrap();
        emu.ram.write(Address::new(31), "12").unwrap();
        emu.ram.write(emu.registers.a, "30").unwrap();
        emu.ram.write(emu.registers.b, "31").unwrap();
        assert!(op_render_bitmap(&mut emu).is_ok());
    }
}
