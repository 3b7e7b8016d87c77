//! End-to-end runs through the public API: write a program to a temp file,
//! load it, run it to completion, inspect RAM afterward. Register addresses
//! are never hardcoded here — each program is built against the same
//! `Registers` the emulator will run with.

use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use hwsim::address::Address;
use hwsim::config::Config;
use hwsim::emulator::Emulator;
use hwsim::loader;
use hwsim::ram::Ram;
use hwsim::registers::Registers;

const RAM_SIZE: u32 = 128;

fn write_program(name: &str, body: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("hwsim-it-{}-{}.emu", std::process::id(), name));
    let mut file = fs::File::create(&path).unwrap();
    file.write_all(body.as_bytes()).unwrap();
    path
}

fn config(hw_dir: impl Into<PathBuf>) -> Config {
    Config {
        ram_size: RAM_SIZE,
        hw_dir: hw_dir.into(),
        ram_dump_path: std::env::temp_dir().join("hwsim-it-unused.dump"),
    }
}

/// Loads and runs `program_path`, returning the emulator so the caller can
/// inspect RAM afterward.
fn run(program_path: &Path, config: &Config) -> Emulator<'_> {
    let registers = Registers::for_ram_size(config.ram_size).unwrap();
    let instructions = loader::load(program_path, &registers).unwrap();
    let mut emu = Emulator::new(Ram::new(config.ram_size), registers, config);
    emu.load_program(&instructions).unwrap();
    emu.run(false).unwrap();
    emu
}

#[test]
fn adds_two_immediates() {
    let registers = Registers::for_ram_size(RAM_SIZE).unwrap();
    let program = format!(
        "write @3 to var:a\n\
         write @4 to var:b\n\
         write var:a to {a}\n\
         write var:b to {b}\n\
         write @OP_ADD to {op}\n\
         cpu_exec\n\
         write @OP_HALT to {op}\n\
         cpu_exec\n",
        a = registers.a,
        b = registers.b,
        op = registers.op,
    );
    let path = write_program("add", &program);
    let cfg = config(std::env::temp_dir());
    let emu = run(&path, &cfg);
    assert_eq!(emu.ram.read(registers.res).unwrap(), "7");
    fs::remove_file(&path).unwrap();
}

#[test]
fn division_by_zero_is_guest_visible_not_fatal() {
    let registers = Registers::for_ram_size(RAM_SIZE).unwrap();
    let program = format!(
        "write @4 to var:a\n\
         write @0 to var:b\n\
         write var:a to {a}\n\
         write var:b to {b}\n\
         write @OP_DIV to {op}\n\
         cpu_exec\n\
         write @OP_HALT to {op}\n\
         cpu_exec\n",
        a = registers.a,
        b = registers.b,
        op = registers.op,
    );
    let path = write_program("divzero", &program);
    let cfg = config(std::env::temp_dir());
    let emu = run(&path, &cfg);
    assert_eq!(emu.ram.read(registers.error).unwrap(), "division by zero");
    assert_eq!(emu.ram.read(registers.res).unwrap(), "");
    fs::remove_file(&path).unwrap();
}

#[test]
fn disk_round_trip_survives_a_write() {
    let hw_dir = std::env::temp_dir().join(format!("hwsim-it-hw-{}", std::process::id()));
    fs::create_dir_all(&hw_dir).unwrap();
    let disk_path = hw_dir.join("roundtrip.txt");
    fs::write(&disk_path, "3\nfoo\nbar\n").unwrap();

    let registers = Registers::for_ram_size(RAM_SIZE).unwrap();
    let program = format!(
        "write @roundtrip.txt to var:disk\n\
         write @2 to var:block\n\
         write @updated to var:newval\n\
         write var:disk to {a}\n\
         write var:block to {b}\n\
         write var:newval to {c}\n\
         write @OP_WRITE_BLOCK to {op}\n\
         cpu_exec\n\
         write var:disk to {a}\n\
         write var:block to {b}\n\
         write @OP_READ_BLOCK to {op}\n\
         cpu_exec\n\
         write @OP_HALT to {op}\n\
         cpu_exec\n",
        a = registers.a,
        b = registers.b,
        c = registers.c,
        op = registers.op,
    );
    let path = write_program("diskrw", &program);
    let cfg = config(&hw_dir);
    let emu = run(&path, &cfg);
    assert_eq!(emu.ram.read(registers.res).unwrap(), "updated");
    assert_eq!(emu.ram.read(registers.error).unwrap(), "");

    fs::remove_file(&path).unwrap();
    fs::remove_dir_all(&hw_dir).unwrap();
}

#[test]
fn writing_block_one_is_rejected_without_halting_the_run() {
    let hw_dir = std::env::temp_dir().join(format!("hwsim-it-hw-ro-{}", std::process::id()));
    fs::create_dir_all(&hw_dir).unwrap();
    let disk_path = hw_dir.join("readonly.txt");
    fs::write(&disk_path, "1\nonly\n").unwrap();

    let registers = Registers::for_ram_size(RAM_SIZE).unwrap();
    let program = format!(
        "write @readonly.txt to var:disk\n\
         write @1 to var:block\n\
         write @nope to var:newval\n\
         write var:disk to {a}\n\
         write var:block to {b}\n\
         write var:newval to {c}\n\
         write @OP_WRITE_BLOCK to {op}\n\
         cpu_exec\n\
         write @OP_HALT to {op}\n\
         cpu_exec\n",
        a = registers.a,
        b = registers.b,
        c = registers.c,
        op = registers.op,
    );
    let path = write_program("diskro", &program);
    let cfg = config(&hw_dir);
    let emu = run(&path, &cfg);
    assert_eq!(emu.ram.read(registers.error).unwrap(), "Block 1 is read-only");

    fs::remove_file(&path).unwrap();
    fs::remove_dir_all(&hw_dir).unwrap();
}

#[test]
fn conditional_jump_takes_the_equal_branch() {
    let registers = Registers::for_ram_size(RAM_SIZE).unwrap();
    let flag_cell = 100u32;
    let program = format!(
        "write @5 to var:a\n\
         write @5 to var:b\n\
         write var:a to {a}\n\
         write var:b to {b}\n\
         write @OP_CMP_EQ to {op}\n\
         cpu_exec\n\
         jump_if label:equal\n\
         write @0 to {flag}\n\
         jump label:done\n\
         label equal\n\
         write @1 to {flag}\n\
         label done\n\
         write @OP_HALT to {op}\n\
         cpu_exec\n",
        a = registers.a,
        b = registers.b,
        op = registers.op,
        flag = flag_cell,
    );
    let path = write_program("jumpeq", &program);
    let cfg = config(std::env::temp_dir());
    let emu = run(&path, &cfg);
    assert_eq!(emu.ram.read(Address::new(flag_cell)).unwrap(), "1");
    fs::remove_file(&path).unwrap();
}

/// The "too little memory for the descriptor tables" scenario: a guest
/// program that compares available space against what it needs, falls
/// through to a panic routine, reads the panic message off a disk block
/// (the only way to get a space into a string literal under this grammar),
/// and halts cleanly rather than crashing the emulator.
#[test]
fn kernel_panic_demo_reaches_the_panic_branch_and_halts() {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let program_path = manifest_dir.join("demos/kernel_panic.emu");
    let hw_dir = manifest_dir.join("demos/hw");

    let ram_size = 64;
    let registers = Registers::for_ram_size(ram_size).unwrap();
    let instructions = loader::load(&program_path, &registers).unwrap();
    let cfg = Config {
        ram_size,
        hw_dir,
        ram_dump_path: std::env::temp_dir().join("hwsim-it-unused.dump"),
    };
    let mut emu = Emulator::new(Ram::new(ram_size), registers, &cfg);
    emu.load_program(&instructions).unwrap();
    emu.run(false).unwrap();

    assert_eq!(emu.ram.read(registers.res).unwrap(), "KERNEL PANIC!");
    assert_eq!(emu.ram.read(registers.error).unwrap(), "");
}

#[test]
fn ram_dump_writes_every_cell_in_address_order() {
    let registers = Registers::for_ram_size(RAM_SIZE).unwrap();
    let program = format!(
        "write @1 to var:a\n\
         write @OP_HALT to {op}\n\
         cpu_exec\n",
        op = registers.op,
    );
    let path = write_program("dump", &program);
    let dump_path = std::env::temp_dir().join(format!("hwsim-it-dump-{}.txt", std::process::id()));
    let cfg = Config {
        ram_size: RAM_SIZE,
        hw_dir: std::env::temp_dir(),
        ram_dump_path: dump_path.clone(),
    };
    let emu = run(&path, &cfg);
    emu.ram.dump(&cfg.ram_dump_path).unwrap();

    let dumped = fs::read_to_string(&dump_path).unwrap();
    let lines: Vec<&str> = dumped.lines().collect();
    assert_eq!(lines.len(), RAM_SIZE as usize);
    // the "var:a" cell is the first free address after the three-line program.
    assert_eq!(lines[3], "1");

    fs::remove_file(&path).unwrap();
    fs::remove_file(&dump_path).unwrap();
}
