use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use hwsim::config::CONFIG;
use hwsim::emulator::Emulator;
use hwsim::loader;
use hwsim::ram::Ram;
use hwsim::registers::Registers;

/// Run a program on the emulator.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// the assembled program to run
    program: PathBuf,
    /// trace every instruction before it executes
    #[arg(short = 'j', long = "debug", default_value_t = false)]
    debug: bool,
    /// dump RAM to this path after the run finishes
    #[arg(short = 'r', long = "ram-dump")]
    ram_dump: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let ram_size = CONFIG.ram_size;
    let registers = match Registers::for_ram_size(ram_size) {
        Ok(registers) => registers,
        Err(err) => {
            eprintln!("hwsim: {err}");
            return ExitCode::FAILURE;
        }
    };

    let instructions = match loader::load(&args.program, &registers) {
        Ok(instructions) => instructions,
        Err(err) => {
            eprintln!("hwsim: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut emulator = Emulator::new(Ram::new(ram_size), registers, &CONFIG);
    if let Err(err) = emulator.load_program(&instructions) {
        eprintln!("hwsim: {err}");
        return ExitCode::FAILURE;
    }

    let run_result = emulator.run(args.debug);

    let dump_path = args.ram_dump.as_ref().unwrap_or(&CONFIG.ram_dump_path);
    if let Err(err) = emulator.ram.dump(dump_path) {
        eprintln!("hwsim: {err}");
        return ExitCode::FAILURE;
    }

    match run_result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("hwsim: {err}");
            ExitCode::FAILURE
        }
    }
}
