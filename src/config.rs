//! Runtime configuration, read once from the environment.
//!
//! `GLOBAL_RAM_SIZE`, `SYSTEM_HW_DIR`, and `GLOBAL_RAM_FILE` are the three
//! knobs a host can set before launching a program; CLI flags (see
//! `main.rs`) take precedence where both exist.

use std::path::PathBuf;

use once_cell::sync::Lazy;

pub const DEFAULT_RAM_SIZE: u32 = 4096;

#[derive(Debug)]
pub struct Config {
    pub ram_size: u32,
    pub hw_dir: PathBuf,
    pub ram_dump_path: PathBuf,
}

pub static CONFIG: Lazy<Config> = Lazy::new(|| Config {
    ram_size: std::env::var("GLOBAL_RAM_SIZE")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_RAM_SIZE),
    hw_dir: std::env::var("SYSTEM_HW_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./hw")),
    ram_dump_path: std::env::var("GLOBAL_RAM_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("ram.dump")),
});
