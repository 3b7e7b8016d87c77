//! The file-backed block device behind `OP_READ_BLOCK`/`OP_WRITE_BLOCK`.
//!
//! A disk is a text file: line 1 is the decimal block count, lines 2..=B
//! are the blocks themselves. Block 1 (the header) is readable but never
//! writable. Writes go through a temp-file-then-rename so a crash mid-write
//! never leaves the disk half-updated.

use std::fs;
use std::path::{Path, PathBuf};

pub struct Disk {
    path: PathBuf,
}

impl Disk {
    pub fn open(hw_dir: &Path, name: &str) -> Result<Disk, String> {
        let path = hw_dir.join(name);
        if !path.is_file() {
            return Err(format!("disk {name:?} not found"));
        }
        let disk = Disk { path };
        disk.block_count()?;
        Ok(disk)
    }

    fn read_lines(&self) -> Result<Vec<String>, String> {
        let content = fs::read_to_string(&self.path).map_err(|e| format!("failed to read disk: {e}"))?;
        Ok(content.lines().map(str::to_string).collect())
    }

    pub fn block_count(&self) -> Result<u32, String> {
        let lines = self.read_lines()?;
        let header = lines.first().ok_or_else(|| "disk has a corrupt header".to_string())?;
        header.trim().parse::<u32>().map_err(|_| "disk has a corrupt header".to_string())
    }

    pub fn read_block(&self, block: u32) -> Result<String, String> {
        let count = self.block_count()?;
        if block < 1 || block > count {
            return Err(format!("block {block} is out of range (disk has {count} blocks)"));
        }
        let lines = self.read_lines()?;
        lines
            .get(block as usize - 1)
            .cloned()
            .ok_or_else(|| format!("block {block} is out of range (disk has {count} blocks)"))
    }

    pub fn write_block(&self, block: u32, value: &str) -> Result<(), String> {
        if block == 1 {
            return Err("Block 1 is read-only".to_string());
        }
        let count = self.block_count()?;
        if block < 1 || block > count {
            return Err(format!("block {block} is out of range (disk has {count} blocks)"));
        }
        let mut lines = self.read_lines()?;
        lines[block as usize - 1] = value.to_string();
        let body = lines.join("\n") + "\n";
        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, body).map_err(|e| format!("failed to write disk: {e}"))?;
        fs::rename(&tmp_path, &self.path).map_err(|e| format!("failed to commit disk write: {e}"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn make_disk(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(body.as_bytes()).unwrap();
        path
    }

    #[test]
    fn reads_and_writes_user_blocks() {
        let dir = std::env::temp_dir();
        let path = make_disk(&dir, &format!("hwsim-disk-test-{}.txt", std::process::id()), "3\nfirst\nsecond\n");
        let disk = Disk::open(&dir, path.file_name().unwrap().to_str().unwrap()).unwrap();
        assert_eq!(disk.read_block(1).unwrap(), "3");
        assert_eq!(disk.read_block(2).unwrap(), "first");
        disk.write_block(2, "updated").unwrap();
        assert_eq!(disk.read_block(2).unwrap(), "updated");
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn block_one_is_read_only() {
        let dir = std::env::temp_dir();
        let path = make_disk(&dir, &format!("hwsim-disk-test-ro-{}.txt", std::process::id()), "1\nonly\n");
        let disk = Disk::open(&dir, path.file_name().unwrap().to_str().unwrap()).unwrap();
        assert_eq!(disk.read_block(1).unwrap(), "1");
        assert!(disk.write_block(1, "nope").is_err());
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn out_of_range_blocks_are_errors() {
        let dir = std::env::temp_dir();
        let path = make_disk(&dir, &format!("hwsim-disk-test-oob-{}.txt", std::process::id()), "1\nonly\n");
        let disk = Disk::open(&dir, path.file_name().unwrap().to_str().unwrap()).unwrap();
        assert!(disk.read_block(2).is_err());
        assert!(disk.write_block(2, "x").is_err());
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_disk_is_an_error() {
        let dir = std::env::temp_dir();
        assert!(Disk::open(&dir, "hwsim-disk-does-not-exist.txt").is_err());
    }
}
