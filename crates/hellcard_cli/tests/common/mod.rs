//! Shared fixtures for CLI integration tests: synthetic save buffers
//! written to per-test temp files.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

pub fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hellcard-se"))
        .args(args)
        .output()
        .expect("failed to run hellcard-se CLI")
}

pub fn temp_path(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("{prefix}_{}_{}.save", std::process::id(), nanos))
}

/// Write the standard three-record multiplayer fixture to a temp file and
/// return its path.
pub fn write_mp_fixture(prefix: &str) -> PathBuf {
    let path = temp_path(prefix);
    fs::write(&path, mp_save()).expect("failed to write fixture save");
    path
}

fn push_i32(buf: &mut Vec<u8>, value: i32) {
    buf.extend_from_slice(&value.to_le_bytes());
}

fn mp_record(
    buf: &mut Vec<u8>,
    tag: &str,
    name: &str,
    floor: i32,
    max_hp: i32,
    current_hp: i32,
    gold: i32,
    cards: &[i32],
) {
    buf.extend_from_slice(tag.as_bytes());
    push_i32(buf, name.len() as i32);
    buf.extend_from_slice(name.as_bytes());
    push_i32(buf, floor);
    push_i32(buf, max_hp);
    push_i32(buf, current_hp);
    push_i32(buf, gold);
    for _ in 0..4 {
        push_i32(buf, 0);
    }
    push_i32(buf, cards.len() as i32);
    for &card in cards {
        push_i32(buf, card);
    }
    push_i32(buf, 0);
}

pub fn mp_save() -> Vec<u8> {
    let mut buf = vec![0u8; 9];
    mp_record(&mut buf, "mag", "Bob", 3, 100, 80, 50, &[0x01, 0x05]);
    mp_record(&mut buf, "war", "Grond", 3, 140, 140, 75, &[0x00]);
    mp_record(&mut buf, "rog", "Sable", 2, 90, 33, 12, &[0x0B, 0x0B]);
    buf
}
