//! Hex program runner: loads a whitespace-separated base-16 byte image at
//! a caller-supplied start address, points the reset vector at it, and
//! runs the CPU until the halt sentinel.
//!
//! ```text
//! mos6502 <start-addr-hex> <program-file>
//! mos6502 0x8000 demos/add.hex
//! ```
//!
//! A well-formed image ends with the sentinel byte (0x00); without it the
//! CPU keeps executing whatever the zero-filled bus decodes to.

use std::env;
use std::fs;
use std::process::ExitCode;

use mos6502::cpu::RESET_VECTOR;
use mos6502::{Cpu, ExecutionError, FlatMemory, MemoryBus};

#[derive(Debug)]
enum Error {
    Usage,
    Io(std::io::Error),
    BadAddress(String),
    BadByte(String),
    Cpu(ExecutionError),
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::Usage) => {
            eprintln!("usage: mos6502 <start-addr-hex> <program-file>");
            eprintln!("   ex: mos6502 0x8000 program.hex");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("error: {err:?}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Error> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        return Err(Error::Usage);
    }

    let start_addr = parse_address(&args[1])?;
    let source = fs::read_to_string(&args[2]).map_err(Error::Io)?;

    let mut memory = FlatMemory::new();
    let mut count: u16 = 0;
    for token in source.split_whitespace() {
        let byte =
            u8::from_str_radix(token, 16).map_err(|_| Error::BadByte(token.to_string()))?;
        memory.write(start_addr.wrapping_add(count), byte);
        count = count.wrapping_add(1);
    }

    memory.write(RESET_VECTOR, start_addr as u8);
    memory.write(RESET_VECTOR + 1, (start_addr >> 8) as u8);

    println!(
        "loaded {} byte(s) at 0x{:04X}, reset vector set",
        count, start_addr
    );

    let mut cpu = Cpu::new(memory);
    cpu.run().map_err(Error::Cpu)?;

    let snapshot = cpu.snapshot();
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{json}"),
        Err(_) => println!("{snapshot:?}"),
    }
    print_memory(&cpu.dump_memory());

    Ok(())
}

fn parse_address(arg: &str) -> Result<u16, Error> {
    let digits = arg.strip_prefix("0x").or_else(|| arg.strip_prefix("0X")).unwrap_or(arg);
    u16::from_str_radix(digits, 16).map_err(|_| Error::BadAddress(arg.to_string()))
}

/// Hex dump, 16 bytes per line, skipping all-zero lines.
fn print_memory(dump: &[u8]) {
    for (i, line) in dump.chunks(16).enumerate() {
        if line.iter().all(|&b| b == 0) {
            continue;
        }
        let bytes: Vec<String> = line.iter().map(|b| format!("{b:02X}")).collect();
        println!("{:04X} : {}", i * 16, bytes.join(" "));
    }
}
