use std::path::PathBuf;

use clap::Parser;

/// 8-bit ALU with a terminal front panel.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// First operand, seeds register A (decimal, 0x hex or 0b binary).
    #[arg(long, default_value = "0")]
    pub a: String,

    /// Second operand, seeds register B.
    #[arg(long, default_value = "0")]
    pub b: String,

    // Run a single operation and exit instead of starting the REPL.
    // Takes a mnemonic: add, sub, and, or, xor or not.
    #[arg(long)]
    pub op: Option<String>,

    /// Render decimal values as signed two's complement.
    #[arg(long)]
    pub signed: bool,

    // Optional log path, if none given, logs go to stderr.
    #[arg(long)]
    pub log_path: Option<PathBuf>,
}
