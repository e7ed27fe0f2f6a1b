use clap::Parser;

use alu8_rs::args::Args;

fn main() {
    let args = Args::parse();

    if let Err(e) = alu8_rs::run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
