pub mod alu;
pub mod args;
pub mod panel;
pub mod session;
pub mod share;

use std::io;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::alu::Opcode;
use crate::session::{Command, CommandError, Session};

pub fn setup_logging(log_path: &Option<PathBuf>) -> Result<(), io::Error> {
    let env = env_logger::Env::default().default_filter_or("info");
    let mut builder = env_logger::Builder::from_env(env);
    // Message-only lines keep a redirected trace grep-friendly.
    builder.format(|buf, record| writeln!(buf, "{}", record.args()));

    // If a path is provided, redirect output to the file
    if let Some(path) = log_path {
        let file = std::fs::File::create(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

/// Entry point for the binary. Seeds the session from the CLI flags,
/// then either runs one operation (`--op`) or starts the read loop.
pub fn run(args: args::Args) -> Result<(), io::Error> {
    setup_logging(&args.log_path)?;

    let mut session = Session::new();
    session.signed = args.signed;
    session.a = cli_operand("--a", &args.a)?;
    session.b = cli_operand("--b", &args.b)?;

    match &args.op {
        Some(mnemonic) => one_shot(&mut session, mnemonic),
        None => repl(&mut session),
    }
}

/// CLI literals follow the session's operand rules; a refused literal
/// becomes InvalidInput so the binary exits with a real error.
fn cli_operand(flag: &str, text: &str) -> Result<u8, io::Error> {
    session::operand(text)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, format!("{}: {}", flag, e)))
}

/// Runs a single operation against the seeded registers and prints the
/// panel once.
fn one_shot(session: &mut Session, mnemonic: &str) -> Result<(), io::Error> {
    match Command::parse(mnemonic) {
        Ok(Command::Execute(opcode)) => {
            run_op(session, opcode);
            Ok(())
        }
        Ok(_) | Err(_) => Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("--op: not an operation mnemonic: '{}'", mnemonic),
        )),
    }
}

/// Reads commands until quit or EOF. The main loop of the interactive
/// front panel.
fn repl(session: &mut Session) -> Result<(), io::Error> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    println!("8-bit ALU front panel ('help' lists commands)");
    loop {
        write!(stdout, "alu> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        match Command::parse(&line) {
            Ok(command) => {
                if dispatch(session, command) {
                    return Ok(());
                }
            }
            // A blank line is not worth an error message.
            Err(CommandError::Empty) => {}
            Err(e) => println!("{}", e),
        }
    }
}

/// Applies one parsed command. Returns true when the loop should stop.
fn dispatch(session: &mut Session, command: Command) -> bool {
    match command {
        Command::SetA(value) => {
            session.a = value;
            println!("{}", panel::value_line("A", value, session.signed));
        }
        Command::SetB(value) => {
            session.b = value;
            println!("{}", panel::value_line("B", value, session.signed));
        }
        Command::Execute(opcode) => run_op(session, opcode),
        Command::ExecuteWith(opcode, a, b) => {
            session.a = a;
            if let Some(b) = b {
                session.b = b;
            }
            run_op(session, opcode);
        }
        Command::Accumulator => match session.accumulator_cycle() {
            Some(result) => {
                println!("accumulator: result {} moved to A, B cleared", result);
                println!("{}", panel::value_line("A", session.a, session.signed));
                println!("{}", panel::value_line("B", session.b, session.signed));
            }
            None => println!("nothing to accumulate yet, run an operation first"),
        },
        Command::Signed => {
            session.signed = !session.signed;
            println!(
                "signed display {}",
                if session.signed { "on" } else { "off" }
            );
        }
        Command::Show => match session.last_op {
            Some(opcode) => print!(
                "{}",
                panel::render(
                    opcode,
                    session.a,
                    session.b,
                    session.alu.result(),
                    session.alu.flags(),
                    session.signed,
                )
            ),
            None => println!("nothing executed yet"),
        },
        Command::Help => println!("{}", session::HELP),
        Command::Quit => return true,
    }
    false
}

fn run_op(session: &mut Session, opcode: Opcode) {
    let (result, flags) = session.execute(opcode);
    print!(
        "{}",
        panel::render(opcode, session.a, session.b, result, flags, session.signed)
    );
}
