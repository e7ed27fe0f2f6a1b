use std::fmt;

use log::debug;

use crate::alu::{Alu, Flags, Opcode};
use crate::share::parse_literal;

pub const HELP: &str = "\
commands:
  a <value>           set operand A (decimal, 0x hex or 0b binary)
  b <value>           set operand B
  add | sub | and | or | xor
                      run that operation on A and B
  <op> <a> <b>        one-line form: set both operands, then run
  not [<a>]           bitwise complement of A (B is ignored)
  acc                 move the last result into A, clear B
  signed              toggle signed decimal display
  show                re-print the panel for the last operation
  help                this text
  quit                leave";

/// Binds together the operand registers, the engine and the display mode.
/// Used for holding the entire 'session' of one interactive run.
pub struct Session {
    pub alu: Alu,
    pub a: u8,
    pub b: u8,
    pub signed: bool,
    pub last_op: Option<Opcode>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Session {
        Session {
            alu: Alu::new(),
            a: 0,
            b: 0,
            signed: false,
            last_op: None,
        }
    }

    /// Runs `opcode` on the current registers.
    pub fn execute(&mut self, opcode: Opcode) -> (u8, Flags) {
        debug!("execute {} a={} b={}", opcode, self.a, self.b);
        self.last_op = Some(opcode);
        self.alu.execute(self.a as i32, self.b as i32, opcode)
    }

    /// Feeds the last result back into A and clears B, like chaining
    /// through a real accumulator register. Refused until something ran.
    pub fn accumulator_cycle(&mut self) -> Option<u8> {
        self.last_op?;
        self.a = self.alu.result();
        self.b = 0;
        debug!("accumulator cycle, a={}", self.a);
        Some(self.a)
    }
}

/// One parsed REPL line.
#[derive(Debug, PartialEq)]
pub enum Command {
    SetA(u8),
    SetB(u8),
    Execute(Opcode),
    /// One-line form. NOT carries no second operand; B keeps its value.
    ExecuteWith(Opcode, u8, Option<u8>),
    Accumulator,
    Signed,
    Show,
    Help,
    Quit,
}

impl Command {
    /// Parses one line. Keywords are case-insensitive; literals may be
    /// decimal, 0x hex or 0b binary.
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((keyword, rest)) = tokens.split_first() else {
            return Err(CommandError::Empty);
        };

        match keyword.to_ascii_lowercase().as_str() {
            "a" => Ok(Command::SetA(one_operand("a", rest)?)),
            "b" => Ok(Command::SetB(one_operand("b", rest)?)),
            "add" => binary_op(Opcode::Add, "add", rest),
            "sub" => binary_op(Opcode::Sub, "sub", rest),
            "and" => binary_op(Opcode::And, "and", rest),
            "or" => binary_op(Opcode::Or, "or", rest),
            "xor" => binary_op(Opcode::Xor, "xor", rest),
            "not" => match rest {
                [] => Ok(Command::Execute(Opcode::Not)),
                [a] => Ok(Command::ExecuteWith(Opcode::Not, operand(a)?, None)),
                [_, extra @ ..] => Err(CommandError::TrailingInput(extra.join(" "))),
            },
            "acc" => no_operands(Command::Accumulator, rest),
            "signed" => no_operands(Command::Signed, rest),
            "show" => no_operands(Command::Show, rest),
            "help" => no_operands(Command::Help, rest),
            "quit" | "exit" => no_operands(Command::Quit, rest),
            _ => Err(CommandError::Unknown(keyword.to_string())),
        }
    }
}

/// Literal to register value. Out-of-range input is refused here, not
/// masked; masking is the engine's own behavior, not the front panel's.
pub fn operand(token: &str) -> Result<u8, CommandError> {
    let value = parse_literal(token).ok_or_else(|| CommandError::BadLiteral(token.to_string()))?;
    if !(0..=255).contains(&value) {
        return Err(CommandError::OutOfRange(value));
    }
    Ok(value as u8)
}

fn one_operand(register: &'static str, rest: &[&str]) -> Result<u8, CommandError> {
    match rest {
        [token] => operand(token),
        [] => Err(CommandError::MissingOperand(register)),
        [_, extra @ ..] => Err(CommandError::TrailingInput(extra.join(" "))),
    }
}

fn binary_op(
    opcode: Opcode,
    mnemonic: &'static str,
    rest: &[&str],
) -> Result<Command, CommandError> {
    match rest {
        [] => Ok(Command::Execute(opcode)),
        [a, b] => Ok(Command::ExecuteWith(opcode, operand(a)?, Some(operand(b)?))),
        [_] => Err(CommandError::MissingOperand(mnemonic)),
        [_, _, extra @ ..] => Err(CommandError::TrailingInput(extra.join(" "))),
    }
}

fn no_operands(command: Command, rest: &[&str]) -> Result<Command, CommandError> {
    if rest.is_empty() {
        Ok(command)
    } else {
        Err(CommandError::TrailingInput(rest.join(" ")))
    }
}

/// Rejected input. Never fatal; the loop prints it and reads on.
#[derive(Debug, PartialEq)]
pub enum CommandError {
    Empty,
    Unknown(String),
    MissingOperand(&'static str),
    TrailingInput(String),
    BadLiteral(String),
    OutOfRange(i64),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Empty => write!(f, "empty command"),
            CommandError::Unknown(keyword) => {
                write!(f, "unknown command: '{}' (try 'help')", keyword)
            }
            CommandError::MissingOperand(keyword) => {
                write!(f, "missing operand for '{}'", keyword)
            }
            CommandError::TrailingInput(rest) => {
                write!(f, "unexpected input after command: '{}'", rest)
            }
            CommandError::BadLiteral(token) => {
                write!(f, "not a number: '{}' (decimal, 0x hex or 0b binary)", token)
            }
            CommandError::OutOfRange(value) => {
                write!(f, "value {} out of range (0-255)", value)
            }
        }
    }
}
