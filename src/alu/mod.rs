mod error;
mod flags;
mod opcode;
mod output;

pub use error::InvalidOpcode;
pub use flags::Flags;
pub use opcode::{Opcode, label_of};
pub use output::AluOutput;

use log::trace;

/// The combinational unit itself. The only state it keeps is the outcome
/// of the most recent execution, so a front panel can read it back; that
/// snapshot never feeds into later executions.
pub struct Alu {
    result: u8,
    flags: Flags,
}

impl Default for Alu {
    fn default() -> Self {
        Self::new()
    }
}

impl Alu {
    pub fn new() -> Alu {
        Alu {
            result: 0,
            flags: Flags::new(),
        }
    }

    /// Runs one operation. Operands are truncated to their low byte first,
    /// the way a hardware register would truncate them; callers wanting
    /// range errors validate before calling.
    ///
    /// The flag set is rebuilt from scratch on every call: Z and N from the
    /// result, C from the handler and V from the sign rule, both only for
    /// ADD and SUB.
    pub fn execute(&mut self, a: i32, b: i32, opcode: Opcode) -> (u8, Flags) {
        let a = (a & 0xFF) as u8;
        let b = (b & 0xFF) as u8;

        let out = match opcode {
            Opcode::Add => AluOutput::add(a, b),
            Opcode::Sub => AluOutput::sub(a, b),
            Opcode::And => AluOutput::and(a, b),
            Opcode::Or => AluOutput::or(a, b),
            Opcode::Xor => AluOutput::xor(a, b),
            Opcode::Not => AluOutput::not(a),
        };

        let mut flags = Flags::new();
        flags.zero = out.value == 0;
        flags.negative = sign_bit(out.value);

        if opcode.is_arithmetic() {
            flags.carry = out.carry;
            flags.overflow =
                signed_overflow(opcode, sign_bit(a), sign_bit(b), sign_bit(out.value));
        }

        trace!("{}", trace_line(opcode, a, b, out.value, flags));

        self.result = out.value;
        self.flags = flags;
        (out.value, flags)
    }

    /// Most recent result, 0 before the first execution.
    pub fn result(&self) -> u8 {
        self.result
    }

    /// Flag snapshot from the most recent execution.
    pub fn flags(&self) -> Flags {
        self.flags
    }
}

/// Two's-complement sign of an 8-bit value. Shared by the N flag and both
/// overflow rules.
fn sign_bit(value: u8) -> bool {
    value & 0x80 != 0
}

/// Sign-compare overflow rules, evaluated on the already-truncated result.
/// ADD overflows when two same-signed operands produce the opposite sign;
/// SUB when a differently-signed subtrahend flips the minuend's sign.
fn signed_overflow(opcode: Opcode, sign_a: bool, sign_b: bool, sign_result: bool) -> bool {
    match opcode {
        Opcode::Add => sign_a == sign_b && sign_result != sign_a,
        Opcode::Sub => sign_a != sign_b && sign_result != sign_a,
        Opcode::And | Opcode::Or | Opcode::Xor | Opcode::Not => false,
    }
}

/// Canonical one-line record of an execution. Emitted at trace level by
/// `execute` and replayed verbatim by the golden-trace regression.
pub fn trace_line(opcode: Opcode, a: u8, b: u8, result: u8, flags: Flags) -> String {
    format!(
        "OP:{} A:{:02X} B:{:02X} R:{:02X} F:{}",
        opcode, a, b, result, flags
    )
}
