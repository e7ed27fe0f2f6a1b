use std::fmt;

use crate::alu::InvalidOpcode;

/// Operation selector. The six variants are the complete domain; dispatch
/// matches exhaustively and no fallback arm exists anywhere.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Opcode {
    Add,
    Sub,
    And,
    Or,
    Xor,
    Not,
}

impl Opcode {
    pub const ALL: [Opcode; 6] = [
        Opcode::Add,
        Opcode::Sub,
        Opcode::And,
        Opcode::Or,
        Opcode::Xor,
        Opcode::Not,
    ];

    /// Stable numeric encoding, the inverse of `try_from`.
    pub fn index(self) -> u8 {
        match self {
            Opcode::Add => 0,
            Opcode::Sub => 1,
            Opcode::And => 2,
            Opcode::Or => 3,
            Opcode::Xor => 4,
            Opcode::Not => 5,
        }
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Add => "ADD",
            Opcode::Sub => "SUB",
            Opcode::And => "AND",
            Opcode::Or => "OR",
            Opcode::Xor => "XOR",
            Opcode::Not => "NOT",
        }
    }

    /// Display label for status text.
    pub fn label(self) -> &'static str {
        match self {
            Opcode::Add => "ADD (addition)",
            Opcode::Sub => "SUB (subtraction)",
            Opcode::And => "AND",
            Opcode::Or => "OR",
            Opcode::Xor => "XOR",
            Opcode::Not => "NOT",
        }
    }

    /// ADD and SUB are the only operations that touch Carry and Overflow.
    pub fn is_arithmetic(self) -> bool {
        matches!(self, Opcode::Add | Opcode::Sub)
    }
}

impl TryFrom<u8> for Opcode {
    type Error = InvalidOpcode;

    /// The one place a raw integer becomes an opcode.
    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Opcode::Add),
            1 => Ok(Opcode::Sub),
            2 => Ok(Opcode::And),
            3 => Ok(Opcode::Or),
            4 => Ok(Opcode::Xor),
            5 => Ok(Opcode::Not),
            _ => Err(InvalidOpcode(raw)),
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}

/// Label for a raw selector value, including values no opcode maps to.
pub fn label_of(raw: u8) -> &'static str {
    match Opcode::try_from(raw) {
        Ok(op) => op.label(),
        Err(_) => "unknown",
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_try_from_round_trips_every_variant() {
        for op in Opcode::ALL {
            assert_eq!(Opcode::try_from(op.index()), Ok(op));
        }
    }

    #[test]
    fn test_try_from_rejects_out_of_domain_values() {
        assert_eq!(Opcode::try_from(6), Err(InvalidOpcode(6)));
        assert_eq!(Opcode::try_from(255), Err(InvalidOpcode(255)));
    }

    #[test]
    fn test_label_of_known_values() {
        assert_eq!(label_of(0), "ADD (addition)");
        assert_eq!(label_of(1), "SUB (subtraction)");
        assert_eq!(label_of(4), "XOR");
    }

    #[test]
    fn test_label_of_falls_back_to_sentinel() {
        assert_eq!(label_of(6), "unknown");
        assert_eq!(label_of(200), "unknown");
    }

    #[test]
    fn test_display_is_the_mnemonic() {
        assert_eq!(format!("{}", Opcode::Xor), "XOR");
        assert_eq!(format!("{}", Opcode::Not), "NOT");
    }

    #[test]
    fn test_only_add_and_sub_are_arithmetic() {
        assert!(Opcode::Add.is_arithmetic());
        assert!(Opcode::Sub.is_arithmetic());
        assert!(!Opcode::And.is_arithmetic());
        assert!(!Opcode::Or.is_arithmetic());
        assert!(!Opcode::Xor.is_arithmetic());
        assert!(!Opcode::Not.is_arithmetic());
    }
}
