use std::fmt;

/// Status bits produced by every operation. A plain value type: each
/// execution hands back a fresh copy, nothing is merged across calls.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Flags {
    // (Z) -> Set if the result is zero
    pub zero: bool,
    // (N) -> Set if bit 7 of the result is set (2-complement sign)
    pub negative: bool,
    // (C) -> Set if the result did not fit in the register:
    // carry out of bit 7 for ADD, borrow for SUB
    pub carry: bool,
    // (V) -> Set if the 2-complement result does not fit in the register.
    // Arithmetic only, never set by the logical operations
    pub overflow: bool,
}

impl Flags {
    pub fn new() -> Flags {
        Flags {
            zero: false,
            negative: false,
            carry: false,
            overflow: false,
        }
    }

    pub fn is_clear(&self) -> bool {
        !(self.zero || self.negative || self.carry || self.overflow)
    }
}

// [ZNCV], '-' for a clear bit.
impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}{}{}{}]",
            if self.zero { 'Z' } else { '-' },
            if self.negative { 'N' } else { '-' },
            if self.carry { 'C' } else { '-' },
            if self.overflow { 'V' } else { '-' },
        )
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_new_is_all_clear() {
        let flags = Flags::new();
        assert!(flags.is_clear());
        assert_eq!(format!("{}", flags), "[----]");
    }

    #[test]
    fn test_display_marks_set_bits() {
        let flags = Flags {
            carry: true,
            ..Flags::new()
        };
        assert_eq!(format!("{}", flags), "[--C-]");
    }

    #[test]
    fn test_display_all_set() {
        let flags = Flags {
            zero: true,
            negative: true,
            carry: true,
            overflow: true,
        };
        assert!(!flags.is_clear());
        assert_eq!(format!("{}", flags), "[ZNCV]");
    }
}
