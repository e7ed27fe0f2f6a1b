/// Represents one operation's raw outcome before flag derivation.
/// The purpose is to make the underlying operations pure.
pub struct AluOutput {
    pub value: u8,
    pub carry: bool,
}

impl AluOutput {
    pub fn add(a: u8, b: u8) -> Self {
        // Widen so the raw sum survives past 8 bits.
        let res = (a as u16) + (b as u16);

        AluOutput {
            value: res as u8,
            carry: res > 0xFF,
        }
    }

    pub fn sub(a: u8, b: u8) -> Self {
        let res = (a as i16) - (b as i16);

        AluOutput {
            value: res as u8,
            // Carry (Borrow): set if the raw difference went negative.
            carry: a < b,
        }
    }

    pub fn and(a: u8, b: u8) -> Self {
        AluOutput {
            value: a & b,
            carry: false,
        }
    }

    pub fn or(a: u8, b: u8) -> Self {
        AluOutput {
            value: a | b,
            carry: false,
        }
    }

    pub fn xor(a: u8, b: u8) -> Self {
        AluOutput {
            value: a ^ b,
            carry: false,
        }
    }

    /// Complement of `a`. The second operand has no effect on NOT.
    pub fn not(a: u8) -> Self {
        AluOutput {
            value: !a,
            carry: false,
        }
    }
}
