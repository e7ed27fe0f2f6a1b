use crate::alu::{Flags, Opcode};
use crate::share::{binary_nibbles, to_hex};

// 256-color codes for the indicator row: green for Z/N, red for C/V,
// dim grey for an unlit bit.
const LED_GREEN: u8 = 46;
const LED_RED: u8 = 196;
const LED_OFF: u8 = 240;
const STATUS_YELLOW: u8 = 220;

fn paint(color: u8, text: &str) -> String {
    format!("\x1B[38;5;{}m{}\x1B[0m", color, text)
}

fn led(label: char, lit: bool, lit_color: u8) -> String {
    let color = if lit { lit_color } else { LED_OFF };
    paint(color, &format!("[{}]", label))
}

/// One indicator per flag, Z N C V order.
pub fn led_row(flags: Flags) -> String {
    format!(
        "{} {} {} {}",
        led('Z', flags.zero, LED_GREEN),
        led('N', flags.negative, LED_GREEN),
        led('C', flags.carry, LED_RED),
        led('V', flags.overflow, LED_RED),
    )
}

/// Decimal, hex and nibble-grouped binary for one byte. The decimal side
/// switches to the two's-complement reading when `signed` is on.
pub fn value_line(name: &str, value: u8, signed: bool) -> String {
    let dec = if signed {
        format!("{:+}", value as i8)
    } else {
        format!("{}", value)
    };
    format!(
        "{:>6}: {:>4}  {}  {}",
        name,
        dec,
        to_hex(value),
        binary_nibbles(value)
    )
}

/// The whole panel for one executed operation.
pub fn render(opcode: Opcode, a: u8, b: u8, result: u8, flags: Flags, signed: bool) -> String {
    let mut output = String::new();
    output.push_str(&format!("  {}\n", opcode.label()));
    output.push_str(&format!("{}\n", value_line("A", a, signed)));
    output.push_str(&format!("{}\n", value_line("B", b, signed)));
    output.push_str("  ---------------------------\n");
    output.push_str(&format!("{}\n", value_line("result", result, signed)));
    output.push_str(&format!(" flags: {}  {}\n", flags, led_row(flags)));
    output.push_str(&format!(" {}\n", status_line(opcode, a, b, result, flags)));
    output
}

/// Human explanation of the flag outcome, ranked V > C > N > Z. At most
/// the two highest-ranked messages apply; a clear flag set reports success.
pub fn status_text(opcode: Opcode, a: u8, b: u8, result: u8, flags: Flags) -> String {
    let mut messages: Vec<String> = Vec::new();

    if flags.overflow {
        messages.push("OVERFLOW: the signed result does not fit in 8 bits".to_string());
    }
    if flags.carry {
        match opcode {
            Opcode::Add => messages.push(format!(
                "CARRY: {} + {} = {} exceeds 8 bits (>255)",
                a,
                b,
                a as u16 + b as u16
            )),
            Opcode::Sub => messages.push(format!(
                "BORROW: {} - {} went negative, a borrow was required",
                a, b
            )),
            // The handlers never set Carry for the logical operations.
            Opcode::And | Opcode::Or | Opcode::Xor | Opcode::Not => {}
        }
    }
    if flags.negative {
        messages.push(format!(
            "NEGATIVE: bit 7 is set, {} reads as {} in two's complement",
            result, result as i8
        ));
    }
    if flags.zero {
        messages.push("ZERO: the result is exactly zero".to_string());
    }

    if messages.is_empty() {
        return format!("OK: {} = {}, all flags clear", opcode.label(), result);
    }
    messages[..messages.len().min(2)].join(" | ")
}

/// `status_text` wrapped in its severity color: red when V or C is set,
/// yellow when only N, green when only Z.
pub fn status_line(opcode: Opcode, a: u8, b: u8, result: u8, flags: Flags) -> String {
    let text = status_text(opcode, a, b, result, flags);
    if flags.overflow || flags.carry {
        paint(LED_RED, &text)
    } else if flags.negative {
        paint(STATUS_YELLOW, &text)
    } else if flags.zero {
        paint(LED_GREEN, &text)
    } else {
        text
    }
}
