mod common;

use std::fs::File;
use std::io::{BufRead, BufReader};

use alu8_rs::alu::{Alu, Opcode, trace_line};

use crate::common::{dump_log, init_logger};

const GOLDEN_TRACE: &str = "tests/golden/alu_trace.log";

/// Replays every line of the checked-in trace log and compares it against
/// a fresh engine's canonical trace output. On the first divergence the
/// captured log tail is dumped before failing.
#[test]
fn test_golden_trace_replays_exactly() {
    let _ = init_logger();

    let file = File::open(GOLDEN_TRACE).expect("golden trace log missing");
    let reader = BufReader::new(file);
    let mut alu = Alu::new();
    let mut lines = 0;

    for (index, line) in reader.lines().enumerate() {
        let expected = line.expect("golden trace log is not readable");
        if expected.is_empty() {
            continue;
        }

        let (opcode, a, b) = parse_inputs(&expected);
        let (result, flags) = alu.execute(a as i32, b as i32, opcode);
        let received = trace_line(opcode, a, b, result, flags);

        if expected != received {
            dump_log();
            panic!(
                "trace diff at line {}:\nexpected: {}\nreceived: {}",
                index + 1,
                expected,
                received
            );
        }
        lines += 1;
    }

    assert!(lines > 20, "golden trace log looks truncated: {} lines", lines);
}

/// Golden lines look like `OP:ADD A:C8 B:64 R:2C F:[--C-]`. Only the
/// inputs are parsed out; the rest of the line is what the test verifies.
fn parse_inputs(line: &str) -> (Opcode, u8, u8) {
    let mut fields = line.split_whitespace();
    let op_field = fields.next().expect("missing OP field");
    let a_field = fields.next().expect("missing A field");
    let b_field = fields.next().expect("missing B field");

    let mnemonic = op_field.strip_prefix("OP:").expect("malformed OP field");
    let opcode = Opcode::ALL
        .into_iter()
        .find(|op| op.mnemonic() == mnemonic)
        .expect("unknown mnemonic in golden trace");

    let a = u8::from_str_radix(a_field.strip_prefix("A:").expect("malformed A field"), 16)
        .expect("A is not a hex byte");
    let b = u8::from_str_radix(b_field.strip_prefix("B:").expect("malformed B field"), 16)
        .expect("B is not a hex byte");

    (opcode, a, b)
}
