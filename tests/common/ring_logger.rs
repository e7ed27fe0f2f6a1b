use std::collections::VecDeque;
use std::sync::Mutex;

use log::{LevelFilter, Metadata, Record, SetLoggerError};

// Enough tail to see what the engine did leading up to a diff.
const RING_BUFFER_SIZE: usize = 32;

lazy_static::lazy_static! {
    static ref LOG_BUFFER: Mutex<VecDeque<String>> =
        Mutex::new(VecDeque::with_capacity(RING_BUFFER_SIZE));
}

struct RingLogger;

impl log::Log for RingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let mut buffer = LOG_BUFFER.lock().unwrap();
        if buffer.len() >= RING_BUFFER_SIZE {
            buffer.pop_front();
        }
        buffer.push_back(format!("{}", record.args()));
    }

    fn flush(&self) {}
}

pub fn init_logger() -> Result<(), SetLoggerError> {
    log::set_logger(&RingLogger).map(|()| log::set_max_level(LevelFilter::Trace))
}

/// Prints the captured tail of the log, oldest first, with indices
/// relative to the newest line.
pub fn dump_log() {
    let buffer = LOG_BUFFER.lock().unwrap();
    if buffer.is_empty() {
        println!("log buffer is empty");
        return;
    }

    println!("--- last {} log lines ---", buffer.len());
    for (offset, line) in buffer.iter().enumerate() {
        let relative = offset as i32 - buffer.len() as i32 + 1;
        println!("{:>3}. {}", relative, line);
    }
}
