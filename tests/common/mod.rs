pub mod ring_logger;

pub use ring_logger::{dump_log, init_logger};
