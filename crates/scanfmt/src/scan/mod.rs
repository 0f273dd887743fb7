pub mod engine;
pub mod tuple;

pub use engine::{scan_indexed, scan_typed};
pub use tuple::{ScanTuple, Scannable, scan_one, scan_tuple};
