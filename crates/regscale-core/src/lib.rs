pub mod error;
pub mod layout;

pub mod checksum;
pub mod dump;
pub mod pass;
pub mod scale;

pub use crate::dump::buffer::RegisterDump;
pub use crate::error::{RegError, Result};
pub use crate::pass::{load_rescaled, rescale_dump, run, RescaleStats, RunReport};
