pub mod buffer;
pub mod file;

pub use buffer::RegisterDump;
pub use file::{read_dump, write_dump};
