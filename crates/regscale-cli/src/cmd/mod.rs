pub mod inspect;
pub mod rescale;

pub const DEFAULT_INPUT: &str = "AREGDUMP.BIN";
pub const DEFAULT_OUTPUT: &str = "out/inc/zxregdump.bin";
