//! Register dump layout.
//!
//! A dump is `RECORD_COUNT` fixed records of `RECORD_SIZE` bytes each.
//! Five fields per record are rescaled; every other byte passes through.
//!
//! Record layout (big-endian):
//! ```text
//! off  0     : pass-through
//! off  1..=2 : F1  u16  max 65535
//! off  3..=6 : pass-through
//! off  7     : F2  u8   max 31
//! off  8..=9 : F3  u16  max 4095
//! off 10..=11: F4  u16  max 4095
//! off 12..=13: F5  u16  max 4095
//! ```

pub const RECORD_COUNT: usize = 1792;
pub const RECORD_SIZE: usize = 14;
pub const DUMP_LEN: usize = RECORD_COUNT * RECORD_SIZE;

pub const FIELD_COUNT: usize = 5;

/// Byte offsets within a record that are never touched by the pass.
pub const PASSTHROUGH_OFFSETS: [usize; 5] = [0, 3, 4, 5, 6];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Width {
    U8,
    U16Be,
}

impl Width {
    #[inline]
    pub const fn bytes(self) -> usize {
        match self {
            Width::U8 => 1,
            Width::U16Be => 2,
        }
    }

    #[inline]
    pub const fn native_max(self) -> u32 {
        match self {
            Width::U8 => u8::MAX as u32,
            Width::U16Be => u16::MAX as u32,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub offset: usize,
    pub width: Width,
    /// Clamp bound applied after rescaling.
    pub max: u32,
}

impl FieldSpec {
    pub const fn new(name: &'static str, offset: usize, width: Width, max: u32) -> Self {
        Self {
            name,
            offset,
            width,
            max,
        }
    }

    /// Decode the field from a record slice.
    #[inline]
    pub fn read(&self, rec: &[u8]) -> u32 {
        let b = &rec[self.span()];
        match self.width {
            Width::U8 => b[0] as u32,
            Width::U16Be => u16::from_be_bytes([b[0], b[1]]) as u32,
        }
    }

    /// Encode `value` into the field's byte positions.
    /// Bits above the field width are dropped.
    #[inline]
    pub fn write(&self, rec: &mut [u8], value: u32) {
        debug_assert!(value <= self.width.native_max());
        let b = &mut rec[self.span()];
        match self.width {
            Width::U8 => b[0] = (value & 0xFF) as u8,
            Width::U16Be => b.copy_from_slice(&((value & 0xFFFF) as u16).to_be_bytes()),
        }
    }

    #[inline]
    pub fn span(&self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.width.bytes()
    }
}

pub const F1: FieldSpec = FieldSpec::new("F1", 1, Width::U16Be, 65535);
pub const F2: FieldSpec = FieldSpec::new("F2", 7, Width::U8, 31);
pub const F3: FieldSpec = FieldSpec::new("F3", 8, Width::U16Be, 4095);
pub const F4: FieldSpec = FieldSpec::new("F4", 10, Width::U16Be, 4095);
pub const F5: FieldSpec = FieldSpec::new("F5", 12, Width::U16Be, 4095);

pub const FIELDS: [FieldSpec; FIELD_COUNT] = [F1, F2, F3, F4, F5];
