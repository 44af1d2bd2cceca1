use crate::checksum::crc32;
use crate::error::{RegError, Result};
use crate::layout::{DUMP_LEN, RECORD_COUNT, RECORD_SIZE};

/// Owned register dump: exactly `DUMP_LEN` bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct RegisterDump {
    bytes: Box<[u8]>,
}

impl RegisterDump {
    pub fn zeroed() -> Self {
        Self {
            bytes: vec![0u8; DUMP_LEN].into_boxed_slice(),
        }
    }

    pub fn from_vec(bytes: Vec<u8>) -> Result<Self> {
        if bytes.len() != DUMP_LEN {
            return Err(RegError::BadLength {
                expected: DUMP_LEN,
                actual: bytes.len(),
            });
        }
        Ok(Self {
            bytes: bytes.into_boxed_slice(),
        })
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn record(&self, index: usize) -> Result<&[u8]> {
        let span = record_span(index)?;
        Ok(&self.bytes[span])
    }

    pub fn record_mut(&mut self, index: usize) -> Result<&mut [u8]> {
        let span = record_span(index)?;
        Ok(&mut self.bytes[span])
    }

    pub fn records(&self) -> impl Iterator<Item = &[u8]> {
        self.bytes.chunks_exact(RECORD_SIZE)
    }

    pub fn records_mut(&mut self) -> impl Iterator<Item = &mut [u8]> {
        self.bytes.chunks_exact_mut(RECORD_SIZE)
    }

    pub fn crc32(&self) -> u32 {
        crc32(&self.bytes)
    }
}

impl std::fmt::Debug for RegisterDump {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterDump")
            .field("len", &self.bytes.len())
            .field("crc32", &format!("{:08x}", self.crc32()))
            .finish()
    }
}

fn record_span(index: usize) -> Result<std::ops::Range<usize>> {
    if index >= RECORD_COUNT {
        return Err(RegError::RecordOutOfRange {
            index,
            count: RECORD_COUNT,
        });
    }
    let start = index * RECORD_SIZE;
    Ok(start..start + RECORD_SIZE)
}
