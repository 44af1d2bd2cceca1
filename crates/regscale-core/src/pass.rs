use std::path::Path;

use crate::dump::buffer::RegisterDump;
use crate::dump::file::{read_dump, write_dump};
use crate::error::Result;
use crate::layout::{FIELDS, FIELD_COUNT};
use crate::scale::rescale;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldStats {
    /// Values whose encoded bytes differ after the pass.
    pub changed: u64,
    /// Values whose rescaled result overflowed the clamp bound.
    pub clamped: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RescaleStats {
    pub records: u64,
    /// Indexed like `layout::FIELDS`.
    pub fields: [FieldStats; FIELD_COUNT],
}

impl RescaleStats {
    pub fn total_changed(&self) -> u64 {
        self.fields.iter().map(|f| f.changed).sum()
    }

    pub fn total_clamped(&self) -> u64 {
        self.fields.iter().map(|f| f.clamped).sum()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunReport {
    pub stats: RescaleStats,
    pub input_crc32: u32,
    pub output_crc32: u32,
}

/// Rescale the five target fields of one record in place.
pub fn rescale_record(rec: &mut [u8], stats: &mut RescaleStats) {
    for (spec, fs) in FIELDS.iter().zip(stats.fields.iter_mut()) {
        let before = spec.read(rec);
        let scaled = rescale(before);
        let after = scaled.min(spec.max);
        if scaled > spec.max {
            fs.clamped += 1;
        }
        if after != before {
            fs.changed += 1;
        }
        spec.write(rec, after);
    }
    stats.records += 1;
}

/// Single in-place pass over every record.
pub fn rescale_dump(dump: &mut RegisterDump) -> RescaleStats {
    let mut stats = RescaleStats::default();
    for rec in dump.records_mut() {
        rescale_record(rec, &mut stats);
    }
    stats
}

/// Read `input` and rescale it in memory. Nothing is written.
pub fn load_rescaled(input: impl AsRef<Path>) -> Result<(RegisterDump, RunReport)> {
    let mut dump = read_dump(input.as_ref())?;
    let input_crc32 = dump.crc32();

    let stats = rescale_dump(&mut dump);
    let output_crc32 = dump.crc32();

    Ok((
        dump,
        RunReport {
            stats,
            input_crc32,
            output_crc32,
        },
    ))
}

/// Read `input`, rescale, write `output`.
///
/// Any I/O failure aborts the run; `output` is only replaced after a
/// complete write.
pub fn run(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<RunReport> {
    let (dump, report) = load_rescaled(input)?;
    write_dump(output.as_ref(), &dump)?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{DUMP_LEN, F2, RECORD_COUNT, RECORD_SIZE};

    #[test]
    fn zero_dump_stays_zero() {
        let mut d = RegisterDump::zeroed();
        let stats = rescale_dump(&mut d);
        assert_eq!(d.as_bytes(), &[0u8; DUMP_LEN][..]);
        assert_eq!(stats.records, RECORD_COUNT as u64);
        assert_eq!(stats.total_changed(), 0);
        assert_eq!(stats.total_clamped(), 0);
    }

    #[test]
    fn record_fields_rescaled_and_counted() {
        let mut rec = [0u8; RECORD_SIZE];
        rec[1..3].copy_from_slice(&0xFFFFu16.to_be_bytes());
        rec[7] = 31;
        rec[8..10].copy_from_slice(&4631u16.to_be_bytes());
        rec[10..12].copy_from_slice(&1000u16.to_be_bytes());
        rec[12..14].copy_from_slice(&4630u16.to_be_bytes());

        let mut stats = RescaleStats::default();
        rescale_record(&mut rec, &mut stats);

        assert_eq!(u16::from_be_bytes([rec[1], rec[2]]), 57958);
        assert_eq!(rec[7], 27);
        assert_eq!(u16::from_be_bytes([rec[8], rec[9]]), 4095);
        assert_eq!(u16::from_be_bytes([rec[10], rec[11]]), 884);
        assert_eq!(u16::from_be_bytes([rec[12], rec[13]]), 4095);

        assert_eq!(stats.records, 1);
        assert_eq!(stats.total_changed(), 5);
        // 4630 lands on the bound without clamping; 4631 overflows it.
        assert_eq!(stats.fields[2].clamped, 1);
        assert_eq!(stats.fields[4].clamped, 0);
        assert_eq!(stats.total_clamped(), 1);
    }

    #[test]
    fn f2_clamps_to_31() {
        let mut d = RegisterDump::zeroed();
        d.record_mut(5).unwrap()[F2.offset] = 200;
        let stats = rescale_dump(&mut d);
        assert_eq!(F2.read(d.record(5).unwrap()), 31);
        assert_eq!(stats.fields[1].clamped, 1);
    }

    #[test]
    fn results_never_exceed_bounds() {
        let mut bytes = vec![0u8; DUMP_LEN];
        let mut x: u64 = 0x9E37_79B9_7F4A_7C15;
        for b in bytes.iter_mut() {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *b = (x >> 56) as u8;
        }
        let mut d = RegisterDump::from_vec(bytes).unwrap();
        rescale_dump(&mut d);
        for rec in d.records() {
            for spec in FIELDS.iter() {
                assert!(spec.read(rec) <= spec.max, "{}", spec.name);
            }
        }
    }
}
