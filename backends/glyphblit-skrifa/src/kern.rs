//! Legacy `kern` table reader
//!
//! Only the OpenType (version 0) header with horizontal format 0 subtables
//! is understood: a sorted list of glyph pairs with a signed adjustment in
//! font units. Pairs from all such subtables are merged: values add up
//! across subtables, except that a subtable with the override bit replaces
//! what came before it. Apple's version 1 tables and GPOS kerning are not
//! read.
//!
//! ```text
//! kern header      u16 version (0), u16 nTables
//! subtable header  u16 version, u16 length, u16 coverage
//! format 0         u16 nPairs, u16 searchRange, u16 entrySelector, u16 rangeShift
//! pair             u16 left, u16 right, i16 value
//! ```

use std::collections::BTreeMap;

const COVERAGE_HORIZONTAL: u16 = 0x0001;
const COVERAGE_MINIMUM: u16 = 0x0002;
const COVERAGE_CROSS_STREAM: u16 = 0x0004;
const COVERAGE_OVERRIDE: u16 = 0x0008;

const HEADER_LEN: usize = 4;
const SUBTABLE_HEADER_LEN: usize = 6;
const FORMAT0_HEADER_LEN: usize = 8;
const PAIR_LEN: usize = 6;

/// Kerning pairs sorted by `(left << 16) | right`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KernTable {
    pairs: Vec<(u32, i16)>,
}

impl KernTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse raw `kern` table bytes
    ///
    /// Returns `None` when the header is not a version 0 table or a
    /// subtable runs past the end of the data.
    pub fn parse(data: &[u8]) -> Option<Self> {
        if read_u16(data, 0)? != 0 {
            return None;
        }
        let n_tables = read_u16(data, 2)?;

        let mut merged: BTreeMap<u32, i16> = BTreeMap::new();
        let mut offset = HEADER_LEN;
        for _ in 0..n_tables {
            let length = read_u16(data, offset + 2)? as usize;
            let coverage = read_u16(data, offset + 4)?;
            if length < SUBTABLE_HEADER_LEN {
                return None;
            }

            let format = coverage >> 8;
            let usable = coverage & COVERAGE_HORIZONTAL != 0
                && coverage & (COVERAGE_MINIMUM | COVERAGE_CROSS_STREAM) == 0;
            if format == 0 && usable {
                let body = offset + SUBTABLE_HEADER_LEN;
                let n_pairs = read_u16(data, body)? as usize;
                let first = body + FORMAT0_HEADER_LEN;
                let replace = coverage & COVERAGE_OVERRIDE != 0;
                for i in 0..n_pairs {
                    let at = first + i * PAIR_LEN;
                    let left = read_u16(data, at)? as u32;
                    let right = read_u16(data, at + 2)? as u32;
                    let value = read_u16(data, at + 4)? as i16;
                    let entry = merged.entry((left << 16) | right).or_insert(0);
                    *entry = if replace {
                        value
                    } else {
                        entry.saturating_add(value)
                    };
                }
            }

            // Format 0 subtables in large fonts overflow the 16-bit length
            // field, so step by the pair count when we know it.
            offset += if format == 0 {
                let n_pairs = read_u16(data, offset + SUBTABLE_HEADER_LEN)? as usize;
                SUBTABLE_HEADER_LEN + FORMAT0_HEADER_LEN + n_pairs * PAIR_LEN
            } else {
                length
            };
        }

        Some(Self {
            pairs: merged.into_iter().collect(),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Adjustment in font units for the ordered pair, if present
    pub fn get(&self, left: u32, right: u32) -> Option<i16> {
        if left > u16::MAX as u32 || right > u16::MAX as u32 {
            return None;
        }
        let key = (left << 16) | right;
        self.pairs
            .binary_search_by_key(&key, |(k, _)| *k)
            .ok()
            .map(|i| self.pairs[i].1)
    }
}

fn read_u16(data: &[u8], offset: usize) -> Option<u16> {
    let bytes = data.get(offset..offset.checked_add(2)?)?;
    Some(u16::from_be_bytes([bytes[0], bytes[1]]))
}
