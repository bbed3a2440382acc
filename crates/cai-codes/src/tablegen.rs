//! Offline derivation of the syndrome/pattern table for the base code.
//!
//! This is the pipeline behind `cai-table-tool`: derive the parity-check
//! matrix from the generator matrix, enumerate the syndromes of all cyclic
//! rotations of the canonical error pattern, and render the results as
//! binary literals for pasting into constant tables.
//!
//! Everything operates on an explicit [`BlockCodeParams`] value, so the
//! pipeline can be exercised with alternative code parameters in tests.

use std::fmt::{self, Write};

use cai_core::gf2;

use crate::cyclic17;

/// Number of entries in the dense syndrome table (one per 8-bit syndrome).
pub const TABLE_SIZE: usize = 256;

/// Parameters of a systematic binary block code.
#[derive(Debug, Clone)]
pub struct BlockCodeParams {
    /// Codeword length in bits
    pub word_bits: usize,
    /// Message length in bits
    pub data_bits: usize,
    /// Generator matrix, `data_bits` rows of `word_bits` 0/1 entries
    pub generator: Vec<Vec<u8>>,
}

impl BlockCodeParams {
    /// The (17,9,5) base cyclic code shared by DMR and P25.
    pub fn base17() -> Self {
        BlockCodeParams {
            word_bits: cyclic17::WORD_BITS,
            data_bits: cyclic17::DATA_BITS,
            generator: cyclic17::GEN.iter().map(|row| row.to_vec()).collect(),
        }
    }

    pub fn check_bits(&self) -> usize {
        self.word_bits - self.data_bits
    }

    /// The parity block: the last `check_bits` columns of the generator
    /// matrix.
    pub fn parity_block(&self) -> Vec<Vec<u8>> {
        self.generator.iter().map(|row| row[self.data_bits..].to_vec()).collect()
    }
}

/// Derive the parity-check matrix H = [Pᵗ | I] from the generator matrix:
/// transpose the parity block and append an identity block.
///
/// Every valid codeword c then satisfies H·cᵗ ≡ 0 (mod 2).
pub fn parity_check_matrix(params: &BlockCodeParams) -> Vec<Vec<u8>> {
    let xpose = gf2::transpose(&params.parity_block());
    gf2::hconcat(&xpose, &gf2::identity(params.check_bits()))
}

/// Build the dense syndrome → error-pattern table.
///
/// For each rotation r, the canonical error vector (single set bit at the
/// MSB position) is cyclically rotated right by r and its trailing bit is
/// forced on, giving the pattern `(1 << (word_bits-1-r)) | 1`. The 8-bit
/// syndrome of that pattern indexes the table; a later rotation overwrites
/// any earlier entry for the same syndrome.
pub fn build_syndrome_table(params: &BlockCodeParams, h: &[Vec<u8>]) -> Vec<u32> {
    let mut table = vec![0u32; TABLE_SIZE];

    // Canonical single-bit error at the MSB position, rotated right by one
    // per step
    let mut error = 1u32 << (params.word_bits - 1);

    for r in 0..params.word_bits {
        let pattern = error | 1;
        let w = gf2::int_to_vec(pattern, params.word_bits);
        let syn = gf2::vec_to_int(&gf2::mat_vec_mod2(h, &w));

        // Must hold for any parity-check matrix with 8 rows; a violation
        // means the fixed input matrix is broken
        assert!(
            (syn as usize) < TABLE_SIZE,
            "syndrome {:#x} does not fit an 8-bit table",
            syn
        );
        cai_core::assert_warn!(
            table[syn as usize] == 0,
            "syndrome {:#04x} collision, earlier pattern overwritten",
            syn
        );

        tracing::trace!("rotation {:2}: pattern {:#019b} -> syndrome {:#05x}", r, pattern, syn);
        table[syn as usize] = pattern;
        error = gf2::rotate_right(error, params.word_bits as u32);
    }

    table
}

/// Render one zero-padded binary literal per row, comma-terminated, for
/// embedding as source constants elsewhere.
pub fn render_binary_rows(out: &mut impl Write, rows: &[Vec<u8>], width: usize) -> fmt::Result {
    for row in rows {
        writeln!(out, "0b{:0width$b},", gf2::vec_to_int(row), width = width)?;
    }
    Ok(())
}

/// Render the dense syndrome table, syndromes 0..255 in increasing order.
/// A known syndrome emits its 17-bit pattern on its own line; a miss emits
/// a compact `0, ` placeholder with no line break.
pub fn render_syndrome_map(out: &mut impl Write, table: &[u32]) -> fmt::Result {
    for &pattern in table {
        if pattern != 0 {
            write!(out, "\n0b{:017b},\n", pattern)?;
        } else {
            write!(out, "0, ")?;
        }
    }
    writeln!(out)
}

/// Render the full three-section report: the transposed parity block (the
/// encoder's column masks), the parity-check matrix, and the
/// syndrome/pattern table.
pub fn render_tables(params: &BlockCodeParams) -> Result<String, fmt::Error> {
    let h = parity_check_matrix(params);
    let table = build_syndrome_table(params, &h);

    tracing::debug!(
        "derived {}x{} parity-check matrix, {} syndrome mappings",
        h.len(),
        params.word_bits,
        table.iter().filter(|&&p| p != 0).count()
    );

    let mut out = String::new();
    writeln!(out, "generator:")?;
    render_binary_rows(&mut out, &gf2::transpose(&params.parity_block()), params.data_bits)?;
    writeln!(out, "parity check:")?;
    render_binary_rows(&mut out, &h, params.word_bits)?;
    writeln!(out, "syndrome/pattern mappings:")?;
    render_syndrome_map(&mut out, &table)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parity_check_matches_consts() {
        // The runtime derivation and the compile-time masks must agree
        let params = BlockCodeParams::base17();
        let h = parity_check_matrix(&params);
        assert_eq!(h.len(), 8);
        for (row, &mask) in h.iter().zip(cyclic17::PAR_ROWS.iter()) {
            assert_eq!(row.len(), 17);
            assert_eq!(gf2::vec_to_int(row), mask);
        }
    }

    #[test]
    fn test_parity_check_orthogonal() {
        let params = BlockCodeParams::base17();
        let h = parity_check_matrix(&params);
        for row in params.generator.iter() {
            let syn = gf2::mat_vec_mod2(&h, row);
            assert!(syn.iter().all(|&b| b == 0), "H·Gᵗ must vanish row-wise");
        }
    }

    #[test]
    fn test_syndrome_table_matches_consts() {
        let params = BlockCodeParams::base17();
        let h = parity_check_matrix(&params);
        let table = build_syndrome_table(&params, &h);
        assert_eq!(&table[..], &cyclic17::PATTERNS[..]);
    }

    #[test]
    fn test_syndrome_table_shape() {
        let params = BlockCodeParams::base17();
        let h = parity_check_matrix(&params);
        let table = build_syndrome_table(&params, &h);

        assert_eq!(table.len(), TABLE_SIZE);
        let hits: Vec<usize> = (0..TABLE_SIZE).filter(|&s| table[s] != 0).collect();
        assert_eq!(hits.len(), 17, "one entry per rotation, no collisions");
        assert_eq!(
            hits,
            vec![1, 3, 5, 9, 17, 33, 38, 56, 65, 79, 115, 129, 142, 157, 218, 229, 240]
        );
        for &s in hits.iter() {
            assert!(table[s] < 1 << params.word_bits);
        }
    }

    #[test]
    fn test_render_binary_rows() {
        let mut out = String::new();
        render_binary_rows(&mut out, &[vec![1, 0, 1], vec![0, 1, 1]], 5).unwrap();
        assert_eq!(out, "0b00101,\n0b00011,\n");
    }

    #[test]
    fn test_render_syndrome_map() {
        let mut table = vec![0u32; TABLE_SIZE];
        table[1] = 0b1;
        let mut out = String::new();
        render_syndrome_map(&mut out, &table).unwrap();
        assert!(out.starts_with("0, \n0b00000000000000001,\n0, "));
        assert!(out.ends_with("0, \n"));
    }
}
