//! The (17,9,5) base cyclic code: systematic encoder and error-trapping
//! decoder, with all bit masks derived from the generator matrix at compile
//! time.
//!
//! The decoding algorithm walks one full cycle of the codeword, correcting
//! via the syndrome/pattern table at each rotation; it is based on the
//! error-trapping decoder described in Lin and Costello's *Error Control
//! Coding* (1983).

/// Codeword length in bits.
pub const WORD_BITS: usize = 17;
/// Message length in bits.
pub const DATA_BITS: usize = 9;
/// Number of parity-check bits.
pub const CHECK_BITS: usize = 8;

/// Generator matrix from the generator polynomial g(x) = x⁸+x⁵+x⁴+x³+1:
/// a 9×9 identity block followed by the 9×8 parity block, one row per
/// basis message.
pub const GEN: [[u8; WORD_BITS]; DATA_BITS] = [
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 1, 1, 0, 0],
    [0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 1, 1, 0],
    [0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 1, 1],
    [0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 1, 1, 1],
    [0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 1, 0, 1, 1, 0, 1, 1],
    [0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 1, 1, 1, 0, 0, 0, 1],
    [0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 1, 1, 0, 0, 1, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 1, 1, 0, 0, 1, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 1, 1, 0, 0, 1],
];

/// Encoder column masks: entry c is column c of the parity block as a 9-bit
/// mask over the data word (data bit 0 at the mask MSB).
pub const fn parity_columns(generator: &[[u8; WORD_BITS]; DATA_BITS]) -> [u16; CHECK_BITS] {
    let mut out = [0u16; CHECK_BITS];
    let mut c = 0;
    while c < CHECK_BITS {
        let mut mask = 0u16;
        let mut r = 0;
        while r < DATA_BITS {
            mask = (mask << 1) | generator[r][DATA_BITS + c] as u16;
            r += 1;
        }
        out[c] = mask;
        c += 1;
    }
    out
}

/// Rows of the parity-check matrix H = [Pᵗ | I₈] as 17-bit masks, derived
/// in the standard way from the generator matrix.
pub const fn parity_check_rows(generator: &[[u8; WORD_BITS]; DATA_BITS]) -> [u32; CHECK_BITS] {
    let mut out = [0u32; CHECK_BITS];
    let mut i = 0;
    while i < CHECK_BITS {
        // Transposed parity block: row i of H is column i of the parity block
        let mut mask = 0u32;
        let mut r = 0;
        while r < DATA_BITS {
            mask = (mask << 1) | generator[r][DATA_BITS + i] as u32;
            r += 1;
        }
        // Identity block
        let mut j = 0;
        while j < CHECK_BITS {
            mask = (mask << 1) | (j == i) as u32;
            j += 1;
        }
        out[i] = mask;
        i += 1;
    }
    out
}

/// Syndrome of a 17-bit word: H·w mod 2, row 0 at the MSB.
pub const fn syndrome(h: &[u32; CHECK_BITS], word: u32) -> u8 {
    let mut syn = 0u8;
    let mut i = 0;
    while i < CHECK_BITS {
        syn = (syn << 1) | ((h[i] & word).count_ones() & 1) as u8;
        i += 1;
    }
    syn
}

/// Maps each 8-bit syndrome to a correctable error pattern (0 when none).
///
/// Walks the 17 cyclic rotations of the canonical single-bit error (set bit
/// at the MSB position), forcing the trailing bit on before taking the
/// syndrome. Because the code is cyclic, patterns with the LSB set are all
/// the decoder ever needs.
pub const fn error_patterns(h: &[u32; CHECK_BITS]) -> [u32; 256] {
    let mut out = [0u32; 256];
    let mut w = 1u32 << (WORD_BITS - 1);
    let mut r = 0;
    while r < WORD_BITS {
        let pattern = w | 1;
        out[syndrome(h, pattern) as usize] = pattern;
        w = rotate17(w);
        r += 1;
    }
    out
}

pub const ENC_COLS: [u16; CHECK_BITS] = parity_columns(&GEN);
pub const PAR_ROWS: [u32; CHECK_BITS] = parity_check_rows(&GEN);
pub const PATTERNS: [u32; 256] = error_patterns(&PAR_ROWS);

/// Cyclically rotate the word right as if it was 17 bits long.
pub const fn rotate17(word: u32) -> u32 {
    let lsb = word & 1;
    word >> 1 | lsb << (WORD_BITS - 1)
}

/// Encode the given 9 data bits into a 17-bit codeword (data in the
/// high 9 bits).
pub fn encode(data: u16) -> u32 {
    assert_eq!(data >> DATA_BITS, 0);

    let mut parity = 0u32;
    for &col in ENC_COLS.iter() {
        parity = (parity << 1) | ((col & data).count_ones() & 1);
    }
    (data as u32) << CHECK_BITS | parity
}

/// Try to decode the given 17-bit word to the nearest codeword, correcting
/// up to 2 errors.
///
/// On success, returns `Some((data, err))` with the 9 data bits and the
/// number of corrected bits. Returns `None` on an unrecoverable error.
pub fn decode(word: u32) -> Option<(u16, usize)> {
    assert_eq!(word >> WORD_BITS, 0);

    // Walk a full cycle of the codeword, so the data bits end up back in
    // their original position.
    let mut w = word;
    let mut fixed = Some(0usize);

    for _ in 0..WORD_BITS {
        let syn = syndrome(&PAR_ROWS, w);
        if syn == 0 {
            w = rotate17(w);
            continue;
        }
        match PATTERNS[syn as usize] {
            0 => {
                fixed = None;
                w = rotate17(w);
            }
            pattern => {
                fixed = Some(pattern.count_ones() as usize);
                w = rotate17(w ^ pattern);
            }
        }
    }

    fixed.map(|err| ((w >> CHECK_BITS) as u16, err))
}
