//! Small dense matrix and bit-vector arithmetic over GF(2).
//!
//! Matrices are `Vec<Vec<u8>>` with 0/1 entries, vectors are `&[u8]`. The
//! matrices involved in the CAI block codes are at most 9×17, so explicit
//! row/column loops beat any numeric array machinery.

/// Interpret an MSB-first 0/1 slice as an unsigned integer.
/// Entries other than 0/1 are masked to their low bit.
pub fn vec_to_int(bits: &[u8]) -> u32 {
    debug_assert!(bits.len() <= 32);
    bits.iter().fold(0u32, |acc, &b| (acc << 1) | (b & 1) as u32)
}

/// Inverse of `vec_to_int`: the low `width` bits of `value`, MSB first.
pub fn int_to_vec(value: u32, width: usize) -> Vec<u8> {
    (0..width).map(|i| ((value >> (width - 1 - i)) & 1) as u8).collect()
}

/// n×n identity matrix.
pub fn identity(n: usize) -> Vec<Vec<u8>> {
    (0..n).map(|i| (0..n).map(|j| (i == j) as u8).collect()).collect()
}

/// Transpose of a rectangular matrix. All rows must have equal length.
pub fn transpose(m: &[Vec<u8>]) -> Vec<Vec<u8>> {
    let cols = m.first().map_or(0, |row| row.len());
    (0..cols).map(|c| m.iter().map(|row| row[c]).collect()).collect()
}

/// Horizontal concatenation [a | b]. Both must have the same row count.
pub fn hconcat(a: &[Vec<u8>], b: &[Vec<u8>]) -> Vec<Vec<u8>> {
    assert_eq!(a.len(), b.len(), "hconcat: row count mismatch");
    a.iter()
        .zip(b)
        .map(|(ra, rb)| ra.iter().chain(rb.iter()).copied().collect())
        .collect()
}

/// Matrix·vector product modulo 2.
pub fn mat_vec_mod2(m: &[Vec<u8>], v: &[u8]) -> Vec<u8> {
    m.iter()
        .map(|row| {
            assert_eq!(row.len(), v.len(), "mat_vec_mod2: dimension mismatch");
            row.iter().zip(v).fold(0u8, |acc, (&a, &b)| acc ^ (a & b & 1))
        })
        .collect()
}

/// Cyclically rotate the low `width` bits of `word` right by one position.
/// Bits at or above `width` must be zero.
pub fn rotate_right(word: u32, width: u32) -> u32 {
    debug_assert!(width >= 1 && width <= 32);
    debug_assert!(width == 32 || word >> width == 0);
    let lsb = word & 1;
    word >> 1 | lsb << (width - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_to_int() {
        assert_eq!(vec_to_int(&[]), 0);
        assert_eq!(vec_to_int(&[1]), 1);
        assert_eq!(vec_to_int(&[1, 0, 0, 1, 1, 1, 0, 0]), 0b10011100);
        assert_eq!(vec_to_int(&[1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]), 1 << 16);
    }

    #[test]
    fn test_int_vec_roundtrip() {
        // Edges plus a sampled sweep of the 17-bit space
        for x in [0u32, 1, 2, 0b101, 0x0FFFF, 0x10000, 0x1FFFF] {
            assert_eq!(vec_to_int(&int_to_vec(x, 17)), x);
        }
        for x in (0u32..1 << 17).step_by(131) {
            assert_eq!(vec_to_int(&int_to_vec(x, 17)), x);
        }
    }

    #[test]
    fn test_transpose() {
        let m = vec![vec![1, 0, 1], vec![0, 1, 1]];
        assert_eq!(transpose(&m), vec![vec![1, 0], vec![0, 1], vec![1, 1]]);
        assert_eq!(transpose(&transpose(&m)), m);
    }

    #[test]
    fn test_hconcat_identity() {
        let a = vec![vec![1, 1], vec![0, 1]];
        let out = hconcat(&a, &identity(2));
        assert_eq!(out, vec![vec![1, 1, 1, 0], vec![0, 1, 0, 1]]);
    }

    #[test]
    fn test_mat_vec_mod2() {
        let m = vec![vec![1, 1, 0], vec![0, 1, 1]];
        assert_eq!(mat_vec_mod2(&m, &[1, 1, 1]), vec![0, 0]);
        assert_eq!(mat_vec_mod2(&m, &[1, 0, 1]), vec![1, 1]);
    }

    #[test]
    fn test_rotate_right() {
        assert_eq!(rotate_right(0b10000000000000000, 17), 0b01000000000000000);
        assert_eq!(rotate_right(0b00000000000000001, 17), 0b10000000000000000);
        assert_eq!(rotate_right(0b01111111111111111, 17), 0b10111111111111111);

        let mut word = 0b11100011001010101;
        for _ in 0..17 {
            word = rotate_right(word, 17);
        }
        assert_eq!(word, 0b11100011001010101);
    }
}
