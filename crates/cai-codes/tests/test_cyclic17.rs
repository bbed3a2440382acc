//! Noise round-trips for the (17,9,5) encoder/decoder.

use cai_codes::cyclic17;

/// Random data words with up to two random bit errors must always decode
/// back to the original data, with the error count reported.
#[test]
fn test_random_words_with_noise() {
    for _ in 0..2000 {
        let data = rand::random_range(0..1u16 << cyclic17::DATA_BITS);
        let word = cyclic17::encode(data);

        let i = rand::random_range(0..cyclic17::WORD_BITS);
        let j = rand::random_range(0..cyclic17::WORD_BITS);
        let corrupted = word ^ (1 << i) ^ (1 << j);
        let errs = if i == j { 0 } else { 2 };

        assert_eq!(
            cyclic17::decode(corrupted),
            Some((data, errs)),
            "data {:#011b}, error bits {} and {}",
            data,
            i,
            j
        );
    }
}

/// A codeword plus a tabled error pattern has that pattern's syndrome, so
/// the decoder must strip exactly the pattern again.
#[test]
fn test_tabled_patterns_are_stripped() {
    let word = cyclic17::encode(0b110110001);
    for (syn, &pattern) in cyclic17::PATTERNS.iter().enumerate() {
        if pattern == 0 {
            continue;
        }
        assert_eq!(cyclic17::syndrome(&cyclic17::PAR_ROWS, word ^ pattern) as usize, syn);
        let expected_errs = pattern.count_ones() as usize;
        assert_eq!(cyclic17::decode(word ^ pattern), Some((0b110110001, expected_errs)));
    }
}
