//! Zobrist keys for the reference board.

use crate::piece::Piece;

const SEED: u64 = 0x0D0E_57A7_1C0F_FEE5;

const PIECE_SQUARE_KEYS: usize = Piece::COUNT * 64;
const KEY_COUNT: usize = PIECE_SQUARE_KEYS + 1 + 8;

/// All keys in one table: piece-square keys, then side to move, then en passant files.
static KEYS: [u64; KEY_COUNT] = {
    let mut keys = [0u64; KEY_COUNT];
    let mut state = SEED;
    let mut i = 0;
    while i < KEY_COUNT {
        // splitmix64
        state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        keys[i] = z ^ (z >> 31);
        i += 1;
    }
    keys
};

#[inline]
pub(crate) fn piece_square(piece: Piece, sq: usize) -> u64 {
    KEYS[piece.index() * 64 + sq]
}

/// XORed in when Black is to move.
#[inline]
pub(crate) fn side_to_move() -> u64 {
    KEYS[PIECE_SQUARE_KEYS]
}

#[inline]
pub(crate) fn en_passant_file(file: u8) -> u64 {
    KEYS[PIECE_SQUARE_KEYS + 1 + file as usize]
}

#[cfg(test)]
mod tests {
    use super::KEYS;

    #[test]
    fn keys_are_distinct_and_nonzero() {
        let mut sorted = KEYS.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), KEYS.len());
        assert!(KEYS.iter().all(|&k| k != 0));
    }
}
