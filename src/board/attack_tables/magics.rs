//! Magic bitboard tables for sliding-piece attacks.
//!
//! For a slider on `sq` with board occupancy `occ`, the attack set is
//! `rows[sq][((occ & mask[sq]) * magic[sq]) >> shift[sq]]`. The magic
//! factors are found at initialization by trying random sparse candidates
//! until one hashes every relevant-occupancy subset without a destructive
//! collision (collisions are allowed when the attack sets coincide).

use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ROOK_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Candidate magics tried per square before initialization is declared failed.
/// In practice a magic is found within a few thousand attempts.
const MAX_MAGIC_ATTEMPTS: usize = 1_000_000;

/// Fixed seed so table construction is deterministic across runs.
const MAGIC_SEED: u64 = 0x1A2B_3C4D_5E6F_7081;

struct Magic {
    factor: u64,
    shift: u32,
}

struct SliderTable {
    masks: [u64; 64],
    magics: Vec<Magic>,
    rows: Vec<Vec<u64>>,
}

static ROOK_TABLE: Lazy<SliderTable> = Lazy::new(|| SliderTable::build(&ROOK_DIRECTIONS));
static BISHOP_TABLE: Lazy<SliderTable> = Lazy::new(|| SliderTable::build(&BISHOP_DIRECTIONS));

/// Rook attack set for `sq` (0-63) given the full board occupancy.
#[inline]
pub(crate) fn rook_attacks(sq: usize, occupancy: u64) -> u64 {
    ROOK_TABLE.attacks(sq, occupancy)
}

/// Bishop attack set for `sq` (0-63) given the full board occupancy.
#[inline]
pub(crate) fn bishop_attacks(sq: usize, occupancy: u64) -> u64 {
    BISHOP_TABLE.attacks(sq, occupancy)
}

/// Queen attack set: union of rook and bishop attacks.
#[inline]
pub(crate) fn queen_attacks(sq: usize, occupancy: u64) -> u64 {
    rook_attacks(sq, occupancy) | bishop_attacks(sq, occupancy)
}

impl SliderTable {
    #[inline]
    fn attacks(&self, sq: usize, occupancy: u64) -> u64 {
        let magic = &self.magics[sq];
        let idx = ((occupancy & self.masks[sq]).wrapping_mul(magic.factor) >> magic.shift) as usize;
        self.rows[sq][idx]
    }

    fn build(directions: &[(isize, isize); 4]) -> Self {
        let mut rng = StdRng::seed_from_u64(MAGIC_SEED);
        let mut masks = [0u64; 64];
        let mut magics = Vec::with_capacity(64);
        let mut rows = Vec::with_capacity(64);

        for sq in 0..64 {
            let mask = relevant_mask(sq, directions);
            let (subsets, reference) = enumerate_subsets(sq, mask, directions);
            let shift = 64 - mask.count_ones();

            let (factor, row) = find_magic(&mut rng, &subsets, &reference, shift)
                .unwrap_or_else(|| panic!("magic search exhausted for square {sq}"));

            masks[sq] = mask;
            magics.push(Magic { factor, shift });
            rows.push(row);
        }

        SliderTable {
            masks,
            magics,
            rows,
        }
    }
}

/// Relevant-occupancy mask: the slider's rays excluding the origin square
/// and the final board-edge square of each ray (an edge blocker cannot
/// change the attack set).
fn relevant_mask(sq: usize, directions: &[(isize, isize); 4]) -> u64 {
    let mut mask = 0u64;
    for &(dr, df) in directions {
        let mut r = (sq / 8) as isize + dr;
        let mut f = (sq % 8) as isize + df;
        while (0..8).contains(&(r + dr)) && (0..8).contains(&(f + df)) {
            mask |= 1u64 << ((r as usize) * 8 + (f as usize));
            r += dr;
            f += df;
        }
    }
    mask
}

/// Ray-cast attack set: travel each direction until hitting a blocker,
/// which is included in the result.
fn slider_attacks_slow(sq: usize, blockers: u64, directions: &[(isize, isize); 4]) -> u64 {
    let mut attacks = 0u64;
    for &(dr, df) in directions {
        let mut r = (sq / 8) as isize + dr;
        let mut f = (sq % 8) as isize + df;
        while (0..8).contains(&r) && (0..8).contains(&f) {
            let bit = 1u64 << ((r as usize) * 8 + (f as usize));
            attacks |= bit;
            if blockers & bit != 0 {
                break;
            }
            r += dr;
            f += df;
        }
    }
    attacks
}

/// Enumerate every subset of `mask` with the carry-rippler trick
/// (`next = (current - mask) & mask`), pairing each subset with its
/// ray-cast attack set. Results are written by index; the sequence has
/// exactly `2^popcount(mask)` entries, wrapping back to the empty set.
fn enumerate_subsets(
    sq: usize,
    mask: u64,
    directions: &[(isize, isize); 4],
) -> (Vec<u64>, Vec<u64>) {
    let size = 1usize << mask.count_ones();
    let mut subsets = vec![0u64; size];
    let mut reference = vec![0u64; size];

    let mut blockers = 0u64;
    for i in 0..size {
        subsets[i] = blockers;
        reference[i] = slider_attacks_slow(sq, blockers, directions);
        blockers = blockers.wrapping_sub(mask) & mask;
    }
    debug_assert_eq!(blockers, 0);

    (subsets, reference)
}

/// Search for a magic factor that maps every subset to a table slot
/// without conflicting attack sets. Candidates are ANDed triples of
/// random words, favoring low Hamming weight.
///
/// The row and stamp buffers are reused across candidates; a slot is
/// current only when its stamp equals the attempt number. Slots never
/// touched by the winning candidate are never indexed at query time.
fn find_magic(
    rng: &mut StdRng,
    subsets: &[u64],
    reference: &[u64],
    shift: u32,
) -> Option<(u64, Vec<u64>)> {
    let size = subsets.len();
    let mut row = vec![0u64; size];
    let mut stamp = vec![0u32; size];

    'candidates: for attempt in 1..=MAX_MAGIC_ATTEMPTS as u32 {
        let candidate = rng.gen::<u64>() & rng.gen::<u64>() & rng.gen::<u64>();

        for (i, &blockers) in subsets.iter().enumerate() {
            let idx = (blockers.wrapping_mul(candidate) >> shift) as usize;
            if stamp[idx] == attempt && row[idx] != reference[i] {
                continue 'candidates;
            }
            row[idx] = reference[i];
            stamp[idx] = attempt;
        }
        return Some((candidate, row));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(rank: usize, file: usize) -> usize {
        rank * 8 + file
    }

    #[test]
    fn test_rook_mask_excludes_origin_and_edges() {
        // a1 rook: a2-a7 north, b1-g1 east
        let mask = relevant_mask(sq(0, 0), &ROOK_DIRECTIONS);
        assert_eq!(mask.count_ones(), 12);
        assert_eq!(mask & 1, 0); // origin excluded
        assert_eq!(mask & (1u64 << sq(7, 0)), 0); // a8 edge excluded
        assert_eq!(mask & (1u64 << sq(0, 7)), 0); // h1 edge excluded

        // central rook has 5+5 relevant squares
        assert_eq!(relevant_mask(sq(3, 3), &ROOK_DIRECTIONS).count_ones(), 10);
    }

    #[test]
    fn test_bishop_mask_bit_counts() {
        assert_eq!(relevant_mask(sq(0, 0), &BISHOP_DIRECTIONS).count_ones(), 6);
        assert_eq!(relevant_mask(sq(3, 3), &BISHOP_DIRECTIONS).count_ones(), 9);
    }

    #[test]
    fn test_table_row_size_bounds() {
        for square in 0..64 {
            let rook_bits = relevant_mask(square, &ROOK_DIRECTIONS).count_ones();
            let bishop_bits = relevant_mask(square, &BISHOP_DIRECTIONS).count_ones();
            assert!((10..=12).contains(&rook_bits));
            assert!((5..=9).contains(&bishop_bits));
        }
    }

    #[test]
    fn test_ray_cast_includes_first_blocker_only() {
        // Rook on a1, blocker on a4: north ray is a2, a3, a4
        let blockers = 1u64 << sq(3, 0);
        let attacks = slider_attacks_slow(sq(0, 0), blockers, &ROOK_DIRECTIONS);
        assert_ne!(attacks & (1u64 << sq(1, 0)), 0);
        assert_ne!(attacks & (1u64 << sq(3, 0)), 0); // blocker included
        assert_eq!(attacks & (1u64 << sq(4, 0)), 0); // beyond blocker excluded
    }

    #[test]
    fn test_magic_lookup_matches_ray_cast() {
        let mut rng = StdRng::seed_from_u64(0xB10C);
        for square in 0..64 {
            for _ in 0..64 {
                let occupancy = rng.gen::<u64>() & rng.gen::<u64>();
                assert_eq!(
                    rook_attacks(square, occupancy),
                    slider_attacks_slow(square, occupancy, &ROOK_DIRECTIONS),
                    "rook mismatch on square {square}"
                );
                assert_eq!(
                    bishop_attacks(square, occupancy),
                    slider_attacks_slow(square, occupancy, &BISHOP_DIRECTIONS),
                    "bishop mismatch on square {square}"
                );
            }
        }
    }

    #[test]
    fn test_empty_board_attacks() {
        // Rook on d4 on an empty board: full rank + file minus origin
        let attacks = rook_attacks(sq(3, 3), 0);
        assert_eq!(attacks.count_ones(), 14);

        // Queen combines both sliders
        assert_eq!(
            queen_attacks(sq(3, 3), 0),
            rook_attacks(sq(3, 3), 0) | bishop_attacks(sq(3, 3), 0)
        );
    }
}
