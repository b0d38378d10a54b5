//! Per-character occurrence bitsets over a fixed text, used to accelerate
//! the literal transformer (see [`crate::ast::Ast::apply`]).

use crate::bitset::Bitset;

const SLOTS: usize = 256;

/// Precomputed per-byte occurrence bitsets for one text.
///
/// For byte `c` in the declared alphabet, `get(c)` returns a bitset of size
/// `text.len() + 1` with bit `p` set iff `p < text.len()` and `text[p] ==
/// c`. Bytes outside the alphabet have no entry and fall back to the
/// general (non-accelerated) literal path. Building the table is a single
/// linear scan of the text per alphabet byte; the table itself is
/// immutable once built and may be shared across concurrent matches.
#[derive(Debug, Clone)]
pub struct MatchMaskTable {
    masks: Vec<Option<Bitset>>,
}

impl MatchMaskTable {
    /// Scans `text` once per byte in `alphabet` and builds the occurrence
    /// table. Duplicate bytes in `alphabet` are harmless; the second scan
    /// simply overwrites the bitset with an identical one.
    pub fn build(text: &[u8], alphabet: &[u8]) -> MatchMaskTable {
        let mut masks: Vec<Option<Bitset>> = vec![None; SLOTS];
        for &c in alphabet {
            let mask = masks[c as usize].get_or_insert_with(|| Bitset::new(text.len() + 1));
            for (pos, &b) in text.iter().enumerate() {
                if b == c {
                    mask.set(pos);
                }
            }
        }
        log::trace!(
            "built MatchMask table over {} bytes for {} alphabet entries",
            text.len(),
            alphabet.len()
        );
        MatchMaskTable { masks }
    }

    /// The occurrence bitset for `c`, if it was part of the declared
    /// alphabet at build time.
    #[inline]
    pub fn get(&self, c: u8) -> Option<&Bitset> {
        self.masks[c as usize].as_ref()
    }
}
