//! Packed bit-path encoding through a binary tree, terminated by a marker
//! bit.
//!
//! A path is read LSB-first: bit `k` is the `k`-th step (0 = left child, 1
//! = right child) from the root. The single bit immediately above the
//! highest path bit is a marker that distinguishes, e.g., a path of three
//! lefts (`0b1000`) from the empty path (`0b1`). This is deliberate and
//! load-bearing (see the module's invariants below) — do not "clean up"
//! the marker away.

use std::hash::{Hash, Hasher};

const WORD_BITS: usize = 64;
const MARKER: u64 = 1;

/// A step down the tree: left or right child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LorR {
    Left,
    Right,
}

/// A bit-path of left/right steps packed LSB-first into a dynamic array of
/// 64-bit words, terminated by a marker bit.
///
/// Invariants: exactly one marker bit above the highest path bit across
/// the whole backing array; words beyond the marker word are all zero;
/// `code_length` is the bit index of the marker; the empty code is
/// `words = [1]`, `code_length = 0`.
#[derive(Debug, Clone)]
pub struct Treecode {
    code_length: usize,
    words: Vec<u64>,
}

impl Treecode {
    /// The empty path: just the marker bit in word 0.
    #[inline]
    pub fn new() -> Self {
        Self { code_length: 0, words: vec![MARKER] }
    }

    /// Construct directly from a single raw word (marker bit included).
    pub fn from_word(word: u64) -> Self {
        let words = vec![word];
        let code_length = code_length_measured(&words);
        Self { code_length, words }
    }

    #[inline]
    pub fn code_length(&self) -> usize {
        self.code_length
    }

    #[inline]
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// Append a step, moving the marker one bit higher and growing the
    /// backing array if the marker would overflow the last allocated word.
    pub fn append(&mut self, branch: LorR) {
        let current_code_length = self.code_length;
        self.code_length += 1;
        let new_marker_bit_index = self.code_length;

        if new_marker_bit_index < WORD_BITS {
            self.words[0] = word_append(self.words[0], branch);
            return;
        }

        let last_allocated_index = self.words.len() * WORD_BITS - 1;
        if new_marker_bit_index > last_allocated_index {
            log::debug!(
                "treecode growing backing array from {} to {} words",
                self.words.len(),
                self.words.len() + 1
            );
            self.words.push(0);
        }

        let new_marker_word = new_marker_bit_index / WORD_BITS;
        let new_data_word = current_code_length / WORD_BITS;

        if new_marker_word == new_data_word {
            self.words[new_marker_word] = word_append(self.words[new_marker_word], branch);
            return;
        }

        self.words[new_marker_word] = MARKER;
        self.words[new_data_word] =
            set_bit_in_word(self.words[new_data_word], WORD_BITS - 1, branch);
    }

    /// True iff `self` is a prefix of `rhs` (the empty path is a prefix of
    /// everything).
    pub fn is_prefix_of(&self, rhs: &Treecode) -> bool {
        let len_self = self.code_length;
        if len_self == 0 {
            return true;
        }
        let len_rhs = rhs.code_length;
        if len_rhs == 0 || len_rhs < len_self {
            return false;
        }

        if len_self < WORD_BITS {
            return word_is_prefix_of(self.words[0], rhs.words[0]);
        }

        let greatest_nonzero_index = len_self / WORD_BITS;
        for i in 0..greatest_nonzero_index {
            if self.words[i] != rhs.words[i] {
                return false;
            }
        }

        word_is_prefix_of(self.words[greatest_nonzero_index], rhs.words[greatest_nonzero_index])
    }

    /// Value equality: lengths equal and all words up to the marker word
    /// equal.
    pub fn eql(&self, rhs: &Treecode) -> bool {
        if self.code_length != rhs.code_length {
            return false;
        }
        let mut end_word = self.code_length / WORD_BITS + 1;
        end_word = end_word.min(self.words.len()).min(rhs.words.len());
        for i in 0..end_word {
            if self.words[i] != rhs.words[i] {
                return false;
            }
        }
        true
    }

    /// Mixing hash over the occupied words only, so that `eql(a, b) implies
    /// hash(a) == hash(b)`.
    pub fn hash_value(&self) -> u64 {
        let mut hash: u64 = 0;
        for (i, &word) in self.words.iter().enumerate() {
            if word > 0 {
                hash ^= (i as u64 + 1).wrapping_mul(0x9e3779b97f4a7c15);
                hash ^= word.wrapping_mul(0xbf58476d1ce4e5b9);
                hash = hash.rotate_left(27);
            }
        }
        hash
    }

    /// The step to descend from `self` towards `dest`. Defined only when
    /// `self` is a prefix of `dest`.
    pub fn next_step_towards(&self, dest: &Treecode) -> LorR {
        let word_idx = self.code_length / WORD_BITS;
        let pos = self.code_length % WORD_BITS;
        let target_word = dest.words[word_idx];
        if target_word & (1u64 << pos) != 0 {
            LorR::Right
        } else {
            LorR::Left
        }
    }

    /// True iff `self == other`, or one is a prefix of the other.
    pub fn path_exists(&self, other: &Treecode) -> bool {
        self.eql(other) || self.is_prefix_of(other) || other.is_prefix_of(self)
    }
}

impl Default for Treecode {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Treecode {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.eql(other)
    }
}

impl Eq for Treecode {}

impl Hash for Treecode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_value());
    }
}

fn code_length_measured(words: &[u64]) -> usize {
    let mut occupied = 0;
    for i in (0..words.len()).rev() {
        if words[i] != 0 {
            occupied = i;
            break;
        }
    }
    let count = (WORD_BITS - 1) - words[occupied].leading_zeros() as usize;
    if occupied == 0 {
        count
    } else {
        count + occupied * WORD_BITS
    }
}

fn set_bit_in_word(word: u64, bit_index: usize, val: LorR) -> u64 {
    match val {
        LorR::Right => word | (1u64 << bit_index),
        LorR::Left => word & !(1u64 << bit_index),
    }
}

fn word_append(target_word: u64, new_branch: LorR) -> u64 {
    let significant_bits = WORD_BITS - 1 - target_word.leading_zeros() as usize;
    let new_val = set_bit_in_word(target_word, significant_bits, new_branch);
    if significant_bits == WORD_BITS - 1 {
        return new_val;
    }
    set_bit_in_word(new_val, significant_bits + 1, LorR::Right)
}

fn word_is_prefix_of(lhs: u64, rhs: u64) -> bool {
    if lhs == rhs || lhs == MARKER {
        return true;
    }
    if lhs == 0 || rhs == 0 {
        return false;
    }
    let lhs_leading_zeros = lhs.leading_zeros() as usize + 1;
    let mask = (1u64 << (WORD_BITS - lhs_leading_zeros)) - 1;
    (lhs & mask) == (rhs & mask)
}
