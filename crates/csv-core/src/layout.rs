//! Layout table and layout selection.
//!
//! A layout decides which of the 28 body positions carry document identifier characters; the
//! remaining 21 positions carry digest characters. Every code records the layout it used in its
//! final character, so a decoder holding the same table can split the body again.
//!
//! # Table contract
//!
//! The table is shared with any party that decodes codes. It must stay byte-for-byte identical:
//!
//! - Entries 0-27 are seven-wide windows sliding over positions 0..=27, wrapping at 28.
//! - Entries 28-35 are irregular patterns with no generating rule and are listed verbatim.
//!
//! # Selection
//!
//! Layouts are picked at random for every code through a [`LayoutSelector`]. The randomness is
//! for layout diversity only, so a regular PRNG is enough.

use csv_code_types::{LayoutIndex, BODY_LEN, DOCUMENT_ID_WIDTH, LAYOUT_COUNT};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};

/// Body positions holding document identifier characters, indexed by layout.
#[rustfmt::skip]
pub static LAYOUTS: [[u8; DOCUMENT_ID_WIDTH]; LAYOUT_COUNT as usize] = [
    [ 0,  1,  2,  3,  4,  5,  6],
    [ 1,  2,  3,  4,  5,  6,  7],
    [ 2,  3,  4,  5,  6,  7,  8],
    [ 3,  4,  5,  6,  7,  8,  9],
    [ 4,  5,  6,  7,  8,  9, 10],
    [ 5,  6,  7,  8,  9, 10, 11],
    [ 6,  7,  8,  9, 10, 11, 12],
    [ 7,  8,  9, 10, 11, 12, 13],
    [ 8,  9, 10, 11, 12, 13, 14],
    [ 9, 10, 11, 12, 13, 14, 15],
    [10, 11, 12, 13, 14, 15, 16],
    [11, 12, 13, 14, 15, 16, 17],
    [12, 13, 14, 15, 16, 17, 18],
    [13, 14, 15, 16, 17, 18, 19],
    [14, 15, 16, 17, 18, 19, 20],
    [15, 16, 17, 18, 19, 20, 21],
    [16, 17, 18, 19, 20, 21, 22],
    [17, 18, 19, 20, 21, 22, 23],
    [18, 19, 20, 21, 22, 23, 24],
    [19, 20, 21, 22, 23, 24, 25],
    [20, 21, 22, 23, 24, 25, 26],
    [21, 22, 23, 24, 25, 26, 27],
    [22, 23, 24, 25, 26, 27,  0],
    [23, 24, 25, 26, 27,  0,  1],
    [24, 25, 26, 27,  0,  1,  2],
    [25, 26, 27,  0,  1,  2,  3],
    [26, 27,  0,  1,  2,  3,  4],
    [27,  0,  1,  2,  3,  4,  5],
    [ 0,  2,  4,  6,  8, 10, 12],
    [14, 16, 18, 20, 22, 24, 26],
    [ 1,  3,  5,  7,  9, 11, 13],
    [15, 17, 19, 21, 23, 25, 27],
    [ 0,  4,  8, 12, 16, 20, 24],
    [ 1,  5,  9, 13, 17, 21, 25],
    [ 1,  2,  3,  5,  7, 11, 13],
    [ 0,  1,  2,  4,  8, 16, 27],
];

/// Resolved layout: the table entry plus a membership mask over the body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    index: LayoutIndex,
    mask: [bool; BODY_LEN],
}

impl Layout {
    /// Looks up a layout in the table.
    pub fn get(index: LayoutIndex) -> Self {
        let mut mask = [false; BODY_LEN];
        for &pos in &LAYOUTS[usize::from(index.get())] {
            mask[usize::from(pos)] = true;
        }
        Self { index, mask }
    }

    pub fn index(&self) -> LayoutIndex {
        self.index
    }

    /// Identifier positions as listed in the table.
    pub fn positions(&self) -> &'static [u8; DOCUMENT_ID_WIDTH] {
        &LAYOUTS[usize::from(self.index.get())]
    }

    /// Returns `true` if body position `pos` carries a document identifier character.
    pub fn is_document_position(&self, pos: usize) -> bool {
        self.mask.get(pos).copied().unwrap_or(false)
    }
}

/// Source of layout choices.
///
/// Implementations must be usable from several threads at once.
pub trait LayoutSelector: Send + Sync {
    fn select(&self) -> LayoutIndex;
}

impl<T: LayoutSelector + ?Sized> LayoutSelector for Box<T> {
    fn select(&self) -> LayoutIndex {
        (**self).select()
    }
}

/// Uniform selection from the calling thread's RNG. This is the production selector.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRngSelector;

impl LayoutSelector for ThreadRngSelector {
    fn select(&self) -> LayoutIndex {
        LayoutIndex::wrapping(rand::thread_rng().gen_range(0..LAYOUT_COUNT))
    }
}

/// Uniform selection from a seeded generator, for reproducible sequences of codes.
#[derive(Debug)]
pub struct SeededSelector {
    rng: Mutex<StdRng>,
}

impl SeededSelector {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl LayoutSelector for SeededSelector {
    fn select(&self) -> LayoutIndex {
        // A panic elsewhere cannot leave the RNG in a broken state, so poisoning is ignored.
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        LayoutIndex::wrapping(rng.gen_range(0..LAYOUT_COUNT))
    }
}

/// Always returns the same layout.
#[derive(Clone, Copy, Debug)]
pub struct FixedSelector(pub LayoutIndex);

impl LayoutSelector for FixedSelector {
    fn select(&self) -> LayoutIndex {
        self.0
    }
}
