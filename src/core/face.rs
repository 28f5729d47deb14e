//! Die faces and the two die variants.
//!
//! ## Face
//!
//! Seven symbols appear across the dice: the numbers 2, 3, 4, 5, 6, 10 and
//! the sun. Faces are plain `Copy` values with a stable ordering used for
//! tallying and display.
//!
//! ## Die
//!
//! Each die has six faces. White dice carry 2-6 and 10; the black die swaps
//! the 3 for a sun.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// One symbol on a die.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Face {
    Two,
    Three,
    Four,
    Five,
    Six,
    Ten,
    Sun,
}

impl Face {
    /// Number of distinct faces.
    pub const COUNT: usize = 7;

    /// Every face, in tally order.
    pub const ALL: [Face; Face::COUNT] = [
        Face::Two,
        Face::Three,
        Face::Four,
        Face::Five,
        Face::Six,
        Face::Ten,
        Face::Sun,
    ];

    /// Dense index into `Face::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Symbol printed on the die.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Face::Two => "2",
            Face::Three => "3",
            Face::Four => "4",
            Face::Five => "5",
            Face::Six => "6",
            Face::Ten => "10",
            Face::Sun => "*",
        }
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Faces available to a roll after exclusions.
pub type FaceSet = SmallVec<[Face; 6]>;

/// The two die variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    /// Plain die: 2, 3, 4, 5, 6, 10.
    White,
    /// Wild die: 2, sun, 4, 5, 6, 10.
    Black,
}

const WHITE_FACES: [Face; 6] = [Face::Two, Face::Three, Face::Four, Face::Five, Face::Six, Face::Ten];
const BLACK_FACES: [Face; 6] = [Face::Two, Face::Sun, Face::Four, Face::Five, Face::Six, Face::Ten];

impl Die {
    /// The die's six faces.
    #[must_use]
    pub const fn faces(self) -> &'static [Face; 6] {
        match self {
            Die::White => &WHITE_FACES,
            Die::Black => &BLACK_FACES,
        }
    }

    /// Check whether this die carries `face`.
    #[must_use]
    pub fn has_face(self, face: Face) -> bool {
        self.faces().contains(&face)
    }

    /// Faces that may come up on a roll, with `excluded` removed.
    ///
    /// Never empty: a die has six distinct faces and at most one is excluded.
    #[must_use]
    pub fn rollable_faces(self, excluded: Option<Face>) -> FaceSet {
        self.faces()
            .iter()
            .copied()
            .filter(|&face| Some(face) != excluded)
            .collect()
    }
}
