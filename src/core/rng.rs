//! Dice randomness.
//!
//! ## RandomSource
//!
//! The controller never touches an RNG directly. It asks a `RandomSource` to
//! roll `count` dice drawn uniformly, with replacement, from a face set.
//! Tests plug in loaded dice through the same trait.
//!
//! ## GameRng
//!
//! - **Deterministic**: One seed replays a whole match
//! - **Forkable**: Derive independent streams, e.g. one per simulated match
//! - **Checkpointable**: Capture the stream position and resume from it later
//!
//! ```
//! use cosmic_wimpout::core::{Die, GameRng, RandomSource};
//!
//! let mut rng = GameRng::new(42);
//! let roll = rng.roll(Die::White.faces(), 4);
//! assert_eq!(roll.len(), 4);
//!
//! let mut again = GameRng::new(42);
//! assert_eq!(roll, again.roll(Die::White.faces(), 4));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::face::Face;

/// Faces produced by one roll.
pub type Roll = SmallVec<[Face; 5]>;

/// Source of dice rolls.
pub trait RandomSource {
    /// Roll `count` dice, each showing a uniformly drawn face from `faces`.
    ///
    /// `faces` is never empty.
    fn roll(&mut self, faces: &[Face], count: usize) -> Roll;
}

/// Seeded ChaCha8 dice roller.
#[derive(Clone, Debug)]
pub struct GameRng {
    stream: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a roller from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            stream: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed the roller was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Split off a roller with its own stream.
    ///
    /// The child's seed is drawn from this stream, so forking twice from the
    /// same point yields the same child.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        Self::new(self.stream.gen())
    }

    /// Capture the current stream position.
    #[must_use]
    pub fn checkpoint(&self) -> RngCheckpoint {
        RngCheckpoint {
            seed: self.seed,
            word_pos: self.stream.get_word_pos(),
        }
    }

    /// Resume a roller from a checkpoint.
    #[must_use]
    pub fn restore(checkpoint: &RngCheckpoint) -> Self {
        let mut rng = Self::new(checkpoint.seed);
        rng.stream.set_word_pos(checkpoint.word_pos);
        rng
    }
}

impl RandomSource for GameRng {
    fn roll(&mut self, faces: &[Face], count: usize) -> Roll {
        (0..count)
            .map(|_| faces[self.stream.gen_range(0..faces.len())])
            .collect()
    }
}

/// Serializable position of a `GameRng` stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngCheckpoint {
    pub seed: u64,
    /// ChaCha8 word position.
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::face::Die;

    fn white_rolls(rng: &mut GameRng, n: usize) -> Vec<Roll> {
        (0..n).map(|_| rng.roll(Die::White.faces(), 4)).collect()
    }

    #[test]
    fn test_same_seed_same_rolls() {
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);
        assert_eq!(white_rolls(&mut a, 50), white_rolls(&mut b, 50));
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut a = GameRng::new(1);
        let mut b = GameRng::new(2);
        assert_ne!(white_rolls(&mut a, 20), white_rolls(&mut b, 20));
    }

    #[test]
    fn test_fork_is_independent_but_reproducible() {
        let mut parent = GameRng::new(42);
        let mut child = parent.fork();
        assert_ne!(child.seed(), parent.seed());
        assert_ne!(white_rolls(&mut parent, 20), white_rolls(&mut child, 20));

        let mut a = GameRng::new(9);
        let mut b = GameRng::new(9);
        assert_eq!(a.fork().seed(), b.fork().seed());
    }

    #[test]
    fn test_roll_stays_within_face_set() {
        let mut rng = GameRng::new(7);
        let faces = Die::White.rollable_faces(Some(Face::Ten));

        for _ in 0..200 {
            let roll = rng.roll(&faces, 4);
            assert_eq!(roll.len(), 4);
            assert!(roll.iter().all(|face| faces.contains(face)));
        }
    }

    #[test]
    fn test_roll_covers_every_face() {
        let mut rng = GameRng::new(3);
        let roll = rng.roll(Die::Black.faces(), 600);

        for face in Die::Black.faces() {
            assert!(roll.contains(face), "face {face} never rolled");
        }
    }

    #[test]
    fn test_checkpoint_resumes_stream() {
        let mut rng = GameRng::new(42);
        white_rolls(&mut rng, 100);

        let checkpoint = rng.checkpoint();
        let expected = white_rolls(&mut rng, 10);

        let mut resumed = GameRng::restore(&checkpoint);
        assert_eq!(white_rolls(&mut resumed, 10), expected);
    }

    #[test]
    fn test_checkpoint_serde() {
        let mut rng = GameRng::new(5);
        rng.roll(Die::Black.faces(), 3);
        let checkpoint = rng.checkpoint();

        let json = serde_json::to_string(&checkpoint).unwrap();
        let deserialized: RngCheckpoint = serde_json::from_str(&json).unwrap();

        assert_eq!(checkpoint, deserialized);
    }
}
