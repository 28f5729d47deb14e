//! Seats and per-seat storage.
//!
//! ## PlayerId
//!
//! 0-based seat number. A match has at most 255 seats.
//!
//! ## PlayerMap
//!
//! One value per seat, indexed by `PlayerId`. Used for the players themselves
//! and for per-seat choice providers.
//!
//! ## Player
//!
//! Name, banked score and whether the player is still in the match.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(seat: u8) -> Self {
        Self(seat)
    }

    /// Seat as a `usize` index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One value per seat.
///
/// ```
/// use cosmic_wimpout::core::{PlayerId, PlayerMap};
///
/// let mut banked: PlayerMap<u32> = PlayerMap::new(3, |_| 0);
/// banked[PlayerId::new(1)] += 35;
/// assert_eq!(banked[PlayerId::new(1)], 35);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    seats: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Fill `seats` slots by calling `make` for each seat in order.
    ///
    /// # Panics
    ///
    /// If `seats` is 0 or more than 255.
    pub fn new(seats: usize, make: impl FnMut(PlayerId) -> T) -> Self {
        assert!(seats <= usize::from(u8::MAX), "at most 255 seats");
        Self::from_vec((0..=u8::MAX).take(seats).map(PlayerId).map(make).collect())
    }

    /// Wrap one value per seat, in seat order.
    ///
    /// # Panics
    ///
    /// If `seats` is empty or holds more than 255 values.
    pub fn from_vec(seats: Vec<T>) -> Self {
        assert!(!seats.is_empty(), "a match needs at least one seat");
        assert!(seats.len() <= usize::from(u8::MAX), "at most 255 seats");
        Self { seats }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.seats.len()
    }

    /// `(seat, value)` pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        (0..=u8::MAX).map(PlayerId).zip(&self.seats)
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &T {
        &self.seats[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.seats[player.index()]
    }
}

/// A participant in a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    /// Banked points across turns.
    pub score: u32,
    /// False once the player rolled five tens.
    pub alive: bool,
}

impl Player {
    /// Create a player with no points.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
            alive: true,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
