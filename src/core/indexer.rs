//! Palette slot selection strategies.
//!
//! An [`IndexerKind`] maps a palette size, the position of an element on its
//! axis and the element's raw bytes to a slot in `[0, palette_size)`.
//!
//! - **Sequential**: cycles through the palette by position
//! - **Hash**: DJB2 hash of the bytes, so equal names always get equal styles
//! - **Random**: uniform draw from the generator passed in by the caller

use crate::core::error::{RainbowPathError, Result};
use rand::{rngs::OsRng, rngs::StdRng, Rng, RngCore, SeedableRng};
use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

const DJB2_SEED: u64 = 5381;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IndexerKind {
    #[default]
    Sequential,
    Hash,
    Random,
}

impl IndexerKind {
    /// Pick a palette slot. `palette_size` must be non-zero.
    pub fn select<R: RngCore>(
        self,
        palette_size: usize,
        position: usize,
        bytes: &[u8],
        rng: &mut R,
    ) -> usize {
        match self {
            Self::Sequential => select_sequential(palette_size, position),
            Self::Hash => select_hash(palette_size, bytes),
            Self::Random => rng.gen_range(0..palette_size),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Hash => "hash",
            Self::Random => "random",
        }
    }
}

impl FromStr for IndexerKind {
    type Err = RainbowPathError;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "sequential" => Ok(Self::Sequential),
            "hash" => Ok(Self::Hash),
            "random" => Ok(Self::Random),
            other => Err(RainbowPathError::unknown_indexer(other)),
        }
    }
}

impl fmt::Display for IndexerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn select_sequential(palette_size: usize, position: usize) -> usize {
    position % palette_size
}

pub fn select_hash(palette_size: usize, bytes: &[u8]) -> usize {
    (djb2(bytes) % palette_size as u64) as usize
}

pub fn djb2(bytes: &[u8]) -> u64 {
    bytes.iter().fold(DJB2_SEED, |hash, &byte| {
        hash.wrapping_mul(33).wrapping_add(u64::from(byte))
    })
}

/// Generator for the random indexer, seeded once per process.
///
/// Uses the OS entropy source and falls back to the wall clock.
pub fn seeded_rng() -> StdRng {
    match StdRng::from_rng(OsRng) {
        Ok(rng) => rng,
        Err(e) => {
            log::warn!("Entropy source unavailable, seeding from clock: {e}");
            let seed = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_secs())
                .unwrap_or_default();
            StdRng::seed_from_u64(seed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_sequential_is_periodic() {
        for size in 1..8 {
            for position in 0..32 {
                assert_eq!(
                    select_sequential(size, position),
                    select_sequential(size, position + size)
                );
            }
        }
        assert_eq!(select_sequential(2, 0), 0);
        assert_eq!(select_sequential(2, 1), 1);
        assert_eq!(select_sequential(2, 2), 0);
    }

    #[test]
    fn test_sequential_ignores_text() {
        let mut rng = test_rng();
        let a = IndexerKind::Sequential.select(3, 4, b"home", &mut rng);
        let b = IndexerKind::Sequential.select(3, 4, b"other", &mut rng);
        assert_eq!(a, 1);
        assert_eq!(a, b);
    }

    #[test]
    fn test_djb2_known_values() {
        assert_eq!(djb2(b""), 5381);
        assert_eq!(djb2(b"a"), 5381 * 33 + 97);
        assert_eq!(djb2(b"/"), 5381 * 33 + 47);
    }

    #[test]
    fn test_hash_is_deterministic_and_in_range() {
        let mut rng = test_rng();
        for size in 1..10 {
            for word in [&b"home"[..], &b"alice"[..], &b"docs"[..], &b""[..], &b"\xff\xfe"[..]] {
                let first = IndexerKind::Hash.select(size, 0, word, &mut rng);
                let second = IndexerKind::Hash.select(size, 99, word, &mut rng);
                assert_eq!(first, second);
                assert!(first < size);
            }
        }
    }

    #[test]
    fn test_random_is_in_range() {
        let mut rng = test_rng();
        for size in 1..10 {
            for position in 0..50 {
                assert!(IndexerKind::Random.select(size, position, b"x", &mut rng) < size);
            }
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("sequential".parse::<IndexerKind>().ok(), Some(IndexerKind::Sequential));
        assert_eq!("hash".parse::<IndexerKind>().ok(), Some(IndexerKind::Hash));
        assert_eq!("random".parse::<IndexerKind>().ok(), Some(IndexerKind::Random));
        let err = "rainbow".parse::<IndexerKind>().unwrap_err();
        assert!(err.to_string().contains("rainbow"));
    }

    #[test]
    fn test_display_round_trips() {
        for kind in [IndexerKind::Sequential, IndexerKind::Hash, IndexerKind::Random] {
            assert_eq!(kind.to_string().parse::<IndexerKind>().ok(), Some(kind));
        }
    }
}
