//! Sowing path computation.

use smallvec::SmallVec;

use crate::core::{PitId, PlayerId};

/// Ordered pit ids that receive one seed each.
///
/// Inline up to one full lap of the board.
pub type SowingPath = SmallVec<[PitId; 13]>;

/// Compute where `seeds` seeds picked up from `start` will land.
///
/// Advances one slot at a time in id order, wrapping 13 -> 0, and skips
/// the opponent's store entirely: it is never a stop and never counted.
/// The path has exactly `seeds` entries; the last entry is the landing pit.
///
/// ```
/// use mancala_engine::core::{PitId, PlayerId};
/// use mancala_engine::rules::sowing_path;
///
/// let path = sowing_path(PitId::new(2).unwrap(), PlayerId::FIRST, 4);
/// let ids: Vec<u8> = path.iter().map(|p| p.raw()).collect();
/// assert_eq!(ids, vec![3, 4, 5, 6]);
/// ```
#[must_use]
pub fn sowing_path(start: PitId, mover: PlayerId, seeds: u32) -> SowingPath {
    let skipped = mover.opponent().store();
    let mut path = SowingPath::with_capacity(seeds as usize);
    let mut current = start;

    for _ in 0..seeds {
        current = current.next();
        if current == skipped {
            current = current.next();
        }
        path.push(current);
    }

    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(path: &SowingPath) -> Vec<u8> {
        path.iter().map(|p| p.raw()).collect()
    }

    #[test]
    fn test_path_into_own_store() {
        let path = sowing_path(PitId::from_raw(2), PlayerId::FIRST, 4);
        assert_eq!(ids(&path), vec![3, 4, 5, 6]);
    }

    #[test]
    fn test_first_player_skips_far_store() {
        let path = sowing_path(PitId::from_raw(5), PlayerId::FIRST, 9);
        assert_eq!(ids(&path), vec![6, 7, 8, 9, 10, 11, 12, 0, 1]);
    }

    #[test]
    fn test_second_player_skips_near_store() {
        let path = sowing_path(PitId::from_raw(12), PlayerId::SECOND, 8);
        assert_eq!(ids(&path), vec![13, 0, 1, 2, 3, 4, 5, 7]);
    }

    #[test]
    fn test_full_lap_returns_to_start() {
        // 13 seeds visit every other non-skipped slot and end in the start pit
        let path = sowing_path(PitId::from_raw(4), PlayerId::FIRST, 13);
        assert_eq!(path.len(), 13);
        assert_eq!(path.last(), Some(&PitId::from_raw(4)));
        assert!(!path.contains(&PitId::from_raw(13)));
    }

    #[test]
    fn test_zero_seeds_is_empty() {
        assert!(sowing_path(PitId::from_raw(0), PlayerId::FIRST, 0).is_empty());
    }
}
