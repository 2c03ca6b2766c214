use crate::error::{Result, ShowroomError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

/// Steps `index` one place in `direction`, wrapping at both ends.
///
/// An out-of-range `index` is a caller bug; it is asserted in debug builds
/// and folded back into range otherwise.
pub fn advance(direction: Direction, index: usize, len: usize) -> Result<usize> {
    if len == 0 {
        return Err(ShowroomError::EmptyCatalog);
    }
    debug_assert!(index < len, "product index {} out of range for {}", index, len);

    let index = index % len;
    Ok(match direction {
        Direction::Next => (index + 1) % len,
        Direction::Prev => (index + len - 1) % len,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_wraps_at_both_ends() {
        assert_eq!(advance(Direction::Prev, 0, 4).unwrap(), 3);
        assert_eq!(advance(Direction::Next, 3, 4).unwrap(), 0);
        assert_eq!(advance(Direction::Next, 1, 4).unwrap(), 2);
    }

    #[test]
    fn test_single_product_is_a_fixed_point() {
        assert_eq!(advance(Direction::Next, 0, 1).unwrap(), 0);
        assert_eq!(advance(Direction::Prev, 0, 1).unwrap(), 0);
    }

    #[test]
    fn test_empty_catalog_is_an_error() {
        assert!(matches!(
            advance(Direction::Next, 0, 0),
            Err(ShowroomError::EmptyCatalog)
        ));
    }

    #[test]
    fn test_n_steps_return_to_start() {
        let mut rng = rand::rng();
        for _ in 0..200 {
            let len = rng.random_range(1..=64);
            let start = rng.random_range(0..len);
            for direction in [Direction::Next, Direction::Prev] {
                let mut index = start;
                for _ in 0..len {
                    index = advance(direction, index, len).unwrap();
                }
                assert_eq!(index, start, "len {} direction {:?}", len, direction);
            }
        }
    }

    #[test]
    fn test_next_then_prev_is_identity() {
        let mut rng = rand::rng();
        for _ in 0..200 {
            let len = rng.random_range(1..=64);
            let start = rng.random_range(0..len);
            let forward = advance(Direction::Next, start, len).unwrap();
            assert_eq!(advance(Direction::Prev, forward, len).unwrap(), start);
        }
    }
}
