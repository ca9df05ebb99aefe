use std::fmt;
use std::ops::{Add, Mul};

/// Coordinate is an immutable point on the unbounded lattice.
/// Equality, hashing and ordering are structural.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    x: i32,
    y: i32,
}

/// The 8 compass offsets, in the order neighbors are visited
pub const NEIGHBOR_OFFSETS: [Coordinate; 8] = [
    Coordinate::new(1, 0),
    Coordinate::new(1, 1),
    Coordinate::new(0, 1),
    Coordinate::new(-1, 1),
    Coordinate::new(-1, 0),
    Coordinate::new(-1, -1),
    Coordinate::new(0, -1),
    Coordinate::new(1, -1),
];

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn x(self) -> i32 {
        self.x
    }

    pub const fn y(self) -> i32 {
        self.y
    }

    /// Componentwise sum
    pub const fn add(self, other: Coordinate) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    /// Componentwise product, used to map lattice points onto pixels
    pub const fn scale(self, factor: i32) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    /// Componentwise sum, `None` if either axis leaves the `i32` range
    pub const fn checked_add(self, other: Coordinate) -> Option<Coordinate> {
        match (self.x.checked_add(other.x), self.y.checked_add(other.y)) {
            (Some(x), Some(y)) => Some(Self::new(x, y)),
            _ => None,
        }
    }

    /// The surrounding coordinates in `NEIGHBOR_OFFSETS` order. Offsets that
    /// would step past the edge of the `i32` range are skipped, so a point on
    /// the edge has fewer than 8 neighbors.
    pub fn neighbors(self) -> impl Iterator<Item = Coordinate> {
        NEIGHBOR_OFFSETS
            .into_iter()
            .filter_map(move |offset| self.checked_add(offset))
    }
}

impl Add for Coordinate {
    type Output = Coordinate;

    fn add(self, other: Coordinate) -> Coordinate {
        Coordinate::add(self, other)
    }
}

impl Mul<i32> for Coordinate {
    type Output = Coordinate;

    fn mul(self, factor: i32) -> Coordinate {
        self.scale(factor)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_add_and_scale() {
        let a = Coordinate::new(2, -3);
        let b = Coordinate::new(-5, 7);
        assert_eq!(a + b, Coordinate::new(-3, 4));
        assert_eq!(a * 5, Coordinate::new(10, -15));
        assert_eq!(a.scale(0), Coordinate::default());
    }

    #[test]
    fn test_structural_equality() {
        let mut set = HashSet::new();
        set.insert(Coordinate::new(1, 1));
        set.insert(Coordinate::from((1, 1)));
        assert_eq!(set.len(), 1);
        assert_ne!(Coordinate::new(1, 2), Coordinate::new(2, 1));
    }

    #[test]
    fn test_neighbors_are_distinct_and_adjacent() {
        let origin = Coordinate::new(4, -4);
        let around: Vec<_> = origin.neighbors().collect();
        let unique: HashSet<_> = around.iter().copied().collect();
        assert_eq!(unique.len(), 8);
        assert!(!unique.contains(&origin));
        for n in &around {
            assert!((n.x() - origin.x()).abs() <= 1);
            assert!((n.y() - origin.y()).abs() <= 1);
        }
        assert_eq!(around[0], Coordinate::new(5, -4));
        assert_eq!(around[7], Coordinate::new(5, -5));
    }

    #[test]
    fn test_neighbors_stop_at_range_edge() {
        let edge = Coordinate::new(i32::MAX, 0);
        let around: Vec<_> = edge.neighbors().collect();
        assert_eq!(around.len(), 5);
        assert!(around.iter().all(|n| n.x() >= i32::MAX - 1));

        let corner = Coordinate::new(i32::MIN, i32::MIN);
        assert_eq!(corner.neighbors().count(), 3);
        assert_eq!(corner.checked_add(Coordinate::new(-1, 0)), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Coordinate::new(-1, 3).to_string(), "(-1, 3)");
    }
}
