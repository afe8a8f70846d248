use serde::{Deserialize, Serialize};

/// Cube coordinate on the hex grid, invariant `q + r + s = 0`.
///
/// `q` and `r` are the independent axial components; `s` is carried
/// explicitly because input data and cube-distance math both use it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub q: i32,
    pub r: i32,
    pub s: i32,
}

impl Coord {
    /// Construct from the two axial components, deriving `s`.
    pub fn axial(q: i32, r: i32) -> Self {
        Self { q, r, s: -q - r }
    }

    pub fn origin() -> Self {
        Self::axial(0, 0)
    }

    /// Whether the cube invariant holds.
    pub fn is_valid(&self) -> bool {
        self.q + self.r + self.s == 0
    }

    /// Cube distance from the origin: max(|q|, |r|, |s|).
    pub fn ring_distance(&self) -> u32 {
        self.q
            .unsigned_abs()
            .max(self.r.unsigned_abs())
            .max(self.s.unsigned_abs())
    }

    /// All coordinates of the hex disk with the given radius, in row order
    /// (ascending `q`, then ascending `r`). Radius 0 yields just the origin.
    pub fn disk(radius: u32) -> impl Iterator<Item = Coord> {
        let rad = radius as i32;
        (-rad..=rad).flat_map(move |q| {
            let lo = (-rad).max(-q - rad);
            let hi = rad.min(-q + rad);
            (lo..=hi).map(move |r| Coord::axial(q, r))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axial_derives_s() {
        let c = Coord::axial(2, -1);
        assert_eq!(c.s, -1);
        assert!(c.is_valid());
    }

    #[test]
    fn ring_distance_from_components() {
        assert_eq!(Coord::origin().ring_distance(), 0);
        assert_eq!(Coord::axial(1, 0).ring_distance(), 1);
        assert_eq!(Coord::axial(2, -1).ring_distance(), 2);
        assert_eq!(Coord::axial(-3, 3).ring_distance(), 3);
    }

    #[test]
    fn disk_sizes() {
        // |disk(R)| = 3R(R+1) + 1
        assert_eq!(Coord::disk(0).count(), 1);
        assert_eq!(Coord::disk(1).count(), 7);
        assert_eq!(Coord::disk(2).count(), 19);
        assert_eq!(Coord::disk(10).count(), 331);
    }

    #[test]
    fn disk_members_are_valid_and_in_range() {
        for c in Coord::disk(3) {
            assert!(c.is_valid());
            assert!(c.ring_distance() <= 3);
        }
    }

    #[test]
    fn disk_contains_origin_exactly_once() {
        let origins = Coord::disk(4).filter(|c| *c == Coord::origin()).count();
        assert_eq!(origins, 1);
    }
}
