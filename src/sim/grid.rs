//! Integer grid geometry
//!
//! Bounds tests, toroidal wrapping and distance checks for entities that live
//! on whole-cell positions.

use glam::IVec2;
use rand::Rng;

/// True if `pos` lies inside a `size` × `size` grid
#[inline]
pub fn in_bounds(pos: IVec2, size: i32) -> bool {
    pos.x >= 0 && pos.x < size && pos.y >= 0 && pos.y < size
}

/// Wrap `pos` onto a `size` × `size` torus
#[inline]
pub fn wrap(pos: IVec2, size: i32) -> IVec2 {
    IVec2::new(pos.x.rem_euclid(size), pos.y.rem_euclid(size))
}

/// Offset from `from` to `to`, taking the wrap-around path on any axis where
/// the direct one is longer than half the grid
pub fn toroidal_delta(from: IVec2, to: IVec2, size: i32) -> IVec2 {
    let half = size / 2;
    let fold = |d: i32| {
        if d.abs() > half {
            -d.signum() * (size - d.abs())
        } else {
            d
        }
    };
    let d = to - from;
    IVec2::new(fold(d.x), fold(d.y))
}

/// Squared Euclidean distance between two cells
#[inline]
pub fn distance_squared(a: IVec2, b: IVec2) -> i32 {
    (a - b).length_squared()
}

/// True if `a` and `b` are strictly closer than `radius`
#[inline]
pub fn within(a: IVec2, b: IVec2, radius: i32) -> bool {
    distance_squared(a, b) < radius * radius
}

/// Random step with each component in {-1, 0, 1} (may be zero)
pub fn random_step<R: Rng + ?Sized>(rng: &mut R) -> IVec2 {
    IVec2::new(rng.random_range(-1..=1), rng.random_range(-1..=1))
}

/// Random non-zero step; (0, 0) becomes (1, 0)
pub fn random_direction<R: Rng + ?Sized>(rng: &mut R) -> IVec2 {
    let step = random_step(rng);
    if step == IVec2::ZERO { IVec2::X } else { step }
}
