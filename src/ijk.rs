//! Hex-grid coordinate algebra on the 3-axis IJK system, including the
//! aperture-7/aperture-3 resolution transforms and the planar quantizer.
//!
//! All operations are total over integer triples and allocate nothing.
//! Arithmetic saturates rather than wraps; callers feeding coordinates from
//! valid grid addresses never approach the saturation range.

use crate::constants::{M_RSIN60, M_SIN60};
use crate::types::{CoordIJK, Direction, Vec2d};

/// The unit IJK vectors for the 7 cell digits, indexed by digit value.
#[rustfmt::skip]
pub(crate) static UNIT_VECS: [CoordIJK; 7] = [
  CoordIJK { i: 0, j: 0, k: 0 }, // Center
  CoordIJK { i: 0, j: 0, k: 1 }, // KAxes
  CoordIJK { i: 0, j: 1, k: 0 }, // JAxes
  CoordIJK { i: 0, j: 1, k: 1 }, // JkAxes
  CoordIJK { i: 1, j: 0, k: 0 }, // IAxes
  CoordIJK { i: 1, j: 0, k: 1 }, // IkAxes
  CoordIJK { i: 1, j: 1, k: 0 }, // IjAxes
];

/// Rounds to the nearest integer, ties away from zero (C `lround`).
#[inline]
fn lround(val: f64) -> i32 {
  val.round() as i32
}

impl CoordIJK {
  /// Component-wise sum.
  #[inline]
  #[must_use]
  pub fn add(self, other: CoordIJK) -> CoordIJK {
    CoordIJK {
      i: self.i.saturating_add(other.i),
      j: self.j.saturating_add(other.j),
      k: self.k.saturating_add(other.k),
    }
  }

  /// Component-wise difference, `self - other`.
  #[inline]
  #[must_use]
  pub fn sub(self, other: CoordIJK) -> CoordIJK {
    CoordIJK {
      i: self.i.saturating_sub(other.i),
      j: self.j.saturating_sub(other.j),
      k: self.k.saturating_sub(other.k),
    }
  }

  /// Uniform scale by an integer factor.
  #[inline]
  #[must_use]
  pub fn scaled(self, factor: i32) -> CoordIJK {
    CoordIJK {
      i: self.i.saturating_mul(factor),
      j: self.j.saturating_mul(factor),
      k: self.k.saturating_mul(factor),
    }
  }

  /// The unique representative with all components non-negative and the
  /// minimum component zero.
  ///
  /// Negative components are first cleared by adding their magnitude to the
  /// other two axes, then the minimum of the three is subtracted from all.
  /// Idempotent.
  #[must_use]
  pub fn normalized(self) -> CoordIJK {
    let mut c = self;
    if c.i < 0 {
      c.j = c.j.saturating_sub(c.i);
      c.k = c.k.saturating_sub(c.i);
      c.i = 0;
    }
    if c.j < 0 {
      c.i = c.i.saturating_sub(c.j);
      c.k = c.k.saturating_sub(c.j);
      c.j = 0;
    }
    if c.k < 0 {
      c.i = c.i.saturating_sub(c.k);
      c.j = c.j.saturating_sub(c.k);
      c.k = 0;
    }

    let min = c.i.min(c.j).min(c.k);
    if min > 0 {
      c.i -= min;
      c.j -= min;
      c.k -= min;
    }
    c
  }

  /// Maps a unit vector (or the zero vector) to its digit after
  /// normalization; anything else maps to [`Direction::Invalid`].
  #[must_use]
  pub fn as_digit(self) -> Direction {
    let c = self.normalized();
    for (digit, unit) in UNIT_VECS.iter().enumerate() {
      if c == *unit {
        // digit is 0..=6, always convertible
        return Direction::try_from(digit as u8).unwrap_or(Direction::Invalid);
      }
    }
    Direction::Invalid
  }

  /// The normalized coordinate of the neighboring cell in the given digit
  /// direction. Center and Invalid leave the coordinate unchanged.
  #[must_use]
  pub fn neighbor(self, digit: Direction) -> CoordIJK {
    match digit {
      Direction::Center | Direction::Invalid => self,
      d => self.add(UNIT_VECS[d as usize]).normalized(),
    }
  }

  /// Grid distance to another coordinate: the maximum absolute component of
  /// the normalized difference.
  #[must_use]
  pub fn distance_to(self, other: CoordIJK) -> i32 {
    let diff = self.sub(other).normalized();
    diff.i.abs().max(diff.j.abs()).max(diff.k.abs())
  }

  /// Recombines the three axis components over a replacement basis, then
  /// normalizes. Shared by the rotations and the down-aperture transforms.
  #[inline]
  #[must_use]
  fn rebased(self, i_vec: CoordIJK, j_vec: CoordIJK, k_vec: CoordIJK) -> CoordIJK {
    i_vec
      .scaled(self.i)
      .add(j_vec.scaled(self.j))
      .add(k_vec.scaled(self.k))
      .normalized()
  }

  /// Rotates the coordinate 60 degrees counter-clockwise.
  #[must_use]
  pub fn rotated_60_ccw(self) -> CoordIJK {
    self.rebased(
      CoordIJK::new(1, 1, 0),
      CoordIJK::new(0, 1, 1),
      CoordIJK::new(1, 0, 1),
    )
  }

  /// Rotates the coordinate 60 degrees clockwise.
  #[must_use]
  pub fn rotated_60_cw(self) -> CoordIJK {
    self.rebased(
      CoordIJK::new(1, 0, 1),
      CoordIJK::new(1, 1, 0),
      CoordIJK::new(0, 1, 1),
    )
  }

  /// The indexing parent of this cell in a counter-clockwise aperture-7
  /// grid (Class III step).
  ///
  /// Converts to axial coordinates, applies the 1/7 inverse lattice matrix
  /// with round-to-nearest, and renormalizes.
  #[must_use]
  pub(crate) fn up_aperture7_ccw(self) -> CoordIJK {
    let i = self.i - self.k;
    let j = self.j - self.k;

    CoordIJK {
      i: lround((3 * i - j) as f64 / 7.0),
      j: lround((i + 2 * j) as f64 / 7.0),
      k: 0,
    }
    .normalized()
  }

  /// The indexing parent of this cell in a clockwise aperture-7 grid
  /// (Class II step).
  #[must_use]
  pub(crate) fn up_aperture7_cw(self) -> CoordIJK {
    let i = self.i - self.k;
    let j = self.j - self.k;

    CoordIJK {
      i: lround((2 * i + j) as f64 / 7.0),
      j: lround((3 * j - i) as f64 / 7.0),
      k: 0,
    }
    .normalized()
  }

  /// The center of this cell one aperture-7 counter-clockwise resolution
  /// finer. Exact; child placement is integral.
  #[must_use]
  pub(crate) fn down_aperture7_ccw(self) -> CoordIJK {
    self.rebased(
      CoordIJK::new(3, 0, 1),
      CoordIJK::new(1, 3, 0),
      CoordIJK::new(0, 1, 3),
    )
  }

  /// The center of this cell one aperture-7 clockwise resolution finer.
  #[must_use]
  pub(crate) fn down_aperture7_cw(self) -> CoordIJK {
    self.rebased(
      CoordIJK::new(3, 1, 0),
      CoordIJK::new(0, 3, 1),
      CoordIJK::new(1, 0, 3),
    )
  }

  /// The center of this cell one aperture-3 counter-clockwise resolution
  /// finer (substrate stepping).
  #[must_use]
  pub fn down_aperture3_ccw(self) -> CoordIJK {
    self.rebased(
      CoordIJK::new(2, 0, 1),
      CoordIJK::new(1, 2, 0),
      CoordIJK::new(0, 1, 2),
    )
  }

  /// The center of this cell one aperture-3 clockwise resolution finer.
  #[must_use]
  pub fn down_aperture3_cw(self) -> CoordIJK {
    self.rebased(
      CoordIJK::new(2, 1, 0),
      CoordIJK::new(0, 2, 1),
      CoordIJK::new(1, 0, 2),
    )
  }

  /// The planar Cartesian center point of this cell. Exact inverse of
  /// [`CoordIJK::from_hex2d`] on cell centers.
  #[must_use]
  pub(crate) fn to_hex2d(self) -> Vec2d {
    let i = (self.i - self.k) as f64;
    let j = (self.j - self.k) as f64;

    Vec2d {
      x: i - 0.5 * j,
      y: j * M_SIN60,
    }
  }

  /// Quantizes a planar Cartesian point into the containing hex cell
  /// (from DGGRID).
  ///
  /// Nearest-hex quantization: the skewed lattice coordinates are split
  /// into integer and fractional parts, and a 6-way case split on the
  /// fractional remainders picks the correct rounding. Simple rounding
  /// misclassifies points near cell boundaries. Negative-axis inputs are
  /// folded back after quantization.
  #[must_use]
  pub(crate) fn from_hex2d(v: &Vec2d) -> CoordIJK {
    let mut h = CoordIJK::new(0, 0, 0);

    let a1 = v.x.abs();
    let a2 = v.y.abs();

    // reverse conversion into the skewed lattice
    let x2 = a2 * M_RSIN60;
    let x1 = a1 + x2 / 2.0;

    let m1 = x1 as i32;
    let m2 = x2 as i32;

    let r1 = x1 - f64::from(m1);
    let r2 = x2 - f64::from(m2);

    if r1 < 0.5 {
      if r1 < 1.0 / 3.0 {
        h.i = m1;
        h.j = if r2 < (1.0 + r1) / 2.0 { m2 } else { m2 + 1 };
      } else {
        h.j = if r2 < (1.0 - r1) { m2 } else { m2 + 1 };
        h.i = if (1.0 - r1) <= r2 && r2 < (2.0 * r1) { m1 + 1 } else { m1 };
      }
    } else if r1 < 2.0 / 3.0 {
      h.j = if r2 < (1.0 - r1) { m2 } else { m2 + 1 };
      h.i = if (2.0 * r1 - 1.0) < r2 && r2 < (1.0 - r1) { m1 } else { m1 + 1 };
    } else {
      h.i = m1 + 1;
      h.j = if r2 < (r1 / 2.0) { m2 } else { m2 + 1 };
    }

    // fold across the axes if necessary
    if v.x < 0.0 {
      if (h.j % 2) == 0 {
        let axis_i = i64::from(h.j) / 2;
        let diff = i64::from(h.i) - axis_i;
        h.i = (i64::from(h.i) - 2 * diff) as i32;
      } else {
        let axis_i = (i64::from(h.j) + 1) / 2;
        let diff = i64::from(h.i) - axis_i;
        h.i = (i64::from(h.i) - (2 * diff + 1)) as i32;
      }
    }

    if v.y < 0.0 {
      h.i = (i64::from(h.i) - (2 * i64::from(h.j) + 1) / 2) as i32;
      h.j = -h.j;
    }

    h.normalized()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn normalize_is_idempotent() {
    let cases = [
      CoordIJK::new(0, 0, 0),
      CoordIJK::new(5, 3, 1),
      CoordIJK::new(-2, 4, 0),
      CoordIJK::new(-1, -1, -1),
      CoordIJK::new(7, 7, 7),
    ];
    for c in cases {
      let once = c.normalized();
      assert_eq!(once.normalized(), once, "normalize not idempotent for {c:?}");
      assert_eq!(once.i.min(once.j).min(once.k), 0);
      assert!(once.i >= 0 && once.j >= 0 && once.k >= 0);
    }
  }

  #[test]
  fn unit_vectors_round_trip_digits() {
    for d in 0u8..=6 {
      let dir = Direction::try_from(d).unwrap();
      assert_eq!(UNIT_VECS[d as usize].as_digit(), dir);
    }
    assert_eq!(CoordIJK::new(2, 0, 0).as_digit(), Direction::Invalid);
  }

  #[test]
  fn coordinate_rotation_six_times_is_identity() {
    for unit in &UNIT_VECS[1..] {
      let mut ccw = *unit;
      let mut cw = *unit;
      for _ in 0..6 {
        ccw = ccw.rotated_60_ccw();
        cw = cw.rotated_60_cw();
      }
      assert_eq!(ccw, *unit);
      assert_eq!(cw, *unit);
    }
  }

  #[test]
  fn coordinate_rotation_matches_digit_rotation() {
    for d in 1u8..=6 {
      let dir = Direction::try_from(d).unwrap();
      assert_eq!(UNIT_VECS[d as usize].rotated_60_ccw().as_digit(), dir.rotated_ccw());
      assert_eq!(UNIT_VECS[d as usize].rotated_60_cw().as_digit(), dir.rotated_cw());
    }
  }

  #[test]
  fn up_aperture_inverts_down_aperture() {
    // Stepping down to the center child and back up must be the identity,
    // in both chiralities.
    let cases = [
      CoordIJK::new(0, 0, 0),
      CoordIJK::new(1, 0, 0),
      CoordIJK::new(4, 2, 0),
      CoordIJK::new(0, 3, 5),
    ];
    for c in cases {
      let c = c.normalized();
      assert_eq!(c.down_aperture7_ccw().up_aperture7_ccw(), c);
      assert_eq!(c.down_aperture7_cw().up_aperture7_cw(), c);
    }
  }

  #[test]
  fn down_aperture3_chiralities_mirror_each_other() {
    let origin = CoordIJK::new(0, 0, 0);
    assert_eq!(origin.down_aperture3_ccw(), origin);
    assert_eq!(origin.down_aperture3_cw(), origin);

    let i = CoordIJK::new(1, 0, 0);
    assert_eq!(i.down_aperture3_ccw(), CoordIJK::new(2, 0, 1));
    assert_eq!(i.down_aperture3_cw(), CoordIJK::new(2, 1, 0));
    assert_eq!(i.down_aperture3_ccw().distance_to(origin), 2);
  }

  #[test]
  fn neighbor_stepping_matches_unit_vectors() {
    let origin = CoordIJK::new(0, 0, 0);
    for d in 1u8..=6 {
      let dir = Direction::try_from(d).unwrap();
      let n = origin.neighbor(dir);
      assert_eq!(n, UNIT_VECS[d as usize].normalized());
      assert_eq!(origin.distance_to(n), 1);
    }
    assert_eq!(origin.neighbor(Direction::Center), origin);
  }

  #[test]
  fn grid_distance_symmetry() {
    let a = CoordIJK::new(3, 1, 0);
    let b = CoordIJK::new(0, 2, 4);
    assert_eq!(a.distance_to(b), b.distance_to(a));
    assert_eq!(a.distance_to(a), 0);
  }

  #[test]
  fn hex2d_round_trips_cell_centers() {
    let cases = [
      CoordIJK::new(0, 0, 0),
      CoordIJK::new(1, 0, 0),
      CoordIJK::new(0, 1, 0),
      CoordIJK::new(0, 0, 1),
      CoordIJK::new(3, 2, 0),
      CoordIJK::new(0, 5, 2),
    ];
    for c in cases {
      let c = c.normalized();
      let v = c.to_hex2d();
      assert_eq!(CoordIJK::from_hex2d(&v), c, "round trip failed for {c:?}");
    }
  }

  #[test]
  fn quantizer_handles_boundary_regions() {
    // Points clearly inside neighboring cells of the origin.
    let east = CoordIJK::from_hex2d(&Vec2d { x: 1.0, y: 0.0 });
    assert_eq!(east, UNIT_VECS[Direction::IAxes as usize].normalized());

    let near_origin = CoordIJK::from_hex2d(&Vec2d { x: 0.2, y: 0.1 });
    assert_eq!(near_origin, CoordIJK::new(0, 0, 0));

    let negative = CoordIJK::from_hex2d(&Vec2d { x: -1.0, y: 0.0 });
    assert_eq!(negative.distance_to(CoordIJK::new(0, 0, 0)), 1);
  }
}
