//! Vector primitives and small integer helpers.

use crate::types::{LatLng, Vec2d, Vec3d};

impl Vec2d {
  /// Magnitude of the vector.
  #[inline]
  #[must_use]
  pub fn magnitude(&self) -> f64 {
    (self.x * self.x + self.y * self.y).sqrt()
  }

  /// Whether two vectors are equal to within `f64::EPSILON` per component.
  #[inline]
  #[must_use]
  pub fn almost_equals(&self, other: &Vec2d) -> bool {
    (self.x - other.x).abs() < f64::EPSILON && (self.y - other.y).abs() < f64::EPSILON
  }
}

/// Finds the intersection of the lines `p0`-`p1` and `p2`-`p3`.
///
/// Assumes the lines are not parallel and do not intersect at a shared
/// endpoint; callers are responsible for that precondition.
#[inline]
#[must_use]
pub fn line_intersection(p0: &Vec2d, p1: &Vec2d, p2: &Vec2d, p3: &Vec2d) -> Vec2d {
  let s1x = p1.x - p0.x;
  let s1y = p1.y - p0.y;
  let s2x = p3.x - p2.x;
  let s2y = p3.y - p2.y;

  let t = (s2x * (p0.y - p2.y) - s2y * (p0.x - p2.x)) / (-s2x * s1y + s1x * s2y);

  Vec2d {
    x: p0.x + t * s1x,
    y: p0.y + t * s1y,
  }
}

impl Vec3d {
  /// Squared Euclidean distance to another point.
  #[inline]
  #[must_use]
  pub fn square_distance(&self, other: &Vec3d) -> f64 {
    let dx = self.x - other.x;
    let dy = self.y - other.y;
    let dz = self.z - other.z;
    dx * dx + dy * dy + dz * dz
  }

  /// The unit-sphere point under a geographic coordinate.
  #[inline]
  #[must_use]
  pub(crate) fn from_lat_lng(geo: &LatLng) -> Vec3d {
    let r = geo.lat.cos();
    Vec3d {
      x: geo.lng.cos() * r,
      y: geo.lng.sin() * r,
      z: geo.lat.sin(),
    }
  }
}

/// Integer exponentiation by squaring, wrapping on overflow to match the
/// reference implementation's unchecked arithmetic.
#[inline]
pub(crate) fn ipow(mut base: i64, mut exp: i64) -> i64 {
  if exp < 0 {
    return match base {
      1 => 1,
      -1 if exp % 2 == 0 => 1,
      -1 => -1,
      _ => 0,
    };
  }

  let mut result: i64 = 1;
  loop {
    if exp & 1 != 0 {
      result = result.wrapping_mul(base);
    }
    exp >>= 1;
    if exp == 0 {
      break;
    }
    base = base.wrapping_mul(base);
  }
  result
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::constants::M_PI_2;

  #[test]
  fn vec2d_magnitude() {
    let v = Vec2d { x: 3.0, y: 4.0 };
    assert!((v.magnitude() - 5.0).abs() < f64::EPSILON);
  }

  #[test]
  fn vec2d_almost_equals() {
    let v1 = Vec2d { x: 3.0, y: 4.0 };
    let v2 = Vec2d {
      x: 3.0 + f64::EPSILON / 2.0,
      y: 4.0 - f64::EPSILON / 2.0,
    };
    let v3 = Vec2d { x: 3.5, y: 4.0 };
    assert!(v1.almost_equals(&v2));
    assert!(!v1.almost_equals(&v3));
  }

  #[test]
  fn lines_intersect_at_expected_point() {
    let p0 = Vec2d { x: 2.0, y: 2.0 };
    let p1 = Vec2d { x: 6.0, y: 6.0 };
    let p2 = Vec2d { x: 0.0, y: 4.0 };
    let p3 = Vec2d { x: 10.0, y: 4.0 };
    let inter = line_intersection(&p0, &p1, &p2, &p3);
    assert!((inter.x - 4.0).abs() < f64::EPSILON);
    assert!((inter.y - 4.0).abs() < f64::EPSILON);
  }

  #[test]
  fn vec3d_square_distance() {
    let origin = Vec3d::default();
    let v = Vec3d { x: 1.0, y: 1.0, z: 2.0 };
    assert!((origin.square_distance(&v) - 6.0).abs() < f64::EPSILON);
  }

  #[test]
  fn lat_lng_to_unit_sphere() {
    let equator = Vec3d::from_lat_lng(&LatLng { lat: 0.0, lng: 0.0 });
    assert!((equator.x - 1.0).abs() < f64::EPSILON);
    assert!(equator.y.abs() < f64::EPSILON);
    assert!(equator.z.abs() < f64::EPSILON);

    let north_pole = Vec3d::from_lat_lng(&LatLng { lat: M_PI_2, lng: 0.0 });
    assert!((north_pole.z - 1.0).abs() < f64::EPSILON);
    assert!((equator.square_distance(&north_pole) - 2.0).abs() < 1e-15);
  }

  #[test]
  fn ipow_powers_of_seven() {
    assert_eq!(ipow(7, 0), 1);
    assert_eq!(ipow(7, 2), 49);
    assert_eq!(ipow(7, 15), 4_747_561_509_943);
    assert_eq!(ipow(-2, 3), -8);
    assert_eq!(ipow(2, -1), 0);
  }
}
