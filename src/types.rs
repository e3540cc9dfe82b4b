//! Core value types shared across the crate.
//!
//! Every type here is a plain `Copy` value; transforms build new values
//! rather than mutating shared state.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::error::GridError;

/// A packed 64-bit cell identifier.
///
/// The bit layout (high to low: 1 reserved bit, 4 mode bits, 3 reserved bits,
/// 4 resolution bits, 7 base cell bits, fifteen 3-bit digits) is a
/// compatibility contract with the H3 reference numbering and must be
/// reproduced bit-for-bit.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CellIndex(pub u64);

impl CellIndex {
  /// The invalid sentinel index. Marks failed encodes and pentagon child
  /// gaps.
  pub const INVALID: CellIndex = CellIndex(0);
}

/// A point on the sphere, latitude and longitude in radians.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LatLng {
  /// Latitude in radians.
  pub lat: f64,
  /// Longitude in radians.
  pub lng: f64,
}

impl LatLng {
  /// Builds a point from latitude and longitude given in decimal degrees,
  /// constrained to [-pi/2, pi/2] and [-pi, pi].
  #[must_use]
  pub fn from_degrees(lat_degs: f64, lng_degs: f64) -> Self {
    LatLng {
      lat: crate::sphere::constrain_lat(lat_degs.to_radians()),
      lng: crate::sphere::constrain_lng(lng_degs.to_radians()),
    }
  }
}

/// A planar Cartesian point.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec2d {
  /// X component.
  pub x: f64,
  /// Y component.
  pub y: f64,
}

/// A 3D Cartesian point, approximately on the unit sphere when derived from
/// a [`LatLng`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec3d {
  /// X component.
  pub x: f64,
  /// Y component.
  pub y: f64,
  /// Z component.
  pub z: f64,
}

/// Hex-grid address on three redundant axes spaced 120 degrees apart.
///
/// After [`CoordIJK::normalized`] all components are non-negative and the
/// minimum component is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoordIJK {
  /// I component.
  pub i: i32,
  /// J component.
  pub j: i32,
  /// K component.
  pub k: i32,
}

impl CoordIJK {
  /// Builds a coordinate from raw components, without normalizing.
  #[must_use]
  pub const fn new(i: i32, j: i32, k: i32) -> Self {
    CoordIJK { i, j, k }
  }
}

/// A cell address relative to one of the 20 icosahedron faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FaceIJK {
  /// Icosahedron face number, 0 through 19.
  pub face: i32,
  /// IJK coordinate on that face.
  pub coord: CoordIJK,
}

/// One of the seven positions a cell can occupy relative to its parent, or
/// the invalid sentinel.
///
/// Values 1 through 6 map bijectively to the six unit `CoordIJK` vectors;
/// 0 is the parent center. 7 marks unused digit slots in a packed index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Hash, Default)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum Direction {
  /// Center position.
  #[default]
  Center = 0,
  /// K-axis direction. Pentagons have no child in this direction.
  KAxes = 1,
  /// J-axis direction.
  JAxes = 2,
  /// J == K direction.
  JkAxes = 3,
  /// I-axis direction.
  IAxes = 4,
  /// I == K direction.
  IkAxes = 5,
  /// I == J direction.
  IjAxes = 6,
  /// Sentinel for unused digit slots; never a valid position.
  Invalid = 7,
}

impl Direction {
  /// Rotates the digit 60 degrees counter-clockwise.
  ///
  /// Center and Invalid are fixed points; the six axis digits form a
  /// 6-cycle: K -> IK -> IJ -> ... as dictated by the lattice geometry.
  #[must_use]
  pub const fn rotated_ccw(self) -> Direction {
    match self {
      Direction::KAxes => Direction::IkAxes,
      Direction::IkAxes => Direction::IAxes,
      Direction::IAxes => Direction::IjAxes,
      Direction::IjAxes => Direction::JAxes,
      Direction::JAxes => Direction::JkAxes,
      Direction::JkAxes => Direction::KAxes,
      other => other,
    }
  }

  /// Rotates the digit 60 degrees clockwise.
  #[must_use]
  pub const fn rotated_cw(self) -> Direction {
    match self {
      Direction::KAxes => Direction::JkAxes,
      Direction::JkAxes => Direction::JAxes,
      Direction::JAxes => Direction::IjAxes,
      Direction::IjAxes => Direction::IAxes,
      Direction::IAxes => Direction::IkAxes,
      Direction::IkAxes => Direction::KAxes,
      other => other,
    }
  }
}

impl TryFrom<u8> for Direction {
  type Error = GridError;

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    match value {
      0 => Ok(Direction::Center),
      1 => Ok(Direction::KAxes),
      2 => Ok(Direction::JAxes),
      3 => Ok(Direction::JkAxes),
      4 => Ok(Direction::IAxes),
      5 => Ok(Direction::IkAxes),
      6 => Ok(Direction::IjAxes),
      7 => Ok(Direction::Invalid),
      _ => Err(GridError::Domain),
    }
  }
}
