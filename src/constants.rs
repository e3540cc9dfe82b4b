//! Numeric and bit-layout constants for the cell indexing grid.

use std::f64::consts;

/// pi
pub const M_PI: f64 = consts::PI;
/// pi / 2.0
pub const M_PI_2: f64 = consts::FRAC_PI_2;
/// 2.0 * pi
pub const M_2PI: f64 = 2.0 * consts::PI;
/// pi / 180
pub const M_PI_180: f64 = consts::PI / 180.0;
/// 180 / pi
pub const M_180_PI: f64 = 180.0 / consts::PI;

/// General-purpose comparison epsilon.
pub const EPSILON: f64 = 0.000_000_000_000_000_1;
/// Comparison epsilon in degrees, roughly 0.1mm on the Earth's surface.
pub const EPSILON_DEG: f64 = 0.000_000_001;
/// Comparison epsilon in radians, roughly 0.1mm on the Earth's surface.
pub const EPSILON_RAD: f64 = EPSILON_DEG * M_PI_180;

/// sin(60 degrees), i.e. sqrt(3) / 2.
pub const M_SIN60: f64 = 0.866_025_403_784_438_6;
/// 1 / sin(60 degrees).
pub const M_RSIN60: f64 = 1.0 / M_SIN60;

/// sqrt(7), the linear scale factor between adjacent resolutions.
pub const M_SQRT7: f64 = 2.645_751_311_064_590_6;
/// 1 / sqrt(7).
pub const M_RSQRT7: f64 = 1.0 / M_SQRT7;

/// One third.
pub const M_ONETHIRD: f64 = 1.0 / 3.0;

/// Rotation angle between Class II and Class III resolution axes,
/// asin(sqrt(3.0 / 28.0)).
pub const M_AP7_ROT_RADS: f64 = 0.333_473_172_251_832_1;

/// Earth radius in kilometers (WGS84 authalic radius).
pub const EARTH_RADIUS_KM: f64 = 6371.007_180_918_475;

/// Scaling factor from hex2d resolution 0 unit length (the distance between
/// adjacent cell centers on the plane) to gnomonic unit length.
pub const RES0_U_GNOMONIC: f64 = 0.381_966_011_250_105;
/// Inverse of `RES0_U_GNOMONIC`.
pub const INV_RES0_U_GNOMONIC: f64 = 1.0 / RES0_U_GNOMONIC;

/// Maximum grid resolution; the grid has 16 resolutions, numbered 0 through 15.
pub const MAX_RES: i32 = 15;
/// The number of faces on the icosahedron.
pub const NUM_ICOSA_FACES: i32 = 20;
/// The number of resolution 0 base cells.
pub const NUM_BASE_CELLS: i32 = 122;
/// The number of pentagonal cells per resolution.
pub const NUM_PENTAGONS: i32 = 12;

// Packed-index bit layout. From most to least significant: 1 reserved high
// bit, 4 mode bits, 3 reserved bits, 4 resolution bits, 7 base cell bits,
// then fifteen 3-bit resolution digits.

/// Bit offset of the mode field.
pub const MODE_OFFSET: u8 = 59;
/// Bit offset of the reserved field.
pub const RESERVED_OFFSET: u8 = 56;
/// Bit offset of the resolution field.
pub const RES_OFFSET: u8 = 52;
/// Bit offset of the base cell field.
pub const BASE_CELL_OFFSET: u8 = 45;
/// Number of bits in a single resolution digit.
pub const PER_DIGIT_OFFSET: u8 = 3;

/// 1 in the highest bit, 0 elsewhere.
pub const HIGH_BIT_MASK: u64 = 1u64 << 63;
/// 1s in the 4 mode bits, 0 elsewhere.
pub const MODE_MASK: u64 = 0b1111u64 << MODE_OFFSET;
/// 1s in the 3 reserved bits, 0 elsewhere.
pub const RESERVED_MASK: u64 = 0b111u64 << RESERVED_OFFSET;
/// 1s in the 4 resolution bits, 0 elsewhere.
pub const RES_MASK: u64 = 0b1111u64 << RES_OFFSET;
/// 1s in the 7 base cell bits, 0 elsewhere.
pub const BASE_CELL_MASK: u64 = 0b111_1111u64 << BASE_CELL_OFFSET;
/// 1s in the 3 bits of a single digit.
pub const DIGIT_MASK: u64 = 0b111u64;

/// Index mode denoting a cell.
pub const CELL_MODE: u8 = 1;

/// Template index: mode 0, resolution 0, base cell 0, every digit set to the
/// invalid sentinel (0b111). Equals `0x1ffffffffffff`.
pub const INDEX_INIT: u64 = 35_184_372_088_831;

/// Total number of unique cells at the finest resolution: 2 + 120 * 7^15.
pub const NUM_CELLS_MAX_RES: i64 = 569_707_381_193_162;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn index_init_is_all_sentinel_digits() {
    // 15 digits * 3 bits = 45 low bits, all ones.
    assert_eq!(INDEX_INIT, (1u64 << 45) - 1);
    assert_eq!(
      INDEX_INIT & (MODE_MASK | RES_MASK | BASE_CELL_MASK | RESERVED_MASK | HIGH_BIT_MASK),
      0
    );
  }

  #[test]
  fn gnomonic_scale_is_self_inverse() {
    assert!((RES0_U_GNOMONIC * INV_RES0_U_GNOMONIC - 1.0).abs() < f64::EPSILON);
  }
}
