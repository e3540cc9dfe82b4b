//! Per-resolution grid statistics and whole-grid cell enumeration.
//!
//! The area and edge-length tables are frozen reference data, consumed as-is
//! rather than derived from the projection.

use crate::base_cell;
use crate::constants::{MAX_RES, NUM_BASE_CELLS, NUM_PENTAGONS};
use crate::error::GridError;
use crate::math::ipow;
use crate::types::{CellIndex, Direction};

fn check_res(res: i32) -> Result<usize, GridError> {
  if !(0..=MAX_RES).contains(&res) {
    return Err(GridError::ResDomain);
  }
  Ok(res as usize)
}

/// Average hexagon area in square kilometers at the given resolution.
pub fn get_hexagon_area_avg_km2(res: i32) -> Result<f64, GridError> {
  #[rustfmt::skip]
  const AREAS_KM2: [f64; (MAX_RES + 1) as usize] = [
    4_250_546.848, 607_220.9782, 86_745.85403, 12_392.26486,
    1_770.323552, 252.9033645, 36.1290521, 5.1612932,
    0.7373276, 0.1053325, 0.0150475, 0.0021496,
    0.0003071, 0.0000439, 0.0000063, 0.0000009,
  ];
  Ok(AREAS_KM2[check_res(res)?])
}

/// Average hexagon area in square meters at the given resolution.
pub fn get_hexagon_area_avg_m2(res: i32) -> Result<f64, GridError> {
  #[rustfmt::skip]
  const AREAS_M2: [f64; (MAX_RES + 1) as usize] = [
    4.25055e+12, 6.07221e+11, 86_745_854_035.0, 12_392_264_862.0,
    1_770_323_552.0, 252_903_364.5, 36_129_052.1, 5_161_293.2,
    737_327.6, 105_332.5, 15_047.5, 2_149.6,
    307.1, 43.9, 6.3, 0.9,
  ];
  Ok(AREAS_M2[check_res(res)?])
}

/// Average hexagon edge length in kilometers at the given resolution.
pub fn get_hexagon_edge_length_avg_km(res: i32) -> Result<f64, GridError> {
  #[rustfmt::skip]
  const LENS_KM: [f64; (MAX_RES + 1) as usize] = [
    1_107.712591, 418.6760055, 158.2446558, 59.81085794,
    22.6063794, 8.544408276, 3.229482772, 1.220629759,
    0.461354684, 0.174375668, 0.065907807, 0.024910561,
    0.009415526, 0.003559893, 0.001348575, 0.000509713,
  ];
  Ok(LENS_KM[check_res(res)?])
}

/// Average hexagon edge length in meters at the given resolution.
pub fn get_hexagon_edge_length_avg_m(res: i32) -> Result<f64, GridError> {
  #[rustfmt::skip]
  const LENS_M: [f64; (MAX_RES + 1) as usize] = [
    1_107_712.591, 418_676.0055, 158_244.6558, 59_810.85794,
    22_606.3794, 8_544.408276, 3_229.482772, 1_220.629759,
    461.3546837, 174.3756681, 65.90780749, 24.9105614,
    9.415526211, 3.559893033, 1.348574562, 0.509713273,
  ];
  Ok(LENS_M[check_res(res)?])
}

/// The number of unique cells at the given resolution: `2 + 120 * 7^res`.
pub fn get_num_cells(res: i32) -> Result<i64, GridError> {
  check_res(res)?;
  Ok(2 + 120 * ipow(7, i64::from(res)))
}

/// All 122 resolution-0 cells, ordered by base cell number.
#[must_use]
pub fn get_res0_cells() -> Vec<CellIndex> {
  (0..NUM_BASE_CELLS)
    .map(|bc| CellIndex::new_cell(0, bc, Direction::Center))
    .collect()
}

/// The 12 pentagonal cells at the given resolution, ordered by base cell
/// number.
pub fn get_pentagons(res: i32) -> Result<Vec<CellIndex>, GridError> {
  check_res(res)?;
  Ok(
    (0..NUM_BASE_CELLS)
      .filter(|&bc| base_cell::is_pentagon(bc))
      .map(|bc| CellIndex::new_cell(res, bc, Direction::Center))
      .collect(),
  )
}

/// The number of pentagonal cells at every resolution.
#[must_use]
pub const fn pentagon_count() -> i32 {
  NUM_PENTAGONS
}

/// The number of resolution-0 cells.
#[must_use]
pub const fn res0_cell_count() -> i32 {
  NUM_BASE_CELLS
}
