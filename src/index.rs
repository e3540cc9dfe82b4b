//! The packed 64-bit cell index: bit-field access, validity, rotation, and
//! conversion between indexes, face addresses, and geographic coordinates.

use crate::base_cell::{self, INVALID_BASE_CELL, INVALID_ROTATIONS, MAX_FACE_COORD};
use crate::constants::{
  BASE_CELL_MASK, BASE_CELL_OFFSET, CELL_MODE, DIGIT_MASK, HIGH_BIT_MASK, INDEX_INIT, MAX_RES, MODE_MASK, MODE_OFFSET,
  NUM_BASE_CELLS, PER_DIGIT_OFFSET, RESERVED_MASK, RES_MASK, RES_OFFSET,
};
use crate::error::GridError;
use crate::face::{is_class_iii_res, Overage};
use crate::types::{CellIndex, CoordIJK, Direction, FaceIJK, LatLng};

#[inline]
const fn digit_shift(res: i32) -> u32 {
  ((MAX_RES - res) * PER_DIGIT_OFFSET as i32) as u32
}

impl CellIndex {
  /// The index mode field.
  #[inline]
  #[must_use]
  pub const fn mode(self) -> u8 {
    ((self.0 & MODE_MASK) >> MODE_OFFSET) as u8
  }

  #[inline]
  pub(crate) const fn with_mode(self, mode: u8) -> CellIndex {
    CellIndex((self.0 & !MODE_MASK) | ((mode as u64) << MODE_OFFSET))
  }

  /// The resolution of the cell, 0 through 15.
  #[inline]
  #[must_use]
  pub const fn resolution(self) -> i32 {
    ((self.0 & RES_MASK) >> RES_OFFSET) as i32
  }

  #[inline]
  pub(crate) const fn with_resolution(self, res: i32) -> CellIndex {
    CellIndex((self.0 & !RES_MASK) | ((res as u64) << RES_OFFSET))
  }

  /// The base cell number, 0 through 121 for valid indexes.
  #[inline]
  #[must_use]
  pub const fn base_cell_number(self) -> i32 {
    ((self.0 & BASE_CELL_MASK) >> BASE_CELL_OFFSET) as i32
  }

  #[inline]
  pub(crate) const fn with_base_cell_number(self, base_cell: i32) -> CellIndex {
    CellIndex((self.0 & !BASE_CELL_MASK) | ((base_cell as u64) << BASE_CELL_OFFSET))
  }

  /// The digit occupying resolution `res`, 1-based.
  #[inline]
  #[must_use]
  pub(crate) fn digit(self, res: i32) -> Direction {
    let raw = ((self.0 >> digit_shift(res)) & DIGIT_MASK) as u8;
    // raw is masked to 3 bits, always convertible
    Direction::try_from(raw).unwrap_or(Direction::Invalid)
  }

  #[inline]
  pub(crate) fn with_digit(self, res: i32, digit: Direction) -> CellIndex {
    let shift = digit_shift(res);
    CellIndex((self.0 & !(DIGIT_MASK << shift)) | ((digit as u64) << shift))
  }

  /// Builds a cell index with every digit through `res` set to `init_digit`
  /// and the remaining digit slots left at the sentinel.
  #[must_use]
  pub(crate) fn new_cell(res: i32, base_cell: i32, init_digit: Direction) -> CellIndex {
    let mut h = CellIndex(INDEX_INIT)
      .with_mode(CELL_MODE)
      .with_resolution(res)
      .with_base_cell_number(base_cell);
    for r in 1..=res {
      h = h.with_digit(r, init_digit);
    }
    h
  }

  /// Whether the index passes the full structural validity check: correct
  /// mode, zeroed reserved bits, in-range base cell, in-range digits through
  /// the resolution, sentinel digits beyond it, and no digit landing in a
  /// pentagon's deleted subsequence.
  #[must_use]
  pub fn is_valid(self) -> bool {
    if self.0 & HIGH_BIT_MASK != 0 {
      return false;
    }
    if self.mode() != CELL_MODE {
      return false;
    }
    if self.0 & RESERVED_MASK != 0 {
      return false;
    }

    let base_cell = self.base_cell_number();
    if base_cell >= NUM_BASE_CELLS {
      return false;
    }

    let res = self.resolution();
    let mut found_first_non_zero = false;
    for r in 1..=res {
      let digit = self.digit(r);
      if digit == Direction::Invalid {
        return false;
      }
      if !found_first_non_zero && digit != Direction::Center {
        found_first_non_zero = true;
        // pentagons have no K-axes subsequence
        if digit == Direction::KAxes && base_cell::is_pentagon(base_cell) {
          return false;
        }
      }
    }
    for r in (res + 1)..=MAX_RES {
      if self.digit(r) != Direction::Invalid {
        return false;
      }
    }
    true
  }

  /// Whether this index addresses one of the 12 pentagonal cells at its
  /// resolution.
  #[must_use]
  pub fn is_pentagon(self) -> bool {
    base_cell::is_pentagon(self.base_cell_number()) && self.leading_non_zero_digit() == Direction::Center
  }

  /// Whether the cell's resolution has Class III orientation.
  #[inline]
  #[must_use]
  pub fn is_class_iii(self) -> bool {
    is_class_iii_res(self.resolution())
  }

  /// The coarsest non-center digit, or Center when all digits are central.
  #[must_use]
  pub(crate) fn leading_non_zero_digit(self) -> Direction {
    for r in 1..=self.resolution() {
      let digit = self.digit(r);
      if digit != Direction::Center {
        return digit;
      }
    }
    Direction::Center
  }

  /// Rotates all digits 60 degrees counter-clockwise.
  #[must_use]
  pub(crate) fn rotated_60_ccw(self) -> CellIndex {
    let mut h = self;
    for r in 1..=h.resolution() {
      h = h.with_digit(r, h.digit(r).rotated_ccw());
    }
    h
  }

  /// Rotates all digits 60 degrees clockwise.
  #[must_use]
  pub(crate) fn rotated_60_cw(self) -> CellIndex {
    let mut h = self;
    for r in 1..=h.resolution() {
      h = h.with_digit(r, h.digit(r).rotated_cw());
    }
    h
  }

  /// Rotates 60 degrees counter-clockwise about a pentagonal center,
  /// skewing an extra rotation when the leading digit lands on the deleted
  /// K-axes subsequence.
  #[must_use]
  pub(crate) fn rotated_pent60_ccw(self) -> CellIndex {
    let mut h = self;
    let mut found_first_non_zero = false;
    for r in 1..=h.resolution() {
      h = h.with_digit(r, h.digit(r).rotated_ccw());
      if !found_first_non_zero && h.digit(r) != Direction::Center {
        found_first_non_zero = true;
        if h.leading_non_zero_digit() == Direction::KAxes {
          h = h.rotated_60_ccw();
        }
      }
    }
    h
  }

  /// Clockwise counterpart of [`CellIndex::rotated_pent60_ccw`].
  #[must_use]
  pub(crate) fn rotated_pent60_cw(self) -> CellIndex {
    let mut h = self;
    let mut found_first_non_zero = false;
    for r in 1..=h.resolution() {
      h = h.with_digit(r, h.digit(r).rotated_cw());
      if !found_first_non_zero && h.digit(r) != Direction::Center {
        found_first_non_zero = true;
        if h.leading_non_zero_digit() == Direction::KAxes {
          h = h.rotated_60_cw();
        }
      }
    }
    h
  }

  /// Encodes a face address at the given resolution into a cell index.
  ///
  /// Fails closed: addresses outside the valid range of the face grid
  /// produce [`CellIndex::INVALID`].
  #[must_use]
  pub(crate) fn from_face_ijk(fijk: &FaceIJK, res: i32) -> CellIndex {
    let mut h = CellIndex(INDEX_INIT).with_mode(CELL_MODE).with_resolution(res);

    if res == 0 {
      if exceeds_face_coord(&fijk.coord) {
        return CellIndex::INVALID;
      }
      let base_cell = base_cell::face_ijk_to_base_cell(fijk);
      if base_cell == INVALID_BASE_CELL {
        return CellIndex::INVALID;
      }
      return h.with_base_cell_number(base_cell);
    }

    // Walk up from the target resolution, recovering one digit per step as
    // the offset of the cell from its parent's center.
    let mut fijk_bc = *fijk;
    for r in (1..=res).rev() {
      let last_ijk = fijk_bc.coord;
      let last_center = if is_class_iii_res(r) {
        fijk_bc.coord = fijk_bc.coord.up_aperture7_ccw();
        fijk_bc.coord.down_aperture7_ccw()
      } else {
        fijk_bc.coord = fijk_bc.coord.up_aperture7_cw();
        fijk_bc.coord.down_aperture7_cw()
      };

      let digit = last_ijk.sub(last_center).as_digit();
      if digit == Direction::Invalid {
        return CellIndex::INVALID;
      }
      h = h.with_digit(r, digit);
    }

    // fijk_bc now holds the resolution-0 address on the original face
    if exceeds_face_coord(&fijk_bc.coord) {
      return CellIndex::INVALID;
    }
    let base_cell = base_cell::face_ijk_to_base_cell(&fijk_bc);
    if base_cell == INVALID_BASE_CELL {
      return CellIndex::INVALID;
    }
    h = h.with_base_cell_number(base_cell);

    let num_rots = base_cell::face_ijk_to_ccw_rot60(&fijk_bc);
    if num_rots == INVALID_ROTATIONS {
      return CellIndex::INVALID;
    }

    if base_cell::is_pentagon(base_cell) {
      // the deleted K-axes subsequence cannot be the leading digit
      if h.leading_non_zero_digit() == Direction::KAxes {
        h = if base_cell::is_cw_offset_face(base_cell, fijk_bc.face) {
          h.rotated_60_cw()
        } else {
          h.rotated_60_ccw()
        };
      }
      for _ in 0..num_rots {
        h = h.rotated_pent60_ccw();
      }
    } else {
      for _ in 0..num_rots {
        h = h.rotated_60_ccw();
      }
    }
    h
  }

  /// Decodes this index to its canonical face address, resolving any
  /// face crossing from the base cell's home face.
  pub(crate) fn to_face_ijk(self) -> Result<FaceIJK, GridError> {
    let base_cell = self.base_cell_number();
    let mut fijk = base_cell::home_fijk(base_cell).ok_or(GridError::CellInvalid)?;

    let mut h = self;
    if base_cell::is_pentagon(base_cell) && h.leading_non_zero_digit() == Direction::IkAxes {
      h = h.rotated_60_cw();
    }

    if !h.apply_digits_to(&mut fijk) {
      return Ok(fijk);
    }
    let home_coord = fijk.coord;

    // face crossing is checked on a Class II grid; a Class III cell is
    // temporarily expressed one resolution finer
    let res = self.resolution();
    let mut adj_res = res;
    if is_class_iii_res(res) {
      fijk.coord = fijk.coord.down_aperture7_cw();
      adj_res += 1;
    }

    let pent_leading_4 = base_cell::is_pentagon(base_cell) && h.leading_non_zero_digit() == Direction::IAxes;
    let mut overage = fijk.adjust_overage_class_ii(adj_res, pent_leading_4, false);

    if overage == Overage::NoOverage {
      if adj_res != res {
        fijk.coord = home_coord;
      }
    } else {
      // a pentagon can cross more than one face edge
      if base_cell::is_pentagon(base_cell) {
        while overage == Overage::NewFace {
          overage = fijk.adjust_overage_class_ii(adj_res, false, false);
        }
      }
      if adj_res != res {
        fijk.coord = fijk.coord.up_aperture7_cw();
      }
    }
    Ok(fijk)
  }

  /// Applies the index digits to a face address initialized with the base
  /// cell's coordinates, stepping down one resolution per digit. Returns
  /// whether the result can overflow the face.
  fn apply_digits_to(self, fijk: &mut FaceIJK) -> bool {
    let res = self.resolution();
    let centered_hexagon = !base_cell::is_pentagon(self.base_cell_number())
      && (res == 0 || fijk.coord == CoordIJK::new(0, 0, 0));

    for r in 1..=res {
      if is_class_iii_res(r) {
        fijk.coord = fijk.coord.down_aperture7_ccw();
      } else {
        fijk.coord = fijk.coord.down_aperture7_cw();
      }
      fijk.coord = fijk.coord.neighbor(self.digit(r));
    }
    !centered_hexagon
  }
}

#[inline]
fn exceeds_face_coord(coord: &CoordIJK) -> bool {
  coord.i > MAX_FACE_COORD || coord.j > MAX_FACE_COORD || coord.k > MAX_FACE_COORD
}

/// Indexes the cell containing a geographic point at the given resolution.
///
/// # Errors
/// `ResDomain` for a resolution outside 0..=15, `LatLngDomain` for
/// non-finite coordinates, and `Failed` if the point cannot be encoded.
pub fn latlng_to_cell(geo: &LatLng, res: i32) -> Result<CellIndex, GridError> {
  if !(0..=MAX_RES).contains(&res) {
    return Err(GridError::ResDomain);
  }
  if !geo.lat.is_finite() || !geo.lng.is_finite() {
    return Err(GridError::LatLngDomain);
  }

  let fijk = FaceIJK::from_geo(geo, res);
  let cell = CellIndex::from_face_ijk(&fijk, res);
  if cell == CellIndex::INVALID {
    return Err(GridError::Failed);
  }
  Ok(cell)
}

/// The geographic center point of a cell.
///
/// # Errors
/// `CellInvalid` if the index fails the validity check.
pub fn cell_to_latlng(cell: CellIndex) -> Result<LatLng, GridError> {
  if !cell.is_valid() {
    return Err(GridError::CellInvalid);
  }
  let fijk = cell.to_face_ijk()?;
  Ok(fijk.to_geo(cell.resolution()))
}
