//! Parent/child navigation across resolutions.
//!
//! Children are enumerated iteratively into a fixed-shape buffer of
//! `7^(child_res - res)` slots ordered by digit sequence. Under a pentagon
//! the deleted K-axes subtree contributes no cells; those slots hold
//! [`CellIndex::INVALID`] so that a child's position always encodes its
//! digit path.

use crate::constants::MAX_RES;
use crate::error::GridError;
use crate::math::ipow;
use crate::types::{CellIndex, Direction};

fn check_child_res(cell: CellIndex, child_res: i32) -> Result<i32, GridError> {
  if !cell.is_valid() {
    return Err(GridError::CellInvalid);
  }
  if !(0..=MAX_RES).contains(&child_res) {
    return Err(GridError::ResDomain);
  }
  if child_res < cell.resolution() {
    return Err(GridError::ResMismatch);
  }
  Ok(cell.resolution())
}

/// The ancestor of `cell` at the given coarser resolution.
///
/// # Errors
/// `CellInvalid` for an invalid index, `ResDomain` for a resolution outside
/// 0..=15, and `ResMismatch` when `parent_res` is finer than the cell.
pub fn cell_to_parent(cell: CellIndex, parent_res: i32) -> Result<CellIndex, GridError> {
  if !cell.is_valid() {
    return Err(GridError::CellInvalid);
  }
  if !(0..=MAX_RES).contains(&parent_res) {
    return Err(GridError::ResDomain);
  }
  let res = cell.resolution();
  if parent_res > res {
    return Err(GridError::ResMismatch);
  }
  if parent_res == res {
    return Ok(cell);
  }

  let mut parent = cell.with_resolution(parent_res);
  for r in (parent_res + 1)..=res {
    parent = parent.with_digit(r, Direction::Invalid);
  }
  Ok(parent)
}

/// The child at the center position for every intervening resolution.
///
/// # Errors
/// Same domain checks as [`cell_to_parent`], with `ResMismatch` when
/// `child_res` is coarser than the cell.
pub fn cell_to_center_child(cell: CellIndex, child_res: i32) -> Result<CellIndex, GridError> {
  let res = check_child_res(cell, child_res)?;
  if child_res == res {
    return Ok(cell);
  }

  let mut child = cell.with_resolution(child_res);
  for r in (res + 1)..=child_res {
    child = child.with_digit(r, Direction::Center);
  }
  Ok(child)
}

/// The number of children of `cell` at the given finer resolution.
///
/// Pentagons have a deleted subtree, so a pentagon's count is
/// `1 + 5 * (7^n - 1) / 6` rather than `7^n`.
///
/// # Errors
/// Same domain checks as [`cell_to_center_child`].
pub fn cell_to_children_size(cell: CellIndex, child_res: i32) -> Result<i64, GridError> {
  let res = check_child_res(cell, child_res)?;
  let n = child_res - res;
  let total = ipow(7, i64::from(n));
  if cell.is_pentagon() {
    Ok(1 + 5 * (total - 1) / 6)
  } else {
    Ok(total)
  }
}

/// Enumerates the children of `cell` at the given finer resolution.
///
/// The result always has `7^(child_res - res)` entries. Slot `i` holds the
/// child whose appended digit path is `i` written in base 7, coarsest digit
/// first; slots falling in a pentagon's deleted K-axes subtree hold
/// [`CellIndex::INVALID`]. The number of non-sentinel entries equals
/// [`cell_to_children_size`].
///
/// # Errors
/// Same domain checks as [`cell_to_center_child`].
pub fn cell_to_children(cell: CellIndex, child_res: i32) -> Result<Vec<CellIndex>, GridError> {
  let res = check_child_res(cell, child_res)?;
  let n = child_res - res;
  let total = ipow(7, i64::from(n)) as usize;
  let pentagon = cell.is_pentagon();

  let mut out = Vec::with_capacity(total);
  let template = cell.with_resolution(child_res);

  for slot in 0..total {
    let mut child = template;
    let mut deleted = false;
    let mut leading_center = pentagon;
    for r in (res + 1)..=child_res {
      let place = ipow(7, i64::from(child_res - r)) as usize;
      let raw = ((slot / place) % 7) as u8;
      // raw is 0..=6, always convertible
      let digit = Direction::try_from(raw).unwrap_or(Direction::Invalid);
      if leading_center && digit != Direction::Center {
        leading_center = false;
        if digit == Direction::KAxes {
          deleted = true;
          break;
        }
      }
      child = child.with_digit(r, digit);
    }
    out.push(if deleted { CellIndex::INVALID } else { child });
  }
  Ok(out)
}
