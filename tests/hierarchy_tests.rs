// tests/hierarchy_tests.rs

use geocell::*;

fn sf_cell(res: i32) -> CellIndex {
  latlng_to_cell(&LatLng::from_degrees(37.7749, -122.4194), res).expect("indexing fixture point failed")
}

#[test]
fn test_parent_chain_to_res0() {
  let fine = sf_cell(9);
  let mut cell = fine;
  for res in (0..9).rev() {
    let parent = cell_to_parent(fine, res).unwrap();
    assert_eq!(parent.resolution(), res);
    assert!(parent.is_valid());
    // the parent of the parent chain agrees step by step
    assert_eq!(cell_to_parent(cell, res).unwrap(), parent);
    cell = parent;
  }
  assert_eq!(cell.base_cell_number(), fine.base_cell_number());
}

#[test]
fn test_parent_known_value() {
  // parent is digit truncation, so the res-5 ancestor of the point's res-10
  // cell is not the res-5 cell containing the point (0x85283473fffffff);
  // the hierarchy is not spatially nested
  let fine = latlng_to_cell(&LatLng::from_degrees(37.7749, -122.4194), 10).unwrap();
  assert_eq!(fine, CellIndex(0x8a2830828767fff));
  assert_eq!(cell_to_parent(fine, 5).unwrap(), CellIndex(0x85283083fffffff));
}

#[test]
fn test_parent_rejects_finer_resolution() {
  let cell = sf_cell(5);
  assert_eq!(cell_to_parent(cell, 6), Err(GridError::ResMismatch));
  assert_eq!(cell_to_parent(cell, 16), Err(GridError::ResDomain));
  assert_eq!(cell_to_parent(CellIndex::INVALID, 0), Err(GridError::CellInvalid));
}

#[test]
fn test_center_child_and_parent_are_inverse() {
  let cell = sf_cell(4);
  for child_res in 4..=9 {
    let child = cell_to_center_child(cell, child_res).unwrap();
    assert_eq!(child.resolution(), child_res);
    assert_eq!(cell_to_parent(child, 4).unwrap(), cell);
  }
}

#[test]
fn test_children_of_hexagon() {
  let cell = sf_cell(6);
  let children = cell_to_children(cell, 7).unwrap();
  assert_eq!(children.len(), 7);
  assert_eq!(cell_to_children_size(cell, 7).unwrap(), 7);
  for (slot, child) in children.iter().enumerate() {
    assert!(child.is_valid(), "slot {slot}");
    assert_eq!(cell_to_parent(*child, 6).unwrap(), cell);
  }
  assert_eq!(children[0], cell_to_center_child(cell, 7).unwrap());

  // all children are distinct
  let mut sorted = children.clone();
  sorted.sort();
  sorted.dedup();
  assert_eq!(sorted.len(), 7);
}

#[test]
fn test_children_of_pentagon_have_gap() {
  let pentagon = get_pentagons(2).unwrap()[0];
  let children = cell_to_children(pentagon, 3).unwrap();
  assert_eq!(children.len(), 7);
  // the K-axes slot of a pentagon is the deleted subtree
  assert_eq!(children[1], CellIndex::INVALID);

  let valid: Vec<_> = children.iter().filter(|c| **c != CellIndex::INVALID).collect();
  assert_eq!(valid.len() as i64, cell_to_children_size(pentagon, 3).unwrap());
  assert_eq!(valid.len(), 6);
  for child in valid {
    assert!(child.is_valid());
    assert_eq!(cell_to_parent(*child, 2).unwrap(), pentagon);
  }
}

#[test]
fn test_children_sizes_sum_to_cell_count() {
  // every res-1 cell is the child of exactly one res-0 cell
  let mut total = 0;
  for cell in get_res0_cells() {
    total += cell_to_children_size(cell, 1).unwrap();
  }
  assert_eq!(total, get_num_cells(1).unwrap());

  let mut total2 = 0;
  for cell in get_res0_cells() {
    total2 += cell_to_children_size(cell, 2).unwrap();
  }
  assert_eq!(total2, get_num_cells(2).unwrap());
}

#[test]
fn test_children_round_trip_through_centers() {
  let cell = sf_cell(5);
  for child in cell_to_children(cell, 6).unwrap() {
    let center = cell_to_latlng(child).unwrap();
    assert_eq!(latlng_to_cell(&center, 6).unwrap(), child);
  }
}

#[test]
fn test_children_argument_checks() {
  let cell = sf_cell(5);
  assert_eq!(cell_to_children(cell, 4), Err(GridError::ResMismatch));
  assert_eq!(cell_to_children_size(cell, 16), Err(GridError::ResDomain));
  assert_eq!(cell_to_children(CellIndex::INVALID, 6), Err(GridError::CellInvalid));
  // a cell is its own sole child at its own resolution
  assert_eq!(cell_to_children(cell, 5).unwrap(), vec![cell]);
  assert_eq!(cell_to_children_size(cell, 5).unwrap(), 1);
}
