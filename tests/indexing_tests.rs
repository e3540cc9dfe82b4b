// tests/indexing_tests.rs

use approx::assert_relative_eq;
use geocell::*;

fn latlng_from_degs(lat_deg: f64, lng_deg: f64) -> LatLng {
  LatLng::from_degrees(lat_deg, lng_deg)
}

#[test]
fn test_lat_lng_to_cell_known_value() {
  // (20, 123) at res 2 indexes to 824b9ffffffffff
  let geo = latlng_from_degs(20.0, 123.0);
  let cell = latlng_to_cell(&geo, 2).expect("latlng_to_cell failed");
  assert_eq!(cell, CellIndex(0x824b9ffffffffff));
}

#[test]
fn test_lat_lng_to_cell_san_francisco() {
  let geo = latlng_from_degs(37.7749, -122.4194);
  assert_eq!(latlng_to_cell(&geo, 5).unwrap(), CellIndex(0x85283473fffffff));
  assert_eq!(latlng_to_cell(&geo, 10).unwrap(), CellIndex(0x8a2830828767fff));
}

#[test]
fn test_cell_to_lat_lng_known_value() {
  // 8928342e20fffff centers at POINT(-122.5003039349 37.5012466151)
  let cell = CellIndex(0x8928342e20fffff);
  let center = cell_to_latlng(cell).expect("cell_to_latlng failed");
  assert_relative_eq!(rads_to_degs(center.lng), -122.5003039349, epsilon = 1e-9);
  assert_relative_eq!(rads_to_degs(center.lat), 37.5012466151, epsilon = 1e-9);
}

#[test]
fn test_invalid_cell_to_lat_lng() {
  // mode 0 is not a cell index
  let invalid = CellIndex(0x0528_3473_ffff_fff);
  assert_eq!(cell_to_latlng(invalid), Err(GridError::CellInvalid));
  assert_eq!(cell_to_latlng(CellIndex::INVALID), Err(GridError::CellInvalid));
}

#[test]
fn test_lat_lng_to_cell_argument_checks() {
  let geo = latlng_from_degs(0.0, 0.0);
  assert_eq!(latlng_to_cell(&geo, -1), Err(GridError::ResDomain));
  assert_eq!(latlng_to_cell(&geo, 16), Err(GridError::ResDomain));

  let nan = LatLng {
    lat: f64::NAN,
    lng: 0.0,
  };
  assert_eq!(latlng_to_cell(&nan, 5), Err(GridError::LatLngDomain));
  let inf = LatLng {
    lat: 0.0,
    lng: f64::INFINITY,
  };
  assert_eq!(latlng_to_cell(&inf, 5), Err(GridError::LatLngDomain));
}

#[test]
fn test_round_trip_across_resolutions() {
  // cell center must re-index to the same cell at every resolution
  let sites = [
    latlng_from_degs(37.7749, -122.4194),  // San Francisco
    latlng_from_degs(-33.8688, 151.2093),  // Sydney
    latlng_from_degs(64.1466, -21.9426),   // Reykjavik
    latlng_from_degs(0.0, 0.0),            // gulf of Guinea
    latlng_from_degs(87.0, 166.0),         // near the north polar pentagon
    latlng_from_degs(-89.9, 5.0),          // near the south pole
  ];
  for geo in &sites {
    for res in 0..=15 {
      let cell = latlng_to_cell(geo, res).unwrap();
      assert!(cell.is_valid(), "res {res}");
      assert_eq!(cell.resolution(), res);
      let center = cell_to_latlng(cell).unwrap();
      assert_eq!(latlng_to_cell(&center, res).unwrap(), cell, "res {res}");
    }
  }
}

#[test]
fn test_antimeridian_round_trip() {
  for lng in [-180.0, 180.0, 179.999_9, -179.999_9] {
    let geo = latlng_from_degs(-16.5, lng);
    let cell = latlng_to_cell(&geo, 7).unwrap();
    assert!(cell.is_valid());
    let center = cell_to_latlng(cell).unwrap();
    assert_eq!(latlng_to_cell(&center, 7).unwrap(), cell, "lng {lng}");
  }
}

#[test]
fn test_poles_index_to_known_cells() {
  // the icosahedron vertices sit well away from the poles, so both poles
  // fall inside hexagon cells
  let north = latlng_to_cell(&latlng_from_degs(90.0, 0.0), 0).unwrap();
  assert_eq!(north, CellIndex(0x8001fffffffffff));
  assert_eq!(north.base_cell_number(), 0);
  assert!(!north.is_pentagon());

  let south = latlng_to_cell(&latlng_from_degs(-90.0, 0.0), 0).unwrap();
  assert_eq!(south, CellIndex(0x80f3fffffffffff));
  assert_eq!(south.base_cell_number(), 121);

  // longitude is irrelevant exactly at a pole
  for lng in [-180.0, -90.0, 45.0, 180.0] {
    assert_eq!(latlng_to_cell(&latlng_from_degs(90.0, lng), 3).unwrap(), CellIndex(0x830326fffffffff));
  }
}
