#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::similar_names)]

//! `geocell` is a hierarchical hexagonal geospatial index on an icosahedral
//! projection of the sphere.
//!
//! Geographic points are addressed by 64-bit cell identifiers at 16 nested
//! resolutions. The cell numbering is bit-for-bit compatible with the H3
//! grid system, so identifiers produced here interoperate with other H3
//! tooling.

pub mod base_cell;
pub mod constants;
pub mod error;
pub mod face;
pub mod hierarchy;
pub mod ijk;
pub mod index;
pub mod math;
pub mod sphere;
pub mod stats;
pub mod types;

pub use error::GridError;
pub use hierarchy::{cell_to_center_child, cell_to_children, cell_to_children_size, cell_to_parent};
pub use index::{cell_to_latlng, latlng_to_cell};
pub use sphere::{degs_to_rads, rads_to_degs};
pub use stats::{
  get_hexagon_area_avg_km2,
  get_hexagon_area_avg_m2,
  get_hexagon_edge_length_avg_km,
  get_hexagon_edge_length_avg_m,
  get_num_cells,
  get_pentagons,
  get_res0_cells,
  pentagon_count,
  res0_cell_count,
};
pub use types::{CellIndex, CoordIJK, Direction, FaceIJK, LatLng, Vec2d, Vec3d};
