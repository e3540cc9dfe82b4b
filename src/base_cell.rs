//! The 122 resolution-0 base cells: their home face addresses, the pentagon
//! flags, and the per-face lookup used when encoding a face address into an
//! index.

use crate::constants::{NUM_BASE_CELLS, NUM_ICOSA_FACES};
use crate::types::{CoordIJK, FaceIJK};

/// Sentinel for a face coordinate with no base cell.
pub(crate) const INVALID_BASE_CELL: i32 = 127;

/// Sentinel rotation count for lookups off the table.
pub(crate) const INVALID_ROTATIONS: i32 = -1;

/// Largest per-component value addressable in the face lookup table.
pub(crate) const MAX_FACE_COORD: i32 = 2;

/// Per base cell: home face address, pentagon flag, and for pentagons the
/// two faces found in the clockwise offset direction (-1 when none).
#[derive(Debug, Clone, Copy)]
pub(crate) struct BaseCellData {
  pub(crate) home: FaceIJK,
  pub(crate) pentagon: bool,
  pub(crate) cw_offset_faces: [i32; 2],
}

const fn hexagon(face: i32, i: i32, j: i32, k: i32) -> BaseCellData {
  BaseCellData {
    home: FaceIJK {
      face,
      coord: CoordIJK::new(i, j, k),
    },
    pentagon: false,
    cw_offset_faces: [-1, -1],
  }
}

const fn pentagon(face: i32, i: i32, j: i32, k: i32, offset0: i32, offset1: i32) -> BaseCellData {
  BaseCellData {
    home: FaceIJK {
      face,
      coord: CoordIJK::new(i, j, k),
    },
    pentagon: true,
    cw_offset_faces: [offset0, offset1],
  }
}

/// Frozen base cell table; the numbering is part of the index format.
#[rustfmt::skip]
pub(crate) static BASE_CELL_DATA: [BaseCellData; NUM_BASE_CELLS as usize] = [
  hexagon(1, 1, 0, 0),            // base cell 0
  hexagon(2, 1, 1, 0),            // base cell 1
  hexagon(1, 0, 0, 0),            // base cell 2
  hexagon(2, 1, 0, 0),            // base cell 3
  pentagon(0, 2, 0, 0, -1, -1),   // base cell 4
  hexagon(1, 1, 1, 0),            // base cell 5
  hexagon(1, 0, 0, 1),            // base cell 6
  hexagon(2, 0, 0, 0),            // base cell 7
  hexagon(0, 1, 0, 0),            // base cell 8
  hexagon(2, 0, 1, 0),            // base cell 9
  hexagon(1, 0, 1, 0),            // base cell 10
  hexagon(1, 0, 1, 1),            // base cell 11
  hexagon(3, 1, 0, 0),            // base cell 12
  hexagon(3, 1, 1, 0),            // base cell 13
  pentagon(11, 2, 0, 0, 2, 6),    // base cell 14
  hexagon(4, 1, 0, 0),            // base cell 15
  hexagon(0, 0, 0, 0),            // base cell 16
  hexagon(6, 0, 1, 0),            // base cell 17
  hexagon(0, 0, 0, 1),            // base cell 18
  hexagon(2, 0, 1, 1),            // base cell 19
  hexagon(7, 0, 0, 1),            // base cell 20
  hexagon(2, 0, 0, 1),            // base cell 21
  hexagon(0, 1, 1, 0),            // base cell 22
  hexagon(6, 0, 0, 1),            // base cell 23
  pentagon(10, 2, 0, 0, 1, 5),    // base cell 24
  hexagon(6, 0, 0, 0),            // base cell 25
  hexagon(3, 0, 0, 0),            // base cell 26
  hexagon(11, 1, 0, 0),           // base cell 27
  hexagon(4, 1, 1, 0),            // base cell 28
  hexagon(3, 0, 1, 0),            // base cell 29
  hexagon(0, 0, 1, 1),            // base cell 30
  hexagon(4, 0, 0, 0),            // base cell 31
  hexagon(5, 0, 1, 0),            // base cell 32
  hexagon(0, 0, 1, 0),            // base cell 33
  hexagon(7, 0, 1, 0),            // base cell 34
  hexagon(11, 1, 1, 0),           // base cell 35
  hexagon(7, 0, 0, 0),            // base cell 36
  hexagon(10, 1, 0, 0),           // base cell 37
  pentagon(12, 2, 0, 0, 3, 7),    // base cell 38
  hexagon(6, 1, 0, 1),            // base cell 39
  hexagon(7, 1, 0, 1),            // base cell 40
  hexagon(4, 0, 0, 1),            // base cell 41
  hexagon(3, 0, 0, 1),            // base cell 42
  hexagon(3, 0, 1, 1),            // base cell 43
  hexagon(4, 0, 1, 0),            // base cell 44
  hexagon(6, 1, 0, 0),            // base cell 45
  hexagon(11, 0, 0, 0),           // base cell 46
  hexagon(8, 0, 0, 1),            // base cell 47
  hexagon(5, 0, 0, 1),            // base cell 48
  pentagon(14, 2, 0, 0, 0, 9),    // base cell 49
  hexagon(5, 0, 0, 0),            // base cell 50
  hexagon(12, 1, 0, 0),           // base cell 51
  hexagon(10, 1, 1, 0),           // base cell 52
  hexagon(4, 0, 1, 1),            // base cell 53
  hexagon(12, 1, 1, 0),           // base cell 54
  hexagon(7, 1, 0, 0),            // base cell 55
  hexagon(11, 0, 1, 0),           // base cell 56
  hexagon(10, 0, 0, 0),           // base cell 57
  pentagon(13, 2, 0, 0, 4, 8),    // base cell 58
  hexagon(10, 0, 0, 1),           // base cell 59
  hexagon(11, 0, 0, 1),           // base cell 60
  hexagon(9, 0, 1, 0),            // base cell 61
  hexagon(8, 0, 1, 0),            // base cell 62
  pentagon(6, 2, 0, 0, 11, 15),   // base cell 63
  hexagon(8, 0, 0, 0),            // base cell 64
  hexagon(9, 0, 0, 1),            // base cell 65
  hexagon(14, 1, 0, 0),           // base cell 66
  hexagon(5, 1, 0, 1),            // base cell 67
  hexagon(16, 0, 1, 1),           // base cell 68
  hexagon(8, 1, 0, 1),            // base cell 69
  hexagon(5, 1, 0, 0),            // base cell 70
  hexagon(12, 0, 0, 0),           // base cell 71
  pentagon(7, 2, 0, 0, 12, 16),   // base cell 72
  hexagon(12, 0, 1, 0),           // base cell 73
  hexagon(10, 0, 1, 0),           // base cell 74
  hexagon(9, 0, 0, 0),            // base cell 75
  hexagon(13, 1, 0, 0),           // base cell 76
  hexagon(16, 0, 0, 1),           // base cell 77
  hexagon(15, 0, 1, 1),           // base cell 78
  hexagon(15, 0, 1, 0),           // base cell 79
  hexagon(16, 0, 1, 0),           // base cell 80
  hexagon(14, 1, 1, 0),           // base cell 81
  hexagon(13, 1, 1, 0),           // base cell 82
  pentagon(5, 2, 0, 0, 10, 19),   // base cell 83
  hexagon(8, 1, 0, 0),            // base cell 84
  hexagon(14, 0, 0, 0),           // base cell 85
  hexagon(9, 1, 0, 1),            // base cell 86
  hexagon(14, 0, 0, 1),           // base cell 87
  hexagon(17, 0, 0, 1),           // base cell 88
  hexagon(12, 0, 0, 1),           // base cell 89
  hexagon(16, 0, 0, 0),           // base cell 90
  hexagon(17, 0, 1, 1),           // base cell 91
  hexagon(15, 0, 0, 1),           // base cell 92
  hexagon(16, 1, 0, 1),           // base cell 93
  hexagon(9, 1, 0, 0),            // base cell 94
  hexagon(15, 0, 0, 0),           // base cell 95
  hexagon(13, 0, 0, 0),           // base cell 96
  pentagon(8, 2, 0, 0, 13, 17),   // base cell 97
  hexagon(13, 0, 1, 0),           // base cell 98
  hexagon(17, 1, 0, 1),           // base cell 99
  hexagon(19, 0, 1, 0),           // base cell 100
  hexagon(14, 0, 1, 0),           // base cell 101
  hexagon(19, 0, 1, 1),           // base cell 102
  hexagon(17, 0, 1, 0),           // base cell 103
  hexagon(13, 0, 0, 1),           // base cell 104
  hexagon(17, 0, 0, 0),           // base cell 105
  hexagon(16, 1, 0, 0),           // base cell 106
  pentagon(9, 2, 0, 0, 14, 18),   // base cell 107
  hexagon(15, 1, 0, 1),           // base cell 108
  hexagon(15, 1, 0, 0),           // base cell 109
  hexagon(18, 0, 1, 1),           // base cell 110
  hexagon(18, 0, 0, 1),           // base cell 111
  hexagon(19, 0, 0, 1),           // base cell 112
  hexagon(17, 1, 0, 0),           // base cell 113
  hexagon(19, 0, 0, 0),           // base cell 114
  hexagon(18, 0, 1, 0),           // base cell 115
  hexagon(18, 1, 0, 1),           // base cell 116
  pentagon(19, 2, 0, 0, -1, -1),  // base cell 117
  hexagon(19, 1, 0, 0),           // base cell 118
  hexagon(18, 0, 0, 0),           // base cell 119
  hexagon(19, 1, 0, 1),           // base cell 120
  hexagon(18, 1, 0, 0),           // base cell 121
];

/// Base cell plus the 60-degree ccw rotation count into its orientation.
#[derive(Debug, Clone, Copy)]
struct BaseCellOrient {
  base_cell: i32,
  ccw_rot60: i32,
}

const fn bc(base_cell: i32, ccw_rot60: i32) -> BaseCellOrient {
  BaseCellOrient { base_cell, ccw_rot60 }
}

/// Resolution-0 base cell per face and IJK coordinate, with the rotation
/// count into that base cell's orientation. Indexed `[face][i][j][k]` with
/// each component in 0..=2.
#[rustfmt::skip]
static FACE_IJK_TO_BASE_CELL: [[[[BaseCellOrient; 3]; 3]; 3]; NUM_ICOSA_FACES as usize] = [
  [ // face 0
    [[bc(16, 0), bc(18, 0), bc(24, 0)], [bc(33, 0), bc(30, 0), bc(32, 3)], [bc(49, 1), bc(48, 3), bc(50, 3)]],
    [[bc(8, 0), bc(5, 5), bc(10, 5)], [bc(22, 0), bc(16, 0), bc(18, 0)], [bc(41, 1), bc(33, 0), bc(30, 0)]],
    [[bc(4, 0), bc(0, 5), bc(2, 5)], [bc(15, 1), bc(8, 0), bc(5, 5)], [bc(31, 1), bc(22, 0), bc(16, 0)]],
  ],
  [ // face 1
    [[bc(2, 0), bc(6, 0), bc(14, 0)], [bc(10, 0), bc(11, 0), bc(17, 3)], [bc(24, 1), bc(23, 3), bc(25, 3)]],
    [[bc(0, 0), bc(1, 5), bc(9, 5)], [bc(5, 0), bc(2, 0), bc(6, 0)], [bc(18, 1), bc(10, 0), bc(11, 0)]],
    [[bc(4, 1), bc(3, 5), bc(7, 5)], [bc(8, 1), bc(0, 0), bc(1, 5)], [bc(16, 1), bc(5, 0), bc(2, 0)]],
  ],
  [ // face 2
    [[bc(7, 0), bc(21, 0), bc(38, 0)], [bc(9, 0), bc(19, 0), bc(34, 3)], [bc(14, 1), bc(20, 3), bc(36, 3)]],
    [[bc(3, 0), bc(13, 5), bc(29, 5)], [bc(1, 0), bc(7, 0), bc(21, 0)], [bc(6, 1), bc(9, 0), bc(19, 0)]],
    [[bc(4, 2), bc(12, 5), bc(26, 5)], [bc(0, 1), bc(3, 0), bc(13, 5)], [bc(2, 1), bc(1, 0), bc(7, 0)]],
  ],
  [ // face 3
    [[bc(26, 0), bc(42, 0), bc(58, 0)], [bc(29, 0), bc(43, 0), bc(62, 3)], [bc(38, 1), bc(47, 3), bc(64, 3)]],
    [[bc(12, 0), bc(28, 5), bc(44, 5)], [bc(13, 0), bc(26, 0), bc(42, 0)], [bc(21, 1), bc(29, 0), bc(43, 0)]],
    [[bc(4, 3), bc(15, 5), bc(31, 5)], [bc(3, 1), bc(12, 0), bc(28, 5)], [bc(7, 1), bc(13, 0), bc(26, 0)]],
  ],
  [ // face 4
    [[bc(31, 0), bc(41, 0), bc(49, 0)], [bc(44, 0), bc(53, 0), bc(61, 3)], [bc(58, 1), bc(65, 3), bc(75, 3)]],
    [[bc(15, 0), bc(22, 5), bc(33, 5)], [bc(28, 0), bc(31, 0), bc(41, 0)], [bc(42, 1), bc(44, 0), bc(53, 0)]],
    [[bc(4, 4), bc(8, 5), bc(16, 5)], [bc(12, 1), bc(15, 0), bc(22, 5)], [bc(26, 1), bc(28, 0), bc(31, 0)]],
  ],
  [ // face 5
    [[bc(50, 0), bc(48, 0), bc(49, 3)], [bc(32, 0), bc(30, 3), bc(33, 3)], [bc(24, 3), bc(18, 3), bc(16, 3)]],
    [[bc(70, 0), bc(67, 0), bc(66, 3)], [bc(52, 3), bc(50, 0), bc(48, 0)], [bc(37, 3), bc(32, 0), bc(30, 3)]],
    [[bc(83, 0), bc(87, 3), bc(85, 3)], [bc(74, 3), bc(70, 0), bc(67, 0)], [bc(57, 1), bc(52, 3), bc(50, 0)]],
  ],
  [ // face 6
    [[bc(25, 0), bc(23, 0), bc(24, 3)], [bc(17, 0), bc(11, 3), bc(10, 3)], [bc(14, 3), bc(6, 3), bc(2, 3)]],
    [[bc(45, 0), bc(39, 0), bc(37, 3)], [bc(35, 3), bc(25, 0), bc(23, 0)], [bc(27, 3), bc(17, 0), bc(11, 3)]],
    [[bc(63, 0), bc(59, 3), bc(57, 3)], [bc(56, 3), bc(45, 0), bc(39, 0)], [bc(46, 3), bc(35, 3), bc(25, 0)]],
  ],
  [ // face 7
    [[bc(36, 0), bc(20, 0), bc(14, 3)], [bc(34, 0), bc(19, 3), bc(9, 3)], [bc(38, 3), bc(21, 3), bc(7, 3)]],
    [[bc(55, 0), bc(40, 0), bc(27, 3)], [bc(54, 3), bc(36, 0), bc(20, 0)], [bc(51, 3), bc(34, 0), bc(19, 3)]],
    [[bc(72, 0), bc(60, 3), bc(46, 3)], [bc(73, 3), bc(55, 0), bc(40, 0)], [bc(71, 3), bc(54, 3), bc(36, 0)]],
  ],
  [ // face 8
    [[bc(64, 0), bc(47, 0), bc(38, 3)], [bc(62, 0), bc(43, 3), bc(29, 3)], [bc(58, 3), bc(42, 3), bc(26, 3)]],
    [[bc(84, 0), bc(69, 0), bc(51, 3)], [bc(82, 3), bc(64, 0), bc(47, 0)], [bc(76, 3), bc(62, 0), bc(43, 3)]],
    [[bc(97, 0), bc(89, 3), bc(71, 3)], [bc(98, 3), bc(84, 0), bc(69, 0)], [bc(96, 3), bc(82, 3), bc(64, 0)]],
  ],
  [ // face 9
    [[bc(75, 0), bc(65, 0), bc(58, 3)], [bc(61, 0), bc(53, 3), bc(44, 3)], [bc(49, 3), bc(41, 3), bc(31, 3)]],
    [[bc(94, 0), bc(86, 0), bc(76, 3)], [bc(81, 3), bc(75, 0), bc(65, 0)], [bc(66, 3), bc(61, 0), bc(53, 3)]],
    [[bc(107, 0), bc(104, 3), bc(96, 3)], [bc(101, 3), bc(94, 0), bc(86, 0)], [bc(85, 3), bc(81, 3), bc(75, 0)]],
  ],
  [ // face 10
    [[bc(57, 0), bc(59, 0), bc(63, 3)], [bc(74, 0), bc(78, 3), bc(79, 3)], [bc(83, 3), bc(92, 3), bc(95, 3)]],
    [[bc(37, 0), bc(39, 3), bc(45, 3)], [bc(52, 0), bc(57, 0), bc(59, 0)], [bc(70, 3), bc(74, 0), bc(78, 3)]],
    [[bc(24, 0), bc(23, 3), bc(25, 3)], [bc(32, 3), bc(37, 0), bc(39, 3)], [bc(50, 3), bc(52, 0), bc(57, 0)]],
  ],
  [ // face 11
    [[bc(46, 0), bc(60, 0), bc(72, 3)], [bc(56, 0), bc(68, 3), bc(80, 3)], [bc(63, 3), bc(77, 3), bc(90, 3)]],
    [[bc(27, 0), bc(40, 3), bc(55, 3)], [bc(35, 0), bc(46, 0), bc(60, 0)], [bc(45, 3), bc(56, 0), bc(68, 3)]],
    [[bc(14, 0), bc(20, 3), bc(36, 3)], [bc(17, 3), bc(27, 0), bc(40, 3)], [bc(25, 3), bc(35, 0), bc(46, 0)]],
  ],
  [ // face 12
    [[bc(71, 0), bc(89, 0), bc(97, 3)], [bc(73, 0), bc(91, 3), bc(103, 3)], [bc(72, 3), bc(88, 3), bc(105, 3)]],
    [[bc(51, 0), bc(69, 3), bc(84, 3)], [bc(54, 0), bc(71, 0), bc(89, 0)], [bc(55, 3), bc(73, 0), bc(91, 3)]],
    [[bc(38, 0), bc(47, 3), bc(64, 3)], [bc(34, 3), bc(51, 0), bc(69, 3)], [bc(36, 3), bc(54, 0), bc(71, 0)]],
  ],
  [ // face 13
    [[bc(96, 0), bc(104, 0), bc(107, 3)], [bc(98, 0), bc(110, 3), bc(115, 3)], [bc(97, 3), bc(111, 3), bc(119, 3)]],
    [[bc(76, 0), bc(86, 3), bc(94, 3)], [bc(82, 0), bc(96, 0), bc(104, 0)], [bc(84, 3), bc(98, 0), bc(110, 3)]],
    [[bc(58, 0), bc(65, 3), bc(75, 3)], [bc(62, 3), bc(76, 0), bc(86, 3)], [bc(64, 3), bc(82, 0), bc(96, 0)]],
  ],
  [ // face 14
    [[bc(85, 0), bc(87, 0), bc(83, 3)], [bc(101, 0), bc(102, 3), bc(100, 3)], [bc(107, 3), bc(112, 3), bc(114, 3)]],
    [[bc(66, 0), bc(67, 3), bc(70, 3)], [bc(81, 0), bc(85, 0), bc(87, 0)], [bc(94, 3), bc(101, 0), bc(102, 3)]],
    [[bc(49, 0), bc(48, 3), bc(50, 3)], [bc(61, 3), bc(66, 0), bc(67, 3)], [bc(75, 3), bc(81, 0), bc(85, 0)]],
  ],
  [ // face 15
    [[bc(95, 0), bc(92, 0), bc(83, 0)], [bc(79, 0), bc(78, 0), bc(74, 3)], [bc(63, 1), bc(59, 3), bc(57, 3)]],
    [[bc(109, 0), bc(108, 0), bc(100, 5)], [bc(93, 1), bc(95, 0), bc(92, 0)], [bc(77, 1), bc(79, 0), bc(78, 0)]],
    [[bc(117, 4), bc(118, 5), bc(114, 5)], [bc(106, 1), bc(109, 0), bc(108, 0)], [bc(90, 1), bc(93, 1), bc(95, 0)]],
  ],
  [ // face 16
    [[bc(90, 0), bc(77, 0), bc(63, 0)], [bc(80, 0), bc(68, 0), bc(56, 3)], [bc(72, 1), bc(60, 3), bc(46, 3)]],
    [[bc(106, 0), bc(93, 0), bc(79, 5)], [bc(99, 1), bc(90, 0), bc(77, 0)], [bc(88, 1), bc(80, 0), bc(68, 0)]],
    [[bc(117, 3), bc(109, 5), bc(95, 5)], [bc(113, 1), bc(106, 0), bc(93, 0)], [bc(105, 1), bc(99, 1), bc(90, 0)]],
  ],
  [ // face 17
    [[bc(105, 0), bc(88, 0), bc(72, 0)], [bc(103, 0), bc(91, 0), bc(73, 3)], [bc(97, 1), bc(89, 3), bc(71, 3)]],
    [[bc(113, 0), bc(99, 0), bc(80, 5)], [bc(116, 1), bc(105, 0), bc(88, 0)], [bc(111, 1), bc(103, 0), bc(91, 0)]],
    [[bc(117, 2), bc(106, 5), bc(90, 5)], [bc(121, 1), bc(113, 0), bc(99, 0)], [bc(119, 1), bc(116, 1), bc(105, 0)]],
  ],
  [ // face 18
    [[bc(119, 0), bc(111, 0), bc(97, 0)], [bc(115, 0), bc(110, 0), bc(98, 3)], [bc(107, 1), bc(104, 3), bc(96, 3)]],
    [[bc(121, 0), bc(116, 0), bc(103, 5)], [bc(120, 1), bc(119, 0), bc(111, 0)], [bc(112, 1), bc(115, 0), bc(110, 0)]],
    [[bc(117, 1), bc(113, 5), bc(105, 5)], [bc(118, 1), bc(121, 0), bc(116, 0)], [bc(114, 1), bc(120, 1), bc(119, 0)]],
  ],
  [ // face 19
    [[bc(114, 0), bc(112, 0), bc(107, 0)], [bc(100, 0), bc(102, 0), bc(101, 3)], [bc(83, 1), bc(87, 3), bc(85, 3)]],
    [[bc(118, 0), bc(120, 0), bc(115, 5)], [bc(108, 1), bc(114, 0), bc(112, 0)], [bc(92, 1), bc(100, 0), bc(102, 0)]],
    [[bc(117, 0), bc(121, 5), bc(119, 5)], [bc(109, 1), bc(118, 0), bc(120, 0)], [bc(95, 1), bc(108, 1), bc(114, 0)]],
  ],
];

/// Whether the base cell number names one of the 12 pentagons.
#[inline]
#[must_use]
pub(crate) fn is_pentagon(base_cell: i32) -> bool {
  if base_cell < 0 || base_cell >= NUM_BASE_CELLS {
    return false;
  }
  BASE_CELL_DATA[base_cell as usize].pentagon
}

/// Whether `test_face` is one of the pentagon's clockwise offset faces.
#[inline]
#[must_use]
pub(crate) fn is_cw_offset_face(base_cell: i32, test_face: i32) -> bool {
  if base_cell < 0 || base_cell >= NUM_BASE_CELLS {
    return false;
  }
  let data = &BASE_CELL_DATA[base_cell as usize];
  data.pentagon && (data.cw_offset_faces[0] == test_face || data.cw_offset_faces[1] == test_face)
}

/// The home face address for a base cell, or `None` for an out-of-range
/// number.
#[inline]
#[must_use]
pub(crate) fn home_fijk(base_cell: i32) -> Option<FaceIJK> {
  if base_cell < 0 || base_cell >= NUM_BASE_CELLS {
    return None;
  }
  Some(BASE_CELL_DATA[base_cell as usize].home)
}

#[inline]
fn lookup(fijk: &FaceIJK) -> Option<&'static BaseCellOrient> {
  let CoordIJK { i, j, k } = fijk.coord;
  if fijk.face < 0
    || fijk.face >= NUM_ICOSA_FACES
    || !(0..=MAX_FACE_COORD).contains(&i)
    || !(0..=MAX_FACE_COORD).contains(&j)
    || !(0..=MAX_FACE_COORD).contains(&k)
  {
    return None;
  }
  Some(&FACE_IJK_TO_BASE_CELL[fijk.face as usize][i as usize][j as usize][k as usize])
}

/// The base cell at a resolution-0 face address, or `INVALID_BASE_CELL`
/// when the address is off the table.
#[inline]
#[must_use]
pub(crate) fn face_ijk_to_base_cell(fijk: &FaceIJK) -> i32 {
  lookup(fijk).map_or(INVALID_BASE_CELL, |o| o.base_cell)
}

/// The number of 60-degree ccw rotations from the face's coordinate system
/// into the base cell's own orientation at that address.
#[inline]
#[must_use]
pub(crate) fn face_ijk_to_ccw_rot60(fijk: &FaceIJK) -> i32 {
  lookup(fijk).map_or(INVALID_ROTATIONS, |o| o.ccw_rot60)
}
