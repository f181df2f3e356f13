pub const TEST_DATA_LEN: usize = 64;

/// The canonical input: every value of `0..64` exactly once.
#[rustfmt::skip]
pub const TEST_DATA: [i32; TEST_DATA_LEN] = [
    34, 23, 13,  7, 47,  4,  8, 50,
    49,  9,  6, 35, 53, 51, 42, 11,
    22, 63,  3, 25, 39,  2, 10, 18,
    38, 30, 61, 46, 32, 28, 17, 54,
    48, 12,  1, 21, 56, 55, 57, 16,
    44,  0, 36, 40, 62, 43, 58, 15,
    60, 14, 19, 26, 52, 41, 59, 29,
    33, 45, 31, 24, 27,  5, 37, 20,
];
