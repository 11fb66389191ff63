//! Gamma correction table
//!
//! LEDs have a roughly linear electrical response, but human brightness
//! perception is closer to a power curve. Driving LED duty cycles with raw
//! linear values makes the low end look compressed and the high end
//! indistinguishable. This module holds a fixed 256-entry lookup table
//! approximating a perceptual gamma response (exponent ~2.6), shared by
//! [`gamma8`](crate::color::gamma8) and [`gamma32`](crate::color::gamma32).
//!
//! The table is immutable constant data: it lives in flash/rodata, needs no
//! initialization, and is safe to read from any context.

/// Precomputed gamma response curve
///
/// Maps a linear 8-bit brightness to a perceptually corrected one.
/// Monotonically non-decreasing, with `GAMMA8[0] == 0` and
/// `GAMMA8[255] == 255` so the endpoints (off, full on) are preserved.
pub const GAMMA8: [u8; 256] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, //
    0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, //
    1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 2, 2, 3, 3, 3, 3, //
    3, 3, 4, 4, 4, 4, 5, 5, 5, 5, 5, 6, 6, 6, 6, 7, //
    7, 7, 8, 8, 8, 9, 9, 9, 10, 10, 10, 11, 11, 11, 12, 12, //
    13, 13, 13, 14, 14, 15, 15, 16, 16, 17, 17, 18, 18, 19, 19, 20, //
    20, 21, 21, 22, 22, 23, 24, 24, 25, 25, 26, 27, 27, 28, 29, 29, //
    30, 31, 31, 32, 33, 34, 34, 35, 36, 37, 38, 38, 39, 40, 41, 42, //
    42, 43, 44, 45, 46, 47, 48, 49, 50, 51, 52, 53, 54, 55, 56, 57, //
    58, 59, 60, 61, 62, 63, 64, 65, 66, 68, 69, 70, 71, 72, 73, 75, //
    76, 77, 78, 80, 81, 82, 84, 85, 86, 88, 89, 90, 92, 93, 94, 96, //
    97, 99, 100, 102, 103, 105, 106, 108, 109, 111, 112, 114, 115, 117, 119, 120, //
    122, 124, 125, 127, 129, 130, 132, 134, 136, 137, 139, 141, 143, 145, 146, 148, //
    150, 152, 154, 156, 158, 160, 162, 164, 166, 168, 170, 172, 174, 176, 178, 180, //
    182, 184, 186, 188, 191, 193, 195, 197, 199, 202, 204, 206, 209, 211, 213, 215, //
    218, 220, 223, 225, 227, 230, 232, 235, 237, 240, 242, 245, 247, 250, 252, 255, //
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_preserved() {
        assert_eq!(GAMMA8[0], 0);
        assert_eq!(GAMMA8[255], 255);
    }

    #[test]
    fn test_monotonically_non_decreasing() {
        for pair in GAMMA8.windows(2) {
            assert!(pair[0] <= pair[1], "table decreases at {:?}", pair);
        }
    }
}
