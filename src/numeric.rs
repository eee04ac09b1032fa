//! Mixed-precision helpers used across the project.
//!
//! Native `f32` arithmetic already rounds after every operation, so the
//! 32-bit path needs no wrapper types: it only needs explicit narrowing from
//! `f64`, the client's float-to-int truncation and the table-driven sine and
//! cosine. Callers are responsible for keeping the operation grouping of the
//! client; `(a * b) / c` and `a * (b / c)` round differently.

use once_cell::sync::Lazy;

/// Number of entries in the sine table.
pub const SIN_TABLE_LEN: usize = 65_536;

/// Scale from radians to table index (`65536 / 2π` as the client rounds it).
const RADIANS_TO_INDEX: f32 = 10_430.378;

/// Index offset turning the sine table into a cosine table.
const QUARTER_TURN_INDEX: f32 = 16_384.0;

const INDEX_MASK: i32 = 0xFFFF;

static SIN_TABLE: Lazy<Box<[f32; SIN_TABLE_LEN]>> = Lazy::new(build_sin_table);

fn build_sin_table() -> Box<[f32; SIN_TABLE_LEN]> {
    let mut table = Box::new([0.0_f32; SIN_TABLE_LEN]);
    for (i, slot) in (0_u32..).zip(table.iter_mut()) {
        *slot = round32((f64::from(i) * std::f64::consts::PI * 2.0 / 65_536.0).sin());
    }
    table
}

/// Round a `f64` to the nearest `f32`.
///
/// This is the single narrowing point of the crate; every quantity the client
/// keeps as a float passes through here when it is derived from a double.
#[expect(
    clippy::cast_possible_truncation,
    reason = "Narrowing to f32 is the purpose of this helper."
)]
#[must_use]
pub fn round32(value: f64) -> f32 {
    value as f32
}

/// Convert a float to an `i32` the way a Java `(int)` cast does.
///
/// Truncates toward zero, saturates at the `i32` bounds and maps NaN to zero.
/// Rust's `as` conversion has exactly these semantics.
#[expect(
    clippy::cast_possible_truncation,
    reason = "Saturating truncation mirrors the client's integer cast."
)]
#[must_use]
pub fn java_f2i(value: f32) -> i32 {
    value as i32
}

/// Floor a block-space coordinate to the containing cell index.
///
/// Out-of-range values clamp to the `i32` bounds; NaN maps to zero.
#[expect(
    clippy::cast_possible_truncation,
    reason = "The value is clamped to the i32 bounds before casting."
)]
#[must_use]
pub fn block_coord(value: f64) -> i32 {
    let floored = value.floor();
    let clamped = floored.clamp(f64::from(i32::MIN), f64::from(i32::MAX));
    clamped as i32
}

#[expect(
    clippy::cast_sign_loss,
    reason = "Masking with 0xFFFF leaves a non-negative index."
)]
#[expect(
    clippy::indexing_slicing,
    reason = "The index is masked into the table length."
)]
fn table_lookup(raw_index: i32) -> f32 {
    SIN_TABLE[(raw_index & INDEX_MASK) as usize]
}

/// Table-driven sine of an angle in radians.
///
/// # Examples
/// ```
/// use blockmotion::numeric::sin32;
/// assert_eq!(sin32(0.0), 0.0);
/// assert_eq!(sin32(std::f32::consts::FRAC_PI_2), 1.0);
/// ```
#[must_use]
pub fn sin32(angle: f32) -> f32 {
    table_lookup(java_f2i(angle * RADIANS_TO_INDEX))
}

/// Table-driven cosine of an angle in radians.
///
/// The lookup shares the sine table, shifted by a quarter turn after the
/// `f32` multiply.
#[must_use]
pub fn cos32(angle: f32) -> f32 {
    table_lookup(java_f2i(angle * RADIANS_TO_INDEX + QUARTER_TURN_INDEX))
}

/// Force construction of the sine table.
///
/// The table is otherwise built lazily on first use; engines call this at
/// construction so the first tick does not pay for it.
pub fn warm_trig_table() {
    Lazy::force(&SIN_TABLE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn table_entries_are_rounded_to_f32() {
        warm_trig_table();
        for i in [0_i32, 1, 4_096, 16_384, 32_768, 49_152, 65_535] {
            let expected =
                round32((f64::from(i) * std::f64::consts::PI * 2.0 / 65_536.0).sin());
            assert_eq!(table_lookup(i).to_bits(), expected.to_bits());
        }
    }

    #[rstest]
    #[case(0.0, 0.0, 1.0)]
    #[case(std::f32::consts::FRAC_PI_2, 1.0, 0.0)]
    #[case(std::f32::consts::PI, 0.0, -1.0)]
    fn cardinal_angles(#[case] angle: f32, #[case] sin: f32, #[case] cos: f32) {
        assert!((sin32(angle) - sin).abs() < 1.0e-3);
        assert!((cos32(angle) - cos).abs() < 1.0e-3);
    }

    #[test]
    fn negative_angles_truncate_toward_zero() {
        // -0.00005 * 10430.378 is about -0.52, which truncates to index 0
        // where flooring would wrap to 65535.
        assert_eq!(sin32(-0.000_05), 0.0);
        assert!(sin32(-0.000_2) < 0.0);
    }

    #[test]
    fn truncation_saturates_like_the_client() {
        assert_eq!(java_f2i(f32::NAN), 0);
        assert_eq!(java_f2i(3.0e10), i32::MAX);
        assert_eq!(java_f2i(-3.0e10), i32::MIN);
        assert_eq!(java_f2i(-1.9), -1);
    }

    #[rstest]
    #[case(-0.5, -1)]
    #[case(59.999, 59)]
    #[case(60.0, 60)]
    #[case(f64::MAX, i32::MAX)]
    fn block_coords_floor(#[case] value: f64, #[case] expected: i32) {
        assert_eq!(block_coord(value), expected);
    }
}
