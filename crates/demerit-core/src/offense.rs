//! # Offense Ordinal Derivation
//!
//! Maps a per-student offense count to the rank label attached to each
//! record ("1st", "2nd", "3rd", "4th", ...). The label reflects how many
//! records for the same student number exist once the new record is
//! appended: a student with no prior records is on their "1st" offense.

/// Return the ordinal label for the `nth` offense (1-based).
///
/// The first three ranks get proper suffixes; everything from the 4th
/// onward uses a plain `th` suffix. This matches the intake contract,
/// which maps prior counts 0/1/2/n≥3 to 1st/2nd/3rd/(n+1)th — including
/// labels like "21th" for high counts.
pub fn ordinal_label(nth: u32) -> String {
    match nth {
        1 => "1st".to_string(),
        2 => "2nd".to_string(),
        3 => "3rd".to_string(),
        n => format!("{n}th"),
    }
}
