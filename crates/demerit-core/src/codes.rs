//! # Violation Code Parsing
//!
//! Clients submit violation codes either as one comma-separated string
//! (`"Cheating,Plagiarism"`) or as a repeated form field. Each raw value
//! goes through [`parse_violation_codes`]; repeated fields are concatenated
//! by the caller.

/// Split a raw `violations` field into individual codes.
///
/// Codes are comma-separated; each segment is trimmed and empty segments
/// are dropped, so `""` and `","` both yield an empty list and `"A,,B"`
/// yields `["A", "B"]`.
pub fn parse_violation_codes(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_comma_separated_codes() {
        assert_eq!(
            parse_violation_codes("Cheating,Plagiarism"),
            vec!["Cheating", "Plagiarism"]
        );
        assert_eq!(parse_violation_codes("A,B,C"), vec!["A", "B", "C"]);
    }

    #[test]
    fn trims_whitespace_around_codes() {
        assert_eq!(
            parse_violation_codes(" Cheating , Plagiarism "),
            vec!["Cheating", "Plagiarism"]
        );
    }

    #[test]
    fn empty_field_yields_empty_list() {
        assert!(parse_violation_codes("").is_empty());
        assert!(parse_violation_codes(",").is_empty());
        assert!(parse_violation_codes("  ").is_empty());
    }

    #[test]
    fn empty_segments_are_dropped() {
        assert_eq!(parse_violation_codes("A,,B"), vec!["A", "B"]);
        assert_eq!(parse_violation_codes(",A,"), vec!["A"]);
    }

    #[test]
    fn single_code_without_commas() {
        assert_eq!(parse_violation_codes("Dress Code"), vec!["Dress Code"]);
    }
}
