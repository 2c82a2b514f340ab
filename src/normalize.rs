//! Canonicalize free text before comparison: strip diacritics, lowercase,
//! collapse whitespace.
//!
//! Example:
//!     input:  "  Backtracking  cu  Forward   Checking "
//!     output: "backtracking cu forward checking"
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Remove diacritics by NFD-decomposing and dropping combining marks
/// ("Stânga" -> "Stanga"). Case is left untouched.
pub fn strip_accents(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Full normalization: no diacritics, lowercase, runs of whitespace
/// collapsed to single spaces, trimmed. Total function: "" -> "".
///
/// Idempotent: `normalize(normalize(x)) == normalize(x)`.
pub fn normalize(text: &str) -> String {
    let lowered = strip_accents(text).to_lowercase();
    lowered.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_romanian_diacritics() {
        assert_eq!(normalize("Sânge"), "sange");
        assert_eq!(normalize("SÂNGE"), "sange");
        assert_eq!(normalize("sange"), "sange");
        assert_eq!(normalize("Stânga și Dreapta"), "stanga si dreapta");
    }

    #[test]
    fn collapses_whitespace_and_trims() {
        assert_eq!(normalize("  Nu   există \t drum \n"), "nu exista drum");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn normalization_is_idempotent() {
        for s in ["Backtracking cu Forward Checking", "  Știu   că-i A* ", "ĂÂÎȘȚ"] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once);
        }
    }
}
