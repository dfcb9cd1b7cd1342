//! Molecular formula to IUPAC name translation.
//!
//! A condensed formula such as `C3H8` is classified into a functional group
//! and carbon count ([`classify`]), then spelled as a systematic name
//! ([`name`]). [`name_compound`] runs both steps on raw user text.

mod group;
pub use group::*;

mod formula;
pub use formula::*;

mod prefix;
pub use prefix::*;

mod naming;
pub use naming::*;

mod input;
pub use input::*;

mod batch;
pub use batch::*;

mod logging;
pub use logging::*;

/// Names a formula typed by a user.
///
/// The text is trimmed and upper-cased first. Never fails: unreadable input
/// comes back as one of the diagnostic strings.
pub fn name_compound(raw: &str) -> String {
    let formula = raw.trim().to_ascii_uppercase();
    name(&classify(&formula))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_compound() {
        assert_eq!(name_compound("C3H8"), "Propane");
        assert_eq!(name_compound(" c2h4 "), "Ethene");
        assert_eq!(name_compound("C3H7OH"), "1-propanol");
        assert_eq!(name_compound("XYZ"), "Invalid structure");
    }

    #[test]
    fn test_deterministic() {
        for formula in ["C5H12", "C4H9COOH", "C3H7OH", "C3H99"] {
            assert_eq!(name_compound(formula), name_compound(formula));
        }
    }
}
