use std::fmt::{Display, Formatter, Result as FmtResult};

/// The functional group a formula was classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionalGroup {
    Alkane,
    Alkene,
    Alkyne,
    Alkanol,
    AlkanoicAcid,
    Ester,
    Aldehyde,
    Ketone,
    /// No structural pattern matched.
    Unavailable,
}

impl FunctionalGroup {
    /// The suffix appended to the carbon-count prefix, or `None` for `Unavailable`.
    pub fn suffix(&self) -> Option<&'static str> {
        use FunctionalGroup::*;
        Some(match self {
            Alkane => "ane",
            Alkene => "ene",
            Alkyne => "yne",
            Alkanol => "anol",
            AlkanoicAcid => "anoic acid",
            Ester => "oate",
            Aldehyde => "al",
            Ketone => "one",
            Unavailable => return None,
        })
    }

    pub fn is_available(&self) -> bool {
        !matches!(self, FunctionalGroup::Unavailable)
    }
}

impl Display for FunctionalGroup {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        use FunctionalGroup::*;
        let label = match self {
            Alkane => "alkane",
            Alkene => "alkene",
            Alkyne => "alkyne",
            Alkanol => "alkanol",
            AlkanoicAcid => "alkanoic acid",
            Ester => "ester",
            Aldehyde => "aldehyde",
            Ketone => "ketone",
            Unavailable => "unavailable",
        };
        write!(f, "{}", label)
    }
}
