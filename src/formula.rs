//! Classification of condensed molecular formulas.
//!
//! A formula is matched against an ordered list of fixed shapes. Every shape
//! starts with a carbon/hydrogen backbone (`C<n>H<m>`, where a missing carbon
//! count means one carbon) followed by a shape-specific tail. The first shape
//! that consumes the whole formula decides the functional group.

use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, digit1},
    combinator::{all_consuming, map, opt},
    error::VerboseError,
    sequence::{preceded, terminated},
    IResult,
};
use tracing::{debug, trace};

use crate::FunctionalGroup;

type Error<'a> = VerboseError<&'a str>;
type Res<'a, T> = IResult<&'a str, T, Error<'a>>;

/// Formic acid spellings. Formic acid has no backbone the shapes below can express.
const FORMIC_ACID: [&str; 2] = ["HCOOH", "HCO2H"];

/// Alkanols longer than this get the primary-alcohol locant.
const ALKANOL_LOCANT_THRESHOLD: u64 = 2;
const PRIMARY_ALCOHOL_LOCANT: u32 = 1;

/// The structural reading of a formula, handed from the classifier to the namer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompoundDescriptor {
    group: FunctionalGroup,
    carbon_count: u64,
    position: Option<u32>,
}

impl CompoundDescriptor {
    pub fn new(group: FunctionalGroup, carbon_count: u64) -> Self {
        Self {
            group,
            carbon_count,
            position: None,
        }
    }

    /// A descriptor for a formula whose structure could not be read.
    /// The carbon count is kept so oversized formulas still report as too complex.
    pub fn unavailable(carbon_count: u64) -> Self {
        Self::new(FunctionalGroup::Unavailable, carbon_count)
    }

    pub fn with_position(mut self, locant: u32) -> Self {
        self.position = Some(locant);
        self
    }

    pub fn group(&self) -> FunctionalGroup {
        self.group
    }

    pub fn carbon_count(&self) -> u64 {
        self.carbon_count
    }

    pub fn use_position(&self) -> bool {
        self.position.is_some()
    }

    pub fn position_marker(&self) -> Option<u32> {
        self.position
    }
}

/// Carbon and hydrogen counts read from the front of a formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Backbone {
    carbons: u64,
    hydrogens: u64,
}

/// A run of digits. Counts too large for `u64` saturate, which keeps them
/// above the naming ceiling.
fn number(input: &str) -> Res<u64> {
    map(digit1, |digits: &str| digits.parse::<u64>().unwrap_or(u64::MAX))(input)
}

/// `C<n>H<m>` with `n` optional (defaults to 1) and `m` required.
fn backbone(input: &str) -> Res<Backbone> {
    let (input, carbons) = preceded(char('C'), opt(number))(input)?;
    let (input, hydrogens) = preceded(char('H'), number)(input)?;
    Ok((
        input,
        Backbone {
            carbons: carbons.unwrap_or(1),
            hydrogens,
        },
    ))
}

fn hydrocarbon_shape(input: &str) -> Res<Backbone> {
    all_consuming(backbone)(input)
}

fn alkanol_shape(input: &str) -> Res<Backbone> {
    all_consuming(terminated(backbone, tag("OH")))(input)
}

fn carboxylic_acid_shape(input: &str) -> Res<Backbone> {
    all_consuming(terminated(backbone, alt((tag("COOH"), tag("CO2H")))))(input)
}

/// `R` is the literal placeholder letter, not a wildcard.
fn ester_shape(input: &str) -> Res<Backbone> {
    all_consuming(terminated(backbone, alt((tag("COOR"), tag("CO2R")))))(input)
}

fn carbonyl_shape(input: &str) -> Res<Backbone> {
    all_consuming(terminated(backbone, char('O')))(input)
}

/// A descriptor for `group`, or `Unavailable` when the chain has no carbons.
fn counted(group: FunctionalGroup, carbon_count: u64) -> CompoundDescriptor {
    if carbon_count == 0 {
        CompoundDescriptor::unavailable(0)
    } else {
        CompoundDescriptor::new(group, carbon_count)
    }
}

fn saturation(backbone: Backbone) -> CompoundDescriptor {
    let Backbone { carbons, hydrogens } = backbone;
    if carbons == 0 {
        return CompoundDescriptor::unavailable(0);
    }
    let (c, h) = (carbons as u128, hydrogens as u128);
    let group = if h == 2 * c + 2 {
        FunctionalGroup::Alkane
    } else if h == 2 * c {
        FunctionalGroup::Alkene
    } else if h == 2 * c - 2 {
        FunctionalGroup::Alkyne
    } else {
        FunctionalGroup::Unavailable
    };
    CompoundDescriptor::new(group, carbons)
}

fn alkanol(backbone: Backbone) -> CompoundDescriptor {
    let descriptor = counted(FunctionalGroup::Alkanol, backbone.carbons);
    if descriptor.group.is_available() && backbone.carbons > ALKANOL_LOCANT_THRESHOLD {
        descriptor.with_position(PRIMARY_ALCOHOL_LOCANT)
    } else {
        descriptor
    }
}

/// The carboxyl carbon counts on top of the backbone.
fn carboxylic_acid(backbone: Backbone) -> CompoundDescriptor {
    counted(
        FunctionalGroup::AlkanoicAcid,
        backbone.carbons.saturating_add(1),
    )
}

fn ester(backbone: Backbone) -> CompoundDescriptor {
    counted(FunctionalGroup::Ester, backbone.carbons.saturating_add(1))
}

/// Aldehydes and ketones share the `C<n>H<m>O` shape and cannot be told apart
/// from a condensed formula. The carbonyl shape is read as an aldehyde; ketone
/// descriptors are only built explicitly.
fn carbonyl(backbone: Backbone) -> CompoundDescriptor {
    counted(FunctionalGroup::Aldehyde, backbone.carbons)
}

struct Rule {
    label: &'static str,
    shape: fn(&str) -> Res<Backbone>,
    build: fn(Backbone) -> CompoundDescriptor,
}

/// Evaluated top to bottom; the first shape that matches wins.
const RULES: &[Rule] = &[
    Rule {
        label: "hydrocarbon",
        shape: hydrocarbon_shape,
        build: saturation,
    },
    Rule {
        label: "alkanol",
        shape: alkanol_shape,
        build: alkanol,
    },
    Rule {
        label: "alkanoic acid",
        shape: carboxylic_acid_shape,
        build: carboxylic_acid,
    },
    Rule {
        label: "ester",
        shape: ester_shape,
        build: ester,
    },
    Rule {
        label: "carbonyl",
        shape: carbonyl_shape,
        build: carbonyl,
    },
];

/// Classifies an already trimmed, upper-cased formula.
///
/// Matching is case-sensitive: lowercase input never matches a shape.
pub fn classify(formula: &str) -> CompoundDescriptor {
    if FORMIC_ACID.contains(&formula) {
        debug!(formula, group = %FunctionalGroup::AlkanoicAcid, "formic acid");
        return CompoundDescriptor::new(FunctionalGroup::AlkanoicAcid, 1);
    }

    for rule in RULES {
        trace!(formula, shape = rule.label, "trying shape");
        if let Ok((_, backbone)) = (rule.shape)(formula) {
            let descriptor = (rule.build)(backbone);
            debug!(
                formula,
                shape = rule.label,
                group = %descriptor.group(),
                carbons = descriptor.carbon_count(),
                "matched shape"
            );
            return descriptor;
        }
    }

    debug!(formula, "no shape matched");
    CompoundDescriptor::unavailable(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::init_logging;
    use FunctionalGroup::*;

    fn check(formula: &str, group: FunctionalGroup, carbons: u64) {
        let descriptor = classify(formula);
        assert_eq!(descriptor.group(), group, "group of {}", formula);
        assert_eq!(descriptor.carbon_count(), carbons, "carbons of {}", formula);
    }

    #[test]
    fn test_hydrocarbons() {
        init_logging("trace");
        check("C3H8", Alkane, 3);
        check("CH4", Alkane, 1);
        check("C2H4", Alkene, 2);
        check("C2H2", Alkyne, 2);
        check("C10H22", Alkane, 10);
    }

    #[test]
    fn test_bad_saturation_keeps_carbons() {
        check("C3H99", Unavailable, 3);
        check("C2000H5", Unavailable, 2000);
    }

    #[test]
    fn test_formic_acid() {
        check("HCOOH", AlkanoicAcid, 1);
        check("HCO2H", AlkanoicAcid, 1);
    }

    #[test]
    fn test_alkanols() {
        let propanol = classify("C3H7OH");
        assert_eq!(propanol.group(), Alkanol);
        assert_eq!(propanol.carbon_count(), 3);
        assert!(propanol.use_position());
        assert_eq!(propanol.position_marker(), Some(1));

        let ethanol = classify("C2H5OH");
        assert_eq!(ethanol.group(), Alkanol);
        assert!(!ethanol.use_position());

        let methanol = classify("CH3OH");
        assert_eq!(methanol.carbon_count(), 1);
        assert_eq!(methanol.position_marker(), None);
    }

    #[test]
    fn test_acids_count_the_carboxyl_carbon() {
        check("CH3COOH", AlkanoicAcid, 2);
        check("C2H5CO2H", AlkanoicAcid, 3);
    }

    #[test]
    fn test_esters() {
        check("CH3COOR", Ester, 2);
        check("C2H5CO2R", Ester, 3);
        // Only the literal placeholder letter is accepted.
        check("CH3COOCH3", Unavailable, 0);
    }

    #[test]
    fn test_carbonyl_reads_as_aldehyde() {
        check("C2H4O", Aldehyde, 2);
        check("CH2O", Aldehyde, 1);
        check("C3H6O", Aldehyde, 3);
    }

    #[test]
    fn test_oversized_counts_saturate() {
        check("C99999999999999999999999H4", Unavailable, u64::MAX);
        check("C3000H99999999999999999999999", Unavailable, 3000);
        check("C99999999999999999999999H4OH", Alkanol, u64::MAX);
        check("C99999999999999999999999H4COOH", AlkanoicAcid, u64::MAX);
    }

    #[test]
    fn test_zero_carbons_are_unavailable() {
        check("C0H2", Unavailable, 0);
        check("C0H1OH", Unavailable, 0);
    }

    #[test]
    fn test_unmatched() {
        check("XYZ", Unavailable, 0);
        check("", Unavailable, 0);
        check("C3H8X", Unavailable, 0);
        check("C3", Unavailable, 0);
        check("c3h8", Unavailable, 0);
        check("C3h8", Unavailable, 0);
    }

    #[test]
    fn test_backbone_defaults() {
        let (rest, parsed) = backbone("CH4").unwrap();
        assert_eq!(rest, "");
        assert_eq!(
            parsed,
            Backbone {
                carbons: 1,
                hydrogens: 4
            }
        );
        assert!(backbone("C4").is_err());
    }
}
