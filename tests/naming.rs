use chemlab::*;

#[test]
fn test_documented_examples() {
    init_logging("debug");
    let cases = [
        ("C3H8", "Propane"),
        ("C2H4", "Ethene"),
        ("C2H2", "Ethyne"),
        ("HCOOH", "Methanoic acid"),
        ("HCO2H", "Methanoic acid"),
        ("C3H7OH", "1-propanol"),
        ("CH3OH", "Methanol"),
        ("CH3COOH", "Ethanoic acid"),
        ("C3H7COOR", "Butoate"),
        ("C2H4O", "Ethal"),
        ("XYZ", "Invalid structure"),
        ("C3H99", "Invalid structure"),
    ];
    for (formula, expected) in cases {
        assert_eq!(name_compound(formula), expected, "naming {}", formula);
    }
}

#[test]
fn test_long_chains() {
    assert_eq!(name_compound("C20H42"), "Icosane");
    assert_eq!(name_compound("C1000H2002"), "Deccentane");
    assert_eq!(
        name_compound("C1001H2004"),
        "Structure too complex for current naming logic."
    );
    // Acids count the carboxyl carbon, pushing 1000 backbone carbons over the limit.
    assert_eq!(
        name_compound("C1000H2001COOH"),
        "Structure too complex for current naming logic."
    );
}

#[test]
fn test_oversized_digit_groups_are_too_complex() {
    assert_eq!(
        name_compound("C99999999999999999999999H4"),
        "Structure too complex for current naming logic."
    );
    assert_eq!(
        name_compound("C3000H99999999999999999999999"),
        "Structure too complex for current naming logic."
    );
    assert_eq!(name_compound("C3H99999999999999999999999"), "Invalid structure");
}

#[test]
fn test_case_sensitive_classification() {
    assert_eq!(classify("c3h8").group(), FunctionalGroup::Unavailable);
    assert_eq!(name(&classify("c3h8")), "Invalid structure");
    // The entry point normalizes before classifying.
    assert_eq!(name_compound("c3h8"), "Propane");
}

#[test]
fn test_ketone_is_named_but_never_classified() {
    let acetone = CompoundDescriptor::new(FunctionalGroup::Ketone, 3);
    assert_eq!(name(&acetone), "Propone");
    assert_eq!(classify("C3H6O").group(), FunctionalGroup::Aldehyde);
}

#[test]
fn test_batch_round() {
    let input = "formula\nC4H10\n c5h10 \nC3H7OH\n";
    let mut output = Vec::new();
    let summary = name_table(input.as_bytes(), &mut output, 0, false).unwrap();
    assert_eq!(summary.named, 3);
    let written = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(
        lines,
        [
            "formula,iupac_name",
            "C4H10,Butane",
            "C5H10,Pentene",
            "C3H7OH,1-propanol"
        ]
    );
}
