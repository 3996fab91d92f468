//! Tests for selection alignment classification.

use strictly_abalone::{classify, Axis, HexAddr, LineKind, RuleError, Side};

fn parse(s: &str) -> HexAddr {
    HexAddr::parse(s).unwrap()
}

#[test]
fn test_pairs_classify_exactly_when_collinear_and_close() {
    // A pair of distinct addresses is a group exactly when the cells share
    // a row letter or a column digit and sit at most two apart: adjacent
    // pairs stay pairs, span-two pairs become ranges of three.
    for a in HexAddr::all() {
        for b in HexAddr::all() {
            if a == b {
                continue;
            }
            let same_row = a.letter() == b.letter();
            let same_digit = a.digit() == b.digit();
            let span = if same_row {
                a.digit().abs_diff(b.digit())
            } else {
                a.row_index().abs_diff(b.row_index())
            };
            let expect_line = (same_row || same_digit) && span <= 2;

            let result = classify(Side::White, &[a, b]);
            assert_eq!(
                result.is_ok(),
                expect_line,
                "classify([{a}, {b}]) = {result:?}"
            );
            if let Ok(selection) = result {
                let expected_len = if span == 2 { 3 } else { 2 };
                assert_eq!(selection.len(), expected_len, "[{a}, {b}]");
            }
        }
    }
}

#[test]
fn test_triple_classification() {
    let sel = classify(Side::Black, &[parse("G5"), parse("G3"), parse("G4")]).unwrap();
    assert_eq!(sel.kind(), LineKind::Triple(Axis::Horizontal));
    assert_eq!(sel.cells(), &[parse("G3"), parse("G4"), parse("G5")]);
    assert_eq!(sel.derived_middle(), None);

    let sel = classify(Side::Black, &[parse("E5"), parse("F5"), parse("G5")]).unwrap();
    assert_eq!(sel.kind(), LineKind::Triple(Axis::Diagonal));
}

#[test]
fn test_endpoint_ranges_average_the_middle() {
    let sel = classify(Side::Black, &[parse("I5"), parse("G5")]).unwrap();
    assert_eq!(sel.kind(), LineKind::Triple(Axis::Diagonal));
    assert_eq!(sel.derived_middle(), Some(parse("H5")));

    let sel = classify(Side::White, &[parse("B2"), parse("B4")]).unwrap();
    assert_eq!(sel.derived_middle(), Some(parse("B3")));
}

#[test]
fn test_broken_lines_are_rejected() {
    let cases: &[&[&str]] = &[
        &["E4", "D5"],             // off both axes
        &["E4", "E7"],             // too wide for any group
        &["E4", "E5", "E7"],       // gap inside a triple
        &["E4", "E5", "D5"],       // bent line
        &["E4", "E5", "E6", "E7"], // too many marbles
    ];
    for case in cases {
        let addrs: Vec<_> = case.iter().map(|s| parse(s)).collect();
        assert_eq!(
            classify(Side::White, &addrs),
            Err(RuleError::MalformedSelection),
            "{case:?}"
        );
    }
}

#[test]
fn test_classification_is_pure() {
    let selection = [parse("C5"), parse("C7")];
    assert_eq!(
        classify(Side::White, &selection),
        classify(Side::White, &selection)
    );
}
