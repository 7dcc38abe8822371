use super::{IssueSeverity, StructuredIssue};
use crate::JsonPointer;

#[test]
fn issues_are_sorted_stably() {
    let mut issues = vec![
        StructuredIssue::new(
            "reference",
            IssueSeverity::Warning,
            "#/definitions/B".parse().expect("must parse"),
            "second",
        ),
        StructuredIssue::new("parse_error", IssueSeverity::Error, JsonPointer::root(), "first"),
    ];

    StructuredIssue::sort_stable(&mut issues);

    assert_eq!(issues[0].severity, IssueSeverity::Error);
    assert_eq!(issues[1].severity, IssueSeverity::Warning);
}

#[test]
fn display_includes_location_and_reference_code() {
    let issue = StructuredIssue::new(
        "reference",
        IssueSeverity::Warning,
        JsonPointer::from_keys(["definitions", "A", "properties"]),
        "dangling reference to `B`",
    )
    .with_reference("ref.dangling");

    assert_eq!(
        issue.to_string(),
        "[warning] reference at #/definitions/A/properties: dangling reference to `B` (ref.dangling)"
    );
}
