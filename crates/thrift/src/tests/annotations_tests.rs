use crate::annotations::strip_js_type_annotations;
use std::borrow::Cow;

#[test]
fn strips_both_quoting_styles() {
    let source = "struct S {\n\
                  1: i64 a (js.type = \"Long\")\n\
                  2: i64 b (js.type = 'Long')\n\
                  }";
    assert_eq!(
        strip_js_type_annotations(source),
        "struct S {\n1: i64 a \n2: i64 b \n}",
    );
}

#[test]
fn unannotated_source_is_borrowed() {
    let source = "struct S { 1: i64 a }";
    assert!(matches!(strip_js_type_annotations(source), Cow::Borrowed(_)));
}

/// Only the exact spelling is removed.
#[test]
fn other_annotations_are_kept() {
    let source = "1: i64 a (js.type=\"Long\") (java.type = \"Long\")";
    assert_eq!(strip_js_type_annotations(source), source);
}
