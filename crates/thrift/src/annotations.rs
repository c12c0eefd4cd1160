//! Pre-processing for annotation syntax the parser does not model.

use std::borrow::Cow;

/// The `js.type` annotations that `thrift-to-json` removes before parsing,
/// in both quoting styles.
const JS_TYPE_ANNOTATIONS: [&str; 2] = [
    "(js.type = \"Long\")",
    "(js.type = 'Long')",
];

/// Removes every `(js.type = "Long")` / `(js.type = 'Long')` annotation.
///
/// Matching is exact, including the spaces around `=`. Sources without
/// annotations are returned unchanged without copying.
pub(crate) fn strip_js_type_annotations(source: &str) -> Cow<'_, str> {
    let mut stripped = Cow::Borrowed(source);
    for annotation in JS_TYPE_ANNOTATIONS {
        if stripped.contains(annotation) {
            stripped = Cow::Owned(stripped.replace(annotation, ""));
        }
    }
    stripped
}
