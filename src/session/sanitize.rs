/// Turn a feature name into a filename-safe token.
///
/// ASCII letters and digits are lower-cased, `-` and `_` are kept, anything
/// else becomes `_`. The token has one char per input char.
pub fn sanitize_feature(feature: &str) -> String {
    feature
        .chars()
        .map(|c| match c {
            c if c.is_ascii_alphanumeric() => c.to_ascii_lowercase(),
            '-' | '_' => c,
            _ => '_',
        })
        .collect()
}
