//! Splitting a raw line into fields.

/// One row: the fields of a single line, in order.
pub type Row = Vec<String>;

/// Split `line` on every non-overlapping occurrence of `separator`.
///
/// The separator is a literal substring; there is no quoting or escaping.
/// The result is never empty: a line without the separator, including the
/// empty line, yields a single field holding the whole line. An empty
/// separator splits the line into its individual characters.
pub fn split_fields(line: &str, separator: &str) -> Row {
    if separator.is_empty() {
        if line.is_empty() {
            return vec![String::new()];
        }
        return line.chars().map(String::from).collect();
    }
    line.split(separator).map(str::to_owned).collect()
}
