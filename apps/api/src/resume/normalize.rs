/// Trims every line and drops the ones left empty. Order is preserved and no
/// other transformation is applied.
pub fn normalize_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}
