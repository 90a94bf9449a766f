/// Suffix marking a possessive entry, as found in system dictionaries.
pub const POSSESSIVE_SUFFIX: &str = "'s";

/// Drop possessive entries, keeping everything else in its original order.
pub fn filter_possessives<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    lines
        .into_iter()
        .map(Into::into)
        .filter(|line| !line.ends_with(POSSESSIVE_SUFFIX))
        .collect()
}
