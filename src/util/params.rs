// Prefix commands take their arguments as one rest string; games care about how many words came in.
pub fn split_parameters(rest: Option<&str>) -> Vec<&str> {
    rest.map(|o| o.split_whitespace().collect())
        .unwrap_or_default()
}

/// Finds which accepted value an input names, comparing against each value's aliases.
pub fn match_alias<T: Copy>(input: &str, accepted: &[(T, &[&str])]) -> Option<T> {
    let input = input.trim();

    accepted.iter()
        .find(|(_, aliases)| aliases.iter().any(|a| a.eq_ignore_ascii_case(input)))
        .map(|(value, _)| *value)
}
