//! English month names.

const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Month number (1-12) for a full English month name, ignoring case.
pub fn month_number(name: &str) -> Option<i64> {
    let name = name.to_lowercase();
    MONTH_NAMES
        .iter()
        .position(|candidate| *candidate == name)
        .map(|index| index as i64 + 1)
}

/// Full English month name, capitalised, for a month number (1-12).
pub fn month_name(number: i64) -> Option<String> {
    let index = usize::try_from(number).ok()?.checked_sub(1)?;
    let name = MONTH_NAMES.get(index)?;
    let mut chars = name.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
}
