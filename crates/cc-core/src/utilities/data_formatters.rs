//! Data formatting helpers.
//!
//! Ordinal words for the numbered Sundays of the catalog and the article
//! handling used when a weekday is named after the observance it follows.

const UNITS: [&str; 10] = [
    "", "First", "Second", "Third", "Fourth", "Fifth", "Sixth", "Seventh", "Eighth", "Ninth",
];

const TEENS: [&str; 10] = [
    "Tenth",
    "Eleventh",
    "Twelfth",
    "Thirteenth",
    "Fourteenth",
    "Fifteenth",
    "Sixteenth",
    "Seventeenth",
    "Eighteenth",
    "Nineteenth",
];

/// Return the capitalised English ordinal word for `n` in `1..=39`
/// (e.g. `3` → `"Third"`, `27` → `"Twenty-Seventh"`).
///
/// Returns `None` outside that range.
pub fn ordinal_word(n: u32) -> Option<String> {
    let word = match n {
        1..=9 => UNITS[n as usize].to_string(),
        10..=19 => TEENS[(n - 10) as usize].to_string(),
        20 => "Twentieth".to_string(),
        21..=29 => format!("Twenty-{}", UNITS[(n - 20) as usize]),
        30 => "Thirtieth".to_string(),
        31..=39 => format!("Thirty-{}", UNITS[(n - 30) as usize]),
        _ => return None,
    };
    Some(word)
}

/// Lower-case a leading definite article so a name can follow a
/// preposition: `"The Epiphany"` → `"the Epiphany"`.
pub fn lowercase_article(name: &str) -> String {
    match name.strip_prefix("The ") {
        Some(rest) => format!("the {rest}"),
        None => name.to_string(),
    }
}
