use crate::calendar::MonthKey;

pub const MONTH_NAMES: [&str; 12] = [
    "Januari", "Februari", "Maart", "April", "Mei", "Juni",
    "Juli", "Augustus", "September", "Oktober", "November", "December",
];

/// Column headers, Monday first.
pub const DAY_ABBREVIATIONS: [&str; 7] = ["M", "D", "W", "D", "V", "Z", "Z"];

pub const EMPTY_MESSAGE: &str = "Geen evenementen of maanden voor weergave gevonden.";

pub const LOAD_ERROR_MESSAGE: &str = "Kon kalender niet laden.";

pub fn month_title(key: MonthKey) -> String {
    let name = MONTH_NAMES
        .get(key.month() as usize - 1)
        .copied()
        .unwrap_or_default();
    format!("{} {}", name, key.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_title_uses_dutch_names() {
        assert_eq!(month_title(MonthKey::new(2024, 3).unwrap()), "Maart 2024");
        assert_eq!(month_title(MonthKey::new(2025, 12).unwrap()), "December 2025");
    }
}
