use chrono::{Month, NaiveDate};

/// A month with its German name and the short spellings found in running text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthEntry {
    pub month: Month,
    pub name: &'static str,
    pub variants: &'static [&'static str],
}

impl MonthEntry {
    /// Return true when `day` exists in this month of a leap year.
    pub fn has_day(&self, day: u32) -> bool {
        NaiveDate::from_ymd_opt(2000, self.month.number_from_month(), day).is_some()
    }
}

pub static MONTHS: [MonthEntry; 12] = [
    MonthEntry { month: Month::January, name: "januar", variants: &["jan", "jänner"] },
    MonthEntry { month: Month::February, name: "februar", variants: &["feb", "febr"] },
    MonthEntry { month: Month::March, name: "märz", variants: &["mär", "mar", "maerz"] },
    MonthEntry { month: Month::April, name: "april", variants: &["apr"] },
    MonthEntry { month: Month::May, name: "mai", variants: &["may"] },
    MonthEntry { month: Month::June, name: "juni", variants: &["jun"] },
    MonthEntry { month: Month::July, name: "juli", variants: &["jul"] },
    MonthEntry { month: Month::August, name: "august", variants: &["aug"] },
    MonthEntry { month: Month::September, name: "september", variants: &["sep", "sept"] },
    MonthEntry { month: Month::October, name: "oktober", variants: &["okt", "oct"] },
    MonthEntry { month: Month::November, name: "november", variants: &["nov"] },
    MonthEntry { month: Month::December, name: "dezember", variants: &["dez", "dec"] },
];

/// Month for a 1-based month number.
pub fn month_by_number(number: u32) -> Option<&'static MonthEntry> {
    let month = Month::try_from(u8::try_from(number).ok()?).ok()?;
    MONTHS.iter().find(|entry| entry.month == month)
}

/// Words after which a bare number is read as a year.
pub static YEAR_MARKERS: &[&str] = &[
    "jahr",
    "jahre",
    "jahren",
    "jahres",
    "jahrs",
    "frühjahr",
    "frühling",
    "sommer",
    "herbst",
    "winter",
    "ostern",
    "pfingsten",
    "weihnachten",
    "semester",
    "geboren",
    "gestorben",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_numbers_map_to_names() {
        let cases: Vec<(Option<&str>, u32)> = vec![
            (Some("januar"), 1),
            (Some("april"), 4),
            (Some("dezember"), 12),
            (None, 0),
            (None, 13),
            (None, 300),
        ];

        for (expected, number) in cases {
            assert_eq!(month_by_number(number).map(|m| m.name), expected, "month number {number}");
        }
    }

    #[test]
    fn day_validity_follows_the_calendar() {
        let feb = month_by_number(2).unwrap();
        let apr = month_by_number(4).unwrap();
        let dec = month_by_number(12).unwrap();

        assert!(feb.has_day(29));
        assert!(!feb.has_day(30));
        assert!(!apr.has_day(31));
        assert!(dec.has_day(31));
        assert!(!dec.has_day(0));
    }
}
