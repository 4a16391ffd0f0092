#![forbid(unsafe_code)]

//! CLDR cardinal plural categories for integer counts.
//!
//! Covers a handful of rule families, each shared by several languages.
//! Counts are categorized by absolute value; fractional counts are the
//! caller's concern (the plural handler routes them to `other`).

/// CLDR plural category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    /// Case label used in message syntax (`one`, `few`, ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::One => "one",
            Self::Two => "two",
            Self::Few => "few",
            Self::Many => "many",
            Self::Other => "other",
        }
    }
}

/// Plural rule family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralRule {
    /// one: n = 1.
    English,
    /// one: n = 0 or 1.
    French,
    /// one / few / many by last digits.
    Russian,
    /// one: n = 1; few / many by last digits.
    Polish,
    /// zero / one / two / few / many / other.
    Arabic,
    /// No plural distinction.
    CJK,
}

impl PluralRule {
    /// Rule for a BCP 47 tag such as `en`, `pt-BR` or `zh_Hant`.
    ///
    /// Only the language subtag is considered. Unknown languages use
    /// [`PluralRule::English`].
    #[must_use]
    pub fn for_locale(locale: &str) -> Self {
        let language = locale
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match language.as_str() {
            "fr" | "pt" | "hy" | "kab" => Self::French,
            "ru" | "uk" | "be" | "sr" | "hr" | "bs" => Self::Russian,
            "pl" => Self::Polish,
            "ar" => Self::Arabic,
            "ja" | "zh" | "ko" | "vi" | "th" | "id" | "ms" | "lo" | "my" => Self::CJK,
            _ => Self::English,
        }
    }

    /// Category of the integer count `n`.
    #[must_use]
    pub fn categorize(self, n: i64) -> PluralCategory {
        let n = n.unsigned_abs();
        let (mod10, mod100) = (n % 10, n % 100);
        match self {
            Self::English => {
                if n == 1 {
                    PluralCategory::One
                } else {
                    PluralCategory::Other
                }
            }
            Self::French => {
                if n <= 1 {
                    PluralCategory::One
                } else {
                    PluralCategory::Other
                }
            }
            Self::Russian => {
                if mod10 == 1 && mod100 != 11 {
                    PluralCategory::One
                } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
                    PluralCategory::Few
                } else {
                    PluralCategory::Many
                }
            }
            Self::Polish => {
                if n == 1 {
                    PluralCategory::One
                } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
                    PluralCategory::Few
                } else {
                    PluralCategory::Many
                }
            }
            Self::Arabic => match n {
                0 => PluralCategory::Zero,
                1 => PluralCategory::One,
                2 => PluralCategory::Two,
                _ if (3..=10).contains(&mod100) => PluralCategory::Few,
                _ if (11..=99).contains(&mod100) => PluralCategory::Many,
                _ => PluralCategory::Other,
            },
            Self::CJK => PluralCategory::Other,
        }
    }
}
