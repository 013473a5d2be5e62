//! Static language, region and currency lists for the language & region settings page.

/// A selectable option: stable code plus display name and marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleOption {
    pub code: &'static str,
    pub name: &'static str,
    /// Flag emoji for languages/regions, currency symbol for currencies.
    pub marker: &'static str,
}

const fn opt(code: &'static str, name: &'static str, marker: &'static str) -> LocaleOption {
    LocaleOption { code, name, marker }
}

pub const LANGUAGES: &[LocaleOption] = &[
    opt("en", "English", "🇺🇸"),
    opt("es", "Español", "🇪🇸"),
    opt("fr", "Français", "🇫🇷"),
    opt("de", "Deutsch", "🇩🇪"),
    opt("it", "Italiano", "🇮🇹"),
    opt("pt", "Português", "🇵🇹"),
    opt("ja", "日本語", "🇯🇵"),
    opt("ko", "한국어", "🇰🇷"),
    opt("zh", "中文", "🇨🇳"),
];

pub const REGIONS: &[LocaleOption] = &[
    opt("US", "United States", "🇺🇸"),
    opt("CA", "Canada", "🇨🇦"),
    opt("GB", "United Kingdom", "🇬🇧"),
    opt("DE", "Germany", "🇩🇪"),
    opt("FR", "France", "🇫🇷"),
    opt("JP", "Japan", "🇯🇵"),
    opt("AU", "Australia", "🇦🇺"),
];

pub const CURRENCIES: &[LocaleOption] = &[
    opt("USD", "US Dollar", "$"),
    opt("EUR", "Euro", "€"),
    opt("GBP", "British Pound", "£"),
    opt("JPY", "Japanese Yen", "¥"),
    opt("CAD", "Canadian Dollar", "C$"),
    opt("AUD", "Australian Dollar", "A$"),
];

/// Find an option by code in one of the lists above.
pub fn find(list: &'static [LocaleOption], code: &str) -> Option<&'static LocaleOption> {
    list.iter().find(|o| o.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_option() {
        assert_eq!(find(LANGUAGES, "ja").map(|o| o.name), Some("日本語"));
        assert_eq!(find(CURRENCIES, "EUR").map(|o| o.marker), Some("€"));
        assert!(find(REGIONS, "IN").is_none());
    }
}
