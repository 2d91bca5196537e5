use serde::{Deserialize, Serialize};

/// Display language of the landing page. Every user-visible string has a
/// French and an English rendition; French is the page default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Fr,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Fr, Language::En];

    /// Accepts bare codes and region-qualified tags (`fr-CA`, `en_US`).
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase();
        let primary = normalized
            .split(|ch| ch == '-' || ch == '_')
            .next()
            .unwrap_or_default();
        match primary {
            "fr" | "francais" | "français" | "french" => Some(Self::Fr),
            "en" | "english" | "anglais" => Some(Self::En),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::En => "en",
        }
    }

    /// The language the page switches to when the visitor hits the toggle.
    pub fn toggled(self) -> Self {
        match self {
            Language::Fr => Language::En,
            Language::En => Language::Fr,
        }
    }
}

/// Resolves an optional `lang` hint, keeping `default` when it is absent or unknown.
pub fn resolve_language(hint: Option<&str>, default: Language) -> Language {
    hint.and_then(Language::parse).unwrap_or(default)
}

/// Formats a Canadian-dollar amount the way each page language displays it:
/// `41 675 $` in French and `$41,675` in English. Whole amounts drop the cents.
pub fn format_cad(amount: f64, language: Language) -> String {
    let negative = amount < 0.0;
    let magnitude = amount.abs();
    let mut whole = magnitude.trunc();
    let mut fraction = ((magnitude - whole) * 100.0).round() as u8;
    if fraction >= 100 {
        whole += 1.0;
        fraction = 0;
    }

    let (group_separator, decimal_separator) = match language {
        Language::Fr => (' ', ','),
        Language::En => (',', '.'),
    };

    // f64 Display prints integral values without exponent or trailing `.0`.
    let mut digits = group_digits(&whole.to_string(), group_separator);
    if fraction != 0 {
        digits.push(decimal_separator);
        digits.push_str(&format!("{fraction:02}"));
    }

    let sign = if negative { "-" } else { "" };
    match language {
        Language::Fr => format!("{sign}{digits} $"),
        Language::En => format!("{sign}${digits}"),
    }
}

/// Formats a plain integer with the language's thousands separator.
pub fn format_integer(value: u64, language: Language) -> String {
    match language {
        Language::Fr => group_digits(&value.to_string(), ' '),
        Language::En => group_digits(&value.to_string(), ','),
    }
}

fn group_digits(raw: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(raw.len() + raw.len() / 3);
    for (idx, ch) in raw.chars().enumerate() {
        if idx > 0 && (raw.len() - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}
