//! Weather phenomena codes (`-TSRA`, `+SHSN`, `VCFG`).
//!
//! A code is an optional intensity sign, up to two descriptors from a fixed
//! set, then phenomena, all as two-letter groups. Segmentation is greedy and
//! positional; a trailing odd letter is dropped.

use wxgloss_foundation::Locale;
use wxgloss_lexicon::{LexiconSet, LexiconTable, Localizer};

use crate::format::gloss;

/// Codes that may appear in descriptor position.
pub const DESCRIPTORS: [&str; 9] = ["MI", "PR", "BC", "DR", "BL", "SH", "TS", "FZ", "VC"];

const MAX_DESCRIPTORS: usize = 2;

/// One weather code split into its segments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WeatherCode {
    /// The code, uppercased.
    pub code: String,
    /// `-` or `+`; moderate intensity has no sign.
    pub intensity: Option<char>,
    /// Descriptor groups, in order.
    pub descriptors: Vec<String>,
    /// Phenomenon groups, in order.
    pub phenomena: Vec<String>,
}

impl WeatherCode {
    /// Splits a weather token into segments.
    #[must_use]
    pub fn parse(token: &str) -> Self {
        let code = token.trim().to_uppercase();
        let chars: Vec<char> = code.chars().collect();
        let mut index = 0;

        let intensity = match chars.first() {
            Some(&sign @ ('-' | '+')) => {
                index += 1;
                Some(sign)
            }
            _ => None,
        };

        let pair_at = |at: usize| -> Option<String> {
            chars.get(at..at + 2).map(|pair| pair.iter().collect())
        };

        let mut descriptors = Vec::new();
        while descriptors.len() < MAX_DESCRIPTORS {
            match pair_at(index) {
                Some(pair) if DESCRIPTORS.contains(&pair.as_str()) => {
                    descriptors.push(pair);
                    index += 2;
                }
                _ => break,
            }
        }

        let mut phenomena = Vec::new();
        while let Some(pair) = pair_at(index) {
            phenomena.push(pair);
            index += 2;
        }

        Self {
            code,
            intensity,
            descriptors,
            phenomena,
        }
    }

    /// Lexicon texts of every segment that resolves, in order.
    #[must_use]
    pub fn meanings<'a>(&self, lexicons: &'a LexiconSet, locale: Locale) -> Vec<&'a str> {
        let mut out = Vec::new();
        if let Some(sign) = self.intensity {
            let mut buf = [0u8; 4];
            let code = sign.encode_utf8(&mut buf);
            out.extend(lexicons.lookup(LexiconTable::WeatherIntensity, code, locale));
        }
        for code in &self.descriptors {
            out.extend(lexicons.lookup(LexiconTable::WeatherDescriptor, code, locale));
        }
        for code in &self.phenomena {
            out.extend(lexicons.lookup(LexiconTable::WeatherPhenomenon, code, locale));
        }
        out
    }
}

/// `-TSRA (light thunderstorm rain)`, or the bare code when no segment
/// resolves.
#[must_use]
pub fn explain_weather(token: &str, lexicons: &LexiconSet, loc: &dyn Localizer) -> String {
    let parsed = WeatherCode::parse(token);
    let meanings = parsed.meanings(lexicons, loc.locale());
    if meanings.is_empty() {
        tracing::debug!(code = %parsed.code, "weather code has no resolvable segment");
        return parsed.code;
    }
    gloss(loc, &parsed.code, &meanings.join(" "))
}

/// Every weather token explained, joined with `, `.
#[must_use]
pub fn explain_weather_list(
    tokens: &[String],
    lexicons: &LexiconSet,
    loc: &dyn Localizer,
) -> String {
    tokens
        .iter()
        .map(|token| explain_weather(token, lexicons, loc))
        .collect::<Vec<_>>()
        .join(", ")
}
