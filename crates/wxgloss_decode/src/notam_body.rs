//! NOTAM `E)` text vocabulary substitution.
//!
//! The body is walked token by token. Multi-word idioms are replaced as a
//! whole, a facility keyword keeps the designator that follows it, and every
//! other token is looked up with surrounding punctuation stripped. Tokens the
//! lexicon does not know pass through unchanged.

use std::sync::LazyLock;

use regex::{NoExpand, Regex};
use wxgloss_foundation::Locale;
use wxgloss_lexicon::{LexiconSet, LexiconTable};

static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)NR\.").expect("number regex"));

const NUMBER: &str = "NR.";

/// Phrases replaced by a single lexicon entry: `(words, lexicon code)`.
const IDIOMS: &[(&[&str], &str)] = &[
    (&["WORK", "IN", "PROGRESS"], "WIP"),
    (&["ACT", "ARE"], "ACT ARE"),
    (&["PARKING", "STAND"], "PARKING STAND"),
    (&["DUE", "TO"], "DUE TO"),
];

/// Keywords whose following token is a designator (`RWY 09L`).
const FACILITIES: [&str; 3] = ["RWY", "TWY", "APRON"];

const CLOSED: &str = "CLSD";

struct BodyMapper<'a> {
    lexicons: &'a LexiconSet,
    locale: Locale,
}

impl<'a> BodyMapper<'a> {
    fn resolve(&self, code: &str) -> Option<&'a str> {
        self.lexicons.lookup(LexiconTable::NotamBody, code, self.locale)
    }

    fn resolve_or_code(&self, code: &str) -> String {
        self.resolve(code).unwrap_or(code).to_string()
    }

    /// Maps one token, keeping punctuation around the vocabulary core.
    fn map_token(&self, token: &str) -> String {
        let upper = token.to_uppercase();
        if upper.contains(NUMBER) {
            let number = self.resolve_or_code(NUMBER);
            return NUMBER_RE.replace_all(token, NoExpand(&number)).into_owned();
        }

        let is_core = |c: char| c.is_alphanumeric() || c == '/';
        let Some(start) = token.find(is_core) else {
            return token.to_string();
        };
        let end = token.rfind(is_core).map_or(token.len(), |i| {
            i + token[i..].chars().next().map_or(1, char::len_utf8)
        });
        let (leading, core, trailing) = (&token[..start], &token[start..end], &token[end..]);

        match self.resolve(&core.to_uppercase()) {
            Some(text) => format!("{leading}{text}{trailing}"),
            None => token.to_string(),
        }
    }

    fn idiom_at(tokens: &[&str], at: usize) -> Option<(&'static str, usize)> {
        IDIOMS.iter().find_map(|(words, code)| {
            let window = tokens.get(at..at + words.len())?;
            window
                .iter()
                .zip(words.iter())
                .all(|(token, word)| token.eq_ignore_ascii_case(word))
                .then_some((*code, words.len()))
        })
    }

    fn map(&self, body: &str) -> String {
        let tokens: Vec<&str> = body.split_whitespace().collect();
        let mut out: Vec<String> = Vec::with_capacity(tokens.len());
        let mut i = 0;
        while i < tokens.len() {
            let token = tokens[i];

            if let Some((code, len)) = Self::idiom_at(&tokens, i) {
                out.push(self.resolve_or_code(code));
                i += len;
                continue;
            }

            let is_facility = FACILITIES.iter().any(|f| token.eq_ignore_ascii_case(f));
            if let (true, Some(target)) = (is_facility, tokens.get(i + 1)) {
                out.push(self.map_token(token));
                out.push((*target).to_string());
                i += 2;
                if let Some(next) = tokens.get(i).filter(|next| next.eq_ignore_ascii_case(CLOSED)) {
                    out.push(self.map_token(next));
                    i += 1;
                }
                continue;
            }

            out.push(self.map_token(token));
            i += 1;
        }
        out.join(" ")
    }
}

/// Strips a leading `E)` tag and surrounding whitespace.
#[must_use]
pub fn strip_item_tag(raw: &str) -> &str {
    let trimmed = raw.trim();
    match trimmed.get(..2) {
        Some(tag) if tag.eq_ignore_ascii_case("E)") => trimmed[2..].trim_start(),
        _ => trimmed,
    }
}

/// Maps a NOTAM body into plain language for `locale`.
#[must_use]
pub fn map_notam_body(raw: &str, lexicons: &LexiconSet, locale: Locale) -> String {
    let cleaned = strip_item_tag(raw);
    if cleaned.is_empty() {
        return String::new();
    }
    BodyMapper { lexicons, locale }.map(cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn en(raw: &str) -> String {
        map_notam_body(raw, &LexiconSet::builtin(), Locale::En)
    }

    #[test]
    fn maps_facility_with_designator() {
        assert_eq!(en("E) RWY 09L/27R CLSD"), "runway 09L/27R closed");
        assert_eq!(en("TWY A CLSD DUE TO WIP"), "taxiway A closed due to work in progress");
    }

    #[test]
    fn maps_idioms() {
        assert_eq!(en("WORK IN PROGRESS ON APRON"), "work in progress ON apron");
        assert_eq!(en("PARKING STAND 12 CLSD"), "parking stand 12 closed");
    }

    #[test]
    fn strips_punctuation_around_core() {
        assert_eq!(en("ILS U/S."), "ILS unserviceable.");
        assert_eq!(en("(RWY) CLSD)"), "(runway) closed)");
        assert_eq!(en("AD CLSD, PPR"), "aerodrome closed, prior permission required");
    }

    #[test]
    fn number_prefix() {
        assert_eq!(en("STAND NR.5"), "STAND number 5");
        assert_eq!(en("STANDNR.7"), "STANDnumber 7");
    }

    #[test]
    fn unknown_tokens_unchanged() {
        assert_eq!(en("e) hello World 123"), "hello World 123");
        assert_eq!(en("   "), "");
        assert_eq!(en("..."), "...");
    }

    #[test]
    fn zh_body() {
        let out = map_notam_body("RWY 18 CLSD", &LexiconSet::builtin(), Locale::ZhCn);
        assert_eq!(out, "跑道 18 关闭");
    }
}
