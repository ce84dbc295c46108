//! Code-to-text lexicon tables.
//!
//! Each [`Lexicon`] maps a short code (`RW`, `EGTT`, `BKN`) to its text in
//! every locale it knows. A [`LexiconSet`] bundles the eight tables the
//! decoders consult. Tables are persistent maps: cloning a set is cheap and
//! a loaded set is never mutated, so it can be shared freely across threads.

use std::collections::BTreeMap;
use std::fmt;

use wxgloss_foundation::{Error, ErrorKind, Locale, Result};

use crate::builtin;

/// The closed set of lexicon tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LexiconTable {
    /// Q-code subject (letters 2-3).
    NotamSubject,
    /// Q-code condition (letters 4-5).
    NotamCondition,
    /// Flight information region names.
    Fir,
    /// NOTAM body vocabulary and idioms.
    NotamBody,
    /// Weather intensity prefixes (`-`, `+`).
    WeatherIntensity,
    /// Weather descriptors (`TS`, `SH`, ...).
    WeatherDescriptor,
    /// Weather phenomena (`RA`, `FG`, ...).
    WeatherPhenomenon,
    /// Cloud amounts (`FEW`, `BKN`, ...).
    CloudAmount,
}

impl LexiconTable {
    /// Number of tables.
    pub const COUNT: usize = 8;

    /// All tables, in storage order.
    pub const ALL: [LexiconTable; Self::COUNT] = [
        LexiconTable::NotamSubject,
        LexiconTable::NotamCondition,
        LexiconTable::Fir,
        LexiconTable::NotamBody,
        LexiconTable::WeatherIntensity,
        LexiconTable::WeatherDescriptor,
        LexiconTable::WeatherPhenomenon,
        LexiconTable::CloudAmount,
    ];

    /// Name used in lexicon documents.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::NotamSubject => "notam_subject",
            Self::NotamCondition => "notam_condition",
            Self::Fir => "fir",
            Self::NotamBody => "notam_body",
            Self::WeatherIntensity => "weather_intensity",
            Self::WeatherDescriptor => "weather_descriptor",
            Self::WeatherPhenomenon => "weather_phenomenon",
            Self::CloudAmount => "cloud_amount",
        }
    }

    /// Looks a table up by its document name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|table| table.name() == name)
    }

    const fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for LexiconTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One code-to-localized-text table.
#[derive(Clone, Debug, Default)]
pub struct Lexicon {
    entries: im::HashMap<String, im::HashMap<Locale, String>>,
}

impl Lexicon {
    /// Creates an empty lexicon.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the text of `code` in `locale`, replacing any previous text.
    pub fn register(&mut self, code: impl Into<String>, locale: Locale, text: impl Into<String>) {
        self.entries
            .entry(code.into())
            .or_default()
            .insert(locale, text.into());
    }

    /// Looks up the text of `code` in `locale`.
    #[must_use]
    pub fn lookup(&self, code: &str, locale: Locale) -> Option<&str> {
        self.entries
            .get(code)
            .and_then(|texts| texts.get(&locale))
            .map(String::as_str)
    }

    /// Returns true if `code` has text in any locale.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    /// Number of codes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no codes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the codes, sorted.
    #[must_use]
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    /// Returns a table with `other`'s texts layered over this one's.
    #[must_use]
    pub fn merged_with(&self, other: &Lexicon) -> Lexicon {
        let mut merged = self.clone();
        for (code, texts) in &other.entries {
            for (locale, text) in texts {
                merged.register(code.clone(), *locale, text.clone());
            }
        }
        merged
    }
}

/// The full set of lexicon tables the decoders consult.
#[derive(Clone, Debug, Default)]
pub struct LexiconSet {
    tables: [Lexicon; LexiconTable::COUNT],
}

/// `table -> code -> locale tag -> text`
type LexiconDocument = BTreeMap<String, BTreeMap<String, BTreeMap<String, String>>>;

impl LexiconSet {
    /// Creates a set of empty tables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The lexicons shipped with the crate.
    #[must_use]
    pub fn builtin() -> Self {
        builtin::lexicons()
    }

    /// Reads a lexicon document of the form
    /// `{ "<table>": { "<code>": { "<locale>": "<text>" } } }`.
    ///
    /// Texts in locales this crate does not support are skipped.
    ///
    /// # Errors
    ///
    /// Returns a [`ErrorKind::LexiconFormat`] error if the document has a
    /// different shape or names an unknown table.
    pub fn from_json_str(json: &str, source: &str) -> Result<Self> {
        let document: LexiconDocument = serde_json::from_str(json)
            .map_err(|e| Error::from_json(&e, source, ErrorKind::LexiconFormat))?;

        let mut set = Self::new();
        for (name, codes) in document {
            let table = LexiconTable::from_name(&name).ok_or_else(|| {
                Error::lexicon_format(format!("unknown lexicon table '{name}' in {source}"))
            })?;
            for (code, texts) in codes {
                for (tag, text) in texts {
                    match tag.parse::<Locale>() {
                        Ok(locale) => set.table_mut(table).register(code.clone(), locale, text),
                        Err(_) => {
                            tracing::debug!(
                                %table, %code, %tag,
                                "skipping text in unsupported locale"
                            );
                        }
                    }
                }
            }
        }
        Ok(set)
    }

    /// Returns a set with `other`'s texts layered over this one's.
    #[must_use]
    pub fn merged_with(&self, other: &LexiconSet) -> LexiconSet {
        let mut merged = self.clone();
        for table in LexiconTable::ALL {
            merged.tables[table.slot()] = self.table(table).merged_with(other.table(table));
        }
        merged
    }

    /// Returns one table.
    #[must_use]
    pub fn table(&self, table: LexiconTable) -> &Lexicon {
        &self.tables[table.slot()]
    }

    /// Returns one table for registration.
    pub fn table_mut(&mut self, table: LexiconTable) -> &mut Lexicon {
        &mut self.tables[table.slot()]
    }

    /// Looks up `code` in `table` for `locale`.
    #[must_use]
    pub fn lookup(&self, table: LexiconTable, code: &str, locale: Locale) -> Option<&str> {
        let found = self.table(table).lookup(code, locale);
        if found.is_none() {
            tracing::trace!(%table, code, %locale, "lexicon miss");
        }
        found
    }
}
