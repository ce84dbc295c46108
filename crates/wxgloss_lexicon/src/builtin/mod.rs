//! Data shipped with the crate.
//!
//! Every entry is `(code, en, zh-CN)` so both locales stay side by side.

mod templates;
mod tables;

use wxgloss_foundation::Locale;

use crate::catalog::Catalog;
use crate::lexicon::{LexiconSet, LexiconTable};

type Rows = &'static [(&'static str, &'static str, &'static str)];

const fn rows(table: LexiconTable) -> Rows {
    match table {
        LexiconTable::NotamSubject => tables::NOTAM_SUBJECT,
        LexiconTable::NotamCondition => tables::NOTAM_CONDITION,
        LexiconTable::Fir => tables::FIR,
        LexiconTable::NotamBody => tables::NOTAM_BODY,
        LexiconTable::WeatherIntensity => tables::WEATHER_INTENSITY,
        LexiconTable::WeatherDescriptor => tables::WEATHER_DESCRIPTOR,
        LexiconTable::WeatherPhenomenon => tables::WEATHER_PHENOMENON,
        LexiconTable::CloudAmount => tables::CLOUD_AMOUNT,
    }
}

const fn column(row: &(&'static str, &'static str, &'static str), locale: Locale) -> &'static str {
    match locale {
        Locale::En => row.1,
        Locale::ZhCn => row.2,
    }
}

pub(crate) fn lexicons() -> LexiconSet {
    let mut set = LexiconSet::new();
    for table in LexiconTable::ALL {
        let lexicon = set.table_mut(table);
        for row in rows(table) {
            for locale in Locale::ALL {
                lexicon.register(row.0, locale, column(row, locale));
            }
        }
    }
    set
}

pub(crate) fn catalog(locale: Locale) -> Catalog {
    let mut catalog = Catalog::new(locale);
    for row in templates::TEMPLATES {
        catalog.insert(row.0, column(row, locale));
    }
    catalog
}
