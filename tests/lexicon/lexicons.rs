//! Built-in lexicon tables.

use wxgloss_foundation::Locale;
use wxgloss_lexicon::{LexiconSet, LexiconTable};

#[test]
fn every_table_is_populated() {
    let lexicons = LexiconSet::builtin();
    for table in LexiconTable::ALL {
        assert!(!lexicons.table(table).is_empty(), "{table} is empty");
    }
}

#[test]
fn every_code_has_both_locales() {
    let lexicons = LexiconSet::builtin();
    for table in LexiconTable::ALL {
        for code in lexicons.table(table).codes() {
            for locale in Locale::ALL {
                assert!(
                    lexicons.lookup(table, code, locale).is_some(),
                    "{table}/{code} has no {locale} text"
                );
            }
        }
    }
}

#[test]
fn table_names_round_trip() {
    for table in LexiconTable::ALL {
        assert_eq!(LexiconTable::from_name(table.name()), Some(table));
    }
    assert_eq!(LexiconTable::from_name("metar"), None);
}

#[test]
fn lookups_are_per_locale() {
    let lexicons = LexiconSet::builtin();
    assert_eq!(lexicons.lookup(LexiconTable::Fir, "EGTT", Locale::En), Some("London"));
    assert_eq!(lexicons.lookup(LexiconTable::Fir, "EGTT", Locale::ZhCn), Some("伦敦"));
    assert_eq!(lexicons.lookup(LexiconTable::Fir, "QQQQ", Locale::En), None);
}
