//! Session state shared by the CLI and the REPL.
//!
//! A session owns the loaded lexicons and the catalog for the current
//! locale, and turns message documents into [`Report`]s.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use wxgloss_engine::{Analysis, ExplainContext, analyze};
use wxgloss_foundation::{Error, ErrorContext, Locale, Result, StationInfo, StructuredMessage};
use wxgloss_lexicon::{Catalog, LexiconSet};

use crate::config::RuntimeConfig;

/// One message together with its analysis.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    /// The message as read.
    pub message: StructuredMessage,
    /// Its classified tokens and explained fields.
    pub analysis: Analysis,
}

/// Catalog overrides are tied to the locale they were loaded for.
#[derive(Clone, Debug)]
struct CatalogOverrides {
    locale: Locale,
    json: String,
    source: String,
}

/// Loaded lexicons, catalog and station names.
#[derive(Clone, Debug)]
pub struct Session {
    locale: Locale,
    lexicons: LexiconSet,
    catalog: Catalog,
    overrides: Vec<CatalogOverrides>,
    stations: HashMap<String, StationInfo>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Locale::En)
    }
}

impl Session {
    /// Creates a session with the built-in lexicons and catalog.
    #[must_use]
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            lexicons: LexiconSet::builtin(),
            catalog: Catalog::builtin(locale),
            overrides: Vec::new(),
            stations: HashMap::new(),
        }
    }

    /// Creates a session from a runtime configuration, loading any
    /// override files it names.
    ///
    /// # Errors
    ///
    /// Returns an error if an override file cannot be read or parsed.
    pub fn from_config(config: &RuntimeConfig) -> Result<Self> {
        let mut session = Self::new(config.locale);
        if let Some(path) = &config.lexicon_path {
            session.load_lexicon_file(path)?;
        }
        if let Some(path) = &config.catalog_path {
            session.load_catalog_file(path)?;
        }
        if let Some(path) = &config.stations_path {
            session.load_stations_file(path)?;
        }
        Ok(session)
    }

    /// The current locale.
    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// The catalog for the current locale.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The loaded lexicons.
    #[must_use]
    pub fn lexicons(&self) -> &LexiconSet {
        &self.lexicons
    }

    /// Switches locale, rebuilding the catalog and reapplying the overrides
    /// loaded for that locale.
    ///
    /// # Errors
    ///
    /// Returns an error if a stored override document no longer applies.
    pub fn set_locale(&mut self, locale: Locale) -> Result<()> {
        let mut catalog = Catalog::builtin(locale);
        for overrides in self.overrides.iter().filter(|o| o.locale == locale) {
            catalog = catalog.with_overrides_json(&overrides.json, &overrides.source)?;
        }
        self.catalog = catalog;
        self.locale = locale;
        tracing::debug!(locale = %locale, "locale switched");
        Ok(())
    }

    /// Merges a lexicon document over the loaded lexicons.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not a valid lexicon.
    pub fn apply_lexicon_json(&mut self, json: &str, source: &str) -> Result<()> {
        let extra = LexiconSet::from_json_str(json, source)?;
        self.lexicons = self.lexicons.merged_with(&extra);
        Ok(())
    }

    /// Merges a catalog document over the catalog for the current locale.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not a valid catalog.
    pub fn apply_catalog_json(&mut self, json: &str, source: &str) -> Result<()> {
        self.catalog = self.catalog.with_overrides_json(json, source)?;
        self.overrides.push(CatalogOverrides {
            locale: self.locale,
            json: json.to_string(),
            source: source.to_string(),
        });
        Ok(())
    }

    /// Reads and merges a lexicon file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid lexicon.
    pub fn load_lexicon_file(&mut self, path: &Path) -> Result<()> {
        let json = read_file(path)?;
        self.apply_lexicon_json(&json, &path.display().to_string())
    }

    /// Reads and merges a catalog file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid catalog.
    pub fn load_catalog_file(&mut self, path: &Path) -> Result<()> {
        let json = read_file(path)?;
        self.apply_catalog_json(&json, &path.display().to_string())
    }

    /// Registers display names for a station.
    pub fn register_station(&mut self, info: StationInfo) {
        self.stations.insert(info.code.trim().to_uppercase(), info);
    }

    /// Registers every station in a station document, returning how many
    /// were read.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not station data.
    pub fn apply_stations_json(&mut self, json: &str, source: &str) -> Result<usize> {
        let stations = StationInfo::many_from_json_str(json, source)?;
        let count = stations.len();
        for info in stations {
            self.register_station(info);
        }
        tracing::debug!(source, count, "stations loaded");
        Ok(count)
    }

    /// Reads a station names file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not station data.
    pub fn load_stations_file(&mut self, path: &Path) -> Result<usize> {
        let json = read_file(path)?;
        self.apply_stations_json(&json, &path.display().to_string())
    }

    /// Analyzes one message.
    #[must_use]
    pub fn analyze(&self, message: &StructuredMessage) -> Analysis {
        let mut ctx = ExplainContext::new(&self.catalog, &self.lexicons);
        if let Some(info) = message
            .station_code()
            .and_then(|code| self.stations.get(&code.trim().to_uppercase()))
        {
            ctx = ctx.with_station(info);
        }
        analyze(message, &ctx)
    }

    /// Analyzes a message into a [`Report`].
    #[must_use]
    pub fn report(&self, message: StructuredMessage) -> Report {
        let analysis = self.analyze(&message);
        Report { message, analysis }
    }

    /// Reads a document of one message or an array of messages and
    /// analyzes each.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not a message or message array.
    pub fn reports_from_json(&self, json: &str) -> Result<Vec<Report>> {
        let messages = StructuredMessage::many_from_json_str(json)?;
        Ok(messages.into_iter().map(|m| self.report(m)).collect())
    }

    /// Reads a message file and analyzes each message in it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn reports_from_file(&self, path: &Path) -> Result<Vec<Report>> {
        let messages = load_messages(path)?;
        Ok(messages.into_iter().map(|m| self.report(m)).collect())
    }
}

/// Reads a file holding one message or an array of messages.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_messages(path: &Path) -> Result<Vec<StructuredMessage>> {
    let json = read_file(path)?;
    StructuredMessage::many_from_json_str(&json).map_err(|mut err| {
        let mut context = err.context.take().unwrap_or_default();
        context.source = Some(path.display().to_string());
        err.with_context(context)
    })
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        Error::io(format!("cannot read {}: {e}", path.display()))
            .with_context(ErrorContext::new().with_source(path.display().to_string()))
    })
}
