//! Runtime configuration.

use std::path::PathBuf;

use wxgloss_foundation::{Locale, Result};

/// Environment variable holding the default locale tag.
pub const LOCALE_ENV: &str = "WXGLOSS_LOCALE";

/// How analyses are written out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned text for a terminal.
    #[default]
    Human,
    /// One JSON document per message.
    Json,
}

/// Settings for a CLI or REPL run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Display locale.
    pub locale: Locale,
    /// Output format.
    pub format: OutputFormat,
    /// Whether to show classified tokens.
    pub show_tokens: bool,
    /// Whether to show explained fields.
    pub show_fields: bool,
    /// JSON lexicon file merged over the built-in tables.
    pub lexicon_path: Option<PathBuf>,
    /// JSON catalog file merged over the built-in templates.
    pub catalog_path: Option<PathBuf>,
    /// JSON file of station display names.
    pub stations_path: Option<PathBuf>,
    /// `tracing` filter directive.
    pub log_directive: Option<String>,
    /// Whether the REPL prints its banner.
    pub show_banner: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            locale: Locale::En,
            format: OutputFormat::Human,
            show_tokens: true,
            show_fields: true,
            lexicon_path: None,
            catalog_path: None,
            stations_path: None,
            log_directive: None,
            show_banner: true,
        }
    }
}

impl RuntimeConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The default configuration with the locale taken from
    /// [`LOCALE_ENV`] when it is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable holds an unsupported locale tag.
    pub fn from_env() -> Result<Self> {
        let value = std::env::var(LOCALE_ENV).ok();
        Self::default().with_locale_tag(value.as_deref())
    }

    /// Applies a locale tag; `None` or a blank tag leaves the locale as is.
    ///
    /// # Errors
    ///
    /// Returns an error if the tag is not a supported locale.
    pub fn with_locale_tag(mut self, tag: Option<&str>) -> Result<Self> {
        if let Some(tag) = tag.map(str::trim).filter(|tag| !tag.is_empty()) {
            self.locale = tag.parse()?;
        }
        Ok(self)
    }

    /// Builder method to set the locale.
    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Builder method to set the output format.
    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Builder method to show classified tokens only.
    #[must_use]
    pub fn tokens_only(mut self) -> Self {
        self.show_tokens = true;
        self.show_fields = false;
        self
    }

    /// Builder method to show explained fields only.
    #[must_use]
    pub fn fields_only(mut self) -> Self {
        self.show_tokens = false;
        self.show_fields = true;
        self
    }

    /// Builder method to set the lexicon override file.
    #[must_use]
    pub fn with_lexicon_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.lexicon_path = Some(path.into());
        self
    }

    /// Builder method to set the catalog override file.
    #[must_use]
    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = Some(path.into());
        self
    }

    /// Builder method to set the station names file.
    #[must_use]
    pub fn with_stations_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.stations_path = Some(path.into());
        self
    }

    /// Builder method to set the log filter directive.
    #[must_use]
    pub fn with_log_directive(mut self, directive: impl Into<String>) -> Self {
        self.log_directive = Some(directive.into());
        self
    }

    /// Disables the REPL banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }
}
