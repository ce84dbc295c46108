//! Localization catalogs.
//!
//! A [`Localizer`] resolves a dotted key (`explain.metar.wind`) to a template
//! in one locale and interpolates `{name}` parameters into it. On a miss the
//! key itself is returned, so a missing template is visible but never fatal.
//!
//! [`Catalog`] is the in-crate implementation: the built-in templates for a
//! locale, optionally layered with overrides read from JSON.

use std::fmt::Write as _;

use serde_json::Value;
use wxgloss_foundation::{Error, ErrorKind, Locale, Result};

use crate::builtin;

/// Key-to-template lookup with parameter interpolation.
///
/// Passed as `&dyn Localizer` to everything that renders text. Implementors
/// are shared read-only across threads.
pub trait Localizer: Send + Sync {
    /// The locale templates are rendered in.
    fn locale(&self) -> Locale;

    /// The raw template for `key`, if the catalog has one.
    fn template(&self, key: &str) -> Option<&str>;

    /// Returns true if the catalog has a template for `key`.
    fn has(&self, key: &str) -> bool {
        self.template(key).is_some()
    }

    /// The template for `key` without interpolation, or `key` on a miss.
    fn text(&self, key: &str) -> String {
        self.template(key).unwrap_or(key).to_string()
    }

    /// The template for `key` with `params` interpolated, or `key` on a miss.
    fn format(&self, key: &str, params: &[(&str, String)]) -> String {
        match self.template(key) {
            Some(template) => interpolate(template, params),
            None => {
                tracing::trace!(key, "catalog miss");
                key.to_string()
            }
        }
    }
}

/// Renders a catalog key with named parameters.
///
/// ```ignore
/// tr!(loc, "explain.metar.wind", wind = wind_text)
/// ```
#[macro_export]
macro_rules! tr {
    ($loc:expr, $key:expr) => {
        $crate::Localizer::text($loc, $key)
    };
    ($loc:expr, $key:expr, $($name:ident = $value:expr),+ $(,)?) => {
        $crate::Localizer::format(
            $loc,
            $key,
            &[$((stringify!($name), ::std::string::ToString::to_string(&$value))),+],
        )
    };
}

/// Replaces each `{name}` in `template` with its parameter.
///
/// Placeholders without a matching parameter are left as written, as is an
/// unterminated `{`.
#[must_use]
pub fn interpolate(template: &str, params: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };
        let name = &after[..close];
        let is_word = !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '_');
        match params.iter().find(|(param, _)| *param == name) {
            Some((_, value)) if is_word => out.push_str(value),
            _ => {
                let _ = write!(out, "{{{name}}}");
            }
        }
        rest = &after[close + 1..];
    }
    out.push_str(rest);
    out
}

/// Templates for one locale.
#[derive(Clone, Debug)]
pub struct Catalog {
    locale: Locale,
    templates: im::HashMap<String, String>,
}

impl Catalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            templates: im::HashMap::new(),
        }
    }

    /// The built-in templates for `locale`.
    #[must_use]
    pub fn builtin(locale: Locale) -> Self {
        builtin::catalog(locale)
    }

    /// Adds or replaces one template.
    pub fn insert(&mut self, key: impl Into<String>, template: impl Into<String>) {
        self.templates.insert(key.into(), template.into());
    }

    /// Builder form of [`Catalog::insert`].
    #[must_use]
    pub fn with_template(mut self, key: impl Into<String>, template: impl Into<String>) -> Self {
        self.insert(key, template);
        self
    }

    /// Number of templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Returns true if the catalog has no templates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Returns a catalog with the templates of a JSON document layered over
    /// this one.
    ///
    /// The document is an object of `key -> template`. Nested objects are
    /// flattened into dotted keys, so `{"fields": {"wind": "Wind"}}` and
    /// `{"fields.wind": "Wind"}` are equivalent.
    ///
    /// # Errors
    ///
    /// Returns a [`ErrorKind::CatalogFormat`] error if the document is not an
    /// object or holds a value that is neither a string nor an object.
    pub fn with_overrides_json(&self, json: &str, source: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| Error::from_json(&e, source, ErrorKind::CatalogFormat))?;
        let Value::Object(_) = value else {
            return Err(Error::catalog_format(format!(
                "{source}: expected an object of key -> template"
            )));
        };

        let mut merged = self.clone();
        let mut count = 0usize;
        flatten_into(&mut merged, "", &value, source, &mut count)?;
        tracing::debug!(source, count, locale = %self.locale, "applied catalog overrides");
        Ok(merged)
    }
}

fn flatten_into(
    catalog: &mut Catalog,
    prefix: &str,
    value: &Value,
    source: &str,
    count: &mut usize,
) -> Result<()> {
    match value {
        Value::String(template) => {
            catalog.insert(prefix, template.clone());
            *count += 1;
            Ok(())
        }
        Value::Object(entries) => {
            for (key, child) in entries {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten_into(catalog, &path, child, source, count)?;
            }
            Ok(())
        }
        other => Err(Error::catalog_format(format!(
            "{source}: value for '{prefix}' must be a string, found {other}"
        ))),
    }
}

impl Localizer for Catalog {
    fn locale(&self) -> Locale {
        self.locale
    }

    fn template(&self, key: &str) -> Option<&str> {
        self.templates.get(key).map(String::as_str)
    }
}
