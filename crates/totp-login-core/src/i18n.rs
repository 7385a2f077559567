//! # Translation lookup
//!
//! The form never owns its strings. It asks a [`Translator`] for every piece
//! of text, passing a key and the English default to fall back on.
//!
//! ## Usage
//! ```rust
//! use totp_login_core::i18n::*;
//! use std::collections::HashMap;
//!
//! let mut translations = HashMap::new();
//! translations.insert("fr".to_string(), {
//!     let mut m = HashMap::new();
//!     m.insert(keys::SUBMIT.to_string(), "Vérifier".to_string());
//!     m
//! });
//!
//! let translator = DictionaryTranslator::new(I18nOptions {
//!     translations,
//!     default_locale: Some("fr".to_string()),
//! });
//!
//! assert_eq!(translator.translate(keys::SUBMIT, "Verify"), "Vérifier");
//! assert_eq!(translator.translate("missing", "Fallback"), "Fallback");
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Translation keys used by the login form, with their default texts.
pub mod keys {
    pub const INSTRUCTIONS: &str = "mfa.totp.instructions";
    pub const SUPPORT_LINK: &str = "mfa.totp.support_link";
    pub const CODE_LABEL: &str = "mfa.totp.code_label";
    pub const SUBMIT: &str = "mfa.totp.submit";

    pub const INSTRUCTIONS_DEFAULT: &str = "Enter the code from your authenticator app.";
    pub const SUPPORT_LINK_DEFAULT: &str = "Need help?";
    pub const CODE_LABEL_DEFAULT: &str = "Enter your {codeLength}-digit code";
    pub const SUBMIT_DEFAULT: &str = "Verify";
}

/// Translation lookup consumed by the form.
///
/// A missing key yields `default` (interpolated, for the `_with_params`
/// variant).
pub trait Translator {
    fn translate(&self, key: &str, default: &str) -> String;

    fn translate_with_params(&self, key: &str, default: &str, params: &[(&str, String)]) -> String {
        interpolate(&self.translate(key, default), params)
    }
}

/// Replace `{name}` placeholders with values from `params`.
///
/// Unknown placeholders and unbalanced braces are left as written.
pub fn interpolate(template: &str, params: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) => {
                let name = &after[..end];
                match params.iter().find(|(k, _)| *k == name) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[end + 1..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// Returns the default text for every key.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTranslator;

impl Translator for DefaultTranslator {
    fn translate(&self, _key: &str, default: &str) -> String {
        default.to_string()
    }
}

/// Translation dictionary: key -> translated text.
pub type TranslationDictionary = HashMap<String, String>;

/// Dictionary translator options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct I18nOptions {
    /// Translations keyed by locale code.
    pub translations: HashMap<String, TranslationDictionary>,
    /// Default locale (falls back to "en", then the alphabetically first available).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_locale: Option<String>,
}

impl I18nOptions {
    /// Get the resolved default locale.
    pub fn resolved_default_locale(&self) -> &str {
        if let Some(ref locale) = self.default_locale {
            if self.translations.contains_key(locale) {
                return locale;
            }
        }
        if self.translations.contains_key("en") {
            return "en";
        }
        self.translations.keys().min().map(|s| s.as_str()).unwrap_or("en")
    }

    pub fn available_locales(&self) -> Vec<&str> {
        self.translations.keys().map(|s| s.as_str()).collect()
    }
}

/// Parse an Accept-Language header and return base locales sorted by quality.
///
/// Example: "en-US,fr;q=0.9,de;q=0.8" → ["en", "fr", "de"]
pub fn parse_accept_language(header: &str) -> Vec<String> {
    let mut entries: Vec<(String, f32)> = header
        .split(',')
        .filter_map(|part| {
            let mut parts = part.trim().split(';');
            let locale = parts.next()?.trim().split('-').next()?.to_lowercase();
            if locale.is_empty() {
                return None;
            }

            let quality = parts
                .next()
                .and_then(|q| q.trim().strip_prefix("q="))
                .and_then(|q| q.parse::<f32>().ok())
                .unwrap_or(1.0);

            Some((locale, quality))
        })
        .collect();

    entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    entries.into_iter().map(|(l, _)| l).collect()
}

/// Pick the best available locale for an Accept-Language header.
pub fn detect_locale_from_headers(accept_language: &str, options: &I18nOptions) -> String {
    let available = options.available_locales();

    parse_accept_language(accept_language)
        .into_iter()
        .find(|locale| available.contains(&locale.as_str()))
        .unwrap_or_else(|| options.resolved_default_locale().to_string())
}

/// Per-locale dictionaries with fallback to the default locale.
#[derive(Debug, Clone)]
pub struct DictionaryTranslator {
    options: I18nOptions,
    locale: String,
}

impl DictionaryTranslator {
    /// Translator bound to the resolved default locale.
    pub fn new(options: I18nOptions) -> Self {
        let locale = options.resolved_default_locale().to_string();
        Self { options, locale }
    }

    /// Translator bound to the best match for an Accept-Language header.
    pub fn for_accept_language(options: I18nOptions, accept_language: &str) -> Self {
        let locale = detect_locale_from_headers(accept_language, &options);
        Self { options, locale }
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    fn lookup(&self, locale: &str, key: &str) -> Option<&str> {
        self.options
            .translations
            .get(locale)
            .and_then(|dict| dict.get(key))
            .map(|s| s.as_str())
    }
}

impl Translator for DictionaryTranslator {
    fn translate(&self, key: &str, default: &str) -> String {
        if let Some(text) = self.lookup(&self.locale, key) {
            return text.to_string();
        }
        let fallback = self.options.resolved_default_locale();
        if fallback != self.locale {
            if let Some(text) = self.lookup(fallback, key) {
                return text.to_string();
            }
        }
        default.to_string()
    }
}
