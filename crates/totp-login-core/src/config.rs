//! Host-level defaults for the login form.
//!
//! Loaded from JSON or from `TOTP_LOGIN_*` environment variables.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::entry::{CompleteLoginPayload, DEFAULT_CODE_LENGTH};
use crate::error::{FormError, Result};
use crate::form::TotpLoginForm;
use crate::i18n::{DictionaryTranslator, I18nOptions, TranslationDictionary};
use crate::method::MethodDescriptor;
use crate::props::LoginFormProps;

pub const DEFAULT_INPUT_ID: &str = "totp-code";
pub const DEFAULT_LOCALE: &str = "en";

pub const ENV_CODE_LENGTH: &str = "TOTP_LOGIN_CODE_LENGTH";
pub const ENV_INPUT_ID: &str = "TOTP_LOGIN_INPUT_ID";
pub const ENV_LOCALE: &str = "TOTP_LOGIN_LOCALE";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormConfig {
    pub code_length: usize,
    pub input_id: String,
    pub default_locale: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            code_length: DEFAULT_CODE_LENGTH,
            input_id: DEFAULT_INPUT_ID.to_string(),
            default_locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl FormConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| FormError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self> {
        Self::default().with_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides from a variable lookup such as `std::env::var`.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(raw) = lookup(ENV_CODE_LENGTH) {
            self.code_length = raw
                .trim()
                .parse()
                .map_err(|_| FormError::Config(format!("{ENV_CODE_LENGTH} is not a number: {raw:?}")))?;
        }
        if let Some(id) = lookup(ENV_INPUT_ID).filter(|s| !s.is_empty()) {
            self.input_id = id;
        }
        if let Some(locale) = lookup(ENV_LOCALE).filter(|s| !s.is_empty()) {
            self.default_locale = locale;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if self.code_length == 0 {
            return Err(FormError::Config("code length must be at least 1".into()));
        }
        if self.input_id.trim().is_empty() {
            return Err(FormError::Config("input id must not be empty".into()));
        }
        Ok(())
    }

    /// Props using this config's code length.
    pub fn props<F>(
        &self,
        method: MethodDescriptor,
        on_complete_login: impl Fn(CompleteLoginPayload) + 'static,
    ) -> LoginFormProps<F> {
        LoginFormProps::new(method, on_complete_login).with_code_length(self.code_length)
    }

    /// Unmounted form using this config's code length and input id.
    pub fn form<F>(
        &self,
        method: MethodDescriptor,
        on_complete_login: impl Fn(CompleteLoginPayload) + 'static,
    ) -> Result<TotpLoginForm<F>> {
        Ok(TotpLoginForm::new(self.props(method, on_complete_login))?.with_input_id(self.input_id.clone()))
    }

    /// Dictionary translator whose default locale is this config's locale.
    pub fn translator(&self, translations: HashMap<String, TranslationDictionary>) -> DictionaryTranslator {
        DictionaryTranslator::new(I18nOptions {
            translations,
            default_locale: Some(self.default_locale.clone()),
        })
    }
}
