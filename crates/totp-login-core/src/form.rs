//! Headless TOTP login form.
//!
//! Holds the one piece of mutable state (the typed code) for a mounted
//! instance and turns host events into calls on the parent's completion
//! callback. Dropping the form discards the code.

use crate::config::DEFAULT_INPUT_ID;
use crate::entry::{CodeEntry, CompleteLoginPayload};
use crate::error::Result;
use crate::i18n::Translator;
use crate::props::LoginFormProps;
use crate::view::{build_view, FormView};

/// Something that can receive keyboard focus, typically the code input
/// element of a binding.
pub trait FocusTarget {
    fn focus(&mut self) -> Result<()>;
}

pub struct TotpLoginForm<F = String> {
    props: LoginFormProps<F>,
    entry: CodeEntry,
    input_id: String,
    mounted: bool,
}

impl<F> TotpLoginForm<F> {
    /// Create an unmounted form with an empty code.
    ///
    /// Fails with `FormError::InvalidCodeLength` for a zero code length.
    pub fn new(props: LoginFormProps<F>) -> Result<Self> {
        let entry = CodeEntry::new(props.code_length)?;
        Ok(Self {
            props,
            entry,
            input_id: DEFAULT_INPUT_ID.to_string(),
            mounted: false,
        })
    }

    pub fn with_input_id(mut self, id: impl Into<String>) -> Self {
        self.input_id = id.into();
        self
    }

    pub fn props(&self) -> &LoginFormProps<F> {
        &self.props
    }

    pub fn code(&self) -> &str {
        self.entry.code()
    }

    pub fn input_id(&self) -> &str {
        &self.input_id
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Move focus to the code input. Only the first call has an effect.
    pub fn mount(&mut self, target: &mut dyn FocusTarget) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        tracing::debug!(input_id = %self.input_id, "mounting TOTP login form");
        if let Err(e) = target.focus() {
            tracing::warn!(input_id = %self.input_id, "could not focus code input: {}", e);
        }
    }

    /// Replace props after a parent re-render. The typed code is kept.
    pub fn set_props(&mut self, props: LoginFormProps<F>) -> Result<()> {
        self.entry.set_code_length(props.code_length)?;
        self.props = props;
        Ok(())
    }

    pub fn on_change(&mut self, value: impl Into<String>) {
        self.entry.change(value);
    }

    /// Handle a released key. Returns whether the completion callback ran.
    pub fn on_key_up(&self, key_code: u32) -> bool {
        match self.entry.key_up(key_code) {
            Some(payload) => {
                self.dispatch(payload);
                true
            }
            None => false,
        }
    }

    /// Handle a click on the submit button. Returns whether the completion
    /// callback ran; a click on the disabled button does nothing.
    pub fn on_submit_click(&self) -> bool {
        match self.entry.submission() {
            Some(payload) => {
                self.dispatch(payload);
                true
            }
            None => false,
        }
    }

    pub fn can_submit(&self) -> bool {
        self.entry.can_submit()
    }

    pub fn render<'a>(&'a self, translator: &dyn Translator) -> FormView<'a, F> {
        build_view(
            &self.entry,
            &self.props.method,
            self.props.error.as_deref(),
            self.props.more_options_control.as_ref(),
            &self.input_id,
            translator,
        )
    }

    fn dispatch(&self, payload: CompleteLoginPayload) {
        tracing::debug!(code_length = self.entry.code_length(), "submitting TOTP code");
        (self.props.on_complete_login)(payload);
    }
}
