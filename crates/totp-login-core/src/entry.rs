//! Code entry state shared by the headless form and the framework bindings.

use serde::{Deserialize, Serialize};

use crate::error::{FormError, Result};

/// Code length used when the parent does not configure one.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// `KeyboardEvent.keyCode` of the Enter key.
pub const ENTER_KEY_CODE: u32 = 13;

/// Value handed to the parent's completion callback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompleteLoginPayload {
    pub code: String,
}

/// Whether `code` has exactly `code_length` characters.
///
/// Length is counted in UTF-16 code units, the unit the input's
/// `maxlength` attribute uses. The characters themselves are not checked.
pub fn is_submit_eligible(code: &str, code_length: usize) -> bool {
    code.encode_utf16().count() == code_length
}

/// The user's current input and the length it must reach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeEntry {
    code: String,
    code_length: usize,
}

impl CodeEntry {
    /// Empty entry expecting `code_length` characters.
    pub fn new(code_length: usize) -> Result<Self> {
        if code_length == 0 {
            return Err(FormError::InvalidCodeLength(code_length));
        }
        Ok(Self {
            code: String::new(),
            code_length,
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn code_length(&self) -> usize {
        self.code_length
    }

    /// Replace the stored code with the field's raw value.
    pub fn change(&mut self, value: impl Into<String>) {
        self.code = value.into();
    }

    /// Re-target the entry at a new length; the stored code is kept.
    pub fn set_code_length(&mut self, code_length: usize) -> Result<()> {
        if code_length == 0 {
            return Err(FormError::InvalidCodeLength(code_length));
        }
        self.code_length = code_length;
        Ok(())
    }

    /// Copy of this entry checked against `code_length`, or an unchanged
    /// copy when `code_length` is zero.
    pub fn at_length(&self, code_length: usize) -> Self {
        let mut entry = self.clone();
        if entry.set_code_length(code_length).is_err() {
            return self.clone();
        }
        entry
    }

    pub fn can_submit(&self) -> bool {
        is_submit_eligible(&self.code, self.code_length)
    }

    /// Payload for a submit action, or `None` while the code is incomplete.
    pub fn submission(&self) -> Option<CompleteLoginPayload> {
        self.can_submit().then(|| CompleteLoginPayload {
            code: self.code.clone(),
        })
    }

    /// Payload to submit for a released key, if it was Enter and the code
    /// is complete.
    pub fn key_up(&self, key_code: u32) -> Option<CompleteLoginPayload> {
        if key_code != ENTER_KEY_CODE {
            return None;
        }
        self.submission()
    }
}

impl Default for CodeEntry {
    fn default() -> Self {
        Self {
            code: String::new(),
            code_length: DEFAULT_CODE_LENGTH,
        }
    }
}
