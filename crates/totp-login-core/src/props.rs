//! Props supplied by the parent controller on every render.

use std::fmt;
use std::rc::Rc;

use crate::entry::{CompleteLoginPayload, DEFAULT_CODE_LENGTH};
use crate::method::MethodDescriptor;

/// Completion callback. The form calls it once per submit action and never
/// looks at what happens next.
pub type CompleteLoginHandler = Rc<dyn Fn(CompleteLoginPayload)>;

/// Parent-owned configuration of the login form.
///
/// `F` is the caller's "more options" fragment type. The headless form
/// never inspects it; the HTML renderer inserts it verbatim when `F: AsRef<str>`.
pub struct LoginFormProps<F = String> {
    pub code_length: usize,
    pub error: Option<String>,
    pub method: MethodDescriptor,
    pub on_complete_login: CompleteLoginHandler,
    pub more_options_control: Option<F>,
}

impl<F> LoginFormProps<F> {
    pub fn new(method: MethodDescriptor, on_complete_login: impl Fn(CompleteLoginPayload) + 'static) -> Self {
        Self {
            code_length: DEFAULT_CODE_LENGTH,
            error: None,
            method,
            on_complete_login: Rc::new(on_complete_login),
            more_options_control: None,
        }
    }

    pub fn with_code_length(mut self, code_length: usize) -> Self {
        self.code_length = code_length;
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn with_more_options(mut self, fragment: F) -> Self {
        self.more_options_control = Some(fragment);
        self
    }
}

impl<F: Clone> Clone for LoginFormProps<F> {
    fn clone(&self) -> Self {
        Self {
            code_length: self.code_length,
            error: self.error.clone(),
            method: self.method.clone(),
            on_complete_login: Rc::clone(&self.on_complete_login),
            more_options_control: self.more_options_control.clone(),
        }
    }
}

impl<F: fmt::Debug> fmt::Debug for LoginFormProps<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginFormProps")
            .field("code_length", &self.code_length)
            .field("error", &self.error)
            .field("method", &self.method)
            .field("more_options_control", &self.more_options_control)
            .finish_non_exhaustive()
    }
}
