//! # totp-login-core
//!
//! Headless TOTP code entry form for a multi-factor sign-in flow.
//!
//! The form tracks one string (the typed code), enables submission once the
//! code has the configured length, and hands the code to the parent's
//! completion callback. Verification, error reporting and navigation stay
//! with the parent, which feeds failures back through the `error` prop.
//!
//! ## Usage
//!
//! ```rust
//! use totp_login_core::*;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let submitted = Rc::new(RefCell::new(None));
//! let sink = submitted.clone();
//!
//! let props = LoginFormProps::<String>::new(MethodDescriptor::new("Authenticator"), move |payload| {
//!     *sink.borrow_mut() = Some(payload.code);
//! });
//! let mut form = TotpLoginForm::new(props).unwrap();
//!
//! form.on_change("123456");
//! assert!(form.can_submit());
//! assert!(form.on_key_up(ENTER_KEY_CODE));
//! assert_eq!(submitted.borrow().as_deref(), Some("123456"));
//!
//! let html = render_html(&form.render(&DefaultTranslator));
//! assert!(html.contains("Enter your 6-digit code"));
//! ```

pub mod config;
pub mod entry;
pub mod env;
pub mod error;
pub mod form;
pub mod html;
pub mod i18n;
pub mod method;
pub mod props;
pub mod view;

pub use config::FormConfig;
pub use entry::{is_submit_eligible, CodeEntry, CompleteLoginPayload, DEFAULT_CODE_LENGTH, ENTER_KEY_CODE};
pub use error::{FormError, Result};
pub use form::{FocusTarget, TotpLoginForm};
pub use html::{escape_html, render_html};
pub use i18n::{DefaultTranslator, DictionaryTranslator, I18nOptions, Translator};
pub use method::MethodDescriptor;
pub use props::{CompleteLoginHandler, LoginFormProps};
pub use view::{build_view, FormView};
