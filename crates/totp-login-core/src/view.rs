//! Render model of the login form.
//!
//! [`build_view`] resolves every translated string and derived flag once,
//! so each binding only maps the fields onto its own markup.

use crate::entry::CodeEntry;
use crate::i18n::{keys, Translator};
use crate::method::MethodDescriptor;

/// CSS classes shared by the HTML renderer and the framework bindings.
pub mod classes {
    pub const FORM: &str = "totp-login";
    pub const INSTRUCTIONS: &str = "totp-login__instructions";
    pub const SUPPORT_LINK: &str = "totp-login__support-link";
    pub const FIELD: &str = "totp-login__field";
    pub const LABEL: &str = "totp-login__label";
    pub const INPUT: &str = "totp-login__input";
    pub const ERROR: &str = "totp-login__error";
    pub const THUMBNAIL: &str = "totp-login__thumbnail";
    pub const ACTIONS: &str = "totp-login__actions";
    pub const SUBMIT: &str = "totp-login__submit";
}

/// Fixed attributes of the code input.
pub mod input_attrs {
    pub const NAME: &str = "code";
    pub const TYPE: &str = "text";
    pub const AUTOCOMPLETE: &str = "one-time-code";
    pub const INPUT_MODE: &str = "numeric";
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView<'a, F> {
    pub instructions: InstructionsView,
    pub input: CodeInputView,
    /// Present only when the parent passed an error.
    pub error: Option<String>,
    pub thumbnail: Option<ThumbnailView>,
    pub actions: ActionsView<'a, F>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionsView {
    pub text: String,
    pub support_link: Option<SupportLinkView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportLinkView {
    pub href: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeInputView {
    pub id: String,
    pub label: String,
    pub value: String,
    pub max_length: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailView {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionsView<'a, F> {
    pub submit_label: String,
    pub submit_disabled: bool,
    pub more_options: Option<&'a F>,
}

/// Build the render model for the current entry and props.
pub fn build_view<'a, F>(
    entry: &CodeEntry,
    method: &MethodDescriptor,
    error: Option<&str>,
    more_options: Option<&'a F>,
    input_id: &str,
    translator: &dyn Translator,
) -> FormView<'a, F> {
    let support_link = method.support_link.as_ref().map(|href| SupportLinkView {
        href: href.clone(),
        text: translator.translate(keys::SUPPORT_LINK, keys::SUPPORT_LINK_DEFAULT),
    });

    let label = translator.translate_with_params(
        keys::CODE_LABEL,
        keys::CODE_LABEL_DEFAULT,
        &[("codeLength", entry.code_length().to_string())],
    );

    FormView {
        instructions: InstructionsView {
            text: translator.translate(keys::INSTRUCTIONS, keys::INSTRUCTIONS_DEFAULT),
            support_link,
        },
        input: CodeInputView {
            id: input_id.to_string(),
            label,
            value: entry.code().to_string(),
            max_length: entry.code_length(),
        },
        error: error.map(str::to_string),
        thumbnail: method.thumbnail.as_ref().map(|src| ThumbnailView {
            src: src.clone(),
            alt: method.name.clone(),
        }),
        actions: ActionsView {
            submit_label: translator.translate(keys::SUBMIT, keys::SUBMIT_DEFAULT),
            submit_disabled: !entry.can_submit(),
            more_options,
        },
    }
}
