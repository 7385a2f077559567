//! # totp-login-yew
//!
//! Yew binding for the TOTP login form.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use totp_login_yew::*;
//! use totp_login_core::{CompleteLoginPayload, MethodDescriptor};
//! use yew::prelude::*;
//!
//! #[function_component(Challenge)]
//! fn challenge() -> Html {
//!     let error = use_state(|| None::<AttrValue>);
//!     let on_complete_login = Callback::from(|p: CompleteLoginPayload| verify(p.code));
//!
//!     html! {
//!         <TotpLoginForm
//!             method={MethodDescriptor::new("Authenticator")}
//!             error={(*error).clone()}
//!             {on_complete_login}
//!             more_options_control={html! { <a href="/sign-in/backup-code">{ "Use a backup code" }</a> }}
//!         />
//!     }
//! }
//! ```

use std::rc::Rc;

use totp_login_core::config::DEFAULT_INPUT_ID;
use totp_login_core::view::{classes, input_attrs};
use totp_login_core::{
    build_view, CodeEntry, CompleteLoginPayload, DefaultTranslator, MethodDescriptor, Translator,
    DEFAULT_CODE_LENGTH,
};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Translator shared through a `ContextProvider`.
#[derive(Clone)]
pub struct TranslatorContext(pub Rc<dyn Translator>);

impl TranslatorContext {
    pub fn new(translator: impl Translator + 'static) -> Self {
        Self(Rc::new(translator))
    }
}

impl PartialEq for TranslatorContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Properties, PartialEq)]
pub struct TotpLoginFormProps {
    pub method: MethodDescriptor,
    pub on_complete_login: Callback<CompleteLoginPayload>,
    #[prop_or(DEFAULT_CODE_LENGTH)]
    pub code_length: usize,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_else(|| AttrValue::from(DEFAULT_INPUT_ID))]
    pub input_id: AttrValue,
    #[prop_or_default]
    pub more_options_control: Html,
}

/// TOTP code entry form.
///
/// Focuses the code input once after mount. A new `code_length` from the
/// parent re-targets the entry without clearing the typed code.
#[function_component(TotpLoginForm)]
pub fn totp_login_form(props: &TotpLoginFormProps) -> Html {
    let translator = use_context::<TranslatorContext>()
        .map(|ctx| ctx.0)
        .unwrap_or_else(|| Rc::new(DefaultTranslator));

    let entry = {
        let code_length = props.code_length;
        use_state(move || {
            CodeEntry::new(code_length).unwrap_or_else(|e| {
                tracing::error!("{}; falling back to {} characters", e, DEFAULT_CODE_LENGTH);
                CodeEntry::default()
            })
        })
    };
    let input_ref = use_node_ref();

    {
        let input_ref = input_ref.clone();
        use_effect_with((), move |_| {
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                if let Err(e) = input.focus() {
                    tracing::warn!("could not focus code input: {:?}", e);
                }
            }
        });
    }

    {
        let entry = entry.clone();
        use_effect_with(props.code_length, move |code_length| {
            if entry.code_length() != *code_length {
                let mut next = (*entry).clone();
                match next.set_code_length(*code_length) {
                    Ok(()) => entry.set(next),
                    Err(e) => tracing::error!("{}; keeping {} characters", e, entry.code_length()),
                }
            }
        });
    }

    // The effect above persists a new length after this render; render and
    // handlers use the prop directly so nothing lags behind it.
    let code_length = props.code_length;
    let current = entry.at_length(code_length);

    let oninput = {
        let entry = entry.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut next = (*entry).clone();
            next.change(value);
            entry.set(next);
        })
    };

    let onkeyup = {
        let entry = entry.clone();
        let on_complete_login = props.on_complete_login.clone();
        Callback::from(move |e: KeyboardEvent| {
            if let Some(payload) = entry.at_length(code_length).key_up(e.key_code()) {
                tracing::debug!("submitting TOTP code");
                on_complete_login.emit(payload);
            }
        })
    };

    let onclick = {
        let entry = entry.clone();
        let on_complete_login = props.on_complete_login.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(payload) = entry.at_length(code_length).submission() {
                tracing::debug!("submitting TOTP code");
                on_complete_login.emit(payload);
            }
        })
    };

    let view = build_view::<()>(
        &current,
        &props.method,
        props.error.as_deref(),
        None,
        &props.input_id,
        translator.as_ref(),
    );
    let label_for = view.input.id.clone();

    html! {
        <div class={classes::FORM}>
            <p class={classes::INSTRUCTIONS}>
                { view.instructions.text }
                if let Some(link) = view.instructions.support_link {
                    { " " }
                    <a class={classes::SUPPORT_LINK} href={link.href} target="_blank" rel="noopener noreferrer">
                        { link.text }
                    </a>
                }
            </p>
            <div class={classes::FIELD}>
                <label class={classes::LABEL} for={label_for}>{ view.input.label }</label>
                <input
                    ref={input_ref}
                    class={classes::INPUT}
                    id={view.input.id}
                    name={input_attrs::NAME}
                    type={input_attrs::TYPE}
                    autocomplete={input_attrs::AUTOCOMPLETE}
                    inputmode={input_attrs::INPUT_MODE}
                    maxlength={view.input.max_length.to_string()}
                    value={view.input.value}
                    {oninput}
                    {onkeyup}
                />
            </div>
            if let Some(message) = view.error {
                <p class={classes::ERROR} role="alert">{ message }</p>
            }
            if let Some(thumbnail) = view.thumbnail {
                <img class={classes::THUMBNAIL} src={thumbnail.src} alt={thumbnail.alt} />
            }
            <div class={classes::ACTIONS}>
                <button
                    class={classes::SUBMIT}
                    type="button"
                    disabled={view.actions.submit_disabled}
                    {onclick}
                >
                    { view.actions.submit_label }
                </button>
                { props.more_options_control.clone() }
            </div>
        </div>
    }
}
