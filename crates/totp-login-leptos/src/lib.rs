//! # totp-login-leptos
//!
//! Leptos binding for the TOTP login form. The component keeps the typed
//! code in a signal and delegates eligibility and submission rules to
//! [`totp_login_core::CodeEntry`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use totp_login_leptos::*;
//! use totp_login_core::{CompleteLoginPayload, MethodDescriptor};
//! use leptos::prelude::*;
//!
//! #[component]
//! fn Challenge() -> impl IntoView {
//!     let (error, set_error) = signal(None::<String>);
//!     let method = MethodDescriptor::new("Authenticator")
//!         .with_support_link("https://help.example.com/totp");
//!
//!     view! {
//!         <TotpLoginForm
//!             method=method
//!             error=error
//!             on_complete_login=move |p: CompleteLoginPayload| verify(p.code, set_error)
//!         >
//!             <a href="/sign-in/backup-code">"Use a backup code"</a>
//!         </TotpLoginForm>
//!     }
//! }
//! ```

use std::sync::Arc;

use leptos::callback::{Callable, Callback};
use leptos::html::Input;
use leptos::prelude::*;
use totp_login_core::config::DEFAULT_INPUT_ID;
use totp_login_core::view::{classes, input_attrs};
use totp_login_core::{
    build_view, CodeEntry, CompleteLoginPayload, DefaultTranslator, MethodDescriptor, Translator,
    DEFAULT_CODE_LENGTH,
};

/// Translator stored in Leptos's reactive context system.
#[derive(Clone)]
pub struct TranslatorContext(pub Arc<dyn Translator + Send + Sync>);

/// Provide a translator to every login form below this component.
pub fn provide_translator(translator: impl Translator + Send + Sync + 'static) {
    provide_context(TranslatorContext(Arc::new(translator)));
}

/// Get the translator from context, or the default-text translator when
/// none was provided.
pub fn use_translator() -> Arc<dyn Translator + Send + Sync> {
    use_context::<TranslatorContext>()
        .map(|ctx| ctx.0)
        .unwrap_or_else(|| Arc::new(DefaultTranslator))
}

/// TOTP code entry form.
///
/// Focuses the code input once after mount. `on_complete_login` runs once
/// per Enter key release or submit click while the code has exactly
/// `code_length` characters. `code_length` and `method` may change while
/// mounted; the typed code is kept and re-checked against the new length.
/// Children render next to the submit button as the "more options" control.
#[component]
pub fn TotpLoginForm(
    /// Descriptor of the authenticator method.
    #[prop(into)]
    method: Signal<MethodDescriptor>,
    /// Called with the typed code on submit.
    #[prop(into)]
    on_complete_login: Callback<CompleteLoginPayload>,
    /// Expected number of characters.
    #[prop(into, default = Signal::stored(DEFAULT_CODE_LENGTH))]
    code_length: Signal<usize>,
    /// Failure message set by the parent after a rejected code.
    #[prop(optional, into)]
    error: MaybeProp<String>,
    /// DOM id of the code input.
    #[prop(optional, into)]
    input_id: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let translator = use_translator();
    let input_id = input_id.unwrap_or_else(|| DEFAULT_INPUT_ID.to_string());

    let initial = CodeEntry::new(code_length.get_untracked()).unwrap_or_else(|e| {
        tracing::error!("{}; falling back to {} characters", e, DEFAULT_CODE_LENGTH);
        CodeEntry::default()
    });
    let entry = RwSignal::new(initial);
    let input_ref = NodeRef::<Input>::new();

    Effect::new(move |_| {
        let length = code_length.get();
        if entry.with_untracked(|e| e.code_length() == length) {
            return;
        }
        entry.update(|e| {
            if let Err(err) = e.set_code_length(length) {
                tracing::error!("{}; keeping {} characters", err, e.code_length());
            }
        });
    });

    // Read the prop directly so the first render after a length change
    // already uses the new length.
    let current = Memo::new(move |_| {
        let length = code_length.get();
        entry.with(|e| e.at_length(length))
    });

    let form_view = {
        let input_id = input_id.clone();
        Memo::new(move |_| {
            current.with(|e| {
                method.with(|m| build_view::<()>(e, m, None, None, &input_id, translator.as_ref()))
            })
        })
    };

    Effect::new(move |focused: Option<bool>| {
        if focused == Some(true) {
            return true;
        }
        match input_ref.get() {
            Some(input) => {
                if let Err(e) = input.focus() {
                    tracing::warn!("could not focus code input: {:?}", e);
                }
                true
            }
            None => false,
        }
    });

    let on_input = move |ev| {
        let value = event_target_value(&ev);
        entry.update(|e| e.change(value));
    };

    let on_keyup = move |ev: leptos::ev::KeyboardEvent| {
        if let Some(payload) = current.with_untracked(|e| e.key_up(ev.key_code())) {
            tracing::debug!("submitting TOTP code");
            on_complete_login.run(payload);
        }
    };

    let on_click = move |_| {
        if let Some(payload) = current.with_untracked(CodeEntry::submission) {
            tracing::debug!("submitting TOTP code");
            on_complete_login.run(payload);
        }
    };

    let support_link = move || {
        form_view.with(|v| v.instructions.support_link.clone()).map(|link| {
            view! {
                " "
                <a class=classes::SUPPORT_LINK href=link.href target="_blank" rel="noopener noreferrer">
                    {link.text}
                </a>
            }
        })
    };
    let thumbnail = move || {
        form_view.with(|v| v.thumbnail.clone()).map(|t| {
            view! { <img class=classes::THUMBNAIL src=t.src alt=t.alt /> }
        })
    };
    let label_for = input_id.clone();

    view! {
        <div class=classes::FORM>
            <p class=classes::INSTRUCTIONS>
                {move || form_view.with(|v| v.instructions.text.clone())}
                {support_link}
            </p>
            <div class=classes::FIELD>
                <label class=classes::LABEL for=label_for>
                    {move || form_view.with(|v| v.input.label.clone())}
                </label>
                <input
                    node_ref=input_ref
                    class=classes::INPUT
                    id=input_id
                    name=input_attrs::NAME
                    type=input_attrs::TYPE
                    autocomplete=input_attrs::AUTOCOMPLETE
                    inputmode=input_attrs::INPUT_MODE
                    maxlength=move || form_view.with(|v| v.input.max_length.to_string())
                    prop:value=move || entry.with(|e| e.code().to_string())
                    on:input=on_input
                    on:keyup=on_keyup
                />
            </div>
            {move || error.get().map(|message| view! {
                <p class=classes::ERROR role="alert">{message}</p>
            })}
            {thumbnail}
            <div class=classes::ACTIONS>
                <button
                    class=classes::SUBMIT
                    type="button"
                    disabled=move || form_view.with(|v| v.actions.submit_disabled)
                    on:click=on_click
                >
                    {move || form_view.with(|v| v.actions.submit_label.clone())}
                </button>
                {children.map(|c| c())}
            </div>
        </div>
    }
}
