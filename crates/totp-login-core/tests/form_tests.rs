//! Login form integration tests.
//!
//! Covers: change handling, submit eligibility, Enter and click submission,
//! conditional rendering (support link, error, thumbnail, more options),
//! focus on mount, translation, and payload shape.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde_json::json;
use totp_login_core::i18n::keys;
use totp_login_core::*;

type Calls = Rc<RefCell<Vec<CompleteLoginPayload>>>;

fn method() -> MethodDescriptor {
    MethodDescriptor::new("Authenticator app")
}

fn form_with(method: MethodDescriptor, code_length: usize, error: Option<&str>) -> (TotpLoginForm, Calls) {
    let calls: Calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    let mut props = LoginFormProps::new(method, move |payload| sink.borrow_mut().push(payload))
        .with_code_length(code_length);
    if let Some(error) = error {
        props = props.with_error(error);
    }
    (TotpLoginForm::new(props).unwrap(), calls)
}

fn default_form() -> (TotpLoginForm, Calls) {
    form_with(method(), DEFAULT_CODE_LENGTH, None)
}

fn html_of(form: &TotpLoginForm) -> String {
    render_html(&form.render(&DefaultTranslator))
}

// ── Change handler ──────────────────────────────────────────────

#[test]
fn change_stores_exact_value() {
    let (mut form, _) = default_form();
    for value in ["", "1", "12a", "  ", "123456789", "١٢٣٤٥٦", "<&>"] {
        form.on_change(value);
        assert_eq!(form.code(), value);
    }
}

#[test]
fn rendered_input_reflects_code() {
    let (mut form, _) = default_form();
    form.on_change("42");
    assert_eq!(form.render(&DefaultTranslator).input.value, "42");
}

// ── Submit eligibility ──────────────────────────────────────────

#[test]
fn five_digits_keep_submit_disabled() {
    let (mut form, _) = default_form();
    form.on_change("12345");
    assert!(!form.can_submit());
    assert!(form.render(&DefaultTranslator).actions.submit_disabled);
    assert!(html_of(&form).contains("disabled"));
}

#[test]
fn six_digits_enable_submit() {
    let (mut form, _) = default_form();
    form.on_change("123456");
    assert!(form.can_submit());
    assert!(!form.render(&DefaultTranslator).actions.submit_disabled);
    assert!(!html_of(&form).contains("disabled"));
}

#[test]
fn eligibility_ignores_character_class() {
    let (mut form, _) = default_form();
    form.on_change("abcdef");
    assert!(form.can_submit());
}

#[test]
fn too_long_is_not_eligible() {
    let (mut form, _) = default_form();
    form.on_change("1234567");
    assert!(!form.can_submit());
}

#[test]
fn custom_code_length() {
    let (mut form, _) = form_with(method(), 8, None);
    form.on_change("123456");
    assert!(!form.can_submit());
    form.on_change("12345678");
    assert!(form.can_submit());
}

// ── Key-up handler ──────────────────────────────────────────────

#[test]
fn enter_with_eligible_code_submits_once() {
    let (mut form, calls) = default_form();
    form.on_change("123456");
    assert!(form.on_key_up(ENTER_KEY_CODE));
    assert_eq!(*calls.borrow(), vec![CompleteLoginPayload { code: "123456".into() }]);
}

#[test]
fn enter_with_ineligible_code_does_nothing() {
    let (mut form, calls) = default_form();
    form.on_change("12345");
    assert!(!form.on_key_up(ENTER_KEY_CODE));
    assert!(calls.borrow().is_empty());
}

#[test]
fn other_keys_do_nothing() {
    let (mut form, calls) = default_form();
    form.on_change("123456");
    for key_code in [9, 27, 32, 48, 57] {
        assert!(!form.on_key_up(key_code));
    }
    assert!(calls.borrow().is_empty());
}

// ── Submit click ────────────────────────────────────────────────

#[test]
fn click_while_disabled_does_nothing() {
    let (mut form, calls) = default_form();
    assert!(!form.on_submit_click());
    form.on_change("123");
    assert!(!form.on_submit_click());
    assert!(calls.borrow().is_empty());
}

#[test]
fn click_while_enabled_submits_once() {
    let (mut form, calls) = default_form();
    form.on_change("654321");
    assert!(form.on_submit_click());
    assert_eq!(calls.borrow().len(), 1);
    assert_eq!(calls.borrow()[0].code, "654321");
}

#[test]
fn payload_shape() {
    let payload = CompleteLoginPayload { code: "123456".into() };
    assert_eq!(serde_json::to_value(&payload).unwrap(), json!({ "code": "123456" }));
}

// ── Support link ────────────────────────────────────────────────

#[test]
fn no_support_link_without_url() {
    let (form, _) = default_form();
    assert!(form.render(&DefaultTranslator).instructions.support_link.is_none());
    assert!(!html_of(&form).contains("<a "));
}

#[test]
fn support_link_uses_exact_url() {
    let url = "https://help.example.com/mfa?topic=totp&lang=en";
    let (form, _) = form_with(method().with_support_link(url), 6, None);
    let view = form.render(&DefaultTranslator);
    assert_eq!(view.instructions.support_link.map(|l| l.href).as_deref(), Some(url));
    assert!(html_of(&form).contains(r#"href="https://help.example.com/mfa?topic=totp&amp;lang=en""#));
}

// ── Error message ───────────────────────────────────────────────

#[test]
fn error_renders_when_present() {
    let (form, _) = form_with(method(), 6, Some("That code didn't work."));
    let html = html_of(&form);
    assert!(html.contains(r#"role="alert""#));
    assert!(html.contains("That code didn&#39;t work."));
}

#[test]
fn no_error_element_without_error() {
    let (form, _) = default_form();
    assert!(form.render(&DefaultTranslator).error.is_none());
    assert!(!html_of(&form).contains("totp-login__error"));
}

#[test]
fn error_prop_update_keeps_code() {
    let (mut form, calls) = default_form();
    form.on_change("123456");
    form.on_submit_click();
    let props = form.props().clone().with_error("Invalid code");
    form.set_props(props).unwrap();
    assert_eq!(form.code(), "123456");
    assert!(html_of(&form).contains("Invalid code"));
    assert_eq!(calls.borrow().len(), 1);
}

#[test]
fn length_change_rederives_view() {
    let mut entry = CodeEntry::default();
    entry.change("12345678");
    let method = method();

    let before = build_view::<()>(&entry, &method, None, None, "totp-code", &DefaultTranslator);
    assert!(before.actions.submit_disabled);

    let current = entry.at_length(8);
    let after = build_view::<()>(&current, &method, None, None, "totp-code", &DefaultTranslator);
    assert_eq!(after.input.label, "Enter your 8-digit code");
    assert_eq!(after.input.max_length, 8);
    assert_eq!(after.input.value, "12345678");
    assert!(!after.actions.submit_disabled);
    assert_eq!(current.submission(), Some(CompleteLoginPayload { code: "12345678".into() }));
}

#[test]
fn surrogate_pairs_fill_max_length() {
    let (mut form, calls) = default_form();
    form.on_change("😀😀😀");
    assert!(form.can_submit());
    assert!(form.on_submit_click());
    assert_eq!(calls.borrow()[0].code, "😀😀😀");
}

// ── Thumbnail and more options ──────────────────────────────────

#[test]
fn thumbnail_uses_method_name_as_alt() {
    let (form, _) = form_with(method().with_thumbnail("https://cdn.example.com/totp.svg"), 6, None);
    assert!(html_of(&form).contains(r#"<img class="totp-login__thumbnail" src="https://cdn.example.com/totp.svg" alt="Authenticator app">"#));
}

#[test]
fn no_thumbnail_without_url() {
    let (form, _) = default_form();
    assert!(!html_of(&form).contains("<img"));
}

#[test]
fn more_options_rendered_in_actions() {
    let props = LoginFormProps::new(method(), |_| {}).with_more_options(r#"<button type="button">Use a backup code</button>"#.to_string());
    let form = TotpLoginForm::new(props).unwrap();
    let html = html_of(&form);
    let actions = html.find("totp-login__actions").unwrap();
    let more = html.find("Use a backup code").unwrap();
    assert!(more > actions);
}

// ── Mount ───────────────────────────────────────────────────────

#[derive(Default)]
struct FakeDocument {
    active_element: Option<String>,
}

struct InputHandle<'a> {
    id: String,
    document: &'a mut FakeDocument,
}

impl FocusTarget for InputHandle<'_> {
    fn focus(&mut self) -> totp_login_core::Result<()> {
        self.document.active_element = Some(self.id.clone());
        Ok(())
    }
}

#[test]
fn mount_focuses_code_input() {
    let (mut form, _) = default_form();
    let mut document = FakeDocument::default();
    assert!(document.active_element.is_none());

    let id = form.input_id().to_string();
    form.mount(&mut InputHandle { id: id.clone(), document: &mut document });

    assert_eq!(document.active_element, Some(id));
    assert_eq!(form.render(&DefaultTranslator).input.id, "totp-code");
}

#[test]
fn fresh_mount_starts_empty() {
    let (mut form, _) = default_form();
    form.on_change("123");
    drop(form);
    let (form, _) = default_form();
    assert_eq!(form.code(), "");
}

// ── Translation ─────────────────────────────────────────────────

#[test]
fn label_interpolates_code_length() {
    let (form, _) = form_with(method(), 8, None);
    assert_eq!(form.render(&DefaultTranslator).input.label, "Enter your 8-digit code");
}

#[test]
fn dictionary_translations_are_used() {
    let mut translations = HashMap::new();
    translations.insert("de".to_string(), {
        let mut m = HashMap::new();
        m.insert(keys::SUBMIT.to_string(), "Bestätigen".to_string());
        m.insert(keys::CODE_LABEL.to_string(), "{codeLength}-stelliger Code".to_string());
        m
    });
    let translator = DictionaryTranslator::for_accept_language(
        I18nOptions { translations, default_locale: None },
        "de-DE,de;q=0.9",
    );

    let (form, _) = default_form();
    let view = form.render(&translator);
    assert_eq!(view.actions.submit_label, "Bestätigen");
    assert_eq!(view.input.label, "6-stelliger Code");
    assert_eq!(view.instructions.text, keys::INSTRUCTIONS_DEFAULT);
}

// ── Config ──────────────────────────────────────────────────────

#[test]
fn config_builds_form() {
    let config = FormConfig::from_json(r#"{"codeLength": 8, "inputId": "mfa-code"}"#).unwrap();
    let form: TotpLoginForm = config.form(method(), |_| {}).unwrap();
    assert_eq!(form.input_id(), "mfa-code");
    let html = html_of(&form);
    assert!(html.contains(r#"id="mfa-code""#));
    assert!(html.contains(r#"maxlength="8""#));
}

#[test]
fn config_locale_selects_translations() {
    let mut translations = HashMap::new();
    translations.insert("de".to_string(), {
        let mut m = HashMap::new();
        m.insert(keys::SUBMIT.to_string(), "Bestätigen".to_string());
        m
    });
    translations.insert("en".to_string(), HashMap::new());

    let config = FormConfig::from_json(r#"{"defaultLocale": "de"}"#).unwrap();
    let translator = config.translator(translations);
    let (form, _) = default_form();
    assert_eq!(form.render(&translator).actions.submit_label, "Bestätigen");
}
