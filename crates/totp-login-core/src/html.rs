// Server-side HTML rendering of the login form.
//
// All text and attribute values are escaped. The "more options" fragment is
// caller-owned markup and is inserted verbatim.

use std::fmt::Write;

use crate::view::{classes, input_attrs, FormView};

/// Escape text for use in HTML content and double-quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render a form view to an HTML fragment.
pub fn render_html<F: AsRef<str>>(view: &FormView<'_, F>) -> String {
    let mut html = String::new();
    // Writing into a String cannot fail.
    let _ = write_html(&mut html, view);
    html
}

fn write_html<F: AsRef<str>>(out: &mut String, view: &FormView<'_, F>) -> std::fmt::Result {
    write!(out, r#"<div class="{}">"#, classes::FORM)?;

    write!(
        out,
        r#"<p class="{}">{}"#,
        classes::INSTRUCTIONS,
        escape_html(&view.instructions.text)
    )?;
    if let Some(link) = &view.instructions.support_link {
        write!(
            out,
            r#" <a class="{}" href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
            classes::SUPPORT_LINK,
            escape_html(&link.href),
            escape_html(&link.text)
        )?;
    }
    out.push_str("</p>");

    let input_id = escape_html(&view.input.id);
    write!(
        out,
        r#"<div class="{field}"><label class="{label}" for="{id}">{text}</label><input class="{input}" id="{id}" name="{name}" type="{ty}" autocomplete="{ac}" inputmode="{mode}" maxlength="{max}" value="{value}"></div>"#,
        field = classes::FIELD,
        label = classes::LABEL,
        id = input_id,
        text = escape_html(&view.input.label),
        input = classes::INPUT,
        name = input_attrs::NAME,
        ty = input_attrs::TYPE,
        ac = input_attrs::AUTOCOMPLETE,
        mode = input_attrs::INPUT_MODE,
        max = view.input.max_length,
        value = escape_html(&view.input.value),
    )?;

    if let Some(error) = &view.error {
        write!(out, r#"<p class="{}" role="alert">{}</p>"#, classes::ERROR, escape_html(error))?;
    }

    if let Some(thumbnail) = &view.thumbnail {
        write!(
            out,
            r#"<img class="{}" src="{}" alt="{}">"#,
            classes::THUMBNAIL,
            escape_html(&thumbnail.src),
            escape_html(&thumbnail.alt)
        )?;
    }

    write!(out, r#"<div class="{}">"#, classes::ACTIONS)?;
    write!(
        out,
        r#"<button class="{}" type="button"{}>{}</button>"#,
        classes::SUBMIT,
        if view.actions.submit_disabled { " disabled" } else { "" },
        escape_html(&view.actions.submit_label)
    )?;
    if let Some(fragment) = view.actions.more_options {
        out.push_str(fragment.as_ref());
    }
    out.push_str("</div></div>");

    Ok(())
}
