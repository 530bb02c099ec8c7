//! Form controls.

use std::fmt::Write;

use super::escape;

/// Range slider showing its current value.
pub fn slider(name: &str, label: &str, min: u32, max: u32, value: u32) -> String {
    let value = value.clamp(min, max);
    format!(
        "<label class=\"field\">{label}: <output id=\"{name}-value\">{value}</output>\
         <input type=\"range\" name=\"{name}\" min=\"{min}\" max=\"{max}\" value=\"{value}\" \
         oninput=\"document.getElementById('{name}-value').value = this.value\"></label>",
        label = escape(label),
    )
}

/// Drop-down of `(value, label)` options. With `submit_on_change` the form
/// re-renders as soon as the choice changes.
pub fn select(
    name: &str,
    label: &str,
    options: &[(&str, &str)],
    selected: &str,
    submit_on_change: bool,
) -> String {
    let mut html = format!("<label class=\"field\">{}<select name=\"{name}\"", escape(label));
    if submit_on_change {
        html.push_str(" onchange=\"this.form.submit()\"");
    }
    html.push('>');
    for (value, text) in options {
        let mark = if *value == selected { " selected" } else { "" };
        let _ = write!(
            html,
            "<option value=\"{}\"{mark}>{}</option>",
            escape(value),
            escape(text)
        );
    }
    html.push_str("</select></label>");
    html
}

/// Radio group of `(value, label)` options.
pub fn radio(name: &str, label: &str, options: &[(&str, &str)], selected: &str) -> String {
    let mut html = format!("<fieldset class=\"field\"><legend>{}</legend>", escape(label));
    for (value, text) in options {
        let mark = if *value == selected { " checked" } else { "" };
        let _ = write!(
            html,
            "<label><input type=\"radio\" name=\"{name}\" value=\"{}\"{mark}> {}</label>",
            escape(value),
            escape(text)
        );
    }
    html.push_str("</fieldset>");
    html
}

/// Single-line text input.
pub fn text_input(name: &str, label: &str, value: &str, placeholder: &str) -> String {
    format!(
        "<label class=\"field\">{}<input type=\"text\" name=\"{name}\" value=\"{}\" \
         placeholder=\"{}\" autocomplete=\"off\"></label>",
        escape(label),
        escape(value),
        escape(placeholder)
    )
}

/// Numeric input.
pub fn number_input(name: &str, label: &str, min: u32, max: u32, value: u32) -> String {
    format!(
        "<label class=\"field\">{}<input type=\"number\" name=\"{name}\" min=\"{min}\" \
         max=\"{max}\" value=\"{value}\"></label>",
        escape(label)
    )
}

/// The redraw and run buttons closing every algorithm form.
pub fn actions(run_label: &str) -> String {
    format!(
        "<div class=\"actions\"><button type=\"submit\">Update circuit</button>\
         <button type=\"submit\" name=\"run\" value=\"1\" class=\"primary\">{}</button></div>",
        escape(run_label)
    )
}
