//! HTML rendering of [`EmployerPage`].
//!
//! Element ids and classes here are the hooks the client script uses, so
//! both sides must agree on them. Messages, field names, and the API path
//! reach the script through the `page-config` JSON block rendered by
//! [`client_config`], never as literals in the script.

use serde_json::{Value, json};

use super::page::{
    EMPTY_MESSAGE, ERROR_TITLE, LIST_FAILED_MESSAGE, LOADING_MESSAGE, SUBMIT_FAILED_MESSAGE,
    SUCCESS_TEXT, SUCCESS_TITLE, UNKNOWN_ERROR_MESSAGE,
};
use super::page::{EmployerPage, FormField, Listing, Notification, NotificationKind};
use crate::persistence::Employer;

/// Path the page loads its client script from.
pub const SCRIPT_PATH: &str = "/assets/employers.js";

/// Path of the employer resource the script talks to.
pub const API_PATH: &str = "/api/employers";

/// Id of the JSON block carrying [`client_config`].
pub const CONFIG_ELEMENT_ID: &str = "page-config";

/// Keys of `messages` in [`client_config`].
pub const MESSAGE_KEYS: [&str; 8] = [
    "loading",
    "empty",
    "listFailed",
    "submitFailed",
    "unknownError",
    "successTitle",
    "successText",
    "errorTitle",
];

const STYLE: &str = "body{font-family:sans-serif;margin:0}main{padding:1.5rem}\
h1{font-size:1.5rem;font-weight:bold;margin-bottom:1rem}\
table{border-collapse:collapse;min-width:100%}th,td{border:1px solid #e5e7eb;padding:.5rem 1rem}\
thead tr{background:#f3f4f6}tbody tr:hover{background:#f9fafb}\
.form-grid{display:grid;gap:1rem;grid-template-columns:repeat(auto-fit,minmax(16rem,1fr))}\
input{border:1px solid #d1d5db;padding:.5rem;border-radius:.25rem}\
button{margin-top:1rem;background:#3b82f6;color:#fff;padding:.5rem 1rem;border:0;border-radius:.25rem}\
.section{margin-top:4rem}.error{color:#b91c1c}\
#toast{position:fixed;top:1rem;right:1rem;padding:1rem;border-radius:.25rem;color:#fff}\
#toast[hidden]{display:none}.toast-success{background:green}.toast-error{background:red}";

/// Settings shared with the client script: API path, form fields in
/// layout order, and every user-visible message.
#[must_use]
pub fn client_config() -> Value {
    let fields: Vec<Value> = FormField::ALL
        .into_iter()
        .map(|f| json!({ "name": f.name(), "label": f.label() }))
        .collect();
    let messages = [
        LOADING_MESSAGE,
        EMPTY_MESSAGE,
        LIST_FAILED_MESSAGE,
        SUBMIT_FAILED_MESSAGE,
        UNKNOWN_ERROR_MESSAGE,
        SUCCESS_TITLE,
        SUCCESS_TEXT,
        ERROR_TITLE,
    ];
    let messages: serde_json::Map<String, Value> = MESSAGE_KEYS
        .into_iter()
        .zip(messages)
        .map(|(key, text)| (key.to_string(), Value::from(text)))
        .collect();
    json!({
        "endpoint": API_PATH,
        "fields": fields,
        "messages": messages,
    })
}

fn render_config() -> String {
    // `</` inside a script element would end it early
    let config = client_config().to_string().replace("</", "<\\/");
    format!("<script type=\"application/json\" id=\"{CONFIG_ELEMENT_ID}\">{config}</script>\n")
}

/// Renders the full HTML document for the page.
#[must_use]
pub fn render_page(page: &EmployerPage) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html lang=\"pt-BR\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>Empregadores</title>\n",
    );
    html.push_str(&format!("<style>{STYLE}</style>\n"));
    html.push_str(&render_config());
    html.push_str(&format!("<script src=\"{SCRIPT_PATH}\" defer></script>\n"));
    html.push_str("</head>\n<body>\n<main>\n<h1>Lista de Empregados</h1>\n");
    html.push_str(&render_listing(page.listing()));
    html.push_str(&render_form(page));
    html.push_str(&render_notification(page.notification()));
    html.push_str("</main>\n</body>\n</html>\n");
    html
}

/// Renders the listing region for the given state.
#[must_use]
pub fn render_listing(listing: Listing<'_>) -> String {
    let (state, inner) = match listing {
        Listing::Loading => ("loading", format!("<p>{LOADING_MESSAGE}</p>")),
        Listing::Failed(message) => (
            "failed",
            format!("<p class=\"error\">{}</p>", escape_html(message)),
        ),
        Listing::Empty => ("empty", format!("<p>{EMPTY_MESSAGE}</p>")),
        Listing::Populated(rows) => ("populated", render_table(rows)),
    };
    format!("<section id=\"listing\" data-state=\"{state}\">{inner}</section>\n")
}

fn render_table(rows: &[Employer]) -> String {
    let mut html = String::from("<table>\n<thead>\n<tr>");
    for field in FormField::ALL {
        html.push_str(&format!("<th>{}</th>", field.label()));
    }
    html.push_str("</tr>\n</thead>\n<tbody id=\"employers-body\">\n");
    for employer in rows {
        html.push_str(&render_row(employer));
    }
    html.push_str("</tbody>\n</table>");
    html
}

/// Renders one table row.
#[must_use]
pub fn render_row(employer: &Employer) -> String {
    format!(
        "<tr data-id=\"{}\"><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
        employer.id,
        escape_html(&employer.name),
        escape_html(&employer.email),
        escape_html(&employer.status),
        employer.admission_date.format("%Y-%m-%d"),
    )
}

fn render_form(page: &EmployerPage) -> String {
    let mut html = String::from(
        "<div class=\"section\">\n<h1>Criar Novo Empregado</h1>\n\
         <form id=\"employer-form\">\n<div class=\"form-grid\">\n",
    );
    for field in FormField::ALL {
        let placeholder = match field {
            FormField::DataAdmissao => String::new(),
            _ => format!(" placeholder=\"{}\"", field.label()),
        };
        html.push_str(&format!(
            "<input type=\"{}\" name=\"{}\"{placeholder} value=\"{}\" required>\n",
            field.input_type(),
            field.name(),
            escape_html(page.form().get(field)),
        ));
    }
    html.push_str("</div>\n<button type=\"submit\">Adicionar Empregador</button>\n</form>\n</div>\n");
    html
}

fn render_notification(notification: Option<&Notification>) -> String {
    match notification {
        None => "<div id=\"toast\" role=\"status\" hidden></div>\n".to_string(),
        Some(n) => {
            let class = match n.kind {
                NotificationKind::Success => "toast-success",
                NotificationKind::Error => "toast-error",
            };
            format!(
                "<div id=\"toast\" role=\"status\" class=\"{class}\"><strong>{}</strong> {}</div>\n",
                escape_html(&n.title),
                escape_html(&n.text),
            )
        }
    }
}

/// Escapes text for use in HTML content and double-quoted attributes.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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
