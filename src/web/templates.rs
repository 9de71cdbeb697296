//! Server-rendered HTML for the single-page form.
//!
//! No template engine: the page is one form plus conditional output
//! sections, rendered with format! and escaped by hand.

use uuid::Uuid;

use super::session::Session;

/// Basic HTML escaping for user- and model-supplied text.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Render the full page: input form plus whatever the session holds.
pub fn render_page(session_id: Uuid, session: &Session) -> String {
    let mut body = String::new();

    body.push_str("<h1>Flowcode Assistant</h1>\n");

    if let Some(ref warning) = session.warning {
        body.push_str(&format!(
            "<p class=\"warning\">{}</p>\n",
            html_escape(warning)
        ));
    }

    // Input form: image upload OR pseudocode text, one submission.
    body.push_str(&format!(
        concat!(
            "<form method=\"post\" action=\"/submit\" enctype=\"multipart/form-data\">\n",
            "<input type=\"hidden\" name=\"session\" value=\"{id}\">\n",
            "<label>Upload a flowchart image</label>\n",
            "<input type=\"file\" name=\"image\" accept=\".png,.jpg,.jpeg\">\n",
            "<p><strong>OR</strong></p>\n",
            "<label>Enter pseudocode</label>\n",
            "<textarea name=\"pseudocode\" rows=\"6\"></textarea>\n",
            "<button type=\"submit\">Submit</button>\n",
            "</form>\n",
        ),
        id = session_id
    ));

    // Pseudocode section: shown after a successful image submission,
    // editable, with a validate action to regenerate code.
    if !session.pseudocode.is_empty() && session.image_name.is_some() {
        body.push_str("<h2>Pseudocode</h2>\n");
        if let Some(ref prefix) = session.pseudocode_prefix {
            body.push_str(&format!("<p>{}</p>\n", html_escape(prefix)));
        }
        body.push_str(&format!(
            concat!(
                "<form method=\"post\" action=\"/validate\">\n",
                "<input type=\"hidden\" name=\"session\" value=\"{id}\">\n",
                "<textarea name=\"pseudocode\" rows=\"10\">{pseudocode}</textarea>\n",
                "<button type=\"submit\">Validate and generate code</button>\n",
                "</form>\n",
            ),
            id = session_id,
            pseudocode = html_escape(&session.pseudocode)
        ));
        if let Some(ref suffix) = session.pseudocode_suffix {
            body.push_str(&format!("<p>{}</p>\n", html_escape(suffix)));
        }
    }

    if !session.code.is_empty() {
        body.push_str("<h2>Final code</h2>\n");
        body.push_str(&format!(
            "<pre><code>{}</code></pre>\n",
            html_escape(&session.code)
        ));
    }

    page("Flowcode Assistant", &body)
}

/// Render a bare error page for failures that propagate out of a handler.
pub fn render_error(message: &str) -> String {
    page(
        "Flowcode Assistant - error",
        &format!("<h1>Something went wrong</h1>\n<pre>{}</pre>\n", html_escape(message)),
    )
}

fn page(title: &str, body: &str) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>\n<html>\n<head>\n",
            "<meta charset=\"utf-8\">\n<title>{title}</title>\n",
            "<style>\n",
            "body {{ max-width: 48rem; margin: 2rem auto; font-family: sans-serif; }}\n",
            "textarea {{ width: 100%; font-family: monospace; }}\n",
            "pre {{ background: #f4f4f4; padding: 1rem; overflow-x: auto; }}\n",
            ".warning {{ color: #a00; }}\n",
            "</style>\n</head>\n<body>\n{body}</body>\n</html>\n",
        ),
        title = title,
        body = body
    )
}
