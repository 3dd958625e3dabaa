//! HTML rendering of resource pages and error pages.

use crate::PageMetadata;
use axum::http::StatusCode;
use lodbrowse::view::{escape_html, DisplayRow, DisplayValue};
use lodbrowse::ResourcePage;
use std::fmt::{self, Write};

/// Loads the literal preview of a resource link the first time its tooltip is shown.
const LITERALS_SCRIPT: &str = r"
document.querySelectorAll('a.resource-link').forEach(function (link) {
  link.addEventListener('mouseenter', function () {
    var target = link.parentNode.querySelector('.literals');
    if (!target || target.dataset.loaded) { return; }
    target.dataset.loaded = 'true';
    fetch('/literals?uri=' + encodeURIComponent(BASE_URI + link.getAttribute('href')))
      .then(function (response) { return response.text(); })
      .then(function (html) { target.innerHTML = html; });
  });
});
";

/// Renders the page of a resource. `path` is the request path without its `.html` suffix.
pub fn resource_page(
    page: &ResourcePage,
    path: &str,
    meta: &PageMetadata,
) -> Result<String, fmt::Error> {
    let uri = escape_html(&page.uri);
    let title = page.title.as_deref().map_or_else(|| uri.clone(), escape_html);
    let path = escape_html(path);

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    writeln!(html, "<title>{title}</title>")?;
    writeln!(
        html,
        "<link rel=\"alternate\" type=\"application/json\" href=\"{path}.json\">"
    )?;
    writeln!(
        html,
        "<link rel=\"alternate\" type=\"application/x-trig\" href=\"{path}.rdf\">"
    )?;
    html.push_str("</head>\n<body>\n<header>\n");
    writeln!(html, "<h1>{title}</h1>")?;
    writeln!(html, "<p class=\"uri\"><a href=\"{uri}\">{uri}</a></p>")?;
    writeln!(
        html,
        "<p class=\"formats\"><a href=\"{path}.json\">json</a> <a href=\"{path}.rdf\">rdf</a></p>"
    )?;
    html.push_str("</header>\n");

    if !page.images.is_empty() {
        html.push_str("<div class=\"images\">\n");
        for image in &page.images {
            writeln!(html, "<img src=\"{}\" alt=\"\">", escape_html(image))?;
        }
        html.push_str("</div>\n");
    }

    if !page.as_subject.is_empty() {
        html.push_str("<h2>As subject</h2>\n");
        write_count(&mut html, page.as_subject.len(), page.subject_total)?;
        write_table(
            &mut html,
            &[("p", "Predicate"), ("o", "Object"), ("g", "Graph")],
            &page.as_subject,
        )?;
    }
    if !page.as_object.is_empty() {
        html.push_str("<h2>As object</h2>\n");
        write_count(&mut html, page.as_object.len(), page.object_total)?;
        write_table(
            &mut html,
            &[("s", "Subject"), ("p", "Predicate"), ("g", "Graph")],
            &page.as_object,
        )?;
    }

    write_footer(&mut html, meta)?;
    if meta.fetch_literals {
        writeln!(
            html,
            "<script>\nvar BASE_URI = {};{LITERALS_SCRIPT}</script>",
            js_string(&meta.base_uri)
        )?;
    }
    html.push_str("</body>\n</html>\n");
    Ok(html)
}

/// Renders the page shown for failed requests.
pub fn error_page(status: StatusCode, message: &str) -> String {
    let code = status.as_u16();
    let reason = status.canonical_reason().unwrap_or("Error");
    let message = escape_html(message).replace("\n\n", "</p>\n<p>");
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{code} {reason}</title>\n</head>\n<body>\n\
         <h1>{code} {reason}</h1>\n<p>{message}</p>\n</body>\n</html>\n"
    )
}

fn write_count(html: &mut String, shown: usize, total: usize) -> fmt::Result {
    if total > shown {
        writeln!(html, "<p class=\"count\">Showing {shown} of {total}</p>")?;
    }
    Ok(())
}

fn write_table(html: &mut String, columns: &[(&str, &str)], rows: &[DisplayRow]) -> fmt::Result {
    html.push_str("<table>\n<tr>");
    for (_, heading) in columns {
        write!(html, "<th>{heading}</th>")?;
    }
    html.push_str("</tr>\n");
    for row in rows {
        html.push_str("<tr>");
        for (variable, _) in columns {
            let cell = row.get(*variable).map(DisplayValue::to_html).unwrap_or_default();
            write!(html, "<td>{cell}</td>")?;
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</table>\n");
    Ok(())
}

fn write_footer(html: &mut String, meta: &PageMetadata) -> fmt::Result {
    html.push_str("<footer>\n");
    writeln!(
        html,
        "<p>Data from <a href=\"{0}\">{0}</a></p>",
        escape_html(&meta.endpoint)
    )?;
    if !meta.license.is_empty() {
        let license = escape_html(&meta.license);
        if meta.license_url.is_empty() {
            writeln!(html, "<p>License: {license}</p>")?;
        } else {
            writeln!(
                html,
                "<p>License: <a href=\"{}\">{license}</a></p>",
                escape_html(&meta.license_url)
            )?;
        }
    }
    html.push_str("</footer>\n");
    Ok(())
}

/// Quotes `value` as a JavaScript string that is safe inside a `<script>` element.
fn js_string(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '<' => quoted.push_str("\\u003c"),
            '\n' => quoted.push_str("\\n"),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
