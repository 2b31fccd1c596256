//! Static HTML preview of a dataset.

use crate::dataset::Dataset;

/// Render a dataset as a single HTML `<table>` fragment.
///
/// Cells are written in their literal export form and entity-escaped, so
/// the output is safe to embed regardless of cell content. Pure function,
/// no I/O.
pub fn render_html(dataset: &Dataset) -> String {
    let mut html = String::new();

    html.push_str("<table>\n<thead>\n<tr>");
    for name in &dataset.headers {
        html.push_str("<th>");
        push_escaped(&mut html, name);
        html.push_str("</th>");
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");

    for row in &dataset.rows {
        html.push_str("<tr>");
        for cell in row {
            html.push_str("<td>");
            push_escaped(&mut html, &cell.to_string());
            html.push_str("</td>");
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</tbody>\n</table>\n");
    html
}

/// Render a dataset as a complete standalone HTML page.
pub fn render_page(dataset: &Dataset, title: &str) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>");
    push_escaped(&mut html, title);
    html.push_str("</title>\n<style>\n");
    html.push_str(
        "table { border-collapse: collapse; font: 14px sans-serif; }\n\
         th, td { border: 1px solid #ccc; padding: 4px 8px; }\n\
         th { background: #f0f0f0; text-align: left; }\n",
    );
    html.push_str("</style>\n</head>\n<body>\n");
    html.push_str(&render_html(dataset));
    html.push_str("</body>\n</html>\n");
    html
}

fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
