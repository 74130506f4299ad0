// Copyright 2026 the Iristour Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A tiny static HTML report for the demo output.

/// One report section: heading, prose, and an inline SVG.
#[derive(Debug)]
pub(crate) struct HtmlSection {
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) svg: String,
}

pub(crate) fn render_report(title: &str, sections: &[HtmlSection]) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    out.push_str(&format!("<meta charset=\"utf-8\">\n<title>{}</title>\n", escape(title)));
    out.push_str(
        "<style>\n\
         body { font-family: sans-serif; margin: 2em; max-width: 900px; }\n\
         section { margin-bottom: 3em; }\n\
         svg { border: 1px solid #ddd; }\n\
         p.note { color: #555; white-space: pre-line; }\n\
         </style>\n",
    );
    out.push_str("</head>\n<body>\n");
    out.push_str(&format!("<h1>{}</h1>\n", escape(title)));
    for section in sections {
        out.push_str("<section>\n");
        out.push_str(&format!("<h2>{}</h2>\n", escape(&section.title)));
        if !section.description.is_empty() {
            out.push_str(&format!(
                "<p class=\"note\">{}</p>\n",
                escape(&section.description)
            ));
        }
        out.push_str(&section.svg);
        out.push_str("</section>\n");
    }
    out.push_str("</body>\n</html>\n");
    out
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
