// src/response/report.rs
//
// HTML report listing every check with a pass/fail marker. The template is
// minified and split once, then shared by every request.

use crate::health::AggregateResult;
use once_cell::sync::OnceCell;

const REPORT_TEMPLATE: &str = r#"
<!DOCTYPE html>
<html>
    <head>
        <meta charset="utf-8">
        <title>Health Status</title>
        <style>
            table {
                border-collapse: collapse;
            }
            tr {
                height: 2em;
            }
            td {
                padding-left: 0.7em;
                padding-right: 0.7em;
            }
            .status {
                text-align: center;
            }
            .failing {
                background-color: red;
            }
            .passing {
                background-color: lawngreen;
            }
        </style>
    </head>
    <body>
        <table>
            {{rows}}
        </table>
    </body>
</html>
"#;

const ROWS_PLACEHOLDER: &str = "{{rows}}";

const PASSING_GLYPH: &str = "&#x2714;";
const FAILING_GLYPH: &str = "&#x2718;";

static REPORT: OnceCell<ReportTemplate> = OnceCell::new();

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    #[error("template has no rows placeholder")]
    MissingRows,

    #[error("template has more than one rows placeholder")]
    RepeatedRows,
}

/// A minified report document split around the row placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTemplate {
    head: String,
    tail: String,
}

impl ReportTemplate {
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let minified = minify(source);
        let mut parts = minified.split(ROWS_PLACEHOLDER);
        let head = parts.next().unwrap_or_default().to_string();
        let tail = parts.next().ok_or(TemplateError::MissingRows)?.to_string();
        if parts.next().is_some() {
            return Err(TemplateError::RepeatedRows);
        }
        Ok(Self { head, tail })
    }

    pub fn render(&self, result: &AggregateResult) -> String {
        let rows = 96 * result.outcomes().len();
        let mut body = String::with_capacity(self.head.len() + self.tail.len() + rows);
        body.push_str(&self.head);
        for outcome in result.outcomes() {
            let (class, glyph) = if outcome.is_passing() {
                ("passing", PASSING_GLYPH)
            } else {
                ("failing", FAILING_GLYPH)
            };
            body.push_str(r#"<tr class=""#);
            body.push_str(class);
            body.push_str(r#""><td class="status">"#);
            body.push_str(glyph);
            body.push_str("</td><td>");
            body.push_str(&html_escape::encode_text(&outcome.name));
            body.push_str("</td></tr>");
        }
        body.push_str(&self.tail);
        body
    }
}

/// The built-in report template, built on first use.
pub fn template() -> Result<&'static ReportTemplate, TemplateError> {
    REPORT.get_or_try_init(|| {
        tracing::debug!("Building health report template");
        ReportTemplate::parse(REPORT_TEMPLATE)
    })
}

/// Drops indentation and line breaks, then tightens CSS declarations.
fn minify(source: &str) -> String {
    let joined: String = source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    joined
        .replace(" {", "{")
        .replace(": ", ":")
        .replace(";}", "}")
}
