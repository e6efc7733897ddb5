//! Server-rendered HTML for the quiz pages

use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::model::QUESTIONS;
use crate::model::questions::{MAX_ANSWER, MIN_ANSWER};
use crate::service::intake::Selection;
use crate::service::presenter::{BreakdownView, SummaryView};

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;color:#111;background:#fafafa;margin:0}\
.page{max-width:680px;margin:0 auto;padding:48px 20px}\
.subtle{color:#555}.lead{font-size:1.2em}\
.section{margin-top:24px}.section--tight{margin-top:8px}\
.callout{border:1px solid #ddd;border-radius:8px;padding:16px;margin-top:32px;background:#fff}\
.error{color:#b91c1c}\
label{margin-right:16px}\
.button,button{display:inline-block;padding:10px 18px;border:0;border-radius:6px;\
background:#111;color:#fff;text-decoration:none;font-size:1em;cursor:pointer}";

fn layout(title: &str, main: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<style>{}</style>\n</head>\n<body>\n<div class=\"page\">\n<main>\n{}</main>\n</div>\n</body>\n</html>\n",
        encode_text(title),
        STYLE,
        main
    )
}

/// Placeholder page for missing or unreadable transport data
pub fn message_page(message: &str) -> String {
    layout("Load Calculator", &format!("<p>{}</p>\n", encode_text(message)))
}

/// The questionnaire, with earlier picks kept checked
pub fn questionnaire_page(selection: &Selection, error: Option<&str>) -> String {
    let mut main = String::new();
    main.push_str("<h1>Load Calculator</h1>\n");
    main.push_str("<p class=\"subtle\">Answer honestly. This takes about two minutes.</p>\n");
    main.push_str(
        "<p class=\"subtle section--tight\"><strong>0</strong> = rarely true · \
         <strong>3</strong> = almost always true</p>\n<hr>\n",
    );
    main.push_str("<form method=\"post\" action=\"/\">\n");

    for (index, question) in QUESTIONS.iter().enumerate() {
        let _ = write!(
            main,
            "<div class=\"section\">\n<p><strong>{}.</strong> {}</p>\n<div class=\"section--tight\">\n",
            index + 1,
            encode_text(question.text)
        );
        for value in MIN_ANSWER..=MAX_ANSWER {
            let checked = if selection.get(question.id) == Some(value) {
                " checked"
            } else {
                ""
            };
            let _ = writeln!(
                main,
                "<label><input type=\"radio\" name=\"{id}\" value=\"{value}\"{checked}> {value}</label>",
                id = encode_double_quoted_attribute(question.id),
            );
        }
        main.push_str("</div>\n</div>\n");
    }

    if let Some(error) = error {
        let _ = writeln!(
            main,
            "<p class=\"subtle section error\">{}</p>",
            encode_text(error)
        );
    }

    main.push_str(
        "<div class=\"section\"><button type=\"submit\">See Results</button></div>\n</form>\n",
    );

    layout("Load Calculator", &main)
}

pub fn results_page(view: &SummaryView, price_label: &str) -> String {
    let main = format!(
        "<h1>Your Load Snapshot</h1>\n\
         <p class=\"lead section\">{summary}</p>\n\
         <p class=\"subtle section--tight\">Primary load: <strong>{dominant}</strong> · \
         Current intensity: <strong>{severity}</strong></p>\n\
         <div class=\"callout\">\n\
         <p>This snapshot reflects structural load patterns, not personal shortcomings.</p>\n\
         <p class=\"subtle section--tight\">Full breakdown: <strong>{price}</strong></p>\n\
         <p class=\"subtle section--tight\">No account. No subscription.</p>\n\
         <a class=\"button\" href=\"{link}\">View Full Breakdown</a>\n\
         </div>\n",
        summary = encode_text(view.summary),
        dominant = view.dominant,
        severity = view.severity,
        price = encode_text(price_label),
        link = encode_double_quoted_attribute(&view.breakdown_link),
    );

    layout("Your Load Snapshot", &main)
}

pub fn breakdown_page(view: &BreakdownView) -> String {
    let mut main = String::new();
    main.push_str("<h1>Full Load Breakdown</h1>\n");
    main.push_str(
        "<p class=\"subtle\">This report explains where your mental load is coming from \
         and why it feels the way it does.</p>\n<hr>\n",
    );
    let _ = write!(
        main,
        "<h2>Primary Load Driver</h2>\n<p><strong>{}</strong> is currently the largest \
         contributor to your overall load.</p>\n<hr>\n",
        encode_text(view.dominant_label)
    );
    let _ = writeln!(main, "<h2 class=\"main-insight\">{}</h2>", encode_text(view.headline));
    for line in view.body {
        let _ = writeln!(main, "<p>{}</p>", encode_text(line));
    }
    main.push_str(
        "<hr>\n<p class=\"subtle\">This breakdown focuses on structural load, not personal \
         shortcomings. No diagnosis. No prescriptions.</p>\n",
    );

    layout("Full Load Breakdown", &main)
}
