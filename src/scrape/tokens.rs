//! ASP.NET postback token extraction.
//!
//! A WebForms page will only accept a POST that echoes back the opaque
//! hidden inputs it rendered: `__VIEWSTATE`, `__VIEWSTATEGENERATOR`, and
//! `__EVENTVALIDATION`. The tokens are single-use in practice: lifted
//! from one GET, replayed verbatim on the following POST, then dropped.

use crate::types::SearchQuery;
use scraper::{Html, Selector};

/// The hidden-input bundle from one render of the search form.
///
/// Missing inputs default to the empty string; the upstream server is the
/// one that decides whether an incomplete bundle is acceptable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormTokens {
    pub view_state: String,
    pub view_state_generator: String,
    pub event_validation: String,
}

impl FormTokens {
    /// Lift the token bundle out of a rendered form page.
    pub fn extract(html: &str) -> Self {
        let doc = Html::parse_document(html);
        Self {
            view_state: hidden_input(&doc, "__VIEWSTATE"),
            view_state_generator: hidden_input(&doc, "__VIEWSTATEGENERATOR"),
            event_validation: hidden_input(&doc, "__EVENTVALIDATION"),
        }
    }

    /// Build the full POST body: tokens, search fields, submit marker.
    ///
    /// Field names (`txtLastName` etc.) are the upstream form's control
    /// names and are load-bearing.
    pub fn into_form_fields(self, query: &SearchQuery) -> Vec<(String, String)> {
        vec![
            ("__VIEWSTATE".to_string(), self.view_state),
            ("__VIEWSTATEGENERATOR".to_string(), self.view_state_generator),
            ("__EVENTVALIDATION".to_string(), self.event_validation),
            ("txtLastName".to_string(), query.last_name.clone()),
            ("txtFirstName".to_string(), query.first_name.clone()),
            ("txtBookingNumber".to_string(), query.booking_number.clone()),
            ("btnSearch".to_string(), "Search".to_string()),
        ]
    }
}

/// Value of the first `<input>` with the given name, or empty.
fn hidden_input(doc: &Html, name: &str) -> String {
    let selector = format!(r#"input[name="{name}"]"#);
    let Ok(sel) = Selector::parse(&selector) else {
        return String::new();
    };
    doc.select(&sel)
        .next()
        .and_then(|el| el.value().attr("value"))
        .unwrap_or("")
        .to_string()
}
