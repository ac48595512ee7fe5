//! Parse an inmate detail page.
//!
//! Detail pages are label/value layouts: elements whose class matches
//! "label" are paired with their immediately following sibling element.
//! Charges live in their own table and become one space-joined string per
//! row.

use crate::scrape::text::element_text;
use crate::types::InmateDetail;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

/// Parse a detail page into its label/value pairs and charges.
///
/// There is nothing structurally mandatory on a detail page, so this
/// never fails; the caller decides what an entirely empty result means.
pub fn parse_detail(html: &str) -> InmateDetail {
    let doc = Html::parse_document(html);
    let mut detail = InmateDetail::default();

    let classed = Selector::parse("[class]").expect("class selector is valid");
    let label_re = Regex::new(r"(?i)label").expect("label regex is valid");

    for el in doc.select(&classed) {
        if !el
            .value()
            .attr("class")
            .is_some_and(|c| label_re.is_match(c))
        {
            continue;
        }
        // The value is the next sibling *element*; text nodes between
        // label and value are skipped.
        let Some(value_el) = el.next_siblings().find_map(ElementRef::wrap) else {
            continue;
        };
        detail
            .fields
            .insert(element_text(&el), element_text(&value_el));
    }

    detail.charges = find_charges_table(&doc).map(|table| parse_charge_rows(&table));
    detail
}

/// Locate a table whose id matches "charges" (case-insensitive).
fn find_charges_table(doc: &Html) -> Option<ElementRef<'_>> {
    let table_sel = Selector::parse("table[id]").expect("table selector is valid");
    let charges_re = Regex::new(r"(?i)charges").expect("charges regex is valid");
    doc.select(&table_sel).find(|table| {
        table
            .value()
            .attr("id")
            .is_some_and(|id| charges_re.is_match(id))
    })
}

/// Join each non-header row's cell texts into one charge string.
fn parse_charge_rows(table: &ElementRef<'_>) -> Vec<String> {
    let tr = Selector::parse("tr").expect("tr selector is valid");
    let td = Selector::parse("td").expect("td selector is valid");

    table
        .select(&tr)
        .skip(1)
        .filter_map(|row| {
            let cells: Vec<ElementRef> = row.select(&td).collect();
            if cells.is_empty() {
                return None;
            }
            Some(
                cells
                    .iter()
                    .map(element_text)
                    .collect::<Vec<_>>()
                    .join(" "),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrape::text::SENTINEL;

    const DETAIL_PAGE: &str = r#"
    <html><body>
        <div class="inmate-info">
            <span class="FieldLabel">Name:</span>
            <span>DOE,   JOHN</span>
            <span class="FieldLabel">Height:</span>
            <span>5' 10"</span>
            <span class="FieldLabel">Orphan:</span>
        </div>
        <table id="ctl00_ChargesGrid">
            <tr><th>Charge</th><th>Bond</th></tr>
            <tr><td>THEFT OF  PROPERTY</td><td>$2,500</td></tr>
            <tr><td>FAILURE TO APPEAR</td><td></td></tr>
        </table>
    </body></html>
    "#;

    #[test]
    fn test_label_value_pairs() {
        let detail = parse_detail(DETAIL_PAGE);
        assert_eq!(detail.fields.get("Name:").map(String::as_str), Some("DOE, JOHN"));
        assert_eq!(detail.fields.get("Height:").map(String::as_str), Some("5' 10\""));
    }

    #[test]
    fn test_label_without_sibling_skipped() {
        let detail = parse_detail(DETAIL_PAGE);
        assert!(!detail.fields.contains_key("Orphan:"));
    }

    #[test]
    fn test_charges_joined_per_row() {
        let detail = parse_detail(DETAIL_PAGE);
        let charges = detail.charges.unwrap();
        assert_eq!(charges.len(), 2);
        assert_eq!(charges[0], "THEFT OF PROPERTY $2,500");
        assert_eq!(charges[1], format!("FAILURE TO APPEAR {SENTINEL}"));
    }

    #[test]
    fn test_no_charges_table_is_none() {
        let detail = parse_detail(r#"<div><span class="label">Name:</span><span>DOE</span></div>"#);
        assert!(detail.charges.is_none());
        assert_eq!(detail.fields.len(), 1);
    }

    #[test]
    fn test_empty_page_is_empty() {
        let detail = parse_detail("<html><body><p>not found</p></body></html>");
        assert!(detail.is_empty());
    }

    #[test]
    fn test_label_match_is_case_insensitive() {
        let detail =
            parse_detail(r#"<span class="LABEL">Race:</span><b>W</b>"#);
        assert_eq!(detail.fields.get("Race:").map(String::as_str), Some("W"));
    }
}
