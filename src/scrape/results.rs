//! Parse the search results grid into summary records.
//!
//! The grid is located by id first (the upstream control renders as a
//! `GridView` table), then by class as a fallback. Rows map positionally:
//! cells 0–5 are name, booking number, booking date, age, gender, race.
//! Absent cells get the sentinel; rows with fewer than three cells are
//! dropped as layout noise (spacer and pager rows).

use crate::error::ScrapeError;
use crate::scrape::text::{element_text, SENTINEL};
use crate::types::{InmateSummary, FACILITY, SOURCE};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

/// Parse a results page into summaries.
///
/// A present grid with only a header row is a genuine zero-result search
/// and yields `Ok(vec![])`; a page with no recognizable grid at all is a
/// structure mismatch.
pub fn parse_results(html: &str) -> Result<Vec<InmateSummary>, ScrapeError> {
    let doc = Html::parse_document(html);
    let table =
        find_results_table(&doc).ok_or(ScrapeError::ParseMismatch("results grid not found"))?;

    let tr = Selector::parse("tr").expect("tr selector is valid");
    let td = Selector::parse("td").expect("td selector is valid");
    let link = Selector::parse("a[href]").expect("link selector is valid");
    let id_re = Regex::new(r"InmateID=(\d+)").expect("inmate id regex is valid");

    let mut inmates = Vec::new();
    for row in table.select(&tr).skip(1) {
        let cells: Vec<ElementRef> = row.select(&td).collect();
        if cells.len() < 3 {
            continue;
        }

        let text_at = |idx: usize| {
            cells
                .get(idx)
                .map(element_text)
                .unwrap_or_else(|| SENTINEL.to_string())
        };

        let inmate_id = cells[0]
            .select(&link)
            .next()
            .and_then(|a| a.value().attr("href"))
            .and_then(|href| id_re.captures(href))
            .map(|caps| caps[1].to_string());

        inmates.push(InmateSummary {
            name: text_at(0),
            booking_number: text_at(1),
            booking_date: text_at(2),
            age: text_at(3),
            gender: text_at(4),
            race: text_at(5),
            facility: FACILITY.to_string(),
            source: SOURCE.to_string(),
            inmate_id,
        });
    }

    Ok(inmates)
}

/// Locate the results table: id matching "grid" (case-insensitive) wins;
/// otherwise the first table whose class matches "grid" or "result".
fn find_results_table(doc: &Html) -> Option<ElementRef<'_>> {
    let table_sel = Selector::parse("table").expect("table selector is valid");
    let id_re = Regex::new(r"(?i)grid").expect("grid id regex is valid");
    let class_re = Regex::new(r"(?i)grid|result").expect("grid class regex is valid");

    let mut by_class = None;
    for table in doc.select(&table_sel) {
        if table.value().attr("id").is_some_and(|id| id_re.is_match(id)) {
            return Some(table);
        }
        if by_class.is_none()
            && table
                .value()
                .attr("class")
                .is_some_and(|c| class_re.is_match(c))
        {
            by_class = Some(table);
        }
    }
    by_class
}
