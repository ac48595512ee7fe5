//! Text normalization shared by every parser.

use scraper::ElementRef;

/// Placeholder for any missing or empty field.
pub const SENTINEL: &str = "N/A";

/// Collapse internal whitespace runs to single spaces and trim.
///
/// Empty or whitespace-only input becomes the [`SENTINEL`]. Idempotent:
/// normalizing already-normalized text returns the same value.
pub fn clean_text(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        SENTINEL.to_string()
    } else {
        collapsed
    }
}

/// All visible text of an element, normalized.
///
/// Text nodes concatenate directly; a markup boundary alone does not
/// introduce a space, so `SMITH<b>JR</b>` reads as `SMITHJR`.
pub fn element_text(el: &ElementRef<'_>) -> String {
    clean_text(&el.text().collect::<String>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    #[test]
    fn test_clean_text_collapses_whitespace() {
        assert_eq!(clean_text("  DOE,\n\t  JOHN  "), "DOE, JOHN");
        assert_eq!(clean_text("one two"), "one two");
    }

    #[test]
    fn test_clean_text_empty_becomes_sentinel() {
        assert_eq!(clean_text(""), SENTINEL);
        assert_eq!(clean_text("   \n\t "), SENTINEL);
    }

    #[test]
    fn test_clean_text_idempotent() {
        let once = clean_text("  a \n b  ");
        assert_eq!(clean_text(&once), once);
        assert_eq!(clean_text(SENTINEL), SENTINEL);
    }

    // A bare <td> outside table context gets dropped by the HTML5 tree
    // builder, so cell fixtures parse a full table.
    #[test]
    fn test_element_text_joins_nested_nodes() {
        let html =
            Html::parse_document("<table><tr><td>  <a href=\"#\">DOE,</a>\n JOHN </td></tr></table>");
        let sel = Selector::parse("td").unwrap();
        let td = html.select(&sel).next().unwrap();
        assert_eq!(element_text(&td), "DOE, JOHN");
    }

    #[test]
    fn test_element_text_empty_cell() {
        let html = Html::parse_document("<table><tr><td>   </td></tr></table>");
        let sel = Selector::parse("td").unwrap();
        let td = html.select(&sel).next().unwrap();
        assert_eq!(element_text(&td), SENTINEL);
    }

    #[test]
    fn test_element_text_no_space_across_inline_tags() {
        let html = Html::parse_fragment("<span>SMITH<b>JR</b></span>");
        let sel = Selector::parse("span").unwrap();
        let span = html.select(&sel).next().unwrap();
        assert_eq!(element_text(&span), "SMITHJR");
    }
}
