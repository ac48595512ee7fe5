//! HTTP-based scraping of the inmate search site.
//!
//! No browser involved; the ASP.NET postback protocol is replayed over
//! plain HTTP: GET the form page with a cookie-bearing session, lift the hidden
//! postback tokens, POST them back with the search fields, and parse the
//! response markup with CSS selectors. Parsing is synchronous because the
//! `scraper` crate's types are `!Send`; each parse happens between
//! awaits, never across one.

pub mod client;
pub mod detail;
pub mod http;
pub mod results;
pub mod text;
pub mod tokens;
