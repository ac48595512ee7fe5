// Copyright 2026 Roster Scrape Contributors
// SPDX-License-Identifier: Apache-2.0

//! Scraping client for the Sedgwick County inmate search.
//!
//! The site is a legacy ASP.NET web form: a search requires fetching the
//! form page to obtain postback tokens (`__VIEWSTATE` and friends), then
//! replaying them alongside the search fields in a POST. This crate wraps
//! that two-step cycle and parses the resulting HTML grid and detail pages
//! into structured records, with a small REST facade on top.

pub mod config;
pub mod error;
pub mod rest;
pub mod scrape;
pub mod types;
