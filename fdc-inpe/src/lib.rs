//! Core types and INPE open-data client for the daily hotspot feed.
//!
//! - `selection`: the user's date choice and its `YYYYMMDD` token
//! - `hotspot`: one parsed CSV row
//! - `dataset`: rows narrowed to a date and country
//! - `feed`: where a day's CSV lives and how to load it

pub mod dataset;
pub mod error;
pub mod feed;
pub mod hotspot;
pub mod selection;
