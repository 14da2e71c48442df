//! Text and JSON rendering of menu snapshots.

use crate::core::{Course, CourseAverages, MenuCollection, MenuItem};
use crate::utils::error::Result;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Prefix followed by the raw value, no fixed decimals (`R45`, `R62.5`).
pub fn format_price(prefix: &str, value: f64) -> String {
    format!("{}{}", prefix, value)
}

/// Two lines per item: `name - <prefix><price as entered>`, then the description.
pub fn render_item(prefix: &str, item: &MenuItem) -> String {
    format!("{} - {}{}\n{}\n", item.name, prefix, item.price, item.description)
}

pub fn render_items(prefix: &str, items: &MenuCollection) -> String {
    items.iter().map(|item| render_item(prefix, item)).collect()
}

/// Same rows as [`render_items`], numbered from 1 for picking one to remove.
pub fn render_numbered_items(prefix: &str, items: &MenuCollection) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, render_item(prefix, item)))
        .collect()
}

pub fn render_averages(prefix: &str, averages: &CourseAverages) -> String {
    let mut output = String::from("Average Prices:\n");
    for (course, value) in averages.iter() {
        output.push_str(&format!("{}: {}\n", course, format_price(prefix, value)));
    }
    output
}

/// Home screen: every item, then the per-course averages.
pub fn render_summary(
    prefix: &str,
    items: &MenuCollection,
    averages: &CourseAverages,
) -> String {
    let mut output = render_items(prefix, items);
    if !items.is_empty() {
        output.push('\n');
    }
    output.push_str(&render_averages(prefix, averages));
    output
}

pub fn render_filtered(prefix: &str, filtered: &MenuCollection) -> String {
    let mut output = String::from("Filtered Menu Items:\n");
    output.push_str(&render_items(prefix, filtered));
    output
}

#[derive(Debug, Serialize)]
struct SummaryReport<'a> {
    currency_prefix: &'a str,
    items: &'a MenuCollection,
    averages: &'a CourseAverages,
}

#[derive(Debug, Serialize)]
struct FilterReport<'a> {
    currency_prefix: &'a str,
    course: Course,
    items: &'a MenuCollection,
}

pub fn summary_json(
    prefix: &str,
    items: &MenuCollection,
    averages: &CourseAverages,
) -> Result<String> {
    let report = SummaryReport {
        currency_prefix: prefix,
        items,
        averages,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

pub fn filtered_json(prefix: &str, course: Course, filtered: &MenuCollection) -> Result<String> {
    let report = FilterReport {
        currency_prefix: prefix,
        course,
        items: filtered,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
