//! Machine-readable reporter for reachability queries.

use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Serialize)]
struct ReachabilityReport<'a> {
    total_classes: usize,
    reachable_classes: Vec<&'a str>,
    stripped_classes: Vec<&'a str>,
}

pub struct JsonReporter;

impl JsonReporter {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, all_classes: &[String], reachable_classes: &HashSet<String>) -> String {
        let mut reachable: Vec<&str> = all_classes
            .iter()
            .filter(|c| reachable_classes.contains(c.as_str()))
            .map(String::as_str)
            .collect();
        reachable.sort_unstable();

        let mut stripped: Vec<&str> = all_classes
            .iter()
            .filter(|c| !reachable_classes.contains(c.as_str()))
            .map(String::as_str)
            .collect();
        stripped.sort_unstable();

        let report = ReachabilityReport {
            total_classes: all_classes.len(),
            reachable_classes: reachable,
            stripped_classes: stripped,
        };
        serde_json::to_string_pretty(&report).expect("report serializes")
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}
