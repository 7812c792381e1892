//! Terminal reporter for reachability queries.

use colored::Colorize;
use std::collections::HashSet;

pub struct TerminalReporter {
    sample_size: usize,
}

impl TerminalReporter {
    pub fn new() -> Self {
        Self { sample_size: 20 }
    }

    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    pub fn report(&self, all_classes: &[String], reachable_classes: &HashSet<String>) {
        let total = all_classes.len();
        let kept = reachable_classes.len();
        let stripped = total.saturating_sub(kept);

        println!();
        println!(
            "{} {} / {} {} ({} {})",
            "Reachable:".green().bold(),
            kept.to_string().bold(),
            total,
            "classes".dimmed(),
            stripped,
            "stripped".dimmed()
        );
        println!();

        let mut shown = 0;
        for name in all_classes {
            if shown >= self.sample_size {
                println!("  {}", "...".dimmed());
                break;
            }
            if reachable_classes.contains(name) {
                println!("  {} {}", "keep".green(), name);
            } else {
                println!("  {} {}", "drop".red(), name);
            }
            shown += 1;
        }
    }
}

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::new()
    }
}
