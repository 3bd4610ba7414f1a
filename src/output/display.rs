//! Display functions for command results

use super::formatters::{NOTHING_FOUND, count_summary, describe_outcome};
use crate::commands::{EditResult, FindResult};
use colored::Colorize;

/// Print matched words one per line, then the count
///
/// With `quiet` only the count line is printed.
pub fn print_find_result(result: &FindResult, quiet: bool) {
    let matches = &result.matches;

    if matches.is_empty() {
        println!("{}", NOTHING_FOUND.yellow());
        return;
    }

    if !quiet {
        for word in &matches.words {
            println!("{word}");
        }
    }

    println!("{}", count_summary(matches.count()).green().bold());
}

/// Print what an add/remove did
pub fn print_edit_result(result: &EditResult) {
    let message = describe_outcome(result.command.word(), result.outcome);

    if result.outcome.changed() {
        println!("{}", message.green());
    } else {
        println!("{}", message.yellow());
    }
}
