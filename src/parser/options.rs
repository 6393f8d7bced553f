//! Option assembly: merge soft-wrapped lines into lettered options.

use super::markers::MARKERS;
use crate::domain::OptionDraft;

/// Rebuild complete options from the options zone.
///
/// A continuation line is appended (space-joined) to the option before it.
/// A continuation with no open option becomes an entry of its own.
pub fn assemble_options(zone: &[String]) -> Vec<String> {
    let mut options: Vec<String> = Vec::new();
    let mut current: Option<String> = None;

    for line in zone {
        if MARKERS.is_option_start(line) {
            if let Some(done) = current.take() {
                options.push(done);
            }
            current = Some(line.clone());
        } else {
            match current.as_mut() {
                Some(option) => {
                    option.push(' ');
                    option.push_str(line);
                }
                None => current = Some(line.clone()),
            }
        }
    }

    if let Some(done) = current {
        options.push(done);
    }
    options
}

/// Flag the option that starts with `"{correct}."`.
///
/// Only the dotted form counts, so `B)` is never flagged. Nothing is flagged
/// when no letter was resolved, when no option carries it, or when more than
/// one option carries it.
pub fn mark_correct(options: &[String], correct: Option<char>) -> Vec<OptionDraft> {
    let prefix = correct.map(|letter| format!("{letter}."));
    let hits: Vec<bool> = options
        .iter()
        .map(|o| prefix.as_deref().is_some_and(|p| o.starts_with(p)))
        .collect();
    let single = hits.iter().filter(|hit| **hit).count() == 1;

    options
        .iter()
        .zip(hits)
        .map(|(content, hit)| OptionDraft {
            content: content.clone(),
            is_correct: single && hit,
        })
        .collect()
}
