//! Block segmentation into question / options / answer zones.

use super::markers::MARKERS;

/// The three zones of a block, borrowed from its lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zones<'a> {
    pub question: &'a [String],
    pub options: &'a [String],
    pub answer: &'a [String],
}

/// Split a block at the first answer-marker line and the first option line.
///
/// Option lines are only looked for before the answer marker: anything after
/// it belongs to the answer zone.
pub fn segment(lines: &[String]) -> Zones<'_> {
    let ans_idx = lines.iter().position(|l| MARKERS.is_answer(l));
    let before_answer = &lines[..ans_idx.unwrap_or(lines.len())];
    let opt_idx = before_answer.iter().position(|l| MARKERS.is_option_start(l));

    let question_end = opt_idx.or(ans_idx).unwrap_or(lines.len());
    let options_end = ans_idx.unwrap_or(lines.len());

    Zones {
        question: &lines[..question_end],
        options: opt_idx.map_or(&[][..], |start| &lines[start..options_end]),
        answer: ans_idx.map_or(&[][..], |start| &lines[start..]),
    }
}

/// Join zone lines with newlines; an empty zone yields `None`.
pub fn join_zone(zone: &[String]) -> Option<String> {
    let text = zone.join("\n");
    let text = text.trim();
    if text.is_empty() { None } else { Some(text.to_string()) }
}
