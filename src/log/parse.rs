use crate::log::row::{SampleVector, SeriesSet};
use anyhow::Context;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

// Leftmost alternative wins, so ", " is consumed as one delimiter and a bare
// space only splits where no comma precedes it.
static DELIMITER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(", | ").expect("delimiter pattern is valid"));

/// Extract the numeric tokens of one monitor log line.
///
/// Example line:
/// Time: 2240, Cpu usage: 0, memory usage: 119.546875 MB, disk util (0, 26071040, 0, 323584)
///
/// Parentheses become spaces, the line is split on ", " or " " (empty tokens
/// are kept, not collapsed) and every token that parses as a float is kept in
/// order. Never fails; a malformed line just yields fewer numbers.
pub fn parse_line(line: &str) -> SampleVector {
    let cleaned = line.replace(['(', ')'], " ");
    let values = DELIMITER_RE
        .split(&cleaned)
        .filter_map(parse_number)
        .collect();
    SampleVector::new(values)
}

fn parse_number(token: &str) -> Option<f64> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }
    token.parse::<f64>().ok()
}

/// Accumulate every line of an in-memory log into a series set.
///
/// `origin` only shows up in error messages.
pub fn parse_log_text(text: &str, origin: &str) -> anyhow::Result<SeriesSet> {
    let mut out = SeriesSet::new();
    for (lineno, line) in text.lines().enumerate() {
        let lno = lineno + 1;
        let sample = parse_line(line);
        tracing::trace!(line = lno, values = ?sample.0, "parsed sample");

        out.push(&sample)
            .with_context(|| format!("log parse error at {}:{}: {:?}", origin, lno, line))?;
    }
    Ok(out)
}

/// Read a whole monitor log file and accumulate its samples.
pub fn parse_log_file(path: &Path) -> anyhow::Result<SeriesSet> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read log file {}", path.display()))?;
    parse_log_text(&text, &path.display().to_string())
}
