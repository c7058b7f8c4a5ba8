use anyhow::Result;
use bracket_overlay_engine::{BracketHighlightEvent, HighlightStyle, compute_bracket_highlight};
use std::io::{BufRead, Write};

/// Streams locator events (one JSON object per line) into highlight results (one per line).
///
/// An event identical to the previous one is not recomputed. Lines that are
/// not UTF-8, or fail to parse or validate, are logged and skipped. Returns
/// the number of results written.
pub fn resolve_stream<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    style: &HighlightStyle,
) -> Result<usize> {
    let mut previous: Option<BracketHighlightEvent> = None;
    let mut written = 0;

    for (index, bytes) in reader.split(b'\n').enumerate() {
        let line_number = index + 1;
        let line = match String::from_utf8(bytes?) {
            Ok(line) => line,
            Err(e) => {
                log::warn!("line {line_number}: {e}");
                continue;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let event = match BracketHighlightEvent::from_json(&line) {
            Ok(event) => event,
            Err(e) => {
                log::warn!("line {line_number}: {e}");
                continue;
            }
        };

        if previous.as_ref() == Some(&event) {
            log::debug!("line {line_number}: geometry unchanged, skipping");
            continue;
        }

        let input = match event.into_input() {
            Ok(input) => input,
            Err(e) => {
                log::warn!("line {line_number}: {e}");
                continue;
            }
        };
        previous = Some(event);

        let result = compute_bracket_highlight(&input, style);
        serde_json::to_writer(&mut writer, &result)?;
        writeln!(writer)?;
        writer.flush()?;
        written += 1;
    }

    Ok(written)
}
