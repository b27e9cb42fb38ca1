//! First-time rendering of a template for one workflow.
//!
//! Used when no generated file exists yet. Areas for other workflows keep
//! their markers but lose their content, one blank line per body line. Once
//! and conditional areas are resolved immediately; once-areas also lose their
//! markers.

use crate::conditional::{Flags, resolve};
use crate::marker::{AreaHeader, is_area_end, parse_area_start};

/// Scanner state between lines.
enum State {
    /// Not inside an area.
    Outside,
    /// Inside an area that does not apply to the workflow.
    Excluded,
    /// Inside an applicable plain area; lines are copied as-is.
    Verbatim,
    /// Inside an applicable once or conditional area; body is held until END.
    Buffered { header: AreaHeader, body: Vec<String> },
}

/// Produce the initial content of a generated file from its template.
///
/// # Example
///
/// ```
/// use areasync::conditional::Flags;
/// use areasync::specialize::specialize;
///
/// let template: Vec<String> = vec![
///     "// BEGIN WORKFLOW AREA a FOR w1".into(),
///     "only for w1".into(),
///     "// END WORKFLOW AREA".into(),
/// ];
///
/// let out = specialize(&template, "w2", &Flags::new());
/// assert_eq!(out, vec!["// BEGIN WORKFLOW AREA a FOR w1", "", "// END WORKFLOW AREA"]);
/// ```
pub fn specialize(source: &[String], workflow_id: &str, flags: &Flags) -> Vec<String> {
    let mut out = Vec::with_capacity(source.len());
    let mut state = State::Outside;

    for line in source {
        if let Some(header) = parse_area_start(line) {
            flush_unterminated(state, &mut out);
            state = if !header.applies_to(workflow_id) {
                out.push(line.clone());
                State::Excluded
            } else if header.once || header.is_conditional() {
                State::Buffered {
                    header,
                    body: Vec::new(),
                }
            } else {
                out.push(line.clone());
                State::Verbatim
            };
            continue;
        }

        if is_area_end(line) {
            match state {
                State::Outside | State::Excluded | State::Verbatim => out.push(line.clone()),
                State::Buffered { header, body } => {
                    let chosen = resolve(&body, header.flag.as_deref(), flags);
                    if header.once {
                        out.extend_from_slice(chosen);
                    } else {
                        out.push(header.start_text.clone());
                        out.extend_from_slice(chosen);
                        out.push(line.clone());
                    }
                }
            }
            state = State::Outside;
            continue;
        }

        match &mut state {
            State::Outside | State::Verbatim => out.push(line.clone()),
            State::Excluded => out.push(String::new()),
            State::Buffered { body, .. } => body.push(line.clone()),
        }
    }

    flush_unterminated(state, &mut out);
    out
}

/// Emit a buffered area that never saw its END, unresolved.
///
/// The validator reports the missing END; nothing is dropped here.
fn flush_unterminated(state: State, out: &mut Vec<String>) {
    if let State::Buffered { header, body } = state {
        tracing::warn!(area = %header.name, "template area has no END marker");
        out.push(header.start_text);
        out.extend(body);
    }
}
