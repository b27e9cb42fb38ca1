//! Single-pass area scanner.

use crate::marker::{AreaHeader, is_area_end, parse_area_start};

use super::key::{AreaKey, compute_area_key};

/// One BEGIN...END unit within a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Area {
    /// Parsed BEGIN marker.
    pub header: AreaHeader,
    /// Raw body lines between the markers (ELSE markers included).
    pub body: Vec<String>,
    /// The END line as written, or `None` if the area was never closed.
    pub end_text: Option<String>,
    /// Line number of the BEGIN marker (1-based).
    pub line_number: usize,
}

impl Area {
    fn open(header: AreaHeader, line_number: usize) -> Self {
        Self {
            header,
            body: Vec::new(),
            end_text: None,
            line_number,
        }
    }

    /// Whether an END marker closed this area.
    pub fn is_terminated(&self) -> bool {
        self.end_text.is_some()
    }

    /// Identity key used to match this area across files.
    pub fn key(&self) -> AreaKey {
        compute_area_key(&self.header)
    }

    /// Area name.
    pub fn name(&self) -> &str {
        &self.header.name
    }
}

/// Extract every workflow area from a line sequence, in document order.
///
/// END lines outside an area are ignored. Areas left open by a nested BEGIN
/// or by end of input are returned with `end_text == None`.
///
/// # Example
///
/// ```
/// use areasync::area::extract_areas;
///
/// let lines: Vec<String> = [
///     "// BEGIN WORKFLOW AREA imports FOR web",
///     "import a from 'a';",
///     "// END WORKFLOW AREA",
/// ]
/// .iter()
/// .map(|s| s.to_string())
/// .collect();
///
/// let areas = extract_areas(&lines);
/// assert_eq!(areas.len(), 1);
/// assert_eq!(areas[0].body, vec!["import a from 'a';"]);
/// assert!(areas[0].is_terminated());
/// ```
pub fn extract_areas(lines: &[String]) -> Vec<Area> {
    let mut areas = Vec::new();
    let mut current: Option<Area> = None;

    for (idx, line) in lines.iter().enumerate() {
        if let Some(header) = parse_area_start(line) {
            // Fail closed on nesting: the open area never gets an end.
            if let Some(open) = current.take() {
                areas.push(open);
            }
            current = Some(Area::open(header, idx + 1));
            continue;
        }

        if is_area_end(line) {
            if let Some(mut open) = current.take() {
                open.end_text = Some(line.clone());
                areas.push(open);
            }
            continue;
        }

        if let Some(open) = current.as_mut() {
            open.body.push(line.clone());
        }
    }

    if let Some(open) = current {
        areas.push(open);
    }

    areas
}
