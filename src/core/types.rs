//! Value types shared by the extractor and the matcher.
//!
//! A [`Template`] is inferred once from an example identifier and then only
//! read. Match outcomes are plain data: a failed match is
//! [`MatchResult::Unmatched`], never an error.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Literal written in place of a normalized identifier when no template
/// accepts the input. Downstream consumers compare against this exact string.
pub const UNMATCHED_SENTINEL: &str = "Unable to reformat";

/// The two separator characters a template can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Separator {
    #[serde(rename = "-")]
    Dash,
    #[serde(rename = ".")]
    Period,
}

impl Separator {
    /// Classify a character; anything other than `-` or `.` is not a separator.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '-' => Some(Separator::Dash),
            '.' => Some(Separator::Period),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Separator::Dash => '-',
            Separator::Period => '.',
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A separator that must follow `position` alphanumeric characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InsertionPoint {
    pub position: usize,
    pub separator: Separator,
}

impl InsertionPoint {
    pub fn new(position: usize, separator: Separator) -> Self {
        Self {
            position,
            separator,
        }
    }
}

impl TryFrom<(usize, char)> for InsertionPoint {
    /// The rejected character when it is neither `-` nor `.`
    type Error = char;

    fn try_from((position, ch): (usize, char)) -> Result<Self, Self::Error> {
        Separator::from_char(ch)
            .map(|separator| Self::new(position, separator))
            .ok_or(ch)
    }
}

/// Positional separator layout plus the exact length a normalized identifier must have.
///
/// Invariant: `insertion_points` is non-decreasing in `position`. Templates
/// built through [`Template::new`] are stably sorted to uphold it; templates
/// produced by the extractor are already ordered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "TemplateFields")]
pub struct Template {
    insertion_points: Vec<InsertionPoint>,
    target_length: usize,
}

impl Template {
    pub fn new(
        insertion_points: impl IntoIterator<Item = InsertionPoint>,
        target_length: usize,
    ) -> Self {
        let mut insertion_points: Vec<InsertionPoint> = insertion_points.into_iter().collect();
        // stable: equal positions keep their example order
        insertion_points.sort_by_key(|point| point.position);
        Self {
            insertion_points,
            target_length,
        }
    }

    pub fn insertion_points(&self) -> &[InsertionPoint] {
        &self.insertion_points
    }

    pub fn target_length(&self) -> usize {
        self.target_length
    }

    /// Number of alphanumeric characters the template expects, assuming
    /// every separator lands inside the identifier.
    pub fn expected_alphanumeric_count(&self) -> usize {
        self.target_length
            .saturating_sub(self.insertion_points.len())
    }

    /// Human-readable layout: `#` per alphanumeric slot, separators literal.
    ///
    /// `[(2,'-'), (5,'.')]` with target length 11 renders as `##-###.####`.
    pub fn layout(&self) -> String {
        let slots = self.expected_alphanumeric_count();
        let mut layout = String::with_capacity(self.target_length);
        let mut emitted = 0;

        for point in &self.insertion_points {
            let upto = point.position.min(slots);
            while emitted < upto {
                layout.push('#');
                emitted += 1;
            }
            layout.push(point.separator.as_char());
        }
        while emitted < slots {
            layout.push('#');
            emitted += 1;
        }

        layout
    }
}

#[derive(Deserialize)]
struct TemplateFields {
    insertion_points: Vec<InsertionPoint>,
    target_length: usize,
}

impl From<TemplateFields> for Template {
    fn from(fields: TemplateFields) -> Self {
        Template::new(fields.insertion_points, fields.target_length)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (length {})", self.layout(), self.target_length)
    }
}

/// Outcome of applying templates to one raw identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    Normalized(String),
    Unmatched,
}

impl MatchResult {
    pub fn is_normalized(&self) -> bool {
        matches!(self, MatchResult::Normalized(_))
    }

    pub fn normalized(&self) -> Option<&str> {
        match self {
            MatchResult::Normalized(value) => Some(value),
            MatchResult::Unmatched => None,
        }
    }

    /// The normalized string, or [`UNMATCHED_SENTINEL`].
    pub fn as_output(&self) -> &str {
        self.normalized().unwrap_or(UNMATCHED_SENTINEL)
    }

    pub fn into_output(self) -> String {
        match self {
            MatchResult::Normalized(value) => value,
            MatchResult::Unmatched => UNMATCHED_SENTINEL.to_string(),
        }
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_output())
    }
}

/// Result of `detect`: the match plus the index of the template that won.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detection {
    pub result: MatchResult,
    pub template_index: Option<usize>,
}

impl Detection {
    pub fn unmatched() -> Self {
        Self {
            result: MatchResult::Unmatched,
            template_index: None,
        }
    }

    pub fn matched(value: String, template_index: usize) -> Self {
        Self {
            result: MatchResult::Normalized(value),
            template_index: Some(template_index),
        }
    }
}
