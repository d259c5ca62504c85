use crate::core::{Detection, InsertionPoint, MatchResult, Template};

/// Keep only letters and digits, in order.
pub fn strip_non_alphanumeric(raw: &str) -> String {
    raw.chars().filter(|ch| ch.is_alphanumeric()).collect()
}

/// Re-insert separators into an alphanumeric-only string.
///
/// Precondition: `insertion_points` is non-decreasing in position. Points are
/// applied right to left so earlier insertions never shift later offsets. A
/// position past the end of the string built so far appends the separator.
pub fn reconstruct(alphanumeric: &str, insertion_points: &[InsertionPoint]) -> String {
    let mut output: Vec<char> = alphanumeric.chars().collect();

    for point in insertion_points.iter().rev() {
        let separator = point.separator.as_char();
        if point.position <= output.len() {
            output.insert(point.position, separator);
        } else {
            output.push(separator);
        }
    }

    output.into_iter().collect()
}

/// Apply a single template to a raw identifier.
///
/// Length is the only acceptance test; character classes per position are
/// not checked.
pub fn attempt(raw: &str, template: &Template) -> MatchResult {
    let core = strip_non_alphanumeric(raw);
    if core.is_empty() {
        return MatchResult::Unmatched;
    }

    let candidate = reconstruct(&core, template.insertion_points());
    if candidate.chars().count() == template.target_length() {
        MatchResult::Normalized(candidate)
    } else {
        MatchResult::Unmatched
    }
}

/// Try templates in order; the first one that normalizes wins.
pub fn detect<'a, I>(raw: &str, templates: I) -> Detection
where
    I: IntoIterator<Item = &'a Template>,
{
    templates
        .into_iter()
        .enumerate()
        .find_map(|(index, template)| match attempt(raw, template) {
            MatchResult::Normalized(value) => Some(Detection::matched(value, index)),
            MatchResult::Unmatched => None,
        })
        .unwrap_or_else(Detection::unmatched)
}

/// Split the alphanumeric core of `raw` at the winning template's insertion points.
///
/// Runs the matching loop again instead of reusing a detection, so callers
/// may segment without normalizing first. Returns one slice more than the
/// template has insertion points (slices may be empty when two separators
/// share a position), or an empty vector when nothing matches.
pub fn segment<'a, I>(raw: &str, templates: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Template>,
{
    let Some(template) = templates
        .into_iter()
        .find(|template| attempt(raw, template).is_normalized())
    else {
        return Vec::new();
    };

    let core: Vec<char> = strip_non_alphanumeric(raw).chars().collect();
    split_at_points(&core, template.insertion_points())
}

fn split_at_points(core: &[char], insertion_points: &[InsertionPoint]) -> Vec<String> {
    let mut segments = Vec::with_capacity(insertion_points.len() + 1);
    let mut start = 0;

    for point in insertion_points {
        let end = point.position.clamp(start, core.len());
        segments.push(core[start..end].iter().collect());
        start = end;
    }
    segments.push(core[start..].iter().collect());

    segments
}
