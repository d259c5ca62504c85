use crate::core::{InsertionPoint, Separator, Template};

/// Infer a template from one example identifier.
///
/// Scans left to right counting alphanumeric characters; each `-` or `.`
/// records an insertion point at the current count. Every other character is
/// ignored for insertion purposes but still counts toward `target_length`,
/// which is the char length of the trimmed example. Never fails: an example
/// with no alphanumerics yields a template no input can satisfy.
pub fn extract(example: &str) -> Template {
    let (_, insertion_points) = example.chars().fold(
        (0usize, Vec::new()),
        |(seen, mut points), ch| {
            if ch.is_alphanumeric() {
                (seen + 1, points)
            } else {
                if let Some(separator) = Separator::from_char(ch) {
                    points.push(InsertionPoint::new(seen, separator));
                }
                (seen, points)
            }
        },
    );

    let target_length = example.trim().chars().count();
    Template::new(insertion_points, target_length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn points(template: &Template) -> Vec<(usize, char)> {
        template
            .insertion_points()
            .iter()
            .map(|p| (p.position, p.separator.as_char()))
            .collect()
    }

    #[test]
    fn test_extract_dash_and_period() {
        let template = extract("12-345.6789");
        assert_eq!(points(&template), vec![(2, '-'), (5, '.')]);
        assert_eq!(template.target_length(), 11);
    }

    #[test]
    fn test_extract_counts_letters_as_alphanumeric() {
        let template = extract("06F-04069O");
        assert_eq!(points(&template), vec![(3, '-')]);
        assert_eq!(template.target_length(), 10);
    }

    #[test]
    fn test_extract_four_separators() {
        let template = extract("123-45.67-890");
        assert_eq!(points(&template), vec![(3, '-'), (5, '.'), (7, '-')]);
        assert_eq!(template.target_length(), 13);
    }

    #[test]
    fn test_extract_ignores_other_punctuation_but_counts_it() {
        // '/' and ' ' are neither alphanumeric nor separators
        let template = extract("12/34 56-7");
        assert_eq!(points(&template), vec![(6, '-')]);
        assert_eq!(template.target_length(), 10);
    }

    #[test]
    fn test_extract_trims_surrounding_whitespace_for_length() {
        let template = extract("  12-34  ");
        assert_eq!(points(&template), vec![(2, '-')]);
        assert_eq!(template.target_length(), 5);
    }

    #[test]
    fn test_extract_leading_and_adjacent_separators() {
        let template = extract("-12.-3");
        assert_eq!(points(&template), vec![(0, '-'), (2, '.'), (2, '-')]);
        assert_eq!(template.target_length(), 6);
    }

    #[test]
    fn test_extract_without_alphanumerics_is_permissive() {
        let template = extract("--.");
        assert_eq!(points(&template), vec![(0, '-'), (0, '-'), (0, '.')]);
        assert_eq!(template.target_length(), 3);
    }

    #[test]
    fn test_extract_empty_example() {
        let template = extract("");
        assert!(template.insertion_points().is_empty());
        assert_eq!(template.target_length(), 0);
    }
}
