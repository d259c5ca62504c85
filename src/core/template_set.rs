use serde::{Deserialize, Serialize};

use super::types::Template;
use crate::matching::extract;

/// Ordered, append-only collection of templates owned by the caller.
///
/// Order is priority: the first template added is the first one tried.
/// Entries cannot be removed or reordered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateSet {
    templates: Vec<Template>,
}

impl TemplateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract one template per example, preserving example order.
    pub fn from_examples<I, S>(examples: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for example in examples {
            set.learn(example.as_ref());
        }
        set
    }

    /// Extract a template from `example`, append it and return its index.
    pub fn learn(&mut self, example: &str) -> usize {
        self.push(extract(example))
    }

    pub fn push(&mut self, template: Template) -> usize {
        self.templates.push(template);
        self.templates.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&Template> {
        self.templates.get(index)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Template> {
        self.templates.iter()
    }
}

impl From<Vec<Template>> for TemplateSet {
    fn from(templates: Vec<Template>) -> Self {
        Self { templates }
    }
}

impl<'a> IntoIterator for &'a TemplateSet {
    type Item = &'a Template;
    type IntoIter = std::slice::Iter<'a, Template>;

    fn into_iter(self) -> Self::IntoIter {
        self.templates.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_learn_appends_in_submission_order() {
        let mut set = TemplateSet::new();
        assert!(set.is_empty());

        assert_eq!(set.learn("12-345.6789"), 0);
        assert_eq!(set.learn("123-45.67-890"), 1);

        assert_eq!(set.len(), 2);
        assert_eq!(set.get(0).map(Template::target_length), Some(11));
        assert_eq!(set.get(1).map(Template::target_length), Some(13));
        assert!(set.get(2).is_none());
    }

    #[test]
    fn test_from_examples_matches_repeated_learn() {
        let examples = ["12-345.6789", "06F-04069O"];
        let built = TemplateSet::from_examples(examples);

        let mut learned = TemplateSet::new();
        for example in examples {
            learned.learn(example);
        }

        assert_eq!(built, learned);
    }

    #[test]
    fn test_serializes_as_plain_list() {
        let set = TemplateSet::from_examples(["1-2"]);
        let json = serde_json::to_value(&set).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["target_length"], 3);
    }
}
