use serde::{Deserialize, Serialize};

use super::parallel::ParallelConfig;
use crate::core::TemplateSet;

/// Root configuration structure for parcelfmt
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ParcelfmtConfig {
    /// Example identifiers templates are learned from, in priority order
    #[serde(default)]
    pub templates: Option<TemplatesConfig>,

    /// Bulk normalization parallelism
    #[serde(default)]
    pub parallel: Option<ParallelConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

impl ParcelfmtConfig {
    /// Configured example identifiers, or an empty list.
    pub fn examples(&self) -> Vec<String> {
        self.templates
            .as_ref()
            .map(|t| t.examples.clone())
            .unwrap_or_default()
    }

    /// Learn templates from configured examples, then from `extra` (e.g. CLI flags).
    pub fn template_set<S: AsRef<str>>(&self, extra: &[S]) -> TemplateSet {
        let mut set = TemplateSet::from_examples(self.examples());
        for example in extra {
            set.learn(example.as_ref());
        }
        set
    }

    pub fn parallel(&self) -> ParallelConfig {
        self.parallel.clone().unwrap_or_default()
    }

    pub fn default_format(&self) -> Option<&str> {
        self.output
            .as_ref()
            .and_then(|o| o.default_format.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TemplatesConfig {
    #[serde(default)]
    pub examples: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    /// One of `json`, `terminal`, `plain`
    pub default_format: Option<String>,
    /// Enable colored output (default: auto-detect based on TTY)
    #[serde(default)]
    pub use_color: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_empty() {
        let config = ParcelfmtConfig::default();
        assert!(config.examples().is_empty());
        assert!(config.template_set::<&str>(&[]).is_empty());
        assert!(config.parallel().enabled);
        assert_eq!(config.default_format(), None);
    }

    #[test]
    fn test_template_set_puts_config_examples_first() {
        let config = ParcelfmtConfig {
            templates: Some(TemplatesConfig {
                examples: vec!["12-345".into()],
            }),
            ..Default::default()
        };
        let set = config.template_set(&["1.2"]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(0).map(|t| t.target_length()), Some(6));
        assert_eq!(set.get(1).map(|t| t.target_length()), Some(3));
    }
}
