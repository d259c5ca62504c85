//! Character-class profiling of raw identifiers.
//!
//! Maps each character to a token (`N` digit, `A` letter, `_` whitespace,
//! anything else kept verbatim) so a batch can be summarized by its distinct
//! shapes before picking examples. Purely diagnostic; normalization never
//! consults it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Shape pattern and character counts for one identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeProfile {
    pub pattern: String,
    pub numbers: usize,
    pub alphabets: usize,
    pub spaces: usize,
    pub special_characters: usize,
    pub length: usize,
}

/// A distinct shape and how many identifiers share it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeCount {
    pub pattern: String,
    pub count: usize,
    /// First identifier seen with this shape
    pub sample: String,
}

pub fn profile(raw: &str) -> ShapeProfile {
    let mut profile = ShapeProfile {
        pattern: String::with_capacity(raw.len()),
        numbers: 0,
        alphabets: 0,
        spaces: 0,
        special_characters: 0,
        length: 0,
    };

    for ch in raw.chars() {
        profile.length += 1;
        let token = if ch.is_numeric() {
            profile.numbers += 1;
            'N'
        } else if ch.is_alphabetic() {
            profile.alphabets += 1;
            'A'
        } else if ch.is_whitespace() {
            profile.spaces += 1;
            '_'
        } else {
            profile.special_characters += 1;
            ch
        };
        profile.pattern.push(token);
    }

    profile
}

/// Distinct shapes, most frequent first; ties keep first-seen order.
///
/// The first entry, when present, is the dominant shape of the batch.
pub fn summarize_shapes<I, S>(raws: I) -> Vec<ShapeCount>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts: Vec<ShapeCount> = Vec::new();
    let mut index_by_pattern: HashMap<String, usize> = HashMap::new();

    for raw in raws {
        let raw = raw.as_ref();
        let pattern = profile(raw).pattern;
        match index_by_pattern.get(&pattern) {
            Some(&index) => counts[index].count += 1,
            None => {
                index_by_pattern.insert(pattern.clone(), counts.len());
                counts.push(ShapeCount {
                    pattern,
                    count: 1,
                    sample: raw.to_string(),
                });
            }
        }
    }

    // sort_by is stable, so first-seen order breaks ties
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}
