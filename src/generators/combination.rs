// src/generators/combination.rs
use std::collections::BTreeMap;

use crate::dictionary::Dictionary;

/// Dictionary words bucketed by length, limited to words that fit the
/// requested password length.
pub struct LengthGroups<'a> {
    groups: BTreeMap<usize, Vec<&'a str>>,
}

impl<'a> LengthGroups<'a> {
    pub fn new(dictionary: &'a Dictionary, max_length: usize) -> Self {
        let mut groups: BTreeMap<usize, Vec<&'a str>> = BTreeMap::new();
        for word in dictionary.words() {
            if word.len() <= max_length {
                groups.entry(word.len()).or_default().push(word.as_str());
            }
        }
        Self { groups }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn words_of(&self, length: usize) -> &[&'a str] {
        self.groups.get(&length).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Longest first.
    pub fn lengths(&self) -> Vec<usize> {
        self.groups.keys().rev().copied().collect()
    }

    pub fn find_combination(&self, target: usize) -> Option<Vec<usize>> {
        find_length_combination(target, &self.lengths())
    }
}

/// Depth-first search for word lengths summing exactly to `target`.
///
/// Candidates are tried in the order given at every depth and the first
/// complete path wins. Remainders already shown to be unreachable are not
/// explored again, which bounds the search by `target * lengths.len()`.
pub fn find_length_combination(target: usize, lengths: &[usize]) -> Option<Vec<usize>> {
    let mut path = Vec::new();
    let mut dead = vec![false; target + 1];
    if extend(target, lengths, &mut path, &mut dead) {
        Some(path)
    } else {
        None
    }
}

fn extend(remaining: usize, lengths: &[usize], path: &mut Vec<usize>, dead: &mut [bool]) -> bool {
    if remaining == 0 {
        return true;
    }
    if dead[remaining] {
        return false;
    }

    for &length in lengths {
        if length == 0 || length > remaining {
            continue;
        }
        path.push(length);
        if extend(remaining - length, lengths, path, dead) {
            return true;
        }
        path.pop();
    }

    dead[remaining] = true;
    false
}
