use std::iter;
use std::ops::Deref;

use serde::Serialize;

use crate::matcher::{Matcher, Pattern};
use crate::Result;

/// The overall match followed by every capturing group that participated,
/// in the order the groups are declared in the pattern.
///
/// Never empty: the overall match is always the first element, even when it
/// is the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct MatchList(Vec<String>);

impl MatchList {
    pub fn overall(&self) -> &str {
        &self.0[0]
    }

    /// Captures of the groups that took part in the match.
    pub fn groups(&self) -> &[String] {
        &self.0[1..]
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl Deref for MatchList {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.0
    }
}

impl From<MatchList> for Vec<String> {
    fn from(list: MatchList) -> Self {
        list.0
    }
}

impl IntoIterator for MatchList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MatchList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl PartialEq<Vec<&str>> for MatchList {
    fn eq(&self, other: &Vec<&str>) -> bool {
        self.0.len() == other.len() && self.0.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl<const N: usize> PartialEq<[&str; N]> for MatchList {
    fn eq(&self, other: &[&str; N]) -> bool {
        self.0.len() == N && self.0.iter().zip(other).all(|(a, b)| a == b)
    }
}

/// Finds the first match of `pattern` in `subject`.
///
/// Returns `Ok(None)` when nothing matches. Groups that did not participate
/// are left out of the result rather than kept as placeholders, so the
/// length can differ between calls with the same pattern. Errors from the
/// engine, such as an invalid pattern, are returned unchanged.
pub fn extract_matches<P>(subject: &str, pattern: &P) -> Result<Option<MatchList>>
where
    P: Pattern + ?Sized,
{
    let engine = pattern.compile()?;
    let Some(slots) = engine.search(subject)? else {
        tracing::trace!(subject_len = subject.len(), "no match");
        return Ok(None);
    };

    let mut slots = slots.into_iter();
    // slot 0 is always set by a successful search
    let Some(overall) = slots.next().flatten() else {
        return Ok(None);
    };
    let list: Vec<String> = iter::once(overall)
        .chain(slots.flatten())
        .map(str::to_owned)
        .collect();
    tracing::trace!(kept = list.len(), "extracted matches");
    Ok(Some(MatchList(list)))
}

/// Adds [`extract_matches`] as a method on string slices.
pub trait ExtractMatches {
    fn extract_matches<P>(&self, pattern: &P) -> Result<Option<MatchList>>
    where
        P: Pattern + ?Sized;
}

impl ExtractMatches for str {
    fn extract_matches<P>(&self, pattern: &P) -> Result<Option<MatchList>>
    where
        P: Pattern + ?Sized,
    {
        extract_matches(self, pattern)
    }
}
