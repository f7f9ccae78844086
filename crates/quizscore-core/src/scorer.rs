//! Positional answer scoring.
//!
//! Answers are paired by index and each pair is judged by a [`Comparator`].
//! Only the overlapping prefix of the two sets is scored: extra trailing
//! answers on either side are ignored.

use crate::report::ScoreReport;

/// Decides whether a submitted answer matches the expected one.
///
/// Implemented for any `Fn(&str, &str) -> bool`, so a closure can be passed
/// wherever a comparator is expected.
pub trait Comparator {
    fn matches(&self, user: &str, correct: &str) -> bool;
}

impl<F> Comparator for F
where
    F: Fn(&str, &str) -> bool,
{
    fn matches(&self, user: &str, correct: &str) -> bool {
        self(user, correct)
    }
}

/// Equality after [`normalize`]: ASCII case and ASCII whitespace are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatch;

impl Comparator for ExactMatch {
    fn matches(&self, user: &str, correct: &str) -> bool {
        normalized_chars(user).eq(normalized_chars(correct))
    }
}

/// Uppercase (ASCII only, locale-independent) and strip ASCII whitespace:
/// space, `\t`, `\n`, `\r`, form feed and vertical tab. Non-ASCII spaces such
/// as U+00A0 are kept.
pub fn normalize(answer: &str) -> String {
    normalized_chars(answer).collect()
}

fn normalized_chars(answer: &str) -> impl Iterator<Item = char> + '_ {
    answer
        .chars()
        .filter(|&c| !(c.is_ascii_whitespace() || c == '\u{0B}'))
        .map(|c| c.to_ascii_uppercase())
}

/// Scores answer sets with a fixed comparison policy.
#[derive(Debug, Clone, Default)]
pub struct Scorer<C = ExactMatch> {
    comparator: C,
}

impl Scorer {
    /// A scorer using the default [`ExactMatch`] policy.
    pub fn exact() -> Self {
        Self::new(ExactMatch)
    }
}

impl<C: Comparator> Scorer<C> {
    pub fn new(comparator: C) -> Self {
        Self { comparator }
    }

    /// Swap the comparison policy.
    pub fn with_comparator<D: Comparator>(self, comparator: D) -> Scorer<D> {
        Scorer { comparator }
    }

    /// Count positions where the two answers match.
    ///
    /// The result is always in `0..=min(user.len(), correct.len())`.
    pub fn score<U, K>(&self, user: &[U], correct: &[K]) -> usize
    where
        U: AsRef<str>,
        K: AsRef<str>,
    {
        let matched = user
            .iter()
            .zip(correct)
            .filter(|&(u, k)| self.comparator.matches(u.as_ref(), k.as_ref()))
            .count();

        if user.len() != correct.len() {
            tracing::debug!(
                "answer count mismatch ({} submitted, {} expected), scoring first {}",
                user.len(),
                correct.len(),
                user.len().min(correct.len())
            );
        }

        matched
    }

    /// Score and pair the result with the quiz length.
    pub fn report<U, K>(&self, user: &[U], correct: &[K]) -> ScoreReport
    where
        U: AsRef<str>,
        K: AsRef<str>,
    {
        ScoreReport::new(self.score(user, correct), correct.len())
    }
}

/// Score with the default [`ExactMatch`] policy.
pub fn score<U, K>(user: &[U], correct: &[K]) -> usize
where
    U: AsRef<str>,
    K: AsRef<str>,
{
    Scorer::exact().score(user, correct)
}
