//! Weakest-first descriptor ordering.

use std::cmp::Ordering;

use crate::counts::DescriptorCounts;

/// Name prefixes that make a descriptor eligible for ranking.
const RANKED_PREFIXES: [&str; 2] = ["B_T_", "B_T2"];

/// One `_`-separated piece of a descriptor name.
///
/// Numeric pieces order before textual ones and among themselves by value,
/// which puts `B_T_2` ahead of `B_T_10`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum SortToken {
    Number(u64),
    Text(String),
}

fn sort_key(name: &str) -> Vec<SortToken> {
    name.split('_')
        .map(|piece| {
            if !piece.is_empty() && piece.chars().all(|c| c.is_ascii_digit()) {
                match piece.parse() {
                    Ok(n) => SortToken::Number(n),
                    Err(_) => SortToken::Text(piece.to_string()),
                }
            } else {
                SortToken::Text(piece.to_string())
            }
        })
        .collect()
}

fn is_rankable(name: &str) -> bool {
    RANKED_PREFIXES.iter().any(|prefix| name.starts_with(prefix))
        || name.chars().next().map_or(false, |c| c.is_ascii_digit())
}

/// Descriptors ordered ascending by completion ratio, weakest first.
#[derive(Debug, Clone, Default)]
pub struct DescriptorRanking {
    ordered: Vec<String>,
}

impl DescriptorRanking {
    /// Rank the counted descriptors.
    ///
    /// Only descriptors with a ranked name prefix or a leading digit
    /// participate; ties on the ratio fall back to the natural order of the
    /// tokenized name.
    pub fn rank(counts: &DescriptorCounts) -> Self {
        let mut keyed: Vec<(f64, Vec<SortToken>, String)> = counts
            .descriptors()
            .filter(|name| is_rankable(name))
            .map(|name| (counts.ratio(name), sort_key(name), name.to_string()))
            .collect();

        keyed.sort_by(|a, b| {
            a.0.partial_cmp(&b.0)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.1.cmp(&b.1))
                .then_with(|| a.2.cmp(&b.2))
        });

        Self {
            ordered: keyed.into_iter().map(|(_, _, name)| name).collect(),
        }
    }

    /// The weakest descriptor, if any is ranked.
    pub fn top(&self) -> Option<&str> {
        self.ordered.first().map(String::as_str)
    }

    /// Ranked descriptor names, weakest first.
    pub fn descriptors(&self) -> &[String] {
        &self.ordered
    }

    /// Whether no descriptor is ranked.
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}
