//! The three association strategies used across the pipeline. They stay
//! separate because their tolerance levels are deliberately different:
//! exact key equality for cache membership, bidirectional containment for
//! partial best-eleven fragments, bounded edit distance for everything
//! that has to bridge real spelling drift.

use crate::names::compare_key;

/// Dissimilarity ceiling for edit-distance matches (strictly below).
const MATCH_RATIO_CEILING: f64 = 0.3;

/// Unit-cost insert/delete/substitute distance.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j] + cost)
                .min(prev[j + 1] + 1)
                .min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Exact comparison-key equality. The strictest strategy; used for
/// cache-membership tests.
pub fn same_name(a: &str, b: &str) -> bool {
    let a = compare_key(a);
    !a.is_empty() && a == compare_key(b)
}

/// Loose bidirectional containment over comparison keys. Best-eleven
/// fragments are often bare surnames, so either side may contain the
/// other. Known to false-match short shared surnames; tolerated.
pub fn either_contains(a: &str, b: &str) -> bool {
    let a = compare_key(a);
    let b = compare_key(b);
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.contains(&b) || b.contains(&a)
}

/// Best candidate for `target` under the bounded edit-distance rules:
/// collapsed-form containment short-circuits (handles "Suryakumar" vs
/// "Surya Kumar Yadav"), otherwise the smallest distance whose ratio to
/// the longer key stays under the ceiling wins, first candidate on ties.
pub fn best_match<'a, T>(target: &str, candidates: &'a [(String, T)]) -> Option<&'a T> {
    let target_key = compare_key(target);
    if target_key.is_empty() || candidates.is_empty() {
        return None;
    }
    let collapsed_target = target_key.replace(' ', "");

    let mut best: Option<&'a T> = None;
    let mut best_distance = usize::MAX;
    for (name, payload) in candidates {
        let key = compare_key(name);
        if key.is_empty() {
            continue;
        }

        let collapsed = key.replace(' ', "");
        if collapsed == collapsed_target
            || collapsed.contains(&collapsed_target)
            || collapsed_target.contains(&collapsed)
        {
            return Some(payload);
        }

        let distance = levenshtein(&target_key, &key);
        let longer = target_key.len().max(key.len());
        let ratio = distance as f64 / longer as f64;
        if ratio < MATCH_RATIO_CEILING && distance < best_distance {
            best_distance = distance;
            best = Some(payload);
        }
    }
    best
}
