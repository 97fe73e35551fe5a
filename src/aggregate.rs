//! Round means and wall-time stats over grouped episode evaluations.
//!
//! Round *i* is the *i*-th attempt (by exp timestamp) of every episode. Only
//! as many rounds exist as the least-attempted episode has attempts, so every
//! round averages over the same set of episodes.

use crate::load::{EpisodeEval, EpisodeGroups, EpisodeKey};
use std::cmp::Ordering;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RoundStats {
    pub round_means: Vec<f64>,
    /// Every evaluation that contributed to a round, round by round.
    pub used: Vec<EpisodeEval>,
}

impl RoundStats {
    pub fn rounds(&self) -> usize {
        self.round_means.len()
    }

    /// Mean of the round means. `None` when there are no rounds.
    pub fn overall_mean(&self) -> Option<f64> {
        mean(&self.round_means)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WallTimeStats {
    pub per_task: BTreeMap<String, f64>,
    /// Mean of the per-task means, not of all samples.
    pub overall: f64,
}

/// Sort each episode's attempts by timestamp and average them round by round.
///
/// Empty input, or any episode with no attempts, yields no rounds.
pub fn compute_round_means(groups: &mut EpisodeGroups) -> RoundStats {
    for evals in groups.values_mut() {
        evals.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
    }

    let rounds = groups.values().map(Vec::len).min().unwrap_or(0);
    if rounds == 0 {
        return RoundStats::default();
    }

    let mut keys: Vec<&EpisodeKey> = groups.keys().collect();
    keys.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| cmp_numeric(&a.1, &b.1)));

    let mut stats = RoundStats::default();
    for round in 0..rounds {
        let this_round: Vec<&EpisodeEval> = keys.iter().map(|k| &groups[*k][round]).collect();
        let scores: Vec<f64> = this_round.iter().map(|e| e.q_score).collect();
        // keys is non-empty whenever rounds > 0
        if let Some(m) = mean(&scores) {
            stats.round_means.push(m);
        }
        stats.used.extend(this_round.into_iter().cloned());
    }
    stats
}

/// Per-task mean wall time over `used`, skipping evaluations without one.
///
/// `None` when no evaluation carries a wall time at all.
pub fn compute_wall_time_stats(used: &[EpisodeEval]) -> Option<WallTimeStats> {
    let mut task_times: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for eval in used {
        if let Some(t) = eval.wall_time {
            task_times.entry(eval.task.as_str()).or_default().push(t);
        }
    }

    let per_task: BTreeMap<String, f64> = task_times
        .into_iter()
        .filter_map(|(task, times)| mean(&times).map(|m| (task.to_string(), m)))
        .collect();
    let task_means: Vec<f64> = per_task.values().copied().collect();
    let overall = mean(&task_means)?;
    Some(WallTimeStats { per_task, overall })
}

/// Arithmetic mean, kept inside [min, max] of the inputs.
fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: f64 = values.iter().sum();
    let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let m = sum / values.len() as f64;
    if m.is_nan() {
        return Some(m);
    }
    Some(m.clamp(lo, hi))
}

/// Compare digit strings by numeric value without parsing into a fixed-width int.
/// Falls back to plain string order for equal values ("07" vs "7") or non-digits.
fn cmp_numeric(a: &str, b: &str) -> Ordering {
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|c| c.is_ascii_digit());
    if !(all_digits(a) && all_digits(b)) {
        return a.cmp(b);
    }
    let ta = a.trim_start_matches('0');
    let tb = b.trim_start_matches('0');
    ta.len()
        .cmp(&tb.len())
        .then_with(|| ta.cmp(tb))
        .then_with(|| a.cmp(b))
}
