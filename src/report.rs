use crate::aggregate::{RoundStats, WallTimeStats};
use std::fmt::Write;

pub const NO_MATCHING_FILES: &str =
    "no files matching task/exp/metrics/*.json with a parseable episode id and timestamp";
pub const NO_ROUNDS: &str = "no computable rounds (some episode has no valid results)";
pub const NO_WALL_TIME: &str =
    "no time.wall_time in the evaluations used for q-score stats, skipping wall-time stats";

/// Header, one line per round, and the mean of round means.
pub fn render_rounds(repo_id: &str, episodes: usize, stats: &RoundStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "repo: {repo_id}");
    let _ = writeln!(out, "episodes: {episodes}");
    let _ = writeln!(out, "rounds: {}", stats.rounds());
    for (idx, value) in stats.round_means.iter().enumerate() {
        let _ = writeln!(out, "round {} mean: {value:.6}", idx + 1);
    }
    if let Some(overall) = stats.overall_mean() {
        let _ = writeln!(out, "mean of round means: {overall:.6}");
    }
    out
}

/// Per-task wall time (sorted by task) and the cross-task mean.
pub fn render_wall_time(stats: Option<&WallTimeStats>) -> String {
    let Some(stats) = stats else {
        return format!("{NO_WALL_TIME}\n");
    };
    let mut out = String::from("mean episode wall time per task:\n");
    for (task, value) in &stats.per_task {
        let _ = writeln!(out, "- {task}: {value:.6}");
    }
    let _ = writeln!(out, "mean wall time across tasks: {:.6}", stats.overall);
    out
}
