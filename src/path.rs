//! Repository path conventions.
//!
//! Evaluation artifacts live at `<task>/<exp>/metrics/<file>.json`, where the
//! exp directory carries a 14-digit timestamp suffix and the file name carries
//! the episode id. Anything else in the listing is ignored.

use regex::Regex;
use std::sync::LazyLock;

static METRICS_JSON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^/]+)/([^/]+)/metrics/([^/]+\.json)$").unwrap());
static EXP_TIMESTAMP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_(\d{14})$").unwrap());
static EPISODE_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_(\d+)_\d+\.json$").unwrap());

/// The three meaningful segments of a metrics file path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsPath<'a> {
    pub task: &'a str,
    pub exp: &'a str,
    pub file: &'a str,
}

/// Match `task/exp/metrics/<name>.json`, exactly four segments.
pub fn classify_path(path: &str) -> Option<MetricsPath<'_>> {
    let caps = METRICS_JSON.captures(path)?;
    Some(MetricsPath {
        task: caps.get(1)?.as_str(),
        exp: caps.get(2)?.as_str(),
        file: caps.get(3)?.as_str(),
    })
}

/// `run_xyz_20260216085234` → `20260216085234`.
pub fn extract_timestamp(exp_name: &str) -> Option<&str> {
    EXP_TIMESTAMP
        .captures(exp_name)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// `turning_on_radio_109_0.json` → `109`.
pub fn extract_episode_id(file_name: &str) -> Option<&str> {
    EPISODE_ID
        .captures(file_name)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// A listing entry that passed every filter, ready to be fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalTarget<'a> {
    pub path: &'a str,
    pub task: &'a str,
    pub timestamp: &'a str,
    pub episode_id: &'a str,
}

/// Classify a path and extract both identifiers. `None` means skip.
pub fn eval_target(path: &str) -> Option<EvalTarget<'_>> {
    let Some(parts) = classify_path(path) else {
        log::debug!("skip {path}: not a metrics json");
        return None;
    };
    let Some(timestamp) = extract_timestamp(parts.exp) else {
        log::debug!("skip {path}: exp {:?} has no timestamp suffix", parts.exp);
        return None;
    };
    let Some(episode_id) = extract_episode_id(parts.file) else {
        log::debug!("skip {path}: file {:?} has no episode id", parts.file);
        return None;
    };
    Some(EvalTarget {
        path,
        task: parts.task,
        timestamp,
        episode_id,
    })
}
