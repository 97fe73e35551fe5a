use crate::RoundscoreError;
use crate::path::eval_target;
use crate::source::RepoSource;
use serde_json::Value;
use std::collections::HashMap;

/// One scored evaluation of one episode, from one exp directory.
#[derive(Debug, Clone, PartialEq)]
pub struct EpisodeEval {
    pub task: String,
    pub episode_id: String,
    /// 14-digit exp timestamp; lexical order is chronological order.
    pub timestamp: String,
    pub q_score: f64,
    pub wall_time: Option<f64>,
    pub path: String,
}

/// (task, episode_id)
pub type EpisodeKey = (String, String);

/// Repeated attempts per episode. Unsorted until aggregation.
pub type EpisodeGroups = HashMap<EpisodeKey, Vec<EpisodeEval>>;

/// The fields read from one metrics json.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedEval {
    pub q_score: f64,
    pub wall_time: Option<f64>,
}

/// Pull `q_score.final` (required) and `time.wall_time` (optional) from a metrics file.
pub fn parse_eval(path: &str, bytes: &[u8]) -> Result<ParsedEval, RoundscoreError> {
    let content: Value = serde_json::from_slice(bytes)?;

    let q_score = match content.get("q_score").and_then(|q| q.get("final")) {
        Some(v) => as_number(v).ok_or_else(|| RoundscoreError::Eval {
            path: path.to_string(),
            reason: format!("q_score.final is not numeric: {v}"),
        })?,
        None => {
            return Err(RoundscoreError::Eval {
                path: path.to_string(),
                reason: "missing q_score.final".into(),
            });
        }
    };

    // Only an object with the key counts; `"time": 3.2` or a missing key is no data.
    let wall_time = match content.get("time").and_then(Value::as_object) {
        Some(time) => match time.get("wall_time") {
            Some(v) => Some(as_number(v).ok_or_else(|| RoundscoreError::Eval {
                path: path.to_string(),
                reason: format!("time.wall_time is not numeric: {v}"),
            })?),
            None => None,
        },
        None => None,
    };

    Ok(ParsedEval { q_score, wall_time })
}

/// JSON number, or a string holding one.
fn as_number(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// List the source, fetch every matching metrics file and group by episode.
///
/// Paths that don't fit the layout are skipped. A matched file that fails to
/// fetch or parse aborts the whole collection.
pub fn collect_episode_evals(source: &dyn RepoSource) -> Result<EpisodeGroups, RoundscoreError> {
    let files = source.list_files()?;
    log::info!("{} files in listing", files.len());

    let mut groups: EpisodeGroups = HashMap::new();
    let mut matched = 0usize;
    for path in &files {
        let Some(target) = eval_target(path) else {
            continue;
        };
        log::debug!("fetch {path}");
        let bytes = source.read(path)?;
        let parsed = parse_eval(path, &bytes)?;
        matched += 1;

        groups
            .entry((target.task.to_string(), target.episode_id.to_string()))
            .or_default()
            .push(EpisodeEval {
                task: target.task.to_string(),
                episode_id: target.episode_id.to_string(),
                timestamp: target.timestamp.to_string(),
                q_score: parsed.q_score,
                wall_time: parsed.wall_time,
                path: path.clone(),
            });
    }
    log::info!("{matched} evaluations across {} episodes", groups.len());
    Ok(groups)
}
