use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

#[allow(deprecated)]
fn roundscore_cmd(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("roundscore").unwrap();
    cmd.env("ROUNDSCORE_CONFIG", home.join("absent.toml"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn metrics(root: &Path, task: &str, exp: &str, file: &str, json: &str) {
    let dir = root.join(task).join(exp).join("metrics");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join(file), json).unwrap();
}

fn score(q: f64) -> String {
    format!(r#"{{"q_score":{{"final":{q}}}}}"#)
}

fn score_timed(q: f64, wall: f64) -> String {
    format!(r#"{{"q_score":{{"final":{q}}},"time":{{"wall_time":{wall}}}}}"#)
}

fn run_local(home: &Path, repo: &Path) -> (String, String) {
    let out = roundscore_cmd(home)
        .arg("org/evals")
        .arg("--local")
        .arg(repo)
        .assert()
        .success();
    let output = out.get_output();
    (
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    )
}

#[test]
fn rounds_truncate_to_shortest_episode() {
    let dir = TempDir::new().unwrap();
    let repo = dir.path().join("repo");
    metrics(&repo, "A", "radio_20260101000000", "radio_1_0.json", &score(0.5));
    metrics(&repo, "A", "radio_20260102000000", "radio_1_0.json", &score(0.6));
    metrics(&repo, "A", "radio_20260103000000", "radio_1_0.json", &score(0.7));
    metrics(&repo, "A", "radio_20260101000000", "radio_2_0.json", &score(0.9));
    metrics(&repo, "A", "radio_20260102000000", "radio_2_0.json", &score(1.0));

    let (stdout, _) = run_local(dir.path(), &repo);
    assert!(stdout.contains("repo: org/evals\n"));
    assert!(stdout.contains("episodes: 2\n"));
    assert!(stdout.contains("rounds: 2\n"));
    assert!(stdout.contains("round 1 mean: 0.700000\n"));
    assert!(stdout.contains("round 2 mean: 0.800000\n"));
    assert!(!stdout.contains("round 3"));
    assert!(stdout.contains("mean of round means: 0.750000\n"));
    assert!(stdout.contains("no time.wall_time"));
}

#[test]
fn wall_time_per_task() {
    let dir = TempDir::new().unwrap();
    let repo = dir.path().join("repo");
    metrics(&repo, "radio", "r_20260101000000", "r_1_0.json", &score_timed(1.0, 10.0));
    metrics(&repo, "radio", "r_20260101000000", "r_2_0.json", &score(0.0));
    metrics(&repo, "lamp", "l_20260101000000", "l_1_0.json", &score_timed(0.5, 30.0));
    metrics(&repo, "lamp", "l_20260101000000", "l_2_0.json", &score_timed(0.5, 50.0));

    let (stdout, _) = run_local(dir.path(), &repo);
    assert!(stdout.contains("episodes: 4\n"));
    assert!(stdout.contains("round 1 mean: 0.500000\n"));
    assert!(stdout.contains("mean episode wall time per task:\n- lamp: 40.000000\n- radio: 10.000000\n"));
    assert!(stdout.contains("mean wall time across tasks: 25.000000\n"));
}

#[test]
fn nothing_matching_is_informational() {
    let dir = TempDir::new().unwrap();
    let repo = dir.path().join("repo");
    std::fs::create_dir_all(repo.join("data")).unwrap();
    std::fs::write(repo.join("README.md"), "# evals").unwrap();
    std::fs::write(repo.join("data/train.json"), "{}").unwrap();
    // right shape, but no timestamp on the exp
    metrics(&repo, "A", "radio_latest", "radio_1_0.json", &score(0.5));

    let (stdout, _) = run_local(dir.path(), &repo);
    assert!(stdout.contains("no files matching"));
    assert!(!stdout.contains("rounds:"));
}

#[test]
fn missing_score_aborts() {
    let dir = TempDir::new().unwrap();
    let repo = dir.path().join("repo");
    metrics(&repo, "A", "radio_20260101000000", "radio_1_0.json", &score(0.5));
    metrics(&repo, "A", "radio_20260102000000", "radio_1_0.json", r#"{"time":{"wall_time":3}}"#);

    let out = roundscore_cmd(dir.path())
        .arg("org/evals")
        .arg("--local")
        .arg(&repo)
        .assert()
        .failure()
        .code(1);
    let output = out.get_output();
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("roundscore: eval"));
    assert!(stderr.contains("missing q_score.final"));
}

#[test]
fn malformed_json_aborts() {
    let dir = TempDir::new().unwrap();
    let repo = dir.path().join("repo");
    metrics(&repo, "A", "radio_20260101000000", "radio_1_0.json", "{truncated");

    let out = roundscore_cmd(dir.path())
        .arg("org/evals")
        .arg("--local")
        .arg(&repo)
        .assert()
        .failure();
    let stderr = String::from_utf8_lossy(&out.get_output().stderr);
    assert!(stderr.contains("roundscore: json"));
}

#[test]
fn missing_local_dir_fails() {
    let dir = TempDir::new().unwrap();
    let out = roundscore_cmd(dir.path())
        .arg("org/evals")
        .arg("--local")
        .arg(dir.path().join("nope"))
        .assert()
        .failure();
    let stderr = String::from_utf8_lossy(&out.get_output().stderr);
    assert!(stderr.contains("not a directory"));
}

#[test]
fn invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "[hub]\nendpoint = \"ftp://hub\"\n").unwrap();

    let out = roundscore_cmd(dir.path())
        .env("ROUNDSCORE_CONFIG", &config)
        .arg("org/evals")
        .arg("--local")
        .arg(dir.path())
        .assert()
        .failure();
    let stderr = String::from_utf8_lossy(&out.get_output().stderr);
    assert!(stderr.contains("roundscore: config"));
}

#[test]
fn unknown_repo_type_is_usage_error() {
    let dir = TempDir::new().unwrap();
    roundscore_cmd(dir.path())
        .args(["org/evals", "--repo-type", "bucket"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn verbose_logs_skipped_paths() {
    let dir = TempDir::new().unwrap();
    let repo = dir.path().join("repo");
    metrics(&repo, "A", "radio_20260101000000", "radio_1_0.json", &score(0.5));
    metrics(&repo, "A", "radio_20260101000000", "summary.json", "{}");

    let out = roundscore_cmd(dir.path())
        .arg("org/evals")
        .arg("--local")
        .arg(&repo)
        .arg("-vv")
        .assert()
        .success();
    let output = out.get_output();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stdout.contains("rounds: 1\n"));
    assert!(stderr.contains("summary.json"));
    assert!(stderr.contains("has no episode id"));
}
