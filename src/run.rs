use crate::RoundscoreError;
use crate::aggregate::{compute_round_means, compute_wall_time_stats};
use crate::cli::Cli;
use crate::config::RoundscoreConfig;
use crate::load::collect_episode_evals;
use crate::report::{NO_MATCHING_FILES, NO_ROUNDS, render_rounds, render_wall_time};
use crate::source::{HubSource, LocalSource, RepoSource};

pub fn handle_run(cli: &Cli, config: &RoundscoreConfig) -> Result<(), RoundscoreError> {
    let source: Box<dyn RepoSource> = match &cli.local {
        Some(dir) => {
            log::info!("reading local copy at {}", dir.display());
            Box::new(LocalSource::new(dir)?)
        }
        None => {
            let revision = config.hub.resolve_revision(cli.revision.as_deref());
            Box::new(HubSource::new(&cli.repo_id, cli.repo_type, revision, &config.hub)?)
        }
    };
    print!("{}", aggregate_report(&cli.repo_id, source.as_ref())?);
    Ok(())
}

/// Collect, aggregate and render. Empty outcomes render as a single message.
pub fn aggregate_report(repo_id: &str, source: &dyn RepoSource) -> Result<String, RoundscoreError> {
    let mut groups = collect_episode_evals(source)?;
    if groups.is_empty() {
        return Ok(format!("{NO_MATCHING_FILES}\n"));
    }

    let stats = compute_round_means(&mut groups);
    if stats.rounds() == 0 {
        return Ok(format!("{NO_ROUNDS}\n"));
    }

    let wall = compute_wall_time_stats(&stats.used);
    let mut out = render_rounds(repo_id, groups.len(), &stats);
    out.push_str(&render_wall_time(wall.as_ref()));
    Ok(out)
}
