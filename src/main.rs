use anyhow::Context;
use lineup_evolver::config::ConfigManager;
use lineup_evolver::data::{build_gene_pool, CsvConnector, LineupExporter, RunReport};
use lineup_evolver::engines::evolution::{ConsoleProgressCallback, EvolutionEngine};
use lineup_evolver::report::LineupReport;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Optional config file path is the only positional argument
    let config_path = std::env::args().nth(1).map(PathBuf::from);

    let manager = ConfigManager::new();
    manager
        .load(config_path.as_deref())
        .context("failed to load configuration")?;
    let config = manager.get()?;

    let players_path = config
        .data
        .players_csv
        .clone()
        .context("data.players_csv is not set")?;
    let players = CsvConnector::load_players(&players_path)
        .with_context(|| format!("failed to load players from {}", players_path.display()))?;
    let metadata = CsvConnector::create_metadata(&players_path, &players);
    log::info!(
        "Slate: {} players, positions {:?}, salaries {}-{}",
        metadata.num_players,
        metadata.positions,
        metadata.salary_range.0,
        metadata.salary_range.1
    );

    let pool = build_gene_pool(players, &config.roster)?;
    let mut engine = EvolutionEngine::new(pool, config.evolution.clone())?;

    let mut progress = ConsoleProgressCallback::new(config.evolution.report_every);
    engine
        .run_with_callback(config.evolution.generations, &mut progress)
        .context("evolution failed; loosen the roster filters if the pool is infeasible")?;

    println!("{}", LineupReport::new(engine.best(), engine.budget()));

    if let Some(path) = &config.data.export_csv {
        LineupExporter::to_csv(path, engine.best())?;
    }
    if let Some(path) = &config.data.export_json {
        let report = RunReport::new(engine.best(), engine.budget(), engine.generations_run());
        LineupExporter::to_json(path, &report)?;
    }

    Ok(())
}
