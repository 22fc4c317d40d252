//! Grid battle simulator producing the text documents the renderer consumes.
//!
//! Every cell holds a fighter. Each round every cell attacks one of its four (wrapping)
//! neighbours; defenders that die switch to the attacker's type. After each round the grid is
//! written as one document where each cell is the letter `'A' + type index`, so rendering the
//! output directory with the fighter family's palette replays the battle.

/// Rounds and defender selection.
pub mod battle;
/// Fighter families and their type charts.
pub mod fighter;
/// Wrapping grid storage.
pub mod grid;
/// Seeded random numbers.
pub mod rng;
/// Grid to document text.
pub mod writer;

use anyhow::Context as _;

use crate::config::SimulateConfig;
use crate::foundation::error::BattleGifResult;
use battle::Battle;
use fighter::{FighterKind, FighterType, PokemonType, RpsType, StreetFighterType};
use rng::Rng64;

/// Totals of a simulation run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimulationStats {
    /// Documents written (initial grid plus one per round).
    pub documents: u64,
    /// Fighters that died and changed type over all rounds.
    pub deaths: u64,
}

/// Run a simulation and write its documents to `cfg.output_dir`.
#[tracing::instrument(skip(cfg), fields(fighter = ?cfg.fighter, rounds = cfg.rounds))]
pub fn run_simulation(cfg: &SimulateConfig) -> BattleGifResult<SimulationStats> {
    cfg.validate()?;
    match cfg.fighter {
        FighterKind::Pokemon => run::<PokemonType>(cfg),
        FighterKind::RockPaperScissors => run::<RpsType>(cfg),
        FighterKind::StreetFighter => run::<StreetFighterType>(cfg),
    }
}

fn run<K: FighterType>(cfg: &SimulateConfig) -> BattleGifResult<SimulationStats> {
    std::fs::create_dir_all(&cfg.output_dir).with_context(|| {
        format!("create output directory '{}'", cfg.output_dir.display())
    })?;

    let mut battle = Battle::<K>::new(
        cfg.canvas.width as usize,
        cfg.canvas.height as usize,
        cfg.selection,
        cfg.fight_own,
        Rng64::new(cfg.seed),
    );

    let total = u64::from(cfg.rounds) + 1;
    let mut stats = SimulationStats::default();
    for index in 0..total {
        if index > 0 {
            let deaths = battle.step();
            stats.deaths += deaths;
            tracing::debug!(round = index, deaths, "round finished");
        }
        let path = cfg.output_dir.join(writer::document_name(index, total));
        writer::write_document(battle.fighters(), &path)?;
        stats.documents += 1;
    }

    tracing::info!(
        documents = stats.documents,
        deaths = stats.deaths,
        dir = %cfg.output_dir.display(),
        "simulation written"
    );
    Ok(stats)
}

#[cfg(test)]
#[path = "../../tests/unit/simulate/run.rs"]
mod tests;
