use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use game_core::types::GhostState;
use game_core::{NullAudio, Phase, Session, load_map};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a map file and report what is on it
    Validate {
        /// Path to the map text file
        map: PathBuf,
    },
    /// Run a headless round with no player input and print the event log
    Simulate {
        /// Path to the map text file
        map: PathBuf,
        /// Number of ticks to simulate
        #[arg(long, default_value_t = 3000)]
        ticks: u64,
        /// RNG seed for the scared-ghost wander
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

fn main() -> Result<()> {
    match Args::parse().command {
        Command::Validate { map } => validate(&map),
        Command::Simulate { map, ticks, seed } => simulate(&map, ticks, seed),
    }
}

fn validate(path: &PathBuf) -> Result<()> {
    let arena = load_map(path)
        .with_context(|| format!("failed to load map: {}", path.display()))?;
    println!("dimensions: {}x{}", arena.width(), arena.height());
    println!("walls:      {}", arena.walls().count());
    println!("pacmen:     {}", arena.pacmen.len());
    println!("ghosts:     {}", arena.ghosts.len());
    println!("pickups:    {}", arena.collectibles.len());
    println!("gate:       ({}, {})", arena.gate().x(), arena.gate().y());
    if arena.pacmen.is_empty() {
        bail!("map has no pacman spawn");
    }
    if arena.collectibles.is_empty() {
        bail!("map has no collectibles, the round would end on the first tick");
    }
    Ok(())
}

fn simulate(path: &PathBuf, ticks: u64, seed: u64) -> Result<()> {
    let arena = load_map(path)
        .with_context(|| format!("failed to load map: {}", path.display()))?;
    let mut session = Session::with_arena(seed, arena);
    let mut audio = NullAudio;

    for _ in 0..ticks {
        session
            .tick(&[], &mut audio)
            .context("simulation tick failed")?;
        if matches!(session.phase(), Phase::Alert { .. }) {
            break;
        }
    }

    for event in session.drain_events() {
        println!("{event:?}");
    }
    println!("phase after {} ticks: {:?}", session.current_tick(), session.phase());
    if let Some(arena) = session.arena() {
        println!("score: {}", arena.score);
        println!("remaining pickups: {}", arena.collectibles.len());
        let dead = arena.ghosts.values().filter(|g| g.state == GhostState::Dead).count();
        println!("dead ghosts: {dead}");
    }
    Ok(())
}
