use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use rayon::prelude::*;
use tracing::info;

use esagent_core::{run_replay, AgentConfig, EsAgent, IdleStrategy, Replay, ReplaySummary};
use esagent_shared::Frame;

/// Read a JSON-lines recording. Blank lines are skipped.
pub fn load_frames(path: &Path) -> Result<Vec<Frame>> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let mut frames = Vec::new();
    for (i, line) in BufReader::new(file).lines().enumerate() {
        let line = line.with_context(|| format!("failed to read {}", path.display()))?;
        if line.trim().is_empty() {
            continue;
        }
        let frame: Frame = serde_json::from_str(&line)
            .with_context(|| format!("{}:{}: invalid frame", path.display(), i + 1))?;
        frames.push(frame);
    }
    Ok(frames)
}

fn replay_frames(frames: Vec<Frame>, config: &AgentConfig) -> Result<Replay> {
    let mut agent = EsAgent::new(config.clone(), |_| IdleStrategy)?;
    Ok(run_replay(&mut agent, frames)?)
}

fn annotated_path(dir: &Path, input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("frames");
    dir.join(format!("{stem}.annotated.jsonl"))
}

fn write_frames(path: &Path, frames: &[Frame]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    for frame in frames {
        serde_json::to_writer(&mut out, frame)?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

/// Output path per input file. Two inputs mapping to the same output is an
/// error, since the parallel jobs would overwrite each other.
fn output_paths(dir: &Path, files: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut seen: BTreeMap<PathBuf, &Path> = BTreeMap::new();
    let mut paths = Vec::with_capacity(files.len());
    for file in files {
        let out = annotated_path(dir, file);
        if let Some(previous) = seen.insert(out.clone(), file) {
            bail!(
                "{} and {} would both write {}",
                previous.display(),
                file.display(),
                out.display()
            );
        }
        paths.push(out);
    }
    Ok(paths)
}

/// Replay one file with a fresh agent, optionally writing the annotated frames.
fn run_job(path: &Path, config: &AgentConfig, output: Option<&Path>) -> Result<ReplaySummary> {
    let frames = load_frames(path)?;
    let replay = replay_frames(frames, config)
        .with_context(|| format!("replay of {} failed", path.display()))?;

    if let Some(out_path) = output {
        write_frames(out_path, &replay.frames)?;
        info!(input = %path.display(), output = %out_path.display(), "annotated frames written");
    }
    Ok(replay.summary)
}

fn print_summary(path: &Path, summary: &ReplaySummary) {
    let state = &summary.final_state;
    let opponent = summary
        .primary_opponent()
        .map_or_else(|| "-".to_string(), |p| p.to_string());

    println!("=== {} ===", path.display());
    println!("Frames:      {} ({} skipped)", summary.frames, summary.skipped);
    println!("Opponent:    {}", opponent);
    println!("Ledge grabs: {}", state.ledge_grab_count);
    println!(
        "Lockouts:    tech={} jump={} firefox={}",
        state.lockouts.tech.value(),
        state.lockouts.meteor_jump.value(),
        state.lockouts.meteor_ff.value()
    );
    println!("Powershield: {}", state.powershielded_last);
    println!();
}

pub fn cmd_replay(files: &[PathBuf], config: AgentConfig, output: Option<&Path>) -> Result<()> {
    config.validate()?;
    let outputs: Vec<Option<PathBuf>> = match output {
        Some(dir) => {
            let paths = output_paths(dir, files)?;
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
            paths.into_iter().map(Some).collect()
        }
        None => vec![None; files.len()],
    };

    let results: Vec<Result<ReplaySummary>> = files
        .par_iter()
        .zip(outputs.par_iter())
        .map(|(path, out)| run_job(path, &config, out.as_deref()))
        .collect();

    let mut failed = 0;
    for (path, result) in files.iter().zip(results) {
        match result {
            Ok(summary) => print_summary(path, &summary),
            Err(e) => {
                eprintln!("{}: {:#}", path.display(), e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} recordings failed", failed, files.len());
    }
    Ok(())
}

pub fn cmd_check(file: &Path, config: AgentConfig) -> Result<()> {
    let frames = load_frames(file)?;
    let count = frames.len();

    let first = replay_frames(frames.clone(), &config)?;
    let second = replay_frames(frames, &config)?;
    let a = serde_json::to_string(&first.frames)?;
    let b = serde_json::to_string(&second.frames)?;

    if a != b || first.summary != second.summary {
        bail!("replay of {} is not deterministic", file.display());
    }
    println!("{}: {} frames, deterministic", file.display(), count);
    Ok(())
}
