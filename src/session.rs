//! A complete decay run: generate a random graph, export it, delete a
//! shuffled prefix of its edges while reporting both connectivity signals,
//! export again and advance the run counter.

use crate::counter::{artifact_name, RunCounter};
use crate::error::{ConnectivityError, Result};
use crate::generator::random_oracle;
use crate::io::write_adjacency_file;
use crate::oracle::{ConnectivityOracle, DeletionReport};
use log::{error, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::path::{Path, PathBuf};

#[cfg(feature = "handle-ctrlc")]
use crate::signals::received_ctrl_c;

#[derive(Clone, Debug)]
pub struct DecayConfig {
    pub vertices: usize,
    pub edges: usize,
    pub deletions: usize,
    pub seed: Option<u64>,
    pub output_dir: PathBuf,
    pub counter_file: PathBuf,
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            vertices: 10,
            edges: 15,
            deletions: 5,
            seed: None,
            output_dir: PathBuf::from("."),
            counter_file: PathBuf::from("file_counter.txt"),
        }
    }
}

impl DecayConfig {
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct RunSummary {
    pub oracle: ConnectivityOracle,
    pub reports: Vec<DeletionReport>,
    pub initial_components: usize,
    pub initial_export: Option<PathBuf>,
    pub final_export: Option<PathBuf>,
    pub interrupted: bool,
}

impl RunSummary {
    pub fn final_components(&self) -> usize {
        self.oracle.components().count()
    }
}

fn export(oracle: &ConnectivityOracle, dir: &Path, counter: usize) -> Option<PathBuf> {
    let path = dir.join(artifact_name(counter));
    match write_adjacency_file(oracle.graph(), &path) {
        Ok(()) => {
            info!("graph data saved as {}", path.display());
            Some(path)
        }
        Err(e) => {
            error!("unable to write {}: {}", path.display(), e);
            None
        }
    }
}

/// Executes one run. `on_delete` sees every report as soon as it is
/// produced. Export and counter write failures are logged and do not abort
/// the run.
pub fn run<R, C, F>(
    config: &DecayConfig,
    rng: &mut R,
    counter: &mut C,
    mut on_delete: F,
) -> Result<RunSummary>
where
    R: Rng,
    C: RunCounter,
    F: FnMut(&DeletionReport),
{
    if config.deletions > config.edges {
        return Err(ConnectivityError::TooManyDeletions {
            requested: config.deletions,
            available: config.edges,
        });
    }
    let mut oracle = random_oracle(config.vertices, config.edges, rng)?;
    let initial_components = oracle.components().count();
    info!(
        "generated {} vertices, {} edges, {} components",
        config.vertices, config.edges, initial_components
    );

    let run_number = counter.read();
    let initial_export = export(&oracle, &config.output_dir, run_number);

    let mut order: Vec<usize> = (0..oracle.edges().len()).collect();
    order.shuffle(rng);

    let mut reports = Vec::with_capacity(config.deletions);
    #[cfg_attr(not(feature = "handle-ctrlc"), allow(unused_mut))]
    let mut interrupted = false;
    for index in order.into_iter().take(config.deletions) {
        #[cfg(feature = "handle-ctrlc")]
        if received_ctrl_c() {
            info!("interrupted after {} deletions", reports.len());
            interrupted = true;
            break;
        }
        if let Some(report) = oracle.delete_edge(index)? {
            on_delete(&report);
            reports.push(report);
        }
    }

    let final_export = export(&oracle, &config.output_dir, run_number + 1);
    if let Err(e) = counter.write(run_number + 2) {
        error!("unable to update run counter: {}", e);
    }

    Ok(RunSummary {
        oracle,
        reports,
        initial_components,
        initial_export,
        final_export,
        interrupted,
    })
}
