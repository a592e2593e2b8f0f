// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use cleaning_core::time::TimePoint;
use cleaning_dsa::{list::SequenceKind, map::MapKind};
use cleaning_manager::prelude::*;
use cleaning_model::prelude::*;
use rayon::prelude::*;
use serde::Serialize;
use std::{error::Error, fmt::Display, fs::File, io::BufWriter, time::Instant};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

type Tm = i64;

const RESULTS_PATH: &str = "coverage_results.json";

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .init();
}

#[derive(Debug, Clone, Serialize)]
struct WorkloadInfo {
    idx: usize,
    seed: u64,
    rooms: usize,
    logs: usize,
    orphan_fraction: f64,
    first_timestamp: Option<Tm>,
    last_timestamp: Option<Tm>,
    cutoff: String,
}

#[derive(Debug, Clone, Serialize)]
struct BackendRun {
    map: String,
    sequence: String,
    room_sort: String,
    coverage: i128,
    next_replacement: i128,
    busiest_room: Option<String>,
    coverage_elapsed_us: u128,
    reports_elapsed_us: u128,
}

#[derive(Debug, Clone, Serialize)]
struct WorkloadResult {
    workload: WorkloadInfo,
    backends: Vec<BackendRun>,
}

#[derive(Debug, Clone, Serialize)]
struct RunReport {
    description: String,
    workloads: Vec<WorkloadResult>,
}

/// Everything a backend computed, compared verbatim across backends.
#[derive(Debug, Clone, PartialEq)]
struct Answers {
    coverage_by_room: Vec<RoomCoverage>,
    ranking: Vec<RoomFrequency>,
    room_report: String,
    bag_report: String,
}

#[derive(Debug)]
struct BackendMismatchError {
    workload: usize,
    config: ManagerConfig,
}

impl Display for BackendMismatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Workload {}: {} disagrees with the baseline backend",
            self.workload, self.config
        )
    }
}

impl Error for BackendMismatchError {}

fn interpolate_u(val0: usize, val1: usize, step: usize, steps: usize) -> usize {
    if steps <= 1 {
        return val1;
    }
    let num = (val1 as isize - val0 as isize) * step as isize;
    (val0 as isize + num / (steps as isize - 1)).max(0) as usize
}

fn backend_configs() -> Vec<ManagerConfig> {
    let mut configs = Vec::new();
    for map in MapKind::ALL {
        for sequence in SequenceKind::ALL {
            for room_sort in [RoomSortStrategy::Comparison, RoomSortStrategy::NonComparison] {
                configs.push(ManagerConfig {
                    sequence,
                    room_sort,
                    ..ManagerConfig::with_map(map)
                });
            }
        }
    }
    configs
}

fn run_backend(
    workload: &Workload<Tm>,
    config: ManagerConfig,
    cutoff: TimePoint<Tm>,
    cutoff_text: &str,
) -> Result<(BackendRun, Answers), Box<dyn Error + Send + Sync>> {
    let manager = CleaningManager::new(workload.rooms().to_vec(), workload.logs().to_vec(), config)?;
    let mut reports = ReportManager::new(manager);

    let t0 = Instant::now();
    let coverage = reports.manager_mut().coverage_since(cutoff);
    let next_replacement = reports.manager_mut().next_replacement(cutoff);
    let coverage_by_room = reports.manager_mut().coverage_by_room(cutoff);
    let coverage_elapsed = t0.elapsed();

    let t1 = Instant::now();
    let ranking = reports.frequency_ranking();
    let room_report = reports.room_report();
    let bag_report = reports.vacuum_bag_report(cutoff_text)?;
    let reports_elapsed = t1.elapsed();

    let run = BackendRun {
        map: config.map.to_string(),
        sequence: config.sequence.to_string(),
        room_sort: config.room_sort.to_string(),
        coverage: coverage.value(),
        next_replacement: next_replacement.value(),
        busiest_room: ranking.first().map(|f| f.room_id().to_string()),
        coverage_elapsed_us: coverage_elapsed.as_micros(),
        reports_elapsed_us: reports_elapsed.as_micros(),
    };
    let answers = Answers {
        coverage_by_room,
        ranking,
        room_report,
        bag_report,
    };
    Ok((run, answers))
}

fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    enable_tracing();

    // Ramp from a small house to a large building.
    let n_workloads = 8usize;
    let (min_rooms, max_rooms) = (8usize, 240usize);
    let (min_logs, max_logs) = (100usize, 24_000usize);
    let orphan_fraction = 0.02;

    let configs = backend_configs();
    let mut results: Vec<WorkloadResult> = Vec::with_capacity(n_workloads);

    for i in 0..n_workloads {
        let rooms = interpolate_u(min_rooms, max_rooms, i, n_workloads);
        let logs = interpolate_u(min_logs, max_logs, i, n_workloads);
        let seed: u64 = 42 + (i as u64);

        let cfg = WorkloadGenConfigBuilder::<Tm>::new()
            .room_count(rooms)
            .log_count(logs)
            .orphan_fraction(orphan_fraction)
            .seed(seed)
            .build()?;
        let mut generator: WorkloadGenerator<Tm> = cfg.into();
        let workload = generator.generate();

        let span = workload.time_span();
        let cutoff = span
            .map(|(first, last)| TimePoint::new(first.value() + (last.value() - first.value()) / 2))
            .unwrap_or_else(TimePoint::zero);
        let cutoff_text = format_timestamp(cutoff);

        let outcomes = configs
            .par_iter()
            .map(|&config| run_backend(&workload, config, cutoff, &cutoff_text))
            .collect::<Result<Vec<_>, _>>()?;

        if let Some((_, baseline)) = outcomes.first() {
            for (config, (_, answers)) in configs.iter().zip(&outcomes) {
                if answers != baseline {
                    return Err(Box::new(BackendMismatchError {
                        workload: i,
                        config: *config,
                    }));
                }
            }
        }

        let backends: Vec<BackendRun> = outcomes.into_iter().map(|(run, _)| run).collect();
        if let Some(first) = backends.first() {
            info!(
                workload = i,
                rooms,
                logs,
                coverage = first.coverage,
                next_replacement = first.next_replacement,
                backends = backends.len(),
                "All backends agree"
            );
        }

        results.push(WorkloadResult {
            workload: WorkloadInfo {
                idx: i,
                seed,
                rooms,
                logs,
                orphan_fraction,
                first_timestamp: span.map(|(first, _)| first.value()),
                last_timestamp: span.map(|(_, last)| last.value()),
                cutoff: cutoff_text,
            },
            backends,
        });
    }

    let report = RunReport {
        description: format!(
            "Cleaning coverage cross-check: {} workloads from small to big, {} backend combinations each.",
            n_workloads,
            configs.len()
        ),
        workloads: results,
    };

    let file = File::create(RESULTS_PATH)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &report)?;

    println!();
    println!("=================================================================");
    println!("======================== Cross-check Done =======================");
    println!("=================================================================");
    println!();
    for result in &report.workloads {
        let fastest = result
            .backends
            .iter()
            .min_by_key(|b| b.coverage_elapsed_us + b.reports_elapsed_us);
        if let Some(b) = fastest {
            println!(
                "#{:<2} rooms {:>4} logs {:>6}  coverage {:>8}  fastest {} / {} / {}",
                result.workload.idx,
                result.workload.rooms,
                result.workload.logs,
                b.coverage,
                b.map,
                b.sequence,
                b.room_sort
            );
        }
    }
    println!();
    println!("Wrote: {}", RESULTS_PATH);
    Ok(())
}
