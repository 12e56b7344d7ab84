//! # First-Come-First-Served
//! src/scheduling/fcfs.rs
//!
//! No expropiativo: los procesos corren completos en orden de llegada.
//! Empates en la llegada se resuelven por orden de declaración.

use super::process::Process;
use super::timeline::Timeline;

/// Genera el timeline FCFS
pub fn schedule(processes: &[Process]) -> Timeline {
    let mut timeline = Timeline::new();

    // sort_by_key es estable: mismo arrival => orden de entrada
    let mut ordered: Vec<&Process> = processes.iter().collect();
    ordered.sort_by_key(|p| p.arrival_time);

    let mut current_time = 0;

    for process in ordered {
        // Hueco hasta la próxima llegada
        if current_time < process.arrival_time {
            timeline.push_idle(current_time, process.arrival_time);
            current_time = process.arrival_time;
        }

        log::debug!("FCFS: dispatch {} at t={}", process.id, current_time);
        timeline.push_run(&process.id, current_time, current_time + process.burst_time);
        current_time += process.burst_time;
    }

    timeline
}
