//! # Round-Robin
//! src/scheduling/round_robin.rs
//!
//! Expropiativo por quantum. La cola de listos es FIFO y se siembra con el
//! orden de declaración de los procesos:
//!
//! 1. El primer proceso declarado entra a la cola sin importar su llegada.
//! 2. Tras cada tramo se encolan los procesos que ya llegaron.
//! 3. Recién después vuelve a la cola el proceso interrumpido.
//!
//! El orden de (2) y (3) decide quién corre cuando una llegada coincide con
//! el vencimiento del quantum.

use super::process::{Process, Time, WorkUnit};
use super::timeline::Timeline;
use std::collections::VecDeque;

/// Genera el timeline Round-Robin
///
/// `quantum` debe ser >= 1 (lo valida `Policy::round_robin`).
pub fn schedule(processes: &[Process], quantum: Time) -> Timeline {
    debug_assert!(quantum >= 1);

    let mut timeline = Timeline::new();
    let mut queue: VecDeque<WorkUnit> = VecDeque::new();
    let mut current_time = 0;

    let first = match processes.first() {
        Some(p) => p,
        None => return timeline,
    };

    // El primer declarado no puede correr antes de llegar
    if first.arrival_time > current_time {
        timeline.push_idle(current_time, first.arrival_time);
        current_time = first.arrival_time;
    }
    queue.push_back(WorkUnit::new(first));
    let mut next = 1;

    while let Some(mut current) = queue.pop_front() {
        let execute_time = current.remaining_time.min(quantum);

        log::debug!(
            "RR: dispatch {} for {} at t={} (remaining {})",
            current.process.id,
            execute_time,
            current_time,
            current.remaining_time
        );
        timeline.push_run(&current.process.id, current_time, current_time + execute_time);
        current_time += execute_time;
        current.remaining_time -= execute_time;

        // Primero los recién llegados...
        while next < processes.len() && processes[next].arrival_time <= current_time {
            queue.push_back(WorkUnit::new(&processes[next]));
            next += 1;
        }

        // ...después el interrumpido
        if current.remaining_time > 0 {
            log::trace!(
                "RR: requeue {} ({} left)",
                current.process.id,
                current.remaining_time
            );
            queue.push_back(current);
        }

        if queue.is_empty() && next < processes.len() {
            let arrival = processes[next].arrival_time;
            timeline.push_idle(current_time, arrival);
            current_time = arrival;
            queue.push_back(WorkUnit::new(&processes[next]));
            next += 1;
        }
    }

    timeline
}
