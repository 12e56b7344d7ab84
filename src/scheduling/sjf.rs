//! # Shortest-Job-First (no expropiativo)
//! src/scheduling/sjf.rs
//!
//! En cada punto de decisión (al terminar un proceso) se elige, entre los
//! procesos ya llegados, el de menor ráfaga. Un proceso que llega tarde no
//! interrumpe al que está corriendo, pero sí puede adelantarse a uno más
//! largo que todavía no empezó.

use super::process::Process;
use super::timeline::Timeline;

/// Genera el timeline SJF
pub fn schedule(processes: &[Process]) -> Timeline {
    let mut timeline = Timeline::new();
    let mut completed = vec![false; processes.len()];
    let mut remaining = processes.len();
    let mut current_time = 0;

    while remaining > 0 {
        // Menor ráfaga; empate por llegada y luego por orden de entrada
        let next = processes
            .iter()
            .enumerate()
            .filter(|(idx, p)| !completed[*idx] && p.arrival_time <= current_time)
            .min_by_key(|(idx, p)| (p.burst_time, p.arrival_time, *idx));

        let (idx, process) = match next {
            Some(found) => found,
            None => {
                // Nadie disponible: avanzar hasta la próxima llegada
                let next_arrival = processes
                    .iter()
                    .enumerate()
                    .filter(|(idx, _)| !completed[*idx])
                    .map(|(_, p)| p.arrival_time)
                    .min();

                match next_arrival {
                    Some(arrival) => {
                        timeline.push_idle(current_time, arrival);
                        current_time = arrival;
                        continue;
                    }
                    None => break,
                }
            }
        };

        log::debug!(
            "SJF: dispatch {} (burst {}) at t={}",
            process.id,
            process.burst_time,
            current_time
        );
        timeline.push_run(&process.id, current_time, current_time + process.burst_time);
        current_time += process.burst_time;
        completed[idx] = true;
        remaining -= 1;
    }

    timeline
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::timeline::Segment;

    #[test]
    fn test_sjf_waits_for_running_process() {
        let processes = vec![
            Process::new("P1", 0, 8),
            Process::new("P2", 1, 4),
            Process::new("P3", 2, 9),
        ];
        let timeline = schedule(&processes);

        assert_eq!(
            timeline.segments(),
            &[
                Segment::run("P1", 0, 8),
                Segment::run("P2", 8, 12),
                Segment::run("P3", 12, 21),
            ]
        );
    }

    #[test]
    fn test_sjf_shorter_overtakes_at_decision_point() {
        let processes = vec![
            Process::new("A", 0, 3),
            Process::new("B", 1, 6),
            Process::new("C", 2, 1),
        ];
        let timeline = schedule(&processes);
        let order: Vec<&str> = timeline.iter().map(|s| s.process_id.as_str()).collect();

        assert_eq!(order, vec!["A", "C", "B"]);
    }

    #[test]
    fn test_sjf_tie_break_by_arrival_then_input_order() {
        let processes = vec![
            Process::new("X", 0, 10),
            Process::new("late", 3, 2),
            Process::new("early", 1, 2),
            Process::new("early2", 1, 2),
        ];
        let timeline = schedule(&processes);
        let order: Vec<&str> = timeline.iter().map(|s| s.process_id.as_str()).collect();

        assert_eq!(order, vec!["X", "early", "early2", "late"]);
    }

    #[test]
    fn test_sjf_idle_until_next_arrival() {
        let processes = vec![Process::new("P1", 2, 2), Process::new("P2", 10, 1)];
        let timeline = schedule(&processes);

        assert_eq!(
            timeline.segments(),
            &[
                Segment::idle(0, 2),
                Segment::run("P1", 2, 4),
                Segment::idle(4, 10),
                Segment::run("P2", 10, 11),
            ]
        );
    }

    #[test]
    fn test_sjf_empty() {
        assert!(schedule(&[]).is_empty());
    }
}
