//! # Calculadora de Métricas
//! src/scheduling/metrics.rs
//!
//! Deriva tiempos de espera y de retorno (turnaround) a partir de un
//! timeline ya completo:
//!
//! - `completion`  = fin del último segmento del proceso
//! - `turnaround`  = completion - llegada
//! - `waiting`     = turnaround - ráfaga

use super::error::SchedulingError;
use super::process::{Process, Time};
use super::timeline::Timeline;
use serde::{Deserialize, Serialize};

/// Métricas de un proceso
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessMetric {
    pub process_id: String,
    pub arrival_time: Time,
    pub burst_time: Time,
    pub completion_time: Time,
    pub turnaround_time: Time,
    pub waiting_time: Time,
}

/// Métricas agregadas de una corrida
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub average_waiting_time: f64,
    pub average_turnaround_time: f64,
    /// En el orden de entrada de los procesos
    pub processes: Vec<ProcessMetric>,
}

impl Metrics {
    /// Busca las métricas de un proceso por id
    pub fn for_process(&self, id: &str) -> Option<&ProcessMetric> {
        self.processes.iter().find(|m| m.process_id == id)
    }
}

/// Calcula las métricas de un timeline completo
///
/// Falla si no hay procesos (no se divide por cero) o si algún proceso
/// nunca aparece en el timeline.
pub fn calculate_metrics(
    timeline: &Timeline,
    processes: &[Process],
) -> Result<Metrics, SchedulingError> {
    if processes.is_empty() {
        return Err(SchedulingError::EmptyProcessSet);
    }

    let mut per_process = Vec::with_capacity(processes.len());
    // Acumular en i128: cada valor cabe en Time pero la suma puede no caber
    let mut total_waiting: i128 = 0;
    let mut total_turnaround: i128 = 0;

    for process in processes {
        let completion_time = timeline
            .completion_time(&process.id)
            .ok_or_else(|| SchedulingError::MissingFromTimeline(process.id.clone()))?;

        let turnaround_time = completion_time - process.arrival_time;
        let waiting_time = turnaround_time - process.burst_time;

        total_waiting += i128::from(waiting_time);
        total_turnaround += i128::from(turnaround_time);

        per_process.push(ProcessMetric {
            process_id: process.id.clone(),
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            completion_time,
            turnaround_time,
            waiting_time,
        });
    }

    let count = processes.len() as f64;

    Ok(Metrics {
        average_waiting_time: total_waiting as f64 / count,
        average_turnaround_time: total_turnaround as f64 / count,
        processes: per_process,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::{fcfs, round_robin};

    #[test]
    fn test_fcfs_metrics() {
        let processes = vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)];
        let timeline = fcfs::schedule(&processes);
        let metrics = calculate_metrics(&timeline, &processes).unwrap();

        let p1 = metrics.for_process("P1").unwrap();
        assert_eq!(p1.waiting_time, 0);
        assert_eq!(p1.turnaround_time, 5);

        let p2 = metrics.for_process("P2").unwrap();
        assert_eq!(p2.waiting_time, 4);
        assert_eq!(p2.turnaround_time, 7);

        assert!((metrics.average_waiting_time - 2.0).abs() < f64::EPSILON);
        assert!((metrics.average_turnaround_time - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rr_uses_last_segment() {
        let processes = vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)];
        let timeline = round_robin::schedule(&processes, 2);
        let metrics = calculate_metrics(&timeline, &processes).unwrap();

        assert_eq!(metrics.for_process("P1").unwrap().completion_time, 8);
        assert_eq!(metrics.for_process("P2").unwrap().completion_time, 7);
        assert_eq!(metrics.for_process("P2").unwrap().waiting_time, 3);
    }

    #[test]
    fn test_empty_process_set_rejected() {
        let result = calculate_metrics(&Timeline::new(), &[]);
        assert_eq!(result, Err(SchedulingError::EmptyProcessSet));
    }

    #[test]
    fn test_missing_process_rejected() {
        let processes = vec![Process::new("P1", 0, 2)];
        let result = calculate_metrics(&Timeline::new(), &processes);
        assert_eq!(
            result,
            Err(SchedulingError::MissingFromTimeline("P1".to_string()))
        );
    }

    #[test]
    fn test_metrics_keep_input_order() {
        let processes = vec![Process::new("B", 4, 1), Process::new("A", 0, 1)];
        let timeline = fcfs::schedule(&processes);
        let metrics = calculate_metrics(&timeline, &processes).unwrap();

        let ids: Vec<&str> = metrics.processes.iter().map(|m| m.process_id.as_str()).collect();
        assert_eq!(ids, vec!["B", "A"]);
    }
}
