//! # Simulador de Planificación de CPU
//! src/scheduling/mod.rs
//!
//! Simulación discreta de la ejecución de un conjunto estático de procesos
//! bajo tres políticas: FCFS, SJF (no expropiativo) y Round-Robin.
//!
//! ## Flujo
//!
//! ```text
//! procesos + política → validación → motor → Timeline → métricas → reporte
//! ```
//!
//! Cada corrida es una función pura: mismas entradas, mismo timeline y
//! mismas métricas. No hay estado compartido entre corridas.

pub mod error;
pub(crate) mod fcfs;
pub mod metrics;
pub mod policy;
pub mod process;
pub(crate) mod round_robin;
pub(crate) mod sjf;
pub mod timeline;

pub use error::{ErrorCategory, SchedulingError};
pub use metrics::{calculate_metrics, Metrics, ProcessMetric};
pub use policy::Policy;
pub use process::{validate_processes, Process, ProcessRegistry, Time};
pub use timeline::{Segment, Timeline, IDLE};

use serde::{Deserialize, Serialize};

/// Resultado completo de una corrida
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationReport {
    pub policy: Policy,
    pub timeline: Timeline,
    pub metrics: Metrics,
}

/// Ejecuta una simulación completa
///
/// Valida política y procesos antes de empezar; si algo falla no se
/// produce ningún timeline.
///
/// # Ejemplo
/// ```
/// use algoviz::scheduling::{simulate, Policy, Process};
///
/// let processes = vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)];
/// let report = simulate(&processes, Policy::Fcfs).unwrap();
/// assert_eq!(report.timeline.end_time(), 8);
/// ```
pub fn simulate(processes: &[Process], policy: Policy) -> Result<SimulationReport, SchedulingError> {
    if let Err(e) = policy.validate().and_then(|_| validate_processes(processes)) {
        log::warn!("simulation rejected: {}", e);
        return Err(e);
    }

    log::info!(
        "simulating {} processes with {}",
        processes.len(),
        policy
    );

    let timeline = policy.schedule(processes);
    let metrics = calculate_metrics(&timeline, processes)?;

    log::info!(
        "simulation done: makespan={} idle={} avg_wt={:.2} avg_tat={:.2}",
        timeline.end_time(),
        timeline.idle_time(),
        metrics.average_waiting_time,
        metrics.average_turnaround_time
    );

    Ok(SimulationReport {
        policy,
        timeline,
        metrics,
    })
}

/// Igual que [`simulate`] pero resolviendo la política por nombre
pub fn simulate_named(
    processes: &[Process],
    policy_name: &str,
    quantum: Time,
) -> Result<SimulationReport, SchedulingError> {
    let policy = Policy::from_name(policy_name, quantum)?;
    simulate(processes, policy)
}
