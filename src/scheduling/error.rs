//! # Errores del Simulador de Planificación
//! src/scheduling/error.rs
//!
//! Todos los errores se detectan antes de comenzar la simulación: el motor
//! nunca entrega un timeline parcial.

use super::process::Time;

/// Categoría de un error (taxonomía expuesta al usuario)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Configuración inválida de la corrida (conjunto vacío, quantum, política)
    InvalidConfiguration,

    /// Un proceso de entrada viola sus restricciones
    MalformedProcess,

    /// El timeline no corresponde al conjunto de procesos
    InconsistentTimeline,
}

/// Errores del simulador
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedulingError {
    /// Se pidió una corrida sin procesos
    EmptyProcessSet,

    /// Quantum de Round-Robin <= 0
    InvalidQuantum(Time),

    /// Nombre de política desconocido
    UnknownPolicy(String),

    /// Tiempo de llegada negativo
    NegativeArrival { id: String, arrival_time: Time },

    /// Ráfaga <= 0
    NonPositiveBurst { id: String, burst_time: Time },

    /// Dos procesos con el mismo id
    DuplicateId(String),

    /// Id reservado para los tramos ociosos
    ReservedId(String),

    /// La última llegada más la suma de ráfagas no cabe en `Time`
    TimeOverflow,

    /// Proceso en línea `ID:LLEGADA:RAFAGA[:PRIORIDAD]` mal formado
    InvalidProcessFormat(String),

    /// Un proceso no aparece en el timeline
    MissingFromTimeline(String),
}

impl SchedulingError {
    /// Retorna la categoría del error
    pub fn category(&self) -> ErrorCategory {
        match self {
            SchedulingError::EmptyProcessSet
            | SchedulingError::InvalidQuantum(_)
            | SchedulingError::UnknownPolicy(_) => ErrorCategory::InvalidConfiguration,

            SchedulingError::NegativeArrival { .. }
            | SchedulingError::NonPositiveBurst { .. }
            | SchedulingError::DuplicateId(_)
            | SchedulingError::ReservedId(_)
            | SchedulingError::TimeOverflow
            | SchedulingError::InvalidProcessFormat(_) => ErrorCategory::MalformedProcess,

            SchedulingError::MissingFromTimeline(_) => ErrorCategory::InconsistentTimeline,
        }
    }
}

impl std::fmt::Display for SchedulingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchedulingError::EmptyProcessSet => {
                write!(f, "at least one process is required to run a simulation")
            }
            SchedulingError::InvalidQuantum(q) => {
                write!(f, "time quantum must be positive, got {}", q)
            }
            SchedulingError::UnknownPolicy(name) => {
                write!(f, "unknown scheduling policy '{}' (expected fcfs, sjf or rr)", name)
            }
            SchedulingError::NegativeArrival { id, arrival_time } => {
                write!(f, "process {} has a negative arrival time ({})", id, arrival_time)
            }
            SchedulingError::NonPositiveBurst { id, burst_time } => {
                write!(f, "process {} must have a burst time >= 1, got {}", id, burst_time)
            }
            SchedulingError::DuplicateId(id) => write!(f, "duplicate process id: {}", id),
            SchedulingError::ReservedId(id) => write!(
                f,
                "process id '{}' is reserved for idle segments, choose another id",
                id
            ),
            SchedulingError::TimeOverflow => write!(
                f,
                "latest arrival plus total burst time exceeds {} ticks, use smaller times",
                Time::MAX
            ),
            SchedulingError::InvalidProcessFormat(text) => write!(
                f,
                "invalid process format '{}' (expected ID:ARRIVAL:BURST[:PRIORITY])",
                text
            ),
            SchedulingError::MissingFromTimeline(id) => {
                write!(f, "process {} never runs in the timeline", id)
            }
        }
    }
}

impl std::error::Error for SchedulingError {}
