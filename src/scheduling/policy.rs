//! # Políticas de Planificación
//! src/scheduling/policy.rs
//!
//! La política se resuelve una sola vez por corrida a partir de su nombre
//! (`"fcfs" | "sjf" | "rr"`); los motores nunca vuelven a mirar strings.

use super::error::SchedulingError;
use super::process::{Process, Time};
use super::timeline::Timeline;
use super::{fcfs, round_robin, sjf};
use serde::{Deserialize, Serialize};

/// Política de planificación seleccionada
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "name")]
pub enum Policy {
    /// First-Come-First-Served
    Fcfs,

    /// Shortest-Job-First no expropiativo
    Sjf,

    /// Round-Robin con quantum fijo
    #[serde(rename = "rr")]
    RoundRobin { quantum: Time },
}

impl Policy {
    /// Construye Round-Robin validando el quantum
    pub fn round_robin(quantum: Time) -> Result<Self, SchedulingError> {
        if quantum < 1 {
            return Err(SchedulingError::InvalidQuantum(quantum));
        }
        Ok(Policy::RoundRobin { quantum })
    }

    /// Resuelve una política por nombre
    ///
    /// El quantum solo se usa (y valida) para Round-Robin.
    ///
    /// # Ejemplo
    /// ```
    /// use algoviz::scheduling::Policy;
    ///
    /// assert_eq!(Policy::from_name("rr", 2).unwrap(), Policy::RoundRobin { quantum: 2 });
    /// assert!(Policy::from_name("rr", 0).is_err());
    /// ```
    pub fn from_name(name: &str, quantum: Time) -> Result<Self, SchedulingError> {
        match name.trim().to_lowercase().as_str() {
            "fcfs" => Ok(Policy::Fcfs),
            "sjf" => Ok(Policy::Sjf),
            "rr" | "round-robin" | "roundrobin" => Policy::round_robin(quantum),
            _ => Err(SchedulingError::UnknownPolicy(name.to_string())),
        }
    }

    /// Nombre corto de la política
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fcfs => "fcfs",
            Policy::Sjf => "sjf",
            Policy::RoundRobin { .. } => "rr",
        }
    }

    /// Verifica que los parámetros de la política sean válidos
    pub fn validate(&self) -> Result<(), SchedulingError> {
        match *self {
            Policy::RoundRobin { quantum } if quantum < 1 => {
                Err(SchedulingError::InvalidQuantum(quantum))
            }
            _ => Ok(()),
        }
    }

    /// Ejecuta el motor correspondiente
    ///
    /// Asume procesos y parámetros ya validados.
    pub(crate) fn schedule(&self, processes: &[Process]) -> Timeline {
        match *self {
            Policy::Fcfs => fcfs::schedule(processes),
            Policy::Sjf => sjf::schedule(processes),
            Policy::RoundRobin { quantum } => round_robin::schedule(processes, quantum),
        }
    }
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Policy::Fcfs => write!(f, "First Come First Serve (FCFS)"),
            Policy::Sjf => write!(f, "Shortest Job First (SJF)"),
            Policy::RoundRobin { quantum } => write!(f, "Round Robin (RR, quantum={})", quantum),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Policy::from_name("fcfs", 0).unwrap(), Policy::Fcfs);
        assert_eq!(Policy::from_name("SJF", 0).unwrap(), Policy::Sjf);
        assert_eq!(
            Policy::from_name("round-robin", 3).unwrap(),
            Policy::RoundRobin { quantum: 3 }
        );
    }

    #[test]
    fn test_from_name_unknown() {
        assert_eq!(
            Policy::from_name("priority", 2),
            Err(SchedulingError::UnknownPolicy("priority".to_string()))
        );
    }

    #[test]
    fn test_invalid_quantum() {
        assert_eq!(Policy::round_robin(0), Err(SchedulingError::InvalidQuantum(0)));
        assert_eq!(Policy::round_robin(-3), Err(SchedulingError::InvalidQuantum(-3)));
        assert!(Policy::RoundRobin { quantum: 0 }.validate().is_err());
        assert!(Policy::RoundRobin { quantum: 1 }.validate().is_ok());
    }

    #[test]
    fn test_quantum_ignored_for_non_preemptive() {
        assert!(Policy::from_name("fcfs", -1).is_ok());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Policy::RoundRobin { quantum: 2 }).unwrap();
        assert_eq!(json, r#"{"name":"rr","quantum":2}"#);

        let json = serde_json::to_string(&Policy::Fcfs).unwrap();
        assert_eq!(json, r#"{"name":"fcfs"}"#);
    }
}
