//! # Registro de Procesos
//! src/scheduling/process.rs
//!
//! Define el proceso de entrada, la copia de trabajo que usan los motores
//! de planificación y el registro que valida el conjunto antes de una corrida.

use super::error::SchedulingError;
use super::timeline::IDLE;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Unidad de tiempo de la simulación (ticks)
///
/// Es con signo para poder representar (y rechazar) entradas negativas.
pub type Time = i64;

/// Proceso declarado por el usuario
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    /// Identificador único dentro de la corrida
    pub id: String,

    /// Instante en que el proceso puede empezar a ejecutarse
    pub arrival_time: Time,

    /// Tiempo total de CPU requerido
    pub burst_time: Time,

    /// Prioridad (no la usan las políticas actuales)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
}

impl Process {
    /// Crea un proceso sin prioridad
    pub fn new(id: &str, arrival_time: Time, burst_time: Time) -> Self {
        Self {
            id: id.to_string(),
            arrival_time,
            burst_time,
            priority: None,
        }
    }

    /// Asigna una prioridad
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Parsea un proceso desde la forma `ID:LLEGADA:RAFAGA[:PRIORIDAD]`
    ///
    /// # Ejemplo
    /// ```
    /// use algoviz::scheduling::Process;
    ///
    /// let p = Process::parse_inline("P1:0:5").unwrap();
    /// assert_eq!(p.burst_time, 5);
    /// ```
    pub fn parse_inline(text: &str) -> Result<Self, SchedulingError> {
        let invalid = || SchedulingError::InvalidProcessFormat(text.to_string());

        let parts: Vec<&str> = text.split(':').map(|s| s.trim()).collect();
        if parts.len() < 3 || parts.len() > 4 || parts[0].is_empty() {
            return Err(invalid());
        }

        let arrival_time: Time = parts[1].parse().map_err(|_| invalid())?;
        let burst_time: Time = parts[2].parse().map_err(|_| invalid())?;

        let mut process = Process::new(parts[0], arrival_time, burst_time);
        if let Some(raw) = parts.get(3) {
            process.priority = Some(raw.parse().map_err(|_| invalid())?);
        }

        Ok(process)
    }
}

/// Copia de trabajo de un proceso con su tiempo restante
///
/// Los motores nunca modifican los `Process` del usuario.
#[derive(Debug, Clone)]
pub(crate) struct WorkUnit<'a> {
    pub process: &'a Process,
    pub remaining_time: Time,
}

impl<'a> WorkUnit<'a> {
    pub fn new(process: &'a Process) -> Self {
        Self {
            process,
            remaining_time: process.burst_time,
        }
    }
}

/// Valida un conjunto de procesos antes de simular
///
/// Revisa en orden de entrada y reporta la primera falla. Al final
/// verifica que el reloj de la simulación no pueda desbordarse: ningún
/// motor avanza más allá de la última llegada más la suma de ráfagas.
pub fn validate_processes(processes: &[Process]) -> Result<(), SchedulingError> {
    if processes.is_empty() {
        return Err(SchedulingError::EmptyProcessSet);
    }

    let mut seen = HashSet::new();

    for process in processes {
        if process.id == IDLE {
            return Err(SchedulingError::ReservedId(process.id.clone()));
        }
        if process.arrival_time < 0 {
            return Err(SchedulingError::NegativeArrival {
                id: process.id.clone(),
                arrival_time: process.arrival_time,
            });
        }
        if process.burst_time < 1 {
            return Err(SchedulingError::NonPositiveBurst {
                id: process.id.clone(),
                burst_time: process.burst_time,
            });
        }
        if !seen.insert(process.id.as_str()) {
            return Err(SchedulingError::DuplicateId(process.id.clone()));
        }
    }

    let latest_arrival = processes.iter().map(|p| p.arrival_time).max().unwrap_or(0);
    processes
        .iter()
        .try_fold(latest_arrival, |horizon, p| horizon.checked_add(p.burst_time))
        .ok_or(SchedulingError::TimeOverflow)?;

    Ok(())
}

/// Registro de procesos que el usuario va armando antes de la corrida
#[derive(Debug, Clone, Default)]
pub struct ProcessRegistry {
    processes: Vec<Process>,
}

impl ProcessRegistry {
    /// Crea un registro vacío
    pub fn new() -> Self {
        Self::default()
    }

    /// Agrega un proceso por defecto (`P<n>`, llegada 0, ráfaga 1, prioridad 1)
    ///
    /// Retorna el id generado.
    pub fn add_process(&mut self) -> String {
        let mut n = self.processes.len() + 1;
        let mut id = format!("P{}", n);

        // Evitar choques con ids agregados a mano
        while self.processes.iter().any(|p| p.id == id) {
            n += 1;
            id = format!("P{}", n);
        }

        self.processes.push(Process::new(&id, 0, 1).with_priority(1));
        id
    }

    /// Agrega un proceso ya construido
    pub fn push(&mut self, process: Process) {
        self.processes.push(process);
    }

    /// Cambia el tiempo de llegada del proceso en `index`
    ///
    /// Retorna false si el índice no existe.
    pub fn set_arrival_time(&mut self, index: usize, arrival_time: Time) -> bool {
        match self.processes.get_mut(index) {
            Some(p) => {
                p.arrival_time = arrival_time;
                true
            }
            None => false,
        }
    }

    /// Cambia la ráfaga del proceso en `index`
    pub fn set_burst_time(&mut self, index: usize, burst_time: Time) -> bool {
        match self.processes.get_mut(index) {
            Some(p) => {
                p.burst_time = burst_time;
                true
            }
            None => false,
        }
    }

    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Valida el conjunto completo
    pub fn validate(&self) -> Result<(), SchedulingError> {
        validate_processes(&self.processes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Validación ====================

    #[test]
    fn test_validate_ok() {
        let processes = vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)];
        assert!(validate_processes(&processes).is_ok());
    }

    #[test]
    fn test_validate_empty() {
        assert_eq!(validate_processes(&[]), Err(SchedulingError::EmptyProcessSet));
    }

    #[test]
    fn test_validate_negative_arrival() {
        let processes = vec![Process::new("P1", -1, 5)];
        let err = validate_processes(&processes).unwrap_err();
        assert_eq!(
            err,
            SchedulingError::NegativeArrival {
                id: "P1".to_string(),
                arrival_time: -1
            }
        );
    }

    #[test]
    fn test_validate_zero_burst() {
        let processes = vec![Process::new("P1", 0, 5), Process::new("P2", 0, 0)];
        let err = validate_processes(&processes).unwrap_err();
        assert!(matches!(err, SchedulingError::NonPositiveBurst { ref id, .. } if id == "P2"));
    }

    #[test]
    fn test_validate_duplicate_id() {
        let processes = vec![Process::new("P1", 0, 5), Process::new("P1", 2, 1)];
        assert_eq!(
            validate_processes(&processes),
            Err(SchedulingError::DuplicateId("P1".to_string()))
        );
    }

    #[test]
    fn test_validate_reserved_idle_id() {
        let processes = vec![Process::new("P1", 0, 5), Process::new(IDLE, 2, 3)];
        assert_eq!(
            validate_processes(&processes),
            Err(SchedulingError::ReservedId("IDLE".to_string()))
        );

        // Solo el id exacto está reservado
        let processes = vec![Process::new("idle", 2, 3), Process::new("IDLE2", 0, 1)];
        assert!(validate_processes(&processes).is_ok());
    }

    #[test]
    fn test_validate_time_overflow() {
        let processes = vec![Process::new("P1", Time::MAX - 1, 5)];
        assert_eq!(validate_processes(&processes), Err(SchedulingError::TimeOverflow));

        // La suma de ráfagas también cuenta aunque cada una quepa sola
        let processes = vec![
            Process::new("P1", 0, Time::MAX / 2 + 1),
            Process::new("P2", 0, Time::MAX / 2 + 1),
        ];
        assert_eq!(validate_processes(&processes), Err(SchedulingError::TimeOverflow));

        // Justo en el límite sigue siendo válido
        let processes = vec![Process::new("P1", Time::MAX - 5, 5)];
        assert!(validate_processes(&processes).is_ok());
    }

    // ==================== Parsing ====================

    #[test]
    fn test_parse_inline() {
        let p = Process::parse_inline("P3:2:9").unwrap();
        assert_eq!(p, Process::new("P3", 2, 9));

        let p = Process::parse_inline("A : 1 : 4 : 7").unwrap();
        assert_eq!(p.id, "A");
        assert_eq!(p.priority, Some(7));
    }

    #[test]
    fn test_parse_inline_invalid() {
        assert!(Process::parse_inline("P1:0").is_err());
        assert!(Process::parse_inline("P1:x:3").is_err());
        assert!(Process::parse_inline(":0:3").is_err());
        assert!(Process::parse_inline("P1:0:3:1:9").is_err());
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"[{"id":"P1","arrivalTime":0,"burstTime":5},
                       {"id":"P2","arrivalTime":1,"burstTime":3,"priority":2}]"#;
        let processes: Vec<Process> = serde_json::from_str(json).unwrap();
        assert_eq!(processes.len(), 2);
        assert_eq!(processes[1].priority, Some(2));
    }

    // ==================== Registro ====================

    #[test]
    fn test_registry_add_process() {
        let mut registry = ProcessRegistry::new();
        assert_eq!(registry.add_process(), "P1");
        assert_eq!(registry.add_process(), "P2");

        let p = &registry.processes()[0];
        assert_eq!(p.arrival_time, 0);
        assert_eq!(p.burst_time, 1);
        assert_eq!(p.priority, Some(1));
    }

    #[test]
    fn test_registry_avoids_id_collision() {
        let mut registry = ProcessRegistry::new();
        registry.push(Process::new("P2", 0, 1));
        assert_eq!(registry.add_process(), "P3");
        assert!(registry.validate().is_ok());
    }

    #[test]
    fn test_registry_update() {
        let mut registry = ProcessRegistry::new();
        registry.add_process();
        assert!(registry.set_arrival_time(0, 4));
        assert!(registry.set_burst_time(0, 6));
        assert!(!registry.set_burst_time(5, 6));

        assert_eq!(registry.processes()[0].arrival_time, 4);
        assert_eq!(registry.processes()[0].burst_time, 6);
    }

    #[test]
    fn test_registry_validate_empty() {
        let registry = ProcessRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.validate(), Err(SchedulingError::EmptyProcessSet));
    }
}
