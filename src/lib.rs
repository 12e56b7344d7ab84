//! # Algorithm Visualizer
//! src/lib.rs
//!
//! Herramienta educativa que muestra cómo se comportan distintos algoritmos:
//! planificación de CPU, ordenamiento de arreglos y análisis léxico.
//!
//! ## Arquitectura
//!
//! El crate está dividido en módulos especializados:
//! - `scheduling`: Simulador de planificación de CPU (FCFS, SJF, Round-Robin)
//! - `sorting`: Grabador de pasos de ordenamiento (bubble, quick)
//! - `lexer`: Analizador léxico para un subconjunto de C
//! - `render`: Presentación en texto de los resultados
//! - `config`: Argumentos de línea de comandos
//! - `logger`: Backend de logging a stderr
//!
//! ## Ejemplo de uso
//!
//! ```
//! use algoviz::scheduling::{simulate, Policy, Process};
//!
//! let processes = vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)];
//! let report = simulate(&processes, Policy::RoundRobin { quantum: 2 }).unwrap();
//!
//! assert_eq!(report.timeline.len(), 5);
//! assert_eq!(report.metrics.average_waiting_time, 3.0);
//! ```

pub mod config;
pub mod lexer;
pub mod logger;
pub mod render;
pub mod scheduling;
pub mod sorting;
