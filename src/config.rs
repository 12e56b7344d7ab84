//! # Configuración de la CLI
//! src/config.rs
//!
//! Argumentos de línea de comandos con respaldo en variables de entorno.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./algoviz schedule --algorithm rr --quantum 2 \
//!   --process P1:0:5 --process P2:1:3
//!
//! ./algoviz sort --algorithm quick --values "5,3,8,1"
//!
//! ./algoviz lex --source "int x = 10;"
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! ALGOVIZ_FORMAT=json ALGOVIZ_LOG=debug ./algoviz schedule --input procs.json
//! ```

use crate::logger;
use crate::scheduling::{Policy, Time};
use crate::sorting::SortAlgorithm;
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Formato de salida
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Tablas y diagramas para la terminal
    Text,
    /// JSON para un renderizador externo
    Json,
}

/// Configuración del visualizador
#[derive(Debug, Clone, Parser)]
#[command(name = "algoviz")]
#[command(about = "Visualizador de algoritmos: planificación de CPU, ordenamiento y análisis léxico")]
#[command(version = "0.1.0")]
pub struct Config {
    #[command(subcommand)]
    pub command: Command,

    /// Formato de salida
    #[arg(long, value_enum, default_value = "text", env = "ALGOVIZ_FORMAT", global = true)]
    pub format: OutputFormat,

    /// Nivel de logging en stderr (off, error, warn, info, debug, trace)
    #[arg(long = "log-level", default_value = "warn", env = "ALGOVIZ_LOG", global = true)]
    pub log_level: String,
}

/// Visualizador a ejecutar
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Simula la planificación de CPU de un conjunto de procesos
    Schedule(ScheduleArgs),

    /// Graba los pasos de un algoritmo de ordenamiento
    Sort(SortArgs),

    /// Tokeniza código fuente estilo C
    Lex(LexArgs),
}

#[derive(Debug, Clone, Args)]
pub struct ScheduleArgs {
    /// Política: fcfs, sjf o rr
    #[arg(short, long, default_value = "fcfs", env = "ALGOVIZ_ALGORITHM")]
    pub algorithm: String,

    /// Quantum para Round-Robin
    #[arg(short, long, default_value = "2", env = "ALGOVIZ_QUANTUM", allow_hyphen_values = true)]
    pub quantum: Time,

    /// Archivo JSON con un arreglo de procesos
    #[arg(short, long, env = "ALGOVIZ_INPUT")]
    pub input: Option<String>,

    /// Proceso en línea: ID:LLEGADA:RAFAGA[:PRIORIDAD] (repetible)
    #[arg(short, long = "process", allow_hyphen_values = true)]
    pub processes: Vec<String>,
}

#[derive(Debug, Clone, Args)]
pub struct SortArgs {
    /// Algoritmo: bubble o quick
    #[arg(short, long, default_value = "bubble", env = "ALGOVIZ_SORT")]
    pub algorithm: String,

    /// Valores separados por coma
    #[arg(long, allow_hyphen_values = true)]
    pub values: Option<String>,

    /// Generar N valores aleatorios
    #[arg(long)]
    pub random: Option<usize>,

    /// Semilla para valores reproducibles
    #[arg(long, env = "ALGOVIZ_SEED")]
    pub seed: Option<u64>,

    /// Valor máximo al generar aleatorios
    #[arg(long = "max-value", default_value = "100")]
    pub max_value: i64,
}

#[derive(Debug, Clone, Args)]
pub struct LexArgs {
    /// Archivo fuente a tokenizar
    #[arg(short, long)]
    pub file: Option<String>,

    /// Código fuente directo (si no hay archivo ni código se lee stdin)
    #[arg(short, long)]
    pub source: Option<String>,
}

impl Default for ScheduleArgs {
    fn default() -> Self {
        Self {
            algorithm: "fcfs".to_string(),
            quantum: 2,
            input: None,
            processes: Vec::new(),
        }
    }
}

impl Default for SortArgs {
    fn default() -> Self {
        Self {
            algorithm: "bubble".to_string(),
            values: None,
            random: None,
            seed: None,
            max_value: 100,
        }
    }
}

impl ScheduleArgs {
    /// Resuelve la política seleccionada
    pub fn policy(&self) -> Result<Policy, String> {
        Policy::from_name(&self.algorithm, self.quantum).map_err(|e| e.to_string())
    }

    pub fn validate(&self) -> Result<(), String> {
        self.policy()?;

        if self.input.is_none() && self.processes.is_empty() {
            return Err("Provide processes with --input FILE or --process ID:ARRIVAL:BURST".to_string());
        }

        Ok(())
    }
}

impl SortArgs {
    pub fn algorithm(&self) -> Result<SortAlgorithm, String> {
        SortAlgorithm::from_name(&self.algorithm).map_err(|e| e.to_string())
    }

    pub fn validate(&self) -> Result<(), String> {
        self.algorithm()?;

        match (&self.values, self.random) {
            (Some(_), Some(_)) => {
                return Err("Use either --values or --random, not both".to_string());
            }
            (None, None) => {
                return Err("Provide --values \"5,3,1\" or --random N".to_string());
            }
            (None, Some(0)) => {
                return Err("--random must be >= 1".to_string());
            }
            _ => {}
        }

        if self.max_value < 1 {
            return Err("--max-value must be >= 1".to_string());
        }

        Ok(())
    }
}

impl LexArgs {
    pub fn validate(&self) -> Result<(), String> {
        if self.file.is_some() && self.source.is_some() {
            return Err("Use either --file or --source, not both".to_string());
        }
        Ok(())
    }
}

impl Config {
    /// Parsea los argumentos de la línea de comandos
    pub fn new() -> Self {
        Config::parse()
    }

    /// Valida la configuración
    ///
    /// Retorna un mensaje accionable si hay valores inválidos
    pub fn validate(&self) -> Result<(), String> {
        logger::parse_level(&self.log_level)?;

        match &self.command {
            Command::Schedule(args) => args.validate(),
            Command::Sort(args) => args.validate(),
            Command::Lex(args) => args.validate(),
        }
    }

    /// Imprime un resumen de la configuración (en stderr)
    pub fn print_summary(&self) {
        eprintln!("╔══════════════════════════════════════════════════════════════╗");
        eprintln!("║                 Algorithm Visualizer                          ║");
        eprintln!("╚══════════════════════════════════════════════════════════════╝");
        eprintln!("   Format:    {:?}", self.format);
        eprintln!("   Log level: {}", self.log_level);

        match &self.command {
            Command::Schedule(args) => {
                eprintln!("   Mode:      schedule ({})", args.algorithm);
                eprintln!("   Quantum:   {}", args.quantum);
                if let Some(input) = &args.input {
                    eprintln!("   Input:     {}", input);
                }
                eprintln!("   Inline:    {} processes", args.processes.len());
            }
            Command::Sort(args) => {
                eprintln!("   Mode:      sort ({})", args.algorithm);
                if let Some(n) = args.random {
                    eprintln!("   Random:    {} values (max {})", n, args.max_value);
                }
            }
            Command::Lex(args) => {
                let source = args
                    .file
                    .as_deref()
                    .unwrap_or(if args.source.is_some() { "--source" } else { "stdin" });
                eprintln!("   Mode:      lex ({})", source);
            }
        }
        eprintln!();
    }
}
