//! # Algorithm Visualizer - Entry Point
//! src/main.rs
//!
//! Punto de entrada de la CLI. Parsea argumentos, ejecuta el visualizador
//! elegido y muestra el resultado en texto o JSON.

use algoviz::config::{Command, Config, LexArgs, OutputFormat, ScheduleArgs, SortArgs};
use algoviz::lexer;
use algoviz::logger;
use algoviz::render;
use algoviz::scheduling::{self, Process};
use algoviz::sorting;
use serde::Serialize;
use std::fs;
use std::io::Read;

fn main() {
    let config = Config::new();

    if let Err(e) = config.validate() {
        eprintln!("❌ Configuración inválida: {}", e);
        std::process::exit(1);
    }

    // validate() ya verificó el nivel
    let level = logger::parse_level(&config.log_level).unwrap_or(log::LevelFilter::Warn);
    if let Err(e) = logger::init(level) {
        eprintln!("⚠️  No se pudo iniciar el logger: {}", e);
    }

    if log::log_enabled!(log::Level::Debug) {
        config.print_summary();
    }

    let result = match &config.command {
        Command::Schedule(args) => run_schedule(args, config.format),
        Command::Sort(args) => run_sort(args, config.format),
        Command::Lex(args) => run_lex(args, config.format),
    };

    match result {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("💥 Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Carga los procesos desde el archivo JSON y/o los argumentos en línea
fn load_processes(args: &ScheduleArgs) -> Result<Vec<Process>, String> {
    let mut processes = Vec::new();

    if let Some(path) = &args.input {
        let raw = fs::read_to_string(path)
            .map_err(|e| format!("Cannot read {}: {}", path, e))?;
        let from_file: Vec<Process> = serde_json::from_str(&raw)
            .map_err(|e| format!("Invalid process file {}: {}", path, e))?;
        log::info!("loaded {} processes from {}", from_file.len(), path);
        processes.extend(from_file);
    }

    for inline in &args.processes {
        processes.push(Process::parse_inline(inline).map_err(|e| e.to_string())?);
    }

    Ok(processes)
}

fn run_schedule(args: &ScheduleArgs, format: OutputFormat) -> Result<String, String> {
    let policy = args.policy()?;
    let processes = load_processes(args)?;
    let report = scheduling::simulate(&processes, policy).map_err(|e| e.to_string())?;

    match format {
        OutputFormat::Json => to_json(&report),
        OutputFormat::Text => Ok(render::render_report(&report)),
    }
}

fn run_sort(args: &SortArgs, format: OutputFormat) -> Result<String, String> {
    let algorithm = args.algorithm()?;

    let values = match (&args.values, args.random) {
        (Some(raw), _) => sorting::parse_values(raw),
        (None, Some(count)) => sorting::random_values(count, args.max_value, args.seed),
        (None, None) => Vec::new(),
    };

    let recording = sorting::record_steps(&values, algorithm).map_err(|e| e.to_string())?;

    match format {
        OutputFormat::Json => to_json(&recording),
        OutputFormat::Text => Ok(render::render_sort(&recording)),
    }
}

fn run_lex(args: &LexArgs, format: OutputFormat) -> Result<String, String> {
    let source = match (&args.file, &args.source) {
        (Some(path), _) => {
            fs::read_to_string(path).map_err(|e| format!("Cannot read {}: {}", path, e))?
        }
        (None, Some(source)) => source.clone(),
        (None, None) => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| format!("Cannot read stdin: {}", e))?;
            buffer
        }
    };

    if source.trim().is_empty() {
        return Err("Source code is empty".to_string());
    }

    let tokens = lexer::tokenize(&source);

    match format {
        OutputFormat::Json => to_json(&tokens),
        OutputFormat::Text => Ok(render::render_tokens(&tokens)),
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value)
        .map(|json| json + "\n")
        .map_err(|e| format!("Cannot serialize output: {}", e))
}
