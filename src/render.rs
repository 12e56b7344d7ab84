//! # Presentación en Texto
//! src/render.rs
//!
//! Convierte los resultados ya calculados en texto para la terminal:
//! diagrama de Gantt, tabla de métricas, pasos de ordenamiento y tabla de
//! tokens. No calcula nada; solo formatea.

use crate::lexer::{token_counts, Token};
use crate::scheduling::{Metrics, SimulationReport, Timeline};
use crate::sorting::SortRecording;

/// Caracteres por unidad de tiempo en el Gantt
const CHARS_PER_TICK: usize = 3;

/// Ancho de cada celda del Gantt (mínimo para que entre la etiqueta)
fn cell_width(duration: i64, label: &str) -> usize {
    let by_time = duration.max(0) as usize * CHARS_PER_TICK;
    by_time.max(label.len() + 2)
}

/// Dibuja el diagrama de Gantt de un timeline
///
/// ```text
/// |  IDLE  |  P1  |
/// 0        3      5
/// ```
pub fn render_gantt(timeline: &Timeline) -> String {
    if timeline.is_empty() {
        return "(empty timeline)\n".to_string();
    }

    let mut bars = String::from("|");
    let mut axis = String::new();

    for segment in timeline {
        let width = cell_width(segment.duration(), &segment.process_id);
        bars.push_str(&format!("{:^width$}|", segment.process_id, width = width));

        // +1 por el separador '|'
        axis.push_str(&format!("{:<width$}", segment.start_time, width = width + 1));
    }
    axis.push_str(&timeline.end_time().to_string());

    format!("{}\n{}\n", bars, axis)
}

/// Lista textual de segmentos con su duración
pub fn render_segments(timeline: &Timeline) -> String {
    let mut out = String::new();
    for segment in timeline {
        out.push_str(&format!(
            "   {:<6} {:>4} - {:<4}  Duration: {}\n",
            segment.process_id,
            segment.start_time,
            segment.end_time,
            segment.duration()
        ));
    }
    out
}

/// Tabla de métricas por proceso y promedios
pub fn render_metrics(metrics: &Metrics) -> String {
    let mut out = String::new();
    out.push_str("   ┌──────────┬─────────┬───────┬────────────┬────────────┬─────────┐\n");
    out.push_str("   │ Process  │ Arrival │ Burst │ Completion │ Turnaround │ Waiting │\n");
    out.push_str("   ├──────────┼─────────┼───────┼────────────┼────────────┼─────────┤\n");
    for m in &metrics.processes {
        out.push_str(&format!(
            "   │ {:<8} │ {:^7} │ {:^5} │ {:^10} │ {:^10} │ {:^7} │\n",
            m.process_id, m.arrival_time, m.burst_time, m.completion_time, m.turnaround_time,
            m.waiting_time
        ));
    }
    out.push_str("   └──────────┴─────────┴───────┴────────────┴────────────┴─────────┘\n");
    out.push_str(&format!(
        "   Average waiting time:    {:.2}\n",
        metrics.average_waiting_time
    ));
    out.push_str(&format!(
        "   Average turnaround time: {:.2}\n",
        metrics.average_turnaround_time
    ));
    out
}

/// Reporte completo de una simulación
pub fn render_report(report: &SimulationReport) -> String {
    let timeline = &report.timeline;
    let mut out = String::new();

    out.push_str(&format!("🖥️  {}\n\n", report.policy));
    out.push_str("📊 Gantt Chart:\n");
    out.push_str(&render_gantt(timeline));
    out.push('\n');
    out.push_str("🕒 Timeline:\n");
    out.push_str(&render_segments(timeline));
    out.push_str(&format!(
        "   Busy: {}  Idle: {}  Makespan: {}\n\n",
        timeline.busy_time(),
        timeline.idle_time(),
        timeline.end_time()
    ));
    out.push_str("📈 Metrics:\n");
    out.push_str(&render_metrics(&report.metrics));
    out
}

/// Pasos de ordenamiento, uno por línea
pub fn render_sort(recording: &SortRecording) -> String {
    let mut out = format!(
        "🔢 {} sort: {} steps ({} swaps)\n",
        recording.algorithm.name(),
        recording.steps.len(),
        recording.swaps()
    );

    for (index, step) in recording.steps.iter().enumerate() {
        let values: Vec<String> = step.iter().map(|v| v.to_string()).collect();
        out.push_str(&format!("   {:>4}: [{}]\n", index, values.join(", ")));
    }
    out
}

/// Tabla de tokens y resumen por tipo
pub fn render_tokens(tokens: &[Token]) -> String {
    if tokens.is_empty() {
        return "(no tokens)\n".to_string();
    }

    let mut out = String::new();
    out.push_str("   ┌────────────┬──────────────────────┬──────┬────────┐\n");
    out.push_str("   │ Type       │ Value                │ Line │ Column │\n");
    out.push_str("   ├────────────┼──────────────────────┼──────┼────────┤\n");
    for token in tokens {
        out.push_str(&format!(
            "   │ {:<10} │ {:<20} │ {:>4} │ {:>6} │\n",
            token.token_type.as_str(),
            token.value,
            token.line,
            token.column
        ));
    }
    out.push_str("   └────────────┴──────────────────────┴──────┴────────┘\n");

    out.push_str("\n📋 Summary:\n");
    for (token_type, count) in token_counts(tokens) {
        out.push_str(&format!("   {:<10} {}\n", token_type.as_str(), count));
    }
    out
}
