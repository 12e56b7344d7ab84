//! # Modelo de Timeline
//! src/scheduling/timeline.rs
//!
//! El timeline es la salida compartida de los motores: una secuencia
//! ordenada y contigua de segmentos de ejecución o de ocio (IDLE).
//!
//! ```text
//! | IDLE | P1 | P2 | P1 |
//! 0      3    5    8    10
//! ```

use super::process::Time;
use serde::{Deserialize, Serialize};

/// Id centinela de los segmentos de ocio
pub const IDLE: &str = "IDLE";

/// Tramo contiguo del timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub process_id: String,
    pub start_time: Time,
    pub end_time: Time,
    pub is_idle: bool,
}

impl Segment {
    /// Segmento de ejecución de un proceso
    pub fn run(process_id: &str, start_time: Time, end_time: Time) -> Self {
        Self {
            process_id: process_id.to_string(),
            start_time,
            end_time,
            is_idle: false,
        }
    }

    /// Segmento de ocio
    pub fn idle(start_time: Time, end_time: Time) -> Self {
        Self {
            process_id: IDLE.to_string(),
            start_time,
            end_time,
            is_idle: true,
        }
    }

    pub fn duration(&self) -> Time {
        self.end_time - self.start_time
    }
}

/// Secuencia ordenada de segmentos producida por una corrida
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    segments: Vec<Segment>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Agrega un segmento de ejecución `[start, end)`
    pub(crate) fn push_run(&mut self, process_id: &str, start_time: Time, end_time: Time) {
        debug_assert!(end_time > start_time);
        log::trace!("run {} [{}, {})", process_id, start_time, end_time);
        self.segments.push(Segment::run(process_id, start_time, end_time));
    }

    /// Agrega un segmento IDLE `[start, end)`
    pub(crate) fn push_idle(&mut self, start_time: Time, end_time: Time) {
        debug_assert!(end_time > start_time);
        log::trace!("idle [{}, {})", start_time, end_time);
        self.segments.push(Segment::idle(start_time, end_time));
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Inicio del primer segmento (0 si está vacío)
    pub fn start_time(&self) -> Time {
        self.segments.first().map(|s| s.start_time).unwrap_or(0)
    }

    /// Fin del último segmento (0 si está vacío)
    pub fn end_time(&self) -> Time {
        self.segments.last().map(|s| s.end_time).unwrap_or(0)
    }

    /// Tiempo total con algún proceso ejecutándose
    pub fn busy_time(&self) -> Time {
        self.segments
            .iter()
            .filter(|s| !s.is_idle)
            .map(Segment::duration)
            .sum()
    }

    /// Tiempo total de ocio
    pub fn idle_time(&self) -> Time {
        self.segments
            .iter()
            .filter(|s| s.is_idle)
            .map(Segment::duration)
            .sum()
    }

    /// Fin del último segmento del proceso `id`
    pub fn completion_time(&self, id: &str) -> Option<Time> {
        self.segments
            .iter()
            .filter(|s| !s.is_idle && s.process_id == id)
            .map(|s| s.end_time)
            .max()
    }

    /// Verifica que los segmentos sean contiguos y de duración positiva
    pub fn is_contiguous(&self) -> bool {
        self.segments.iter().all(|s| s.end_time > s.start_time)
            && self
                .segments
                .windows(2)
                .all(|pair| pair[0].end_time == pair[1].start_time)
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Timeline {
        let mut timeline = Timeline::new();
        timeline.push_idle(0, 3);
        timeline.push_run("P1", 3, 5);
        timeline.push_run("P2", 5, 6);
        timeline.push_run("P1", 6, 8);
        timeline
    }

    #[test]
    fn test_empty_timeline() {
        let timeline = Timeline::new();
        assert!(timeline.is_empty());
        assert_eq!(timeline.start_time(), 0);
        assert_eq!(timeline.end_time(), 0);
        assert!(timeline.is_contiguous());
    }

    #[test]
    fn test_busy_and_idle_time() {
        let timeline = sample();
        assert_eq!(timeline.busy_time(), 5);
        assert_eq!(timeline.idle_time(), 3);
        assert_eq!(timeline.end_time(), timeline.busy_time() + timeline.idle_time());
    }

    #[test]
    fn test_completion_time() {
        let timeline = sample();
        assert_eq!(timeline.completion_time("P1"), Some(8));
        assert_eq!(timeline.completion_time("P2"), Some(6));
        assert_eq!(timeline.completion_time("P9"), None);
        assert_eq!(timeline.completion_time(IDLE), None);
    }

    #[test]
    fn test_contiguity() {
        assert!(sample().is_contiguous());

        let broken = Timeline {
            segments: vec![Segment::run("P1", 0, 2), Segment::run("P2", 3, 4)],
        };
        assert!(!broken.is_contiguous());
    }

    #[test]
    fn test_segment_serialization() {
        let json = serde_json::to_string(&Segment::idle(0, 3)).unwrap();
        assert_eq!(
            json,
            r#"{"processId":"IDLE","startTime":0,"endTime":3,"isIdle":true}"#
        );
    }
}
