//! # Grabador de Pasos de Ordenamiento
//! src/sorting/mod.rs
//!
//! Ejecuta un algoritmo de ordenamiento sobre una copia del arreglo y guarda
//! una foto del arreglo después de cada intercambio. La presentación luego
//! reproduce las fotos una por una.
//!
//! - **bubble**: burbuja clásica, una foto por intercambio.
//! - **quick**: quicksort con partición de Lomuto (pivote = último elemento).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Algoritmos disponibles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortAlgorithm {
    Bubble,
    Quick,
}

impl SortAlgorithm {
    pub fn from_name(name: &str) -> Result<Self, SortError> {
        match name.trim().to_lowercase().as_str() {
            "bubble" => Ok(SortAlgorithm::Bubble),
            "quick" | "quicksort" => Ok(SortAlgorithm::Quick),
            _ => Err(SortError::UnknownAlgorithm(name.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "bubble",
            SortAlgorithm::Quick => "quick",
        }
    }
}

/// Errores del grabador
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// No hay valores para ordenar
    EmptyInput,

    /// Nombre de algoritmo desconocido
    UnknownAlgorithm(String),
}

impl std::fmt::Display for SortError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortError::EmptyInput => write!(f, "at least one value is required"),
            SortError::UnknownAlgorithm(name) => {
                write!(f, "unknown sorting algorithm '{}' (expected bubble or quick)", name)
            }
        }
    }
}

impl std::error::Error for SortError {}

/// Secuencia de fotos de una corrida
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortRecording {
    pub algorithm: SortAlgorithm,
    pub steps: Vec<Vec<i64>>,
}

impl SortRecording {
    /// Estado final (ya ordenado)
    pub fn final_state(&self) -> &[i64] {
        self.steps.last().map(|s| s.as_slice()).unwrap_or(&[])
    }

    /// Cantidad de intercambios grabados
    pub fn swaps(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Graba los pasos de `algorithm` sobre `values`
///
/// La primera foto es siempre la entrada sin modificar.
pub fn record_steps(values: &[i64], algorithm: SortAlgorithm) -> Result<SortRecording, SortError> {
    if values.is_empty() {
        return Err(SortError::EmptyInput);
    }

    let mut working = values.to_vec();
    let mut steps = vec![working.clone()];

    match algorithm {
        SortAlgorithm::Bubble => bubble_sort(&mut working, &mut steps),
        SortAlgorithm::Quick => {
            let last = working.len() - 1;
            quick_sort(&mut working, 0, last, &mut steps);
        }
    }

    log::debug!(
        "{} sort of {} values recorded {} steps",
        algorithm.name(),
        values.len(),
        steps.len()
    );

    Ok(SortRecording { algorithm, steps })
}

fn bubble_sort(arr: &mut [i64], steps: &mut Vec<Vec<i64>>) {
    let n = arr.len();
    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                steps.push(arr.to_vec());
            }
        }
    }
}

fn quick_sort(arr: &mut [i64], start: usize, end: usize, steps: &mut Vec<Vec<i64>>) {
    if start >= end {
        return;
    }

    let pivot = partition(arr, start, end, steps);
    if pivot > start {
        quick_sort(arr, start, pivot - 1, steps);
    }
    quick_sort(arr, pivot + 1, end, steps);
}

/// Partición de Lomuto; retorna la posición final del pivote
fn partition(arr: &mut [i64], start: usize, end: usize, steps: &mut Vec<Vec<i64>>) -> usize {
    let pivot = arr[end];
    // `store` es la próxima posición libre para valores < pivote
    let mut store = start;

    for j in start..end {
        if arr[j] < pivot {
            arr.swap(store, j);
            steps.push(arr.to_vec());
            store += 1;
        }
    }

    arr.swap(store, end);
    steps.push(arr.to_vec());
    store
}

/// Parsea una lista separada por comas, descartando lo que no sea entero
///
/// `"5, 3, x, 8"` → `[5, 3, 8]`
pub fn parse_values(input: &str) -> Vec<i64> {
    input
        .split(',')
        .filter_map(|s| s.trim().parse().ok())
        .collect()
}

/// Genera `count` valores aleatorios en `1..=max_value`
///
/// Con semilla el resultado es reproducible.
pub fn random_values(count: usize, max_value: i64, seed: Option<u64>) -> Vec<i64> {
    let max_value = max_value.max(1);

    match seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..count).map(|_| rng.gen_range(1..=max_value)).collect()
        }
        None => {
            let mut rng = rand::thread_rng();
            (0..count).map(|_| rng.gen_range(1..=max_value)).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_sorted(values: &[i64]) -> bool {
        values.windows(2).all(|w| w[0] <= w[1])
    }

    // ==================== Bubble ====================

    #[test]
    fn test_bubble_steps() {
        let rec = record_steps(&[3, 1, 2], SortAlgorithm::Bubble).unwrap();
        assert_eq!(rec.steps, vec![vec![3, 1, 2], vec![1, 3, 2], vec![1, 2, 3]]);
        assert_eq!(rec.swaps(), 2);
    }

    #[test]
    fn test_bubble_already_sorted() {
        let rec = record_steps(&[1, 2, 3], SortAlgorithm::Bubble).unwrap();
        assert_eq!(rec.steps.len(), 1);
        assert_eq!(rec.final_state(), &[1, 2, 3]);
    }

    // ==================== Quick ====================

    #[test]
    fn test_quick_sorts() {
        let input = vec![9, 4, 7, 1, 8, 2, 2, 5];
        let rec = record_steps(&input, SortAlgorithm::Quick).unwrap();

        assert_eq!(rec.steps[0], input);
        assert!(is_sorted(rec.final_state()));
    }

    #[test]
    fn test_quick_first_step_is_input() {
        // La primera foto no debe reflejar el estado final
        let rec = record_steps(&[2, 1], SortAlgorithm::Quick).unwrap();
        assert_eq!(rec.steps[0], vec![2, 1]);
        assert_eq!(rec.final_state(), &[1, 2]);
    }

    #[test]
    fn test_single_value() {
        let rec = record_steps(&[42], SortAlgorithm::Quick).unwrap();
        assert_eq!(rec.steps, vec![vec![42]]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(
            record_steps(&[], SortAlgorithm::Bubble),
            Err(SortError::EmptyInput)
        );
    }

    // ==================== Parsing ====================

    #[test]
    fn test_parse_values() {
        assert_eq!(parse_values("5, 3, x, 8"), vec![5, 3, 8]);
        assert_eq!(parse_values("-1,0"), vec![-1, 0]);
        assert!(parse_values("").is_empty());
    }

    #[test]
    fn test_algorithm_from_name() {
        assert_eq!(SortAlgorithm::from_name("Bubble").unwrap(), SortAlgorithm::Bubble);
        assert_eq!(SortAlgorithm::from_name("quick").unwrap(), SortAlgorithm::Quick);
        assert!(SortAlgorithm::from_name("heap").is_err());
    }

    #[test]
    fn test_random_values_seeded() {
        let a = random_values(10, 50, Some(7));
        let b = random_values(10, 50, Some(7));
        assert_eq!(a, b);
        assert!(a.iter().all(|&v| (1..=50).contains(&v)));
    }
}
