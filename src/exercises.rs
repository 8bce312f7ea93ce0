use crate::routine;
use serde::Serialize;
use std::{collections::BTreeMap, fmt, str::FromStr};

/// Persisted weights, keyed by `"<day>-<index>"`.
pub type Weights = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExerciseKey {
    pub day: u8,
    pub index: usize,
}

impl ExerciseKey {
    pub fn new(day: u8, index: usize) -> Self {
        Self { day, index }
    }

    /// True when the key points at an exercise in the catalog.
    pub fn exists(&self) -> bool {
        self.index < routine::day(self.day).len()
    }
}

impl fmt::Display for ExerciseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.day, self.index)
    }
}

impl FromStr for ExerciseKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (day, index) = s
            .split_once('-')
            .ok_or_else(|| format!("exercise key {s:?} must look like <day>-<index>"))?;
        let day = day
            .parse::<u8>()
            .map_err(|_| format!("bad day in exercise key {s:?}"))?;
        let index = index
            .parse::<usize>()
            .map_err(|_| format!("bad index in exercise key {s:?}"))?;
        Ok(Self { day, index })
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ExerciseRow {
    pub key: String,
    pub name: &'static str,
    pub sets: &'static str,
    pub video: &'static str,
    pub weight: String,
}

pub fn render(day: u8, weights: &Weights) -> Vec<ExerciseRow> {
    routine::day(day)
        .iter()
        .enumerate()
        .map(|(index, exercise)| {
            let key = ExerciseKey::new(day, index).to_string();
            let weight = weights.get(&key).cloned().unwrap_or_default();
            ExerciseRow {
                key,
                name: exercise.name,
                sets: exercise.sets,
                video: exercise.video,
                weight,
            }
        })
        .collect()
}

/// Stores `value` verbatim, or removes the entry when it is blank.
pub fn apply_weight(weights: &mut Weights, key: ExerciseKey, value: &str) {
    if value.trim().is_empty() {
        weights.remove(&key.to_string());
    } else {
        weights.insert(key.to_string(), value.to_string());
    }
}
