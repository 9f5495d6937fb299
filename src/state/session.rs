// src/state/session.rs
use std::collections::BTreeMap;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::classifier::Prediction;

/// One analysis performed this session. Field order doubles as the CSV
/// column order for exports.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisRecord {
    pub analyzed_at: DateTime<Local>,
    pub label: String,
    pub score: f64,
    pub text: String,
}

/// Session-scoped record store. Nothing in here outlives the process.
#[derive(Debug, Default)]
pub struct Session {
    records: Vec<AnalysisRecord>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn record(&mut self, text: String, prediction: Prediction) {
        self.records.push(AnalysisRecord {
            analyzed_at: Local::now(),
            label: prediction.label,
            score: prediction.score,
            text,
        });
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn records(&self) -> &[AnalysisRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Count-per-label histogram over every record so far. BTreeMap keeps
    /// the label order stable between frames.
    pub fn histogram(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for record in &self.records {
            *counts.entry(record.label.clone()).or_insert(0) += 1;
        }
        counts
    }
}
