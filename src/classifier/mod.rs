// src/classifier/mod.rs
use anyhow::Result;

pub mod bert;

pub use bert::BertClassifier;

/// Classifier output: the chosen label and its confidence in [0, 1].
#[derive(Debug, Clone)]
pub struct Prediction {
    pub label: String,
    pub score: f64,
}

/// Seam over the pretrained sentiment model. The application only consumes
/// text in, (label, score) out; everything else stays behind this trait.
pub trait Classifier {
    fn classify(&self, text: &str) -> Result<Prediction>;
}
