// src/classifier/bert.rs
use anyhow::{Context, Result};
use rust_bert::pipelines::sentiment::{SentimentModel, SentimentPolarity};

use super::{Classifier, Prediction};

/// DistilBERT SST-2 sentiment pipeline from rust-bert. Weights are fetched
/// into the rust-bert cache the first time the model is loaded.
pub struct BertClassifier {
    model: SentimentModel,
}

impl BertClassifier {
    pub fn load() -> Result<Self> {
        tracing::info!("loading sentiment model");
        let model = SentimentModel::new(Default::default())
            .context("Failed to load sentiment model")?;
        tracing::info!("sentiment model ready");
        Ok(Self { model })
    }
}

impl Classifier for BertClassifier {
    fn classify(&self, text: &str) -> Result<Prediction> {
        let sentiment = self.model
            .predict(&[text])
            .pop()
            .context("Sentiment model returned no prediction")?;

        let label = match sentiment.polarity {
            SentimentPolarity::Positive => "POSITIVE",
            SentimentPolarity::Negative => "NEGATIVE",
        };
        tracing::debug!(label, score = sentiment.score, "classified input");

        Ok(Prediction {
            label: label.to_string(),
            score: sentiment.score,
        })
    }
}
