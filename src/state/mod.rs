// src/state/mod.rs
use crate::classifier::Classifier;

pub mod session;

use session::Session;

pub const EMPTY_INPUT_MESSAGE: &str = "Please enter some text for analysis.";
pub const MODEL_UNAVAILABLE_MESSAGE: &str = "Sentiment model unavailable.";

/// A text file picked by the user, read eagerly at selection time.
#[derive(Debug, Clone)]
pub struct LoadedFile {
    pub name: String,
    pub contents: String,
}

// Core application state
pub struct AppState {
    // Loaded once at startup; None when the model failed to load
    pub classifier: Option<Box<dyn Classifier>>,

    // Session data
    pub session: Session,

    // Input state
    pub input_text: String,
    pub loaded_file: Option<LoadedFile>,

    // Minimal UI state
    pub status_message: Option<String>,
    pub error_message: Option<String>,
}

impl AppState {
    pub fn new(classifier: Option<Box<dyn Classifier>>) -> Self {
        Self {
            classifier,
            session: Session::new(),
            input_text: String::new(),
            loaded_file: None,
            status_message: None,
            error_message: None,
        }
    }

    /// Analyze the text-area contents. Empty input is rejected with a
    /// status message and no classification.
    pub fn analyze_input(&mut self) {
        if self.input_text.is_empty() {
            self.status_message = Some(EMPTY_INPUT_MESSAGE.to_string());
            return;
        }
        let text = self.input_text.clone();
        self.analyze(text);
    }

    /// Analyze the loaded file's contents. Does nothing when no file has
    /// been loaded; the UI disables the action in that case.
    pub fn analyze_file(&mut self) {
        if let Some(file) = self.loaded_file.clone() {
            self.analyze(file.contents);
        }
    }

    fn analyze(&mut self, text: String) {
        match &self.classifier {
            Some(classifier) => match classifier.classify(&text) {
                Ok(prediction) => {
                    self.status_message = None;
                    self.session.record(text, prediction);
                }
                Err(e) => {
                    self.error_message = Some(format!("Classification failed: {:#}", e));
                }
            },
            None => {
                self.status_message = Some(MODEL_UNAVAILABLE_MESSAGE.to_string());
            }
        }
    }

    /// Reset the interaction loop: records, input text and loaded file.
    pub fn clear(&mut self) {
        self.session.clear();
        self.input_text.clear();
        self.loaded_file = None;
        self.status_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{Classifier, Prediction};
    use anyhow::{anyhow, Result};

    struct StubClassifier {
        label: &'static str,
        score: f64,
    }

    impl Classifier for StubClassifier {
        fn classify(&self, _text: &str) -> Result<Prediction> {
            Ok(Prediction {
                label: self.label.to_string(),
                score: self.score,
            })
        }
    }

    struct FailingClassifier;

    impl Classifier for FailingClassifier {
        fn classify(&self, _text: &str) -> Result<Prediction> {
            Err(anyhow!("model crashed"))
        }
    }

    fn state_with_stub() -> AppState {
        AppState::new(Some(Box::new(StubClassifier {
            label: "POSITIVE",
            score: 0.97,
        })))
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let mut state = state_with_stub();
        state.analyze_input();

        assert!(state.session.is_empty());
        assert_eq!(state.status_message.as_deref(), Some(EMPTY_INPUT_MESSAGE));
    }

    #[test]
    fn test_nonempty_input_appends_one_record() {
        let mut state = state_with_stub();
        state.input_text = "I love my new car".to_string();
        state.analyze_input();

        assert_eq!(state.session.len(), 1);
        let record = &state.session.records()[0];
        assert_eq!(record.text, "I love my new car");
        assert_eq!(record.label, "POSITIVE");
        assert!((0.0..=1.0).contains(&record.score));
        assert!(state.status_message.is_none());
    }

    #[test]
    fn test_missing_model_reports_unavailable() {
        let mut state = AppState::new(None);
        state.input_text = "anything".to_string();
        state.analyze_input();

        assert!(state.session.is_empty());
        assert_eq!(
            state.status_message.as_deref(),
            Some(MODEL_UNAVAILABLE_MESSAGE)
        );
    }

    #[test]
    fn test_classifier_error_goes_to_error_channel() {
        let mut state = AppState::new(Some(Box::new(FailingClassifier)));
        state.input_text = "anything".to_string();
        state.analyze_input();

        assert!(state.session.is_empty());
        assert!(state.error_message.as_deref().unwrap().contains("model crashed"));
    }

    #[test]
    fn test_file_analysis_matches_typed_analysis() {
        let mut typed = state_with_stub();
        typed.input_text = "great service".to_string();
        typed.analyze_input();

        let mut from_file = state_with_stub();
        from_file.loaded_file = Some(LoadedFile {
            name: "review.txt".to_string(),
            contents: "great service".to_string(),
        });
        from_file.analyze_file();

        let a = &typed.session.records()[0];
        let b = &from_file.session.records()[0];
        assert_eq!(a.text, b.text);
        assert_eq!(a.label, b.label);
        assert_eq!(a.score, b.score);
    }

    #[test]
    fn test_analyze_file_without_file_is_a_noop() {
        let mut state = state_with_stub();
        state.analyze_file();

        assert!(state.session.is_empty());
        assert!(state.status_message.is_none());
    }

    #[test]
    fn test_clear_resets_session_and_inputs() {
        let mut state = state_with_stub();
        state.input_text = "fine".to_string();
        state.analyze_input();
        state.loaded_file = Some(LoadedFile {
            name: "notes.txt".to_string(),
            contents: "fine".to_string(),
        });

        state.clear();

        assert!(state.session.is_empty());
        assert!(state.input_text.is_empty());
        assert!(state.loaded_file.is_none());
        assert!(state.status_message.is_none());
    }
}
