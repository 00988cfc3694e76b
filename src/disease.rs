//! Plant disease detection from a camera capture
//!
//! Only a stub classifier ships; a real model plugs in through [`ImageClassifier`].

use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::error::Result;
use crate::i18n::{Language, Phrase};

/// Raw bytes of a captured plant photo.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedImage {
    bytes: Vec<u8>,
}

impl CapturedImage {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)?;
        debug!("loaded {} byte capture from {}", bytes.len(), path.display());
        Ok(Self { bytes })
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnosis {
    pub disease: &'static str,
    pub medicine: &'static str,
    pub grams_per_litre: u32,
}

impl Diagnosis {
    /// Localized alert, medicine and dosage lines.
    pub fn render(&self, language: Language) -> Vec<String> {
        vec![
            language.labelled(Phrase::DiseaseDetected, self.disease),
            language.labelled(Phrase::Medicine, self.medicine),
            language.dosage(self.grams_per_litre),
        ]
    }
}

pub trait ImageClassifier {
    /// `None` when nothing was captured or no disease was found.
    fn classify(&self, image: &CapturedImage) -> Option<Diagnosis>;
}

/// Reports leaf spot for every non-empty capture.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubClassifier;

impl ImageClassifier for StubClassifier {
    fn classify(&self, image: &CapturedImage) -> Option<Diagnosis> {
        if image.is_empty() {
            return None;
        }
        info!("stub classifier reporting fixed diagnosis");
        Some(Diagnosis {
            disease: "Leaf Spot",
            medicine: "Copper Fungicide",
            grams_per_litre: 2,
        })
    }
}
