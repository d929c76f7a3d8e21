//! Translation seam for non-English transcripts
//!
//! Risk analysis runs over English text. When transcription detects another
//! language, the transcript passes through a [`Translator`] first. A missing
//! language pack or a failed translation falls back to the original text;
//! analysis then runs on the untranslated transcript rather than not at all.

use async_trait::async_trait;
use std::fmt;

use crate::detector::DetectError;

/// Source-language to English translation contract
#[async_trait]
pub trait Translator: Send + Sync + fmt::Debug {
    async fn to_english(&self, text: &str, source_lang: &str) -> Result<String, DetectError>;
}

/// A translator that returns the input unchanged.
///
/// The default collaborator when no translation backend is wired up.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranslator;

#[async_trait]
impl Translator for IdentityTranslator {
    async fn to_english(&self, text: &str, _source_lang: &str) -> Result<String, DetectError> {
        Ok(text.to_string())
    }
}

/// Translate `text` to English, falling back to the original on failure.
pub async fn translate_or_original(
    translator: &dyn Translator,
    text: &str,
    source_lang: &str,
) -> String {
    if source_lang == "en" {
        return text.to_string();
    }

    match translator.to_english(text, source_lang).await {
        Ok(translated) => translated,
        Err(e) => {
            tracing::warn!(language = source_lang, error = %e, "translation failed, analyzing original text");
            text.to_string()
        }
    }
}
