//! Batched translation of color names
//!
//! All names of a request are joined into one string, translated in a single
//! provider call and split back apart. Providers sometimes merge or drop the
//! separator, so unpacking is positional: missing pieces fall back to the
//! original name and surplus pieces are discarded. A name that itself contains
//! the separator will be mis-split.

use tracing::{debug, warn};

use crate::core::gate::TranslationGate;
use crate::core::models::{Color, TranslateRequest, TranslateResponse};
use crate::core::provider::{Provider, AUTO_DETECT};

/// Separator placed between names in a batch
pub const SEPARATOR: &str = ", ";

/// Join names into a single batch string
pub fn pack_names(names: &[String]) -> String {
    names.join(SEPARATOR)
}

/// Split a translated batch back into exactly `originals.len()` names
pub fn unpack_names(translated: &str, originals: &[String]) -> Vec<String> {
    let mut pieces = translated.split(SEPARATOR).map(str::trim);

    originals
        .iter()
        .map(|original| match pieces.next() {
            Some(piece) => piece.to_string(),
            None => original.clone(),
        })
        .collect()
}

/// Translates color names and display text through a gated provider
#[derive(Debug)]
pub struct BatchTranslator<P> {
    gate: TranslationGate<P>,
    source_lang: String,
}

impl<P: Provider> BatchTranslator<P> {
    /// Create a translator that auto-detects the source language
    pub fn new(gate: TranslationGate<P>) -> Self {
        Self {
            gate,
            source_lang: AUTO_DETECT.to_string(),
        }
    }

    /// Override the source language sent to the provider
    pub fn with_source_lang(mut self, source_lang: impl Into<String>) -> Self {
        self.source_lang = source_lang.into();
        self
    }

    /// Access the gate
    pub fn gate(&self) -> &TranslationGate<P> {
        &self.gate
    }

    /// Translate `names` with one provider call, always returning `names.len()` entries
    pub async fn translate_names(&self, names: &[String], to: &str) -> Vec<String> {
        if names.is_empty() {
            return Vec::new();
        }

        let batch = pack_names(names);
        debug!("Translating batch of {} names ({} bytes)", names.len(), batch.len());

        match self.gate.translate(&batch, &self.source_lang, to).await {
            Ok(translated) => {
                let unpacked = unpack_names(&translated, names);
                let pieces = translated.split(SEPARATOR).count();
                if pieces != names.len() {
                    warn!(
                        "Batch split mismatch: expected {} names, provider returned {}",
                        names.len(),
                        pieces
                    );
                }
                unpacked
            }
            Err(e) => {
                warn!("Translation failed for batch of {} names: {}", names.len(), e);
                names.to_vec()
            }
        }
    }

    /// Translate a single string, returning it unchanged on failure
    pub async fn translate_text(&self, text: &str, to: &str) -> String {
        if text.trim().is_empty() {
            return text.to_string();
        }

        match self.gate.translate(text, &self.source_lang, to).await {
            Ok(translated) => translated,
            Err(e) => {
                warn!("Translation failed for renderText: {}", e);
                text.to_string()
            }
        }
    }

    /// Translate a validated request into a successful response.
    ///
    /// Output colors keep the request's order and codes.
    pub async fn translate_request(&self, request: &TranslateRequest) -> TranslateResponse {
        let names = request.names();

        let (render_text, translated) = tokio::join!(
            self.translate_text(&request.render_text, &request.to),
            self.translate_names(&names, &request.to),
        );

        let colors = request
            .colors
            .iter()
            .zip(translated)
            .map(|(color, name)| Color {
                name,
                code: color.code.clone(),
            })
            .collect();

        TranslateResponse::completed(colors, render_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::provider::fakes::{Failing, Identity, Scripted, Uppercase};
    use std::sync::atomic::Ordering;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn translator<P: Provider>(provider: P) -> BatchTranslator<P> {
        BatchTranslator::new(TranslationGate::new(provider))
    }

    fn request(colors: &[(&str, &str)], render_text: &str) -> TranslateRequest {
        TranslateRequest {
            colors: colors.iter().map(|(n, c)| Color::new(*n, *c)).collect(),
            to: "xx".to_string(),
            render_text: render_text.to_string(),
        }
    }

    #[test]
    fn test_pack_names() {
        assert_eq!(pack_names(&names(&["red", "green", "blue"])), "red, green, blue");
        assert_eq!(pack_names(&names(&["crimson"])), "crimson");
    }

    #[test]
    fn test_unpack_trims_whitespace_drift() {
        let originals = names(&["red", "green", "blue"]);
        assert_eq!(
            unpack_names(" ROT,  GRÜN, BLAU ", &originals),
            names(&["ROT", "GRÜN", "BLAU"])
        );
    }

    #[test]
    fn test_unpack_pads_with_originals() {
        let originals = names(&["a", "b", "c"]);
        assert_eq!(unpack_names("A B C", &originals), names(&["A B C", "b", "c"]));
    }

    #[test]
    fn test_unpack_discards_extras() {
        let originals = names(&["a", "b"]);
        assert_eq!(unpack_names("A, B, C, D", &originals), names(&["A", "B"]));
    }

    #[test]
    fn test_unpack_splits_names_containing_separator() {
        let originals = names(&["red, dark", "blue"]);
        assert_eq!(unpack_names("RED, DARK, BLUE", &originals), names(&["RED", "DARK"]));
    }

    #[tokio::test]
    async fn test_translate_names_uppercase() {
        let translator = translator(Uppercase);
        let result = translator
            .translate_names(&names(&["red", "green", "blue"]), "xx")
            .await;
        assert_eq!(result, names(&["RED", "GREEN", "BLUE"]));
    }

    #[tokio::test]
    async fn test_translate_names_falls_back_on_failure() {
        let translator = translator(Failing::default());
        let originals = names(&["red", "green"]);
        let result = translator.translate_names(&originals, "xx").await;
        assert_eq!(result, originals);
        assert_eq!(translator.gate().provider().calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_translate_names_empty_skips_provider() {
        let translator = translator(Failing::default());
        assert!(translator.translate_names(&[], "xx").await.is_empty());
        assert_eq!(translator.gate().provider().calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_translate_text_empty_skips_provider() {
        let translator = translator(Failing::default());
        assert_eq!(translator.translate_text("  ", "xx").await, "  ");
        assert_eq!(translator.gate().provider().calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_translate_request_happy_path() {
        let translator = translator(Uppercase);
        let response = translator
            .translate_request(&request(
                &[("red", "#f00"), ("green", "#0f0"), ("blue", "#00f")],
                "pick one",
            ))
            .await;

        assert!(response.status);
        assert_eq!(response.message, "Translations completed");
        assert_eq!(response.render_text, "PICK ONE");
        assert_eq!(
            response.colors,
            vec![
                Color::new("RED", "#f00"),
                Color::new("GREEN", "#0f0"),
                Color::new("BLUE", "#00f"),
            ]
        );
    }

    #[tokio::test]
    async fn test_translate_request_dropped_delimiter() {
        let translator = translator(Scripted::new(&[("a, b, c", "A B C"), ("hi", "HI")]));
        let response = translator
            .translate_request(&request(&[("a", "#1"), ("b", "#2"), ("c", "#3")], "hi"))
            .await;

        assert_eq!(
            response.colors,
            vec![
                Color::new("A B C", "#1"),
                Color::new("b", "#2"),
                Color::new("c", "#3"),
            ]
        );
        assert_eq!(response.render_text, "HI");
    }

    #[tokio::test]
    async fn test_translate_request_provider_down() {
        let translator = translator(Failing::default());
        let req = request(&[("red", "#f00"), ("blue", "#00f")], "pick one");
        let response = translator.translate_request(&req).await;

        assert!(response.status);
        assert_eq!(response.colors, req.colors);
        assert_eq!(response.render_text, "pick one");
        assert_eq!(translator.gate().provider().calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_translate_request_render_text_fails_alone() {
        let translator = translator(Scripted::new(&[("a, b", "A, B")]));
        let response = translator
            .translate_request(&request(&[("a", "#1"), ("b", "#2")], "pick one"))
            .await;

        assert!(response.status);
        assert_eq!(response.render_text, "pick one");
        assert_eq!(
            response.colors,
            vec![Color::new("A", "#1"), Color::new("B", "#2")]
        );
    }

    #[tokio::test]
    async fn test_translate_request_names_fail_alone() {
        let translator = translator(Scripted::new(&[("pick one", "PICK ONE")]));
        let req = request(&[("a", "#1"), ("b", "#2")], "pick one");
        let response = translator.translate_request(&req).await;

        assert!(response.status);
        assert_eq!(response.render_text, "PICK ONE");
        assert_eq!(response.colors, req.colors);
    }

    #[tokio::test]
    async fn test_translate_request_identity_round_trip() {
        let translator = translator(Identity);
        let req = request(
            &[("red", "#f00"), ("sea green", "#2e8b57"), ("navy", "#000080")],
            "pick one",
        );
        let response = translator.translate_request(&req).await;

        assert_eq!(response.colors, req.colors);
        assert_eq!(response.render_text, req.render_text);
    }
}
