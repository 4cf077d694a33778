//! Core data models for color translation

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Decode `null` the same as a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Like [`null_as_default`], also for `null` entries inside the list
fn colors_or_empty<'de, D>(deserializer: D) -> Result<Vec<Color>, D::Error>
where
    D: Deserializer<'de>,
{
    let colors = Option::<Vec<Option<Color>>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(colors
        .into_iter()
        .map(|color| color.unwrap_or_default())
        .collect())
}

/// A named color. `code` is opaque and never translated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    /// Human-readable label
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Opaque code, usually a hex triplet
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,
}

impl Color {
    /// Create a color from a name and code
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }
}

/// Incoming translation request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    /// Colors to translate, in order
    #[serde(default, deserialize_with = "colors_or_empty")]
    pub colors: Vec<Color>,
    /// Target language tag, passed to the provider as-is
    #[serde(default, deserialize_with = "null_as_default")]
    pub to: String,
    /// Display string translated alongside the names
    #[serde(default, deserialize_with = "null_as_default")]
    pub render_text: String,
}

impl TranslateRequest {
    /// Check the request is worth sending to the provider
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.colors.is_empty() {
            return Err(RequestError::NoColors);
        }
        Ok(())
    }

    /// Color names in request order
    pub fn names(&self) -> Vec<String> {
        self.colors.iter().map(|c| c.name.clone()).collect()
    }
}

/// Response envelope, used for both success and failure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    /// Translated colors; empty on failure
    pub colors: Vec<Color>,
    /// Translated display string
    pub render_text: String,
    /// Mirrors HTTP success
    pub status: bool,
    /// Human-readable outcome
    pub message: String,
}

impl TranslateResponse {
    /// Successful response message
    pub const COMPLETED: &'static str = "Translations completed";

    /// Successful response carrying translated colors
    pub fn completed(colors: Vec<Color>, render_text: String) -> Self {
        Self {
            colors,
            render_text,
            status: true,
            message: Self::COMPLETED.to_string(),
        }
    }

    /// Rejection with `status=false` and no colors
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            colors: Vec::new(),
            render_text: String::new(),
            status: false,
            message: message.into(),
        }
    }
}

/// Reasons a request is rejected before any provider call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestError {
    /// Body is not a valid TranslateRequest
    InvalidPayload,
    /// `colors` is empty
    NoColors,
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::InvalidPayload => write!(f, "Invalid request payload"),
            RequestError::NoColors => write!(f, "No colors to translate"),
        }
    }
}

impl std::error::Error for RequestError {}
