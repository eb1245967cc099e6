//! Image payloads and the concepts/metadata attached to them

use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The `data` object of an input: the image itself plus user annotations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Image {
    /// Where the pixels come from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageSource>,

    /// Concepts attached to the input
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub concepts: Vec<Concept>,

    /// Free-form metadata, searchable on the remote side
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl Image {
    /// Reference an image hosted at a public URL.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            image: Some(ImageSource {
                url: Some(url.into()),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    /// Use an already base64-encoded image.
    pub fn from_base64(encoded: impl Into<String>) -> Self {
        Self {
            image: Some(ImageSource {
                base64: Some(encoded.into()),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    /// Upload raw image bytes (encoded with standard base64).
    pub fn from_bytes(bytes: impl AsRef<[u8]>) -> Self {
        Self::from_base64(STANDARD.encode(bytes))
    }

    /// Restrict recognition to a region of the image.
    ///
    /// Has no effect on an `Image` without a source.
    pub fn with_crop(mut self, crop: Crop) -> Self {
        if let Some(source) = self.image.as_mut() {
            source.crop = Some(crop);
        }
        self
    }

    /// Let the API accept a URL that was already submitted.
    pub fn allow_duplicate_url(mut self) -> Self {
        if let Some(source) = self.image.as_mut() {
            source.allow_duplicate_url = true;
        }
        self
    }
}

/// Image location: exactly one of `url` or `base64` is normally set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageSource {
    /// Publicly reachable image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Base64-encoded image bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base64: Option<String>,

    /// Region of interest
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crop: Option<Crop>,

    /// Accept URLs that were already added
    #[serde(default, skip_serializing_if = "is_false")]
    pub allow_duplicate_url: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Crop box as fractions of the image size, sent as `[top, left, bottom, right]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 4]", into = "[f32; 4]")]
pub struct Crop {
    /// Top edge (0.0 - 1.0)
    pub top: f32,
    /// Left edge (0.0 - 1.0)
    pub left: f32,
    /// Bottom edge (0.0 - 1.0)
    pub bottom: f32,
    /// Right edge (0.0 - 1.0)
    pub right: f32,
}

impl Crop {
    /// Create a crop box.
    pub fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }
}

impl From<[f32; 4]> for Crop {
    fn from([top, left, bottom, right]: [f32; 4]) -> Self {
        Self::new(top, left, bottom, right)
    }
}

impl From<Crop> for [f32; 4] {
    fn from(crop: Crop) -> Self {
        [crop.top, crop.left, crop.bottom, crop.right]
    }
}

/// A concept attached to an input when it is created.
///
/// `value` is sent as-is, including `null`. Replies from the API also carry
/// the concept `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Concept {
    /// Concept identifier (set by the API in replies)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Concept name
    #[serde(default)]
    pub name: String,

    /// Concept value; usually a boolean or a score
    #[serde(default)]
    pub value: Value,
}

impl Concept {
    /// Create a concept with a name and value.
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            id: None,
            name: name.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_image_from_url_serialization() {
        let image = Image::from_url("https://example.com/dog.jpg");
        assert_eq!(
            serde_json::to_value(&image).unwrap(),
            json!({"image": {"url": "https://example.com/dog.jpg"}})
        );
    }

    #[test]
    fn test_image_from_bytes_encodes_base64() {
        let image = Image::from_bytes(b"hello");
        let source = image.image.unwrap();
        assert_eq!(source.base64.as_deref(), Some("aGVsbG8="));
        assert!(source.url.is_none());
    }

    #[test]
    fn test_crop_and_duplicate_flag() {
        let image = Image::from_url("https://example.com/cat.jpg")
            .with_crop(Crop::new(0.25, 0.0, 0.75, 0.5))
            .allow_duplicate_url();

        assert_eq!(
            serde_json::to_value(&image).unwrap(),
            json!({
                "image": {
                    "url": "https://example.com/cat.jpg",
                    "crop": [0.25, 0.0, 0.75, 0.5],
                    "allow_duplicate_url": true
                }
            })
        );
    }

    #[test]
    fn test_crop_without_source_is_ignored() {
        let image = Image::default().with_crop(Crop::new(0.0, 0.0, 1.0, 1.0));
        assert!(image.image.is_none());
    }

    #[test]
    fn test_concept_keeps_null_value() {
        let concept = Concept::new("dog", Value::Null);
        assert_eq!(
            serde_json::to_value(&concept).unwrap(),
            json!({"name": "dog", "value": null})
        );
    }

    #[test]
    fn test_concept_from_reply() {
        let concept: Concept =
            serde_json::from_str(r#"{"id":"ai_8S2Vq3cR","name":"train","value":0.99,"app_id":"main"}"#)
                .unwrap();
        assert_eq!(concept.id.as_deref(), Some("ai_8S2Vq3cR"));
        assert_eq!(concept.name, "train");
        assert_eq!(concept.value, json!(0.99));
    }
}
