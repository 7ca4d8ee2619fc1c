// SPDX-License-Identifier: MPL-2.0
//! Slide content and the fixed, ordered slide set a carousel cycles through.

use crate::error::MountError;

/// Identifier of a video attached to a slide. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    /// Returns `None` for empty or whitespace-only identifiers.
    #[must_use]
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One unit of carousel content.
///
/// Text is stored as Fluent message keys and resolved at render time so the
/// same slide set follows locale switches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    title_key: String,
    body_key: String,
    video_id: Option<VideoId>,
}

impl Slide {
    #[must_use]
    pub fn new(title_key: impl Into<String>, body_key: impl Into<String>) -> Self {
        Self {
            title_key: title_key.into(),
            body_key: body_key.into(),
            video_id: None,
        }
    }

    /// Attaches a video identifier. Empty identifiers are ignored.
    #[must_use]
    pub fn with_video(mut self, raw_id: &str) -> Self {
        self.video_id = VideoId::new(raw_id);
        self
    }

    #[must_use]
    pub fn title_key(&self) -> &str {
        &self.title_key
    }

    #[must_use]
    pub fn body_key(&self) -> &str {
        &self.body_key
    }

    #[must_use]
    pub fn video_id(&self) -> Option<&VideoId> {
        self.video_id.as_ref()
    }
}

/// Ordered, non-empty, read-only sequence of slides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideSet {
    slides: Vec<Slide>,
}

impl SlideSet {
    /// Builds a slide set, refusing an empty one.
    pub fn new(slides: Vec<Slide>) -> Result<Self, MountError> {
        if slides.is_empty() {
            return Err(MountError::NoSlides);
        }
        Ok(Self { slides })
    }

    /// Number of slides. Always at least 1.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false; present for API symmetry with collections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slide> {
        self.slides.iter()
    }

    /// Maps any integer onto a valid slide index.
    #[must_use]
    pub fn normalize(&self, index: i64) -> usize {
        normalize_index(index, self.slides.len())
    }
}

/// Wraps `index` into `0..len` so that negative and out-of-range values cycle.
///
/// Equivalent to `((index % len) + len) % len`. `len` must be non-zero.
#[must_use]
pub fn normalize_index(index: i64, len: usize) -> usize {
    debug_assert!(len > 0, "normalize_index requires a non-empty set");
    // Slide counts are tiny, so the cast cannot truncate.
    index.rem_euclid(len as i64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slides(count: usize) -> Vec<Slide> {
        (0..count)
            .map(|i| Slide::new(format!("title-{i}"), format!("body-{i}")))
            .collect()
    }

    #[test]
    fn empty_slide_set_is_rejected() {
        assert_eq!(SlideSet::new(Vec::new()), Err(MountError::NoSlides));
    }

    #[test]
    fn normalize_matches_double_modulo_formula() {
        for len in 1..=7usize {
            for index in -50i64..=50 {
                let expected = ((index % len as i64) + len as i64) % len as i64;
                assert_eq!(normalize_index(index, len), expected as usize);
            }
        }
    }

    #[test]
    fn normalize_handles_extreme_values() {
        assert_eq!(normalize_index(i64::MIN, 5), i64::MIN.rem_euclid(5) as usize);
        assert_eq!(normalize_index(i64::MAX, 5), i64::MAX.rem_euclid(5) as usize);
        assert!(normalize_index(i64::MIN, 3) < 3);
    }

    #[test]
    fn slide_set_normalize_uses_its_length() {
        let set = SlideSet::new(slides(3)).expect("non-empty");
        assert_eq!(set.normalize(-1), 2);
        assert_eq!(set.normalize(3), 0);
        assert_eq!(set.len(), 3);
        assert!(!set.is_empty());
    }

    #[test]
    fn blank_video_ids_are_dropped() {
        let slide = Slide::new("t", "b").with_video("   ");
        assert!(slide.video_id().is_none());

        let slide = Slide::new("t", "b").with_video(" dQw4w9WgXcQ ");
        assert_eq!(slide.video_id().map(VideoId::as_str), Some("dQw4w9WgXcQ"));
    }
}
