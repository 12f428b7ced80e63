//! Transform descriptions and their identity semantics.
//!
//! A transform description captures the deterministic post-processing an
//! attachment goes through before upload (trim range, re-encode quality).
//! It is part of the attachment's content identity: the same source bytes
//! under two different transforms produce two different uploads and must
//! never be merged.
//!
//! Identity comparison here is deliberately conservative. A transform that
//! cannot be described canonically is represented as [`TransformDescription::Opaque`]
//! with a freshly minted [`TransformToken`], so it compares equal to nothing
//! but itself. Merging wrongly corrupts a recipient's attachment; failing to
//! merge only costs a redundant upload.

use serde::{Deserialize, Serialize};

use crate::ids::TransformToken;

/// Target quality for re-encoding media before upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaQuality {
    Standard,
    High,
}

/// Half-open trim range in milliseconds, applied to audio/video content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrimRange {
    pub start_ms: u64,
    pub end_ms: u64,
}

/// Deterministic post-processing parameters for one attachment.
///
/// Two descriptions are identity-equal only when every field matches.
/// An `Opaque` description never matches another value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransformDescription {
    /// Upload the source bytes as they are.
    None,
    /// Canonical, fully comparable parameters.
    Params {
        trim: Option<TrimRange>,
        quality: Option<MediaQuality>,
    },
    /// A transform we cannot compare. The token is unique per mint, which
    /// keeps such attachments from ever sharing an upload.
    Opaque { token: TransformToken },
}

impl TransformDescription {
    pub fn none() -> Self {
        Self::None
    }

    pub fn trim(start_ms: u64, end_ms: u64) -> Self {
        Self::Params {
            trim: Some(TrimRange { start_ms, end_ms }),
            quality: None,
        }
    }

    pub fn quality(level: MediaQuality) -> Self {
        Self::Params {
            trim: None,
            quality: Some(level),
        }
    }

    /// Mints a description that compares equal to nothing but itself.
    pub fn opaque() -> Self {
        Self::Opaque {
            token: TransformToken::new(),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl Default for TransformDescription {
    fn default() -> Self {
        Self::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_params_compare_equal() {
        assert_eq!(
            TransformDescription::trim(0, 5_000),
            TransformDescription::trim(0, 5_000)
        );
        assert_eq!(
            TransformDescription::quality(MediaQuality::High),
            TransformDescription::quality(MediaQuality::High)
        );
    }

    #[test]
    fn test_different_params_compare_distinct() {
        assert_ne!(
            TransformDescription::trim(0, 5_000),
            TransformDescription::trim(0, 6_000)
        );
        assert_ne!(
            TransformDescription::none(),
            TransformDescription::quality(MediaQuality::Standard)
        );
    }

    #[test]
    fn test_opaque_never_merges() {
        let a = TransformDescription::opaque();
        let b = TransformDescription::opaque();
        assert_ne!(a, b, "each opaque transform carries its own token");
        assert_eq!(a, a.clone(), "an opaque transform still equals itself");
    }
}
