// Copyright 2025 the Lesson Viewport Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;

/// Display bucket for a rescaled mastery score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MasteryBucket {
    /// No mastery yet (zero, negative or not a number).
    NotStarted,
    /// Below half of full credit.
    Practicing,
    /// At least half of full credit, but not all of it.
    AlmostThere,
    /// Full credit reached.
    Complete,
}

impl MasteryBucket {
    /// Selects the bucket for a score already divided by full credit.
    #[must_use]
    pub fn for_scaled(scaled: f64) -> Self {
        if scaled.is_nan() || scaled <= 0.0 {
            Self::NotStarted
        } else if scaled < 0.5 {
            Self::Practicing
        } else if scaled < 1.0 {
            Self::AlmostThere
        } else {
            Self::Complete
        }
    }

    /// Text shown next to the bar.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::NotStarted => "Get started!",
            Self::Practicing => "Keep practicing!",
            Self::AlmostThere => "Almost there!",
            Self::Complete => "Complete!",
        }
    }

    /// Color of the bar's filler.
    #[must_use]
    pub fn fill(self) -> Color {
        match self {
            Self::NotStarted | Self::Practicing => Color::from_rgb8(0xfc, 0xd3, 0x80),
            Self::AlmostThere => Color::from_rgb8(0xf0, 0xb3, 0x00),
            Self::Complete => Color::from_rgb8(0x6e, 0xb5, 0x35),
        }
    }
}

/// How raw mastery ratios map onto the progress bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MasteryScale {
    full_credit: f64,
}

impl Default for MasteryScale {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FULL_CREDIT)
    }
}

impl MasteryScale {
    /// Mastery ratio that gives full credit unless configured otherwise.
    pub const DEFAULT_FULL_CREDIT: f64 = 0.7;

    /// Creates a scale where `full_credit` counts as complete.
    ///
    /// Non-finite thresholds fall back to [`Self::DEFAULT_FULL_CREDIT`];
    /// non-positive ones are raised to the smallest positive value.
    #[must_use]
    pub fn new(full_credit: f64) -> Self {
        let full_credit = if full_credit.is_finite() {
            full_credit.max(f64::MIN_POSITIVE)
        } else {
            Self::DEFAULT_FULL_CREDIT
        };
        Self { full_credit }
    }

    /// Returns the full-credit threshold.
    #[must_use]
    pub fn full_credit(&self) -> f64 {
        self.full_credit
    }

    /// Rescales a raw mastery ratio so that full credit maps to `1.0`.
    #[must_use]
    pub fn scaled(&self, mastery: f64) -> f64 {
        mastery / self.full_credit
    }

    /// Computes what the progress bar shows for a raw mastery ratio.
    #[must_use]
    pub fn display(&self, mastery: f64) -> MasteryDisplay {
        let scaled = self.scaled(mastery);
        let filled = if scaled.is_nan() {
            0.0
        } else {
            scaled.clamp(0.0, 1.0)
        };
        let bucket = MasteryBucket::for_scaled(scaled);
        MasteryDisplay {
            bucket,
            fill: bucket.fill(),
            right_inset_percent: 100.0 - filled * 100.0,
        }
    }
}

/// What the mastery bar shows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MasteryDisplay {
    /// Selected bucket.
    pub bucket: MasteryBucket,
    /// Filler color.
    pub fill: Color,
    /// Distance of the filler's right edge from the bar's right edge, in
    /// percent of the bar width. `0` is a full bar.
    pub right_inset_percent: f64,
}

impl MasteryDisplay {
    /// Text shown next to the bar.
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.bucket.label()
    }

    /// Filler color as a CSS hex color.
    #[must_use]
    pub fn fill_css(&self) -> String {
        let rgba = self.fill.to_rgba8();
        format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
    }

    /// Filler `right` offset as a CSS percentage.
    #[must_use]
    pub fn right_css(&self) -> String {
        format!("{}%", self.right_inset_percent)
    }
}

#[cfg(test)]
mod tests {
    use super::{MasteryBucket, MasteryScale};

    #[test]
    fn full_credit_threshold_completes() {
        let display = MasteryScale::default().display(0.7);
        assert_eq!(display.bucket, MasteryBucket::Complete);
        assert_eq!(display.label(), "Complete!");
        assert_eq!(display.fill_css(), "#6eb535");
        assert_eq!(display.right_css(), "0%");
    }

    #[test]
    fn beyond_full_credit_keeps_a_full_bar() {
        let display = MasteryScale::default().display(0.95);
        assert_eq!(display.bucket, MasteryBucket::Complete);
        assert_eq!(display.right_inset_percent, 0.0);
    }

    #[test]
    fn buckets_follow_raw_thresholds() {
        let scale = MasteryScale::default();
        let cases = [
            (0.0, MasteryBucket::NotStarted, "Get started!", "#fcd380"),
            (0.1, MasteryBucket::Practicing, "Keep practicing!", "#fcd380"),
            (0.34, MasteryBucket::Practicing, "Keep practicing!", "#fcd380"),
            (0.35, MasteryBucket::AlmostThere, "Almost there!", "#f0b300"),
            (0.69, MasteryBucket::AlmostThere, "Almost there!", "#f0b300"),
            (1.0, MasteryBucket::Complete, "Complete!", "#6eb535"),
        ];
        for (mastery, bucket, label, color) in cases {
            let display = scale.display(mastery);
            assert_eq!(display.bucket, bucket, "mastery {mastery}");
            assert_eq!(display.label(), label);
            assert_eq!(display.fill_css(), color);
        }
    }

    #[test]
    fn half_credit_fills_half_the_bar() {
        let display = MasteryScale::new(0.5).display(0.25);
        assert_eq!(display.bucket, MasteryBucket::AlmostThere);
        assert_eq!(display.right_css(), "50%");
    }

    #[test]
    fn nan_and_negative_scores_are_not_started() {
        let scale = MasteryScale::default();
        for mastery in [f64::NAN, -0.2] {
            let display = scale.display(mastery);
            assert_eq!(display.bucket, MasteryBucket::NotStarted);
            assert_eq!(display.right_css(), "100%");
        }
    }

    #[test]
    fn degenerate_thresholds_are_sanitized() {
        assert!((MasteryScale::new(f64::NAN).full_credit() - 0.7).abs() < 1e-12);
        assert!(MasteryScale::new(0.0).full_credit() > 0.0);
    }
}
