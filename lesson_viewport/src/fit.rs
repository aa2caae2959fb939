// Copyright 2025 the Lesson Viewport Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor`
use kurbo::{Affine, Size};

/// Result of fitting fixed-size content into an available container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContentFit {
    /// Size of the displayed content box, in whole pixels.
    pub displayed: Size,
    /// Uniform shrink factor for the content, or `None` when the content is
    /// shown at its natural size.
    pub scale: Option<f64>,
}

impl ContentFit {
    /// Returns the scale as a transform anchored at the top-left corner.
    #[must_use]
    pub fn transform(&self) -> Affine {
        self.scale.map_or(Affine::IDENTITY, Affine::scale)
    }
}

/// Fits content authored at `max` into `container`, preserving the aspect
/// ratio of `max`.
///
/// The available box is first limited to both the container and the maximum.
/// The dimension that is too large for the target ratio is then reduced, and
/// both dimensions are floored to whole pixels. When the displayed box is
/// smaller than `max` along either axis, the content is shrunk uniformly by
/// the larger of the two per-axis factors.
///
/// `max` must be strictly positive. Negative or NaN container extents are
/// treated as zero, which yields an empty box with a zero scale.
///
/// ```rust
/// use kurbo::Size;
/// use lesson_viewport::fit_content;
///
/// let fit = fit_content(Size::new(800.0, 800.0), Size::new(1024.0, 768.0));
/// assert_eq!(fit.displayed, Size::new(800.0, 600.0));
/// assert_eq!(fit.scale, Some(800.0 / 1024.0));
/// ```
#[must_use]
pub fn fit_content(container: Size, max: Size) -> ContentFit {
    let mut width = container.width.max(0.0).min(max.width);
    let mut height = container.height.max(0.0).min(max.height);

    let target_ratio = max.width / max.height;
    if width / height < target_ratio {
        // Too tall for the ratio.
        height = width / target_ratio;
    } else {
        width = target_ratio * height;
    }

    let displayed = Size::new(width.floor(), height.floor());

    let scale_w = max.width / displayed.width;
    let scale_h = max.height / displayed.height;
    let scale = if scale_w <= 1.0 && scale_h <= 1.0 {
        None
    } else {
        Some(1.0 / scale_w.max(scale_h))
    };

    ContentFit { displayed, scale }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size};

    use super::fit_content;

    const MAX: Size = Size::new(1024.0, 768.0);

    #[test]
    fn large_window_shows_natural_size() {
        let fit = fit_content(Size::new(1920.0, 1080.0), MAX);
        assert_eq!(fit.displayed, MAX);
        assert_eq!(fit.scale, None);
    }

    #[test]
    fn square_window_shrinks_height() {
        let fit = fit_content(Size::new(800.0, 800.0), MAX);
        assert_eq!(fit.displayed, Size::new(800.0, 600.0));
        let scale = fit.scale.unwrap();
        assert!((scale - 0.781_25).abs() < 1e-12);
    }

    #[test]
    fn wide_window_shrinks_width() {
        let fit = fit_content(Size::new(2000.0, 600.0), MAX);
        assert_eq!(fit.displayed, Size::new(800.0, 600.0));
    }

    #[test]
    fn uses_larger_factor_after_flooring() {
        // 1000 / (4/3) = 750, exact; 999 / (4/3) = 749.25 floors to 749.
        let fit = fit_content(Size::new(999.0, 2000.0), MAX);
        assert_eq!(fit.displayed, Size::new(999.0, 749.0));
        let expected = 1.0 / (768.0_f64 / 749.0).max(1024.0 / 999.0);
        assert_eq!(fit.scale, Some(expected));
    }

    #[test]
    fn transform_is_anchored_top_left() {
        let fit = fit_content(Size::new(512.0, 384.0), MAX);
        let xf = fit.transform();
        assert_eq!(xf * Point::ORIGIN, Point::ORIGIN);
        let corner = xf * Point::new(1024.0, 768.0);
        assert!((corner.x - 512.0).abs() < 1e-9);
        assert!((corner.y - 384.0).abs() < 1e-9);
    }

    #[test]
    fn empty_container_collapses() {
        let fit = fit_content(Size::new(0.0, 0.0), MAX);
        assert_eq!(fit.displayed, Size::ZERO);
        assert_eq!(fit.scale, Some(0.0));

        let fit = fit_content(Size::new(-5.0, 300.0), MAX);
        assert_eq!(fit.displayed, Size::ZERO);
    }

    #[test]
    fn preserves_ratio_and_bounds_over_a_grid() {
        for max in [MAX, Size::new(400.0, 900.0), Size::new(333.0, 333.0)] {
            let ratio = max.width / max.height;
            for w in (1..=2100).step_by(37) {
                for h in (1..=1700).step_by(41) {
                    let container = Size::new(f64::from(w), f64::from(h));
                    let fit = fit_content(container, max);
                    let d = fit.displayed;
                    assert!(d.width <= container.width.min(max.width));
                    assert!(d.height <= container.height.min(max.height));
                    assert!(
                        (d.width - ratio * d.height).abs() <= ratio.max(1.0),
                        "ratio drift for {container:?} in {max:?}: {d:?}"
                    );
                }
            }
        }
    }
}
