// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Aspect-ratio-preserving fit of an image into an available box.

/// Which side of the box limited the fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitConstraint {
    Width,
    Height,
}

/// Rendered size of an image after fitting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FittedSize {
    pub width: f32,
    pub height: f32,
    pub constraint: FitConstraint,
}

/// Scale a `natural_width` x `natural_height` image into `box_width` x
/// `box_height`. The tighter side wins: the image fills the box width unless
/// that would exceed the box height, in which case it fills the height.
///
/// Natural dimensions must be positive.
pub fn fit_to_box(
    natural_width: f32,
    natural_height: f32,
    box_width: f32,
    box_height: f32,
) -> FittedSize {
    let aspect = natural_height / natural_width;
    if box_width * aspect > box_height {
        FittedSize {
            width: box_height / aspect,
            height: box_height,
            constraint: FitConstraint::Height,
        }
    } else {
        FittedSize {
            width: box_width,
            height: box_width * aspect,
            constraint: FitConstraint::Width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_image_is_width_constrained() {
        let fitted = fit_to_box(2000.0, 1000.0, 400.0, 300.0);
        assert_eq!(fitted.constraint, FitConstraint::Width);
        assert!((fitted.width - 400.0).abs() < 1e-3);
        assert!((fitted.height - 200.0).abs() < 1e-3);
    }

    #[test]
    fn tall_image_is_height_constrained() {
        let fitted = fit_to_box(1000.0, 3000.0, 400.0, 300.0);
        assert_eq!(fitted.constraint, FitConstraint::Height);
        assert!((fitted.height - 300.0).abs() < 1e-3);
        assert!((fitted.width - 100.0).abs() < 1e-3);
    }

    #[test]
    fn aspect_ratio_is_preserved() {
        let cases = [
            (640.0, 480.0, 481.9, 120.0),
            (17.0, 931.0, 481.9, 700.0),
            (1920.0, 1080.0, 481.9, 728.5),
            (3.0, 2.0, 10.0, 10.0),
        ];
        for (w, h, bw, bh) in cases {
            let fitted = fit_to_box(w, h, bw, bh);
            let expected = h / w;
            let actual = fitted.height / fitted.width;
            assert!(
                (actual - expected).abs() / expected < 1e-4,
                "{w}x{h} in {bw}x{bh}: aspect {actual} vs {expected}"
            );
            assert!(fitted.width <= bw + 1e-3 && fitted.height <= bh + 1e-3);
        }
    }

    #[test]
    fn small_image_is_scaled_up_to_box_width() {
        let fitted = fit_to_box(10.0, 5.0, 400.0, 300.0);
        assert!((fitted.width - 400.0).abs() < 1e-3);
        assert!((fitted.height - 200.0).abs() < 1e-3);
    }

    #[test]
    fn non_positive_box_height_forces_height_branch() {
        let fitted = fit_to_box(100.0, 100.0, 400.0, -5.0);
        assert_eq!(fitted.constraint, FitConstraint::Height);
        assert!(fitted.height <= 0.0);
    }
}
