// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Layout primitives: page cursor, image fitting, and font metrics.

pub mod cursor;
pub mod fit;
pub mod metrics;

pub use cursor::PageCursor;
pub use fit::{FitConstraint, FittedSize, fit_to_box};
pub use metrics::{Font, FontSpec, REPLACEMENT_CHAR, drawable_char};
