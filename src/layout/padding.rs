//! Padding sizing for infinite horizontal scrolling.
//!
//! In infinite mode the content area is widened on both sides so that scrolling
//! past either edge reveals wrapped copies of the real content. How wide each
//! side gets is decided by a [`PaddingCalculator`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{Rect, Size};

/// Left and right buffer widths around the real content
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct AroundInsets {
    pub left: f32,
    pub right: f32,
}

impl AroundInsets {
    pub const ZERO: Self = Self {
        left: 0.0,
        right: 0.0,
    };

    pub fn new(left: f32, right: f32) -> Self {
        Self { left, right }
    }

    /// Sum of both sides
    pub fn total(&self) -> f32 {
        self.left + self.right
    }
}

/// Sizes the infinite-scroll padding for a viewport and reference frame.
///
/// Returned widths must be large enough that scrolling the viewport across
/// the padding always reveals a valid wraparound of the real content. The
/// layout engine trusts the result without checking it.
pub trait PaddingCalculator: fmt::Debug + Send + Sync {
    fn compute_padding(&self, viewport_size: Size, frame: Rect) -> AroundInsets;
}

/// Built-in padding policies
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PaddingPolicy {
    /// Whole pages covering at least one viewport width on each side
    #[default]
    Viewport,
    /// Constant widths
    Fixed { left: f32, right: f32 },
}

impl PaddingPolicy {
    fn viewport_pages(viewport_size: Size, frame: Rect) -> f32 {
        if !(frame.width > 0.0 && frame.width.is_finite()) {
            return 0.0;
        }
        let pages = (viewport_size.width.max(0.0) / frame.width).ceil().max(1.0);
        pages * frame.width
    }
}

impl PaddingCalculator for PaddingPolicy {
    fn compute_padding(&self, viewport_size: Size, frame: Rect) -> AroundInsets {
        match *self {
            Self::Viewport => {
                let width = Self::viewport_pages(viewport_size, frame);
                AroundInsets::new(width, width)
            }
            Self::Fixed { left, right } => AroundInsets::new(left.max(0.0), right.max(0.0)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_policy_covers_viewport() {
        let insets = PaddingPolicy::Viewport
            .compute_padding(Size::new(250.0, 100.0), Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(insets, AroundInsets::new(300.0, 300.0));
    }

    #[test]
    fn test_viewport_policy_at_least_one_page() {
        let insets = PaddingPolicy::Viewport
            .compute_padding(Size::ZERO, Rect::new(10.0, 0.0, 80.0, 100.0));
        assert_eq!(insets.left, 80.0);
        assert_eq!(insets.right, 80.0);
    }

    #[test]
    fn test_viewport_policy_zero_frame() {
        let insets = PaddingPolicy::Viewport.compute_padding(Size::new(320.0, 480.0), Rect::ZERO);
        assert_eq!(insets, AroundInsets::ZERO);
    }

    #[test]
    fn test_fixed_policy() {
        let policy = PaddingPolicy::Fixed {
            left: 50.0,
            right: -5.0,
        };
        let insets = policy.compute_padding(Size::new(320.0, 480.0), Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(insets, AroundInsets::new(50.0, 0.0));
        assert_eq!(insets.total(), 50.0);
    }

    #[test]
    fn test_policy_json_shape() {
        let policy: PaddingPolicy =
            serde_json::from_str(r#"{"kind":"fixed","left":50,"right":50}"#).unwrap_or_default();
        assert_eq!(
            policy,
            PaddingPolicy::Fixed {
                left: 50.0,
                right: 50.0
            }
        );
    }
}
