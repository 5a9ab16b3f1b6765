//! Visibility rule for the floating back-to-top control.

/// Scroll offset (device-independent points) past which the control
/// appears.
pub const BACK_TO_TOP_THRESHOLD: f32 = 400.0;

pub fn back_to_top_visible(offset_y: f32) -> bool {
    offset_y > BACK_TO_TOP_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::back_to_top_visible;

    #[test]
    fn hidden_at_the_origin_and_at_the_threshold() {
        assert!(!back_to_top_visible(0.0));
        assert!(!back_to_top_visible(400.0));
    }

    #[test]
    fn visible_past_the_threshold() {
        assert!(back_to_top_visible(400.5));
        assert!(back_to_top_visible(500.0));
    }
}
