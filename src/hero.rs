//! Hero section scroll effects: background video fade and parallax.

/// Video opacity for a scroll position; fully faded once the hero is scrolled past.
pub fn video_opacity(scroll_y: f64, hero_height: f64) -> f64 {
    if hero_height <= 0.0 {
        return 0.0;
    }
    1.0 - (scroll_y / hero_height).clamp(0.0, 1.0)
}

/// Background `background-position-y` offset in px.
pub fn parallax_offset(scroll_y: f64, speed: f64) -> f64 {
    scroll_y * speed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_fades_over_hero_height() {
        assert_eq!(video_opacity(0.0, 800.0), 1.0);
        assert_eq!(video_opacity(400.0, 800.0), 0.5);
        assert_eq!(video_opacity(800.0, 800.0), 0.0);
        assert_eq!(video_opacity(5000.0, 800.0), 0.0);
    }

    #[test]
    fn test_zero_height_hero_is_faded() {
        assert_eq!(video_opacity(10.0, 0.0), 0.0);
    }

    #[test]
    fn test_parallax_offset() {
        assert_eq!(parallax_offset(300.0, 0.5), 150.0);
        assert_eq!(parallax_offset(0.0, 0.5), 0.0);
    }
}
