use gpui::Rgba;

/// Extension trait for modifying RGBA colors.
pub trait RgbaExt {
    /// Returns a new color with the specified alpha value.
    fn alpha(self, alpha: f32) -> Self;

    /// Returns a new color with its alpha scaled by `factor`.
    fn fade(self, factor: f32) -> Self;
}

impl RgbaExt for Rgba {
    fn alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    fn fade(self, factor: f32) -> Self {
        let alpha = self.a * factor;
        self.alpha(alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_replaces_only_alpha() {
        let color = Rgba {
            r: 0.2,
            g: 0.4,
            b: 0.6,
            a: 1.0,
        }
        .alpha(0.3);

        assert_eq!(
            color,
            Rgba {
                r: 0.2,
                g: 0.4,
                b: 0.6,
                a: 0.3,
            }
        );
    }

    #[test]
    fn test_fade_scales_existing_alpha() {
        let color = Rgba {
            r: 0.1,
            g: 0.1,
            b: 0.1,
            a: 0.5,
        }
        .fade(0.5);

        assert_eq!(color.a, 0.25);
        assert_eq!(color.r, 0.1);
    }
}
