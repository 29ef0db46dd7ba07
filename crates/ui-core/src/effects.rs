//! Geometry for the decorative pointer effects: button ripples and the
//! stat-card tilt.

/// Element box in viewport coordinates, as reported by
/// `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Keyframes the ripple spans animate with. Injected once per page.
pub const RIPPLE_KEYFRAMES: &str =
    "@keyframes rippleAnim { to { transform: scale(4); opacity: 0; } }";

/// Circle centred on the pointer, large enough to cover the host element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl Ripple {
    pub fn at(rect: Rect, client_x: f64, client_y: f64) -> Self {
        let size = rect.width.max(rect.height);
        Self {
            size,
            left: client_x - rect.left - size / 2.0,
            top: client_y - rect.top - size / 2.0,
        }
    }

    pub fn css_text(&self) -> String {
        format!(
            "position:absolute;border-radius:50%;pointer-events:none;\
             width:{size}px;height:{size}px;left:{left}px;top:{top}px;\
             background:rgba(255,255,255,0.12);transform:scale(0);\
             animation:rippleAnim 0.5s ease-out;",
            size = self.size,
            left = self.left,
            top = self.top,
        )
    }
}

const TILT_DEGREES: f64 = 6.0;

pub const TILT_RESET: &str = "perspective(800px) rotateX(0) rotateY(0) translateY(0)";
pub const TILT_ENTER_TRANSITION: &str = "transform 0.08s ease";
pub const TILT_LEAVE_TRANSITION: &str = "transform 0.4s ease";

/// Rotation for a pointer at (`client_x`, `client_y`) over `rect`: the card
/// leans away from the pointer by up to 3 degrees on each axis.
pub fn tilt_angles(rect: Rect, client_x: f64, client_y: f64) -> (f64, f64) {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return (0.0, 0.0);
    }
    let x = client_x - rect.left;
    let y = client_y - rect.top;
    let rx = ((y - rect.height / 2.0) / rect.height) * -TILT_DEGREES;
    let ry = ((x - rect.width / 2.0) / rect.width) * TILT_DEGREES;
    // Adding 0.0 turns -0.0 into 0.0 so the CSS never reads "-0deg".
    (rx + 0.0, ry + 0.0)
}

pub fn tilt_transform(rect: Rect, client_x: f64, client_y: f64) -> String {
    let (rx, ry) = tilt_angles(rect, client_x, client_y);
    format!("perspective(800px) rotateX({rx}deg) rotateY({ry}deg) translateY(-4px)")
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: Rect = Rect {
        left: 100.0,
        top: 50.0,
        width: 200.0,
        height: 100.0,
    };

    #[test]
    fn test_ripple_is_centered_on_pointer() {
        let ripple = Ripple::at(CARD, 150.0, 70.0);
        assert_eq!(ripple.size, 200.0);
        assert_eq!(ripple.left, -50.0);
        assert_eq!(ripple.top, -80.0);
        let css = ripple.css_text();
        assert!(css.contains("width:200px;height:200px;left:-50px;top:-80px;"));
        assert!(css.contains("animation:rippleAnim 0.5s ease-out;"));
    }

    #[test]
    fn test_tilt_center_is_flat() {
        assert_eq!(tilt_angles(CARD, 200.0, 100.0), (0.0, 0.0));
        assert_eq!(
            tilt_transform(CARD, 200.0, 100.0),
            "perspective(800px) rotateX(0deg) rotateY(0deg) translateY(-4px)"
        );
    }

    #[test]
    fn test_tilt_corners() {
        // Top-left corner: card tips up and to the left.
        assert_eq!(tilt_angles(CARD, 100.0, 50.0), (3.0, -3.0));
        assert_eq!(tilt_angles(CARD, 300.0, 150.0), (-3.0, 3.0));
    }

    #[test]
    fn test_tilt_degenerate_rect() {
        let flat = Rect {
            width: 0.0,
            ..CARD
        };
        assert_eq!(tilt_angles(flat, 120.0, 60.0), (0.0, 0.0));
    }
}
