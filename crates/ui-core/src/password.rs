//! Password strength heuristic and show/hide toggle.

/// Highest score [`score`] can return.
pub const MAX_SCORE: u8 = 5;

const COLORS: [&str; 5] = ["#dc2626", "#f59e0b", "#eab308", "#22c55e", "#16a34a"];
const LABELS: [&str; 5] = ["Very Weak", "Weak", "Fair", "Strong", "Very Strong"];
const EMPTY_COLOR: &str = "#e2e8f0";

/// One point each for: 8+ chars, 12+ chars, an uppercase ASCII letter, an
/// ASCII digit, a character outside `[A-Za-z0-9]`.
pub fn score(password: &str) -> u8 {
    let length = password.chars().count();
    let checks = [
        length >= 8,
        length >= 12,
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    checks.iter().filter(|passed| **passed).count() as u8
}

/// How the strength bar should look.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthReport {
    pub score: u8,
    pub width_percent: u8,
    pub color: &'static str,
    pub label: &'static str,
}

impl StrengthReport {
    pub fn for_password(password: &str) -> Self {
        Self::from_score(score(password))
    }

    pub fn from_score(score: u8) -> Self {
        let score = score.min(MAX_SCORE);
        let slot = usize::from(score).checked_sub(1);
        Self {
            score,
            width_percent: score * 20,
            color: slot.map(|i| COLORS[i]).unwrap_or(EMPTY_COLOR),
            label: slot.map(|i| LABELS[i]).unwrap_or(""),
        }
    }

    pub fn width_css(&self) -> String {
        format!("{}%", self.width_percent)
    }
}

/// Input type and button glyph after toggling a password field whose type
/// is currently `current_type`.
pub fn toggle_visibility(current_type: &str) -> (&'static str, &'static str) {
    if current_type == "password" {
        ("text", "🙈")
    } else {
        ("password", "👁️")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_components() {
        assert_eq!(score(""), 0);
        assert_eq!(score("abcdefg"), 0);
        assert_eq!(score("abcdefgh"), 1);
        assert_eq!(score("abcdefghijkl"), 2);
        assert_eq!(score("Abcdefghijkl"), 3);
        assert_eq!(score("Abcdefghijk1"), 4);
        assert_eq!(score("Abcdefghij1!"), 5);
        assert_eq!(score("a b"), 1);
    }

    #[test]
    fn test_non_ascii_counts_as_symbol_not_uppercase() {
        assert_eq!(score("É"), 1);
        assert_eq!(score("ÉÉÉÉÉÉÉÉ"), 2);
    }

    #[test]
    fn test_report_for_each_score() {
        let empty = StrengthReport::from_score(0);
        assert_eq!(empty.width_css(), "0%");
        assert_eq!(empty.color, "#e2e8f0");
        assert_eq!(empty.label, "");

        let fair = StrengthReport::from_score(3);
        assert_eq!(fair.width_percent, 60);
        assert_eq!(fair.color, "#eab308");
        assert_eq!(fair.label, "Fair");

        let best = StrengthReport::for_password("Abcdefghij1!");
        assert_eq!(best.width_css(), "100%");
        assert_eq!(best.color, "#16a34a");
        assert_eq!(best.label, "Very Strong");
    }

    #[test]
    fn test_toggle_visibility() {
        assert_eq!(toggle_visibility("password"), ("text", "🙈"));
        assert_eq!(toggle_visibility("text"), ("password", "👁️"));
    }
}
