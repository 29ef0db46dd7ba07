//! Text for the file-upload preview under an upload zone.

/// What to show for the selected file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    pub text: String,
    pub oversized: bool,
}

pub const OK_BACKGROUND: &str = "#f0fdf4";
pub const OK_COLOR: &str = "#16a34a";
pub const ERROR_BACKGROUND: &str = "#fee2e2";
pub const ERROR_COLOR: &str = "#dc2626";

/// Base style of the `.file-info` block.
pub const INFO_STYLE: &str =
    "margin-top:10px;padding:10px;background:#f0fdf4;border-radius:8px;font-size:13px;color:#16a34a;";

/// Drop-zone colours: (border, background).
pub const ZONE_ACTIVE: (&str, &str) = ("#4f46e5", "#eef2ff");
pub const ZONE_IDLE: (&str, &str) = ("#d1d5db", "#f9fafb");

const KIB: f64 = 1024.0;
const MIB: f64 = 1024.0 * 1024.0;

impl FileInfo {
    pub fn describe(name: &str, size_bytes: u64, max_bytes: u64) -> Self {
        let size = size_bytes as f64;
        if size_bytes > max_bytes {
            return Self {
                text: format!(
                    "❌ File too large: {name} ({:.1} MB). Max {}MB allowed.",
                    size / MIB,
                    format_limit_mb(max_bytes)
                ),
                oversized: true,
            };
        }
        Self {
            text: format!("📎 {name} ({:.1} KB)", size / KIB),
            oversized: false,
        }
    }

    /// (background, text colour) for the info block.
    pub fn colors(&self) -> (&'static str, &'static str) {
        if self.oversized {
            (ERROR_BACKGROUND, ERROR_COLOR)
        } else {
            (OK_BACKGROUND, OK_COLOR)
        }
    }
}

fn format_limit_mb(max_bytes: u64) -> String {
    let mb = max_bytes as f64 / MIB;
    if mb.fract() == 0.0 {
        format!("{mb:.0}")
    } else {
        format!("{mb:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMIT: u64 = 10 * 1024 * 1024;

    #[test]
    fn test_small_file() {
        let info = FileInfo::describe("report.pdf", 2048 + 307, LIMIT);
        assert_eq!(info.text, "📎 report.pdf (2.3 KB)");
        assert!(!info.oversized);
        assert_eq!(info.colors(), ("#f0fdf4", "#16a34a"));
    }

    #[test]
    fn test_limit_is_inclusive() {
        let info = FileInfo::describe("scan.png", LIMIT, LIMIT);
        assert!(!info.oversized);
        assert_eq!(info.text, "📎 scan.png (10240.0 KB)");
    }

    #[test]
    fn test_oversized_file() {
        let info = FileInfo::describe("video.mp4", 12 * 1024 * 1024 + 200 * 1024, LIMIT);
        assert!(info.oversized);
        assert_eq!(
            info.text,
            "❌ File too large: video.mp4 (12.2 MB). Max 10MB allowed."
        );
        assert_eq!(info.colors(), ("#fee2e2", "#dc2626"));
    }

    #[test]
    fn test_fractional_limit_label() {
        let info = FileInfo::describe("a.bin", 3 * 1024 * 1024, 2 * 1024 * 1024 + 512 * 1024);
        assert_eq!(info.text, "❌ File too large: a.bin (3.0 MB). Max 2.5MB allowed.");
    }
}
