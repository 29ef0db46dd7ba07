//! Toast notifications: kinds and the queue model rendered by the page.
//!
//! A toast goes through two stages after it is shown: it starts *leaving*
//! (faded out by CSS) once its duration elapses, and is dismissed for good
//! after the fade. A click dismisses it at once.

/// Visual flavour of a toast.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Warning => "warning",
            ToastKind::Info => "info",
        }
    }

    /// Parse a kind name; unknown names are shown as info.
    pub fn parse(s: &str) -> Self {
        match s {
            "success" => ToastKind::Success,
            "error" => ToastKind::Error,
            "warning" => ToastKind::Warning,
            _ => ToastKind::Info,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "✅",
            ToastKind::Error => "❌",
            ToastKind::Warning => "⚠️",
            ToastKind::Info => "ℹ️",
        }
    }

    pub fn css_class(&self) -> String {
        format!("toast toast-{}", self.as_str())
    }
}

/// Toast raised after a successful copy to the clipboard.
pub const CLIPBOARD_COPIED: (&str, ToastKind) = ("Copied to clipboard!", ToastKind::Success);

/// Style applied to a toast while it fades out.
pub fn leaving_style(fade_ms: u32) -> String {
    format!(
        "cursor:pointer;transition:opacity {fade_ms}ms, transform {fade_ms}ms;\
         opacity:0;transform:translateX(100%);"
    )
}

pub type ToastId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub message: String,
    pub leaving: bool,
}

impl Toast {
    /// Text content: icon, space, message.
    pub fn text(&self) -> String {
        format!("{} {}", self.kind.icon(), self.message)
    }
}

/// Toasts currently on screen, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    items: Vec<Toast>,
    next_id: ToastId,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) -> ToastId {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast {
            id,
            kind,
            message: message.into(),
            leaving: false,
        });
        id
    }

    /// Mark a toast as fading out. Returns false if it is already gone.
    pub fn start_leaving(&mut self, id: ToastId) -> bool {
        match self.items.iter_mut().find(|t| t.id == id) {
            Some(toast) => {
                toast.leaving = true;
                true
            }
            None => false,
        }
    }

    /// Remove a toast. Returns false if it was already removed.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }

    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.items.iter().find(|t| t.id == id)
    }

    pub fn ids(&self) -> Vec<ToastId> {
        self.items.iter().map(|t| t.id).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
