use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
}

/// A transient, dismissible notification surfaced to the visitor after
/// an operation settles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
}

impl Toast {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Toast {
            kind: ToastKind::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Toast {
            kind: ToastKind::Error,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Holds toasts until the rendering shell displays and dismisses them.
#[derive(Debug, Default)]
pub struct ToastTray {
    toasts: Vec<Toast>,
}

impl ToastTray {
    pub fn new() -> Self {
        ToastTray::default()
    }

    pub fn push(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }

    pub fn as_slice(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn dismiss(&mut self, index: usize) -> Option<Toast> {
        if index < self.toasts.len() {
            Some(self.toasts.remove(index))
        } else {
            None
        }
    }

    pub fn dismiss_all(&mut self) {
        self.toasts.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dismiss_removes_in_order() {
        let mut tray = ToastTray::new();
        tray.push(Toast::error("Error", "first"));
        tray.push(Toast::success("Sent", "second"));

        let dismissed = tray.dismiss(0).unwrap();
        assert_eq!(dismissed.description, "first");
        assert_eq!(tray.len(), 1);
        assert!(tray.dismiss(5).is_none());
    }
}
