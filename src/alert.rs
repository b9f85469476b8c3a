//! Alert Banner State
//!
//! One transient message at a time, cleared after a fixed delay.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub text: String,
    pub kind: AlertKind,
    /// Distinguishes repeated alerts with the same text
    pub serial: u32,
}

impl Alert {
    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: AlertKind::Success, serial: 0 }
    }

    pub fn danger(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: AlertKind::Danger, serial: 0 }
    }

    pub fn class(&self) -> &'static str {
        match self.kind {
            AlertKind::Success => "alert alert-success",
            AlertKind::Danger => "alert alert-danger",
        }
    }
}
