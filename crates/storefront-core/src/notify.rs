//! Transient notices ("toasts").

use std::time::Duration;

use serde::Serialize;

/// Default time a notice stays on screen.
pub const DEFAULT_NOTICE_DURATION: Duration = Duration::from_millis(2800);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Info,
    Warning,
}

impl NoticeKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    #[serde(rename = "duration_ms", serialize_with = "serialize_millis")]
    pub duration: Duration,
}

impl Notice {
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            duration: DEFAULT_NOTICE_DURATION,
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn added_to_cart(product_name: &str) -> Self {
        Self::new(
            NoticeKind::Success,
            format!("{product_name} adicionado ao carrinho 🛒"),
        )
    }

    pub fn checkout() -> Self {
        Self::new(NoticeKind::Info, "Redirecionando para o checkout...")
    }

    pub fn wishlist(added: bool) -> Self {
        if added {
            Self::new(NoticeKind::Success, "♥ Adicionado aos favoritos")
        } else {
            Self::new(NoticeKind::Info, "♡ Removido dos favoritos")
        }
    }

    pub fn size_required() -> Self {
        Self::new(NoticeKind::Warning, "⚠ Selecione um tamanho primeiro")
    }
}

fn serialize_millis<S: serde::Serializer>(duration: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
}

/// Fire-and-forget notice display.
pub trait Notifier {
    fn show(&mut self, notice: Notice);
}

/// Collects notices in order.
impl Notifier for Vec<Notice> {
    fn show(&mut self, notice: Notice) {
        self.push(notice);
    }
}

/// Logs notices through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn show(&mut self, notice: Notice) {
        tracing::info!(kind = notice.kind.label(), "{}", notice.message);
    }
}
