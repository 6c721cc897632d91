use std::time::{Duration, Instant};

/// Severity of a transient message. The type decides the popup color and
/// how long the message stays up on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    Info,
    #[allow(dead_code)]
    Warning,
    Error,
}

impl NotificationType {
    fn timeout(self) -> Duration {
        let secs = match self {
            NotificationType::Info => 3,
            NotificationType::Warning => 5,
            NotificationType::Error => 10,
        };
        Duration::from_secs(secs)
    }
}

/// An auto-dismissing message shown as a centered popup. The run loop
/// polls [`should_dismiss`](Self::should_dismiss) every frame; Esc clears
/// it earlier.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub notification_type: NotificationType,
    pub timestamp: Instant,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Info)
    }

    #[allow(dead_code)]
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Error)
    }

    fn new(message: impl Into<String>, notification_type: NotificationType) -> Self {
        Self {
            message: message.into(),
            notification_type,
            timestamp: Instant::now(),
        }
    }

    pub fn should_dismiss(&self) -> bool {
        self.timestamp.elapsed() > self.notification_type.timeout()
    }
}

pub const SAVE_LABEL_IDLE: &str = "Save to Favorites";
pub const SAVE_LABEL_SAVED: &str = "Saved!";
pub const SAVE_LABEL_REPEAT: &str = "Already Saved";

const SAVE_NOTICE_TIMEOUT: Duration = Duration::from_secs(2);

/// Transient state of the save control. After a save it shows whether
/// the word was newly saved or already present, then reverts to the
/// idle label after two seconds.
#[derive(Debug, Clone)]
pub struct SaveNotice {
    pub label: &'static str,
    timestamp: Instant,
}

impl SaveNotice {
    pub fn saved() -> Self {
        Self {
            label: SAVE_LABEL_SAVED,
            timestamp: Instant::now(),
        }
    }

    pub fn already_saved() -> Self {
        Self {
            label: SAVE_LABEL_REPEAT,
            timestamp: Instant::now(),
        }
    }

    pub fn should_dismiss(&self) -> bool {
        self.timestamp.elapsed() > SAVE_NOTICE_TIMEOUT
    }
}
