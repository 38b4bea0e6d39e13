use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;
use tokio::time::{sleep_until, Instant};

pub const DEFAULT_AUTO_HIDE: Duration = Duration::from_millis(4000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    /// Close button on the notification
    Explicit,
    /// Auto-hide deadline elapsed
    Timeout,
    /// Click outside the notification; never dismisses
    BackgroundClick,
}

/// What the notification area currently shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Notice {
    pub is_open: bool,
    pub message: String,
}

#[derive(Debug, Default)]
struct NotifierState {
    notice: Notice,
    deadline: Option<Instant>,
}

/// Shared handle to the transient failure message channel
#[derive(Debug, Clone)]
pub struct Notifier {
    state: Arc<Mutex<NotifierState>>,
    armed: Arc<Notify>,
    auto_hide: Duration,
}

impl Notifier {
    pub fn new(auto_hide: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(NotifierState::default())),
            armed: Arc::new(Notify::new()),
            auto_hide,
        }
    }

    /// Open with `message`, replacing whatever was shown, and re-arm the deadline
    pub fn show(&self, message: impl Into<String>) {
        let message = message.into();
        log::debug!("notifier: {}", message);
        {
            let mut state = self.state.lock();
            state.notice = Notice {
                is_open: true,
                message,
            };
            state.deadline = Some(Instant::now() + self.auto_hide);
        }
        self.armed.notify_one();
    }

    /// Returns true if this call closed an open notice
    pub fn dismiss(&self, reason: DismissReason) -> bool {
        if reason == DismissReason::BackgroundClick {
            return false;
        }
        let mut state = self.state.lock();
        state.deadline = None;
        if !state.notice.is_open {
            return false;
        }
        state.notice = Notice::default();
        true
    }

    /// Close the notice if its deadline is at or before `now`
    pub fn expire(&self, now: Instant) -> bool {
        let mut state = self.state.lock();
        if !matches!(state.deadline, Some(deadline) if deadline <= now) {
            return false;
        }
        state.deadline = None;
        let was_open = state.notice.is_open;
        state.notice = Notice::default();
        was_open
    }

    /// Drives auto-hide until the returned future is dropped
    pub async fn run_auto_hide(self) {
        loop {
            let deadline = self.state.lock().deadline;
            match deadline {
                Some(deadline) => {
                    tokio::select! {
                        _ = sleep_until(deadline) => {
                            self.expire(Instant::now());
                        }
                        _ = self.armed.notified() => {}
                    }
                }
                None => self.armed.notified().await,
            }
        }
    }

    pub fn notice(&self) -> Notice {
        self.state.lock().notice.clone()
    }

    pub fn is_open(&self) -> bool {
        self.state.lock().notice.is_open
    }

    pub fn message(&self) -> String {
        self.state.lock().notice.message.clone()
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(DEFAULT_AUTO_HIDE)
    }
}
