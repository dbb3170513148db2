use uuid::Uuid;

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            Self::Success => "check-circle",
            Self::Error => "alert-circle",
            Self::Warning => "alert-triangle",
            Self::Info => "info",
        }
    }
}

/// Unique toast identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(Uuid);

impl ToastId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

/// A message to show, before it becomes a timed toast
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

impl Notice {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }
}

/// A displayed notification with its own lifetime
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub severity: Severity,
    pub message: String,
    pub ttl_ms: u32,
    /// Wall-clock push time (ms since epoch)
    pub created_at_ms: f64,
}

impl Toast {
    pub fn new(notice: Notice, ttl_ms: u32, now_ms: f64) -> Self {
        Self {
            id: ToastId::new_v4(),
            severity: notice.severity,
            message: notice.message,
            ttl_ms,
            created_at_ms: now_ms,
        }
    }

    pub fn expires_at_ms(&self) -> f64 {
        self.created_at_ms + f64::from(self.ttl_ms)
    }

    pub fn is_expired(&self, now_ms: f64) -> bool {
        now_ms >= self.expires_at_ms()
    }
}

/// Ordered toast stack, oldest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a toast; duplicates of the same message are kept apart
    pub fn push(&mut self, toast: Toast) -> ToastId {
        let id = toast.id;
        self.toasts.push(toast);
        id
    }

    /// Remove a toast; returns false when it was already gone
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    /// Drop every toast whose lifetime has elapsed at `now_ms`
    pub fn expire(&mut self, now_ms: f64) -> usize {
        let before = self.toasts.len();
        self.toasts.retain(|t| !t.is_expired(now_ms));
        before - self.toasts.len()
    }

    /// Timer step for one toast: expire everything due at `now_ms`, then
    /// return how long `id` still has to live, or `None` once it is gone
    pub fn tick(&mut self, id: ToastId, now_ms: f64) -> Option<u32> {
        self.expire(now_ms);
        self.toasts
            .iter()
            .find(|t| t.id == id)
            .map(|t| (t.expires_at_ms() - now_ms).ceil().max(1.0) as u32)
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn contains(&self, id: ToastId) -> bool {
        self.toasts.iter().any(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Severity; 4] = [
        Severity::Success,
        Severity::Error,
        Severity::Warning,
        Severity::Info,
    ];

    #[test]
    fn test_toast_lives_exactly_its_ttl() {
        for severity in ALL {
            let mut queue = ToastQueue::new();
            let id = queue.push(Toast::new(Notice::new(severity, "saved"), 3500, 1_000.0));

            assert_eq!(queue.tick(id, 1_000.0 + 3_499.0), Some(1));
            assert!(queue.contains(id), "{:?} expired early", severity);

            assert_eq!(queue.tick(id, 1_000.0 + 3_501.0), None);
            assert!(!queue.contains(id), "{:?} outlived its ttl", severity);
        }
    }

    #[test]
    fn test_early_timer_rearms_for_the_remainder() {
        let mut queue = ToastQueue::new();
        let id = queue.push(Toast::new(Notice::info("slow clock"), 3500, 0.0));

        // Timer fired 400 ms early: wait out the rest, then it is removed
        let rest = queue.tick(id, 3_100.0);
        assert_eq!(rest, Some(400));
        assert_eq!(queue.tick(id, 3_100.0 + f64::from(rest.unwrap_or(0))), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_tick_expires_other_due_toasts() {
        let mut queue = ToastQueue::new();
        let short = queue.push(Toast::new(Notice::info("short"), 500, 0.0));
        let long = queue.push(Toast::new(Notice::info("long"), 5_000, 0.0));

        assert_eq!(queue.tick(long, 600.0), Some(4_400));
        assert!(!queue.contains(short));
        assert!(queue.contains(long));
    }

    #[test]
    fn test_tick_after_dismiss_stops_the_timer() {
        let mut queue = ToastQueue::new();
        let id = queue.push(Toast::new(Notice::warning("closed"), 3500, 0.0));
        assert!(queue.dismiss(id));
        assert_eq!(queue.tick(id, 100.0), None);
    }

    #[test]
    fn test_insertion_order_and_independent_timers() {
        let mut queue = ToastQueue::new();
        let first = queue.push(Toast::new(Notice::info("first"), 1_000, 0.0));
        let second = queue.push(Toast::new(Notice::info("second"), 5_000, 100.0));
        let third = queue.push(Toast::new(Notice::info("third"), 500, 200.0));

        let ids: Vec<ToastId> = queue.toasts().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![first, second, third]);

        assert_eq!(queue.expire(750.0), 1);
        let ids: Vec<ToastId> = queue.toasts().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![first, second]);
    }

    #[test]
    fn test_duplicate_messages_are_not_coalesced() {
        let mut queue = ToastQueue::new();
        let a = queue.push(Toast::new(Notice::error("Server error"), 3500, 0.0));
        let b = queue.push(Toast::new(Notice::error("Server error"), 3500, 0.0));
        assert_ne!(a, b);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_dismiss_is_idempotent() {
        let mut queue = ToastQueue::new();
        let keep = queue.push(Toast::new(Notice::success("kept"), 3500, 0.0));
        let gone = queue.push(Toast::new(Notice::success("gone"), 3500, 0.0));

        assert!(queue.dismiss(gone));
        assert!(!queue.dismiss(gone));
        assert!(queue.contains(keep));
        assert_eq!(queue.len(), 1);
    }
}
