//! 面板状态消息：每个面板最多一条，定时过期

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: StatusKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: StatusKind::Error, text: text.into() }
    }

    pub fn is_error(&self) -> bool {
        self.kind == StatusKind::Error
    }
}

/// 过期凭据：只有仍是当前消息时才能清除
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusTicket(u64);

#[derive(Debug, Default)]
pub struct StatusSlot {
    current: Option<StatusMessage>,
    generation: u64,
}

impl StatusSlot {
    /// 替换当前消息，返回用于定时清除的凭据
    pub fn show(&mut self, message: StatusMessage) -> StatusTicket {
        self.generation = self.generation.wrapping_add(1);
        self.current = Some(message);
        StatusTicket(self.generation)
    }

    /// 凭据过时（已有更新的消息）时不做任何事，返回是否清除
    pub fn expire(&mut self, ticket: StatusTicket) -> bool {
        if ticket.0 != self.generation || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }

    pub fn current(&self) -> Option<&StatusMessage> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_and_expire() {
        let mut slot = StatusSlot::default();
        let ticket = slot.show(StatusMessage::success("完成"));
        assert_eq!(slot.current().map(|m| m.text.as_str()), Some("完成"));

        assert!(slot.expire(ticket));
        assert!(slot.current().is_none());
        // 重复过期无效果
        assert!(!slot.expire(ticket));
    }

    #[test]
    fn test_stale_ticket_keeps_newer_message() {
        let mut slot = StatusSlot::default();
        let old = slot.show(StatusMessage::success("第一条"));
        let new = slot.show(StatusMessage::error("第二条"));

        assert!(!slot.expire(old));
        let current = slot.current().expect("应保留新消息");
        assert_eq!(current.text, "第二条");
        assert!(current.is_error());

        assert!(slot.expire(new));
    }
}
