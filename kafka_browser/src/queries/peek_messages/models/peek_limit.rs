use std::time::Duration;

#[derive(Debug, Copy, Clone)]
pub struct PeekLimit {
    pub max_messages: u64,
    pub max_wait: Duration,
}
