use time::OffsetDateTime;

/// Author of a chat message. Closed set: the generation API only accepts
/// two conversational roles, so nothing else is representable here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Bot,
}

/// One transcript entry. Immutable once created.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: u64,
    pub role: Role,
    pub text: String,
    pub timestamp: OffsetDateTime,
}
