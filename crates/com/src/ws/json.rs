use {
    crate::ComError,
    serde::{Serialize, de::DeserializeOwned},
    tokio_websockets::Message,
};

pub const MAX_MESSAGE_SIZE: usize = 16 * 1024 * 1024; // 16 MB

/// Serialize `value` into a JSON text message.
pub fn encode<T: Serialize>(value: &T) -> Result<Message, ComError> {
    let text = serde_json::to_string(value)?;
    if text.len() > MAX_MESSAGE_SIZE {
        return Err(ComError::MessageTooLarge(text.len()));
    }
    Ok(Message::text(text))
}

/// Parse a JSON text or binary message.
///
/// Returns `None` for ping, pong and close frames, which carry no value.
pub fn decode<T: DeserializeOwned>(msg: Message) -> Option<Result<T, ComError>> {
    if !msg.is_text() && !msg.is_binary() {
        return None;
    }
    let payload = msg.into_payload();
    if payload.len() > MAX_MESSAGE_SIZE {
        return Some(Err(ComError::MessageTooLarge(payload.len())));
    }
    Some(serde_json::from_slice(&payload).map_err(ComError::from))
}
