//! Type conversions between core messages and the wire format.

use crate::dto::{WireContent, WireImageUrl, WireMessage, WirePart};
use grok_core::{ContentPart, Message, MessageContent};

/// Converts a core message to the chat completions format.
pub fn to_wire_message(message: &Message) -> WireMessage {
    let content = match message.content() {
        MessageContent::Text(text) => WireContent::Text(text.clone()),
        MessageContent::Parts(parts) => WireContent::Parts(parts.iter().map(to_wire_part).collect()),
    };

    WireMessage {
        role: message.role().to_string(),
        content,
    }
}

/// Converts a list of core messages, preserving order.
pub fn to_wire_messages(messages: &[Message]) -> Vec<WireMessage> {
    messages.iter().map(to_wire_message).collect()
}

fn to_wire_part(part: &ContentPart) -> WirePart {
    match part {
        ContentPart::Text { text } => WirePart::Text { text: text.clone() },
        ContentPart::Image { source, detail } => WirePart::ImageUrl {
            image_url: WireImageUrl {
                url: source.to_url(),
                detail: *detail,
            },
        },
    }
}
