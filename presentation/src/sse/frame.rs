//! SSE frame encoding.
//!
//! One event per blank-line-terminated block:
//!
//! ```text
//! event: <kind>
//! data: <payload line>
//!
//! ```
//!
//! A payload spanning several lines (split on `\r\n`, `\r` or `\n`) becomes
//! several `data:` lines, which a compliant client rejoins with `\n`.

use zenbot_domain::Event;

/// Encode one event as a complete frame.
pub fn encode(event: &Event) -> String {
    let mut frame = String::with_capacity(event.payload.len() + 32);
    frame.push_str("event: ");
    frame.push_str(event.kind.as_str());
    frame.push('\n');

    // CRLF, CR and LF all end an SSE line.
    let payload = event.payload.replace("\r\n", "\n").replace('\r', "\n");
    for line in payload.split('\n') {
        frame.push_str("data: ");
        frame.push_str(line);
        frame.push('\n');
    }

    frame.push('\n');
    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use zenbot_domain::MessageId;

    #[test]
    fn test_status_frame() {
        assert_eq!(
            encode(&Event::status("Build Fast argues")),
            "event: status\ndata: Build Fast argues\n\n"
        );
    }

    #[test]
    fn test_message_frame() {
        let event = Event::message(&MessageId::new("zenbot-1"), "Hello world");
        assert_eq!(
            encode(&event),
            "event: message\ndata: message_id: zenbot-1, content: Hello world\n\n"
        );
    }

    #[test]
    fn test_multiline_payload_stays_in_one_frame() {
        let frame = encode(&Event::error("first\nsecond\r\nthird"));
        assert_eq!(frame, "event: error\ndata: first\ndata: second\ndata: third\n\n");
        assert_eq!(frame.matches("\n\n").count(), 1);
    }

    #[test]
    fn test_bare_carriage_returns_cannot_end_the_frame() {
        let frame = encode(&Event::error("upstream said\r\rno\rthanks\r"));
        assert_eq!(
            frame,
            "event: error\ndata: upstream said\ndata: \ndata: no\ndata: thanks\ndata: \n\n"
        );
        assert!(!frame.contains('\r'));
        assert_eq!(frame.matches("\n\n").count(), 1);
        assert!(frame.ends_with("\n\n"));
    }

    #[test]
    fn test_empty_payload() {
        assert_eq!(encode(&Event::status("")), "event: status\ndata: \n\n");
    }
}
