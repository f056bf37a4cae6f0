//! Contact flow - turn a message to a founder into a mailto URL.
//!
//! The contact mechanism is an outbound user action with no delivery or
//! receipt guarantee; the board only composes the link.

use crate::idea::Idea;

/// Build the `mailto:` URL for contacting an idea's founder.
pub fn collaboration_mailto(idea: &Idea, message: &str) -> String {
    let subject = encode_component(&format!(
        "Let's collaborate on \"{}\" – via Atlas",
        idea.title
    ));
    let body = encode_component(message);
    format!(
        "mailto:{}?subject={}&body={}",
        idea.founder.email, subject, body
    )
}

/// Percent-encode a URI component, keeping the characters
/// `encodeURIComponent` keeps: alphanumerics and `- _ . ! ~ * ' ( )`.
fn encode_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' => out.push(byte as char),
            b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}
