use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AdminLoginResponse {
    pub matched: bool,
    /// Opaque success marker. Not a session credential: no expiry, no
    /// signature, no revocation.
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct AckResponse {
    pub message: String,
}

impl AckResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ack_response_serializes_message() {
        let ack = AckResponse::new("Quiz deleted successfully!");
        let json = serde_json::to_string(&ack).expect("ack should serialize");

        assert_eq!(json, r#"{"message":"Quiz deleted successfully!"}"#);
    }
}
