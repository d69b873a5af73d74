use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendCodeRequest {
    /// Address the code is sent to
    #[validate(email)]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyCodeRequest {
    #[validate(length(min = 1))]
    pub email: String,

    /// Submitted code; its format is checked by comparison, not here
    #[validate(length(min = 1))]
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendCodeResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyCodeResponse {
    pub success: bool,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_code_request_validation() {
        let valid = SendCodeRequest {
            email: "driver@fleet.com".to_string(),
        };
        assert!(valid.validate().is_ok());

        let invalid = SendCodeRequest {
            email: "not-an-email".to_string(),
        };
        assert!(invalid.validate().is_err());

        let empty = SendCodeRequest {
            email: String::new(),
        };
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_verify_code_request_validation() {
        let valid = VerifyCodeRequest {
            email: "driver@fleet.com".to_string(),
            code: "482913".to_string(),
        };
        assert!(valid.validate().is_ok());

        // Malformed codes pass validation and are rejected by the service
        let short_code = VerifyCodeRequest {
            email: "driver@fleet.com".to_string(),
            code: "12".to_string(),
        };
        assert!(short_code.validate().is_ok());

        let empty_code = VerifyCodeRequest {
            email: "driver@fleet.com".to_string(),
            code: String::new(),
        };
        assert!(empty_code.validate().is_err());
    }
}
