pub mod verification;

pub use verification::{SendCodeRequest, SendCodeResponse, VerifyCodeRequest, VerifyCodeResponse};
pub use vt_shared::types::ErrorResponse;
