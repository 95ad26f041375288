use std::fmt;

use reqwest::StatusCode;

/// Non-success answer from the server hosting report details.
pub struct ApiError {
    code: StatusCode,
    url: String,
}

impl std::fmt::Debug for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Code: {:?}, Url: {:?}", self.code, self.url)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} from {}", self.code, self.url)
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    pub fn new(code: StatusCode, url: String) -> Self {
        ApiError { code, url }
    }

    pub fn code(&self) -> StatusCode {
        self.code
    }
}
