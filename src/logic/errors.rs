use anyhow::Error;

use crate::api::ApiError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorType {
    ConnectionRefused,
    Timeout,
    Unauthorized, // HTTP 401/403
    NotFound,     // HTTP 404
    ServerError,  // HTTP 500+
    NetworkError, // DNS, routing, etc.
    Other,
}

fn classify_status(status: u16) -> ErrorType {
    match status {
        401 | 403 => ErrorType::Unauthorized,
        404 => ErrorType::NotFound,
        500..=599 => ErrorType::ServerError,
        _ => ErrorType::Other,
    }
}

/// Classify an error based on its type and error chain
pub fn classify_error(error: &Error) -> ErrorType {
    // Explicit service responses first
    if let Some(ApiError::Status { status, .. }) = error.downcast_ref::<ApiError>() {
        return classify_status(*status);
    }

    let mut chain_msg = String::new();
    for cause in error.chain() {
        if let Some(reqwest_err) = cause.downcast_ref::<reqwest::Error>() {
            if reqwest_err.is_timeout() {
                return ErrorType::Timeout;
            }
            if let Some(status) = reqwest_err.status() {
                return classify_status(status.as_u16());
            }
        }
        chain_msg.push_str(&cause.to_string().to_lowercase());
        chain_msg.push(' ');
    }

    if chain_msg.contains("connection refused") {
        return ErrorType::ConnectionRefused;
    }
    if chain_msg.contains("timeout") || chain_msg.contains("timed out") {
        return ErrorType::Timeout;
    }
    if chain_msg.contains("dns") || chain_msg.contains("network") {
        return ErrorType::NetworkError;
    }

    ErrorType::Other
}

/// Format error message for display - show the root cause, not the context wrappers
pub fn format_error_message(error: &Error) -> String {
    if let Some(api_err) = error.downcast_ref::<ApiError>() {
        return api_err.to_string();
    }

    // Walk the error chain to find reqwest::Error (most informative for network errors)
    for cause in error.chain() {
        if let Some(reqwest_err) = cause.downcast_ref::<reqwest::Error>() {
            return reqwest_err.to_string();
        }
    }

    error
        .chain()
        .last()
        .map(|cause| cause.to_string())
        .unwrap_or_else(|| error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_connection_refused() {
        let err = anyhow::anyhow!("connection refused (os error 111)");
        assert_eq!(classify_error(&err), ErrorType::ConnectionRefused);
    }

    #[test]
    fn test_classify_connection_refused_in_chain() {
        let err = anyhow::anyhow!("Connection Refused").context("Failed to fetch PDF list");
        assert_eq!(classify_error(&err), ErrorType::ConnectionRefused);
    }

    #[test]
    fn test_classify_timeout() {
        let err = anyhow::anyhow!("request timed out");
        assert_eq!(classify_error(&err), ErrorType::Timeout);
    }

    #[test]
    fn test_classify_dns_error() {
        let err = anyhow::anyhow!("dns lookup failed");
        assert_eq!(classify_error(&err), ErrorType::NetworkError);
    }

    #[test]
    fn test_classify_api_status() {
        let not_found: Error = ApiError::Status {
            status: 404,
            body: "PDF not found".to_string(),
        }
        .into();
        assert_eq!(classify_error(&not_found), ErrorType::NotFound);

        let server: Error = ApiError::Status {
            status: 502,
            body: String::new(),
        }
        .into();
        assert_eq!(classify_error(&server), ErrorType::ServerError);

        let forbidden: Error = ApiError::Status {
            status: 403,
            body: String::new(),
        }
        .into();
        assert_eq!(classify_error(&forbidden), ErrorType::Unauthorized);
    }

    #[test]
    fn test_classify_other_error() {
        let err = anyhow::anyhow!("some random error");
        assert_eq!(classify_error(&err), ErrorType::Other);
    }

    #[test]
    fn test_format_shows_root_cause() {
        let inner = anyhow::anyhow!("tcp connect error");
        let outer = inner.context("Failed to upload PDF");
        assert_eq!(format_error_message(&outer), "tcp connect error");
    }

    #[test]
    fn test_format_api_status() {
        let err: Error = ApiError::Status {
            status: 409,
            body: "PDF already exists".to_string(),
        }
        .into();
        assert_eq!(format_error_message(&err), "HTTP 409: PDF already exists");
    }

    #[test]
    fn test_format_preserves_simple_errors() {
        let err = anyhow::anyhow!("custom error message");
        assert_eq!(format_error_message(&err), "custom error message");
    }
}
