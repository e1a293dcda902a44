use iplookup_rs::LookupError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Error fetching public IP: {0}")]
    PublicIp(#[source] LookupError),
    #[error("{}", describe_lookup(.0))]
    Lookup(#[source] LookupError),
    #[error("Failed to serialize response: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

fn describe_lookup(err: &LookupError) -> String {
    match err {
        LookupError::HttpError(_) | LookupError::ApiError { .. } => {
            format!("Error occurred during request: {err}")
        }
        LookupError::Decode(_) => format!("Error decoding JSON response: {err}"),
        _ => format!("An unexpected error occurred: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_error() -> serde_json::Error {
        serde_json::from_str::<serde_json::Value>("{oops").unwrap_err()
    }

    #[test]
    fn lookup_messages_follow_failure_kind() {
        let api = AppError::Lookup(LookupError::ApiError {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            body: "boom".into(),
        });
        assert!(api
            .to_string()
            .starts_with("Error occurred during request: API returned error (500"));

        let decode = AppError::Lookup(LookupError::Decode(decode_error()));
        assert!(decode.to_string().starts_with("Error decoding JSON response:"));

        let other = AppError::Lookup(LookupError::Other("weird".into()));
        assert_eq!(
            other.to_string(),
            "An unexpected error occurred: Unexpected error: weird"
        );
    }

    #[test]
    fn public_ip_message() {
        let err = AppError::PublicIp(LookupError::MissingIp);
        assert_eq!(
            err.to_string(),
            "Error fetching public IP: Response did not contain an `ip` field"
        );
    }
}
