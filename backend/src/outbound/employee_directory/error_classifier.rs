//! Classification of non-success upstream responses.
//!
//! Only 404 and 429 are handled as domain conditions. A 404 is ambiguous:
//! the directory answers it for unknown records, but so does any
//! intermediary that does not know the path. The body shape decides which
//! one answered, and anything unexpected fails loudly.

use reqwest::StatusCode;
use serde::de::IgnoredAny;
use tracing::info;

use super::dto::EnvelopeDto;
use crate::domain::ports::EmployeeDirectoryError;

/// Outcome of classifying one error response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum UpstreamFailure {
    /// The directory reported that no record matches.
    NotFound,
    /// The directory asked the caller to back off.
    RateLimited,
    /// Neither of the above; the call must fail as an internal error.
    Unclassified { status: u16, body_preview: String },
}

/// Result of the side-effect-free attempt to read a body as an envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
enum DecodedBody {
    Envelope { has_status: bool, has_error: bool },
    Undecodable,
}

impl DecodedBody {
    fn decode(body: &[u8]) -> Self {
        match serde_json::from_slice::<EnvelopeDto<IgnoredAny>>(body) {
            Ok(envelope) => Self::Envelope {
                has_status: envelope.status.is_some(),
                has_error: envelope.error.is_some(),
            },
            Err(_) => Self::Undecodable,
        }
    }

    fn is_directory_not_found(&self) -> bool {
        matches!(
            self,
            Self::Envelope {
                has_status: true,
                has_error: false,
            }
        )
    }
}

/// Decide what a non-success response means.
pub(super) fn classify(status: StatusCode, body: &[u8]) -> UpstreamFailure {
    let failure = match status {
        StatusCode::TOO_MANY_REQUESTS => UpstreamFailure::RateLimited,
        StatusCode::NOT_FOUND if DecodedBody::decode(body).is_directory_not_found() => {
            UpstreamFailure::NotFound
        }
        _ => UpstreamFailure::Unclassified {
            status: status.as_u16(),
            body_preview: body_preview(body),
        },
    };
    info!(status = status.as_u16(), outcome = ?failure, "classified upstream error response");
    failure
}

impl From<UpstreamFailure> for EmployeeDirectoryError {
    fn from(value: UpstreamFailure) -> Self {
        match value {
            UpstreamFailure::NotFound => Self::not_found("directory reported no matching record"),
            UpstreamFailure::RateLimited => Self::rate_limited("directory returned 429"),
            UpstreamFailure::Unclassified {
                status,
                body_preview,
            } => Self::unhandled_status(status, body_preview),
        }
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
mod tests {
    //! Coverage for status handling and 404 disambiguation.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::record_not_found(r#"{"data":null,"status":"Not found","error":null}"#)]
    #[case::error_member_absent(r#"{"status":"Not found"}"#)]
    fn directory_404_with_status_and_no_error_is_not_found(#[case] body: &str) {
        assert_eq!(
            classify(StatusCode::NOT_FOUND, body.as_bytes()),
            UpstreamFailure::NotFound
        );
    }

    #[rstest]
    #[case::html_page("<html><body>404 Not Found</body></html>")]
    #[case::empty_body("")]
    #[case::error_present(r#"{"status":"Not found","error":"no route"}"#)]
    #[case::status_missing(r#"{"data":null,"error":null}"#)]
    #[case::spring_style(r#"{"timestamp":"2024-01-01","path":"/api/v1/employee"}"#)]
    fn other_404_bodies_are_unclassified(#[case] body: &str) {
        let failure = classify(StatusCode::NOT_FOUND, body.as_bytes());
        assert!(
            matches!(failure, UpstreamFailure::Unclassified { status: 404, .. }),
            "unexpected classification: {failure:?}"
        );
    }

    #[rstest]
    #[case("")]
    #[case("<html>slow down</html>")]
    #[case(r#"{"error":"whatever"}"#)]
    fn too_many_requests_is_rate_limited_regardless_of_body(#[case] body: &str) {
        assert_eq!(
            classify(StatusCode::TOO_MANY_REQUESTS, body.as_bytes()),
            UpstreamFailure::RateLimited
        );
    }

    #[rstest]
    #[case(StatusCode::BAD_REQUEST)]
    #[case(StatusCode::INTERNAL_SERVER_ERROR)]
    #[case(StatusCode::SERVICE_UNAVAILABLE)]
    fn other_statuses_are_unclassified(#[case] status: StatusCode) {
        let failure = classify(status, br#"{"status":"x","error":null}"#);
        assert!(matches!(failure, UpstreamFailure::Unclassified { .. }));
    }

    #[rstest]
    fn unclassified_error_names_the_status_code() {
        let error = EmployeeDirectoryError::from(classify(StatusCode::NOT_FOUND, b"<html/>"));
        assert!(
            error.to_string().starts_with("cannot handle http code: 404"),
            "{error}"
        );
    }

    #[rstest]
    fn long_bodies_are_truncated_in_previews() {
        let body = "x".repeat(400);
        let preview = body_preview(body.as_bytes());
        assert!(preview.ends_with("..."));
        assert_eq!(preview.chars().count(), 163);
    }
}
