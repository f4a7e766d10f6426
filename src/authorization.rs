//! Credential extraction that never fails.
//!
//! Each operation reads the `Authorization` header, reports exactly one
//! message to the optional [`Logger`] and returns an absent value instead of
//! an error when the header is missing or malformed.

use http::HeaderMap;

use crate::{
    error::AuthorizationErrorKind,
    header::{
        basic_auth::{BasicAuthExtractor, BasicCredentials, DefaultBasicAuthExtractor},
        bearer::{BearerExtractor, DefaultBearerExtractor},
        digest::{DefaultDigestExtractor, DigestCredentials, DigestExtractor},
    },
    logger::Logger,
    token::ExpiryChecker,
};

fn report_success(logger: Option<&dyn Logger>, scheme: &str) {
    if let Some(logger) = logger {
        logger.info(&format!("{scheme} credentials extracted"));
    }
}

fn report_failure(
    logger: Option<&dyn Logger>,
    kind: AuthorizationErrorKind,
    err: &dyn std::error::Error,
) {
    let Some(logger) = logger else {
        return;
    };

    if kind.is_missing() {
        logger.error("Authorization header missing");
    } else {
        logger.error(&format!("Invalid Authorization header: {err}"));
    }
}

/// Username and password of a `Basic` header, or [`BasicCredentials::absent`].
pub fn basic_credentials(headers: &HeaderMap, logger: Option<&dyn Logger>) -> BasicCredentials {
    match DefaultBasicAuthExtractor::new().extract_basic_auth(headers) {
        Ok(credentials) => {
            report_success(logger, "Basic");

            credentials.into()
        }
        Err(err) => {
            report_failure(logger, err.kind(), &err);

            BasicCredentials::absent()
        }
    }
}

/// The raw token of a `Bearer` header. It is neither decoded nor verified.
pub fn bearer_token(headers: &HeaderMap, logger: Option<&dyn Logger>) -> Option<String> {
    match DefaultBearerExtractor::new().extract_bearer(headers) {
        Ok(token) => {
            report_success(logger, "Bearer");

            Some(token.to_string())
        }
        Err(err) => {
            report_failure(logger, err.kind(), &err);

            None
        }
    }
}

/// The credential fields of a `Digest` header, or [`DigestCredentials::absent`].
///
/// Success is reported as soon as the scheme matches, however many fields
/// were found.
pub fn digest_credentials(headers: &HeaderMap, logger: Option<&dyn Logger>) -> DigestCredentials {
    match DefaultDigestExtractor::new().extract_digest(headers) {
        Ok(params) => {
            report_success(logger, "Digest");

            DigestCredentials::from_params(&params)
        }
        Err(err) => {
            report_failure(logger, err.kind(), &err);

            DigestCredentials::absent()
        }
    }
}

/// Whether the `exp` claim of `token` lies in the past.
///
/// Tokens that cannot be decoded are reported as expired. The signature is
/// not verified.
pub fn is_token_expired(token: &str) -> bool {
    ExpiryChecker::new().is_expired(token)
}

#[cfg(test)]
mod tests {
    use base64::{engine::general_purpose::STANDARD, Engine};
    use http::{header::AUTHORIZATION, HeaderValue};

    use super::*;
    use crate::logger::MockLogger;

    fn headers(authorization: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(authorization).expect("valid header value"),
        );
        headers
    }

    fn logs_info_once(expected: &'static str) -> MockLogger {
        let mut logger = MockLogger::new();
        logger
            .expect_info()
            .withf(move |message| message == expected)
            .times(1)
            .return_const(());
        logger.expect_error().never();
        logger
    }

    fn logs_error_once(expected: &'static str) -> MockLogger {
        let mut logger = MockLogger::new();
        logger.expect_info().never();
        logger
            .expect_error()
            .withf(move |message| message.starts_with(expected))
            .times(1)
            .return_const(());
        logger
    }

    #[test]
    fn basic_credentials_are_extracted() {
        let headers = headers(&format!("Basic {}", STANDARD.encode("username:password")));
        let logger = logs_info_once("Basic credentials extracted");

        let credentials = basic_credentials(&headers, Some(&logger));

        assert_eq!(credentials.username(), Some("username"));
        assert_eq!(credentials.password(), Some("password"));
    }

    #[test]
    fn basic_password_may_contain_colons() {
        let headers = headers(&format!("Basic {}", STANDARD.encode("alice:pa:ss")));

        let credentials = basic_credentials(&headers, None);

        assert_eq!(
            credentials.into_pair(),
            Some(("alice".into(), "pa:ss".into()))
        );
    }

    #[test]
    fn basic_without_colon_is_absent() {
        let headers = headers(&format!("Basic {}", STANDARD.encode("invalid_credentials")));
        let logger = logs_error_once("Invalid Authorization header");

        assert!(basic_credentials(&headers, Some(&logger)).is_absent());
    }

    #[test]
    fn basic_with_malformed_base64_is_absent() {
        let logger = logs_error_once("Invalid Authorization header");

        assert!(basic_credentials(&headers("Basic %%%not-base64"), Some(&logger)).is_absent());
    }

    #[test]
    fn basic_with_other_scheme_is_absent() {
        let logger = logs_error_once("Invalid Authorization header");

        assert!(basic_credentials(&headers("Bearer abc"), Some(&logger)).is_absent());
    }

    #[test]
    fn bearer_token_is_extracted() {
        let logger = logs_info_once("Bearer credentials extracted");

        assert_eq!(
            bearer_token(&headers("Bearer valid_token"), Some(&logger)).as_deref(),
            Some("valid_token")
        );
    }

    #[test]
    fn bearer_without_scheme_is_absent() {
        let logger = logs_error_once("Invalid Authorization header");

        assert_eq!(
            bearer_token(&headers("InvalidBearerToken"), Some(&logger)),
            None
        );
    }

    #[test]
    fn digest_credentials_are_extracted() {
        let headers = headers(
            r#"Digest username="user", realm="realm", nonce="nonce", uri="/uri", response="response", opaque="opaque""#,
        );
        let logger = logs_info_once("Digest credentials extracted");

        let credentials = digest_credentials(&headers, Some(&logger));

        assert_eq!(credentials.username(), Some("user"));
        assert_eq!(credentials.realm(), Some("realm"));
        assert_eq!(credentials.nonce(), Some("nonce"));
        assert_eq!(credentials.uri(), Some("/uri"));
        assert_eq!(credentials.response(), Some("response"));
        assert_eq!(credentials.opaque(), Some("opaque"));
    }

    #[test]
    fn digest_missing_key_leaves_only_that_field_absent() {
        let headers = headers(
            r#"Digest username="user", realm="realm", nonce="nonce", uri="/uri", response="response""#,
        );

        let credentials = digest_credentials(&headers, None);

        assert_eq!(credentials.username(), Some("user"));
        assert_eq!(credentials.realm(), Some("realm"));
        assert_eq!(credentials.nonce(), Some("nonce"));
        assert_eq!(credentials.uri(), Some("/uri"));
        assert_eq!(credentials.response(), Some("response"));
        assert_eq!(credentials.opaque(), None);
    }

    #[test]
    fn digest_skips_malformed_params() {
        let headers = headers(r#"Digest garbage, username="user", =orphan"#);
        let logger = logs_info_once("Digest credentials extracted");

        let credentials = digest_credentials(&headers, Some(&logger));

        assert_eq!(credentials.username(), Some("user"));
        assert_eq!(credentials.realm(), None);
    }

    #[test]
    fn digest_last_duplicate_key_wins() {
        let headers = headers(r#"Digest username="first", username="second""#);

        assert_eq!(
            digest_credentials(&headers, None).username(),
            Some("second")
        );
    }

    #[test]
    fn digest_with_other_scheme_is_absent() {
        let logger = logs_error_once("Invalid Authorization header");

        assert!(digest_credentials(&headers("InvalidHeader"), Some(&logger)).is_absent());
    }

    #[test]
    fn missing_header_is_logged_as_missing() {
        let empty = HeaderMap::new();

        let logger = logs_error_once("Authorization header missing");
        assert!(basic_credentials(&empty, Some(&logger)).is_absent());

        let logger = logs_error_once("Authorization header missing");
        assert_eq!(bearer_token(&empty, Some(&logger)), None);

        let logger = logs_error_once("Authorization header missing");
        assert!(digest_credentials(&empty, Some(&logger)).is_absent());
    }

    #[test]
    fn unparsable_token_is_expired() {
        assert!(is_token_expired("definitely.not.a-jwt"));
    }
}
