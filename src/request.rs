use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::language::Language;

fn default_language() -> String {
    Language::default().name().to_string()
}

/// Body of `POST /summarize`
#[derive(Debug, Clone, Deserialize)]
pub struct SummarizeRequest {
    pub groq_api_key: String,
    pub youtube_api_key: String,
    pub url: String,
    #[serde(default = "default_language")]
    pub language: String,
}

/// Body of a successful `POST /summarize`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
}

/// A request whose URL and language have passed validation
#[derive(Debug, Clone)]
pub struct ValidatedRequest {
    pub groq_api_key: String,
    pub youtube_api_key: String,
    pub url: String,
    pub language: Language,
}

impl SummarizeRequest {
    /// Check URL syntax first, then the language, without touching the network
    pub fn validate(self) -> Result<ValidatedRequest, ApiError> {
        if !is_valid_url(&self.url) {
            return Err(ApiError::InvalidUrl);
        }
        let language = self.language.parse::<Language>().map_err(|_| ApiError::InvalidLanguage)?;
        Ok(ValidatedRequest {
            groq_api_key: self.groq_api_key,
            youtube_api_key: self.youtube_api_key,
            url: self.url,
            language,
        })
    }
}

/// Absolute http(s) URL whose host is an IP, `localhost` or a dotted domain.
/// Whitespace anywhere is rejected rather than trimmed or percent-encoded.
fn is_valid_url(input: &str) -> bool {
    if input.chars().any(char::is_whitespace) {
        return false;
    }
    let Ok(url) = url::Url::parse(input) else {
        return false;
    };
    if !matches!(url.scheme(), "http" | "https") {
        return false;
    }
    match url.host() {
        Some(url::Host::Domain(domain)) => {
            domain == "localhost" || (domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.'))
        }
        Some(url::Host::Ipv4(_)) | Some(url::Host::Ipv6(_)) => true,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(url: &str, language: &str) -> SummarizeRequest {
        SummarizeRequest {
            groq_api_key: "gsk_test".to_string(),
            youtube_api_key: "AIza_test".to_string(),
            url: url.to_string(),
            language: language.to_string(),
        }
    }

    #[test]
    fn test_language_defaults_to_english() {
        let json = r#"{"groq_api_key":"g","youtube_api_key":"y","url":"https://youtu.be/dQw4w9WgXcQ"}"#;
        let req: SummarizeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.language, "English");
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let json = r#"{"groq_api_key":"g","url":"https://youtu.be/dQw4w9WgXcQ"}"#;
        assert!(serde_json::from_str::<SummarizeRequest>(json).is_err());
    }

    #[test]
    fn test_valid_request() {
        let v = request("https://www.youtube.com/watch?v=dQw4w9WgXcQ", "French")
            .validate()
            .unwrap();
        assert_eq!(v.language, Language::French);
        assert_eq!(v.groq_api_key, "gsk_test");
    }

    #[test]
    fn test_invalid_url() {
        let err = request("not a url", "English").validate().unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl));
    }

    #[test]
    fn test_non_http_scheme_is_invalid() {
        assert!(matches!(
            request("mailto:someone@example.com", "English").validate(),
            Err(ApiError::InvalidUrl)
        ));
        assert!(matches!(
            request("ftp://example.com/file", "English").validate(),
            Err(ApiError::InvalidUrl)
        ));
    }

    #[test]
    fn test_surrounding_whitespace_is_invalid() {
        for url in [
            "  https://www.youtube.com/watch?v=dQw4w9WgXcQ  ",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ\n",
            "\thttps://www.youtube.com/watch?v=dQw4w9WgXcQ",
        ] {
            assert!(
                matches!(request(url, "English").validate(), Err(ApiError::InvalidUrl)),
                "{url:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_inner_whitespace_is_invalid() {
        let err = request("https://www.youtube.com/watch?v=dQw4w9WgXcQ and more text", "English")
            .validate()
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl));
    }

    #[test]
    fn test_single_label_host_is_invalid() {
        let err = request("http://youtube/watch?v=dQw4w9WgXcQ", "English")
            .validate()
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl));
    }

    #[test]
    fn test_ip_and_localhost_hosts_are_valid() {
        assert!(request("http://127.0.0.1:8080/watch?v=dQw4w9WgXcQ", "English").validate().is_ok());
        assert!(request("http://[::1]/watch?v=dQw4w9WgXcQ", "English").validate().is_ok());
        assert!(request("http://localhost/watch?v=dQw4w9WgXcQ", "English").validate().is_ok());
    }

    #[test]
    fn test_invalid_language() {
        let err = request("https://youtu.be/dQw4w9WgXcQ", "Klingon").validate().unwrap_err();
        assert!(matches!(err, ApiError::InvalidLanguage));
    }

    #[test]
    fn test_url_checked_before_language() {
        let err = request("nope", "Klingon").validate().unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl));
    }
}
