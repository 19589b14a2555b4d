use axum::http::{HeaderValue, Method, header};
use std::io;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Creates the CORS layer shared by the API services.
///
/// # Arguments
/// * `allowed_origins` - Comma-separated origin list. `None` (or a `*` entry)
///   accepts any origin by echoing the request's `Origin` back, since a literal
///   wildcard cannot be combined with credentials.
///
/// The layer allows:
/// - Methods: GET, PUT, POST, DELETE, OPTIONS
/// - Headers: Origin, Content-Type, Accept, Authorization
/// - Credentials
///
/// # Errors
/// Returns `InvalidInput` when the list is empty or contains a value that is
/// not a valid header value.
pub fn create_cors_layer(allowed_origins: Option<&str>) -> io::Result<CorsLayer> {
    let allow_origin = match allowed_origins {
        None => AllowOrigin::mirror_request(),
        Some(list) => {
            let entries: Vec<&str> = list
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .collect();

            if entries.is_empty() {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "CORS_ALLOWED_ORIGIN cannot be empty",
                ));
            }

            if entries.contains(&"*") {
                AllowOrigin::mirror_request()
            } else {
                let origins = entries
                    .into_iter()
                    .map(HeaderValue::from_str)
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|e| {
                        io::Error::new(
                            io::ErrorKind::InvalidInput,
                            format!("Invalid CORS_ALLOWED_ORIGIN value: {}", e),
                        )
                    })?;
                AllowOrigin::list(origins)
            }
        }
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ORIGIN,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
        ])
        .allow_credentials(true))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_origin_when_unset() {
        assert!(create_cors_layer(None).is_ok());
    }

    #[test]
    fn test_explicit_origins() {
        assert!(create_cors_layer(Some("http://localhost:3000, https://shop.example.com")).is_ok());
    }

    #[test]
    fn test_wildcard_entry() {
        assert!(create_cors_layer(Some("*")).is_ok());
    }

    #[test]
    fn test_empty_list_is_rejected() {
        let err = create_cors_layer(Some(" , ")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_invalid_header_value_is_rejected() {
        assert!(create_cors_layer(Some("http://bad\norigin")).is_err());
    }
}
