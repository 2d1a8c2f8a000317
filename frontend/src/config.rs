const API_PREFIX: &str = "/api";

/// Base URL of the backend, without a trailing slash.
///
/// Empty means same origin: in development Trunk proxies `/api` to the local
/// backend, in production the site and the API are served together.
/// Set `BACKEND_URL` at build time to point somewhere else.
pub fn get_backend_url() -> &'static str {
    backend_url_from(option_env!("BACKEND_URL"))
}

fn backend_url_from(value: Option<&'static str>) -> &'static str {
    value.map(|url| url.trim_end_matches('/')).unwrap_or("")
}

pub fn api_url(path: &str) -> String {
    format!("{}{}{}", get_backend_url(), API_PREFIX, path)
}

pub fn contact_endpoint() -> String {
    api_url("/contact/send")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_url_defaults_to_same_origin() {
        assert_eq!(backend_url_from(None), "");
    }

    #[test]
    fn backend_url_override_drops_trailing_slash() {
        assert_eq!(
            backend_url_from(Some("https://g-logistics.site/")),
            "https://g-logistics.site"
        );
    }

    #[test]
    fn contact_endpoint_sits_under_api_prefix() {
        assert!(contact_endpoint().ends_with("/api/contact/send"));
    }
}
