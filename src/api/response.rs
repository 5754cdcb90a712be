use serde::Serialize;

/// Bare acknowledgement body returned by every toggle endpoint.
#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

impl OkResponse {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}

/// Acknowledgement that echoes the flag value that was applied.
#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub ok: bool,
    pub enabled: bool,
}

impl ToggleResponse {
    pub fn enabled(enabled: bool) -> Self {
        Self { ok: true, enabled }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_body_is_exactly_ok_true() {
        let json = serde_json::to_string(&OkResponse::ok()).unwrap();
        assert_eq!(json, r#"{"ok":true}"#);
    }

    #[test]
    fn toggle_body_echoes_flag() {
        let json = serde_json::to_string(&ToggleResponse::enabled(false)).unwrap();
        assert_eq!(json, r#"{"ok":true,"enabled":false}"#);
    }
}
