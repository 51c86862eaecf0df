use julius_types::RelayConfig;

/// Inbound authorization settings, captured once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecurityConfig {
    /// Expected bearer credential. `None` means every request is allowed.
    pub auth_token: Option<String>,
}

impl SecurityConfig {
    pub fn new(auth_token: Option<String>) -> Self {
        Self { auth_token: auth_token.filter(|t| !t.is_empty()) }
    }

    pub fn from_relay_config(config: &RelayConfig) -> Self {
        Self::new(config.auth_token.clone())
    }

    pub fn auth_enabled(&self) -> bool {
        self.auth_token.is_some()
    }
}
