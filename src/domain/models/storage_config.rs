/// Static access-key/secret-key pair for S3-compatible services
#[derive(Clone, PartialEq, Eq)]
pub struct StaticCredentials {
    pub access_key: String,
    pub secret_key: String,
}

impl StaticCredentials {
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
        }
    }
}

impl std::fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticCredentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

/// Where object storage requests go and how they are signed.
///
/// With neither field set the provider's default endpoint and ambient
/// credentials are used. An endpoint routes every request to a self-hosted
/// S3-compatible service instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorageConfig {
    pub endpoint: Option<String>,
    pub credentials: Option<StaticCredentials>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_secret() {
        let credentials = StaticCredentials::new("minioadmin", "hunter2");
        let debug = format!("{:?}", credentials);

        assert!(debug.contains("minioadmin"));
        assert!(!debug.contains("hunter2"));
    }
}
