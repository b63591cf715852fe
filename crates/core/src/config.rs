//! Store configuration.
//!
//! Configuration is resolved once at process startup (from the environment, in the binary) and
//! then handed to the store adapter. Nothing in this crate reads environment variables while
//! handling a request.

use crate::constants::{DEFAULT_DB_DATABASE, DEFAULT_DB_NAMESPACE, DEFAULT_DB_URL};
use crate::{RecipeError, RecipeResult};

/// Root credentials for the document store.
#[derive(Clone, Debug)]
pub struct StoreCredentials {
    username: String,
    password: String,
}

impl StoreCredentials {
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

/// Document store connection settings resolved at startup.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    url: String,
    namespace: String,
    database: String,
    credentials: Option<StoreCredentials>,
}

impl StoreConfig {
    /// Create a new `StoreConfig`.
    ///
    /// Credentials are only kept when both `username` and `password` are given.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeError::InvalidInput`] if the url, namespace or database is blank.
    pub fn new(
        url: String,
        namespace: String,
        database: String,
        username: Option<String>,
        password: Option<String>,
    ) -> RecipeResult<Self> {
        for (name, value) in [("url", &url), ("namespace", &namespace), ("database", &database)] {
            if value.trim().is_empty() {
                return Err(RecipeError::InvalidInput(format!(
                    "store {name} cannot be empty"
                )));
            }
        }

        let credentials = match (username, password) {
            (Some(username), Some(password)) => Some(StoreCredentials { username, password }),
            _ => None,
        };

        Ok(Self {
            url,
            namespace,
            database,
            credentials,
        })
    }

    /// Builds a config from optional raw values, falling back to the defaults for unset or
    /// blank values.
    pub fn from_env_values(
        url: Option<String>,
        namespace: Option<String>,
        database: Option<String>,
        username: Option<String>,
        password: Option<String>,
    ) -> RecipeResult<Self> {
        fn or_default(value: Option<String>, default: &str) -> String {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        }

        Self::new(
            or_default(url, DEFAULT_DB_URL),
            or_default(namespace, DEFAULT_DB_NAMESPACE),
            or_default(database, DEFAULT_DB_DATABASE),
            username.filter(|v| !v.is_empty()),
            password.filter(|v| !v.is_empty()),
        )
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    pub fn credentials(&self) -> Option<&StoreCredentials> {
        self.credentials.as_ref()
    }
}
