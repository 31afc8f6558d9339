pub mod credentials;
pub mod loader;
pub mod types;

pub use credentials::{CredentialStatus, SecureString};
pub use loader::ConfigError;
pub use types::{Config, Defaults, DisplayConfig, ProviderConfig};
