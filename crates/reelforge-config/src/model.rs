//! Configuration schema for ReelForge.

use serde::{Deserialize, Serialize};

/// Smallest content pool size; the generator batch cannot exceed it.
const MIN_POOL_SIZE: usize = 5;
/// Upper bound on the simulated generation delay.
const MAX_DELAY_MS: u64 = 60_000;

/// Root config for ReelForge.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReelForgeConfig {
    #[serde(default, rename = "$schema")]
    pub schema: Option<String>,
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub notifications: NotificationsConfig,
    #[serde(default = "default_integrations")]
    pub integrations: Vec<IntegrationConfig>,
    #[serde(default)]
    pub preferences: PreferencesConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
}

impl Default for ReelForgeConfig {
    fn default() -> Self {
        Self {
            schema: None,
            profile: ProfileConfig::default(),
            notifications: NotificationsConfig::default(),
            integrations: default_integrations(),
            preferences: PreferencesConfig::default(),
            generator: GeneratorConfig::default(),
        }
    }
}

impl ReelForgeConfig {
    /// Start building a config programmatically with defaults applied.
    pub fn builder() -> ReelForgeConfigBuilder {
        ReelForgeConfigBuilder::new()
    }
}

/// Builder for assembling a `ReelForgeConfig` in code.
#[derive(Debug, Clone)]
pub struct ReelForgeConfigBuilder {
    config: ReelForgeConfig,
}

impl Default for ReelForgeConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReelForgeConfigBuilder {
    /// Create a new builder seeded with default config values.
    pub fn new() -> Self {
        Self {
            config: ReelForgeConfig::default(),
        }
    }

    /// Replace the profile section.
    pub fn profile(mut self, profile: ProfileConfig) -> Self {
        self.config.profile = profile;
        self
    }

    /// Replace the notification toggles.
    pub fn notifications(mut self, notifications: NotificationsConfig) -> Self {
        self.config.notifications = notifications;
        self
    }

    /// Replace the integration list.
    pub fn integrations(mut self, integrations: Vec<IntegrationConfig>) -> Self {
        self.config.integrations = integrations;
        self
    }

    /// Replace the app preferences.
    pub fn preferences(mut self, preferences: PreferencesConfig) -> Self {
        self.config.preferences = preferences;
        self
    }

    /// Replace the generator tunables.
    pub fn generator(mut self, generator: GeneratorConfig) -> Self {
        self.config.generator = generator;
        self
    }

    /// Finalize and return the built `ReelForgeConfig`.
    pub fn build(self) -> ReelForgeConfig {
        self.config
    }
}

/// Account profile shown on the settings screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ProfileConfig {
    #[serde(default = "default_full_name")]
    pub full_name: String,
    #[serde(default = "default_email")]
    pub email: String,
    #[serde(default = "default_business_name")]
    pub business_name: String,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_bio")]
    pub bio: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            full_name: default_full_name(),
            email: default_email(),
            business_name: default_business_name(),
            timezone: default_timezone(),
            bio: default_bio(),
        }
    }
}

fn default_full_name() -> String {
    "Alex Johnson".to_string()
}

fn default_email() -> String {
    "alex@example.com".to_string()
}

fn default_business_name() -> String {
    "Digital Marketing Agency".to_string()
}

fn default_timezone() -> String {
    "EST (UTC-5)".to_string()
}

fn default_bio() -> String {
    "Digital marketing specialist focused on e-commerce growth and social media automation."
        .to_string()
}

/// Notification channel toggles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct NotificationsConfig {
    #[serde(default = "default_true")]
    pub email: bool,
    #[serde(default = "default_true")]
    pub push: bool,
    #[serde(default)]
    pub sms: bool,
    #[serde(default)]
    pub marketing: bool,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            email: true,
            push: true,
            sms: false,
            marketing: false,
        }
    }
}

fn default_true() -> bool {
    true
}

/// A publishing platform integration and its connection state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct IntegrationConfig {
    pub name: String,
    #[serde(default)]
    pub connected: bool,
    #[serde(default)]
    pub description: String,
}

fn default_integrations() -> Vec<IntegrationConfig> {
    vec![
        IntegrationConfig {
            name: "TikTok".to_string(),
            connected: true,
            description: "Auto-upload and analytics".to_string(),
        },
        IntegrationConfig {
            name: "Instagram".to_string(),
            connected: false,
            description: "Cross-platform posting".to_string(),
        },
        IntegrationConfig {
            name: "YouTube Shorts".to_string(),
            connected: true,
            description: "Multi-platform reach".to_string(),
        },
        IntegrationConfig {
            name: "Shopify".to_string(),
            connected: false,
            description: "Product sync and tracking".to_string(),
        },
    ]
}

/// Application-level preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PreferencesConfig {
    #[serde(default = "default_true")]
    pub dark_mode: bool,
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for PreferencesConfig {
    fn default() -> Self {
        Self {
            dark_mode: true,
            language: default_language(),
        }
    }
}

fn default_language() -> String {
    "English (US)".to_string()
}

/// Tunables for the simulated content generator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Simulated generation delay in milliseconds.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    /// Lines per generated batch.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    /// Fixed RNG seed for reproducible output.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            batch_size: default_batch_size(),
            seed: None,
        }
    }
}

fn default_delay_ms() -> u64 {
    2_000
}

fn default_batch_size() -> usize {
    3
}

impl ReelForgeConfig {
    /// Validate configuration invariants that cannot be expressed in serde.
    pub fn validate(&self) -> Result<(), crate::ConfigError> {
        if self.generator.batch_size == 0 {
            return Err(crate::ConfigError::Invalid(
                "generator.batch_size must be at least 1".to_string(),
            ));
        }
        if self.generator.batch_size > MIN_POOL_SIZE {
            return Err(crate::ConfigError::Invalid(format!(
                "generator.batch_size must not exceed {MIN_POOL_SIZE}"
            )));
        }
        if self.generator.delay_ms > MAX_DELAY_MS {
            return Err(crate::ConfigError::Invalid(format!(
                "generator.delay_ms must not exceed {MAX_DELAY_MS}"
            )));
        }
        for integration in &self.integrations {
            if integration.name.trim().is_empty() {
                return Err(crate::ConfigError::Invalid(
                    "integration names must be non-empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}
