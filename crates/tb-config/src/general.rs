//! General application configuration.

use serde::{Deserialize, Serialize};
use tb_core::entities::DEFAULT_REWARD_TOKEN;
use tb_core::projection::DEFAULT_NETWORK_FEE;

const fn default_network_fee() -> f64 {
    DEFAULT_NETWORK_FEE
}

fn default_reward_token() -> String {
    DEFAULT_REWARD_TOKEN.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Informational fee shown on every transaction history entry.
    #[serde(default = "default_network_fee")]
    pub network_fee: f64,

    /// Token symbol used when a create request names none.
    #[serde(default = "default_reward_token")]
    pub default_reward_token: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            network_fee: default_network_fee(),
            default_reward_token: default_reward_token(),
        }
    }
}
