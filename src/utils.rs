use crate::constants::{
    ChainProfile, CHAINS, DEFAULT_WALLET_RPC, ETH_DECIMALS, PAYMASTER_KEY_ENV, WALLET_RPC_ENV,
};
use alloy_primitives::U256;
use alloy_provider::RootProvider;
use alloy_rpc_client::ClientBuilder;
use anyhow::Result;
use std::sync::Arc;

pub fn shorten_id(id: &str) -> String {
    if id.len() > 16 {
        // For identifiers like 0x1791f5e3564960fc8889242d757b65b519cd8b4617e23a22efa537670b3ef00d
        // Show: 0x1791f5e3...70b3ef00d (first 10 chars including 0x, last 9 chars)
        format!("{}...{}", &id[..10], &id[id.len() - 9..])
    } else {
        id.to_string()
    }
}

pub fn format_eth_balance(amount: U256) -> String {
    let wei = amount.min(U256::from(u128::MAX)).to::<u128>();
    format!("{:.4} ETH", wei as f64 / ETH_DECIMALS)
}

#[derive(Clone)]
pub struct ChainState {
    pub current_chain: usize,
}

impl ChainState {
    pub fn new() -> Self {
        ChainState {
            current_chain: 0 // Default to Base mainnet
        }
    }

    pub fn profile(&self) -> &'static ChainProfile {
        &CHAINS[self.current_chain]
    }

    pub fn get_current_name(&self) -> &'static str {
        self.profile().name
    }

    pub fn chain_id(&self) -> u64 {
        self.profile().chain_id
    }

    /// Wallet endpoint for this session; overridable for local testing.
    pub fn wallet_rpc(&self) -> String {
        std::env::var(WALLET_RPC_ENV).unwrap_or_else(|_| DEFAULT_WALLET_RPC.to_string())
    }

    /// Sponsorship endpoint for the current chain. None without an API key
    /// in the environment, which disables the sponsored path entirely.
    pub fn paymaster_url(&self) -> Option<String> {
        let key = std::env::var(PAYMASTER_KEY_ENV).ok()?;
        self.profile()
            .paymaster_rpc
            .map(|base| format!("{}/{}", base, key))
    }
}

pub fn setup_provider(chain_state: &ChainState) -> Result<Arc<RootProvider>> {
    let url = chain_state.profile().rpc_url.parse::<url::Url>()?;
    let client = ClientBuilder::default().http(url);
    Ok(Arc::new(RootProvider::new(client)))
}
