use crate::app::core::{App, MessageType};
use crate::constants::CHAINS;
use crate::receipt::ReceiptWatcher;
use crate::submission::MintFlow;
use crate::utils::setup_provider;
use alloy_primitives::U256;
use anyhow::Result;

impl App {
    pub fn start_network_switch(&mut self) {
        self.is_switching_network = true;
    }

    pub fn cancel_network_switch(&mut self) {
        self.is_switching_network = false;
    }

    /// Switching chains drops the whole session: account, capabilities,
    /// submission state and the tracked hash all belong to the old chain.
    pub fn switch_to_chain(&mut self, chain_index: usize) -> Result<()> {
        if chain_index < CHAINS.len() && chain_index != self.chain_state.current_chain {
            self.chain_state.current_chain = chain_index;
            self.provider = setup_provider(&self.chain_state)?;
            self.wallet = None;
            self.eth_balance = U256::ZERO;
            self.mint = MintFlow::new();
            self.receipt = ReceiptWatcher::new();
            self.is_confirming = false;
            self.set_message(
                MessageType::Info,
                format!("Switched to {}", self.chain_state.get_current_name().to_uppercase()),
            );
        }
        self.is_switching_network = false;
        Ok(())
    }

    pub fn get_network_options(&self) -> String {
        format!(
            "1) {}  2) {}",
            CHAINS[0].name.to_uppercase(),
            CHAINS[1].name.to_uppercase()
        )
    }
}
