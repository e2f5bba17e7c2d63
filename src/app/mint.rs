use crate::app::core::{App, MessageType};
use crate::receipt::{lookup_receipt, ReceiptStatus};
use crate::submission::{resolve_capabilities, submit_mint, MintRequest, MintState};
use crate::utils::shorten_id;
use std::sync::Arc;
use tokio::sync::Mutex;

impl App {
    pub fn start_mint_confirm(&mut self) {
        if !self.is_connected() {
            self.set_message(MessageType::Error, "Connect a wallet first".to_string());
            return;
        }
        if self.mint.is_busy() {
            self.set_message(MessageType::Info, "Mint already in progress".to_string());
            return;
        }
        self.is_confirming = true;
    }

    pub fn cancel_mint(&mut self) {
        self.is_confirming = false;
    }

    /// One submission end to end: snapshot the inputs, flip to busy,
    /// dispatch, fold the outcome back in. The busy flag is set under the
    /// same lock that reads the inputs and cleared exactly once by
    /// `finish`, whichever exit the dispatch takes.
    pub async fn run_mint(app: Arc<Mutex<App>>) {
        let (submitter, connector, account, request, capabilities) = {
            let mut app_guard = app.lock().await;
            app_guard.is_confirming = false;

            let chain = app_guard.chain_state.profile();
            let request = MintRequest::poster_collection(chain);
            let sponsor_url = app_guard.chain_state.paymaster_url();

            let Some(wallet) = app_guard.wallet.as_ref() else {
                app_guard.set_message(MessageType::Error, "Connect a wallet first".to_string());
                return;
            };
            let account = wallet.account.clone();
            let connector = wallet.kind();
            let submitter = Arc::clone(&wallet.connector);
            let capabilities = resolve_capabilities(
                account.address(),
                wallet.capabilities.as_ref(),
                chain.chain_id,
                sponsor_url.as_deref(),
            );

            if let Err(e) = app_guard.mint.begin() {
                app_guard.set_message(MessageType::Error, e.to_string());
                return;
            }
            // the old hash is gone before the new submission exists
            app_guard.receipt.track(None);

            (submitter, connector, account, request, capabilities)
        };

        let outcome = submit_mint(
            submitter.as_ref(),
            connector,
            &account,
            &request,
            capabilities,
        )
        .await;

        let mut app_guard = app.lock().await;
        app_guard.mint.finish(outcome);

        let state = app_guard.mint.state().clone();
        match state {
            MintState::Succeeded(id) => {
                let message = format!("Mint submitted: {}", shorten_id(&id.to_string()));
                app_guard.set_message(MessageType::Success, message);
            }
            MintState::Failed(reason) => {
                app_guard.set_message(MessageType::Error, format!("Mint failed: {}", reason));
            }
            _ => {}
        }

        let hash = app_guard.mint.canonical_hash();
        app_guard.receipt.track(hash);
    }

    /// One receipt poll round, driven from the event loop tick. Lookups
    /// run off-lock; the watcher drops results for superseded hashes.
    pub async fn poll_receipt(app: Arc<Mutex<App>>) {
        let (provider, hash) = {
            let mut app_guard = app.lock().await;
            if !app_guard.receipt.wants_poll() {
                return;
            }
            let Some(hash) = app_guard.receipt.hash() else {
                return;
            };
            app_guard.receipt.begin_poll();
            (Arc::clone(&app_guard.provider), hash)
        };

        let outcome = lookup_receipt(provider.as_ref(), hash).await;

        let mut app_guard = app.lock().await;
        app_guard.receipt.finish_poll(hash, outcome);

        let status = app_guard.receipt.status().clone();
        match status {
            ReceiptStatus::Confirmed(receipt) => {
                let block = receipt
                    .block_number
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| "?".to_string());
                let message = if receipt.success {
                    format!("Mint confirmed in block {}", block)
                } else {
                    format!("Transaction reverted in block {}", block)
                };
                let message_type = if receipt.success {
                    MessageType::Success
                } else {
                    MessageType::Error
                };
                app_guard.set_message(message_type, message);
            }
            ReceiptStatus::LookupFailed(reason) => {
                app_guard.set_message(MessageType::Error, format!("Receipt lookup failed: {}", reason));
            }
            _ => {}
        }
    }
}
