use crate::receipt::ReceiptWatcher;
use crate::submission::MintFlow;
use crate::utils::{format_eth_balance, setup_provider, shorten_id, ChainState};
use crate::wallet::{Account, ConnectorKind, Wallet};
use alloy_primitives::U256;
use alloy_provider::{Provider, RootProvider};
use anyhow::Result;
use ratatui::widgets::ListState;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone, PartialEq)]
pub enum MessageType {
    Error,
    Info,
    Success,
}

pub struct App {
    pub provider: Arc<RootProvider>,
    pub chain_state: ChainState,
    pub wallet: Option<Wallet>,
    pub mint: MintFlow,
    pub receipt: ReceiptWatcher,
    pub eth_balance: U256,
    pub connector_state: ListState,
    pub is_connecting: bool,
    pub is_confirming: bool,
    pub is_switching_network: bool,
    pub error_message: Option<String>,
    pub message_type: MessageType,
    pub success_message: Option<String>,
}

impl App {
    pub fn new() -> Result<App> {
        let chain_state = ChainState::new();
        let provider = setup_provider(&chain_state)?;

        let mut connector_state = ListState::default();
        connector_state.select(Some(0));

        Ok(App {
            provider,
            chain_state,
            wallet: None,
            mint: MintFlow::new(),
            receipt: ReceiptWatcher::new(),
            eth_balance: U256::ZERO,
            connector_state,
            is_connecting: false,
            is_confirming: false,
            is_switching_network: false,
            error_message: None,
            message_type: MessageType::Info,
            success_message: None,
        })
    }

    pub fn is_connected(&self) -> bool {
        self.wallet.is_some()
    }

    /// Session account as the UI sees it, including the transient
    /// connecting state.
    pub fn account(&self) -> Account {
        let chain_id = self.chain_state.chain_id();
        match &self.wallet {
            Some(wallet) => wallet.account.clone(),
            None if self.is_connecting => Account::connecting(chain_id),
            None => Account::disconnected(chain_id),
        }
    }

    pub fn wallet_address_display(&self) -> String {
        match self.account().address() {
            Some(address) => shorten_id(&address.to_string()),
            None => "Not Connected".to_string(),
        }
    }

    pub fn balance_display(&self) -> String {
        format_eth_balance(self.eth_balance)
    }

    pub fn selected_connector(&self) -> Option<ConnectorKind> {
        self.connector_state
            .selected()
            .and_then(|i| ConnectorKind::ALL.get(i).copied())
    }

    /// Connect the selected wallet kind. Runs as a detached task; the
    /// wallet may sit on its approval prompt indefinitely.
    pub async fn run_connect(app: Arc<Mutex<App>>, kind: ConnectorKind) {
        let chain_state = {
            let mut app_guard = app.lock().await;
            if app_guard.is_connecting || app_guard.is_connected() {
                return;
            }
            app_guard.is_connecting = true;
            app_guard.clear_messages();
            app_guard.chain_state.clone()
        };

        let result = Wallet::connect(kind, &chain_state).await;

        let mut app_guard = app.lock().await;
        app_guard.is_connecting = false;
        match result {
            Ok(wallet) => {
                app_guard.wallet = Some(wallet);
                app_guard.set_message(
                    MessageType::Success,
                    format!("Connected via {}", kind.display_name()),
                );
                drop(app_guard);
                tokio::spawn(App::refresh_balance(app));
            }
            Err(e) => {
                app_guard.set_message(MessageType::Error, format!("Connect failed: {}", e));
            }
        }
    }

    /// Drop the session. Submission state and the tracked hash belong to
    /// the session, so they go with it.
    pub fn disconnect(&mut self) {
        self.wallet = None;
        self.eth_balance = U256::ZERO;
        self.mint = MintFlow::new();
        self.receipt = ReceiptWatcher::new();
        self.is_confirming = false;
        self.set_message(MessageType::Info, "Wallet disconnected".to_string());
    }

    pub async fn refresh_balance(app: Arc<Mutex<App>>) {
        let (provider, address) = {
            let app_guard = app.lock().await;
            let Some(address) = app_guard.account().address() else {
                return;
            };
            (Arc::clone(&app_guard.provider), address)
        };

        if let Ok(balance) = provider.get_balance(address).await {
            let mut app_guard = app.lock().await;
            // drop the result if the session went away mid-flight
            if app_guard.account().address() == Some(address) {
                app_guard.eth_balance = balance;
            }
        }
    }
}
