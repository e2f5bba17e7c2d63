use crate::error::{Error, Result};
use crate::utils::ChainState;
use crate::wallet::connector::RpcConnector;
use crate::wallet::types::{Account, AccountStatus, ConnectorKind, WalletCapabilities};
use std::sync::Arc;
use tracing::{debug, info};

/// One wallet session: a connector, the account it handed out, and the
/// capabilities it advertised at connect time.
pub struct Wallet {
    pub connector: Arc<RpcConnector>,
    pub account: Account,
    pub capabilities: Option<WalletCapabilities>,
}

impl Wallet {
    /// Open a session against the configured wallet endpoint and ask it
    /// for accounts. A chain mismatch between wallet and app is a
    /// connection error.
    pub async fn connect(kind: ConnectorKind, chain_state: &ChainState) -> Result<Wallet> {
        let connector = Arc::new(RpcConnector::new(kind, &chain_state.wallet_rpc())?);

        let (wallet_chain, accounts) =
            futures::join!(connector.chain_id(), connector.request_accounts());
        let wallet_chain = wallet_chain?;
        let expected = chain_state.chain_id();
        if wallet_chain != expected {
            return Err(Error::Connection(format!(
                "wallet is on chain {}, app is on chain {}",
                wallet_chain, expected
            )));
        }

        let address = accounts?
            .into_iter()
            .next()
            .ok_or_else(|| Error::Connection("wallet returned no accounts".to_string()))?;

        // a wallet that cannot answer the capability query is not an
        // error, it just never gets the sponsored path
        let capabilities = match connector.capabilities(address).await {
            Ok(capabilities) => Some(capabilities),
            Err(e) => {
                debug!(connector = kind.label(), error = %e, "continuing unsponsored");
                None
            }
        };
        info!(connector = kind.label(), %address, chain = expected, "wallet connected");

        Ok(Wallet {
            connector,
            account: Account {
                status: AccountStatus::Connected,
                address: Some(address),
                chain_id: expected,
            },
            capabilities,
        })
    }

    pub fn kind(&self) -> ConnectorKind {
        self.connector.kind()
    }
}
