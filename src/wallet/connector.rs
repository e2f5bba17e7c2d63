use crate::error::{Error, Result};
use crate::wallet::types::{ConnectorKind, SendCallsRequest, WalletCapabilities};
use alloy_primitives::{Address, TxHash, U64};
use alloy_rpc_client::{ClientBuilder, RpcClient};
use alloy_rpc_types_eth::TransactionRequest;
use async_trait::async_trait;

/// Submission surface of a connected wallet. The mint coordinator sees
/// nothing else; tests substitute a recording mock.
#[async_trait]
pub trait WalletSubmitter: Send + Sync {
    /// Direct path: one plain transaction via `eth_sendTransaction`.
    async fn send_transaction(&self, tx: TransactionRequest) -> Result<TxHash>;

    /// Batched path: `wallet_sendCalls`. Returns the opaque bundle
    /// identifier, not a transaction hash.
    async fn send_calls(&self, request: SendCallsRequest) -> Result<String>;
}

/// JSON-RPC wallet connector. All connector kinds speak the same wire
/// protocol against the session endpoint; the kind decides which
/// submission path the coordinator takes.
pub struct RpcConnector {
    kind: ConnectorKind,
    client: RpcClient,
}

impl RpcConnector {
    pub fn new(kind: ConnectorKind, endpoint: &str) -> Result<Self> {
        let url = endpoint
            .parse::<url::Url>()
            .map_err(|e| Error::Connection(format!("invalid wallet endpoint {}: {}", endpoint, e)))?;
        Ok(RpcConnector {
            kind,
            client: ClientBuilder::default().http(url),
        })
    }

    pub fn kind(&self) -> ConnectorKind {
        self.kind
    }

    /// `eth_requestAccounts`; the wallet may prompt its user before
    /// answering.
    pub async fn request_accounts(&self) -> Result<Vec<Address>> {
        self.client
            .request_noparams("eth_requestAccounts")
            .await
            .map_err(|e| Error::Connection(e.to_string()))
    }

    pub async fn chain_id(&self) -> Result<u64> {
        let id: U64 = self
            .client
            .request_noparams("eth_chainId")
            .await
            .map_err(|e| Error::Connection(e.to_string()))?;
        Ok(id.to::<u64>())
    }

    /// `wallet_getCapabilities`. Wallets without EIP-5792 support reject
    /// the method outright.
    pub async fn capabilities(&self, address: Address) -> Result<WalletCapabilities> {
        self.client
            .request::<_, WalletCapabilities>("wallet_getCapabilities", (address,))
            .await
            .map_err(|e| Error::CapabilityLookup(e.to_string()))
    }
}

#[async_trait]
impl WalletSubmitter for RpcConnector {
    async fn send_transaction(&self, tx: TransactionRequest) -> Result<TxHash> {
        self.client
            .request("eth_sendTransaction", (tx,))
            .await
            .map_err(|e| Error::Submission(e.to_string()))
    }

    async fn send_calls(&self, request: SendCallsRequest) -> Result<String> {
        self.client
            .request("wallet_sendCalls", (request,))
            .await
            .map_err(|e| Error::Submission(e.to_string()))
    }
}
