// Wallet session layer: connector transport, account state, EIP-5792 types

pub mod client;
pub mod connector;
pub mod types;

pub use client::Wallet;
pub use connector::{RpcConnector, WalletSubmitter};
pub use types::{
    Account, AccountStatus, Call, Capability, ChainCapabilities, ConnectorKind, PaymasterService,
    RequestCapabilities, SendCallsRequest, WalletCapabilities, PAYMASTER_SERVICE,
};
