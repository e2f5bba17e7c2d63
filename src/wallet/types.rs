// Wire and session types for the wallet layer

use alloy_primitives::{Address, Bytes, U256, U64};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const PAYMASTER_SERVICE: &str = "paymasterService";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountStatus {
    Disconnected,
    Connecting,
    Connected,
}

/// Session account snapshot. The address is only visible while connected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub status: AccountStatus,
    pub address: Option<Address>,
    pub chain_id: u64,
}

impl Account {
    pub fn disconnected(chain_id: u64) -> Self {
        Account {
            status: AccountStatus::Disconnected,
            address: None,
            chain_id,
        }
    }

    pub fn connecting(chain_id: u64) -> Self {
        Account {
            status: AccountStatus::Connecting,
            address: None,
            chain_id,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.status == AccountStatus::Connected
    }

    pub fn address(&self) -> Option<Address> {
        self.address.filter(|_| self.is_connected())
    }

    pub fn status_label(&self) -> &'static str {
        match self.status {
            AccountStatus::Disconnected => "disconnected",
            AccountStatus::Connecting => "connecting",
            AccountStatus::Connected => "connected",
        }
    }
}

/// The wallet integrations the app knows how to drive. The kind is the
/// sole dispatch key for submission; adding one forces every match site
/// to decide a path for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectorKind {
    Injected,
    CoinbaseWallet,
    WalletConnect,
}

impl ConnectorKind {
    pub const ALL: [ConnectorKind; 3] = [
        ConnectorKind::Injected,
        ConnectorKind::CoinbaseWallet,
        ConnectorKind::WalletConnect,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ConnectorKind::Injected => "injected",
            ConnectorKind::CoinbaseWallet => "coinbaseWallet",
            ConnectorKind::WalletConnect => "walletConnect",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ConnectorKind::Injected => "Injected",
            ConnectorKind::CoinbaseWallet => "Coinbase Wallet",
            ConnectorKind::WalletConnect => "WalletConnect",
        }
    }
}

/// Support flag for one named capability, as advertised by the wallet.
/// Extra per-capability fields on the wire are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Capability {
    #[serde(default)]
    pub supported: bool,
}

/// Capabilities the wallet advertises for a single chain.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ChainCapabilities(pub BTreeMap<String, Capability>);

impl ChainCapabilities {
    pub fn get(&self, name: &str) -> Option<&Capability> {
        self.0.get(name)
    }

    pub fn supports(&self, name: &str) -> bool {
        self.get(name).map(|cap| cap.supported).unwrap_or(false)
    }
}

/// Full `wallet_getCapabilities` response, keyed by chain id.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct WalletCapabilities(pub BTreeMap<String, ChainCapabilities>);

impl WalletCapabilities {
    /// EIP-5792 keys chains as hex quantities; some wallets key them in
    /// decimal instead. Both are accepted, and a chain the wallet never
    /// mentioned is simply absent.
    pub fn for_chain(&self, chain_id: u64) -> Option<&ChainCapabilities> {
        self.0
            .get(&format!("{:#x}", chain_id))
            .or_else(|| self.0.get(&chain_id.to_string()))
    }
}

/// Capability configuration attached to a batched submission. Empty means
/// the wallet pays its own gas.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestCapabilities {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paymaster_service: Option<PaymasterService>,
}

impl RequestCapabilities {
    pub fn sponsored(url: impl Into<String>) -> Self {
        RequestCapabilities {
            paymaster_service: Some(PaymasterService { url: url.into() }),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.paymaster_service.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymasterService {
    pub url: String,
}

/// One entry in a `wallet_sendCalls` batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Call {
    pub to: Address,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<U256>,
    pub data: Bytes,
}

/// `wallet_sendCalls` request object (EIP-5792).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendCallsRequest {
    pub version: String,
    pub from: Address,
    pub chain_id: U64,
    pub calls: Vec<Call>,
    #[serde(skip_serializing_if = "RequestCapabilities::is_empty")]
    pub capabilities: RequestCapabilities,
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn test_capabilities_deserialize_hex_keys() {
        let caps: WalletCapabilities = serde_json::from_value(serde_json::json!({
            "0x2105": {
                "paymasterService": { "supported": true },
                "atomicBatch": { "supported": true, "extra": "ignored" }
            }
        }))
        .unwrap();

        let for_base = caps.for_chain(8453).unwrap();
        assert!(for_base.supports(PAYMASTER_SERVICE));
        assert!(for_base.supports("atomicBatch"));
        assert!(!for_base.supports("sessionKeys"));
        assert!(caps.for_chain(84532).is_none());
    }

    #[test]
    fn test_capabilities_deserialize_decimal_keys() {
        let caps: WalletCapabilities = serde_json::from_value(serde_json::json!({
            "8453": { "paymasterService": { "supported": false } }
        }))
        .unwrap();

        let for_base = caps.for_chain(8453).unwrap();
        assert!(!for_base.supports(PAYMASTER_SERVICE));
    }

    #[test]
    fn test_capability_supported_defaults_to_false() {
        let caps: WalletCapabilities = serde_json::from_value(serde_json::json!({
            "0x2105": { "paymasterService": {} }
        }))
        .unwrap();

        assert!(!caps.for_chain(8453).unwrap().supports(PAYMASTER_SERVICE));
    }

    #[test]
    fn test_send_calls_request_wire_shape() {
        let request = SendCallsRequest {
            version: "1.0".to_string(),
            from: address!("0xFAB7A6a2C0506D07348492F9D6f20eC56A47E664"),
            chain_id: U64::from(8453u64),
            calls: vec![Call {
                to: address!("0x58C3ccB2dcb9384E5AB9111CD1a5DEA916B0f33c"),
                value: None,
                data: Bytes::from(vec![0xde, 0xad]),
            }],
            capabilities: RequestCapabilities::sponsored("https://paymaster.example/rpc"),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["chainId"], "0x2105");
        assert_eq!(value["calls"][0]["data"], "0xdead");
        assert!(value["calls"][0].get("value").is_none());
        assert_eq!(
            value["capabilities"]["paymasterService"]["url"],
            "https://paymaster.example/rpc"
        );
    }

    #[test]
    fn test_send_calls_request_omits_empty_capabilities() {
        let request = SendCallsRequest {
            version: "1.0".to_string(),
            from: address!("0xFAB7A6a2C0506D07348492F9D6f20eC56A47E664"),
            chain_id: U64::from(8453u64),
            calls: vec![],
            capabilities: RequestCapabilities::default(),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("capabilities").is_none());
    }

    #[test]
    fn test_account_address_hidden_unless_connected() {
        let account = Account {
            status: AccountStatus::Connecting,
            address: Some(address!("0xFAB7A6a2C0506D07348492F9D6f20eC56A47E664")),
            chain_id: 8453,
        };
        assert_eq!(account.address(), None);
    }
}
