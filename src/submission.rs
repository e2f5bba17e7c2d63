use crate::constants::{
    ChainProfile, EDITION_ANIMATION_URI, EDITION_CREATE_REFERRAL, EDITION_DEFAULT_ADMIN,
    EDITION_DESCRIPTION, EDITION_FUNDS_RECIPIENT, EDITION_IMAGE_URI,
    EDITION_MAX_PURCHASE_PER_ADDRESS, EDITION_NAME, EDITION_PUBLIC_SALE_END, EDITION_ROYALTY_BPS,
    EDITION_SIZE, EDITION_SYMBOL,
};
use crate::error::{Error, Result};
use crate::wallet::{
    Account, Call, ConnectorKind, RequestCapabilities, SendCallsRequest, WalletCapabilities,
    WalletSubmitter, PAYMASTER_SERVICE,
};
use alloy_primitives::{aliases::U104, Address, Bytes, TxHash, TxKind, B256, U64};
use alloy_rpc_types_eth::{TransactionInput, TransactionRequest};
use alloy_sol_types::{sol, SolCall};
use std::fmt;
use tracing::{info, warn};

sol! {
    /// Sale window of a Zora 721 edition.
    struct SalesConfiguration {
        uint104 publicSalePrice;
        uint32 maxSalePurchasePerAddress;
        uint64 publicSaleStart;
        uint64 publicSaleEnd;
        uint64 presaleStart;
        uint64 presaleEnd;
        bytes32 presaleMerkleRoot;
    }

    function createEditionWithReferral(
        string name,
        string symbol,
        uint64 editionSize,
        uint16 royaltyBPS,
        address fundsRecipient,
        address defaultAdmin,
        SalesConfiguration salesConfig,
        string description,
        string animationURI,
        string imageURI,
        address createReferral
    ) returns (address);
}

const SEND_CALLS_VERSION: &str = "1.0";

/// "0x" + 64 hex characters
pub const CANONICAL_HASH_LEN: usize = 66;

/// Sale window of the edition being created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleWindow {
    pub public_sale_price: u128,
    pub max_purchase_per_address: u32,
    pub public_sale_start: u64,
    pub public_sale_end: u64,
    pub presale_start: u64,
    pub presale_end: u64,
    pub presale_merkle_root: B256,
}

/// The full argument tuple of one edition mint. The shape is identical on
/// both submission paths; only the envelope around it differs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintRequest {
    pub creator: Address,
    pub chain_id: u64,
    pub name: String,
    pub symbol: String,
    pub edition_size: u64,
    pub royalty_bps: u16,
    pub funds_recipient: Address,
    pub default_admin: Address,
    pub sale: SaleWindow,
    pub description: String,
    pub animation_uri: String,
    pub image_uri: String,
    pub create_referral: Address,
}

impl MintRequest {
    /// The fixed demo payload: a free, open-ended poster edition.
    pub fn poster_collection(chain: &ChainProfile) -> Self {
        MintRequest {
            creator: chain.creator_address,
            chain_id: chain.chain_id,
            name: EDITION_NAME.to_string(),
            symbol: EDITION_SYMBOL.to_string(),
            edition_size: EDITION_SIZE,
            royalty_bps: EDITION_ROYALTY_BPS,
            funds_recipient: EDITION_FUNDS_RECIPIENT,
            default_admin: EDITION_DEFAULT_ADMIN,
            sale: SaleWindow {
                public_sale_price: 0,
                max_purchase_per_address: EDITION_MAX_PURCHASE_PER_ADDRESS,
                public_sale_start: 0,
                public_sale_end: EDITION_PUBLIC_SALE_END,
                presale_start: 0,
                presale_end: 0,
                presale_merkle_root: B256::ZERO,
            },
            description: EDITION_DESCRIPTION.to_string(),
            animation_uri: EDITION_ANIMATION_URI.to_string(),
            image_uri: EDITION_IMAGE_URI.to_string(),
            create_referral: EDITION_CREATE_REFERRAL,
        }
    }

    /// ABI-encoded calldata for `createEditionWithReferral`.
    pub fn encode_call(&self) -> Bytes {
        let call = createEditionWithReferralCall {
            name: self.name.clone(),
            symbol: self.symbol.clone(),
            editionSize: self.edition_size,
            royaltyBPS: self.royalty_bps,
            fundsRecipient: self.funds_recipient,
            defaultAdmin: self.default_admin,
            salesConfig: SalesConfiguration {
                publicSalePrice: U104::from(self.sale.public_sale_price),
                maxSalePurchasePerAddress: self.sale.max_purchase_per_address,
                publicSaleStart: self.sale.public_sale_start,
                publicSaleEnd: self.sale.public_sale_end,
                presaleStart: self.sale.presale_start,
                presaleEnd: self.sale.presale_end,
                presaleMerkleRoot: self.sale.presale_merkle_root,
            },
            description: self.description.clone(),
            animationURI: self.animation_uri.clone(),
            imageURI: self.image_uri.clone(),
            createReferral: self.create_referral,
        };
        call.abi_encode().into()
    }
}

/// Decide what capability configuration a batched submission carries.
///
/// Every lookup step is explicit: no address, capabilities not loaded yet,
/// no entry for the chain, capability unsupported, or no configured
/// sponsorship endpoint all degrade to the empty configuration. None of
/// them is an error.
pub fn resolve_capabilities(
    address: Option<Address>,
    available: Option<&WalletCapabilities>,
    chain_id: u64,
    sponsor_url: Option<&str>,
) -> RequestCapabilities {
    let (Some(_), Some(available)) = (address, available) else {
        return RequestCapabilities::default();
    };
    let Some(for_chain) = available.for_chain(chain_id) else {
        return RequestCapabilities::default();
    };
    if !for_chain.supports(PAYMASTER_SERVICE) {
        return RequestCapabilities::default();
    }
    match sponsor_url {
        Some(url) => RequestCapabilities::sponsored(url),
        None => RequestCapabilities::default(),
    }
}

/// What a submission path handed back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionId {
    /// Plain transaction hash from `eth_sendTransaction`.
    Direct(TxHash),
    /// Opaque bundle identifier from `wallet_sendCalls`. The first 66
    /// characters carry the transaction hash; the tail is bundler
    /// metadata this app never interprets.
    Batched(String),
}

impl SubmissionId {
    /// The single key receipt lookup is allowed to see. Batched
    /// identifiers that do not start with a full hash are rejected rather
    /// than truncated blindly.
    pub fn canonical_hash(&self) -> Result<TxHash> {
        match self {
            SubmissionId::Direct(hash) => Ok(*hash),
            SubmissionId::Batched(id) => {
                let prefix = id
                    .get(..CANONICAL_HASH_LEN)
                    .ok_or_else(|| Error::MalformedBundleId(id.clone()))?;
                prefix
                    .parse::<TxHash>()
                    .map_err(|_| Error::MalformedBundleId(id.clone()))
            }
        }
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionId::Direct(hash) => write!(f, "{}", hash),
            SubmissionId::Batched(id) => write!(f, "{}", id),
        }
    }
}

/// One-shot submission state. `Submitting` is the busy flag: entered only
/// through `begin`, left exactly once through `finish`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MintState {
    Idle,
    Submitting,
    Succeeded(SubmissionId),
    Failed(String),
}

#[derive(Debug)]
pub struct MintFlow {
    state: MintState,
}

impl MintFlow {
    pub fn new() -> Self {
        MintFlow {
            state: MintState::Idle,
        }
    }

    pub fn state(&self) -> &MintState {
        &self.state
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.state, MintState::Submitting)
    }

    /// Idle or terminal -> Submitting. Refused while a submission is in
    /// flight. The previous result, and with it the previous canonical
    /// hash, is dropped here, before any new identifier exists.
    pub fn begin(&mut self) -> Result<()> {
        if self.is_busy() {
            return Err(Error::Submission(
                "a submission is already in flight".to_string(),
            ));
        }
        self.state = MintState::Submitting;
        Ok(())
    }

    /// Submitting -> Succeeded or Failed. A batched identifier that does
    /// not normalize counts as a failed submission.
    pub fn finish(&mut self, outcome: Result<SubmissionId>) {
        self.state = match outcome {
            Ok(id) => match id.canonical_hash() {
                Ok(hash) => {
                    info!(%hash, "submission accepted");
                    MintState::Succeeded(id)
                }
                Err(e) => {
                    warn!(error = %e, "submission returned an unusable identifier");
                    MintState::Failed(e.to_string())
                }
            },
            Err(e) => {
                warn!(error = %e, "submission rejected");
                MintState::Failed(e.to_string())
            }
        };
    }

    pub fn submission(&self) -> Option<&SubmissionId> {
        match &self.state {
            MintState::Succeeded(id) => Some(id),
            _ => None,
        }
    }

    /// Canonical hash of the current submission. Receipt lookups key off
    /// this and nothing else; `finish` guarantees it parses.
    pub fn canonical_hash(&self) -> Option<TxHash> {
        self.submission().and_then(|id| id.canonical_hash().ok())
    }
}

/// Pick the submission path for the connector, assemble the request and
/// hand it to the wallet. The caller owns the surrounding state
/// transition; this function only decides, assembles and submits.
pub async fn submit_mint(
    submitter: &dyn WalletSubmitter,
    connector: ConnectorKind,
    account: &Account,
    request: &MintRequest,
    capabilities: RequestCapabilities,
) -> Result<SubmissionId> {
    let from = account.address().ok_or(Error::NotConnected)?;
    let data = request.encode_call();

    match connector {
        // The smart-wallet connector understands EIP-5792 batches and may
        // have its gas sponsored; the mint is a single-call batch either way.
        ConnectorKind::CoinbaseWallet => {
            let batch = SendCallsRequest {
                version: SEND_CALLS_VERSION.to_string(),
                from,
                chain_id: U64::from(request.chain_id),
                calls: vec![Call {
                    to: request.creator,
                    value: None,
                    data,
                }],
                capabilities,
            };
            info!(
                connector = connector.label(),
                sponsored = !batch.capabilities.is_empty(),
                "submitting via wallet_sendCalls"
            );
            submitter.send_calls(batch).await.map(SubmissionId::Batched)
        }
        // Plain transaction; this path never sponsors gas.
        ConnectorKind::Injected | ConnectorKind::WalletConnect => {
            let tx = TransactionRequest {
                from: Some(from),
                to: Some(TxKind::Call(request.creator)),
                input: TransactionInput::new(data),
                ..Default::default()
            };
            info!(connector = connector.label(), "submitting via eth_sendTransaction");
            submitter
                .send_transaction(tx)
                .await
                .map(SubmissionId::Direct)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::CHAINS;
    use crate::wallet::AccountStatus;
    use alloy_primitives::address;
    use async_trait::async_trait;
    use std::sync::Mutex;

    const HASH_HEX: &str = "0x25a9852ef9f1f1f05acc8192c8b1cd2b91d2591774f8fdc8834e324f6c585253";

    fn connected_account() -> Account {
        Account {
            status: AccountStatus::Connected,
            address: Some(address!("0xFAB7A6a2C0506D07348492F9D6f20eC56A47E664")),
            chain_id: 8453,
        }
    }

    fn base_capabilities(supported: bool) -> WalletCapabilities {
        serde_json::from_value(serde_json::json!({
            "0x2105": { "paymasterService": { "supported": supported } }
        }))
        .unwrap()
    }

    struct MockWallet {
        reject: bool,
        batched_reply: String,
        sent_transactions: Mutex<Vec<TransactionRequest>>,
        sent_batches: Mutex<Vec<SendCallsRequest>>,
    }

    impl MockWallet {
        fn accepting(batched_reply: &str) -> Self {
            MockWallet {
                reject: false,
                batched_reply: batched_reply.to_string(),
                sent_transactions: Mutex::new(Vec::new()),
                sent_batches: Mutex::new(Vec::new()),
            }
        }

        fn rejecting() -> Self {
            MockWallet {
                reject: true,
                batched_reply: String::new(),
                sent_transactions: Mutex::new(Vec::new()),
                sent_batches: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl WalletSubmitter for MockWallet {
        async fn send_transaction(&self, tx: TransactionRequest) -> Result<TxHash> {
            if self.reject {
                return Err(Error::Submission("user rejected the request".to_string()));
            }
            self.sent_transactions.lock().unwrap().push(tx);
            Ok(HASH_HEX.parse().unwrap())
        }

        async fn send_calls(&self, request: SendCallsRequest) -> Result<String> {
            if self.reject {
                return Err(Error::Submission("user rejected the request".to_string()));
            }
            self.sent_batches.lock().unwrap().push(request);
            Ok(self.batched_reply.clone())
        }
    }

    #[test]
    fn test_resolve_missing_chain_entry_is_empty() {
        let account = connected_account();
        // capabilities only mention Base Sepolia
        let caps: WalletCapabilities = serde_json::from_value(serde_json::json!({
            "0x14a34": { "paymasterService": { "supported": true } }
        }))
        .unwrap();

        let resolved = resolve_capabilities(
            account.address(),
            Some(&caps),
            8453,
            Some("https://paymaster.example/rpc"),
        );
        assert!(resolved.is_empty());
    }

    #[test]
    fn test_resolve_without_address_is_empty() {
        let caps = base_capabilities(true);
        let resolved =
            resolve_capabilities(None, Some(&caps), 8453, Some("https://paymaster.example/rpc"));
        assert!(resolved.is_empty());
    }

    #[test]
    fn test_resolve_without_loaded_capabilities_is_empty() {
        let account = connected_account();
        let resolved = resolve_capabilities(
            account.address(),
            None,
            8453,
            Some("https://paymaster.example/rpc"),
        );
        assert!(resolved.is_empty());
    }

    #[test]
    fn test_resolve_unsupported_paymaster_is_empty() {
        let account = connected_account();
        let caps = base_capabilities(false);
        let resolved = resolve_capabilities(
            account.address(),
            Some(&caps),
            8453,
            Some("https://paymaster.example/rpc"),
        );
        assert!(resolved.is_empty());
    }

    #[test]
    fn test_resolve_supported_paymaster_carries_endpoint() {
        let account = connected_account();
        let caps = base_capabilities(true);
        let resolved = resolve_capabilities(
            account.address(),
            Some(&caps),
            8453,
            Some("https://paymaster.example/rpc"),
        );
        assert_eq!(
            resolved.paymaster_service.as_ref().map(|p| p.url.as_str()),
            Some("https://paymaster.example/rpc")
        );
    }

    #[test]
    fn test_resolve_without_sponsor_endpoint_is_empty() {
        let account = connected_account();
        let caps = base_capabilities(true);
        let resolved = resolve_capabilities(account.address(), Some(&caps), 8453, None);
        assert!(resolved.is_empty());
    }

    #[test]
    fn test_canonical_hash_direct_is_verbatim() {
        let hash: TxHash = HASH_HEX.parse().unwrap();
        assert_eq!(SubmissionId::Direct(hash).canonical_hash().unwrap(), hash);
    }

    #[test]
    fn test_canonical_hash_batched_takes_prefix() {
        let exact = SubmissionId::Batched(HASH_HEX.to_string());
        assert_eq!(
            exact.canonical_hash().unwrap(),
            HASH_HEX.parse::<TxHash>().unwrap()
        );

        let with_metadata = SubmissionId::Batched(format!("{}{}", HASH_HEX, "f".repeat(40)));
        assert_eq!(
            with_metadata.canonical_hash().unwrap(),
            HASH_HEX.parse::<TxHash>().unwrap()
        );
    }

    #[test]
    fn test_canonical_hash_rejects_short_bundle_id() {
        let short = SubmissionId::Batched("0x25a9852e".to_string());
        assert!(matches!(
            short.canonical_hash(),
            Err(Error::MalformedBundleId(_))
        ));
    }

    #[test]
    fn test_canonical_hash_rejects_non_hex_prefix() {
        let garbage = SubmissionId::Batched(format!("zz{}", "a".repeat(70)));
        assert!(matches!(
            garbage.canonical_hash(),
            Err(Error::MalformedBundleId(_))
        ));
    }

    #[test]
    fn test_busy_flag_spans_begin_to_finish() {
        let mut flow = MintFlow::new();
        assert!(!flow.is_busy());

        flow.begin().unwrap();
        assert!(flow.is_busy());
        // reentrant submission is refused while in flight
        assert!(flow.begin().is_err());

        flow.finish(Ok(SubmissionId::Direct(HASH_HEX.parse().unwrap())));
        assert!(!flow.is_busy());

        // terminal states accept a fresh begin
        flow.begin().unwrap();
        assert!(flow.is_busy());
        assert!(flow.canonical_hash().is_none(), "begin drops the old hash");
    }

    #[test]
    fn test_failed_submission_leaves_no_hash() {
        let mut flow = MintFlow::new();
        flow.begin().unwrap();
        flow.finish(Ok(SubmissionId::Direct(HASH_HEX.parse().unwrap())));
        assert!(flow.canonical_hash().is_some());

        flow.begin().unwrap();
        flow.finish(Err(Error::Submission("user rejected".to_string())));
        assert!(matches!(flow.state(), MintState::Failed(_)));
        assert!(!flow.is_busy());
        assert!(flow.canonical_hash().is_none());
    }

    #[test]
    fn test_malformed_bundle_id_fails_the_flow() {
        let mut flow = MintFlow::new();
        flow.begin().unwrap();
        flow.finish(Ok(SubmissionId::Batched("0xdead".to_string())));
        assert!(matches!(flow.state(), MintState::Failed(_)));
        assert!(flow.canonical_hash().is_none());
    }

    #[test]
    fn test_encode_call_has_selector_and_payload() {
        let request = MintRequest::poster_collection(&CHAINS[0]);
        let data = request.encode_call();
        assert_eq!(&data[..4], createEditionWithReferralCall::SELECTOR);

        let decoded = createEditionWithReferralCall::abi_decode(&data).unwrap();
        assert_eq!(decoded.name, EDITION_NAME);
        assert_eq!(decoded.salesConfig.publicSaleEnd, u64::MAX);
    }

    #[tokio::test]
    async fn test_coinbase_wallet_uses_batched_path_with_sponsorship() {
        let wallet = MockWallet::accepting(&format!("{}{}", HASH_HEX, "1".repeat(40)));
        let account = connected_account();
        let request = MintRequest::poster_collection(&CHAINS[0]);
        let capabilities = resolve_capabilities(
            account.address(),
            Some(&base_capabilities(true)),
            8453,
            Some("https://paymaster.example/rpc"),
        );

        let id = submit_mint(
            &wallet,
            ConnectorKind::CoinbaseWallet,
            &account,
            &request,
            capabilities,
        )
        .await
        .unwrap();

        let batches = wallet.sent_batches.lock().unwrap();
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].calls.len(), 1);
        assert_eq!(batches[0].calls[0].to, request.creator);
        assert!(!batches[0].capabilities.is_empty());
        assert!(wallet.sent_transactions.lock().unwrap().is_empty());

        // the 66-character prefix is the only receipt key
        assert_eq!(
            id.canonical_hash().unwrap(),
            HASH_HEX.parse::<TxHash>().unwrap()
        );
    }

    #[tokio::test]
    async fn test_injected_uses_direct_path_without_capabilities() {
        let wallet = MockWallet::accepting("");
        let account = connected_account();
        let request = MintRequest::poster_collection(&CHAINS[0]);

        // paymaster fully available, still must not be attached
        let capabilities = resolve_capabilities(
            account.address(),
            Some(&base_capabilities(true)),
            8453,
            Some("https://paymaster.example/rpc"),
        );
        assert!(!capabilities.is_empty());

        let id = submit_mint(
            &wallet,
            ConnectorKind::Injected,
            &account,
            &request,
            RequestCapabilities::default(),
        )
        .await
        .unwrap();

        let transactions = wallet.sent_transactions.lock().unwrap();
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].to, Some(TxKind::Call(request.creator)));
        assert!(wallet.sent_batches.lock().unwrap().is_empty());
        assert!(matches!(id, SubmissionId::Direct(_)));
    }

    #[tokio::test]
    async fn test_rejection_surfaces_as_submission_error() {
        let wallet = MockWallet::rejecting();
        let account = connected_account();
        let request = MintRequest::poster_collection(&CHAINS[0]);

        let outcome = submit_mint(
            &wallet,
            ConnectorKind::WalletConnect,
            &account,
            &request,
            RequestCapabilities::default(),
        )
        .await;
        assert!(matches!(outcome, Err(Error::Submission(_))));
    }

    #[tokio::test]
    async fn test_disconnected_account_cannot_submit() {
        let wallet = MockWallet::accepting("");
        let account = Account::disconnected(8453);
        let request = MintRequest::poster_collection(&CHAINS[0]);

        let outcome = submit_mint(
            &wallet,
            ConnectorKind::Injected,
            &account,
            &request,
            RequestCapabilities::default(),
        )
        .await;
        assert!(matches!(outcome, Err(Error::NotConnected)));
    }
}
