use alloy_primitives::{address, Address};

/// Base mainnet
pub const BASE_RPC_URL: &str = "https://mainnet.base.org";
pub const BASE_CREATOR_ADDRESS: Address = address!("0x58C3ccB2dcb9384E5AB9111CD1a5DEA916B0f33c");
pub const BASE_PAYMASTER_RPC: &str = "https://api.developer.coinbase.com/rpc/v1/base";

/// Base Sepolia
pub const BASE_SEPOLIA_RPC_URL: &str = "https://sepolia.base.org";
pub const BASE_SEPOLIA_CREATOR_ADDRESS: Address = address!("0x87cfd516c5ea86e50b950678CA970a8a28de27ac");
pub const BASE_SEPOLIA_PAYMASTER_RPC: &str = "https://api.developer.coinbase.com/rpc/v1/base-sepolia";

// Global constants
pub const WALLET_RPC_ENV: &str = "POSTERMINT_WALLET_RPC";
pub const PAYMASTER_KEY_ENV: &str = "POSTERMINT_PAYMASTER_KEY";
pub const DEFAULT_WALLET_RPC: &str = "http://127.0.0.1:8545";

pub const EVENT_POLL_MILLIS: u64 = 50;
pub const RECEIPT_POLL_INTERVAL_SECS: u64 = 3;
pub const BALANCE_REFRESH_INTERVAL_SECS: u64 = 15;

pub const ETH_DECIMALS: f64 = 1_000_000_000_000_000_000.0;

/// The demo edition minted by the app. One fixed payload, both paths.
pub const EDITION_NAME: &str = "test";
pub const EDITION_SYMBOL: &str = "TEST";
pub const EDITION_SIZE: u64 = 0xfffffffffff;
pub const EDITION_ROYALTY_BPS: u16 = 500;
pub const EDITION_DESCRIPTION: &str = "This is my Poster Collection";
pub const EDITION_ANIMATION_URI: &str = "0x0";
pub const EDITION_IMAGE_URI: &str = "0x0";
pub const EDITION_FUNDS_RECIPIENT: Address = address!("0xFAB7A6a2C0506D07348492F9D6f20eC56A47E664");
pub const EDITION_DEFAULT_ADMIN: Address = address!("0xFAB7A6a2C0506D07348492F9D6f20eC56A47E664");
pub const EDITION_CREATE_REFERRAL: Address = address!("0x77fAD8D0FcfD481dAf98D0D156970A281e66761b");
pub const EDITION_MAX_PURCHASE_PER_ADDRESS: u32 = u32::MAX;
pub const EDITION_PUBLIC_SALE_END: u64 = u64::MAX;

pub struct ChainProfile {
    pub name: &'static str,
    pub chain_id: u64,
    pub rpc_url: &'static str,
    pub creator_address: Address,
    /// Sponsorship endpoint base; the API key is appended from the
    /// environment. None disables the sponsored path for the chain.
    pub paymaster_rpc: Option<&'static str>,
}

pub static CHAINS: [ChainProfile; 2] = [
    ChainProfile {
        name: "base",
        chain_id: 8453,
        rpc_url: BASE_RPC_URL,
        creator_address: BASE_CREATOR_ADDRESS,
        paymaster_rpc: Some(BASE_PAYMASTER_RPC),
    },
    ChainProfile {
        name: "base-sepolia",
        chain_id: 84532,
        rpc_url: BASE_SEPOLIA_RPC_URL,
        creator_address: BASE_SEPOLIA_CREATOR_ADDRESS,
        paymaster_rpc: Some(BASE_SEPOLIA_PAYMASTER_RPC),
    },
];

pub const POSTERMINT_FRAMES: [&str; 3] = [
    r#"
 ██████╗  ██████╗ ███████╗████████╗███████╗██████╗ ███╗   ███╗██╗███╗   ██╗████████╗
 ██╔══██╗██╔═══██╗██╔════╝╚══██╔══╝██╔════╝██╔══██╗████╗ ████║██║████╗  ██║╚══██╔══╝
 ██████╔╝██║   ██║███████╗   ██║   █████╗  ██████╔╝██╔████╔██║██║██╔██╗ ██║   ██║
 ██╔═══╝ ██║   ██║╚════██║   ██║   ██╔══╝  ██╔══██╗██║╚██╔╝██║██║██║╚██╗██║   ██║
 ██║     ╚██████╔╝███████║   ██║   ███████╗██║  ██║██║ ╚═╝ ██║██║██║ ╚████║   ██║
 ╚═╝      ╚═════╝ ╚══════╝   ╚═╝   ╚══════╝╚═╝  ╚═╝╚═╝     ╚═╝╚═╝╚═╝  ╚═══╝   ╚═╝ ▓"#,
    r#"
 ██████╗  ██████╗ ███████╗████████╗███████╗██████╗ ███╗   ███╗██╗███╗   ██╗████████╗
 ██╔══██╗██╔═══██╗██╔════╝╚══██╔══╝██╔════╝██╔══██╗████╗ ████║██║████╗  ██║╚══██╔══╝
 ██████╔╝██║   ██║███████╗   ██║   █████╗  ██████╔╝██╔████╔██║██║██╔██╗ ██║   ██║
 ██╔═══╝ ██║   ██║╚════██║   ██║   ██╔══╝  ██╔══██╗██║╚██╔╝██║██║██║╚██╗██║   ██║
 ██║     ╚██████╔╝███████║   ██║   ███████╗██║  ██║██║ ╚═╝ ██║██║██║ ╚████║   ██║
 ╚═╝      ╚═════╝ ╚══════╝   ╚═╝   ╚══════╝╚═╝  ╚═╝╚═╝     ╚═╝╚═╝╚═╝  ╚═══╝   ╚═╝ ▒"#,
    r#"
 ██████╗  ██████╗ ███████╗████████╗███████╗██████╗ ███╗   ███╗██╗███╗   ██╗████████╗
 ██╔══██╗██╔═══██╗██╔════╝╚══██╔══╝██╔════╝██╔══██╗████╗ ████║██║████╗  ██║╚══██╔══╝
 ██████╔╝██║   ██║███████╗   ██║   █████╗  ██████╔╝██╔████╔██║██║██╔██╗ ██║   ██║
 ██╔═══╝ ██║   ██║╚════██║   ██║   ██╔══╝  ██╔══██╗██║╚██╔╝██║██║██║╚██╗██║   ██║
 ██║     ╚██████╔╝███████║   ██║   ███████╗██║  ██║██║ ╚═╝ ██║██║██║ ╚████║   ██║
 ╚═╝      ╚═════╝ ╚══════╝   ╚═╝   ╚══════╝╚═╝  ╚═╝╚═╝     ╚═╝╚═╝╚═╝  ╚═══╝   ╚═╝ ░"#,
];
