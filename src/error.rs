use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the mint submission flow. Submission and receipt
/// failures become user-visible state; capability lookup failures are
/// absorbed before they reach the user.
#[derive(Error, Debug)]
pub enum Error {
    /// No connected account with an address
    #[error("wallet is not connected")]
    NotConnected,

    /// Wallet endpoint unreachable, no accounts, or chain mismatch
    #[error("wallet connection failed: {0}")]
    Connection(String),

    /// Synchronous rejection from either submission path
    #[error("submission rejected: {0}")]
    Submission(String),

    /// Capability query failed or returned a malformed shape. Absorbed by
    /// the session layer, which degrades to the unsponsored path.
    #[error("capability lookup failed: {0}")]
    CapabilityLookup(String),

    /// Receipt polling failed
    #[error("receipt lookup failed: {0}")]
    ReceiptLookup(String),

    /// Batched identifier too short or not hash-prefixed
    #[error("malformed bundle identifier: {0}")]
    MalformedBundleId(String),
}
