use crate::error::{Error, Result};
use alloy_network::ReceiptResponse;
use alloy_primitives::TxHash;
use alloy_provider::{Provider, RootProvider};
use tracing::{info, warn};

/// Where the tracked hash is in its life.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReceiptStatus {
    NoHash,
    Pending,
    Confirmed(ConfirmedReceipt),
    LookupFailed(String),
}

/// The pieces of the on-chain receipt the app shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmedReceipt {
    pub block_number: Option<u64>,
    pub gas_used: u64,
    pub success: bool,
}

/// Tracks one canonical transaction hash to a terminal state. The watcher
/// only ever sees canonical 66-character hashes; raw bundle identifiers
/// are rejected upstream by the normalization step.
#[derive(Debug)]
pub struct ReceiptWatcher {
    hash: Option<TxHash>,
    status: ReceiptStatus,
    in_flight: bool,
}

impl ReceiptWatcher {
    pub fn new() -> Self {
        ReceiptWatcher {
            hash: None,
            status: ReceiptStatus::NoHash,
            in_flight: false,
        }
    }

    pub fn status(&self) -> &ReceiptStatus {
        &self.status
    }

    pub fn hash(&self) -> Option<TxHash> {
        self.hash
    }

    /// Point the watcher at the current canonical hash. A superseding hash
    /// discards the previous outcome and re-arms polling; `None` clears
    /// everything.
    pub fn track(&mut self, hash: Option<TxHash>) {
        if self.hash == hash {
            return;
        }
        self.hash = hash;
        self.status = match hash {
            Some(_) => ReceiptStatus::Pending,
            None => ReceiptStatus::NoHash,
        };
    }

    /// True when the event loop should issue a lookup.
    pub fn wants_poll(&self) -> bool {
        matches!(self.status, ReceiptStatus::Pending) && !self.in_flight
    }

    pub fn begin_poll(&mut self) {
        self.in_flight = true;
    }

    /// Fold one lookup outcome back in. An outcome for a hash the watcher
    /// no longer tracks is dropped; a superseding submission has already
    /// re-armed it.
    pub fn finish_poll(&mut self, hash: TxHash, outcome: Result<Option<ConfirmedReceipt>>) {
        self.in_flight = false;
        if self.hash != Some(hash) {
            return;
        }
        match outcome {
            Ok(Some(receipt)) => {
                info!(%hash, block = ?receipt.block_number, success = receipt.success, "receipt confirmed");
                self.status = ReceiptStatus::Confirmed(receipt);
            }
            // not mined yet, keep polling
            Ok(None) => {}
            Err(e) => {
                warn!(%hash, error = %e, "receipt lookup failed");
                self.status = ReceiptStatus::LookupFailed(e.to_string());
            }
        }
    }
}

/// One `eth_getTransactionReceipt` round trip. `None` means the
/// transaction is not mined yet.
pub async fn lookup_receipt(
    provider: &RootProvider,
    hash: TxHash,
) -> Result<Option<ConfirmedReceipt>> {
    let receipt = provider
        .get_transaction_receipt(hash)
        .await
        .map_err(|e| Error::ReceiptLookup(e.to_string()))?;

    Ok(receipt.map(|r| ConfirmedReceipt {
        block_number: r.block_number(),
        gas_used: r.gas_used(),
        success: r.status(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HASH_A: &str = "0x25a9852ef9f1f1f05acc8192c8b1cd2b91d2591774f8fdc8834e324f6c585253";
    const HASH_B: &str = "0xd05526148d43f2f624fb95f84fa5ea492f8638e3ed7f520cef8535706bb5cc2f";

    fn confirmed() -> ConfirmedReceipt {
        ConfirmedReceipt {
            block_number: Some(1234),
            gas_used: 21000,
            success: true,
        }
    }

    #[test]
    fn test_watcher_arms_on_hash_and_clears_on_none() {
        let mut watcher = ReceiptWatcher::new();
        assert_eq!(*watcher.status(), ReceiptStatus::NoHash);
        assert!(!watcher.wants_poll());

        watcher.track(Some(HASH_A.parse().unwrap()));
        assert_eq!(*watcher.status(), ReceiptStatus::Pending);
        assert!(watcher.wants_poll());

        watcher.track(None);
        assert_eq!(*watcher.status(), ReceiptStatus::NoHash);
    }

    #[test]
    fn test_superseding_hash_rearms_a_finished_watcher() {
        let mut watcher = ReceiptWatcher::new();
        let first: TxHash = HASH_A.parse().unwrap();
        watcher.track(Some(first));
        watcher.begin_poll();
        watcher.finish_poll(first, Ok(Some(confirmed())));
        assert!(matches!(watcher.status(), ReceiptStatus::Confirmed(_)));

        watcher.track(Some(HASH_B.parse().unwrap()));
        assert_eq!(*watcher.status(), ReceiptStatus::Pending);
        assert!(watcher.wants_poll());
    }

    #[test]
    fn test_stale_outcome_is_dropped() {
        let mut watcher = ReceiptWatcher::new();
        let first: TxHash = HASH_A.parse().unwrap();
        let second: TxHash = HASH_B.parse().unwrap();

        watcher.track(Some(first));
        watcher.begin_poll();
        // a new submission supersedes the hash while the poll is in flight
        watcher.track(Some(second));
        watcher.finish_poll(first, Ok(Some(confirmed())));

        assert_eq!(*watcher.status(), ReceiptStatus::Pending);
        assert_eq!(watcher.hash(), Some(second));
        assert!(watcher.wants_poll(), "stale poll releases the in-flight slot");
    }

    #[test]
    fn test_not_mined_keeps_polling() {
        let mut watcher = ReceiptWatcher::new();
        let hash: TxHash = HASH_A.parse().unwrap();
        watcher.track(Some(hash));
        watcher.begin_poll();
        assert!(!watcher.wants_poll());

        watcher.finish_poll(hash, Ok(None));
        assert_eq!(*watcher.status(), ReceiptStatus::Pending);
        assert!(watcher.wants_poll());
    }

    #[test]
    fn test_lookup_failure_is_terminal_until_rearmed() {
        let mut watcher = ReceiptWatcher::new();
        let hash: TxHash = HASH_A.parse().unwrap();
        watcher.track(Some(hash));
        watcher.begin_poll();
        watcher.finish_poll(hash, Err(Error::ReceiptLookup("rpc unreachable".to_string())));

        assert!(matches!(watcher.status(), ReceiptStatus::LookupFailed(_)));
        assert!(!watcher.wants_poll());

        watcher.track(Some(HASH_B.parse().unwrap()));
        assert!(watcher.wants_poll());
    }
}
