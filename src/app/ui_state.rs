use crate::app::core::{App, MessageType};
use crate::receipt::ReceiptStatus;
use crate::submission::MintState;
use crate::wallet::ConnectorKind;
use std::time::{SystemTime, UNIX_EPOCH};

impl App {
    pub fn next_connector(&mut self) {
        let i = match self.connector_state.selected() {
            Some(i) => {
                if i >= ConnectorKind::ALL.len() - 1 {
                    i
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.connector_state.select(Some(i));
    }

    pub fn previous_connector(&mut self) {
        let i = match self.connector_state.selected() {
            Some(i) => {
                if i == 0 {
                    0
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.connector_state.select(Some(i));
    }

    pub fn set_message(&mut self, message_type: MessageType, message: String) {
        match message_type {
            MessageType::Success => {
                self.success_message = Some(message);
                self.error_message = None;
            }
            _ => {
                self.error_message = Some(message);
                self.success_message = None;
            }
        }
        self.message_type = message_type;
    }

    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.success_message = None;
    }

    /// Single status line driven by the submission and receipt states.
    pub fn get_status_animation(&self) -> String {
        let time = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        let frame = (time % 3) as usize;

        match self.mint.state() {
            MintState::Submitting => match frame {
                0 => "║▓▒░ SUBMITTING... ░▒▓║".to_string(),
                1 => "║▒▓░ SUBMITTING... ░▓▒║".to_string(),
                _ => "║░▓▒ SUBMITTING... ▒▓░║".to_string(),
            },
            MintState::Failed(_) => "║▒▓░ MINT FAILED ░▓▒║".to_string(),
            MintState::Succeeded(_) => match self.receipt.status() {
                ReceiptStatus::Pending => match frame {
                    0 => "║▓▒░ AWAITING RECEIPT ░▒▓║".to_string(),
                    1 => "║▒▓░ AWAITING RECEIPT ░▓▒║".to_string(),
                    _ => "║░▓▒ AWAITING RECEIPT ▒▓░║".to_string(),
                },
                ReceiptStatus::Confirmed(receipt) if receipt.success => {
                    "║▓▒░ MINT CONFIRMED ░▒▓║".to_string()
                }
                ReceiptStatus::Confirmed(_) => "║▒▓░ TX REVERTED ░▓▒║".to_string(),
                ReceiptStatus::LookupFailed(_) => "║▒▓░ RECEIPT LOOKUP FAILED ░▓▒║".to_string(),
                ReceiptStatus::NoHash => "║▓▒░ SUBMITTED ░▒▓║".to_string(),
            },
            MintState::Idle => match frame {
                0 => "║▓▒░ SYS IDLE ░▒▓║".to_string(),
                1 => "║▒▓░ SYS IDLE ░▓▒║".to_string(),
                _ => "║░▓▒ SYS IDLE ▒▓░║".to_string(),
            },
        }
    }
}
