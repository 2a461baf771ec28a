//! Transfer request and receipt models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::transfers_constants::{SUPPORTED_BANKS, WITHDRAW_QR_ACTION};
use crate::pockets::{MovementReceipt, PocketError};

/// Destination of an outgoing transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum TransferRecipient {
    BankAccount { bank: String, account_number: String },
    PromptPay { id: String },
}

impl TransferRecipient {
    /// Returns the recipient with trimmed fields and the canonical bank name.
    pub fn normalized(&self) -> Result<Self, PocketError> {
        match self {
            TransferRecipient::BankAccount {
                bank,
                account_number,
            } => {
                let canonical = SUPPORTED_BANKS
                    .iter()
                    .find(|b| b.eq_ignore_ascii_case(bank.trim()))
                    .ok_or_else(|| {
                        PocketError::InvalidArgument(format!("Unsupported bank '{}'", bank))
                    })?;
                let account_number = account_number.trim();
                if account_number.is_empty() {
                    return Err(PocketError::InvalidArgument(
                        "Account number cannot be empty".to_string(),
                    ));
                }
                Ok(TransferRecipient::BankAccount {
                    bank: (*canonical).to_string(),
                    account_number: account_number.to_string(),
                })
            }
            TransferRecipient::PromptPay { id } => {
                let id = id.trim();
                if id.is_empty() {
                    return Err(PocketError::InvalidArgument(
                        "PromptPay id cannot be empty".to_string(),
                    ));
                }
                Ok(TransferRecipient::PromptPay { id: id.to_string() })
            }
        }
    }

    /// Counterparty label recorded in the activity journal.
    pub fn label(&self) -> String {
        match self {
            TransferRecipient::BankAccount {
                bank,
                account_number,
            } => format!("{} - {}", bank, account_number),
            TransferRecipient::PromptPay { id } => id.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMoneyRequest {
    pub pocket_id: String,
    pub recipient: TransferRecipient,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BillType {
    Electricity,
    Water,
    Internet,
    Phone,
}

impl BillType {
    pub fn display_name(&self) -> &'static str {
        match self {
            BillType::Electricity => "Electricity Bill",
            BillType::Water => "Water Bill",
            BillType::Internet => "Internet Bill",
            BillType::Phone => "Phone Bill",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillPaymentRequest {
    pub pocket_id: String,
    pub bill_type: BillType,
    pub bill_number: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TopUpMethod {
    BankTransfer,
    Card,
}

impl TopUpMethod {
    pub fn display_name(&self) -> &'static str {
        match self {
            TopUpMethod::BankTransfer => "Bank Transfer",
            TopUpMethod::Card => "Credit/Debit Card",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopUpRequest {
    pub pocket_id: String,
    pub method: TopUpMethod,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawRequest {
    pub pocket_id: String,
    pub amount: Decimal,
}

/// Content encoded in a cardless withdrawal QR code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawQrPayload {
    pub action: String,
    pub pocket: String,
    pub amount: Decimal,
}

impl WithdrawQrPayload {
    pub fn new(pocket_name: &str, amount: Decimal) -> Self {
        Self {
            action: WITHDRAW_QR_ACTION.to_string(),
            pocket: pocket_name.to_string(),
            amount,
        }
    }
}

/// Result of a withdrawal: the debit receipt plus the QR code content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalTicket {
    pub receipt: MovementReceipt,
    pub qr_payload: String,
}
