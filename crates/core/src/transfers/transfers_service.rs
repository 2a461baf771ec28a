use log::debug;
use std::sync::Arc;

use super::transfers_model::{
    BillPaymentRequest, SendMoneyRequest, TopUpRequest, WithdrawQrPayload, WithdrawRequest,
    WithdrawalTicket,
};
use super::transfers_traits::TransferServiceTrait;
use crate::errors::{Error, Result};
use crate::pockets::{ActivityKind, Movement, MovementReceipt, PocketError, PocketServiceTrait};

/// Applies transfer requests to the pocket ledger.
///
/// Each request becomes exactly one credit or debit, so every pocket rule
/// (locks, funds, daily pocket mode, targets, daily goals) applies unchanged.
pub struct TransferService {
    pocket_service: Arc<dyn PocketServiceTrait>,
}

impl TransferService {
    pub fn new(pocket_service: Arc<dyn PocketServiceTrait>) -> Self {
        Self { pocket_service }
    }
}

impl TransferServiceTrait for TransferService {
    fn send_money(&self, request: SendMoneyRequest) -> Result<MovementReceipt> {
        let recipient = request.recipient.normalized()?;
        debug!(
            "Sending {} from pocket {} to {}",
            request.amount,
            request.pocket_id,
            recipient.label()
        );
        let movement = Movement::new(ActivityKind::Transfer).with_counterparty(recipient.label());
        self.pocket_service
            .debit(&request.pocket_id, request.amount, movement)
    }

    fn pay_bill(&self, request: BillPaymentRequest) -> Result<MovementReceipt> {
        let bill_number = request.bill_number.trim();
        if bill_number.is_empty() {
            return Err(
                PocketError::InvalidArgument("Bill number cannot be empty".to_string()).into(),
            );
        }
        let movement = Movement::new(ActivityKind::BillPayment)
            .with_counterparty(request.bill_type.display_name())
            .with_reference(bill_number);
        self.pocket_service
            .debit(&request.pocket_id, request.amount, movement)
    }

    fn top_up(&self, request: TopUpRequest) -> Result<MovementReceipt> {
        let movement =
            Movement::new(ActivityKind::TopUp).with_counterparty(request.method.display_name());
        self.pocket_service
            .credit(&request.pocket_id, request.amount, movement)
    }

    fn withdraw(&self, request: WithdrawRequest) -> Result<WithdrawalTicket> {
        let receipt = self.pocket_service.debit(
            &request.pocket_id,
            request.amount,
            Movement::new(ActivityKind::Withdrawal),
        )?;
        let payload = WithdrawQrPayload::new(&receipt.pocket.name, receipt.activity.amount);
        let qr_payload = serde_json::to_string(&payload)
            .map_err(|e| Error::Unexpected(format!("Failed to encode withdrawal QR: {}", e)))?;
        Ok(WithdrawalTicket {
            receipt,
            qr_payload,
        })
    }
}
