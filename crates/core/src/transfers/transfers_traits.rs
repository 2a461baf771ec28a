use super::transfers_model::{
    BillPaymentRequest, SendMoneyRequest, TopUpRequest, WithdrawRequest, WithdrawalTicket,
};
use crate::errors::Result;
use crate::pockets::MovementReceipt;

/// Trait defining the contract for transfer operations.
pub trait TransferServiceTrait: Send + Sync {
    /// Sends money from a pocket to a bank account or PromptPay id.
    fn send_money(&self, request: SendMoneyRequest) -> Result<MovementReceipt>;

    fn pay_bill(&self, request: BillPaymentRequest) -> Result<MovementReceipt>;

    /// Credits a pocket through the full deposit transition.
    fn top_up(&self, request: TopUpRequest) -> Result<MovementReceipt>;

    /// Debits a pocket and issues a cardless withdrawal QR payload.
    fn withdraw(&self, request: WithdrawRequest) -> Result<WithdrawalTicket>;
}
