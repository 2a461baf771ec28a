//! Transfers module - money movements requested from the send, pay, top-up
//! and withdraw screens, applied as single pocket ledger credits or debits.

mod transfers_constants;
mod transfers_model;
mod transfers_service;
mod transfers_traits;

#[cfg(test)]
mod transfers_service_tests;

pub use transfers_constants::*;
pub use transfers_model::{
    BillPaymentRequest, BillType, SendMoneyRequest, TopUpMethod, TopUpRequest, TransferRecipient,
    WithdrawQrPayload, WithdrawRequest, WithdrawalTicket,
};
pub use transfers_service::TransferService;
pub use transfers_traits::TransferServiceTrait;
