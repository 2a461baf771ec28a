//! Tests for transfer operations applied through the pocket service.

#[cfg(test)]
mod tests {
    use crate::errors::Error;
    use crate::events::NoOpDomainEventSink;
    use crate::pockets::{
        demo_pockets, ActivityKind, PocketError, PocketService, PocketServiceTrait,
        EMERGENCY_POCKET_ID, MAIN_POCKET_ID, SAVINGS_POCKET_ID,
    };
    use crate::settings::LedgerSettings;
    use crate::transfers::{
        BillPaymentRequest, BillType, SendMoneyRequest, TopUpMethod, TopUpRequest,
        TransferRecipient, TransferService, TransferServiceTrait, WithdrawRequest,
    };
    use crate::utils::time_utils::FixedClock;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    fn setup() -> (Arc<PocketService>, TransferService) {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let clock = Arc::new(FixedClock::at_date(date));
        let pockets = Arc::new(PocketService::with_clock(
            LedgerSettings::default(),
            clock,
            Arc::new(NoOpDomainEventSink),
        ));
        pockets
            .restore(demo_pockets(date.and_hms_opt(0, 0, 0).unwrap().and_utc()))
            .unwrap();
        let transfers = TransferService::new(pockets.clone());
        (pockets, transfers)
    }

    fn pocket_error(err: Error) -> PocketError {
        err.as_pocket_error()
            .cloned()
            .unwrap_or_else(|| panic!("expected pocket error, got {:?}", err))
    }

    fn bank_recipient(bank: &str, account: &str) -> TransferRecipient {
        TransferRecipient::BankAccount {
            bank: bank.to_string(),
            account_number: account.to_string(),
        }
    }

    // ==================== Send ====================

    #[test]
    fn test_send_to_bank_account_debits_pocket() {
        let (pockets, transfers) = setup();
        let receipt = transfers
            .send_money(SendMoneyRequest {
                pocket_id: MAIN_POCKET_ID.to_string(),
                recipient: bank_recipient("kasikornbank", " 123-4-56789 "),
                amount: dec!(1500),
            })
            .unwrap();

        assert_eq!(receipt.pocket.balance, dec!(248500));
        assert_eq!(receipt.activity.kind, ActivityKind::Transfer);
        assert_eq!(
            receipt.activity.counterparty.as_deref(),
            Some("Kasikornbank - 123-4-56789")
        );
        assert_eq!(
            pockets.get_pocket(MAIN_POCKET_ID).unwrap().unwrap().balance,
            dec!(248500)
        );
    }

    #[test]
    fn test_send_to_promptpay() {
        let (_, transfers) = setup();
        let receipt = transfers
            .send_money(SendMoneyRequest {
                pocket_id: MAIN_POCKET_ID.to_string(),
                recipient: TransferRecipient::PromptPay {
                    id: "0812345678".to_string(),
                },
                amount: dec!(20.50),
            })
            .unwrap();
        assert_eq!(receipt.activity.counterparty.as_deref(), Some("0812345678"));
    }

    #[test]
    fn test_send_rejects_bad_recipients() {
        let (pockets, transfers) = setup();
        for recipient in [
            bank_recipient("Bank of Nowhere", "1"),
            bank_recipient("Bangkok Bank", "  "),
            TransferRecipient::PromptPay { id: "".to_string() },
        ] {
            let err = transfers
                .send_money(SendMoneyRequest {
                    pocket_id: MAIN_POCKET_ID.to_string(),
                    recipient,
                    amount: dec!(1),
                })
                .unwrap_err();
            assert!(matches!(
                pocket_error(err),
                PocketError::InvalidArgument(_)
            ));
        }
        assert!(pockets.list_activities(None).unwrap().is_empty());
    }

    #[test]
    fn test_send_from_locked_pocket_fails() {
        let (_, transfers) = setup();
        let err = transfers
            .send_money(SendMoneyRequest {
                pocket_id: EMERGENCY_POCKET_ID.to_string(),
                recipient: bank_recipient("Bangkok Bank", "111"),
                amount: dec!(1),
            })
            .unwrap_err();
        assert!(matches!(pocket_error(err), PocketError::PocketLocked(_)));
    }

    // ==================== Bills ====================

    #[test]
    fn test_pay_bill_records_reference() {
        let (_, transfers) = setup();
        let receipt = transfers
            .pay_bill(BillPaymentRequest {
                pocket_id: MAIN_POCKET_ID.to_string(),
                bill_type: BillType::Electricity,
                bill_number: "EL-2024-06".to_string(),
                amount: dec!(1200),
            })
            .unwrap();
        assert_eq!(receipt.activity.kind, ActivityKind::BillPayment);
        assert_eq!(receipt.activity.reference.as_deref(), Some("EL-2024-06"));
        assert_eq!(
            receipt.activity.counterparty.as_deref(),
            Some("Electricity Bill")
        );
    }

    #[test]
    fn test_pay_bill_over_balance_fails() {
        let (pockets, transfers) = setup();
        let err = transfers
            .pay_bill(BillPaymentRequest {
                pocket_id: MAIN_POCKET_ID.to_string(),
                bill_type: BillType::Water,
                bill_number: "W-1".to_string(),
                amount: dec!(250000.01),
            })
            .unwrap_err();
        assert!(matches!(
            pocket_error(err),
            PocketError::InsufficientFunds { .. }
        ));
        assert_eq!(
            pockets.get_pocket(MAIN_POCKET_ID).unwrap().unwrap().balance,
            dec!(250000)
        );
    }

    #[test]
    fn test_pay_bill_requires_bill_number() {
        let (_, transfers) = setup();
        let err = transfers
            .pay_bill(BillPaymentRequest {
                pocket_id: MAIN_POCKET_ID.to_string(),
                bill_type: BillType::Phone,
                bill_number: " ".to_string(),
                amount: dec!(10),
            })
            .unwrap_err();
        assert!(matches!(
            pocket_error(err),
            PocketError::InvalidArgument(_)
        ));
    }

    // ==================== Top-up ====================

    #[test]
    fn test_top_up_goes_through_deposit_rules() {
        let (pockets, transfers) = setup();
        pockets.set_daily_goal(MAIN_POCKET_ID, dec!(500)).unwrap();

        let receipt = transfers
            .top_up(TopUpRequest {
                pocket_id: MAIN_POCKET_ID.to_string(),
                method: TopUpMethod::Card,
                amount: dec!(500),
            })
            .unwrap();
        assert_eq!(receipt.pocket.balance, dec!(250500));
        assert_eq!(receipt.pocket.streak, 1);
        assert_eq!(receipt.activity.kind, ActivityKind::TopUp);
    }

    #[test]
    fn test_top_up_respects_daily_pocket_mode() {
        let (pockets, transfers) = setup();
        pockets.set_daily_pocket(MAIN_POCKET_ID).unwrap();
        let err = transfers
            .top_up(TopUpRequest {
                pocket_id: SAVINGS_POCKET_ID.to_string(),
                method: TopUpMethod::BankTransfer,
                amount: dec!(100),
            })
            .unwrap_err();
        assert!(matches!(
            pocket_error(err),
            PocketError::ModeRestricted { .. }
        ));
    }

    #[test]
    fn test_top_up_auto_locks_savings() {
        let (_, transfers) = setup();
        let receipt = transfers
            .top_up(TopUpRequest {
                pocket_id: SAVINGS_POCKET_ID.to_string(),
                method: TopUpMethod::BankTransfer,
                amount: dec!(1000),
            })
            .unwrap();
        assert!(receipt.pocket.is_locked);
    }

    // ==================== Withdraw ====================

    #[test]
    fn test_withdraw_returns_qr_payload() {
        let (_, transfers) = setup();
        let ticket = transfers
            .withdraw(WithdrawRequest {
                pocket_id: MAIN_POCKET_ID.to_string(),
                amount: dec!(2000),
            })
            .unwrap();

        assert_eq!(ticket.receipt.pocket.balance, dec!(248000));
        assert_eq!(ticket.receipt.activity.kind, ActivityKind::Withdrawal);

        let payload: serde_json::Value = serde_json::from_str(&ticket.qr_payload).unwrap();
        assert_eq!(payload["action"], "withdraw");
        assert_eq!(payload["pocket"], "Main Account");
        assert_eq!(payload["amount"].as_f64(), Some(2000.0));
    }

    #[test]
    fn test_withdraw_from_locked_pocket_fails() {
        let (_, transfers) = setup();
        let err = transfers
            .withdraw(WithdrawRequest {
                pocket_id: EMERGENCY_POCKET_ID.to_string(),
                amount: dec!(100),
            })
            .unwrap_err();
        assert!(matches!(pocket_error(err), PocketError::PocketLocked(_)));
    }

    // ==================== Serialization ====================

    #[test]
    fn test_recipient_serialization_is_tagged() {
        let json = serde_json::to_value(bank_recipient("Bangkok Bank", "42")).unwrap();
        assert_eq!(json["type"], "bankAccount");
        assert_eq!(json["accountNumber"], "42");

        let parsed: TransferRecipient =
            serde_json::from_str(r#"{"type":"promptPay","id":"0899999999"}"#).unwrap();
        assert_eq!(
            parsed,
            TransferRecipient::PromptPay {
                id: "0899999999".to_string()
            }
        );
    }
}
