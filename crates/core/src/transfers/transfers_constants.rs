/// Banks accepted as the destination of an account transfer.
pub const SUPPORTED_BANKS: [&str; 9] = [
    "Bangkok Bank",
    "Kasikornbank",
    "Siam Commercial Bank",
    "Krung Thai Bank",
    "Bank of Ayudhya",
    "TMB Bank",
    "CIMB Thai",
    "Kiatnakin Bank",
    "UOB Thailand",
];

/// Action field of a cardless withdrawal QR payload.
pub const WITHDRAW_QR_ACTION: &str = "withdraw";

