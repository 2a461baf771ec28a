/// Currency every pocket is denominated in unless configured otherwise.
pub const DEFAULT_CURRENCY: &str = "THB";

/// Decimal places kept on stored amounts.
pub const AMOUNT_PRECISION: u32 = 2;

/// Largest amount or balance a pocket accepts, in whole currency units.
/// Keeps the sum across pockets far below `Decimal::MAX`.
pub const MAX_POCKET_BALANCE: i64 = 1_000_000_000_000;

/// Preset amounts offered by the top-up and bill payment screens.
pub const QUICK_AMOUNTS: [u32; 6] = [500, 1000, 2000, 5000, 10000, 20000];
