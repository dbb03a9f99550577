/// Cache key under which the full purchase list is stored
pub const PURCHASES_CACHE_KEY: &str = "stock:purchases";

/// Prefix for per-stock market data cache keys
pub const STOCK_CACHE_PREFIX: &str = "stock:";

/// Maximum number of decimal places accepted for money amounts
pub const MAX_MONEY_SCALE: u32 = 2;

// Cache TTLs, in seconds
pub const FIVE_MINUTES: u64 = 300;
pub const THIRTY_MINUTES: u64 = 1_800;
pub const ONE_HOUR: u64 = 3_600;
pub const ONE_DAY: u64 = 86_400;
pub const SEVEN_DAYS: u64 = 604_800;
