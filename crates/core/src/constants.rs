/// Months per year, used to annualize monthly figures.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Decimal places kept on valuation bounds.
pub const VALUATION_DECIMAL_PRECISION: u32 = 2;

/// Upper bound for a churn rate expressed in percent.
pub const MAX_CHURN_RATE_PCT: u32 = 100;
