use std::fmt;

/// Money is represented as whole kronor. The machine only deals in integer
/// denominations, so there is no fractional unit to track.
pub type Kronor = i64;

/// Denominations the machine accepts, largest first. The greedy change
/// algorithm depends on this ordering, and on the set being canonical
/// (largest-first decomposition yields the minimal coin count).
pub const DENOMINATIONS: [Kronor; 8] = [1000, 500, 100, 50, 20, 10, 5, 1];

/// Check whether an amount is a coin or note the machine accepts.
pub fn is_valid_denomination(amount: Kronor) -> bool {
    DENOMINATIONS.contains(&amount)
}

/// Format an amount as a currency string.
/// Example: 15 -> "15kr", 0 -> "0kr"
pub fn format_kronor(amount: Kronor) -> String {
    format!("{}kr", amount)
}

/// Parse user input into an amount.
/// Example: "100" -> 100, " 50 " -> 50
pub fn parse_amount(input: &str) -> Result<Kronor, ParseAmountError> {
    input
        .trim()
        .parse()
        .map_err(|_| ParseAmountError::InvalidFormat)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseAmountError {
    InvalidFormat,
}

impl fmt::Display for ParseAmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseAmountError::InvalidFormat => write!(f, "expected a whole number"),
        }
    }
}

impl std::error::Error for ParseAmountError {}
