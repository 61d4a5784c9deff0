use tracing::debug;

use crate::domain::{
    change_breakdown, is_valid_denomination, Catalog, ChangeBreakdown, Kronor, Product, ProductId,
};

use super::AppError;

/// Application service providing high-level operations for the machine.
/// This is the primary interface for any client (CLI, TUI, etc.): it owns
/// the catalog and the running balance, and nothing else mutates them.
pub struct VendingService {
    catalog: Catalog,
    balance: Kronor,
}

/// Result of a purchase attempt against the current balance. A decline is
/// a normal outcome of using the machine, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurchaseOutcome {
    /// Cost was covered: the product dropped into the tray and its cost
    /// left the balance.
    Dispensed { product: Product, balance: Kronor },
    /// Balance did not cover the cost; nothing changed.
    InsufficientFunds { balance: Kronor, required: Kronor },
}

impl VendingService {
    /// Create a new machine around a catalog, with an empty balance.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            balance: 0,
        }
    }

    /// Money inserted so far and not yet spent or returned.
    pub fn balance(&self) -> Kronor {
        self.balance
    }

    // ========================
    // Catalog operations
    // ========================

    /// All products, in catalog order.
    pub fn products(&self) -> &[Product] {
        self.catalog.products()
    }

    /// Full details for one product.
    pub fn product_details(&self, id: ProductId) -> Result<&Product, AppError> {
        self.catalog.get(id).ok_or(AppError::ProductNotFound(id))
    }

    // ========================
    // Money operations
    // ========================

    /// Accept a coin or note. Rejects anything that is not an exact
    /// denomination without touching the balance; otherwise returns the
    /// new balance.
    pub fn insert_money(&mut self, amount: Kronor) -> Result<Kronor, AppError> {
        if !is_valid_denomination(amount) {
            debug!(amount, "rejected denomination");
            return Err(AppError::InvalidDenomination(amount));
        }

        self.balance += amount;
        debug!(amount, balance = self.balance, "accepted money");
        Ok(self.balance)
    }

    /// Attempt to buy a product. Unknown ids are an error; a balance too
    /// small for the cost is a declined outcome and leaves the balance
    /// untouched.
    pub fn purchase(&mut self, id: ProductId) -> Result<PurchaseOutcome, AppError> {
        let product = self.catalog.get(id).ok_or(AppError::ProductNotFound(id))?;

        if self.balance < product.cost {
            debug!(
                id,
                balance = self.balance,
                cost = product.cost,
                "purchase declined"
            );
            return Ok(PurchaseOutcome::InsufficientFunds {
                balance: self.balance,
                required: product.cost,
            });
        }

        let product = product.clone();
        self.balance -= product.cost;
        debug!(id, balance = self.balance, "product dispensed");

        Ok(PurchaseOutcome::Dispensed {
            product,
            balance: self.balance,
        })
    }

    /// Return the remaining balance as change and reset it to zero. The
    /// breakdown is greedy over the machine's denominations, so it uses
    /// the fewest pieces the set allows.
    pub fn end_transaction(&mut self) -> ChangeBreakdown {
        let change = change_breakdown(self.balance);
        debug!(
            returned = self.balance,
            pieces = change.piece_count(),
            "transaction ended"
        );
        self.balance = 0;
        change
    }
}
