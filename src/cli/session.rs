use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::debug;

use crate::application::{PurchaseOutcome, VendingService};
use crate::domain::{format_kronor, parse_amount, parse_product_id, Kronor, ProductId};

/// One interactive session at the machine: a blocking read-eval loop over
/// a menu. Generic over its input and output so tests can drive it with
/// in-memory buffers instead of stdin/stdout.
///
/// Recoverable failures (unknown ids, rejected denominations, unparseable
/// input) are printed as `Error:` lines and the loop carries on; the
/// session only ends on the exit option or end of input.
pub struct Session<R, W> {
    service: VendingService,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(service: VendingService, input: R, output: W) -> Self {
        Self {
            service,
            input,
            output,
        }
    }

    /// The machine behind this session, for inspecting state after `run`.
    pub fn service(&self) -> &VendingService {
        &self.service
    }

    pub fn run(&mut self) -> Result<()> {
        debug!("session started");

        loop {
            self.show_menu()?;
            let Some(line) = self.read_line()? else {
                break;
            };

            match line.trim().parse::<u32>().ok() {
                Some(1) => self.show_products()?,
                Some(2) => self.insert_money()?,
                Some(3) => self.buy_product()?,
                Some(4) => self.show_details()?,
                Some(5) => self.end_transaction()?,
                Some(6) => break,
                _ => writeln!(self.output, "Invalid option. Please try again.")?,
            }
        }

        debug!("session ended");
        Ok(())
    }

    fn show_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Welcome to the Vending Machine!")?;
        writeln!(self.output)?;
        writeln!(self.output, "1. Show all products")?;
        writeln!(self.output, "2. Insert money")?;
        writeln!(self.output, "3. Buy product")?;
        writeln!(self.output, "4. Show product details")?;
        writeln!(self.output, "5. End transaction")?;
        writeln!(self.output, "6. Exit")?;
        writeln!(self.output)?;
        write!(self.output, "Select an option: ")?;
        self.output.flush()?;
        Ok(())
    }

    fn show_products(&mut self) -> Result<()> {
        for product in self.service.products() {
            writeln!(self.output, "{}", product.summary())?;
        }
        Ok(())
    }

    fn insert_money(&mut self) -> Result<()> {
        let Some(amount) = self.read_amount(
            "Insert amount (valid denominations: 1, 5, 10, 20, 50, 100, 500, 1000): ",
        )?
        else {
            return Ok(());
        };

        match self.service.insert_money(amount) {
            Ok(balance) => writeln!(
                self.output,
                "Inserted {}. Current balance: {}.",
                format_kronor(amount),
                format_kronor(balance)
            )?,
            Err(err) => writeln!(self.output, "Error: {}", err)?,
        }
        Ok(())
    }

    fn buy_product(&mut self) -> Result<()> {
        self.show_products()?;

        let Some(id) = self.read_product_id("Enter product Id to buy: ")? else {
            return Ok(());
        };

        match self.service.purchase(id) {
            Ok(PurchaseOutcome::Dispensed { product, .. }) => writeln!(
                self.output,
                "Purchased {}. {}",
                product.name,
                product.consume()
            )?,
            Ok(PurchaseOutcome::InsufficientFunds { .. }) => {
                writeln!(self.output, "Not enough money. Please insert more money.")?
            }
            Err(err) => writeln!(self.output, "Error: {}", err)?,
        }
        Ok(())
    }

    fn show_details(&mut self) -> Result<()> {
        let Some(id) = self.read_product_id("Enter product Id for details: ")? else {
            return Ok(());
        };

        match self.service.product_details(id) {
            Ok(product) => writeln!(self.output, "{}", product.describe())?,
            Err(err) => writeln!(self.output, "Error: {}", err)?,
        }
        Ok(())
    }

    fn end_transaction(&mut self) -> Result<()> {
        let change = self.service.end_transaction();
        if change.is_empty() {
            writeln!(self.output, "Transaction ended. No change to return.")?;
        } else {
            writeln!(self.output, "Transaction ended. Change returned: {}", change)?;
        }
        Ok(())
    }

    /// Prompt for and parse a money amount. Parse failures are reported
    /// to the user and yield `None`, as does end of input.
    fn read_amount(&mut self, prompt: &str) -> Result<Option<Kronor>> {
        let Some(line) = self.prompt(prompt)? else {
            return Ok(None);
        };
        match parse_amount(&line) {
            Ok(amount) => Ok(Some(amount)),
            Err(err) => {
                writeln!(self.output, "Error: {}", err)?;
                Ok(None)
            }
        }
    }

    /// Prompt for and parse a product id, with the same failure handling
    /// as [`Self::read_amount`].
    fn read_product_id(&mut self, prompt: &str) -> Result<Option<ProductId>> {
        let Some(line) = self.prompt(prompt)? else {
            return Ok(None);
        };
        match parse_product_id(&line) {
            Ok(id) => Ok(Some(id)),
            Err(err) => {
                writeln!(self.output, "Error: {}", err)?;
                Ok(None)
            }
        }
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Read one line; `None` means the input is exhausted and the session
    /// should wind down.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
