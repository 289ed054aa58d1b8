use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use console::style;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::{
    models::payment::PaymentMethod,
    services::{Cart, CartError, CatalogService, CatalogServiceError},
    utils::formatting::{
        format_cart_summary, format_product_row, format_receipt, MENU_BANNER, MENU_OPTIONS,
        PAYMENT_OPTIONS,
    },
};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MenuError {
    #[error("Invalid menu option.")]
    InvalidOption,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ViewProducts,
    AddToCart,
    RemoveFromCart,
    ViewCart,
    Checkout,
    Exit,
}

impl TryFrom<i64> for MenuChoice {
    type Error = MenuError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(MenuChoice::ViewProducts),
            2 => Ok(MenuChoice::AddToCart),
            3 => Ok(MenuChoice::RemoveFromCart),
            4 => Ok(MenuChoice::ViewCart),
            5 => Ok(MenuChoice::Checkout),
            6 => Ok(MenuChoice::Exit),
            _ => Err(MenuError::InvalidOption),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

fn parse_number(input: &str) -> Option<i64> {
    input.trim().parse().ok()
}

/// Interactive menu loop over any line-based input and text output.
pub struct Shell<R, W> {
    input: R,
    output: W,
    catalog: CatalogService,
    cart: Cart,
    colors: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self::with_state(input, output, CatalogService::seeded(), Cart::new())
    }

    pub fn with_state(input: R, output: W, catalog: CatalogService, cart: Cart) -> Self {
        Self {
            input,
            output,
            catalog,
            cart,
            colors: false,
        }
    }

    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn catalog(&self) -> &CatalogService {
        &self.catalog
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Run until the user picks Exit or input runs out.
    pub fn run(&mut self) -> Result<()> {
        info!("Shopping session started");

        loop {
            self.show_menu()?;
            let Some(line) = self.prompt("Enter choice: ")? else {
                info!("Input closed, ending session");
                break;
            };

            let choice = match parse_number(&line).map(MenuChoice::try_from) {
                Some(Ok(choice)) => choice,
                _ => {
                    debug!("Invalid menu input: '{}'", line.trim());
                    self.report(&MenuError::InvalidOption)?;
                    continue;
                }
            };
            debug!("Menu choice: {:?}", choice);

            if self.dispatch(choice)? == Flow::Quit {
                break;
            }
        }

        info!("Shopping session ended");
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::ViewProducts => self.handle_view_products(),
            MenuChoice::AddToCart => self.handle_add_to_cart(),
            MenuChoice::RemoveFromCart => self.handle_remove_from_cart(),
            MenuChoice::ViewCart => self.handle_view_cart(),
            MenuChoice::Checkout => self.handle_checkout(),
            MenuChoice::Exit => {
                let farewell = style("Thank you for shopping with us!")
                    .green()
                    .force_styling(self.colors);
                writeln!(self.output, "{}", farewell)?;
                Ok(Flow::Quit)
            }
        }
    }

    fn handle_view_products(&mut self) -> Result<Flow> {
        for product in self.catalog.list_products() {
            writeln!(self.output, "{}", format_product_row(&product))?;
        }
        Ok(Flow::Continue)
    }

    fn handle_add_to_cart(&mut self) -> Result<Flow> {
        let Some(id_input) = self.prompt("Enter product ID: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(quantity_input) = self.prompt("Enter quantity: ")? else {
            return Ok(Flow::Quit);
        };

        let product = match parse_number(&id_input) {
            Some(id) => self.catalog.find_product(id),
            None => Err(CatalogServiceError::ProductNotFound),
        };
        let product = match product {
            Ok(product) => product,
            Err(e) => {
                self.report(&e)?;
                return Ok(Flow::Continue);
            }
        };

        let Some(quantity) = parse_number(&quantity_input) else {
            debug!("Unparsable quantity: '{}'", quantity_input.trim());
            self.report(&CartError::InvalidQuantity {
                requested: 0,
                available: product.stock,
            })?;
            return Ok(Flow::Continue);
        };

        match self.cart.add(&product, quantity) {
            Ok(outcome) => {
                info!("Added {} x '{}' to cart ({:?})", quantity, product.name, outcome);
                if let Err(e) = self.catalog.reduce_stock(product.id, quantity) {
                    error!(
                        "Cart accepted {} x product {} but stock was not reduced: {}",
                        quantity, product.id, e
                    );
                    self.report(&e)?;
                }
            }
            Err(e) => self.report(&e)?,
        }

        Ok(Flow::Continue)
    }

    fn handle_remove_from_cart(&mut self) -> Result<Flow> {
        let Some(id_input) = self.prompt("Enter product ID to remove: ")? else {
            return Ok(Flow::Quit);
        };

        let removed = match parse_number(&id_input) {
            Some(id) => self.cart.remove(id),
            None => Err(CartError::ItemNotFound(0)),
        };
        match removed {
            Ok(_) => writeln!(self.output, "Item removed from cart.")?,
            Err(e) => self.report(&e)?,
        }

        Ok(Flow::Continue)
    }

    fn handle_view_cart(&mut self) -> Result<Flow> {
        match self.cart.summary() {
            Ok(summary) => write!(self.output, "{}", format_cart_summary(&summary))?,
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn handle_checkout(&mut self) -> Result<Flow> {
        writeln!(self.output, "Choose payment method:")?;
        for option in PAYMENT_OPTIONS {
            writeln!(self.output, "{}", option)?;
        }
        let Some(choice_input) = self.prompt("Choice: ")? else {
            return Ok(Flow::Quit);
        };

        let payment_method = match parse_number(&choice_input) {
            Some(choice) => PaymentMethod::try_from(choice),
            None => PaymentMethod::try_from(0),
        };
        let payment_method = match payment_method {
            Ok(method) => method,
            Err(e) => {
                debug!("Invalid payment choice: '{}'", choice_input.trim());
                self.report(&e)?;
                return Ok(Flow::Continue);
            }
        };

        match self.cart.checkout(payment_method) {
            Ok(receipt) => {
                writeln!(self.output, "{}", receipt.payment_message)?;
                write!(self.output, "{}", format_receipt(&receipt))?;
                match serde_json::to_string(&receipt) {
                    Ok(json) => debug!("Receipt: {}", json),
                    Err(e) => warn!("Failed to serialize receipt: {}", e),
                }
            }
            Err(e) => self.report(&e)?,
        }

        Ok(Flow::Continue)
    }

    fn show_menu(&mut self) -> Result<()> {
        let banner = style(MENU_BANNER).bold().cyan().force_styling(self.colors);
        writeln!(self.output, "\n{}", banner)?;
        for option in MENU_OPTIONS {
            writeln!(self.output, "{}", option)?;
        }
        Ok(())
    }

    /// Print `text` without a newline and read one line. `None` on end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush().context("Failed to flush output")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn report(&mut self, message: &dyn std::fmt::Display) -> Result<()> {
        let message = style(message.to_string()).red().force_styling(self.colors);
        writeln!(self.output, "{}", message)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_choice_mapping() {
        assert_eq!(MenuChoice::try_from(1), Ok(MenuChoice::ViewProducts));
        assert_eq!(MenuChoice::try_from(5), Ok(MenuChoice::Checkout));
        assert_eq!(MenuChoice::try_from(6), Ok(MenuChoice::Exit));
        assert_eq!(MenuChoice::try_from(7), Err(MenuError::InvalidOption));
        assert_eq!(MenuChoice::try_from(0), Err(MenuError::InvalidOption));
    }

    #[test]
    fn test_parse_number_trims_and_rejects_text() {
        assert_eq!(parse_number(" 3\n"), Some(3));
        assert_eq!(parse_number("-2"), Some(-2));
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number(""), None);
    }
}
