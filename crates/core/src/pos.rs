//! Point-of-sale cart for walk-in sales of services and products.

use chrono::NaiveDateTime;

use crate::errors::{BookingError, BookingResult};
use crate::models::catalog::{Product, Service};
use crate::models::pos::{
    EmployeeRef, PaymentMethod, PosTransactionRequest, ProductItem, ServiceItem,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Service,
    Product,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub kind: ItemKind,
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn contains(&self, kind: ItemKind, id: i64) -> bool {
        self.items.iter().any(|item| item.kind == kind && item.id == id)
    }

    /// Adds a service once; returns false if it was already in the cart.
    pub fn add_service(&mut self, service: &Service) -> bool {
        self.push(ItemKind::Service, service.service_id, &service.name, service.price)
    }

    /// Adds a product with quantity 1; returns false if it was already in the cart.
    pub fn add_product(&mut self, product: &Product) -> bool {
        self.push(ItemKind::Product, product.product_id, &product.name, product.price)
    }

    fn push(&mut self, kind: ItemKind, id: i64, name: &str, price: f64) -> bool {
        if self.contains(kind, id) {
            return false;
        }
        self.items.push(CartItem {
            kind,
            id,
            name: name.to_string(),
            price,
            quantity: 1,
        });
        true
    }

    pub fn remove(&mut self, kind: ItemKind, id: i64) {
        self.items.retain(|item| !(item.kind == kind && item.id == id));
    }

    /// Services are always sold once, so only product quantities change.
    /// A quantity of zero removes the product.
    pub fn set_product_quantity(&mut self, id: i64, quantity: u32) {
        if quantity == 0 {
            self.remove(ItemKind::Product, id);
            return;
        }
        if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.kind == ItemKind::Product && item.id == id)
        {
            item.quantity = quantity;
        }
    }

    pub fn total(&self) -> f64 {
        self.items
            .iter()
            .map(|item| item.price * f64::from(item.quantity))
            .sum()
    }

    /// Change owed for a cash payment; zero when the cash does not cover the total.
    pub fn change_for(&self, cash_given: f64) -> f64 {
        let total = self.total();
        if cash_given >= total {
            cash_given - total
        } else {
            0.0
        }
    }

    /// Builds the transaction submitted to the backend.
    pub fn checkout(
        &self,
        customer: &str,
        employee_id: Option<i64>,
        payment_method: PaymentMethod,
        cash_given: Option<f64>,
        at: NaiveDateTime,
    ) -> BookingResult<PosTransactionRequest> {
        let customer = customer.trim();
        if customer.is_empty() {
            return Err(BookingError::Validation("customer is required".into()));
        }
        let employee_id = employee_id
            .ok_or_else(|| BookingError::Validation("employee is required".into()))?;
        if self.is_empty() {
            return Err(BookingError::Validation("cart is empty".into()));
        }

        let total = self.total();
        if payment_method == PaymentMethod::Cash {
            match cash_given {
                Some(cash) if cash >= total => {}
                _ => {
                    return Err(BookingError::Validation(format!(
                        "cash given must cover the total of {:.2}",
                        total
                    )));
                }
            }
        }

        let services = self
            .items
            .iter()
            .filter(|item| item.kind == ItemKind::Service)
            .map(|item| ServiceItem {
                service_id: item.id,
                price: item.price,
                quantity: item.quantity,
            })
            .collect();
        let products = self
            .items
            .iter()
            .filter(|item| item.kind == ItemKind::Product)
            .map(|item| ProductItem {
                product_id: item.id,
                quantity: item.quantity,
                price: item.price,
            })
            .collect();

        Ok(PosTransactionRequest {
            customer: customer.to_string(),
            employee: EmployeeRef { employee_id },
            services,
            products,
            payment_method,
            total_amount: total,
            transaction_time: at,
        })
    }
}
