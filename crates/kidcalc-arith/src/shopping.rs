//! Mixed arithmetic: a market bill with a discount, VAT and a split payment.

use kidcalc_common::{Console, Demo, DemoInfo};
use serde::{Deserialize, Serialize};

pub const TAG: &str = "SHOPPING_MATH";

/// One line of the shopping list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub quantity: i64,
    pub unit_price: f64,
}

impl Product {
    pub fn new(name: impl Into<String>, quantity: i64, unit_price: f64) -> Self {
        Product {
            name: name.into(),
            quantity,
            unit_price,
        }
    }

    pub fn line_total(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }
}

/// Inputs for the shopping lesson.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShoppingConfig {
    pub products: Vec<Product>,
    /// Flat discount in baht.
    pub discount: f64,
    pub vat_percent: f64,
    /// People splitting the bill.
    pub people: u32,
}

impl Default for ShoppingConfig {
    fn default() -> Self {
        ShoppingConfig {
            products: vec![
                Product::new("apples", 6, 15.0),
                Product::new("bananas", 12, 8.0),
                Product::new("oranges", 8, 12.0),
            ],
            discount: 20.0,
            vat_percent: 7.0,
            people: 3,
        }
    }
}

pub fn subtotal(products: &[Product]) -> f64 {
    products.iter().map(Product::line_total).sum()
}

pub fn apply_discount(total: f64, discount: f64) -> f64 {
    total - discount
}

pub fn add_vat(total: f64, vat_percent: f64) -> f64 {
    total + total * vat_percent / 100.0
}

/// Each person's share, or `None` when nobody is paying.
pub fn split_payment(amount: f64, people: u32) -> Option<f64> {
    if people == 0 {
        return None;
    }
    Some(amount / people as f64)
}

/// Every step of the bill, computed once.
#[derive(Debug, Clone, PartialEq)]
pub struct Bill {
    pub subtotal: f64,
    pub discount: f64,
    pub after_discount: f64,
    pub vat_percent: f64,
    pub vat: f64,
    pub total: f64,
    pub people: u32,
    pub per_person: Option<f64>,
}

impl Bill {
    pub fn compute(products: &[Product], discount: f64, vat_percent: f64, people: u32) -> Self {
        let subtotal = subtotal(products);
        let after_discount = apply_discount(subtotal, discount);
        let total = add_vat(after_discount, vat_percent);
        Bill {
            subtotal,
            discount,
            after_discount,
            vat_percent,
            vat: total - after_discount,
            total,
            people,
            per_person: split_payment(total, people),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ShoppingDemo {
    config: ShoppingConfig,
}

impl ShoppingDemo {
    pub fn new(config: ShoppingConfig) -> Self {
        ShoppingDemo { config }
    }

    pub fn bill(&self) -> Bill {
        let c = &self.config;
        Bill::compute(&c.products, c.discount, c.vat_percent, c.people)
    }
}

impl Demo for ShoppingDemo {
    fn info(&self) -> DemoInfo {
        DemoInfo {
            id: "shopping",
            title: "Shopping at the market",
            tag: TAG,
            concept: "mixed billing arithmetic",
        }
    }

    fn run(&self, con: &mut Console<'_>) {
        let c = &self.config;

        con.info("🛒 Shopping at the market 🛒");
        con.info("=====================================");

        con.info("\n📖 Problem:");
        for p in &c.products {
            con.info(format_args!(
                "   - {}: {} units at {:.0} baht each",
                p.name, p.quantity, p.unit_price
            ));
        }
        con.info(format_args!("   - discount: {:.0} baht", c.discount));
        con.info(format_args!("   - VAT: {:.0}%", c.vat_percent));
        con.info(format_args!("   - split between: {} people", c.people));

        con.delay(2000);

        let bill = self.bill();
        tracing::debug!(subtotal = bill.subtotal, total = bill.total, "bill computed");

        con.info("\n🧾 Market receipt");
        con.info("   ==========================================");
        for p in &c.products {
            con.info(format_args!(
                "   {}: {} × {:.0} = {:.0} baht",
                p.name,
                p.quantity,
                p.unit_price,
                p.line_total()
            ));
        }
        con.info("   ------------------------------------------");
        con.info(format_args!("   subtotal:            {:>8.2} baht", bill.subtotal));
        con.info(format_args!("   discount:           -{:>8.2} baht", bill.discount));
        con.info(format_args!("   after discount:      {:>8.2} baht", bill.after_discount));
        con.info(format_args!(
            "   VAT {:.0}%:             +{:>8.2} baht",
            bill.vat_percent, bill.vat
        ));
        con.info("   ==========================================");
        con.info(format_args!("   total:               {:>8.2} baht", bill.total));
        match bill.per_person {
            Some(each) => con.info(format_args!(
                "   split {} ways:         {:>8.2} baht/person",
                bill.people, each
            )),
            None => con.error("the number of people must be greater than 0"),
        }
        con.info("   ==========================================");
        con.info("   Thank you for shopping ❤️");

        con.info("\n📚 What we learned:");
        con.info("   ✓ multiplication (×): price of each product");
        con.info("   ✓ addition (+): adding up the bill");
        con.info("   ✓ subtraction (-): taking off the discount");
        con.info("   ✓ division (÷): splitting the payment");
        con.info("   ✓ adding VAT");
        con.info("   ✓ structs and functions working together");
        con.info("   ➜ combining operations to solve real problems!");
    }
}
