//! Cart aggregation and receipt formatting
//!
//! The cart keys lines by product id but keeps them in first-insertion
//! order for the receipt. Repeated additions of the same product merge
//! additively: weight and per-addition totals are summed, and the discount
//! is never recomputed against the merged weight (round-then-sum).

use std::fmt;

use tracing::debug;

use crate::models::CatalogItem;

/// Accumulated record of all additions of one product
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product_id: i64,
    pub name: String,
    /// Sum of all added weights, kilograms
    pub weight_kg: f64,
    /// Sum of all per-addition totals, each discounted and rounded on its own
    pub total: f64,
    /// Discount badge recorded when the line was created; merges keep it
    pub discount_percent: f64,
}

/// Session cart. No operation removes or decrements a line.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct products (the cart badge)
    pub fn distinct_items(&self) -> usize {
        self.lines.len()
    }

    /// Lines in first-insertion order
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Merge one addition into the cart. `total` must already be discounted
    /// and rounded for this addition alone.
    pub fn add(&mut self, item: &CatalogItem, weight_kg: f64, total: f64, discount_percent: f64) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == item.id) {
            line.weight_kg += weight_kg;
            line.total += total;
            debug!(product_id = item.id, weight_kg, total, "merged into cart line");
        } else {
            self.lines.push(CartLine {
                product_id: item.id,
                name: item.name.clone(),
                weight_kg,
                total,
                discount_percent,
            });
            debug!(product_id = item.id, weight_kg, total, "created cart line");
        }
    }

    pub fn grand_total(&self) -> f64 {
        self.lines.iter().map(|line| line.total).sum()
    }

    pub fn receipt(&self) -> Receipt {
        Receipt {
            lines: self
                .lines
                .iter()
                .map(|line| ReceiptLine {
                    name: line.name.clone(),
                    weight_label: format_weight(line.weight_kg),
                    discount_percent: line.discount_percent,
                    total: line.total,
                })
                .collect(),
            grand_total: self.grand_total(),
        }
    }
}

/// Human-friendly weight: grams below one kilogram, kilograms otherwise
pub fn format_weight(weight_kg: f64) -> String {
    if weight_kg >= 1.0 {
        format!("{} kg", weight_kg)
    } else {
        format!("{} g", (weight_kg * 1000.0).round() as i64)
    }
}

/// One formatted receipt line
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptLine {
    pub name: String,
    pub weight_label: String,
    pub discount_percent: f64,
    pub total: f64,
}

impl ReceiptLine {
    pub fn has_discount(&self) -> bool {
        self.discount_percent > 0.0
    }
}

/// Human-readable cart summary
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub lines: Vec<ReceiptLine>,
    pub grand_total: f64,
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lines.is_empty() {
            return write!(f, "Your cart is empty");
        }

        writeln!(f, "Your cart:")?;
        for line in &self.lines {
            writeln!(f)?;
            writeln!(f, "{}", line.name)?;
            if line.has_discount() {
                writeln!(f, "{} (-{}%)", line.weight_label, line.discount_percent)?;
            } else {
                writeln!(f, "{}", line.weight_label)?;
            }
            writeln!(f, "{} ₽", line.total)?;
        }
        write!(f, "\nTotal: {} ₽", self.grand_total)
    }
}
