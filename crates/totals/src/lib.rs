//! The totals engine.
//!
//! Everything is recomputed from scratch on each call, which keeps it safe to
//! run after every keystroke of an editing surface: no caches, no shared
//! state, no invalidation.

use invoicer_types::{LineItem, TaxRates, Totals};
use rust_decimal::Decimal;

pub use invoicer_types::{line_amount, round_money};

/// Computes the totals of an invoice.
///
/// The subtotal is the sum of every line amount. Each tax component is
/// applied once to the rounded subtotal, not line by line, so the result can
/// differ from summing per-line taxes by a cent.
pub fn compute_totals(items: &[LineItem], rates: TaxRates) -> Totals {
    let (subtotal, total_quantity) = items.iter().fold(
        (Decimal::ZERO, Decimal::ZERO),
        |(amount_sum, quantity_sum), item| {
            (
                amount_sum.saturating_add(item.amount()),
                quantity_sum.saturating_add(item.quantity),
            )
        },
    );

    let subtotal = round_money(subtotal);
    let cgst = round_money(subtotal.saturating_mul(rates.cgst_rate));
    let sgst = round_money(subtotal.saturating_mul(rates.sgst_rate));
    let total = round_money(subtotal.saturating_add(cgst).saturating_add(sgst));

    let totals = Totals {
        subtotal,
        cgst,
        sgst,
        total,
        total_quantity: round_money(total_quantity),
    };
    log::trace!("computed totals for {} items: {:?}", items.len(), totals);
    totals
}
