//! # Extras Calculator
//!
//! Line-item math for the optional add-on items.
//!
//! The catalog is a fixed, ordered list of four items; the form supplies a
//! checkbox state and a quantity per item. Selected items contribute
//! `base_price × quantity` to the extras total, unselected items contribute
//! nothing and their line amount is cleared.
//!
//! ## Data Flow
//! ```text
//! checkbox + quantity input ──► ExtraSelection ──► calculate_extras()
//!                                                       │
//!                           ┌───────────────────────────┤
//!                           ▼                           ▼
//!                    per-item ExtraLine           extras total (Money)
//! ```

use serde::Serialize;

use crate::money::Money;
use crate::types::{ExtraItem, ExtraSelection};
use crate::{DEFAULT_EXTRA_QUANTITY, MAX_EXTRA_QUANTITY, MIN_EXTRA_QUANTITY};

// =============================================================================
// Catalog
// =============================================================================

/// The fixed extras catalog, in display order.
///
/// Ids match the booking form's checkbox ids; prices are authored in NAD.
pub const EXTRAS_CATALOG: [ExtraItem; 4] = [
    ExtraItem {
        id: "extra_0",
        name: "Child safety seat",
        base_price_cents: 12_000, // N$120.00
    },
    ExtraItem {
        id: "extra_2",
        name: "GPS navigation unit",
        base_price_cents: 16_500, // N$165.00
    },
    ExtraItem {
        id: "extra_3",
        name: "Rooftop tent",
        base_price_cents: 22_000, // N$220.00
    },
    ExtraItem {
        id: "extra_4",
        name: "Full camping equipment package",
        base_price_cents: 110_000, // N$1,100.00
    },
];

/// Looks up a catalog entry by id.
pub fn catalog_item(item_id: &str) -> Option<&'static ExtraItem> {
    EXTRAS_CATALOG.iter().find(|item| item.id == item_id)
}

// =============================================================================
// Quantity Handling
// =============================================================================

/// Clamps a raw quantity into the allowed range.
///
/// A missing value defaults to 1; anything below 1 becomes 1 and anything
/// above 5 becomes 5.
///
/// ## Example
/// ```rust
/// use namib_core::extras::clamp_quantity;
///
/// assert_eq!(clamp_quantity(Some(3)), 3);
/// assert_eq!(clamp_quantity(Some(7)), 5);
/// assert_eq!(clamp_quantity(Some(0)), 1);
/// assert_eq!(clamp_quantity(Some(-2)), 1);
/// assert_eq!(clamp_quantity(None), 1);
/// ```
pub fn clamp_quantity(raw: Option<i64>) -> i64 {
    raw.unwrap_or(DEFAULT_EXTRA_QUANTITY)
        .clamp(MIN_EXTRA_QUANTITY, MAX_EXTRA_QUANTITY)
}

/// Parses a quantity from the form's free-text input.
///
/// Non-numeric input defaults to 1, then the value is clamped into [1, 5].
pub fn parse_quantity(input: &str) -> i64 {
    clamp_quantity(input.trim().parse::<i64>().ok())
}

// =============================================================================
// Line Calculation
// =============================================================================

/// One computed extras line: the catalog entry plus its amount, if selected.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtraLine {
    /// Catalog id.
    pub item_id: &'static str,

    /// Catalog display name.
    pub name: &'static str,

    /// Unit price in NAD cents.
    pub base_price_cents: i64,

    /// Effective quantity; None when the item is unselected.
    pub quantity: Option<i64>,

    /// Line amount in NAD cents; None when the item is unselected
    /// (the display for a cleared line is "-", not 0).
    pub amount_cents: Option<i64>,
}

impl ExtraLine {
    /// Returns the line amount as Money, zero when unselected.
    #[inline]
    pub fn amount_or_zero(&self) -> Money {
        Money::from_cents(self.amount_cents.unwrap_or(0))
    }
}

/// All extras lines plus their aggregate total.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtrasBreakdown {
    /// Per-item lines in catalog order.
    pub lines: Vec<ExtraLine>,

    /// Sum of all selected line amounts in NAD cents.
    pub total_cents: i64,
}

impl ExtrasBreakdown {
    /// Returns the extras total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

/// Computes every extras line and the aggregate total.
///
/// Lines are produced in catalog order. Selections are matched by item id;
/// a selection whose id is not in the catalog contributes nothing, and a
/// catalog item with no selection entry is treated as unselected.
///
/// ## Example
/// ```rust
/// use namib_core::extras::{calculate_extras, EXTRAS_CATALOG};
/// use namib_core::types::ExtraSelection;
///
/// let mut selections: Vec<ExtraSelection> = EXTRAS_CATALOG
///     .iter()
///     .map(|item| ExtraSelection::unselected(item.id))
///     .collect();
/// selections[0].selected = true;
/// selections[0].set_quantity(3);
///
/// let breakdown = calculate_extras(&selections);
/// assert_eq!(breakdown.lines[0].amount_cents, Some(36_000)); // 120.00 × 3
/// assert_eq!(breakdown.total_cents, 36_000);
/// ```
pub fn calculate_extras(selections: &[ExtraSelection]) -> ExtrasBreakdown {
    let mut lines = Vec::with_capacity(EXTRAS_CATALOG.len());
    let mut total = Money::zero();

    for item in &EXTRAS_CATALOG {
        let selection = selections.iter().find(|s| s.item_id == item.id);

        let line = match selection {
            Some(sel) if sel.selected => {
                let quantity = clamp_quantity(Some(sel.quantity));
                let amount = item.base_price().multiply_quantity(quantity);
                total += amount;
                ExtraLine {
                    item_id: item.id,
                    name: item.name,
                    base_price_cents: item.base_price_cents,
                    quantity: Some(quantity),
                    amount_cents: Some(amount.cents()),
                }
            }
            _ => ExtraLine {
                item_id: item.id,
                name: item.name,
                base_price_cents: item.base_price_cents,
                quantity: None,
                amount_cents: None,
            },
        };
        lines.push(line);
    }

    ExtrasBreakdown {
        lines,
        total_cents: total.cents(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh_selections() -> Vec<ExtraSelection> {
        EXTRAS_CATALOG
            .iter()
            .map(|item| ExtraSelection::unselected(item.id))
            .collect()
    }

    #[test]
    fn test_catalog_prices() {
        let prices: Vec<i64> = EXTRAS_CATALOG
            .iter()
            .map(|item| item.base_price_cents)
            .collect();
        assert_eq!(prices, vec![12_000, 16_500, 22_000, 110_000]);
    }

    #[test]
    fn test_clamp_quantity() {
        assert_eq!(clamp_quantity(Some(1)), 1);
        assert_eq!(clamp_quantity(Some(5)), 5);
        assert_eq!(clamp_quantity(Some(7)), 5);
        assert_eq!(clamp_quantity(Some(0)), 1);
        assert_eq!(clamp_quantity(Some(-4)), 1);
        assert_eq!(clamp_quantity(None), 1);
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("3"), 3);
        assert_eq!(parse_quantity(" 2 "), 2);
        assert_eq!(parse_quantity("7"), 5);
        assert_eq!(parse_quantity("0"), 1);
        assert_eq!(parse_quantity("-1"), 1);
        assert_eq!(parse_quantity("abc"), 1);
        assert_eq!(parse_quantity(""), 1);
    }

    #[test]
    fn test_unselected_items_contribute_nothing() {
        let breakdown = calculate_extras(&fresh_selections());

        assert_eq!(breakdown.total_cents, 0);
        for line in &breakdown.lines {
            assert_eq!(line.quantity, None);
            assert_eq!(line.amount_cents, None);
        }
    }

    #[test]
    fn test_selected_line_amount() {
        let mut selections = fresh_selections();
        selections[0].selected = true;
        selections[0].set_quantity(3);

        let breakdown = calculate_extras(&selections);
        assert_eq!(breakdown.lines[0].amount_cents, Some(36_000));
        assert_eq!(breakdown.total_cents, 36_000);
    }

    #[test]
    fn test_multiple_selected_lines_sum() {
        let mut selections = fresh_selections();
        // Child seat × 2 = 240.00, camping package × 1 = 1,100.00
        selections[0].selected = true;
        selections[0].set_quantity(2);
        selections[3].selected = true;

        let breakdown = calculate_extras(&selections);
        assert_eq!(breakdown.lines[0].amount_cents, Some(24_000));
        assert_eq!(breakdown.lines[3].amount_cents, Some(110_000));
        assert_eq!(breakdown.total_cents, 134_000);
    }

    #[test]
    fn test_out_of_range_quantity_is_clamped_in_lines() {
        let mut selections = fresh_selections();
        selections[1].selected = true;
        selections[1].quantity = 9; // bypass the setter clamp on purpose

        let breakdown = calculate_extras(&selections);
        assert_eq!(breakdown.lines[1].quantity, Some(5));
        assert_eq!(breakdown.lines[1].amount_cents, Some(82_500)); // 165.00 × 5
    }

    #[test]
    fn test_unknown_selection_id_is_ignored() {
        let mut selections = fresh_selections();
        selections.push(ExtraSelection {
            item_id: "extra_99".to_string(),
            selected: true,
            quantity: 5,
        });

        let breakdown = calculate_extras(&selections);
        assert_eq!(breakdown.lines.len(), EXTRAS_CATALOG.len());
        assert_eq!(breakdown.total_cents, 0);
    }

    #[test]
    fn test_missing_selection_entry_is_unselected() {
        // Only one selection supplied; the other three catalog items
        // still produce cleared lines.
        let selections = vec![ExtraSelection {
            item_id: "extra_3".to_string(),
            selected: true,
            quantity: 1,
        }];

        let breakdown = calculate_extras(&selections);
        assert_eq!(breakdown.lines.len(), 4);
        assert_eq!(breakdown.lines[2].amount_cents, Some(22_000));
        assert_eq!(breakdown.total_cents, 22_000);
    }
}
