//! The balance summary cards shown at the top of the dashboard.

use maud::{Markup, html};

use crate::{api::Balance, html::format_currency};

const CARD_STYLE: &str = "p-6 bg-white border border-gray-200 rounded-lg \
    shadow-md dark:bg-gray-800 dark:border-gray-700";

// The total card keeps its orange accent in both color schemes.
const TOTAL_CARD_STYLE: &str = "p-6 bg-orange-500 border border-orange-500 \
    rounded-lg shadow-md text-white";

/// Renders the income, outcome and total cards for a balance.
pub(super) fn balance_cards_view(balance: &Balance) -> Markup {
    html! {
        section
            id="balance-cards"
            class="grid grid-cols-1 gap-4 mb-8 sm:grid-cols-3"
        {
            (balance_card("balance-income", "Income", balance.income, CARD_STYLE))
            (balance_card("balance-outcome", "Outcome", balance.outcome, CARD_STYLE))
            (balance_card("balance-total", "Total", balance.total, TOTAL_CARD_STYLE))
        }
    }
}

fn balance_card(id: &str, label: &str, amount: i64, style: &str) -> Markup {
    html! {
        div class=(style) {
            p class="mb-2 text-sm font-medium" { (label) }

            p id=(id) class="text-2xl font-bold whitespace-nowrap" {
                (format_currency(amount))
            }
        }
    }
}
