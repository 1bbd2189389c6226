//! The route handler and views for the dashboard page.

use std::sync::Arc;

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState,
    api::{TransactionsApi, TransactionSummary},
    dashboard::{cards::balance_cards_view, table::transactions_table_view},
    endpoints,
    html::{base, link},
    navigation::NavBar,
};

/// The state needed for displaying the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The client for the remote transactions API.
    pub api: Arc<dyn TransactionsApi>,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api: state.api.clone(),
        }
    }
}

/// Display a page with the user's transactions and balance summary.
///
/// The summary is fetched from the transactions API once per page load. When
/// the fetch fails the page renders an error state instead.
pub async fn get_dashboard_page(State(state): State<DashboardState>) -> Response {
    let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW);

    match state.api.fetch_summary().await {
        Ok(summary) => dashboard_view(nav_bar, &summary).into_response(),
        Err(error) => {
            tracing::error!("could not fetch the transaction summary: {error}");
            dashboard_error_view(nav_bar).into_response()
        }
    }
}

/// Renders the dashboard with the balance cards and the transaction table.
fn dashboard_view(nav_bar: NavBar<'_>, summary: &TransactionSummary) -> Markup {
    let nav_bar = nav_bar.into_html();

    let content = html!(
        (nav_bar)

        div class="flex flex-col px-4 py-8 mx-auto max-w-screen-xl text-gray-900 dark:text-white"
        {
            (balance_cards_view(&summary.balance))

            @if summary.transactions.is_empty() {
                (no_transactions_view())
            } @else {
                (transactions_table_view(&summary.transactions))
            }
        }
    );

    base("Dashboard", &content)
}

/// Renders a hint with an import link when there are no transactions yet.
fn no_transactions_view() -> Markup {
    let import_link = link(endpoints::IMPORT_VIEW, "importing a CSV file");

    html!(
        div class="flex flex-col items-center px-6 py-8 mx-auto"
        {
            h2 class="text-xl font-bold"
            {
                "Nothing here yet..."
            }

            p
            {
                "Transactions will show up here once you add some
                by " (import_link) "."
            }
        }
    )
}

/// Renders the dashboard when the transaction summary could not be fetched.
fn dashboard_error_view(nav_bar: NavBar<'_>) -> Markup {
    let nav_bar = nav_bar.into_html();

    let content = html!(
        (nav_bar)

        div class="flex flex-col items-center px-6 py-8 mx-auto text-gray-900 dark:text-white"
        {
            h2 class="text-xl font-bold"
            {
                "Could not load transactions"
            }

            p
            {
                "The transactions service did not answer. Check that it is
                running and refresh this page."
            }
        }
    );

    base("Dashboard", &content)
}
