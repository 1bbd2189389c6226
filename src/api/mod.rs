//! The client for the remote transactions API.
//!
//! Transaction storage lives in a separate service. [TransactionsApi] is the
//! seam between this app and that service, [HttpTransactionsApi] is the
//! implementation that talks to it over HTTP. Handlers receive the client
//! through the router state.

mod client;
mod models;

pub use client::{HttpTransactionsApi, TransactionsApi};
pub use models::{Balance, Category, Transaction, TransactionKind, TransactionSummary};
