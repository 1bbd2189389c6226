//! The transaction table for the dashboard.

use maud::{Markup, html};
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    api::{Transaction, TransactionKind},
    html::{
        TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, format_currency, format_datetime,
    },
};

/// Titles longer than this are truncated to keep table rows on one line.
const MAX_TITLE_GRAPHEMES: usize = 32;

const AMOUNT_INCOME_STYLE: &str = "text-green-700 dark:text-green-300";
const AMOUNT_OUTCOME_STYLE: &str = "text-red-700 dark:text-red-300";

/// Renders the transaction table, one row per transaction in the order the
/// transactions API returned them.
pub(super) fn transactions_table_view(transactions: &[Transaction]) -> Markup {
    html! {
        section class="relative w-full overflow-x-auto shadow-md sm:rounded-lg" {
            table class="w-full text-sm text-left text-gray-500 dark:text-gray-400" {
                thead class=(TABLE_HEADER_STYLE) {
                    tr {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Title" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                    }
                }

                tbody {
                    @for transaction in transactions {
                        (transaction_row(transaction))
                    }
                }
            }
        }
    }
}

fn transaction_row(transaction: &Transaction) -> Markup {
    let (title, tooltip) = format_title(&transaction.title);
    let category = transaction
        .category
        .as_ref()
        .map_or("", |category| category.title.as_str());

    html! {
        tr class=(TABLE_ROW_STYLE) {
            th
                scope="row"
                class={(TABLE_CELL_STYLE) " font-medium text-gray-900 whitespace-nowrap dark:text-white"}
                title=[tooltip]
            {
                (title)
            }

            td class={(TABLE_CELL_STYLE) " whitespace-nowrap " (amount_class(transaction.kind))} {
                (display_amount(transaction))
            }

            td class=(TABLE_CELL_STYLE) { (category) }

            td class={(TABLE_CELL_STYLE) " whitespace-nowrap"} {
                (format_datetime(transaction.created_at))
            }
        }
    }
}

/// Gets the CSS class that colors an amount by transaction kind.
fn amount_class(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Income => AMOUNT_INCOME_STYLE,
        TransactionKind::Outcome => AMOUNT_OUTCOME_STYLE,
    }
}

/// Formats the transaction amount, showing outcomes as negative values.
fn display_amount(transaction: &Transaction) -> String {
    match transaction.kind {
        TransactionKind::Income => format_currency(transaction.value),
        TransactionKind::Outcome => format_currency(-transaction.value),
    }
}

/// Truncates a title to [`MAX_TITLE_GRAPHEMES`], returning the text to show
/// and the full title for the row's tooltip when it was cut short.
fn format_title(title: &str) -> (String, Option<&str>) {
    if title.graphemes(true).count() <= MAX_TITLE_GRAPHEMES {
        return (title.to_owned(), None);
    }

    let truncated: String = title.graphemes(true).take(MAX_TITLE_GRAPHEMES - 3).collect();

    (format!("{truncated}..."), Some(title))
}

#[cfg(test)]
mod transactions_table_tests {
    use time::macros::datetime;
    use unicode_segmentation::UnicodeSegmentation;

    use crate::api::{Category, Transaction, TransactionKind};

    use super::{MAX_TITLE_GRAPHEMES, format_title, transaction_row, transactions_table_view};

    fn transaction(title: &str, value: i64, kind: TransactionKind) -> Transaction {
        Transaction {
            id: "tx-1".to_owned(),
            title: title.to_owned(),
            value,
            kind,
            category: Some(Category {
                title: "Work".to_owned(),
            }),
            created_at: datetime!(2024-03-05 14:30:00),
        }
    }

    #[test]
    fn income_amounts_render_unsigned_and_green() {
        let row = transaction("Website development", 150050, TransactionKind::Income);

        let html = transaction_row(&row).into_string();

        assert!(html.contains("R$ 1.500,50"));
        assert!(
            !html.contains("- R$"),
            "want income amounts unsigned, got {html}"
        );
        assert!(html.contains("text-green-700"));
    }

    #[test]
    fn outcome_amounts_render_negative_and_red() {
        let row = transaction("Rent", 1000, TransactionKind::Outcome);

        let html = transaction_row(&row).into_string();

        assert!(html.contains("- R$ 10,00"));
        assert!(html.contains("text-red-700"));
    }

    #[test]
    fn renders_category_title_or_blank() {
        let categorized = transaction("Sale", 100, TransactionKind::Income);
        assert!(transaction_row(&categorized).into_string().contains("Work"));

        let mut uncategorized = transaction("Sale", 100, TransactionKind::Income);
        uncategorized.category = None;
        assert!(
            !transaction_row(&uncategorized)
                .into_string()
                .contains("Work")
        );
    }

    #[test]
    fn renders_dates_as_day_month_year() {
        let row = transaction("Sale", 100, TransactionKind::Income);

        let html = transaction_row(&row).into_string();

        assert!(html.contains("05/03/2024 14:30:00"));
    }

    #[test]
    fn short_titles_render_without_a_tooltip() {
        let (display, tooltip) = format_title("Rent");

        assert_eq!(display, "Rent");
        assert_eq!(tooltip, None);
    }

    #[test]
    fn title_at_the_limit_is_not_truncated() {
        let title = "a".repeat(MAX_TITLE_GRAPHEMES);

        let (display, tooltip) = format_title(&title);

        assert_eq!(display, title);
        assert_eq!(tooltip, None);
    }

    #[test]
    fn long_titles_are_truncated_with_the_full_title_as_tooltip() {
        let title = "Super market groceries for the whole month of March";

        let (display, tooltip) = format_title(title);

        assert!(display.ends_with("..."));
        assert_eq!(display.graphemes(true).count(), MAX_TITLE_GRAPHEMES);
        assert_eq!(tooltip, Some(title));
    }

    #[test]
    fn truncation_counts_graphemes_not_chars() {
        // Each grapheme is an 'e' followed by a combining acute accent.
        let title = "e\u{301}".repeat(MAX_TITLE_GRAPHEMES + 3);

        let (display, tooltip) = format_title(&title);

        assert_eq!(display.graphemes(true).count(), MAX_TITLE_GRAPHEMES);
        assert!(display.ends_with("..."));
        assert_eq!(tooltip, Some(title.as_str()));
    }

    #[test]
    fn truncated_titles_render_the_tooltip_attribute() {
        let title = "Super market groceries for the whole month of March";
        let row = transaction(title, 100, TransactionKind::Income);

        let html = transaction_row(&row).into_string();

        assert!(
            html.contains(&format!(r#"title="{title}""#)),
            "want the full title as a tooltip, got {html}"
        );
    }

    #[test]
    fn renders_the_table_headers() {
        let rows = [transaction("Sale", 100, TransactionKind::Income)];

        let html = transactions_table_view(&rows).into_string();

        for header in ["Title", "Amount", "Category", "Date"] {
            assert!(html.contains(header), "want table header {header}");
        }
    }
}
