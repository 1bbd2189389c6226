//! Alert banners for showing success and error messages to the user.
//!
//! Alerts render into the fixed alert container at the bottom of every page
//! via an htmx out-of-band swap, so they can ride along with any response.

use maud::{Markup, html};

const SUCCESS_STYLE: &str = "flex items-start rounded-lg border border-green-300 \
    bg-green-50 p-4 text-green-800 shadow-lg dark:border-green-800 \
    dark:bg-gray-800 dark:text-green-300";

const ERROR_STYLE: &str = "flex items-start rounded-lg border border-red-300 \
    bg-red-50 p-4 text-red-800 shadow-lg dark:border-red-800 \
    dark:bg-gray-800 dark:text-red-300";

/// A notification banner swapped into the page's alert container.
#[derive(Debug)]
pub enum Alert {
    /// Reports a completed action, with supporting detail below the headline.
    Success {
        /// The headline to display.
        message: String,
        /// Extra detail, e.g. what happened and what to do next.
        details: String,
    },
    /// Reports a failed action, with supporting detail below the headline.
    Error {
        /// The headline to display.
        message: String,
        /// Extra detail, e.g. what to do about the failure.
        details: String,
    },
    /// Reports a failed action in a single line.
    ErrorSimple {
        /// The text to display.
        message: String,
    },
}

impl Alert {
    /// Render the alert for an out-of-band swap into the alert container.
    pub fn into_html(self) -> Markup {
        let (style, message, details) = match self {
            Alert::Success { message, details } => (SUCCESS_STYLE, message, Some(details)),
            Alert::Error { message, details } => (ERROR_STYLE, message, Some(details)),
            Alert::ErrorSimple { message } => (ERROR_STYLE, message, None),
        };

        html! {
            div
                id="alert-container"
                hx-swap-oob="true"
                class="w-full max-w-md px-4"
                style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
            {
                div class=(style) role="alert" {
                    div class="flex-1" {
                        p class="text-sm font-medium" { (message) }

                        @if let Some(details) = details {
                            p class="mt-1 text-sm opacity-80" { (details) }
                        }
                    }

                    button
                        type="button"
                        class="ms-3 text-lg leading-none opacity-60 hover:opacity-100"
                        aria-label="Dismiss"
                        onclick="document.getElementById('alert-container').classList.add('hidden')"
                    {
                        "\u{00d7}"
                    }
                }
            }
        }
    }
}
