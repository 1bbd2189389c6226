#![allow(missing_docs)]

pub(crate) mod api;
pub(crate) mod form;
pub(crate) mod html;
pub(crate) mod http;

pub(crate) use api::FakeTransactionsApi;
pub(crate) use form::{assert_form_submit_button, assert_hx_endpoint, must_get_form};
pub(crate) use html::{
    assert_alert_error_message, assert_alert_success_message, assert_valid_html,
    parse_html_document, parse_html_fragment,
};
pub(crate) use http::assert_content_type;
