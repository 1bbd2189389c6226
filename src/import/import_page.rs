use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, PAGE_CONTAINER_STYLE,
        TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base, loading_spinner,
    },
    import::{
        staging::{FileStagingList, StagedFile},
        upload::UploadOutcome,
    },
    navigation::NavBar,
};

const UPLOAD_SUCCESS_STYLE: &str = "upload-success flex justify-between rounded border \
    border-green-300 bg-green-50 px-4 py-2 text-green-800 dark:border-green-800 \
    dark:bg-gray-800 dark:text-green-300";

const UPLOAD_FAILURE_STYLE: &str = "upload-failure flex justify-between rounded border \
    border-red-300 bg-red-50 px-4 py-2 text-red-800 dark:border-red-800 \
    dark:bg-gray-800 dark:text-red-300";

fn stage_form_view() -> Markup {
    let spinner = loading_spinner();

    html! {
        form
            hx-post=(endpoints::STAGE_FILES)
            enctype="multipart/form-data"
            hx-disabled-elt="#files, #stage-button"
            hx-indicator="#stage-indicator"
            hx-target="#import-content"
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            class="space-y-4 md:space-y-6"
        {
            div
            {
                label
                    for="files"
                    class=(FORM_LABEL_STYLE)
                {
                    "Choose file(s) to upload"
                }

                input
                    id="files"
                    type="file"
                    name="files"
                    accept="text/csv"
                    placeholder="files"
                    multiple
                    required
                    class=(FORM_TEXT_INPUT_STYLE);

                p
                {
                    "Export your bank statements in CSV format and add them to the import list."
                }
            }

            button
                type="submit"
                id="stage-button"
                class=(BUTTON_PRIMARY_STYLE)
            {
                span class="htmx-indicator" id="stage-indicator" { (spinner) }
                " Add to import list"
            }
        }
    }
}

fn submit_form_view() -> Markup {
    let spinner = loading_spinner();

    html! {
        form
            hx-post=(endpoints::SUBMIT_IMPORT)
            hx-disabled-elt="#submit-button"
            hx-indicator="#submit-indicator"
            hx-target="#import-content"
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            class="mt-4"
        {
            button
                type="submit"
                id="submit-button"
                class=(BUTTON_PRIMARY_STYLE)
            {
                span class="htmx-indicator" id="submit-indicator" { (spinner) }
                " Send files"
            }
        }
    }
}

fn staged_files_view(staged: &[StagedFile]) -> Markup {
    html! {
        section {
            h2 class="text-xl font-semibold mb-4" { "Staged files" }

            @if staged.is_empty() {
                p class="text-gray-600 dark:text-gray-400" {
                    "No files staged yet. Choose one or more CSV files above to get started."
                }
            } @else {
                table class="w-full text-sm text-left text-gray-500 dark:text-gray-400" {
                    thead class=(TABLE_HEADER_STYLE) {
                        tr {
                            th scope="col" class=(TABLE_CELL_STYLE) { "File" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Size" }
                        }
                    }

                    tbody {
                        @for file in staged {
                            tr class=(TABLE_ROW_STYLE) {
                                td class=(TABLE_CELL_STYLE) { (file.name) }
                                td class=(TABLE_CELL_STYLE) { (file.readable_size) }
                            }
                        }
                    }
                }

                (submit_form_view())
            }
        }
    }
}

fn upload_outcome_view(outcome: &UploadOutcome) -> Markup {
    let (style, status) = match &outcome.result {
        Ok(()) => (UPLOAD_SUCCESS_STYLE, "Uploaded".to_owned()),
        Err(error) => (UPLOAD_FAILURE_STYLE, format!("Failed: {error}")),
    };

    html! {
        li class=(style) {
            span class="font-medium" { (outcome.file_name) }
            span { (status) }
        }
    }
}

fn upload_outcomes_view(outcomes: &[UploadOutcome]) -> Markup {
    html! {
        section id="upload-outcomes" {
            h2 class="text-xl font-semibold mb-4" { "Upload results" }

            ul class="space-y-2" {
                @for outcome in outcomes {
                    (upload_outcome_view(outcome))
                }
            }
        }
    }
}

/// The staging area below the upload form: the staged file list, the submit
/// form and the results of the last upload batch.
///
/// Endpoints that change the staging list respond with this fragment so
/// htmx can swap the `import-content` element in place.
pub(super) fn import_content_view(staged: &[StagedFile], outcomes: &[UploadOutcome]) -> Markup {
    html! {
        div id="import-content" class="w-full mt-8 space-y-8" {
            (staged_files_view(staged))

            @if !outcomes.is_empty() {
                (upload_outcomes_view(outcomes))
            }
        }
    }
}

fn import_view(staged: &[StagedFile]) -> Markup {
    let nav_bar = NavBar::new(endpoints::IMPORT_VIEW).into_html();

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-2xl"
            {
                h1 class="text-2xl font-bold mb-6" { "Import Transactions" }

                (stage_form_view())

                (import_content_view(staged, &[]))

                p class="mt-4 text-sm text-gray-600 dark:text-gray-400" {
                    "Only CSV files are allowed."
                }
            }
        }
    };

    base("Import Transactions", &content)
}

/// The state needed for displaying the import page.
#[derive(Debug, Clone)]
pub struct ImportPageState {
    /// The files staged for import.
    pub staged_files: Arc<Mutex<FileStagingList>>,
}

impl FromRef<AppState> for ImportPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            staged_files: state.staged_files.clone(),
        }
    }
}

/// Route handler for the CSV import page.
pub async fn get_import_page(State(state): State<ImportPageState>) -> Result<Response, Error> {
    let staged = state
        .staged_files
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire the staged files lock: {error}"))
        .map_err(|_| Error::StagingLockError)?
        .files()
        .to_vec();

    Ok(import_view(&staged).into_response())
}

#[cfg(test)]
mod get_import_page_tests {
    use std::sync::{Arc, Mutex};

    use axum::{extract::State, http::StatusCode};
    use scraper::{ElementRef, Selector};

    use crate::{
        endpoints,
        import::{
            import_page::{ImportPageState, get_import_page},
            staging::{FileStagingList, IncomingFile},
        },
        test_utils::{
            assert_content_type, assert_form_submit_button, assert_hx_endpoint, assert_valid_html,
            must_get_form, parse_html_document,
        },
    };

    fn new_state(staged: &[(&str, &str)]) -> ImportPageState {
        let mut list = FileStagingList::new();

        list.append(
            staged
                .iter()
                .map(|(name, content)| IncomingFile {
                    name: (*name).to_owned(),
                    content: content.as_bytes().to_vec(),
                })
                .collect(),
        );

        ImportPageState {
            staged_files: Arc::new(Mutex::new(list)),
        }
    }

    #[tokio::test]
    async fn render_page() {
        let response = get_import_page(State(new_state(&[]))).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_content_type(&response, "text/html; charset=utf-8");

        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        let form = must_get_form(&html);
        assert_hx_endpoint(&form, endpoints::STAGE_FILES, "hx-post");
        assert_form_enctype(&form, "multipart/form-data");
        assert_form_input(&form, "files", "file");
        assert_form_submit_button(&form);
    }

    #[tokio::test]
    async fn empty_staging_list_renders_hint_and_no_submit_form() {
        let response = get_import_page(State(new_state(&[]))).await.unwrap();

        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        let text = html.html();
        assert!(
            text.contains("No files staged yet."),
            "want page to contain the empty staging hint"
        );

        let submit_form_count = html
            .select(&Selector::parse(r#"form[hx-post="/api/import/submit"]"#).unwrap())
            .count();
        assert_eq!(
            submit_form_count, 0,
            "want no submit form on an empty staging list, got {submit_form_count}"
        );
    }

    #[tokio::test]
    async fn staged_files_render_with_name_size_and_submit_form() {
        let state = new_state(&[("january.csv", "a,b"), ("february.csv", "c,d,e")]);

        let response = get_import_page(State(state)).await.unwrap();

        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        let rows: Vec<String> = html
            .select(&Selector::parse("#import-content tbody tr").unwrap())
            .map(|row| row.text().collect())
            .collect();
        assert_eq!(rows.len(), 2, "want 2 staged file rows, got {}", rows.len());
        assert!(rows[0].contains("january.csv") && rows[0].contains("3 B"));
        assert!(rows[1].contains("february.csv") && rows[1].contains("5 B"));

        let submit_form_count = html
            .select(&Selector::parse(r#"form[hx-post="/api/import/submit"]"#).unwrap())
            .count();
        assert_eq!(
            submit_form_count, 1,
            "want exactly one submit form, got {submit_form_count}"
        );
    }

    #[track_caller]
    fn assert_form_enctype(form: &ElementRef, enctype: &str) {
        let form_enctype = form
            .value()
            .attr("enctype")
            .expect("enctype attribute missing");

        assert_eq!(
            form_enctype, enctype,
            "want form with attribute enctype=\"{enctype}\", got {form_enctype:?}"
        );
    }

    #[track_caller]
    fn assert_form_input(form: &ElementRef, name: &str, type_: &str) {
        for input in form.select(&Selector::parse("input").unwrap()) {
            let input_name = input.value().attr("name").unwrap_or_default();

            if input_name == name {
                let input_type = input.value().attr("type").unwrap_or_default();
                let input_required = input.value().attr("required");
                let input_multiple = input.value().attr("multiple");
                let input_accept = input.value().attr("accept").unwrap_or_default();

                assert_eq!(
                    input_type, type_,
                    "want input with type \"{type_}\", got {input_type:?}"
                );

                assert!(
                    input_required.is_some(),
                    "want input with name {name} to have the required attribute but got none"
                );

                assert!(
                    input_multiple.is_some(),
                    "want input with name {name} to have the multiple attribute but got none"
                );

                assert_eq!(
                    input_accept, "text/csv",
                    "want input with name {name} to have the accept attribute \"text/csv\" but got {input_accept:?}"
                );

                return;
            }
        }

        panic!("No input found with name \"{name}\" and type \"{type_}\"");
    }
}
