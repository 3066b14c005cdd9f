use crate::model::{Entity, Record};

use super::messages;

/// Identifies one list fetch. Only the most recently issued ticket may
/// replace the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Post,
    Put,
}

/// The request a form submit turns into.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission<E> {
    Create(E),
    Update { id: String, body: E },
}

impl<E: Entity> Submission<E> {
    pub fn method(&self) -> Method {
        match self {
            Submission::Create(_) => Method::Post,
            Submission::Update { .. } => Method::Put,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Submission::Create(_) => E::RESOURCE.to_string(),
            Submission::Update { id, .. } => E::item_path(id),
        }
    }

    pub fn body(&self) -> &E {
        match self {
            Submission::Create(body) | Submission::Update { body, .. } => body,
        }
    }
}

/// Page-local state of one CRUD screen.
///
/// `records` is the store: exactly what the last accepted list fetch
/// returned, in server order. `form` is the record under construction and
/// `editing` the record it was copied from, if any. `error` is an overlay
/// cleared by the next action.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenState<E: Entity> {
    pub records: Vec<Record<E>>,
    pub form: E,
    pub editing: Option<Record<E>>,
    pub loading: bool,
    pub error: Option<String>,
    issued_fetches: u64,
}

impl<E: Entity> Default for ScreenState<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> ScreenState<E> {
    /// A freshly mounted screen: empty, loading until the first fetch lands.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            form: E::default(),
            editing: None,
            loading: true,
            error: None,
            issued_fetches: 0,
        }
    }

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.issued_fetches += 1;
        self.loading = true;
        self.error = None;
        FetchTicket(self.issued_fetches)
    }

    fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.issued_fetches
    }

    /// Replaces the store with `records`. Returns `false` (and changes
    /// nothing) when a newer fetch has been issued since `ticket`.
    pub fn fetch_succeeded(&mut self, ticket: FetchTicket, records: Vec<Record<E>>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.records = records;
        self.loading = false;
        true
    }

    /// A failed fetch empties the store and raises the fetch message.
    pub fn fetch_failed(&mut self, ticket: FetchTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.records.clear();
        self.loading = false;
        self.error = Some(messages::fetch_failed::<E>());
        true
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn heading(&self) -> String {
        if self.is_editing() {
            E::edit_heading()
        } else {
            E::create_heading()
        }
    }

    pub fn submit_label(&self) -> String {
        if self.is_editing() {
            E::update_label()
        } else {
            E::create_label()
        }
    }

    pub fn update_form(&mut self, form: E) {
        self.form = form;
    }

    /// Copies `record` into edit mode; the form takes its non-id fields.
    pub fn edit(&mut self, record: Record<E>) {
        self.form = record.data.clone();
        self.editing = Some(record);
    }

    pub fn cancel_edit(&mut self) {
        self.form = E::default();
        self.editing = None;
    }

    /// Starts a submit: clears the overlay and describes the request to send.
    pub fn begin_submit(&mut self) -> Submission<E> {
        self.error = None;
        match &self.editing {
            Some(record) => Submission::Update {
                id: record.id.clone(),
                body: self.form.clone(),
            },
            None => Submission::Create(self.form.clone()),
        }
    }

    /// The write landed: back to an empty create form. The caller refetches.
    pub fn submit_succeeded(&mut self) {
        self.form = E::default();
        self.editing = None;
    }

    /// The write failed: the form is kept so the user can retry.
    pub fn submit_failed(&mut self) {
        self.error = Some(messages::save_failed::<E>());
    }

    pub fn begin_delete(&mut self, id: &str) -> String {
        self.error = None;
        E::item_path(id)
    }

    pub fn delete_failed(&mut self) {
        self.error = Some(messages::delete_failed::<E>());
    }

    pub fn begin_import(&mut self) {
        self.error = None;
    }

    pub fn import_failed(&mut self) {
        self.error = Some(messages::IMPORT_FAILED.to_string());
    }

    pub fn begin_download(&mut self) {
        self.error = None;
    }

    pub fn download_failed(&mut self) {
        self.error = Some(messages::download_failed::<E>());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{decode_list, Certificate, Course, CourseType, Location};

    fn hq() -> Record<Location> {
        Record::new(
            "1",
            Location {
                name: "HQ".into(),
                address: "1 Main St".into(),
            },
        )
    }

    fn loaded(records: Vec<Record<Location>>) -> ScreenState<Location> {
        let mut state = ScreenState::new();
        let ticket = state.begin_fetch();
        assert!(state.fetch_succeeded(ticket, records));
        state
    }

    #[test]
    fn mounted_screen_starts_loading() {
        let state = ScreenState::<Location>::new();
        assert!(state.loading);
        assert!(state.records.is_empty());
        assert_eq!(state.heading(), "Add New Location");
        assert_eq!(state.submit_label(), "Add Location");
    }

    #[test]
    fn create_then_refetch_mirrors_server_list() {
        let mut state = loaded(Vec::new());
        state.update_form(hq().data);

        let submission = state.begin_submit();
        assert_eq!(submission.method(), Method::Post);
        assert_eq!(submission.path(), "/api/locations");
        assert_eq!(submission.body(), &hq().data);

        state.submit_succeeded();
        assert_eq!(state.form, Location::default());
        assert!(state.records.is_empty(), "no optimistic insert");

        let ticket = state.begin_fetch();
        assert!(state.loading);
        state.fetch_succeeded(ticket, vec![hq()]);
        assert_eq!(state.records, vec![hq()]);
        assert!(!state.loading);
    }

    #[test]
    fn unchanged_edit_submits_the_original_fields() {
        let mut state = loaded(vec![hq()]);
        state.edit(hq());
        assert!(state.is_editing());
        assert_eq!(state.heading(), "Edit Location");
        assert_eq!(state.submit_label(), "Update Location");

        let submission = state.begin_submit();
        assert_eq!(
            submission,
            Submission::Update {
                id: "1".into(),
                body: hq().data
            }
        );
        assert_eq!(submission.method(), Method::Put);
        assert_eq!(submission.path(), "/api/locations/1");
    }

    #[test]
    fn unchanged_edit_keeps_unknown_statuses() {
        let courses = decode_list::<Course>(
            r#"[{"id": "c1", "name": "Go", "type": "Basic", "status": "Archived"}]"#,
        )
        .unwrap();
        let mut state = ScreenState::<Course>::new();
        let ticket = state.begin_fetch();
        state.fetch_succeeded(ticket, courses.clone());
        state.edit(courses[0].clone());
        let body = serde_json::to_value(state.begin_submit().body()).unwrap();
        assert_eq!(body["status"], "Archived");
        assert_eq!(body["courseType"], "Basic");
        assert_eq!(state.begin_submit().body(), &courses[0].data);

        let certificates =
            decode_list::<Certificate>(r#"[{"id": "z9", "candidateName": "Ada", "status": "Revoked"}]"#)
                .unwrap();
        let mut state = ScreenState::<Certificate>::new();
        state.edit(certificates[0].clone());
        let submission = state.begin_submit();
        assert_eq!(submission.path(), "/api/certificates/z9");
        assert_eq!(serde_json::to_value(submission.body()).unwrap()["status"], "Revoked");
    }

    #[test]
    fn failed_submit_keeps_form_and_edit_mode() {
        let mut state = loaded(vec![hq()]);
        state.edit(hq());
        let mut changed = hq().data;
        changed.address = "9 Elm St".into();
        state.update_form(changed.clone());

        state.begin_submit();
        state.submit_failed();
        assert_eq!(
            state.error.as_deref(),
            Some("Failed to save location. Please try again.")
        );
        assert_eq!(state.form, changed);
        assert!(state.is_editing());
        assert_eq!(state.records, vec![hq()]);

        state.begin_submit();
        assert_eq!(state.error, None);
    }

    #[test]
    fn successful_submit_leaves_edit_mode() {
        let mut state = loaded(vec![hq()]);
        state.edit(hq());
        state.begin_submit();
        state.submit_succeeded();
        assert!(!state.is_editing());
        assert_eq!(state.form, Location::default());
    }

    #[test]
    fn cancel_edit_restores_create_mode() {
        let mut state = loaded(vec![hq()]);
        state.edit(hq());
        state.cancel_edit();
        assert!(!state.is_editing());
        assert_eq!(state.form, Location::default());
        assert_eq!(state.heading(), "Add New Location");
    }

    #[test]
    fn failed_fetch_empties_the_store() {
        let mut state = loaded(vec![hq()]);
        let ticket = state.begin_fetch();
        assert!(state.fetch_failed(ticket));
        assert!(state.records.is_empty());
        assert!(!state.loading);
        assert_eq!(
            state.error.as_deref(),
            Some("Failed to fetch locations. Please try again later.")
        );
    }

    #[test]
    fn failed_delete_keeps_the_prior_list() {
        let mut state = loaded(vec![hq()]);
        assert_eq!(state.begin_delete("missing"), "/api/locations/missing");
        state.delete_failed();
        assert_eq!(state.records, vec![hq()]);
        assert_eq!(
            state.error.as_deref(),
            Some("Failed to delete location. Please try again.")
        );
    }

    #[test]
    fn successful_delete_is_reflected_by_refetch() {
        let mut state = loaded(vec![hq()]);
        state.begin_delete("1");
        let ticket = state.begin_fetch();
        state.fetch_succeeded(ticket, Vec::new());
        assert!(state.records.is_empty());
        assert_eq!(state.error, None);
    }

    #[test]
    fn stale_fetch_never_overwrites_a_newer_one() {
        let mut state = ScreenState::<Location>::new();
        let first = state.begin_fetch();
        let second = state.begin_fetch();

        assert!(state.fetch_succeeded(second, vec![hq()]));
        assert!(!state.fetch_succeeded(first, Vec::new()));
        assert!(!state.fetch_failed(first));
        assert_eq!(state.records, vec![hq()]);
        assert_eq!(state.error, None);
    }

    #[test]
    fn stale_fetch_does_not_end_loading() {
        let mut state = ScreenState::<Location>::new();
        let first = state.begin_fetch();
        let _second = state.begin_fetch();
        state.fetch_succeeded(first, vec![hq()]);
        assert!(state.loading);
        assert!(state.records.is_empty());
    }

    #[test]
    fn import_failure_has_its_own_message() {
        let mut state = loaded(Vec::new());
        state.begin_import();
        state.import_failed();
        assert_eq!(state.error.as_deref(), Some(messages::IMPORT_FAILED));
    }

    #[test]
    fn messages_use_lower_case_nouns() {
        let mut state = ScreenState::<CourseType>::new();
        let ticket = state.begin_fetch();
        state.fetch_failed(ticket);
        assert_eq!(
            state.error.as_deref(),
            Some("Failed to fetch course types. Please try again later.")
        );
        state.submit_failed();
        assert_eq!(
            state.error.as_deref(),
            Some("Failed to save course type. Please try again.")
        );
    }
}
