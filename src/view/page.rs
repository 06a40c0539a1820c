//! State model of the employer page.
//!
//! [`EmployerPage`] holds everything the page shows: the loading flag, the
//! last error, the in-memory employer list, the form fields, and the most
//! recent notification. The server renders it in its initial state and the
//! client script applies the same transitions in the browser.
//!
//! The list is never re-fetched after a successful submit. The created
//! record is appended instead, so the displayed order is insertion order
//! rather than store order.

use crate::persistence::Employer;

/// Message shown while the initial fetch is in flight.
pub const LOADING_MESSAGE: &str = "Carregando...";
/// Message shown once loaded with no error and no employers.
pub const EMPTY_MESSAGE: &str = "Nenhum empregador encontrado.";
/// Error recorded when the list fetch fails without a message.
pub const LIST_FAILED_MESSAGE: &str = "A resposta da rede não estava ok";
/// Error recorded when a submit fails without a server message.
pub const SUBMIT_FAILED_MESSAGE: &str = "Falha ao criar empregador";
/// Error recorded when a failure carries no message at all.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Ocorreu um erro desconhecido.";
/// Title of the success notification.
pub const SUCCESS_TITLE: &str = "Sucesso!";
/// Body of the success notification.
pub const SUCCESS_TEXT: &str = "Empregado adicionado com sucesso.";
/// Title of the error notification.
pub const ERROR_TITLE: &str = "Erro!";

/// One input of the creation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    /// `nome`, free text.
    Nome,
    /// `email`, must be unique.
    Email,
    /// `situacao`, free text.
    Situacao,
    /// `data_admissao`, a calendar date.
    DataAdmissao,
}

impl FormField {
    /// Fields in the order the form lays them out.
    pub const ALL: [Self; 4] = [Self::Nome, Self::Email, Self::Situacao, Self::DataAdmissao];

    /// Input `name`, identical to the JSON key posted to the API.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nome => "nome",
            Self::Email => "email",
            Self::Situacao => "situacao",
            Self::DataAdmissao => "data_admissao",
        }
    }

    /// HTML input type.
    #[must_use]
    pub const fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::DataAdmissao => "date",
            Self::Nome | Self::Situacao => "text",
        }
    }

    /// Placeholder and column heading.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Nome => "Nome",
            Self::Email => "Email",
            Self::Situacao => "Situação",
            Self::DataAdmissao => "Data de Admissão",
        }
    }

    /// Looks a field up by its input name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }
}

/// Current values of the creation form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployerForm {
    /// `nome` input.
    pub nome: String,
    /// `email` input.
    pub email: String,
    /// `situacao` input.
    pub situacao: String,
    /// `data_admissao` input.
    pub data_admissao: String,
}

impl EmployerForm {
    /// Returns the value of one field.
    #[must_use]
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Nome => &self.nome,
            FormField::Email => &self.email,
            FormField::Situacao => &self.situacao,
            FormField::DataAdmissao => &self.data_admissao,
        }
    }

    fn slot(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Nome => &mut self.nome,
            FormField::Email => &mut self.email,
            FormField::Situacao => &mut self.situacao,
            FormField::DataAdmissao => &mut self.data_admissao,
        }
    }

    /// JSON body posted on submit.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "email": self.email,
            "nome": self.nome,
            "situacao": self.situacao,
            "data_admissao": self.data_admissao,
        })
    }
}

/// Kind of a notification popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Employer created.
    Success,
    /// Submit failed.
    Error,
}

/// A transient message shown after a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Success or error.
    pub kind: NotificationKind,
    /// Popup title.
    pub title: String,
    /// Popup body.
    pub text: String,
}

impl Notification {
    fn success() -> Self {
        Self {
            kind: NotificationKind::Success,
            title: SUCCESS_TITLE.to_string(),
            text: SUCCESS_TEXT.to_string(),
        }
    }

    fn error(text: &str) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: ERROR_TITLE.to_string(),
            text: text.to_string(),
        }
    }
}

/// What the listing region shows, evaluated in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing<'a> {
    /// Initial fetch still running.
    Loading,
    /// Loaded, nothing to show, and an error is set.
    Failed(&'a str),
    /// Loaded, no error, no employers.
    Empty,
    /// At least one employer.
    Populated(&'a [Employer]),
}

/// The employer page.
#[derive(Debug, Clone)]
pub struct EmployerPage {
    loading: bool,
    fetch_issued: bool,
    error: Option<String>,
    employers: Vec<Employer>,
    form: EmployerForm,
    notification: Option<Notification>,
}

impl Default for EmployerPage {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployerPage {
    /// A freshly mounted page: loading, empty list, blank form.
    #[must_use]
    pub fn new() -> Self {
        Self {
            loading: true,
            fetch_issued: false,
            error: None,
            employers: Vec::new(),
            form: EmployerForm::default(),
            notification: None,
        }
    }

    /// Marks the page as mounted. Returns `true` only the first time, when
    /// the caller must issue the list fetch.
    pub fn mount(&mut self) -> bool {
        !std::mem::replace(&mut self.fetch_issued, true)
    }

    /// Applies the outcome of the list fetch. Loading is cleared on both
    /// paths.
    pub fn list_loaded(&mut self, outcome: Result<Vec<Employer>, String>) {
        match outcome {
            Ok(employers) => self.employers = employers,
            Err(message) => self.error = Some(message),
        }
        self.loading = false;
    }

    /// Updates exactly one form field.
    pub fn input_changed(&mut self, field: FormField, value: impl Into<String>) {
        *self.form.slot(field) = value.into();
    }

    /// Appends the created employer, clears the form, and raises the
    /// success notification.
    pub fn submit_succeeded(&mut self, employer: Employer) -> &Notification {
        self.employers.push(employer);
        self.form = EmployerForm::default();
        self.notification.insert(Notification::success())
    }

    /// Records the failure and raises an error notification. The form is
    /// kept for correction.
    pub fn submit_failed(&mut self, message: &str) -> &Notification {
        self.error = Some(message.to_string());
        self.notification.insert(Notification::error(message))
    }

    /// Current content of the listing region.
    #[must_use]
    pub fn listing(&self) -> Listing<'_> {
        if self.loading {
            return Listing::Loading;
        }
        match (self.employers.as_slice(), self.error.as_deref()) {
            ([], Some(message)) => Listing::Failed(message),
            ([], None) => Listing::Empty,
            (rows, _) => Listing::Populated(rows),
        }
    }

    /// Whether the initial fetch is still running.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Last recorded error.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Employers in display order.
    #[must_use]
    pub fn employers(&self) -> &[Employer] {
        &self.employers
    }

    /// Current form values.
    #[must_use]
    pub fn form(&self) -> &EmployerForm {
        &self.form
    }

    /// Most recent notification, if any.
    #[must_use]
    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use chrono::{NaiveDate, Utc};
    use uuid::Uuid;

    use super::*;

    fn employer(email: &str) -> Employer {
        let Some(date) = NaiveDate::from_ymd_opt(2024, 1, 1) else {
            panic!("valid date");
        };
        let now = Utc::now();
        Employer {
            id: Uuid::new_v4(),
            email: email.to_string(),
            name: "Ana".to_string(),
            status: "ativo".to_string(),
            admission_date: date,
            created_at: now,
            updated_at: now,
        }
    }

    fn filled_page() -> EmployerPage {
        let mut page = EmployerPage::new();
        page.input_changed(FormField::Email, "a@x.com");
        page.input_changed(FormField::Nome, "Ana");
        page.input_changed(FormField::Situacao, "ativo");
        page.input_changed(FormField::DataAdmissao, "2024-01-01");
        page
    }

    #[test]
    fn fetch_is_issued_once() {
        let mut page = EmployerPage::new();
        assert!(page.mount());
        assert!(!page.mount());
        assert!(!page.mount());
    }

    #[test]
    fn loading_has_priority() {
        let page = EmployerPage::new();
        assert_eq!(page.listing(), Listing::Loading);
    }

    #[test]
    fn loading_clears_on_success_and_failure() {
        let mut ok = EmployerPage::new();
        ok.list_loaded(Ok(vec![employer("a@x.com")]));
        assert!(!ok.is_loading());

        let mut failed = EmployerPage::new();
        failed.list_loaded(Err(LIST_FAILED_MESSAGE.to_string()));
        assert!(!failed.is_loading());
        assert_eq!(failed.listing(), Listing::Failed(LIST_FAILED_MESSAGE));
    }

    #[test]
    fn empty_message_only_without_error() {
        let mut page = EmployerPage::new();
        page.list_loaded(Ok(Vec::new()));
        assert_eq!(page.listing(), Listing::Empty);

        let mut failed = EmployerPage::new();
        failed.list_loaded(Err("boom".to_string()));
        assert_ne!(failed.listing(), Listing::Empty);
    }

    #[test]
    fn input_change_touches_one_field() {
        let mut page = filled_page();
        page.input_changed(FormField::Situacao, "inativo");
        assert_eq!(page.form().situacao, "inativo");
        assert_eq!(page.form().email, "a@x.com");
        assert_eq!(page.form().nome, "Ana");
        assert_eq!(page.form().data_admissao, "2024-01-01");
    }

    #[test]
    fn successful_submit_appends_and_clears_form() {
        let mut page = filled_page();
        page.list_loaded(Ok(vec![employer("b@x.com")]));

        let created = employer("a@x.com");
        let notification = page.submit_succeeded(created.clone()).clone();
        assert_eq!(notification.kind, NotificationKind::Success);

        let emails: Vec<&str> = page.employers().iter().map(|e| e.email.as_str()).collect();
        assert_eq!(emails, ["b@x.com", "a@x.com"]);
        assert_eq!(page.employers().last(), Some(&created));
        assert_eq!(page.form(), &EmployerForm::default());
    }

    #[test]
    fn failed_submit_keeps_form_and_list() {
        let mut page = filled_page();
        page.list_loaded(Ok(vec![employer("b@x.com")]));

        let notification = page.submit_failed("Email já existe.").clone();
        assert_eq!(notification.kind, NotificationKind::Error);
        assert_eq!(notification.text, "Email já existe.");
        assert_eq!(page.error(), Some("Email já existe."));
        assert_eq!(page.form().email, "a@x.com");
        assert!(matches!(page.listing(), Listing::Populated(rows) if rows.len() == 1));
    }

    #[test]
    fn form_posts_api_field_names() {
        let body = filled_page().form().to_json();
        assert_eq!(body["email"], "a@x.com");
        assert_eq!(body["nome"], "Ana");
        assert_eq!(body["situacao"], "ativo");
        assert_eq!(body["data_admissao"], "2024-01-01");
    }

    #[test]
    fn field_names_round_trip() {
        for field in FormField::ALL {
            assert_eq!(FormField::from_name(field.name()), Some(field));
        }
        assert_eq!(FormField::from_name("id"), None);
    }
}
