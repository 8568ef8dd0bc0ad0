pub mod html;

use async_trait::async_trait;
use serde::Deserialize;

use crate::api::{ApiResult, Backend};

/// An entity that can be listed and created from a form.
#[async_trait]
pub trait Resource: Send + Sync + 'static {
    type Record: Send;
    type Form: Clone + Send + Sync;

    const LIST_FAILED: &'static str;
    const CREATE_FAILED: &'static str;
    const CREATED: &'static str;

    fn blank_form(today: &str) -> Self::Form;

    async fn list(backend: &dyn Backend) -> ApiResult<Vec<Self::Record>>;

    async fn create(backend: &dyn Backend, form: &Self::Form) -> anyhow::Result<()>;
}

/// List-plus-create-form page state. The list fetch and the create flow
/// progress independently.
pub struct ResourcePage<R: Resource> {
    pub records: Vec<R::Record>,
    pub form: R::Form,
    pub loading: bool,
    pub submitting: bool,
    pub form_open: bool,
    pub error: Option<String>,
    pub success: Option<String>,
}

impl<R: Resource> ResourcePage<R> {
    pub fn new(today: &str) -> Self {
        Self {
            records: Vec::new(),
            form: R::blank_form(today),
            loading: true,
            submitting: false,
            form_open: false,
            error: None,
            success: None,
        }
    }

    pub async fn mount(&mut self, backend: &dyn Backend) {
        self.refresh(backend).await;
    }

    pub async fn refresh(&mut self, backend: &dyn Backend) {
        let result = R::list(backend).await;
        self.load(result);
    }

    /// Replaces the list wholesale, or keeps it and reports the failure.
    /// A create failure already on the page outranks the list failure.
    pub fn load(&mut self, result: ApiResult<Vec<R::Record>>) {
        match result {
            Ok(records) => self.records = records,
            Err(err) => {
                log::warn!("{}: {}", R::LIST_FAILED, err);
                self.error.get_or_insert_with(|| R::LIST_FAILED.to_string());
            }
        }
        self.loading = false;
    }

    pub fn open_form(&mut self) {
        self.form_open = true;
    }

    pub async fn submit(&mut self, backend: &dyn Backend, today: &str) -> bool {
        self.error = None;
        self.success = None;
        self.submitting = true;
        let result = R::create(backend, &self.form).await;
        self.submitting = false;

        match result {
            Ok(()) => {
                self.form_open = false;
                self.form = R::blank_form(today);
                self.success = Some(R::CREATED.to_string());
                self.refresh(backend).await;
                true
            }
            Err(err) => {
                log::warn!("{}: {:#}", R::CREATE_FAILED, err);
                self.error = Some(R::CREATE_FAILED.to_string());
                self.form_open = true;
                false
            }
        }
    }
}

#[derive(Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub new: bool,
}
