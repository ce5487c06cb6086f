use crate::error::PanelError;
use crate::render::{error_block, loading_block, RenderView};
use crate::validation::{validate_contact, validate_user, ContactDraft, ContactForm, UserDraft, UserForm, Violation};
use crate::viewmodel::{FilterState, Filterable, ViewModel};
use async_trait::async_trait;
use tracing::error;
use userpanel_domain::{Contact, Entity, User, ID};
use userpanel_sdk::{
    APIError, ContactClient, CreateContactInput, CreateUserInput, UpdateContactInput,
    UpdateUserInput, UserClient,
};

/// The four collection operations plus validation for one record variant.
/// This is the seam between the sync driver and the sdk, so the driver can
/// be exercised without a network.
#[async_trait(?Send)]
pub trait CollectionApi {
    type Record: Entity<ID> + Filterable + RenderView;
    type Form;
    type Draft;

    fn validate(
        form: &Self::Form,
        snapshot: &[Self::Record],
        editing: Option<&ID>,
    ) -> Result<Self::Draft, Vec<Violation>>;

    async fn list(&self) -> Result<Vec<Self::Record>, APIError>;
    async fn create(&self, draft: &Self::Draft) -> Result<Self::Record, APIError>;
    async fn update(&self, id: &ID, draft: &Self::Draft) -> Result<Self::Record, APIError>;
    async fn remove(&self, id: &ID) -> Result<Self::Record, APIError>;
}

#[async_trait(?Send)]
impl CollectionApi for UserClient {
    type Record = User;
    type Form = UserForm;
    type Draft = UserDraft;

    fn validate(
        form: &UserForm,
        snapshot: &[User],
        editing: Option<&ID>,
    ) -> Result<UserDraft, Vec<Violation>> {
        validate_user(form, snapshot, editing)
    }

    async fn list(&self) -> Result<Vec<User>, APIError> {
        let dtos = UserClient::list(self).await?;
        Ok(dtos.into_iter().map(|dto| dto.into_user()).collect())
    }

    async fn create(&self, draft: &UserDraft) -> Result<User, APIError> {
        let input = CreateUserInput {
            name: draft.name.clone(),
            email: draft.email.clone(),
            role: draft.role.clone(),
            status: draft.status,
        };
        Ok(UserClient::create(self, input).await?.into_user())
    }

    async fn update(&self, id: &ID, draft: &UserDraft) -> Result<User, APIError> {
        let input = UpdateUserInput {
            user_id: id.clone(),
            name: draft.name.clone(),
            email: draft.email.clone(),
            role: draft.role.clone(),
            status: draft.status,
        };
        Ok(UserClient::update(self, input).await?.into_user())
    }

    async fn remove(&self, id: &ID) -> Result<User, APIError> {
        Ok(UserClient::remove(self, id.clone()).await?.into_user())
    }
}

#[async_trait(?Send)]
impl CollectionApi for ContactClient {
    type Record = Contact;
    type Form = ContactForm;
    type Draft = ContactDraft;

    fn validate(
        form: &ContactForm,
        snapshot: &[Contact],
        editing: Option<&ID>,
    ) -> Result<ContactDraft, Vec<Violation>> {
        validate_contact(form, snapshot, editing)
    }

    async fn list(&self) -> Result<Vec<Contact>, APIError> {
        let dtos = ContactClient::list(self).await?;
        Ok(dtos.into_iter().map(|dto| dto.into_contact()).collect())
    }

    async fn create(&self, draft: &ContactDraft) -> Result<Contact, APIError> {
        let input = CreateContactInput {
            name: draft.name.clone(),
            age: draft.age.clone(),
            email: draft.email.clone(),
            address: draft.address.clone(),
            cell_number: draft.cell_number.clone(),
        };
        Ok(ContactClient::create(self, input).await?.into_contact())
    }

    async fn update(&self, id: &ID, draft: &ContactDraft) -> Result<Contact, APIError> {
        let input = UpdateContactInput {
            contact_id: id.clone(),
            name: draft.name.clone(),
            age: draft.age.clone(),
            email: draft.email.clone(),
            address: draft.address.clone(),
            cell_number: draft.cell_number.clone(),
        };
        Ok(ContactClient::update(self, input).await?.into_contact())
    }

    async fn remove(&self, id: &ID) -> Result<Contact, APIError> {
        Ok(ContactClient::remove(self, id.clone()).await?.into_contact())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Idle,
    Loading,
    Saving,
    Error,
}

impl PanelState {
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Loading | Self::Saving)
    }
}

/// Owns the snapshot, the editing slot and the panel state, and drives the
/// "mutate remote, reload, re-render" sequence. Every mutation is followed
/// by a full reload; the snapshot is never patched optimistically.
///
/// While an operation is in flight new actions are rejected with
/// [`PanelError::Busy`], so a double submit is a no-op.
pub struct Panel<C: CollectionApi> {
    client: C,
    viewmodel: ViewModel<C::Record>,
    filter: FilterState,
    state: PanelState,
    last_error: Option<String>,
}

impl<C: CollectionApi> Panel<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            viewmodel: ViewModel::new(),
            filter: FilterState::default(),
            state: PanelState::Idle,
            last_error: None,
        }
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn viewmodel(&self) -> &ViewModel<C::Record> {
        &self.viewmodel
    }

    pub fn filter_state(&self) -> &FilterState {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: FilterState) {
        self.filter = filter;
    }

    fn guard(&self) -> Result<(), PanelError> {
        if self.state.is_busy() {
            return Err(PanelError::Busy);
        }
        Ok(())
    }

    async fn reload(&mut self) -> Result<(), PanelError> {
        self.state = PanelState::Loading;
        match self.client.list().await {
            Ok(records) => {
                self.viewmodel.set_snapshot(records);
                self.state = PanelState::Idle;
                self.last_error = None;
                Ok(())
            }
            Err(e) => {
                let e = PanelError::from(e);
                error!("Failed to load the collection: {}", e);
                self.viewmodel.clear();
                self.state = PanelState::Error;
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Replaces the snapshot with a fresh full fetch of the collection.
    pub async fn load(&mut self) -> Result<(), PanelError> {
        self.guard()?;
        self.reload().await
    }

    /// Validates and saves a submission. An editing id routes the draft to
    /// an update of that record, otherwise a new record is created. On
    /// success the whole collection is reloaded before the panel goes back
    /// to idle; on failure the previous snapshot stays visible.
    pub async fn submit(&mut self, form: &C::Form) -> Result<(), PanelError> {
        self.guard()?;
        let editing = self.viewmodel.editing().cloned();
        let draft = C::validate(form, self.viewmodel.records(), editing.as_ref())
            .map_err(PanelError::Validation)?;

        self.state = PanelState::Saving;
        let res = match &editing {
            Some(id) => self.client.update(id, &draft).await,
            None => self.client.create(&draft).await,
        };
        if let Err(e) = res {
            let e = PanelError::from(e);
            error!("Failed to save the record: {}", e);
            self.state = PanelState::Error;
            self.last_error = Some(e.to_string());
            return Err(e);
        }

        self.viewmodel.stop_edit();
        self.reload().await
    }

    /// Deletes a record by id and reloads. On failure the snapshot stays
    /// untouched.
    pub async fn remove(&mut self, id: &ID) -> Result<(), PanelError> {
        self.guard()?;
        self.state = PanelState::Saving;
        if let Err(e) = self.client.remove(id).await {
            let e = PanelError::from(e);
            error!("Failed to delete the record: {}", e);
            self.state = PanelState::Error;
            self.last_error = Some(e.to_string());
            return Err(e);
        }

        self.reload().await
    }

    /// Marks a record as being edited and returns it so a form can be
    /// prefilled from its fields.
    pub fn begin_edit(&mut self, id: &ID) -> Result<&C::Record, PanelError> {
        let position = match self.viewmodel.records().iter().position(|r| &r.id() == id) {
            Some(position) => position,
            None => return Err(PanelError::UnknownRecord(id.clone())),
        };
        self.viewmodel.begin_edit(id.clone());
        Ok(&self.viewmodel.records()[position])
    }

    pub fn cancel_edit(&mut self) {
        self.viewmodel.stop_edit();
    }

    /// Renders the current view: the filtered snapshot while idle and a
    /// loading block while an operation is in flight. After a failure the
    /// snapshot is still rendered (empty after a failed load, untouched
    /// after a failed mutation) with the failure message underneath.
    pub fn view(&self) -> String {
        match self.state {
            PanelState::Loading | PanelState::Saving => loading_block(),
            PanelState::Error => {
                let message = self
                    .last_error
                    .as_deref()
                    .unwrap_or("Something went wrong while talking to the api");
                format!("{}\n{}", self.render_records(), error_block(message))
            }
            PanelState::Idle => self.render_records(),
        }
    }

    fn render_records(&self) -> String {
        let visible = self.viewmodel.filter(&self.filter);
        let count = self.viewmodel.count(visible.len());
        C::Record::render_list(&visible, count)
    }
}
