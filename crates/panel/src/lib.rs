mod driver;
mod error;
mod render;
mod validation;
mod viewmodel;

pub use driver::{CollectionApi, Panel, PanelState};
pub use error::PanelError;
pub use render::{
    contact_cards, empty_state, error_block, escape_html, format_date, initials, loading_block,
    user_table, RenderView,
};
pub use validation::{
    is_email_taken, validate_contact, validate_user, ContactDraft, ContactForm, Field, HasEmail,
    UserDraft, UserForm, Violation, ViolationKind,
};
pub use viewmodel::{Count, FilterState, Filterable, ViewModel};
