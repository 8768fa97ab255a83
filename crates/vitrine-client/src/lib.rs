//! Client-side behaviour for the vitrine site: fetching remote content
//! overrides at page initialization and driving contact form submission.

pub mod contact;
pub mod fetcher;

pub use contact::{
    validate, ContactController, ContactForm, Field, FieldError, SubmitControl, SubmitOutcome,
    SubmitState,
};
pub use fetcher::{fetch_overrides, FetchError};
