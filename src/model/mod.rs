//! Model layer - survey state, independent of rendering
//!
//! - `form` - field values and presence checks
//! - `survey` - the submit/clear/dialog state machine
//! - `modal` - application overlays

pub mod form;
pub mod modal;
pub mod survey;

pub use form::{Choice, Field, FieldChange, FormData, Gender, Language};
pub use survey::{DialogChoice, Submission, SurveyState};
