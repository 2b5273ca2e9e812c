//! oncoscan-intake
//!
//! The case-intake workflow: an editable form that validates on submit,
//! hands the case to a [`PredictionService`](oncoscan_client::PredictionService),
//! and surfaces the outcome as notifications, a result, or a navigation.
//! Also hosts the route guard that keeps unauthenticated users out.

pub mod error;
pub mod form;
pub mod guard;
pub mod navigation;
pub mod notify;
pub mod phase;
pub mod picker;
pub mod view;

pub use form::{BeginSubmit, CaseForm, SubmissionTicket, SubmitOutcome};
pub use guard::{RouteDecision, route_guard};
pub use navigation::Navigation;
pub use notify::Notification;
pub use phase::{FormEvent, FormPhase};
pub use picker::PickedFile;
pub use view::AddCaseView;
