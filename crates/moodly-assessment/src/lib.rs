//! moodly-assessment
//!
//! The assessment flow and the decisions derived from its result:
//! - `window`: may the user take the questionnaire again yet?
//! - `flow`: the paginated questionnaire state machine
//! - `eligibility`: may the user open the chat companion?
//! - `review`: recovering a stored result and authorising a retake

pub mod clock;
pub mod eligibility;
pub mod error;
pub mod flow;
pub mod review;
pub mod window;

pub use crate::clock::{Clock, SystemClock};
pub use crate::eligibility::{check_eligibility, evaluate, evaluate_record};
pub use crate::error::{FlowError, RetakeError};
pub use crate::flow::{AssessmentFlow, FlowState};
pub use crate::review::{authorize_retake, resume};
pub use crate::window::{ATTEMPT_COOLDOWN, check_window, format_remaining};
