pub mod session;

pub use session::{issue_session, verify_session, SESSION_MAX_AGE_SECS};
