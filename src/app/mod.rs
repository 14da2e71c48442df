pub mod session;

pub use session::{Session, SessionCommand, SessionOutcome};
