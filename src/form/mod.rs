mod record;
mod state;

pub use record::{FieldId, FormRecord, Gender, INTEREST_OPTIONS};
pub use state::FormState;
