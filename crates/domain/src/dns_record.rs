mod answer;
mod record_set;
mod record_type;

pub use answer::LookupAnswer;
pub use record_set::{RecordSet, ERROR_TAG, NO_RECORDS_MESSAGE, NXDOMAIN_MESSAGE};
pub use record_type::RecordType;
