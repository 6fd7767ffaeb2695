pub mod clock;
pub mod config;
pub mod date_range;
pub mod error;
pub mod filter;
pub mod form;
pub mod parse_input;
pub mod period;
pub mod render;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use date_range::{DateRange, compute};
pub use error::{FilterError, FormError, RangeError};
pub use filter::RangeFilter;
pub use form::{DocumentBinding, FormBinding, FormDocument, FormTarget};
pub use period::{Period, Periods};
