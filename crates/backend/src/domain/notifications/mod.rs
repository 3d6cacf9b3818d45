mod service;

pub use service::{dispatch_warning, WarningDispatch};
