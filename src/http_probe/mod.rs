pub mod probe;
pub mod result;

pub mod prelude {
    pub use super::probe::probe_url;
    pub use super::result::{Detail, HealthStatus, ProbeResult};
}

use std::fmt::Write;

/// Flatten an error and its `source()` chain into a single line, so a
/// transport failure fits on one log line.
pub(crate) fn report(mut err: &(dyn std::error::Error + 'static)) -> String {
    let mut s = format!("{}", err);
    while let Some(src) = err.source() {
        let cause = src.to_string();
        // hyper and reqwest sometimes repeat the inner message verbatim
        if !s.ends_with(&cause) {
            let _ = write!(s, ": {}", cause);
        }
        err = src;
    }
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
