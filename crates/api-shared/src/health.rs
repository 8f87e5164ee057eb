use crate::HealthRes;

/// Builds health responses for the tutorials API
///
/// The caller decides whether the backing store is reachable; this service only shapes the
/// response so every surface reports health the same way.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    /// A `HealthRes` indicating the service and its store are healthy.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "Tutorials API is alive".into(),
        }
    }

    /// A `HealthRes` reporting that the backing store did not answer.
    pub fn store_unavailable() -> HealthRes {
        HealthRes {
            ok: false,
            message: "Tutorial store is unreachable".into(),
        }
    }
}
