use async_trait::async_trait;
use uuid::Uuid;

/// Output port for the external registration-forms integration.
///
/// The call is best-effort by contract: the service logs failures and
/// proceeds, so implementations should not retry aggressively.
#[async_trait]
pub trait RegistrationFormsPort: Send + Sync {
    /// Create a registration form for an event. `Ok(None)` means the
    /// integration is disabled; `Ok(Some(url))` carries the form
    /// reference to store on the event.
    async fn create_form(&self, event_id: Uuid, title: &str) -> anyhow::Result<Option<String>>;
}
