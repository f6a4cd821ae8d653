use std::time::Duration;

use once_cell::sync::OnceCell;
use reqwest::Client;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

static SHARED: OnceCell<Client> = OnceCell::new();

/// Process-wide HTTP client with a fixed request timeout, shared across
/// notifiers unless one is injected via [`crate::Notifier::with_client`].
pub(crate) fn shared() -> Client {
    SHARED
        .get_or_init(|| {
            Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default()
        })
        .clone()
}
