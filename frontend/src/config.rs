#[cfg(debug_assertions)]
pub fn get_webhook_url() -> &'static str {
    "http://localhost:5678/webhook/form"  // Local n8n instance
}

#[cfg(not(debug_assertions))]
pub fn get_webhook_url() -> &'static str {
    "https://n8n.ebenaisolutions.pt/webhook/form"  // Production URL
}

/// Delay between two automatic carousel advances.
pub const CAROUSEL_INTERVAL_MS: u32 = 5_000;
