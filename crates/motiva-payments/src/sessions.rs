use serde::Deserialize;

/// A checkout session from `GET /v1/checkout/sessions/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutSession {
    pub id: String,
    pub payment_status: String,
    #[serde(default)]
    pub customer_details: Option<CustomerDetails>,
    #[serde(default)]
    pub customer_email: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CustomerDetails {
    #[serde(default)]
    pub email: Option<String>,
}

/// What the verification endpoint reports for a resolved session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    pub paid: bool,
    pub email: Option<String>,
}

/// Paid means the provider says `payment_status == "paid"`, nothing else.
/// The buyer email prefers `customer_details.email` and falls back to the
/// session-level `customer_email`.
pub fn session_outcome(session: &CheckoutSession) -> SessionOutcome {
    let email = session
        .customer_details
        .as_ref()
        .and_then(|d| d.email.clone())
        .or_else(|| session.customer_email.clone());
    SessionOutcome {
        paid: session.payment_status == "paid",
        email,
    }
}
