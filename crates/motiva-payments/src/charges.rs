use serde::Deserialize;

/// One charge from `GET /v1/charges`. Only the fields the matching rules
/// read are deserialized; the rest of the provider payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Charge {
    pub id: String,
    pub created: i64,
    pub status: String,
    pub paid: bool,
    #[serde(default)]
    pub billing_details: BillingDetails,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BillingDetails {
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChargeList {
    pub data: Vec<Charge>,
}

/// A charge counts only when its billing email matches case-insensitively
/// and the provider reports it both succeeded and paid.
pub fn charge_matches(charge: &Charge, email: &str) -> bool {
    let Some(billed) = charge.billing_details.email.as_deref() else {
        return false;
    };
    billed.to_lowercase() == email.to_lowercase()
        && charge.status == "succeeded"
        && charge.paid
}

pub fn has_matching_paid_charge(charges: &[Charge], email: &str) -> bool {
    charges.iter().any(|charge| charge_matches(charge, email))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn charge(email: Option<&str>, status: &str, paid: bool) -> Charge {
        Charge {
            id: "ch_1".to_string(),
            created: 1_735_000_000,
            status: status.to_string(),
            paid,
            billing_details: BillingDetails {
                email: email.map(str::to_string),
            },
        }
    }

    #[test]
    fn matches_succeeded_paid_charge_case_insensitively() {
        let c = charge(Some("Buyer@Example.COM"), "succeeded", true);
        assert!(charge_matches(&c, "buyer@example.com"));
    }

    #[test]
    fn rejects_wrong_email() {
        let c = charge(Some("other@example.com"), "succeeded", true);
        assert!(!charge_matches(&c, "buyer@example.com"));
    }

    #[test]
    fn rejects_unsucceeded_or_unpaid() {
        assert!(!charge_matches(
            &charge(Some("buyer@example.com"), "pending", true),
            "buyer@example.com"
        ));
        assert!(!charge_matches(
            &charge(Some("buyer@example.com"), "succeeded", false),
            "buyer@example.com"
        ));
    }

    #[test]
    fn rejects_charge_without_billing_email() {
        let c = charge(None, "succeeded", true);
        assert!(!charge_matches(&c, "buyer@example.com"));
    }

    #[test]
    fn any_matching_charge_in_list_suffices() {
        let charges = vec![
            charge(Some("other@example.com"), "succeeded", true),
            charge(Some("buyer@example.com"), "failed", false),
            charge(Some("buyer@example.com"), "succeeded", true),
        ];
        assert!(has_matching_paid_charge(&charges, "buyer@example.com"));
        assert!(!has_matching_paid_charge(&charges, "nobody@example.com"));
        assert!(!has_matching_paid_charge(&[], "buyer@example.com"));
    }

    #[test]
    fn charge_list_parses_provider_payload() {
        let body = r#"{
            "object": "list",
            "data": [
                {
                    "id": "ch_3QaBcD",
                    "object": "charge",
                    "amount": 1900,
                    "created": 1735000000,
                    "currency": "usd",
                    "paid": true,
                    "status": "succeeded",
                    "billing_details": {
                        "address": null,
                        "email": "buyer@example.com",
                        "name": "A Buyer"
                    }
                },
                {
                    "id": "ch_3QaBcE",
                    "object": "charge",
                    "created": 1735000100,
                    "paid": false,
                    "status": "failed",
                    "billing_details": {}
                }
            ],
            "has_more": false
        }"#;

        let list: ChargeList = serde_json::from_str(body).expect("parse charge list");
        assert_eq!(list.data.len(), 2);
        assert_eq!(list.data[0].billing_details.email.as_deref(), Some("buyer@example.com"));
        assert_eq!(list.data[1].billing_details.email, None);
    }
}
