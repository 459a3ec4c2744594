use crate::utils::null_as_default;
use serde::{Deserialize, Serialize};

/// Plan, quota and billing state of the account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Subscription {
    #[serde(deserialize_with = "null_as_default")]
    pub tier: String,
    #[serde(deserialize_with = "null_as_default")]
    pub character_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub character_limit: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub can_extend_character_limit: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub allowed_to_extend_character_limit: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub next_character_count_reset_unix: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub voice_limit: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub max_voice_add_edits: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub voice_add_edit_counter: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub professional_voice_limit: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub can_extend_voice_limit: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub can_use_instant_voice_cloning: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub can_use_professional_voice_cloning: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_period: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_refresh_period: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_invoice: Option<NextInvoice>,
    #[serde(deserialize_with = "null_as_default")]
    pub has_open_invoices: bool,
}

impl Subscription {
    /// Characters left before the next reset.
    pub fn remaining_characters(&self) -> u64 {
        self.character_limit.saturating_sub(self.character_count)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NextInvoice {
    #[serde(deserialize_with = "null_as_default")]
    pub amount_due_cents: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub next_payment_attempt_unix: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub subscription: Option<Subscription>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_new_user: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub xi_api_key: String,
    #[serde(deserialize_with = "null_as_default")]
    pub can_use_delayed_payment_methods: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_onboarding_completed: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_onboarding_checklist_completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_api_key_hashed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xi_api_key_preview: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral_link_code: Option<String>,
    #[serde(
        rename = "partnerstack_partner_default_link",
        skip_serializing_if = "Option::is_none"
    )]
    pub partner_stack_partner_default_link: Option<String>,
}
