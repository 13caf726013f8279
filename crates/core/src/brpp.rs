//! BRPP (BIDUA Retail Partner Program) membership and business profile.

use serde::{Deserialize, Serialize};

use crate::types::contact::required;
use crate::types::{ContactError, Email, Phone};

/// Business profile form as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessProfileForm {
    pub business_name: String,
    pub owner_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub gst_number: String,
}

impl BusinessProfileForm {
    /// # Errors
    ///
    /// Returns the [`ContactError`] for the first blank or malformed field.
    /// The GST number may be left blank.
    pub fn validate(&self) -> Result<BusinessProfile, ContactError> {
        let gst_number = self.gst_number.trim();
        Ok(BusinessProfile {
            business_name: required("Business name", &self.business_name)?,
            owner_name: required("Owner name", &self.owner_name)?,
            phone: Phone::parse(&required("Phone", &self.phone)?)?,
            email: Email::parse(&required("Email", &self.email)?)?,
            address: required("Address", &self.address)?,
            gst_number: (!gst_number.is_empty()).then(|| gst_number.to_uppercase()),
        })
    }
}

/// A partner's saved business profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessProfile {
    pub business_name: String,
    pub owner_name: String,
    pub phone: Phone,
    pub email: Email,
    pub address: String,
    pub gst_number: Option<String>,
}

/// Where a visitor is in the join flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    pub subscribed: bool,
    pub profile: Option<BusinessProfile>,
}

impl Membership {
    /// Record the (simulated) annual fee payment.
    pub const fn subscribe(&mut self) {
        self.subscribed = true;
    }

    /// Whether the business profile form should be shown.
    #[must_use]
    pub const fn needs_profile(&self) -> bool {
        self.subscribed && self.profile.is_none()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn form() -> BusinessProfileForm {
        BusinessProfileForm {
            business_name: "Glow Pharmacy".to_string(),
            owner_name: "Anita Desai".to_string(),
            phone: "+91 99887 76655".to_string(),
            email: "anita@glowpharmacy.in".to_string(),
            address: "12 Park Street, Kolkata".to_string(),
            gst_number: String::new(),
        }
    }

    #[test]
    fn test_gst_optional() {
        let profile = form().validate().unwrap();
        assert_eq!(profile.gst_number, None);

        let with_gst = BusinessProfileForm {
            gst_number: " 19abcde1234f1z5 ".to_string(),
            ..form()
        };
        assert_eq!(
            with_gst.validate().unwrap().gst_number.as_deref(),
            Some("19ABCDE1234F1Z5")
        );
    }

    #[test]
    fn test_required_fields() {
        let missing = BusinessProfileForm {
            owner_name: String::new(),
            ..form()
        };
        assert_eq!(missing.validate(), Err(ContactError::Required("Owner name")));

        let bad_phone = BusinessProfileForm {
            phone: "12".to_string(),
            ..form()
        };
        assert_eq!(bad_phone.validate(), Err(ContactError::InvalidPhone));
    }

    #[test]
    fn test_membership_flow() {
        let mut membership = Membership::default();
        assert!(!membership.needs_profile());
        membership.subscribe();
        assert!(membership.needs_profile());
        membership.profile = Some(form().validate().unwrap());
        assert!(!membership.needs_profile());
    }
}
