//! Merchant record and the request-body shapes that create and modify it.
//!
//! The serialized field names (`merchantId`, `merchantName`, `latitude`,
//! `longitude`) are a compatibility contract with existing clients; the
//! `rename_all` attributes below are load-bearing.

use serde::{Deserialize, Serialize};

/// A stored merchant. The id is assigned by the store on creation and is
/// stable for the lifetime of the record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Merchant {
    pub latitude: f64,
    pub longitude: f64,
    pub merchant_id: u64,
    pub merchant_name: String,
}

/// Input for creating a merchant — everything except the id, which the
/// store allocates.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantDraft {
    pub latitude: f64,
    pub longitude: f64,
    pub merchant_name: String,
}

/// Partial update: any subset of the mutable fields.
///
/// Merge rule is per field: present overwrites, absent keeps the stored
/// value. The id is never patchable.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantPatch {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub merchant_name: Option<String>,
}

impl MerchantPatch {
    /// Apply this patch to a record in place.
    pub fn apply(self, merchant: &mut Merchant) {
        if let Some(latitude) = self.latitude {
            merchant.latitude = latitude;
        }
        if let Some(longitude) = self.longitude {
            merchant.longitude = longitude;
        }
        if let Some(merchant_name) = self.merchant_name {
            merchant.merchant_name = merchant_name;
        }
    }
}
