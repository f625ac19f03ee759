mod error;
mod geo;
mod http;
mod merchant;
mod store;

pub use error::StoreError;
pub use geo::haversine;
pub use http::{router, serve, SharedStore};
pub use merchant::{Merchant, MerchantDraft, MerchantPatch};
pub use store::MerchantStore;
