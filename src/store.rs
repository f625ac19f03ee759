//! MerchantStore — the in-memory collection owning all merchant records.
//!
//! Holds an ordered `Vec` of records, a FIFO pool of freed ids, and a
//! monotonic counter for fresh ids. Lookups are linear scans by id, which is
//! fine at this scale; an id-to-index map could replace the scan later
//! without changing the surface.
//!
//! The store itself is single-owner and does no locking. A concurrent host
//! must serialize every operation under one lock (see `http`): the
//! scan-then-mutate sequences here are not atomic on their own.

use std::collections::VecDeque;

use crate::error::StoreError;
use crate::geo::haversine;
use crate::merchant::{Merchant, MerchantDraft, MerchantPatch};

/// Ordered in-memory collection of merchants with id recycling.
#[derive(Debug, Default)]
pub struct MerchantStore {
    merchants: Vec<Merchant>,
    /// Ids released by deletion, reused oldest-first.
    free_ids: VecDeque<u64>,
    /// Source of fresh ids when the free pool is empty. Monotonic, so a
    /// fresh id can never collide with a live one regardless of how
    /// deletions and creations interleave.
    next_id: u64,
}

impl MerchantStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.merchants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.merchants.is_empty()
    }

    /// Create a record from a draft, assigning it an id.
    ///
    /// The oldest freed id is recycled if one exists; otherwise a fresh id
    /// is minted. Always succeeds; returns the stored record, id included.
    pub fn create(&mut self, draft: MerchantDraft) -> Merchant {
        let merchant_id = match self.free_ids.pop_front() {
            Some(id) => id,
            None => {
                let id = self.next_id;
                self.next_id += 1;
                id
            }
        };

        let merchant = Merchant {
            latitude: draft.latitude,
            longitude: draft.longitude,
            merchant_id,
            merchant_name: draft.merchant_name,
        };
        self.merchants.push(merchant.clone());
        merchant
    }

    /// Find a record by id.
    pub fn find(&self, id: u64) -> Result<&Merchant, StoreError> {
        self.merchants
            .iter()
            .find(|m| m.merchant_id == id)
            .ok_or(StoreError::NotFound { id })
    }

    /// Position of the record with the given id in iteration order.
    pub fn index_of(&self, id: u64) -> Result<usize, StoreError> {
        self.merchants
            .iter()
            .position(|m| m.merchant_id == id)
            .ok_or(StoreError::NotFound { id })
    }

    /// Apply a partial update to the record with the given id.
    ///
    /// Fields absent from the patch keep their stored values. Returns the
    /// updated record.
    pub fn update(&mut self, id: u64, patch: MerchantPatch) -> Result<Merchant, StoreError> {
        let index = self.index_of(id)?;
        patch.apply(&mut self.merchants[index]);
        Ok(self.merchants[index].clone())
    }

    /// Remove the record with the given id, releasing its id for reuse.
    ///
    /// Returns the removed record.
    pub fn delete(&mut self, id: u64) -> Result<Merchant, StoreError> {
        let index = self.index_of(id)?;
        let merchant = self.merchants.remove(index);
        self.free_ids.push_back(id);
        Ok(merchant)
    }

    /// Every record paired with its haversine distance from the query point,
    /// sorted ascending by distance.
    ///
    /// The sort is stable, so records at equal distance keep store iteration
    /// order. An empty store yields an empty vec.
    pub fn rank_by_proximity(&self, lat: f64, long: f64) -> Vec<(f64, Merchant)> {
        let mut ranked: Vec<(f64, Merchant)> = self
            .merchants
            .iter()
            .map(|m| (haversine((lat, long), (m.latitude, m.longitude)), m.clone()))
            .collect();
        ranked.sort_by(|a, b| a.0.total_cmp(&b.0));
        ranked
    }
}
