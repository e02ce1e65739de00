//! # Pass Service
//!
//! Per-tenant orchestration: composes the pass builder, the resource
//! repositories, and the token issuer behind the single contract the
//! routes consume. Every method is bound to exactly one tenant context
//! taken from the registry — the tenant boundary is structural, not a
//! calling convention.

use std::sync::Arc;

use chrono::Utc;

use aeropass_schema::common::AddMessageRequest;
use aeropass_schema::flight::{FlightClass, FlightObject, ObjectState, ReviewStatus};
use aeropass_wallet::{
    build_class, build_object, is_past_validity, FlightInput, PassKind, PassengerInput,
};

use crate::error::AppError;
use crate::registry::TenantContext;

/// Orchestrates pass operations for one tenant.
pub struct PassService {
    ctx: Arc<TenantContext>,
}

impl PassService {
    pub fn new(ctx: Arc<TenantContext>) -> Self {
        Self { ctx }
    }

    fn qualify(&self, id: &str) -> String {
        self.ctx.config.issuer_id.qualify(id)
    }

    /// Build a class from flight data and insert it upstream.
    pub async fn create_class(&self, input: &FlightInput) -> Result<FlightClass, AppError> {
        let class = build_class(&self.ctx.config, input)?;
        Ok(self.ctx.classes.insert(&class).await?)
    }

    /// Build an object from passenger data and insert it upstream.
    pub async fn create_object(
        &self,
        input: &PassengerInput,
    ) -> Result<FlightObject, AppError> {
        let object = build_object(&self.ctx.config, input)?;
        Ok(self.ctx.objects.insert(&object).await?)
    }

    /// Insert an already-built class resource. The id is normalized
    /// with the issuer prefix; everything else is passed through.
    pub async fn insert_class(&self, mut class: FlightClass) -> Result<FlightClass, AppError> {
        class.id = self.qualify(&class.id);
        Ok(self.ctx.classes.insert(&class).await?)
    }

    /// Insert an already-built object resource.
    pub async fn insert_object(
        &self,
        mut object: FlightObject,
    ) -> Result<FlightObject, AppError> {
        object.id = self.qualify(&object.id);
        if let Some(class_id) = object.class_id.take() {
            object.class_id = Some(self.qualify(&class_id));
        }
        Ok(self.ctx.objects.insert(&object).await?)
    }

    pub async fn get_class(&self, id: &str) -> Result<FlightClass, AppError> {
        Ok(self.ctx.classes.get(&self.qualify(id)).await?)
    }

    /// Full update. Updated classes always re-enter review.
    pub async fn update_class(&self, id: &str, mut class: FlightClass) -> Result<FlightClass, AppError> {
        class.id = self.qualify(id);
        class.review_status = Some(ReviewStatus::UnderReview);
        Ok(self.ctx.classes.update(&class).await?)
    }

    /// Partial update. Patched classes always re-enter review.
    pub async fn patch_class(&self, id: &str, mut class: FlightClass) -> Result<FlightClass, AppError> {
        class.id = self.qualify(id);
        class.review_status = Some(ReviewStatus::UnderReview);
        Ok(self.ctx.classes.patch(&class).await?)
    }

    pub async fn add_class_message(
        &self,
        id: &str,
        request: &AddMessageRequest,
    ) -> Result<FlightClass, AppError> {
        Ok(self.ctx.classes.add_message(&self.qualify(id), request).await?)
    }

    pub async fn get_object(&self, id: &str) -> Result<FlightObject, AppError> {
        Ok(self.ctx.objects.get(&self.qualify(id)).await?)
    }

    /// Full update, applying the lazy-expiry policy: an object whose
    /// validity window has already closed is written back as EXPIRED,
    /// whatever state the caller sent.
    pub async fn update_object(
        &self,
        id: &str,
        mut object: FlightObject,
    ) -> Result<FlightObject, AppError> {
        object.id = self.qualify(id);
        if is_past_validity(&object, Utc::now().naive_utc()) {
            object.state = Some(ObjectState::Expired);
        }
        Ok(self.ctx.objects.update(&object).await?)
    }

    pub async fn patch_object(
        &self,
        id: &str,
        mut object: FlightObject,
    ) -> Result<FlightObject, AppError> {
        object.id = self.qualify(id);
        // The hero image is not patchable upstream.
        object.hero_image = None;
        Ok(self.ctx.objects.patch(&object).await?)
    }

    pub async fn add_object_message(
        &self,
        id: &str,
        request: &AddMessageRequest,
    ) -> Result<FlightObject, AppError> {
        Ok(self.ctx.objects.add_message(&self.qualify(id), request).await?)
    }

    /// Sign a save link referencing an existing object and optionally
    /// its class. Ids are qualified before signing, never re-prefixed.
    pub fn save_link(
        &self,
        class_id: Option<&str>,
        object_id: &str,
    ) -> Result<String, AppError> {
        let class_id = class_id.map(|id| self.qualify(id));
        let object_id = self.qualify(object_id);
        let payload = PassKind::BoardingPass.save_payload(class_id.as_deref(), &object_id);
        Ok(self.ctx.issuer.issue(&payload)?)
    }

    /// Patch the object state to EXPIRED and nothing else.
    pub async fn expire_object(&self, id: &str) -> Result<FlightObject, AppError> {
        Ok(self.ctx.objects.expire(&self.qualify(id)).await?)
    }

    /// Patch the object to the given lifecycle state.
    pub async fn update_object_state(
        &self,
        id: &str,
        state: ObjectState,
    ) -> Result<FlightObject, AppError> {
        Ok(self.ctx.objects.update_state(&self.qualify(id), state).await?)
    }
}
