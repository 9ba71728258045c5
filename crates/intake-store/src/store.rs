use jiff::Timestamp;
use tracing::info;

use intake_core::models::{
    Actor, AssessmentResponse, AssessmentType, AssessmentTypeUpdate, NewAssessmentType,
    NewResponse, UserActivity, check_fields,
};

use crate::error::StoreError;
use crate::ids;
use crate::snapshot::{Snapshot, StoreState};

/// Exclusive owner of both collections. Mutations go through `&mut self`,
/// so a single store serializes writers by construction; callers hand in
/// and receive values, never live references into the collections.
pub struct Store {
    assessment_types: Vec<AssessmentType>,
    responses: Vec<AssessmentResponse>,
    snapshot: Box<dyn Snapshot>,
}

impl Store {
    /// Open the store, loading whatever the snapshot holds. A missing
    /// snapshot starts both collections empty.
    pub fn open(snapshot: Box<dyn Snapshot>) -> Result<Self, StoreError> {
        let state = snapshot.load()?.unwrap_or_default();
        info!(
            types = state.assessment_types.len(),
            responses = state.responses.len(),
            "store opened"
        );
        Ok(Self {
            assessment_types: state.assessment_types,
            responses: state.responses,
            snapshot,
        })
    }

    /// Install the default templates, but only into an empty type
    /// collection — reopening an existing snapshot keeps its data.
    pub fn seed_defaults(&mut self, defaults: Vec<AssessmentType>) -> Result<(), StoreError> {
        if !self.assessment_types.is_empty() {
            return Ok(());
        }
        for assessment in &defaults {
            check_fields(&assessment.fields)?;
        }
        info!(count = defaults.len(), "seeding default assessment types");
        self.assessment_types = defaults;
        self.persist()
    }

    pub fn create_assessment_type(
        &mut self,
        actor: &Actor,
        draft: NewAssessmentType,
    ) -> Result<AssessmentType, StoreError> {
        self.require_admin(actor, "creating an assessment type")?;
        check_fields(&draft.fields)?;

        let id = ids::new_assessment_type_id();
        if self.assessment_type(&id).is_some() {
            return Err(StoreError::DuplicateId(id));
        }

        let now = Timestamp::now();
        let assessment = AssessmentType {
            id,
            title: draft.title,
            description: draft.description,
            category: draft.category,
            fields: draft.fields,
            created_at: now,
            updated_at: now,
        };

        info!(id = %assessment.id, title = %assessment.title, "assessment type created");
        self.assessment_types.push(assessment.clone());
        self.persist()?;
        Ok(assessment)
    }

    /// Apply a partial update. `updated_at` advances; `created_at` and
    /// the order of untouched fields never change.
    pub fn update_assessment_type(
        &mut self,
        actor: &Actor,
        id: &str,
        update: AssessmentTypeUpdate,
    ) -> Result<AssessmentType, StoreError> {
        self.require_admin(actor, "updating an assessment type")?;
        if let Some(fields) = &update.fields {
            check_fields(fields)?;
        }

        let index = self
            .assessment_types
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| StoreError::TypeNotFound(id.to_string()))?;

        let assessment = &mut self.assessment_types[index];
        if let Some(title) = update.title {
            assessment.title = title;
        }
        if let Some(description) = update.description {
            assessment.description = description;
        }
        if let Some(category) = update.category {
            assessment.category = category;
        }
        if let Some(fields) = update.fields {
            assessment.fields = fields;
        }
        assessment.updated_at = Timestamp::now();

        info!(id = id, "assessment type updated");
        self.persist()?;
        Ok(self.assessment_types[index].clone())
    }

    /// Delete a type and cascade to every response that references it.
    pub fn delete_assessment_type(&mut self, actor: &Actor, id: &str) -> Result<(), StoreError> {
        self.require_admin(actor, "deleting an assessment type")?;

        let index = self
            .assessment_types
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| StoreError::TypeNotFound(id.to_string()))?;
        self.assessment_types.remove(index);

        let before = self.responses.len();
        self.responses.retain(|r| r.assessment_type_id != id);

        info!(
            id = id,
            cascaded = before - self.responses.len(),
            "assessment type deleted"
        );
        self.persist()
    }

    /// Append a submitted response. The caller is responsible for having
    /// validated the answers against the type's fields first; the store
    /// only checks that the referenced type exists.
    pub fn submit_response(&mut self, draft: NewResponse) -> Result<AssessmentResponse, StoreError> {
        if self.assessment_type(&draft.assessment_type_id).is_none() {
            return Err(StoreError::TypeNotFound(draft.assessment_type_id));
        }

        let id = ids::new_response_id();
        if self.response(&id).is_some() {
            return Err(StoreError::DuplicateId(id));
        }

        let response = AssessmentResponse {
            id,
            assessment_type_id: draft.assessment_type_id,
            user_id: draft.user_id,
            answers: draft.answers,
            completed_at: Timestamp::now(),
            score: draft.score,
        };

        info!(
            id = %response.id,
            assessment_type_id = %response.assessment_type_id,
            score = response.score,
            "response submitted"
        );
        self.responses.push(response.clone());
        self.persist()?;
        Ok(response)
    }

    pub fn assessment_types(&self) -> &[AssessmentType] {
        &self.assessment_types
    }

    pub fn assessment_type(&self, id: &str) -> Option<&AssessmentType> {
        self.assessment_types.iter().find(|t| t.id == id)
    }

    pub fn response(&self, id: &str) -> Option<&AssessmentResponse> {
        self.responses.iter().find(|r| r.id == id)
    }

    /// The results-view join: a response together with the type it was
    /// answered against.
    pub fn response_with_type(
        &self,
        id: &str,
    ) -> Result<(&AssessmentResponse, &AssessmentType), StoreError> {
        let response = self
            .response(id)
            .ok_or_else(|| StoreError::ResponseNotFound(id.to_string()))?;
        let assessment = self
            .assessment_type(&response.assessment_type_id)
            .ok_or_else(|| StoreError::TypeNotFound(response.assessment_type_id.clone()))?;
        Ok((response, assessment))
    }

    pub fn responses_for_user(&self, user_id: &str) -> Vec<&AssessmentResponse> {
        self.responses
            .iter()
            .filter(|r| r.user_id == user_id)
            .collect()
    }

    /// Newest first, at most `limit` entries.
    pub fn recent_responses_for_user(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Vec<&AssessmentResponse> {
        let mut recent = self.responses_for_user(user_id);
        recent.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
        recent.truncate(limit);
        recent
    }

    /// Dashboard rollup for one user.
    pub fn activity_for_user(&self, user_id: &str) -> UserActivity {
        let total_types = self.assessment_types.len() as u32;
        let completed = self.responses_for_user(user_id).len() as u32;
        let pending = total_types.saturating_sub(completed);
        let completion_rate = if total_types == 0 {
            0
        } else {
            (f64::from(completed.min(total_types)) / f64::from(total_types) * 100.0).round() as u8
        };
        UserActivity {
            total_types,
            completed,
            pending,
            completion_rate,
        }
    }

    fn require_admin(&self, actor: &Actor, action: &'static str) -> Result<(), StoreError> {
        if actor.is_admin() {
            Ok(())
        } else {
            Err(StoreError::Forbidden { action })
        }
    }

    fn persist(&self) -> Result<(), StoreError> {
        let state = StoreState {
            assessment_types: self.assessment_types.clone(),
            responses: self.responses.clone(),
        };
        self.snapshot.save(&state)
    }
}
