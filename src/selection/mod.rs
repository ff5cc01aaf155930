//! Candidate pool that picks the model with the lowest in-sample error.

use log::info;

use crate::error::Result;
use crate::models::{BoxedModel, ForecastModel};

/// Stable handle for a model registered with a [`ModelSelector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModelId(u64);

/// The winning candidate of a selection round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    /// Handle of the winning model.
    pub id: ModelId,
    /// Its in-sample mean absolute error.
    pub mae: f64,
}

/// Holds candidate models, fits them all, and picks the one with the
/// strictly lowest mean absolute error. Ties keep the earlier candidate.
#[derive(Default)]
pub struct ModelSelector {
    models: Vec<(ModelId, BoxedModel)>,
    next_id: u64,
}

impl ModelSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a candidate and return its handle.
    pub fn add(&mut self, model: BoxedModel) -> ModelId {
        let id = ModelId(self.next_id);
        self.next_id += 1;
        self.models.push((id, model));
        id
    }

    /// Remove a candidate by handle. Unknown handles are a no-op.
    pub fn remove(&mut self, id: ModelId) -> Option<BoxedModel> {
        let pos = self.models.iter().position(|(mid, _)| *mid == id)?;
        Some(self.models.remove(pos).1)
    }

    /// Borrow a registered model.
    pub fn get(&self, id: ModelId) -> Option<&dyn ForecastModel> {
        self.models
            .iter()
            .find(|(mid, _)| *mid == id)
            .map(|(_, model)| model.as_ref())
    }

    /// Registered candidates in insertion order.
    pub fn models(&self) -> impl Iterator<Item = (ModelId, &dyn ForecastModel)> {
        self.models.iter().map(|(id, model)| (*id, model.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Fit every candidate and return the one with the lowest error.
    ///
    /// The first candidate failing to fit or score aborts the round, with
    /// the error labelled by the model's name. An empty pool selects
    /// nothing.
    pub fn select_best(&mut self) -> Result<Option<Selection>> {
        let mut best: Option<Selection> = None;
        for (id, model) in &mut self.models {
            model.fit().map_err(|e| e.for_model(model.name()))?;
            let mae = model.mae().map_err(|e| e.for_model(model.name()))?;
            info!("candidate {}: mae={mae:.4}", model.name());
            // Strict comparison keeps the earliest of tied candidates.
            if best.map_or(true, |b| mae < b.mae) {
                best = Some(Selection { id: *id, mae });
            }
        }
        if let Some(selection) = best {
            if let Some(winner) = self.get(selection.id) {
                info!("selected {} with mae={:.4}", winner.name(), selection.mae);
            }
        }
        Ok(best)
    }
}
