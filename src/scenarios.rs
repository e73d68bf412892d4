use chrono::{DateTime, Utc};
use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::errors::{CalculatorError, Result};
use crate::payments::{AmortizationResult, LoanParameters};
use crate::types::ScenarioId;

/// a calculation the visitor chose to keep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedScenario {
    pub id: ScenarioId,
    pub name: String,
    pub parameters: LoanParameters,
    pub result: AmortizationResult,
    pub saved_at: DateTime<Utc>,
}

/// saved scenarios, owned and persisted by the caller
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioBook {
    scenarios: Vec<SavedScenario>,
}

impl ScenarioBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// store a snapshot and return its id
    pub fn save(
        &mut self,
        name: &str,
        parameters: LoanParameters,
        result: AmortizationResult,
        time: &SafeTimeProvider,
    ) -> Result<ScenarioId> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CalculatorError::validation("name", "scenario name is blank"));
        }

        let id = Uuid::new_v4();
        self.scenarios.push(SavedScenario {
            id,
            name: name.to_string(),
            parameters,
            result,
            saved_at: time.now(),
        });

        debug!(%id, name, count = self.scenarios.len(), "scenario saved");
        Ok(id)
    }

    pub fn load(&self, id: ScenarioId) -> Result<&SavedScenario> {
        self.scenarios
            .iter()
            .find(|s| s.id == id)
            .ok_or(CalculatorError::ScenarioNotFound { id })
    }

    /// remove a scenario, handing it back to the caller
    pub fn delete(&mut self, id: ScenarioId) -> Result<SavedScenario> {
        let index = self
            .scenarios
            .iter()
            .position(|s| s.id == id)
            .ok_or(CalculatorError::ScenarioNotFound { id })?;

        let removed = self.scenarios.remove(index);
        debug!(%id, count = self.scenarios.len(), "scenario deleted");
        Ok(removed)
    }

    /// scenarios in the order they were saved
    pub fn list(&self) -> &[SavedScenario] {
        &self.scenarios
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
