//! JSON fixtures describing the context of one mapping call.
//!
//! ```json
//! {
//!   "person": { "id": "...", "bene_id": "-1", ... },
//!   "encounter": { "start": "2021-06-01T09:00:00Z", ... },
//!   "device": null
//! }
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use bfd_model::{Device, Encounter, EvaluationContext, Person};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct MappingFixture {
    pub person: Person,
    #[serde(default)]
    pub encounter: Option<Encounter>,
    #[serde(default)]
    pub device: Option<Device>,
}

impl MappingFixture {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("read fixture {}", path.display()))?;
        serde_json::from_str(&contents).with_context(|| format!("parse fixture {}", path.display()))
    }

    /// Context with whatever the fixture provides.
    pub fn context(&self) -> EvaluationContext<'_> {
        let mut context = EvaluationContext::new(&self.person);
        if let Some(encounter) = &self.encounter {
            context = context.with_encounter(encounter);
        }
        if let Some(device) = &self.device {
            context = context.with_device(device);
        }
        context
    }
}
