//! Mapping engine: fills a field-value map for one record.

use std::path::Path;

use bfd_model::{
    Device, Encounter, EvaluationContext, FieldValueMap, MappingOptions, Person, RecordType,
};
use bfd_standards::{CarrierTable, ExporterConfig, StandardsError, load_carriers};
use rand::Rng;
use tracing::{debug, error, info, warn};

use crate::distribution::select_distribution;
use crate::error::EvalError;
use crate::evaluator::ExpressionEvaluator;
use crate::expression::UNKNOWN_FUNCTION_SENTINEL;
use crate::functions::FunctionInput;
use crate::resolver::expression_by_type;
use crate::spec::ExportSpec;

/// Counts from one `set_from_config` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingTally {
    pub record_type: RecordType,
    /// Evaluated entries whose value is not the unknown-function sentinel.
    pub processed: usize,
    /// Size of the record type's working list.
    pub total: usize,
    /// Set when evaluation stopped early; the map holds what was mapped
    /// before the failure.
    pub error: Option<EvalError>,
}

impl MappingTally {
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }
}

/// Evaluates a loaded specification against person, encounter and device
/// contexts.
///
/// The engine holds no per-call state and can be shared between threads.
#[derive(Debug)]
pub struct FieldMappingEngine {
    spec: ExportSpec,
    carriers: CarrierTable,
    options: MappingOptions,
}

impl FieldMappingEngine {
    pub fn new(spec: ExportSpec, carriers: CarrierTable, options: MappingOptions) -> Self {
        Self {
            spec,
            carriers,
            options,
        }
    }

    /// Loads the specification and carrier table from disk.
    ///
    /// # Errors
    ///
    /// Fails when either resource cannot be read or parsed.
    pub fn load(
        spec_path: &Path,
        carrier_path: &Path,
        options: MappingOptions,
    ) -> Result<Self, StandardsError> {
        let spec = ExportSpec::load(spec_path)?;
        let carriers = load_carriers(carrier_path)?;
        info!(
            spec = %spec_path.display(),
            entries = spec.entries().len(),
            carriers = carriers.len(),
            issues = spec.report().issues().len(),
            "loaded field mapping resources"
        );
        Ok(Self::new(spec, carriers, options))
    }

    /// Loads the resources named by an exporter config.
    pub fn from_config(config: &ExporterConfig) -> Result<Self, StandardsError> {
        Self::load(
            &config.spec_file,
            &config.carrier_file,
            config.mapping_options(),
        )
    }

    pub fn spec(&self) -> &ExportSpec {
        &self.spec
    }

    pub fn carriers(&self) -> &CarrierTable {
        &self.carriers
    }

    pub fn options(&self) -> MappingOptions {
        self.options
    }

    /// Clears `values` and fills it from the working list of `record_type`.
    ///
    /// Unknown functions become `?` values, rows whose field name does not
    /// resolve are skipped, and a context failure stops the call; none of
    /// these are returned as errors.
    pub fn set_from_config<R: Rng + ?Sized>(
        &self,
        record_type: RecordType,
        values: &mut FieldValueMap,
        context: EvaluationContext<'_>,
        rng: &mut R,
    ) -> MappingTally {
        values.clear();
        let mut tally = MappingTally {
            record_type,
            processed: 0,
            total: self.spec.working(record_type).len(),
            error: None,
        };

        if let Err(err) = self.fill(record_type, values, context, rng, &mut tally) {
            error!(
                %record_type,
                mapped = values.len(),
                "field mapping stopped: {err}"
            );
            tally.error = Some(err);
        }

        debug!(
            %record_type,
            processed = tally.processed,
            total = tally.total,
            "config props defined and processed"
        );
        tally
    }

    /// Beneficiary-level mapping.
    pub fn set_from_person<R: Rng + ?Sized>(
        &self,
        record_type: RecordType,
        values: &mut FieldValueMap,
        person: &Person,
        rng: &mut R,
    ) -> MappingTally {
        self.set_from_config(record_type, values, EvaluationContext::new(person), rng)
    }

    /// Mapping with an encounter in context.
    pub fn set_from_encounter<R: Rng + ?Sized>(
        &self,
        record_type: RecordType,
        values: &mut FieldValueMap,
        encounter: &Encounter,
        person: &Person,
        rng: &mut R,
    ) -> MappingTally {
        let context = EvaluationContext::new(person).with_encounter(encounter);
        self.set_from_config(record_type, values, context, rng)
    }

    /// Mapping with an encounter and a device in context.
    pub fn set_from_device<R: Rng + ?Sized>(
        &self,
        record_type: RecordType,
        values: &mut FieldValueMap,
        encounter: &Encounter,
        device: &Device,
        person: &Person,
        rng: &mut R,
    ) -> MappingTally {
        let context = EvaluationContext::new(person)
            .with_encounter(encounter)
            .with_device(device);
        self.set_from_config(record_type, values, context, rng)
    }

    fn fill<R: Rng + ?Sized>(
        &self,
        record_type: RecordType,
        values: &mut FieldValueMap,
        context: EvaluationContext<'_>,
        rng: &mut R,
        tally: &mut MappingTally,
    ) -> Result<(), EvalError> {
        let evaluator = ExpressionEvaluator::new(self.spec.registry());
        let input = FunctionInput::new(context, &self.carriers);

        for (entry, field) in self.spec.working(record_type) {
            let expression = expression_by_type(entry, record_type);
            let evaluated = evaluator.evaluate(expression, entry, record_type, &input)?;
            let value =
                select_distribution(&evaluated, self.options.use_first_distribution, rng);
            if !value.starts_with(UNKNOWN_FUNCTION_SENTINEL) {
                tally.processed += 1;
            }

            match field {
                Some(field) => {
                    values.insert(field, value);
                }
                None => warn!(
                    line = entry.line_number(),
                    %record_type,
                    field = entry.field(),
                    "skipping value for unresolvable field"
                ),
            }
        }
        Ok(())
    }
}
