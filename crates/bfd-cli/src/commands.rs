use anyhow::{Context, Result};
use bfd_cli::fixture::MappingFixture;
use bfd_cli::report::blocking_issue_count;
use bfd_map::{ExportSpec, FieldMappingEngine, FunctionRegistry, MappingTally, seeded_rng};
use bfd_model::{FieldValueMap, RecordType};
use bfd_standards::ExporterConfig;
use tracing::info;

use crate::cli::{MapArgs, ResourceArgs};
use crate::summary::{print_functions, print_mapping, print_validation};

/// Resolves the exporter config from the CLI flags.
fn exporter_config(args: &ResourceArgs) -> Result<ExporterConfig> {
    let mut config = match &args.config {
        Some(path) => ExporterConfig::load(path)
            .with_context(|| format!("load config {}", path.display()))?,
        None => ExporterConfig::default(),
    };
    if let Some(spec) = &args.spec {
        config.spec_file = spec.clone();
    }
    if let Some(carriers) = &args.carriers {
        config.carrier_file = carriers.clone();
    }
    Ok(config)
}

/// Returns the number of blocking issues.
pub fn run_validate(args: &ResourceArgs) -> Result<usize> {
    let config = exporter_config(args)?;
    let spec = ExportSpec::load(&config.spec_file).context("load specification")?;
    print_validation(&config.spec_file, spec.entries().len(), spec.report());
    Ok(blocking_issue_count(spec.report()))
}

pub fn run_functions() -> Result<()> {
    print_functions(&FunctionRegistry::standard());
    Ok(())
}

pub fn run_map(args: &MapArgs) -> Result<MappingTally> {
    let mut config = exporter_config(&args.resources)?;
    if args.use_first {
        config.use_first_distribution = true;
    }
    let engine = FieldMappingEngine::from_config(&config).context("load mapping resources")?;
    let fixture = MappingFixture::load(&args.fixture)?;

    let record_type = RecordType::from(args.record_type);
    let seed = args.seed.or(config.seed).unwrap_or(fixture.person.seed);
    info!(%record_type, seed, fixture = %args.fixture.display(), "mapping fixture");

    let mut values = FieldValueMap::new();
    let tally = engine.set_from_config(
        record_type,
        &mut values,
        fixture.context(),
        &mut seeded_rng(seed),
    );
    print_mapping(record_type, &values, &tally, args.all);
    Ok(tally)
}
