use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span};

use xwalk_cli::config::{FileConfig, Overrides, RunConfig};
use xwalk_core::{CASCADE, LinkInput, link};
use xwalk_ingest::{load_facility_corrections, load_market_generators, load_regulatory_units};
use xwalk_model::FacilityCorrections;
use xwalk_report::write_outputs;

use crate::cli::LinkArgs;
use crate::summary::apply_table_style;
use crate::types::LinkResult;

pub fn run_phases() {
    let mut table = Table::new();
    table.set_header(vec!["Phase", "Rule", "Identifiers match when"]);
    apply_table_style(&mut table);
    for rule in &CASCADE {
        table.add_row(vec![rule.phase.label(), rule.name, rule.description]);
    }
    println!("{table}");
    println!(
        "Facility keys must agree exactly in every phase. Market records with excluded \
         energy sources leave the pool before Step 2a."
    );
}

pub fn run_link(args: &LinkArgs) -> Result<LinkResult> {
    let file = match &args.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let config = RunConfig::resolve(overrides(args), file).context("resolve configuration")?;

    // =========================================================================
    // Stage 1: Ingest
    // =========================================================================
    let ingest_span = info_span!("ingest");
    let ingest_start = Instant::now();
    let input = ingest_span.in_scope(|| -> Result<LinkInput> {
        let units = load_regulatory_units(&config.regulatory)
            .context("load regulatory unit table")?;
        let generators =
            load_market_generators(&config.market).context("load market generator table")?;
        let corrections = match &config.corrections {
            Some(path) => {
                load_facility_corrections(path).context("load facility-key correction table")?
            }
            None => FacilityCorrections::default(),
        };
        Ok(LinkInput::new(units, generators).with_corrections(corrections))
    })?;
    info!(
        units = input.units.len(),
        generators = input.generators.len(),
        corrections = input.corrections.len(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    // =========================================================================
    // Stage 2: Link
    // =========================================================================
    let crosswalk = link(input, &config.options).context("link inputs")?;

    // =========================================================================
    // Stage 3: Output
    // =========================================================================
    let outputs = if args.dry_run {
        info!("dry run: skipping output files");
        None
    } else {
        let output_span = info_span!("output", output_dir = %config.output_dir.display());
        let paths = output_span.in_scope(|| write_outputs(&config.output_dir, &crosswalk))?;
        info!(
            crosswalk = %paths.crosswalk.display(),
            rows = crosswalk.len(),
            "outputs written"
        );
        Some(paths)
    };

    Ok(LinkResult {
        crosswalk,
        outputs,
        output_dir: config.output_dir,
    })
}

fn overrides(args: &LinkArgs) -> Overrides {
    Overrides {
        year: args.year,
        regulatory: args.regulatory.clone(),
        market: args.market.clone(),
        corrections: args.corrections.clone(),
        output_dir: args.output_dir.clone(),
        non_grid_prefix: args.non_grid_prefix.clone(),
    }
}
