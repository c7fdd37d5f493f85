use anyhow::Result;
use tracing::info_span;

use listing_cli::pipeline::{CleanOutcome, CleanRequest, clean_file, flatten_offers, load_synonyms};

use crate::cli::{CleanArgs, OffersArgs, RolesArgs};

pub fn run_clean(args: &CleanArgs) -> Result<CleanOutcome> {
    let span = info_span!("clean", input = %args.input.display());
    let _guard = span.enter();
    let request = CleanRequest {
        input: args.input.clone(),
        output: args.output.clone(),
        synonyms: args.synonyms.clone(),
        price_floor: args.price_floor,
        price_ceiling: args.price_ceiling,
        missing_mileage: args.missing_mileage.into(),
        fraction_policy: args.fraction_policy.into(),
        dry_run: args.dry_run,
    };
    clean_file(&request)
}

pub fn run_roles(args: &RolesArgs) -> Result<()> {
    let synonyms = load_synonyms(args.synonyms.as_deref())?;
    crate::summary::print_roles(&synonyms);
    Ok(())
}

pub fn run_offers(args: &OffersArgs) -> Result<()> {
    let rows = flatten_offers(&args.specs, &args.prices, &args.output)?;
    println!("Wrote {rows} rows to {}", args.output.display());
    Ok(())
}
