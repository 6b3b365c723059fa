//! Compute the prune list

use crate::settings::{self, KeepOverrides};
use crate::{util, PlanArgs};
use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use retention::{plan_prune, Granularity, PrunePlan};

pub async fn run(args: PlanArgs) -> Result<()> {
    // 1. Load config file (if any)
    let settings = settings::load(args.config.as_deref()).await?;

    // 2. Resolve timestamp format and retention counts
    let format = args
        .file_format
        .or(settings.file_format)
        .context(
            "No timestamp format given: pass --file-format or set file_format in the config file",
        )?;

    let overrides = KeepOverrides {
        daily: args.keep_daily,
        weekly: args.keep_weekly,
        monthly: args.keep_monthly,
        yearly: args.keep_yearly,
    };
    let retention = overrides
        .apply(settings.retention)
        .context("Invalid retention configuration")?;

    // 3. Resolve the reference instant
    let now = match args.now.as_deref() {
        Some(raw) => util::parse_anchor(raw)?,
        None => chrono::Local::now().naive_local(),
    };

    // 4. Read backup names
    let names = util::read_identifiers(&args.input_file).await?;
    tracing::debug!(
        "Read {} backup names from {}",
        names.len(),
        args.input_file.display()
    );

    // 5. Classify
    let plan = plan_prune(names, &format, &retention, now)?;
    for name in &plan.unparsed {
        tracing::warn!("Skipping '{}': does not match format '{}'", name, format);
    }

    // 6. Write prune list
    util::write_prune_list(&args.output_file, &plan.pruned).await?;

    // 7. Display results
    print_summary(&plan, args.show_kept);
    println!(
        "Prune list written to {}. {} files to prune.",
        args.output_file.display(),
        plan.pruned.len()
    );

    Ok(())
}

fn print_summary(plan: &PrunePlan, show_kept: bool) {
    println!("{}", "Retention Plan".bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!();

    println!("Anchor:      {}", plan.anchor.to_string().cyan());
    println!(
        "Retention:   {} daily, {} weekly, {} monthly, {} yearly",
        plan.config.keep_daily,
        plan.config.keep_weekly,
        plan.config.keep_monthly,
        plan.config.keep_yearly
    );
    match plan.coverage {
        Some((oldest, newest)) => {
            let span = format!("{} -> {}", oldest, newest);
            println!("Coverage:    {}", span.cyan());
        }
        None => println!("Coverage:    {}", "none (every count is zero)".dimmed()),
    }
    println!();

    println!("Kept:        {}", plan.kept.len().to_string().green());
    println!("To prune:    {}", plan.pruned.len().to_string().yellow());
    if !plan.unparsed.is_empty() {
        println!("Unparsed:    {}", plan.unparsed.len().to_string().red());
    }

    if show_kept && !plan.kept.is_empty() {
        println!();
        println!("{}", "Kept backups".bold());
        for tier in Granularity::PRIORITY {
            for retained in plan.kept_in(tier) {
                println!(
                    "  {:<8} #{:<3} {}  {}",
                    tier.tier_name(),
                    retained.bucket_index,
                    retained.timestamp.to_string().dimmed(),
                    retained.name
                );
            }
        }
    }

    println!();
}
