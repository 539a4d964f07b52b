//! Command-line shell around the planning core.
//! Loads inputs, calls the core with validated scalars, prints the results.

mod render;

use {
    crate::{
        Cli, Command,
        analysis::{
            self, RangeOptions, goal_cost_with, incremental_cost_with, investment_range_with,
            locate_threshold, marginal_cost_sequence_with,
        },
        data::{ParameterStore, ParamsRegistry, load_dataset, load_params, save_params},
        domain::{ChannelKey, GoalPeriod, MissingPolicy},
        errors::PlanError,
        models::InversionPolicy,
    },
    anyhow::{Result, anyhow},
};

/// Every core failure reaches the user as "does not exist" or "invalid input".
fn explain(key: &ChannelKey, err: PlanError) -> anyhow::Error {
    match err {
        PlanError::KeyNotFound(_) => anyhow!("{} does not exist.", key),
        other => anyhow!("Invalid input for {}: {}", key, other),
    }
}

fn period_word(monthly: bool) -> &'static str {
    if monthly { "monthly" } else { "daily" }
}

pub fn run(cli: Cli) -> Result<()> {
    let policy = cli.inversion_policy();

    match &cli.command {
        Command::Fit { keep_zeros } => {
            let missing = if *keep_zeros {
                MissingPolicy::KeepAll
            } else {
                MissingPolicy::ZeroIsMissing
            };
            run_fit(&cli, missing)
        }
        Command::GoalCost {
            channel,
            goal,
            monthly,
        } => run_goal_cost(&cli, &channel.key(), *goal, *monthly, policy),
        Command::Incremental {
            channel,
            base,
            extra,
            monthly,
        } => run_incremental(&cli, &channel.key(), *base, *extra, *monthly, policy),
        Command::Profitable {
            channel,
            base,
            value,
            steps,
            step_size,
            monthly,
        } => run_profitable(
            &cli,
            &channel.key(),
            *base,
            *value,
            *steps,
            *step_size,
            *monthly,
            policy,
        ),
        Command::Range {
            channel,
            goal,
            monthly,
            alpha,
        } => run_range(&cli, &channel.key(), *goal, *monthly, *alpha, policy),
        Command::Summary { channel, alpha } => run_summary(&cli, &channel.key(), *alpha),
    }
}

fn run_fit(cli: &Cli, missing: MissingPolicy) -> Result<()> {
    let dataset = load_dataset(&cli.dataset)?;
    log::info!("Fitting {} series from {}", dataset.series.len(), cli.dataset.display());

    let (registry, failures) = ParamsRegistry::fit_dataset(&dataset, missing);
    for (key, err) in &failures {
        println!("Skipped {}: {}", key, err);
    }
    if registry.is_empty() {
        return Err(anyhow!("No series could be fitted, nothing written."));
    }

    save_params(&registry, &cli.params)?;
    println!("{}", render::registry_table(&registry));
    println!(
        "Saved {} fitted models to {}.",
        registry.len(),
        cli.params.display()
    );
    Ok(())
}

fn run_goal_cost(
    cli: &Cli,
    key: &ChannelKey,
    goal: f64,
    monthly: bool,
    policy: InversionPolicy,
) -> Result<()> {
    let registry = load_params(&cli.params)?;
    let cost = registry
        .lookup(key)
        .and_then(|c| goal_cost_with(&c, goal, GoalPeriod::from_monthly_flag(monthly), policy))
        .map_err(|e| explain(key, e))?;

    println!(
        "Obtaining {} {} conversions is going to have a monthly cost of {:.2} dollars \
         ({:.2} a day, {:.2} per conversion).",
        goal,
        period_word(monthly),
        cost.monthly_cost,
        cost.daily_cost,
        cost.cost_per_conversion
    );
    Ok(())
}

fn run_incremental(
    cli: &Cli,
    key: &ChannelKey,
    base: f64,
    extra: f64,
    monthly: bool,
    policy: InversionPolicy,
) -> Result<()> {
    let registry = load_params(&cli.params)?;
    let mc = registry
        .lookup(key)
        .and_then(|c| {
            incremental_cost_with(&c, base, extra, GoalPeriod::from_monthly_flag(monthly), policy)
        })
        .map_err(|e| explain(key, e))?;

    let word = period_word(monthly);
    println!(
        "Given a baseline of {} {} conversions, the CPC of getting {} extra {} conversions is around {:.2}.",
        base, word, extra, word, mc.marginal_cost
    );
    Ok(())
}

fn run_profitable(
    cli: &Cli,
    key: &ChannelKey,
    base: f64,
    value: f64,
    steps: usize,
    step_size: f64,
    monthly: bool,
    policy: InversionPolicy,
) -> Result<()> {
    let registry = load_params(&cli.params)?;
    let outcome = registry
        .lookup(key)
        .and_then(|c| {
            marginal_cost_sequence_with(
                &c,
                base,
                steps,
                step_size,
                GoalPeriod::from_monthly_flag(monthly),
                policy,
            )
        })
        .and_then(|sequence| locate_threshold(&sequence, value))
        .map_err(|e| explain(key, e))?;

    println!("{}", render::threshold_table(&outcome));

    match &outcome.warning {
        Some(warning) => {
            println!("{}", warning);
            println!(
                "No profitable level found. Consider lowering baseline conversions if conversion value \
                 is lower than minimum CPC, or increasing the amount of increases or the jump size if \
                 conversion value is higher than maximum CPC."
            );
        }
        None => println!(
            "The profitable level of conversions, given a conversion value of {} dollars, is around {} and {} daily conversions.",
            value,
            outcome.closest.daily_base.round(),
            outcome.closest.daily_new.round()
        ),
    }
    Ok(())
}

fn run_range(
    cli: &Cli,
    key: &ChannelKey,
    goal: f64,
    monthly: bool,
    alpha: f64,
    policy: InversionPolicy,
) -> Result<()> {
    let dataset = load_dataset(&cli.dataset)?;
    let options = RangeOptions {
        alpha,
        policy,
        ..RangeOptions::default()
    };
    let range = dataset
        .observations(key)
        .and_then(|obs| {
            investment_range_with(obs, goal, GoalPeriod::from_monthly_flag(monthly), &options)
        })
        .map_err(|e| explain(key, e))?;

    println!("{}", render::range_table(&range));
    println!(
        "For {} the model suggests that to obtain around {} {} conversions one should invest, \
         on a monthly basis, between {:.2} dollars and {:.2} dollars.",
        key,
        goal,
        period_word(monthly),
        range.optimistic.monthly_cost,
        range.pessimistic.monthly_cost
    );
    Ok(())
}

fn run_summary(cli: &Cli, key: &ChannelKey, alpha: f64) -> Result<()> {
    let dataset = load_dataset(&cli.dataset)?;
    let model = dataset
        .observations(key)
        .and_then(analysis::fit)
        .map_err(|e| explain(key, e))?;

    // Two-row fits have no interval; show the estimates anyway.
    let interval = match model.confidence_interval(alpha) {
        Ok(ci) => Some(ci),
        Err(PlanError::InsufficientData { .. }) => None,
        Err(e) => return Err(explain(key, e)),
    };

    println!("{}", key);
    println!("{}", render::summary_table(&model.summary(), interval.as_ref()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_reads_as_does_not_exist() {
        let key = ChannelKey::new("Product5", "Platform1");
        let msg = explain(&key, PlanError::KeyNotFound(key.clone())).to_string();
        assert_eq!(msg, "Product5 in Platform1 does not exist.");
    }

    #[test]
    fn other_failures_read_as_invalid_input() {
        let key = ChannelKey::new("Product5", "Platform1");
        let msg = explain(&key, PlanError::DivisionByZero("x".to_string())).to_string();
        assert!(msg.starts_with("Invalid input for Product5 in Platform1"));
    }
}
