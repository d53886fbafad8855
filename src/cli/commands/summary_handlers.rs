use crate::cli::commands::{CliContext, CommandDefinition, CommandError, CommandResult};
use crate::cli::{forms, output};
use crate::core::services::{SubscriptionService, SummaryService};
use crate::engine::BillingEngine;

pub fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "upcoming",
            "Show subscriptions due within the upcoming window",
            "upcoming [days]",
            run_upcoming,
        ),
        CommandDefinition::new(
            "total",
            "Show the total monthly cost",
            "total",
            run_total,
        ),
        CommandDefinition::new(
            "categories",
            "Show subscriptions grouped by category",
            "categories",
            run_categories,
        ),
    ]
}

fn run_upcoming(context: &mut CliContext, args: &[String]) -> CommandResult {
    let window_days = match args.first() {
        Some(raw) => forms::parse_positive_days(raw).map_err(CommandError::Usage)?,
        None => context.config.upcoming_window_days,
    };
    let today = SummaryService::today();
    let records = SubscriptionService::list(&context.store)?;
    let upcoming = BillingEngine::upcoming(&records, window_days, today);
    output::section(format!("Due within {} days", window_days));
    if upcoming.is_empty() {
        output::info("Nothing due in this window.");
        return Ok(());
    }
    for sub in &upcoming {
        output::info(format!(
            "{}  {:<24} {:.2} ({})",
            output::format_date(sub.next_due_date(today)),
            sub.title,
            sub.price,
            sub.cycle
        ));
    }
    Ok(())
}

fn run_total(context: &mut CliContext, _args: &[String]) -> CommandResult {
    let records = SubscriptionService::list(&context.store)?;
    let total = BillingEngine::total_monthly_cost(&records);
    output::info(format!(
        "Total monthly cost: {:.2} across {} subscription(s)",
        total,
        records.len()
    ));
    Ok(())
}

fn run_categories(context: &mut CliContext, _args: &[String]) -> CommandResult {
    let records = SubscriptionService::list(&context.store)?;
    let grouped = BillingEngine::grouped(&records);
    if grouped.is_empty() {
        output::info("No subscriptions yet.");
        return Ok(());
    }
    for (category, members) in &grouped {
        let monthly: f64 = members.iter().map(|sub| sub.monthly_cost()).sum();
        output::section(format!("{} ({:.2}/month)", category, monthly));
        for sub in members {
            output::info(format!(
                "  {:<24} {:.2} {}",
                sub.title,
                sub.price,
                sub.cycle
            ));
        }
    }
    Ok(())
}
