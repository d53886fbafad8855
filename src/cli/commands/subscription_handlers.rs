use crate::cli::commands::{CliContext, CommandDefinition, CommandError, CommandResult};
use crate::cli::{forms, output};
use crate::core::services::{SubscriptionDraft, SubscriptionService, SummaryService};
use crate::domain::Subscription;

pub fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "list",
            "List all subscriptions",
            "list",
            run_list,
        ),
        CommandDefinition::new(
            "add",
            "Add a subscription",
            "add title=<name> price=<amount> [category=<name>] [cycle=<Weekly|Monthly|Yearly>] [anchor=YYYY-MM-DD] [notes=<text>] [color=<hex>]",
            run_add,
        ),
        CommandDefinition::new(
            "edit",
            "Edit a subscription's fields",
            "edit <id> [title=...] [price=...] [category=...] [cycle=...] [anchor=YYYY-MM-DD] [notes=...] [color=...]",
            run_edit,
        ),
        CommandDefinition::new(
            "remove",
            "Delete a subscription",
            "remove <id> [--yes]",
            run_remove,
        ),
        CommandDefinition::new(
            "paid",
            "Mark the pending occurrence as paid",
            "paid <id>",
            run_paid,
        ),
    ]
}

fn run_list(context: &mut CliContext, _args: &[String]) -> CommandResult {
    let subscriptions = SubscriptionService::list(&context.store)?;
    if subscriptions.is_empty() {
        output::info("No subscriptions yet. Use `add` to create one.");
        return Ok(());
    }
    let today = SummaryService::today();
    output::section("Subscriptions");
    for sub in &subscriptions {
        output::info(describe(sub, today));
    }
    Ok(())
}

fn run_add(context: &mut CliContext, args: &[String]) -> CommandResult {
    let pairs = forms::split_key_values(args).map_err(CommandError::Usage)?;
    let mut draft = SubscriptionDraft {
        title: String::new(),
        price: -1.0,
        category: crate::domain::SubscriptionCategory::Media,
        cycle: crate::domain::BillingCycle::Monthly,
        anchor_date: SummaryService::today(),
        notes: None,
        color_hex: None,
    };
    apply_fields(&mut draft, &pairs)?;
    if draft.title.is_empty() {
        return Err(CommandError::Usage("`title` is required".into()));
    }
    if draft.price < 0.0 {
        return Err(CommandError::Usage("`price` is required".into()));
    }
    let added = SubscriptionService::add(&context.store, draft)?;
    output::success(format!(
        "Added `{}`, next due {}",
        added.title,
        output::format_date(added.next_due_date(SummaryService::today()))
    ));
    Ok(())
}

fn run_edit(context: &mut CliContext, args: &[String]) -> CommandResult {
    let (raw_id, rest) = args
        .split_first()
        .ok_or_else(|| CommandError::Usage("expected a subscription id".into()))?;
    let id = context.resolve_id(raw_id)?;
    let pairs = forms::split_key_values(rest).map_err(CommandError::Usage)?;
    if pairs.is_empty() {
        return Err(CommandError::Usage("nothing to change".into()));
    }

    let subscriptions = SubscriptionService::list(&context.store)?;
    let current = subscriptions
        .iter()
        .find(|sub| sub.id == id)
        .ok_or_else(|| CommandError::Usage(format!("no subscription matches `{}`", raw_id)))?;
    let mut draft = SubscriptionDraft {
        title: current.title.clone(),
        price: current.price,
        category: current.category,
        cycle: current.cycle,
        anchor_date: current.anchor_date,
        notes: current.notes.clone(),
        color_hex: current.color_hex.clone(),
    };
    apply_fields(&mut draft, &pairs)?;
    let updated = SubscriptionService::edit(&context.store, id, draft)?;
    output::success(format!("Updated `{}`", updated.title));
    Ok(())
}

fn run_remove(context: &mut CliContext, args: &[String]) -> CommandResult {
    let (raw_id, rest) = args
        .split_first()
        .ok_or_else(|| CommandError::Usage("expected a subscription id".into()))?;
    let assume_yes = rest.iter().any(|arg| arg == "--yes");
    let id = context.resolve_id(raw_id)?;
    let subscriptions = SubscriptionService::list(&context.store)?;
    let title = subscriptions
        .iter()
        .find(|sub| sub.id == id)
        .map(|sub| sub.title.clone())
        .unwrap_or_else(|| raw_id.to_string());
    if !forms::confirm(&format!("Delete `{}`? This cannot be undone", title), assume_yes) {
        output::info("Cancelled.");
        return Ok(());
    }
    SubscriptionService::remove(&context.store, id)?;
    output::success(format!("Removed `{}`", title));
    Ok(())
}

fn run_paid(context: &mut CliContext, args: &[String]) -> CommandResult {
    let raw_id = args
        .first()
        .ok_or_else(|| CommandError::Usage("expected a subscription id".into()))?;
    let id = context.resolve_id(raw_id)?;
    let next = SubscriptionService::mark_paid(&context.store, id, SummaryService::today())?;
    output::success(format!("Marked paid, next due {}", output::format_date(next)));
    Ok(())
}

fn apply_fields(
    draft: &mut SubscriptionDraft,
    pairs: &[(String, String)],
) -> Result<(), CommandError> {
    for (key, value) in pairs {
        match key.as_str() {
            "title" => draft.title = value.clone(),
            "price" => draft.price = forms::parse_price(value).map_err(CommandError::Usage)?,
            "category" => draft.category = forms::parse_category(value),
            "cycle" => draft.cycle = forms::parse_cycle(value),
            "anchor" => {
                draft.anchor_date = forms::parse_date(value).map_err(CommandError::Usage)?
            }
            "notes" => draft.notes = Some(value.clone()),
            "color" => draft.color_hex = Some(value.clone()),
            other => {
                return Err(CommandError::Usage(format!("unknown field `{}`", other)));
            }
        }
    }
    Ok(())
}

fn describe(sub: &Subscription, today: chrono::NaiveDate) -> String {
    let short_id: String = sub.id.to_string().chars().take(8).collect();
    format!(
        "{}  {:<24} {:>8.2} {:<8} {:<12} due {}",
        short_id,
        sub.title,
        sub.price,
        sub.cycle.display_name(),
        sub.category.display_name(),
        output::format_date(sub.next_due_date(today))
    )
}
