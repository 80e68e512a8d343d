use itex_domain::{CategoryFilter, FilterPatch, StatusFilter, TransactionFilter};
use tracing::debug;

use crate::cli::commands::{ArgKind, CommandEntry, Subcommand};
use crate::cli::core::{
    parse_optional_date, parse_status, usage, CommandError, CommandResult, ShellContext,
};
use crate::cli::output;
use crate::cli::render;

const USAGE: &str = "filter <show|reset|category <name|all>|vendor <text|->|status <all|planned|paid>|from <date|->|to <date|->>";

const SUBCOMMANDS: &[Subcommand] = &[
    Subcommand::new("show", &[]),
    Subcommand::new("reset", &[]),
    Subcommand::new("category", &[ArgKind::Category]),
    Subcommand::new("vendor", &[]),
    Subcommand::new("status", &[ArgKind::Status]),
    Subcommand::new("from", &[]),
    Subcommand::new("to", &[]),
];

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "filter",
        "Narrow the dashboard by category, vendor, status or date range",
        USAGE,
        cmd_filter,
    )
    .with_subcommands(SUBCOMMANDS)]
}

fn cmd_filter(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((action, rest)) = args.split_first() else {
        return show(context);
    };
    let value = rest.join(" ");

    let patch = match action.to_lowercase().as_str() {
        "show" => return show(context),
        "reset" | "clear" => {
            context.filter = TransactionFilter::default();
            output::success("Filters reset.");
            return Ok(());
        }
        "category" => FilterPatch {
            category: Some(category_filter(context, &value)?),
            ..FilterPatch::default()
        },
        "vendor" => FilterPatch {
            vendor: Some(if value == "-" { String::new() } else { value.clone() }),
            ..FilterPatch::default()
        },
        "status" => FilterPatch {
            status: Some(match value.to_lowercase().as_str() {
                "" => return Err(usage(USAGE)),
                "all" => StatusFilter::All,
                other => StatusFilter::Only(parse_status(other)?),
            }),
            ..FilterPatch::default()
        },
        "from" => FilterPatch {
            start_date: Some(parse_optional_date(required(&value)?)?),
            ..FilterPatch::default()
        },
        "to" => FilterPatch {
            end_date: Some(parse_optional_date(required(&value)?)?),
            ..FilterPatch::default()
        },
        other => {
            return Err(CommandError::InvalidArguments(format!(
                "unknown filter subcommand `{}`",
                other
            )))
        }
    };

    context.filter = context.filter.apply(patch);
    debug!(filter = ?context.filter, "filter updated");
    let matches = context.filtered_transactions().len();
    output::success(format!(
        "{} of {} transactions match.",
        matches,
        context.state.transactions().len()
    ));
    Ok(())
}

fn required(value: &str) -> Result<&str, CommandError> {
    if value.is_empty() {
        Err(usage(USAGE))
    } else {
        Ok(value)
    }
}

fn category_filter(context: &ShellContext, value: &str) -> Result<CategoryFilter, CommandError> {
    if value.is_empty() {
        return Err(usage(USAGE));
    }
    if value.eq_ignore_ascii_case("all") {
        return Ok(CategoryFilter::All);
    }
    context.resolve_category(value).map(CategoryFilter::Only)
}

fn show(context: &ShellContext) -> CommandResult {
    output::section("Filters");
    let summary = render::filter_summary(&context.filter, context.state.categories());
    output::block(render::key_values(&summary));
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use itex_domain::{CategoryFilter, StatusFilter, TransactionStatus};

    use crate::cli::shell_context::test_support::{run_lines, seeded_context};

    #[test]
    fn filters_combine_and_reset() {
        let mut context = seeded_context();
        run_lines(
            &mut context,
            &[
                "filter category printers",
                "filter status paid",
                "filter from 2023-02-10",
                "filter to 2023-05-18",
            ],
        );

        assert_eq!(context.filter.category, CategoryFilter::Only("printers".into()));
        assert_eq!(context.filter.status, StatusFilter::Only(TransactionStatus::Paid));
        let ids: Vec<_> = context
            .filtered_transactions()
            .iter()
            .map(|txn| txn.id.to_string())
            .collect();
        assert_eq!(ids, vec!["3", "6"]);

        run_lines(&mut context, &["filter to -"]);
        assert_eq!(context.filter.end_date, None);
        assert_eq!(
            context.filter.start_date,
            NaiveDate::from_ymd_opt(2023, 2, 10)
        );

        run_lines(&mut context, &["filter reset"]);
        assert!(context.filter.is_identity());
    }

    #[test]
    fn vendor_filter_joins_words() {
        let mut context = seeded_context();
        run_lines(&mut context, &["filter vendor micro soft"]);
        assert_eq!(context.filter.vendor, "micro soft");
        run_lines(&mut context, &["filter vendor -"]);
        assert!(context.filter.is_identity());
    }

    #[test]
    fn unknown_category_is_rejected() {
        let mut context = seeded_context();
        assert!(context.process_line("filter category Phones").is_err());
        assert!(context.filter.is_identity());
    }
}
