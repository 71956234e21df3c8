use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use tracing::debug;

use super::app::App;
use super::form;
use crate::export::{default_export_path, shellexpand, CsvExporter};
use crate::models::{Category, TransactionKind};
use crate::session::{Draft, DraftField, View};

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit BudgetKat", cmd_quit, r);
    register_command!("quit", "Quit BudgetKat", cmd_quit, r);
    register_command!("d", "Go to Dashboard", cmd_dashboard, r);
    register_command!("dashboard", "Go to Dashboard", cmd_dashboard, r);
    register_command!("t", "Go to Transactions", cmd_transactions, r);
    register_command!("transactions", "Go to Transactions", cmd_transactions, r);
    register_command!("r", "Go to Reports", cmd_reports, r);
    register_command!("reports", "Go to Reports", cmd_reports, r);
    register_command!("i", "Go to Insights", cmd_insights, r);
    register_command!("insights", "Go to Insights", cmd_insights, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!(
        "a",
        "Add transaction (e.g. :a 2025-04-12 Coffee 4.50 Food)",
        cmd_add,
        r
    );
    register_command!(
        "add",
        "Add transaction (e.g. :add 2025-04-12 Bonus 250 Food income)",
        cmd_add,
        r
    );
    register_command!(
        "export",
        "Export transactions to CSV (e.g. :export ~/budget.csv)",
        cmd_export,
        r
    );

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        debug!(command = cmd_name, args, "Running command");
        (cmd.run)(args, app)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| (levenshtein(input, k), **k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_dashboard(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.switch_view(View::Dashboard);
    Ok(())
}

fn cmd_transactions(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.switch_view(View::Transactions);
    Ok(())
}

fn cmd_reports(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.switch_view(View::Reports);
    Ok(())
}

fn cmd_insights(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.switch_view(View::Insights);
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

const ADD_USAGE: &str =
    "Usage: :add <date> <description> <amount> <category> [income|expense]";

/// Parse `<date> <description> <amount> <category> [kind]` into a draft.
/// The description may contain spaces; everything else is one token.
pub(crate) fn parse_add_args(args: &str, categories: &[Category]) -> Result<Draft, String> {
    let mut tokens: Vec<&str> = args.split_whitespace().collect();

    let kind = match tokens.last().and_then(|t| TransactionKind::parse(t)) {
        Some(kind) => {
            tokens.pop();
            kind
        }
        None => TransactionKind::Expense,
    };
    if tokens.len() < 4 {
        return Err(ADD_USAGE.to_string());
    }

    let category_name = tokens.pop().unwrap_or_default();
    let amount = tokens.pop().unwrap_or_default();
    let date = tokens.remove(0);
    let description = tokens.join(" ");

    let category = Category::find_by_name(categories, category_name)
        .ok_or_else(|| format!("Category '{category_name}' not found"))?;

    Ok(Draft {
        description,
        amount: amount.to_string(),
        category_id: category.id,
        kind,
        date: date.to_string(),
    })
}

fn cmd_add(args: &str, app: &mut App) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status(ADD_USAGE);
        return Ok(());
    }

    let draft = match parse_add_args(args, &app.session.categories) {
        Ok(draft) => draft,
        Err(msg) => {
            app.set_status(msg);
            return Ok(());
        }
    };
    if let Some(reason) = form::rejection(&draft) {
        app.set_status(reason);
        return Ok(());
    }

    let today = app.today();
    let description = draft.description.clone();
    app.update(|s| {
        s.with_draft_field(DraftField::Description, &draft.description)
            .with_draft_field(DraftField::Amount, &draft.amount)
            .with_draft_field(DraftField::Category, &draft.category_id.to_string())
            .with_draft_field(DraftField::Kind, draft.kind.as_str())
            .with_draft_field(DraftField::Date, &draft.date)
            .submit_draft(today)
    });
    app.set_status(format!("Added transaction: {description}"));
    Ok(())
}

fn cmd_export(args: &str, app: &mut App) -> anyhow::Result<()> {
    let path = if args.is_empty() {
        default_export_path(app.today())
    } else {
        shellexpand(args)
    };

    let count = CsvExporter::export_to_path(
        Path::new(&path),
        &app.session.categories,
        &app.session.transactions,
    )?;
    if count == 0 {
        app.set_status(format!("No transactions to export; wrote header to {path}"));
    } else {
        app.set_status(format!("Exported {count} transactions to {path}"));
    }
    Ok(())
}
