use crate::cli::DashboardArgs;
use crate::context::CliContext;
use crate::output;

pub fn handle(ctx: &CliContext, args: DashboardArgs) -> anyhow::Result<()> {
    let days = args
        .days
        .unwrap_or_else(|| ctx.config.effective_upcoming_days());
    let limit = args
        .limit
        .unwrap_or_else(|| ctx.config.effective_high_priority_limit());

    let dashboard = ctx.state.tasks.dashboard(days, limit);
    tracing::debug!(
        "Dashboard: {} tasks, {} upcoming within {} days",
        dashboard.stats.total,
        dashboard.upcoming.len(),
        days
    );
    output::output_success(&dashboard);
    Ok(())
}
