use crate::cli::{SettingsAction, SettingsSetArgs};
use crate::context::CliContext;
use crate::output;
use taskmaster_domain::{Priority, Theme};

pub fn handle(ctx: &mut CliContext, action: SettingsAction) -> anyhow::Result<()> {
    match &action {
        SettingsAction::Show => {
            output::output_success(serde_json::json!({
                "settings": ctx.state.settings.settings(),
                "data_dir": ctx.data_dir().display().to_string(),
            }));
        }
        SettingsAction::Set(args) => {
            apply(ctx, args)?;
            output::output_success(ctx.state.settings.settings());
        }
        SettingsAction::Reset => {
            let settings = ctx.state.reset_settings()?;
            output::output_success(settings);
        }
        SettingsAction::ClearData { .. } => {
            confirm(&action)?;
            ctx.state.clear_all_data()?;
            output::output_success(serde_json::json!({
                "cleared": true,
                "categories": ctx.state.categories.names(),
            }));
        }
    }
    Ok(())
}

/// Checks run before the data dir is opened, so a refused command writes nothing.
pub fn confirm(action: &SettingsAction) -> anyhow::Result<()> {
    if let SettingsAction::ClearData { yes: false } = action {
        anyhow::bail!("Refusing to delete all tasks and categories without --yes");
    }
    Ok(())
}

fn apply(ctx: &mut CliContext, args: &SettingsSetArgs) -> anyhow::Result<()> {
    // Parse everything up front so a bad value changes nothing.
    let priority = args
        .default_priority
        .as_deref()
        .map(str::parse::<Priority>)
        .transpose()?;
    let theme = args.theme.as_deref().map(str::parse::<Theme>).transpose()?;

    if args.show_completed.is_none()
        && args.auto_archive.is_none()
        && priority.is_none()
        && theme.is_none()
    {
        anyhow::bail!("Nothing to change");
    }

    if let Some(show) = args.show_completed {
        ctx.state.settings.set_show_completed_tasks(show)?;
    }
    if let Some(enabled) = args.auto_archive {
        ctx.state.set_auto_archive_completed(enabled)?;
    }
    if let Some(priority) = priority {
        ctx.state.set_default_priority(priority)?;
    }
    if let Some(theme) = theme {
        ctx.state.settings.set_theme(theme)?;
    }
    Ok(())
}
