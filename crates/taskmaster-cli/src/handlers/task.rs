use crate::cli::{TaskAction, TaskAddArgs, TaskEditArgs, TaskListArgs};
use crate::context::CliContext;
use crate::output;
use super::not_found;
use taskmaster_domain::due_date::parse_due_date;
use taskmaster_domain::{
    CategoryFilter, FieldUpdate, NewTask, Priority, StatusFilter, TaskFilters, TaskUpdate,
};

pub fn handle(ctx: &mut CliContext, action: TaskAction) -> anyhow::Result<()> {
    match action {
        TaskAction::Add(args) => {
            let input = build_new_task(args)?;
            let task = ctx.state.tasks.add(input)?;
            output::output_success(&task);
        }
        TaskAction::List(args) => {
            let tasks = list(ctx, &args)?;
            output::output_list(tasks);
        }
        TaskAction::Get { id } => match ctx.state.tasks.get(id) {
            Some(task) => output::output_success(task),
            None => return Err(not_found("Task", id)),
        },
        TaskAction::Edit(args) => {
            let id = args.id;
            let update = build_task_update(args)?;
            if update.is_empty() {
                output::output_error("Nothing to change");
            }
            match ctx.state.tasks.edit(id, update)? {
                Some(task) => output::output_success(&task),
                None => return Err(not_found("Task", id)),
            }
        }
        TaskAction::Toggle { id } => match ctx.state.tasks.toggle_complete(id)? {
            Some(task) => output::output_success(&task),
            None => return Err(not_found("Task", id)),
        },
        TaskAction::Delete { id } => {
            if !ctx.state.tasks.delete(id)? {
                return Err(not_found("Task", id));
            }
            output::output_success(serde_json::json!({"deleted": id.to_string()}));
        }
        TaskAction::Archive { id } => match ctx.state.tasks.archive(id)? {
            Some(archived) => output::output_success(&archived),
            None => return Err(not_found("Task", id)),
        },
        TaskAction::Restore { id } => match ctx.state.tasks.restore(id)? {
            Some(task) => output::output_success(&task),
            None => return Err(not_found("Archived task", id)),
        },
        TaskAction::Archived => {
            output::output_list(ctx.state.tasks.archived().to_vec());
        }
    }
    Ok(())
}

fn list(ctx: &CliContext, args: &TaskListArgs) -> anyhow::Result<Vec<taskmaster_domain::Task>> {
    let mut filters = TaskFilters::new();
    if let Some(category) = &args.category {
        filters = filters.with_category(CategoryFilter::parse(category));
    }

    // An explicit status wins over the show-completed preference.
    Ok(match &args.status {
        Some(status) => {
            let status: StatusFilter = status.parse()?;
            ctx.state.tasks.filter(&filters.with_status(status))
        }
        None => ctx.state.visible_tasks(&filters),
    })
}

fn build_new_task(args: TaskAddArgs) -> anyhow::Result<NewTask> {
    Ok(NewTask {
        title: args.title,
        description: args.description,
        due_date: args.due_date.as_deref().map(parse_due_date).transpose()?,
        priority: args
            .priority
            .as_deref()
            .map(str::parse::<Priority>)
            .transpose()?,
        category: args.category,
    })
}

fn build_task_update(args: TaskEditArgs) -> anyhow::Result<TaskUpdate> {
    let due_date = args.due_date.as_deref().map(parse_due_date).transpose()?;
    Ok(TaskUpdate {
        title: args.title,
        description: FieldUpdate::from_parts(args.description, args.clear_description),
        due_date: FieldUpdate::from_parts(due_date, args.clear_due_date),
        priority: args
            .priority
            .as_deref()
            .map(str::parse::<Priority>)
            .transpose()?,
        category: FieldUpdate::from_parts(args.category, args.clear_category),
    })
}
