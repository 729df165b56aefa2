use crate::cli::CategoryAction;
use crate::context::CliContext;
use crate::output;
use super::not_found;

pub fn handle(ctx: &mut CliContext, action: CategoryAction) -> anyhow::Result<()> {
    let store = &mut ctx.state.categories;
    match action {
        CategoryAction::Add { name, color } => {
            let category = store.add(&name, &color)?;
            output::output_success(&category);
        }
        CategoryAction::List => {
            output::output_list(store.list().to_vec());
        }
        CategoryAction::Edit { id, name, color } => {
            if name.is_none() && color.is_none() {
                output::output_error("Nothing to change");
            }
            let Some(current) = store.get(&id).cloned() else {
                return Err(not_found("Category", &id));
            };
            let name = name.unwrap_or(current.name);
            let color = color.unwrap_or(current.color);
            match store.edit(&id, &name, &color)? {
                Some(category) => output::output_success(&category),
                None => return Err(not_found("Category", &id)),
            }
        }
        CategoryAction::Delete { id } => {
            if !store.delete(&id)? {
                return Err(not_found("Category", &id));
            }
            output::output_success(serde_json::json!({"deleted": id}));
        }
    }
    Ok(())
}
