use tracing::info;

use crate::cli::ApiArgs;
use crate::error::CliError;

pub(crate) fn list(api: &ApiArgs) -> Result<(), CliError> {
    let client = api.client()?;
    let contexts = client.list_contexts()?;

    info!(count = contexts.len(), "listed contexts");

    for context in contexts {
        println!("{}\t{}", context.id, context.name);
    }

    Ok(())
}

pub(crate) fn open(api: &ApiArgs, context_id: &str) -> Result<(), CliError> {
    let client = api.client()?;
    let session = client.open_session(context_id)?;

    info!(context = %context_id, session = %session.session_id, "opened a session");
    println!("{}", session.session_id);

    Ok(())
}
