use serde_json::Value;
use tracing::info;

use crate::cli::ApiArgs;
use crate::cli::ChatArgs;
use crate::error::CliError;

// Checked in order.
const REPLY_FIELDS: [&str; 4] = ["response", "reply", "answer", "message"];

pub(crate) fn chat(api: &ApiArgs, args: ChatArgs) -> Result<(), CliError> {
    let client = api.client()?;

    info!(session = %args.session, "sending a chat message");
    let body = client.chat(&args.session, &args.message)?;

    match reply_text(&body) {
        Some(reply) => println!("{reply}"),
        None => println!("{}", serde_json::to_string_pretty(&body)?),
    }

    Ok(())
}

fn reply_text(body: &Value) -> Option<&str> {
    REPLY_FIELDS
        .iter()
        .find_map(|field| body.get(field).and_then(Value::as_str))
}
