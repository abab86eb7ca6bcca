use std::fs;
use std::path::Path;

use opsboard_dashboard::DashboardPayload;
use opsboard_dashboard::error::PayloadError;
use opsboard_vis::layout::ReportLayout;
use tracing::info;

use crate::cli::ApiArgs;
use crate::cli::PathExt;
use crate::cli::Source;
use crate::cli::ViewArgs;
use crate::error::CliError;

pub(crate) fn view(api: &ApiArgs, args: ViewArgs) -> Result<(), CliError> {
    let output_path = args.output_path.clone().or_current_dir()?;
    let (default_title, json) = load_payload(api, &args.source)?;
    let payload = DashboardPayload::from_json(&json)?;
    let title = args.title.unwrap_or(default_title);

    info!(
        output_path = %output_path.display(),
        "opsboard generates the dashboard report"
    );

    let layout = ReportLayout::init(&output_path)?;

    if args.save_payload {
        let path = layout.save_payload(&json)?;
        info!(path = %path.display(), "saved the dashboard payload");
    }

    let report = layout.generate_report(&title, &payload)?;
    println!("{}", report.index_file_path.display());

    Ok(())
}

/// Returns the default page title and the payload JSON as it was read.
fn load_payload(api: &ApiArgs, source: &Source) -> Result<(String, String), CliError> {
    let session_id = match source {
        Source::Input(input) => {
            info!(input = %input.display(), "reading the dashboard payload");
            let json = fs::read_to_string(input).map_err(PayloadError::from)?;
            return Ok((input_title(input), json));
        }
        Source::Session(session_id) => session_id.clone(),
        Source::Context(context_id) => {
            let session = api.client()?.open_session(context_id)?;
            info!(context = %context_id, session = %session.session_id, "opened a session");
            session.session_id.to_string()
        }
    };

    info!(session = %session_id, "fetching the dashboard");
    let json = api.client()?.dashboard_json(&session_id)?;

    Ok((format!("Session {session_id}"), json))
}

fn input_title(input: &Path) -> String {
    input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("Dashboard"))
}
