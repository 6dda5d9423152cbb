//! `boxbuddy create` — create a box from a base image.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::offload::offload;
use crate::application::ports::{CapturedOutput, CreateSpec};
use crate::application::services::containers::{self, CreateOutcome};
use crate::commands::{CreateArgs, wait_with_spinner};
use crate::domain::error::BoxError;
use crate::domain::listing::image_from_label;
use crate::domain::naming::sanitize_box_name;

/// Run the create command.
///
/// distrobox output is shown as-is; failures inside it are not detected.
///
/// # Errors
///
/// Returns an error if the name or image is empty, or distrobox cannot be run.
pub async fn run(app: &AppContext, args: &CreateArgs) -> Result<ExitCode> {
    let name = sanitize_box_name(&args.name)?;
    let image = image_from_label(&args.image).to_string();
    if image.is_empty() {
        return Err(BoxError::EmptyImage.into());
    }
    let init = args.init || app.config.create.init;

    let gw = app.gateway.clone();
    let (task_name, task_image) = (name.clone(), image.clone());
    let pending = offload(async move {
        containers::ensure_distrobox(&gw).await?;
        let spec = CreateSpec {
            name: &task_name,
            image: &task_image,
        };
        containers::create_container(&gw, &spec, init).await
    });
    let outcome = wait_with_spinner(
        app,
        &format!("Creating {name} from {image}..."),
        &format!("Created {name}"),
        pending,
    )
    .await?;

    if app.is_json() {
        print_json(&name, &image, &outcome)?;
    } else {
        app.output.raw(&outcome.create.stderr);
        app.output.raw(&outcome.create.stdout);
        if let Some(init) = &outcome.init {
            app.output.info("Initialised box");
            app.output.raw(&init.stderr);
            app.output.raw(&init.stdout);
        }
        app.output.info(&format!("Enter it with: boxbuddy enter {name}"));
    }
    Ok(ExitCode::SUCCESS)
}

fn print_json(name: &str, image: &str, outcome: &CreateOutcome) -> Result<()> {
    let streams = |out: &CapturedOutput| {
        serde_json::json!({ "stdout": out.stdout, "stderr": out.stderr })
    };
    let value = serde_json::json!({
        "name": name,
        "image": image,
        "create": streams(&outcome.create),
        "init": outcome.init.as_ref().map(streams),
    });
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
