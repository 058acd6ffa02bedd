//! Status command implementation

use serde::Serialize;

use super::helpers::Session;
use crate::cli::GlobalArgs;
use crate::config::{ConfigProbe, Manifest, ManifestStore};
use crate::error::Result;
use crate::ui::display;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusOutput<'a> {
    config_dir: &'a std::path::Path,
    #[serde(flatten)]
    probe: ConfigProbe,
    manifest: Option<&'a Manifest>,
}

/// Run status command
pub fn run(global: &GlobalArgs) -> Result<()> {
    let session = Session::open(global)?;
    let probe = session.paths.probe();
    let manifest = ManifestStore::new(&session.paths.config_dir).load_or_default();
    let manifest = session.paths.manifest_path.exists().then_some(&manifest);

    if session.json {
        return display::print_json(&StatusOutput {
            config_dir: &session.paths.config_dir,
            probe,
            manifest,
        });
    }

    display::print_status(&session.paths, &probe, manifest);
    Ok(())
}
