use anyhow::Result;
use clap::Parser;
use committerm::{
    clipboard::SystemClipboard,
    config::AppConfig,
    fields::Fields,
    generation::{services_from_config, DiffSource, GenerationRequest, GitDiff},
    init_logging, log_debug,
    prompt::assemble,
    ui, App,
};
use std::env;

#[cfg(not(test))]
fn main() -> Result<()> {
    run_with_args(env::args_os())
}

#[cfg_attr(test, allow(dead_code))]
fn run_with_args<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let mut config = AppConfig::parse_from(args);
    config.validate()?;
    init_logging(&config);

    if config.print_prompt {
        let diff = GitDiff::new(config.repo.clone());
        print!("{}", prompt_preview(&config, &diff));
        return Ok(());
    }

    log_debug(&format!(
        "committerm {} started (model={}, lang={:?})",
        env!("CARGO_PKG_VERSION"),
        config.model.label(),
        config.lang
    ));

    let services = services_from_config(&config)?;
    let mut app = App::new(&config, services);
    let mut clipboard = SystemClipboard::new();
    let result = ui::run_app(&mut app, &mut clipboard);

    log_debug("committerm exiting");
    if let Err(ref e) = result {
        log_debug(&format!("Exit with error: {e:#}"));
    }
    result
}

/// Prompt the first generation would send with the startup field values.
fn prompt_preview(config: &AppConfig, diff: &dyn DiffSource) -> String {
    let request = GenerationRequest::from_fields(&Fields::from_config(config));
    assemble(
        &request.template,
        &request.context,
        request.language,
        &diff.staged_diff(),
    )
}
