use super::backend::{
    GenerationError, GenerationMessage, GenerationRequest, JobId, ModelCall, Services,
};
use crate::prompt::{assemble, parse_temperature};
use crate::terminal_restore::WORKER_THREAD_PREFIX;
use crate::{log_debug, log_debug_content};
use crossbeam_channel::Sender;
use std::{
    io,
    panic::{self, AssertUnwindSafe},
    thread,
    time::Instant,
};

/// Diff, prompt, temperature, remote call. Runs on the worker thread.
pub fn run_generation(
    request: &GenerationRequest,
    services: &Services,
) -> Result<String, GenerationError> {
    let diff = services.diff.staged_diff();
    let prompt = assemble(&request.template, &request.context, request.language, &diff);
    let temperature = parse_temperature(&request.temperature_text);
    tracing::info!(
        temperature,
        prompt_bytes = prompt.len(),
        diff_bytes = diff.len(),
        "prompt assembled"
    );
    log_debug_content(&format!("prompt: {prompt}"));
    let call = ModelCall {
        model: request.model,
        prompt,
        temperature,
    };
    services.generator.generate(&call)
}

/// Start a detached worker. The handle is dropped on purpose: quitting must never wait on
/// an in-flight request, and the single result comes back through `tx`.
pub fn spawn_generation(
    job_id: JobId,
    request: GenerationRequest,
    services: Services,
    tx: Sender<GenerationMessage>,
) -> io::Result<()> {
    thread::Builder::new()
        .name(format!("{WORKER_THREAD_PREFIX}{job_id}"))
        .spawn(move || {
            let span = tracing::info_span!(
                "generation",
                job_id,
                model = request.model.label(),
                language = ?request.language
            );
            let _entered = span.enter();
            let started = Instant::now();
            tracing::info!("generation started");

            let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
                run_generation(&request, &services)
            }))
            .unwrap_or_else(|payload| Err(GenerationError::WorkerPanicked(panic_text(&*payload))));

            let elapsed = started.elapsed();
            match &outcome {
                Ok(text) => tracing::info!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    output_bytes = text.len(),
                    "generation finished"
                ),
                Err(err) => tracing::warn!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    phase = err.phase(),
                    error = %err,
                    "generation failed"
                ),
            }
            if tx
                .send(GenerationMessage {
                    job_id,
                    outcome,
                    elapsed,
                })
                .is_err()
            {
                log_debug(&format!("generation {job_id}: UI gone, dropping result"));
            }
        })
        .map(|_| ())
}

fn panic_text(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(text) = payload.downcast_ref::<&str>() {
        (*text).to_string()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
