//! Player identity established before the session starts.
//!
//! - [`PlayerName`] — validated display name
//! - [`NameStore`] — best-effort persistence ([`FileStore`], [`MemoryStore`])
//! - [`Prompt`] — interactive entry that re-prompts on invalid input
mod name;
mod prompt;
mod store;

pub use name::*;
pub use prompt::*;
pub use store::*;

/// Blocks until a valid name is known.
///
/// A previously stored name wins. Otherwise the prompt is asked until it
/// returns something valid, and the result is persisted. Storage failures
/// are logged and otherwise ignored.
pub fn obtain<S, P>(store: &mut S, prompt: &mut P) -> anyhow::Result<PlayerName>
where
    S: NameStore + ?Sized,
    P: Prompt + ?Sized,
{
    if let Some(name) = store.load() {
        match PlayerName::try_from(name) {
            Ok(name) => {
                log::info!("[identity] playing as stored name {}", name);
                return Ok(name);
            }
            Err(e) => log::warn!("[identity] ignoring stored name: {}", e),
        }
    }
    let mut error = None;
    let name = loop {
        match PlayerName::try_from(prompt.ask(error.as_ref())?) {
            Ok(name) => break name,
            Err(e) => {
                log::debug!("[identity] refused name: {}", e);
                error = Some(e);
            }
        }
    };
    store
        .save(name.as_str())
        .inspect_err(|e| log::warn!("[identity] name not persisted: {}", e))
        .ok();
    log::info!("[identity] playing as {}", name);
    Ok(name)
}
