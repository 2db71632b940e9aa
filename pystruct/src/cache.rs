//! Compiled layouts, memoized per format string.
//!
//! With the `cache` feature a process-wide map hands out shared
//! `Arc<Layout>`s. A miss compiles outside the lock; if two threads race on
//! the same format, the first insert wins and both get that layout.

use std::sync::Arc;

use struct_format::{FormatError, Layout};
use tracing::debug;

#[cfg(feature = "cache")]
use parking_lot::RwLock;
#[cfg(feature = "cache")]
use std::collections::HashMap;
#[cfg(feature = "cache")]
use std::sync::OnceLock;
#[cfg(feature = "cache")]
use tracing::trace;

fn compile(format: &str) -> Result<Layout, FormatError> {
    let layout = Layout::compile(format)?;
    debug!(
        format,
        size = layout.size(),
        items = layout.item_count(),
        big_endian = layout.is_big_endian(),
        padding = layout.mode().should_pad(),
        "compiled layout"
    );
    Ok(layout)
}

#[cfg(feature = "cache")]
type LayoutMap = RwLock<HashMap<String, Arc<Layout>>>;

#[cfg(feature = "cache")]
static LAYOUTS: OnceLock<LayoutMap> = OnceLock::new();

#[cfg(feature = "cache")]
fn layouts() -> &'static LayoutMap {
    LAYOUTS.get_or_init(Default::default)
}

/// Layout for `format`, compiled on first use.
#[cfg(feature = "cache")]
pub fn layout(format: &str) -> Result<Arc<Layout>, FormatError> {
    if let Some(layout) = layouts().read().get(format) {
        trace!(format, "layout cache hit");
        return Ok(Arc::clone(layout));
    }

    let compiled = Arc::new(compile(format)?);
    let mut map = layouts().write();
    Ok(Arc::clone(
        map.entry(format.to_owned()).or_insert(compiled),
    ))
}

/// Layout for `format`, compiled on every call.
#[cfg(not(feature = "cache"))]
pub fn layout(format: &str) -> Result<Arc<Layout>, FormatError> {
    compile(format).map(Arc::new)
}

/// Drops every memoized layout. Layouts already handed out stay valid.
#[cfg(feature = "cache")]
pub fn clear_cache() {
    layouts().write().clear();
}

#[cfg(feature = "cache")]
pub fn cached_formats() -> usize {
    layouts().read().len()
}
