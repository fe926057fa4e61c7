//! Transform tag contract.

use std::io::Write;

use crate::error::RenderError;
use crate::params::Params;

/// A template construct that wraps the output sink.
///
/// The evaluator hands the current sink to [`wrap`](Self::wrap) and streams
/// the nested content through the returned writer. Flushing any buffered
/// state belongs in the returned writer's `flush`; the evaluator flushes it
/// when the nested block ends.
///
/// # Thread Safety
///
/// Implementations are `Send + Sync`: the tag itself is shared, while the
/// returned writer is per-invocation and may hold mutable state.
///
/// # Example
///
/// ```
/// use std::io::Write;
/// use vellum_model::{Params, RenderError, TransformTag};
///
/// /// Upper-cases everything streamed through it.
/// struct Upper;
///
/// impl TransformTag for Upper {
///     fn wrap<'w>(
///         &self,
///         out: Box<dyn Write + 'w>,
///         _params: &Params,
///     ) -> Result<Box<dyn Write + 'w>, RenderError> {
///         struct UpperWriter<'w> {
///             inner: Box<dyn Write + 'w>,
///         }
///
///         impl Write for UpperWriter<'_> {
///             fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
///                 let upper: Vec<u8> = buf.iter().map(u8::to_ascii_uppercase).collect();
///                 self.inner.write_all(&upper)?;
///                 Ok(buf.len())
///             }
///
///             fn flush(&mut self) -> std::io::Result<()> {
///                 self.inner.flush()
///             }
///         }
///
///         Ok(Box::new(UpperWriter { inner: out }))
///     }
/// }
///
/// let mut out = Vec::new();
/// let mut filtered = Upper.wrap(Box::new(&mut out), &Params::new()).unwrap();
/// filtered.write_all(b"nested content").unwrap();
/// drop(filtered);
///
/// assert_eq!(out, b"NESTED CONTENT");
/// ```
pub trait TransformTag: Send + Sync {
    /// Wrap `out`, returning the writer nested content is streamed through.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when the transform cannot be set up, e.g. a
    /// parameter has the wrong type.
    fn wrap<'w>(
        &self,
        out: Box<dyn Write + 'w>,
        params: &Params,
    ) -> Result<Box<dyn Write + 'w>, RenderError>;
}
