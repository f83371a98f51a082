//! The single capability every collaborator exposes: producing one view fragment.

use anyhow::Result;

/// Produces a fresh fragment on every render pass.
///
/// Implementations own whatever state they need; the composition root only ever
/// calls [`FragmentProducer::produce`] and hands the result to the rendering host.
pub trait FragmentProducer<F> {
    fn produce(&self) -> Result<F>;
}

impl<F, P> FragmentProducer<F> for P
where
    P: Fn() -> Result<F>,
{
    fn produce(&self) -> Result<F> {
        self()
    }
}

/// Boxed, type-erased producer as stored in a composition root.
pub type BoxedProducer<F> = Box<dyn FragmentProducer<F>>;
