use std::{future::Future, marker::PhantomData};

use dioxus::{
    hooks::{use_context, use_context_provider, use_resource, Resource},
    signals::{ReadableExt, Signal, WritableExt},
};

/// Refresh trigger shared between a list and the rows that change it.
pub struct Refresh<T: 'static> {
    signal: Signal<()>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: 'static> Clone for Refresh<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for Refresh<T> {}

impl<T: 'static> Refresh<T> {
    /// Re-run the resource that provided this trigger.
    pub fn trigger(mut self) {
        self.signal.set(());
    }
}

/// `use_resource` that also provides a [`Refresh<T>`] to descendants, so a
/// row can reload the list it belongs to (e.g. after completing a post).
///
/// ```rust,ignore
/// let posts: Resource<Result<Vec<Post>, ApiError>> =
///     use_refreshable_resource(move || async move { auth.client().my_posts().await });
///
/// // in a child
/// let refresh = use_refresh_resource::<Result<Vec<Post>, ApiError>>();
/// refresh.trigger();
/// ```
pub fn use_refreshable_resource<T, F>(mut future: impl FnMut() -> F + 'static) -> Resource<T>
where
    T: 'static,
    F: Future<Output = T> + 'static,
{
    let refresh = use_context_provider(|| Refresh::<T> {
        signal: Signal::new(()),
        _marker: PhantomData,
    });
    use_resource(move || {
        refresh.signal.read();
        future()
    })
}

/// See [`use_refreshable_resource`].
pub fn use_refresh_resource<T: 'static>() -> Refresh<T> {
    use_context::<Refresh<T>>()
}
