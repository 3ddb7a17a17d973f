use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

pub type BoxFuture = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// Runs detached background work; completions come back through the kernel bus.
pub trait AsyncExecutor: Send + Sync {
    fn spawn(&self, task: BoxFuture);
}

impl<E: AsyncExecutor + ?Sized> AsyncExecutor for Arc<E> {
    fn spawn(&self, task: BoxFuture) {
        (**self).spawn(task);
    }
}
