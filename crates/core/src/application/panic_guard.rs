// Panic isolation for handler invocations
use futures::FutureExt;
use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use tracing::error;

/// Await `future`, converting a panic into `Err(panic message)`.
///
/// Keeps a faulty handler from tearing down the transport task serving the
/// request. Requires `panic = "unwind"`.
pub async fn execute_guarded<F, T>(operation: &str, future: F) -> Result<T, String>
where
    F: Future<Output = T>,
{
    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(value) => Ok(value),
        Err(panic_info) => {
            let panic_msg = panic_message(panic_info.as_ref());
            error!(operation = %operation, panic_msg = %panic_msg, "Handler panicked");
            Err(panic_msg)
        }
    }
}

fn panic_message(panic_info: &(dyn Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}
