use async_trait::async_trait;
use std::io;
use tokio::signal;

/// Channel used to receive OS signals
#[async_trait]
pub trait SignalChannel {
	async fn recv(&mut self) -> Option<()>;
}

#[cfg(unix)]
#[async_trait]
impl SignalChannel for signal::unix::Signal {
	async fn recv(&mut self) -> Option<()> {
		self.recv().await
	}
}

/// Channel receiving SIGTERM, or one that never fires where SIGTERM doesn't exist
#[cfg(unix)]
pub fn terminate() -> io::Result<Box<dyn SignalChannel + Send>> {
	let sigterm = signal::unix::signal(signal::unix::SignalKind::terminate())?;
	Ok(Box::new(sigterm))
}

#[cfg(not(unix))]
pub fn terminate() -> io::Result<Box<dyn SignalChannel + Send>> {
	Ok(Box::new(SigNever))
}

#[cfg(any(not(unix), test))]
use never::SigNever;

// Placeholder channel for platforms without SIGTERM
#[cfg(any(not(unix), test))]
mod never {
	use async_trait::async_trait;
	use core::{pin::Pin, marker::PhantomData};
	use std::{task::{Context, Poll}, future::Future};

	use super::SignalChannel;

	/// A Future that never resolves
	pub struct Never<T> {
		output_type: PhantomData<T>
	}

	impl<T> Never<T> {
		fn new() -> Self {
			Self {
				output_type: PhantomData
			}
		}
	}

	impl<T> Future for Never<T> {
		type Output = T;
		fn poll(self: Pin<&mut Self>, _: &mut Context<'_>) -> Poll<Self::Output> {
			Poll::Pending
		}
	}

	/// A SignalChannel that never fires
	pub struct SigNever;

	#[async_trait]
	impl SignalChannel for SigNever {
		async fn recv(&mut self) -> Option<()> {
			Never::<Option<()>>::new().await
		}
	}
}
