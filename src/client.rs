//! Client facade shared by every operation.

// self
use crate::{
	_prelude::*,
	auth::Target,
	dispatch::Dispatcher,
	envelope::FromEnvelope,
	error::ConfigError,
	http::Transport,
	obs::{self, OperationOutcome, OperationSpan},
	operation::Operation,
	request::RequestDescriptor,
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestTransport;

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestBuzzyClient = Client<ReqwestTransport>;

/// Executes Buzzy API operations over a [`Transport`].
///
/// A client holds no session state: the base address and credential travel with every call
/// through a [`Target`]. The same operations are available in two forms:
///
/// - unthrottled, on a client built with [`Client::with_transport`] (or [`Client::new`]);
/// - throttled, on the view returned by [`Client::throttled`], which routes every call through a
///   shared [`Dispatcher`].
///
/// Production call volume should go through a throttled view; all views cloned from the same
/// dispatcher share one queue.
pub struct Client<T>
where
	T: ?Sized + Transport,
{
	transport: Arc<T>,
	dispatcher: Option<Dispatcher>,
}
impl<T> Client<T>
where
	T: ?Sized + Transport,
{
	/// Creates an unthrottled client over the provided transport.
	pub fn with_transport(transport: impl Into<Arc<T>>) -> Self {
		Self { transport: transport.into(), dispatcher: None }
	}

	/// Returns a view of this client whose calls go through `dispatcher`.
	pub fn throttled(&self, dispatcher: &Dispatcher) -> Self {
		Self { transport: Arc::clone(&self.transport), dispatcher: Some(dispatcher.clone()) }
	}

	/// Returns a view of this client that calls the transport directly.
	pub fn unthrottled(&self) -> Self {
		Self { transport: Arc::clone(&self.transport), dispatcher: None }
	}

	/// Returns the dispatcher this view is bound to, if any.
	pub fn dispatcher(&self) -> Option<&Dispatcher> {
		self.dispatcher.as_ref()
	}

	/// Returns the shared transport.
	pub fn transport(&self) -> &Arc<T> {
		&self.transport
	}

	/// Executes an authenticated operation with `payload` as its JSON body.
	pub async fn call<O, P>(
		&self,
		operation: &'static Operation<O>,
		target: &Target,
		payload: &P,
	) -> Result<O>
	where
		O: FromEnvelope,
		P: ?Sized + Serialize,
	{
		let body = serde_json::to_value(payload)
			.map_err(|source| ConfigError::Payload { operation: operation.name, source })?;
		let Target { base, credential } = target;
		let request = RequestDescriptor::authenticated(credential, base, operation.path, body);
		let transport = Arc::clone(&self.transport);

		self.run(operation.name, async move {
			let span = OperationSpan::new(operation.name, "execute");

			obs::record_operation_outcome(operation.name, OperationOutcome::Attempt);

			span.instrument(async move {
				let outcome = transport.send(request).await.map_err(Error::from);

				operation.normalize(outcome)
			})
			.await
		})
		.await
	}

	/// Runs `fut` directly or through the bound dispatcher.
	pub(crate) async fn run<Fut, R>(&self, operation: &'static str, fut: Fut) -> Result<R>
	where
		Fut: 'static + Send + Future<Output = Result<R>>,
		R: 'static + Send,
	{
		match &self.dispatcher {
			Some(dispatcher) => dispatcher.submit(operation, fut).await?,
			None => fut.await,
		}
	}
}
#[cfg(feature = "reqwest")]
impl Client<ReqwestTransport> {
	/// Creates an unthrottled client backed by a default reqwest transport.
	pub fn new() -> Self {
		Self::with_transport(ReqwestTransport::default())
	}
}
#[cfg(feature = "reqwest")]
impl Default for Client<ReqwestTransport> {
	fn default() -> Self {
		Self::new()
	}
}
impl<T> Clone for Client<T>
where
	T: ?Sized + Transport,
{
	fn clone(&self) -> Self {
		Self { transport: Arc::clone(&self.transport), dispatcher: self.dispatcher.clone() }
	}
}
impl<T> Debug for Client<T>
where
	T: ?Sized + Transport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Client").field("dispatcher", &self.dispatcher).finish()
	}
}
