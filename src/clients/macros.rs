/// Sends one request to the store actor and waits for its reply, mapping
/// channel failures to `StoreError::ActorCommunicationError`.
///
/// ```ignore
/// let state = store_request!(self.sender, StoreRequest::GetState {})?;
/// ```
#[macro_export]
macro_rules! store_request {
    ($sender:expr, $request:ident::$variant:ident { $($field:ident),* }) => {{
        let (respond_to, response) = tokio::sync::oneshot::channel();
        match $sender
            .send($request::$variant {
                $($field,)*
                respond_to,
            })
            .await
        {
            Ok(()) => response.await.map_err(|_| {
                $crate::error::StoreError::ActorCommunicationError("Actor dropped".to_string())
            }),
            Err(_) => Err($crate::error::StoreError::ActorCommunicationError(
                "Actor closed".to_string(),
            )),
        }
    }};
}
