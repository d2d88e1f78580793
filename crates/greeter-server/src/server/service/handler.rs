//! gRPC service implementation for `helloworld.Greeter`.
//!
//! [`GreeterService`] logs every call and delegates the reply to the
//! [`Responder`] chosen at startup. `SayHello` never returns an error.

use crate::server::{config::ServerConfig, service::responder::Responder};
use greeter_core::{
    proto::{HelloReply, HelloRequest, greeter_server::Greeter},
    types::Variant,
};
use tonic::{Request, Response, Status};

/// The greeter gRPC service.
///
/// Cheap to clone; every clone shares the same reply strategy.
#[derive(Clone, Debug)]
pub struct GreeterService {
    responder: Responder,
}

impl GreeterService {
    pub fn new(config: &ServerConfig) -> Self {
        Self::with_responder(Responder::from_config(config))
    }

    pub fn with_responder(responder: Responder) -> Self {
        Self { responder }
    }

    pub fn variant(&self) -> Variant {
        self.responder.variant()
    }
}

#[tonic::async_trait]
impl Greeter for GreeterService {
    #[tracing::instrument(skip_all, fields(variant = %self.variant()))]
    async fn say_hello(
        &self,
        req: Request<HelloRequest>,
    ) -> Result<Response<HelloReply>, Status> {
        let request = req.into_inner();
        tracing::info!("Received: {}", request.name);

        let reply = self.responder.respond(request).await;
        Ok(Response::new(reply))
    }
}
