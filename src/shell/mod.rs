// Composition root.
//
// Responsibilities:
// - Read config from the environment.
// - Instantiate the HTTP gateway to the remote time tracking service.
// - Wire the gateway into the use case handlers and serve the router.

pub mod config;
pub mod http;
pub mod state;
