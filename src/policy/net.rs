use serde::Serialize;

/// Network access granted to the target
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct NetworkPolicy {
    pub allow_client: bool,
    pub allow_server: bool,
    pub allow_local_sockets: bool,
}

impl NetworkPolicy {
    /// Build from the network flags
    ///
    /// A bare client flag is shadowed by the server flag unless `networking`
    /// (which grants both) is also set. Local sockets are independent.
    pub fn from_flags(networking: bool, client: bool, server: bool, local_sockets: bool) -> Self {
        Self {
            allow_client: networking || (client && !server),
            allow_server: networking || server,
            allow_local_sockets: local_sockets,
        }
    }
}
