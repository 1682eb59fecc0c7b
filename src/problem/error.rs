/// Reasons an instance description is rejected before any solution is built.
#[derive(Debug, thiserror::Error)]
pub enum InstanceError {
    #[error("Failed to parse instance: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Instance needs at least one {0}")]
    Empty(&'static str),

    #[error("{what} has length {actual}, expected {expected}")]
    Dimension { what: String, expected: usize, actual: usize },

    #[error("Disk {disk} starts on server {server}, but only {servers} servers exist")]
    ServerOutOfRange { disk: usize, server: usize, servers: usize },

    #[error("Disk {0} has color NONE")]
    UncoloredDisk(usize),

    #[error("{0} contains a non-finite value")]
    NonFinite(String),
}
