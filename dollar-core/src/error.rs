use crate::types::NodeId;

/// Errors raised by operations that address a node by id.
///
/// Generation itself never fails; ids only go stale when a caller keeps
/// one across a regeneration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("no node with id {0} in the current graph")]
    UnknownNode(NodeId),
}
