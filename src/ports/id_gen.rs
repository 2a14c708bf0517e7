//! ID generator port for producing unique identifiers.

/// Generates unique identifiers.
///
/// Used to name scratch files so two concurrent sessions never share a
/// template.
pub trait IdGenerator: Send + Sync {
    /// Generates a new unique identifier string.
    fn generate_id(&self) -> String;
}
