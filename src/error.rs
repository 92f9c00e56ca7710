#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The transport rejected the attribute write of the latest reading.
    AttributeWrite,
    /// The transport rejected the peer notification.
    Notification,
    /// A node was built without all of its collaborators.
    MissingCollaborator,
}

impl From<core::convert::Infallible> for Error {
    fn from(value: core::convert::Infallible) -> Self {
        match value {}
    }
}
