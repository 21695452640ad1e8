pub(crate) mod find;
pub(crate) mod init;
pub(crate) mod purge;

pub use find::FindOutcome;
pub use init::InitOutcome;
pub use purge::PurgeOutcome;
