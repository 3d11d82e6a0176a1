//! Checks on beacon blocks that decide whether a blobs sidecar has to be looked at.
//!
//! Block types live outside of this crate, they are accessed through the
//! [`BeaconBlock`] and [`SignedBeaconBlock`] traits.
use crate::{errors::BlockError, BlobsSidecar, Error, KZGCommitment};

/// The consensus forks, in activation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ForkName {
    Phase0,
    Altair,
    Bellatrix,
    Capella,
    Eip4844,
}

impl ForkName {
    /// Blocks of these forks have no `blob_kzg_commitments` field.
    pub const fn is_pre_eip4844(self) -> bool {
        !matches!(self, Self::Eip4844)
    }
}

/// Read access to the parts of a beacon block that relate to blobs.
pub trait BeaconBlock {
    /// The fork the block was produced at.
    fn fork(&self) -> ForkName;

    /// The commitments listed in the block body.
    ///
    /// Blocks that do not have the field return an error.
    fn blob_kzg_commitments(&self) -> Result<&[KZGCommitment], BlockError>;
}

/// A signed beacon block, possibly bundled with its blobs sidecar.
pub trait SignedBeaconBlock {
    type Block: BeaconBlock;

    fn block(&self) -> &Self::Block;

    /// The sidecar that was received together with the block, if any.
    fn sidecar(&self) -> Result<Option<&BlobsSidecar>, BlockError>;
}

/// Returns whether the block commits to at least one blob.
///
/// Blocks from forks before EIP-4844 never do and are not asked for their commitments.
pub fn block_declares_commitments<B: BeaconBlock + ?Sized>(block: &B) -> Result<bool, Error> {
    if block.fork().is_pre_eip4844() {
        return Ok(false);
    }

    Ok(!block.blob_kzg_commitments()?.is_empty())
}

/// Returns whether the block commits to blobs and came with a sidecar carrying them.
pub fn block_has_sidecar<S: SignedBeaconBlock + ?Sized>(signed_block: &S) -> Result<bool, Error> {
    if !block_declares_commitments(signed_block.block())? {
        return Ok(false);
    }

    Ok(signed_block.sidecar()?.is_some())
}
