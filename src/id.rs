use core::fmt::Debug;

/// A trait representing a node identifier of the host graph (e.g. an OSM node id).
pub trait Id: Copy + Ord + Debug {}

impl<T> Id for T where T: Copy + Ord + Debug {}
